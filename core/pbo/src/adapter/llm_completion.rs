//! 単発 LLM 完了の標準実装（LlmDriver で 1 往復し、応答本文を返す）

use common::error::Error;
use common::llm::{LlmDriver, LlmProvider, OpenAiCompatProvider};

use super::config::DiagnosisConfig;
use crate::ports::outbound::LlmCompletion;

/// LlmDriver に委譲する LlmCompletion 実装
pub struct DriverLlmCompletion<P: LlmProvider> {
    driver: LlmDriver<P>,
}

impl<P: LlmProvider> DriverLlmCompletion<P> {
    pub fn new(provider: P) -> Self {
        Self {
            driver: LlmDriver::new(provider),
        }
    }
}

impl DriverLlmCompletion<OpenAiCompatProvider> {
    /// 設定から OpenAI 互換プロバイダを組み立てる。API キーが無ければ Configuration エラー
    pub fn from_config(config: &DiagnosisConfig) -> Result<Self, Error> {
        let api_key = config.require_api_key()?.to_string();
        let provider = OpenAiCompatProvider::new(
            Some(config.model.clone()),
            Some(config.base_url.clone()),
            Some(api_key),
            Some(config.temperature),
            Some(config.timeout),
        )?;
        Ok(Self::new(provider))
    }
}

impl<P: LlmProvider> LlmCompletion for DriverLlmCompletion<P> {
    fn complete(&self, system_instruction: &str, user_message: &str) -> Result<String, Error> {
        self.driver
            .query(user_message, Some(system_instruction))
            .map_err(|e| match e {
                Error::Service(_) => e,
                other => Error::service(other.to_string()),
            })
    }

    fn model(&self) -> &str {
        self.driver.provider().model()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::adapter::MapEnvResolver;
    use std::net::TcpListener;

    #[test]
    fn test_from_config_requires_api_key() {
        let cfg = DiagnosisConfig::resolve(&MapEnvResolver::new(), None, None).unwrap();
        let err = DriverLlmCompletion::from_config(&cfg).err().unwrap();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_unreachable_endpoint_is_service_error() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let env = MapEnvResolver::new()
            .with("OPENAI_API_KEY", "sk-test")
            .with("PBO_BASE_URL", &format!("http://{}", addr))
            .with("PBO_TIMEOUT_SECS", "5");
        let cfg = DiagnosisConfig::resolve(&env, None, None).unwrap();
        let llm = DriverLlmCompletion::from_config(&cfg).unwrap();
        assert_eq!(llm.model(), "gpt-5-mini");
        let err = llm.complete("system", "user").unwrap_err();
        assert!(matches!(err, Error::Service(_)), "{:?}", err);
    }
}
