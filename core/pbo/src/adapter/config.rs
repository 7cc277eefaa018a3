//! 診断の実行設定（環境変数 + CLI 指定から解決）
//!
//! API キーやクライアントはグローバルに持たず、ここで解決した値を wiring で注入する。

use common::error::Error;
use common::ports::outbound::EnvResolver;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const ENV_API_KEY: &str = "OPENAI_API_KEY";
pub const ENV_MODEL: &str = "PBO_MODEL";
pub const ENV_BASE_URL: &str = "PBO_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "PBO_TIMEOUT_SECS";
pub const ENV_OUTPUT_DIR: &str = "PBO_OUTPUT_DIR";
pub const ENV_LOG_FILE: &str = "PBO_LOG_FILE";

pub const DEFAULT_MODEL: &str = "gpt-5-mini";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_OUTPUT_DIR: &str = "outputs";
pub const DEFAULT_LOG_FILE: &str = "logs/pbo.jsonl";

/// 診断は一貫性を優先して低温度で固定
pub const DIAGNOSIS_TEMPERATURE: f64 = 0.3;

#[derive(Clone, PartialEq)]
pub struct DiagnosisConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub temperature: f64,
    pub timeout: Duration,
    pub output_dir: PathBuf,
    pub log_file: PathBuf,
}

impl DiagnosisConfig {
    /// 環境変数から解決し、CLI の指定（model / output_dir）で上書きする
    pub fn resolve(
        env: &dyn EnvResolver,
        model: Option<&str>,
        output_dir: Option<&Path>,
    ) -> Result<Self, Error> {
        let timeout_secs = match env.var(ENV_TIMEOUT_SECS) {
            Some(s) => s.trim().parse::<u64>().ok().filter(|n| *n > 0).ok_or_else(|| {
                Error::configuration(format!(
                    "{} must be a positive integer (got '{}')",
                    ENV_TIMEOUT_SECS, s
                ))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            api_key: env.var(ENV_API_KEY),
            model: model
                .map(str::to_string)
                .or_else(|| env.var(ENV_MODEL))
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: env
                .var(ENV_BASE_URL)
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            temperature: DIAGNOSIS_TEMPERATURE,
            timeout: Duration::from_secs(timeout_secs),
            output_dir: output_dir
                .map(Path::to_path_buf)
                .or_else(|| env.var(ENV_OUTPUT_DIR).map(PathBuf::from))
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
            log_file: env
                .var(ENV_LOG_FILE)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE)),
        })
    }

    /// 診断の前に必ず呼ぶ。キーが無ければ LLM へは何も送らない
    pub fn require_api_key(&self) -> Result<&str, Error> {
        self.api_key.as_deref().ok_or_else(|| {
            Error::configuration(format!(
                "{} が見つかりません。環境変数または .env を確認してください。",
                ENV_API_KEY
            ))
        })
    }
}

impl fmt::Debug for DiagnosisConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagnosisConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("temperature", &self.temperature)
            .field("timeout", &self.timeout)
            .field("output_dir", &self.output_dir)
            .field("log_file", &self.log_file)
            .finish()
    }
}
