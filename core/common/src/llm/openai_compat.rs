//! OpenAI Chat Completions 互換 (/chat/completions) プロバイダ
//!
//! base_url で任意のエンドポイントを指定可能。非ストリーミングの 1 往復のみ扱う。

use crate::error::Error;
use crate::llm::provider::LlmProvider;
use serde_json::{json, Value};
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-5-mini";
const DEFAULT_TEMPERATURE: f64 = 0.7;
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// OpenAI Chat Completions 互換プロバイダ
pub struct OpenAiCompatProvider {
    model: String,
    base_url: String,
    api_key: Option<String>,
    temperature: f64,
    client: reqwest::blocking::Client,
}

impl OpenAiCompatProvider {
    /// 新しいプロバイダを作成
    ///
    /// * `model` - モデル名（None のとき DEFAULT_MODEL）
    /// * `base_url` - ベース URL（None のとき DEFAULT_BASE_URL）
    /// * `api_key` - API キー（None のとき Authorization を付けない）
    /// * `temperature` - 温度（None のとき DEFAULT_TEMPERATURE）
    /// * `timeout` - 通信タイムアウト（None のとき DEFAULT_TIMEOUT）
    pub fn new(
        model: Option<String>,
        base_url: Option<String>,
        api_key: Option<String>,
        temperature: Option<f64>,
        timeout: Option<Duration>,
    ) -> Result<Self, Error> {
        let model = model.unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let temperature = temperature.unwrap_or(DEFAULT_TEMPERATURE);
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()
            .map_err(|e| Error::service(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            model,
            base_url,
            api_key,
            temperature,
            client,
        })
    }

    fn url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    fn auth_header(&self) -> Option<String> {
        self.api_key.as_ref().map(|key| format!("Bearer {}", key))
    }
}

/// エラーレスポンス本文から利用者向けのメッセージを取り出す
fn error_message(status: reqwest::StatusCode, response_text: &str) -> String {
    serde_json::from_str::<Value>(response_text)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(|s| s.to_string()))
        .unwrap_or_else(|| format!("HTTP {}: {}", status, response_text))
}

impl LlmProvider for OpenAiCompatProvider {
    fn name(&self) -> &str {
        "openai_compat"
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn make_request_payload(
        &self,
        query: &str,
        system_instruction: Option<&str>,
    ) -> Result<Value, Error> {
        let mut messages: Vec<Value> = Vec::new();
        if let Some(s) = system_instruction {
            messages.push(json!({ "role": "system", "content": s }));
        }
        messages.push(json!({ "role": "user", "content": query }));

        Ok(json!({
            "model": self.model,
            "messages": messages,
            "temperature": self.temperature,
            "stream": false
        }))
    }

    fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
        let mut builder = self
            .client
            .post(self.url())
            .header("Content-Type", "application/json")
            .body(request_json.to_string());

        if let Some(auth) = self.auth_header() {
            builder = builder.header("Authorization", auth);
        }

        let response = builder
            .send()
            .map_err(|e| Error::service(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let response_text = response
            .text()
            .map_err(|e| Error::service(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(Error::service(format!(
                "Chat completions error: {}",
                error_message(status, &response_text)
            )));
        }

        Ok(response_text)
    }

    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error> {
        let v: Value = serde_json::from_str(response_json)
            .map_err(|e| Error::service(format!("Failed to parse response JSON: {}", e)))?;

        if let Some(err) = v.get("error") {
            let msg = err["message"].as_str().unwrap_or("Unknown error");
            return Err(Error::service(format!("API error: {}", msg)));
        }

        let text = v["choices"][0]["message"]["content"]
            .as_str()
            .map(|s| s.to_string());
        Ok(text)
    }
}
