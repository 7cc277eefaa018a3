//! アダプター（Outbound ポートの実装と設定解決）

pub mod config;
pub mod llm_completion;
pub mod record_store;
mod stub_llm;

pub use config::DiagnosisConfig;
pub use llm_completion::DriverLlmCompletion;
pub use record_store::JsonFileRecordStore;
#[cfg(test)]
pub use stub_llm::StubLlm;
