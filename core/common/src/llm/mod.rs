//! LLMドライバーとプロバイダの実装
//!
//! プロバイダ（OpenAI Chat Completions 互換など）ごとの差異を LlmProvider に閉じ込め、
//! LlmDriver が「ペイロード生成 → HTTP → 本文抽出」の共通手順を担う。

pub mod driver;
pub mod openai_compat;
pub mod provider;

pub use driver::LlmDriver;
pub use openai_compat::OpenAiCompatProvider;
pub use provider::LlmProvider;
