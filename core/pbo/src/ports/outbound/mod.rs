//! Outbound ポート: usecase が外界（LLM・記録ストア）を使うための trait

pub mod llm_completion;
pub mod record_store;

pub use llm_completion::LlmCompletion;
pub use record_store::RecordStore;
