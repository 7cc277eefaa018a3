//! Ports & Adapters のポート定義
//!
//! - inbound: CLI がアプリを呼び出すインターフェース
//! - outbound: usecase が LLM・記録ストアに依頼するための trait

pub mod inbound;
pub mod outbound;
