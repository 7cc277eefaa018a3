//! ユースケース層（ポート経由でのみ外界に触れる）

pub mod diagnose;
pub mod history;

pub use diagnose::{Diagnosis, DiagnoseUseCase};
pub use history::HistoryUseCase;
