//! アダプター（外界の I/O を trait で抽象化）
//!
//! usecase は ports の trait 経由でのみファイル・時刻・環境変数・ログに触れる。
//! 実装は標準実装（Std*）やテスト用のモックを注入する。

pub mod file_json_log;
pub mod std_clock;
pub mod std_env_resolver;
pub mod std_fs;
pub mod stderr_log;

pub use crate::ports::outbound::{Clock, EnvResolver, FileSystem, Log};
pub use file_json_log::{FileJsonLog, MemoryLog, NoopLog};
pub use std_clock::{FixedClock, StdClock};
pub use std_env_resolver::{MapEnvResolver, StdEnvResolver};
pub use std_fs::StdFileSystem;
pub use stderr_log::{StderrLog, TeeLog};
