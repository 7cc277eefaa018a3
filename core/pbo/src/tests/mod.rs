//! ユースケース単位のテスト（スタブ LLM と一時ディレクトリで実行する）

mod diagnose_tests;
mod run_app_tests;

use crate::adapter::JsonFileRecordStore;
use chrono::{DateTime, FixedOffset, TimeZone};
use common::adapter::{FixedClock, MemoryLog, StdFileSystem};
use std::path::Path;
use std::sync::Arc;

/// 2024-01-01 12:00:00 +09:00
pub(crate) fn noon() -> DateTime<FixedOffset> {
    FixedOffset::east_opt(9 * 3600)
        .unwrap()
        .with_ymd_and_hms(2024, 1, 1, 12, 0, 0)
        .unwrap()
}

/// 一時ディレクトリに保存する実ファイルストア
pub(crate) fn file_store(
    dir: &Path,
    at: DateTime<FixedOffset>,
    log: Arc<MemoryLog>,
) -> Arc<JsonFileRecordStore> {
    Arc::new(JsonFileRecordStore::new(
        Arc::new(StdFileSystem),
        Arc::new(FixedClock::new(at)),
        log,
        dir,
    ))
}
