//! 冗長モード用: ログを stderr にも出す Log 実装

use crate::error::Error;
use crate::ports::outbound::{Log, LogRecord};
use std::sync::Arc;

/// 1 レコードを 1 行に整形して stderr に出す
#[derive(Debug, Clone, Default)]
pub struct StderrLog;

impl StderrLog {
    fn format(record: &LogRecord) -> String {
        let mut line = format!("[{}] {}", record.level.as_str(), record.message);
        if let Some(layer) = &record.layer {
            line.push_str(&format!(" layer={}", layer));
        }
        if let Some(kind) = &record.kind {
            line.push_str(&format!(" kind={}", kind));
        }
        if let Some(fields) = &record.fields {
            for (k, v) in fields {
                line.push_str(&format!(" {}={}", k, v));
            }
        }
        line
    }
}

impl Log for StderrLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        eprintln!("{}", Self::format(record));
        Ok(())
    }
}

/// 複数の Log に同じレコードを渡す。途中で失敗しても残りには書き、最初のエラーを返す。
pub struct TeeLog {
    sinks: Vec<Arc<dyn Log>>,
}

impl TeeLog {
    pub fn new(sinks: Vec<Arc<dyn Log>>) -> Self {
        Self { sinks }
    }
}

impl Log for TeeLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        let mut first_err = None;
        for sink in &self.sinks {
            if let Err(e) = sink.log(record) {
                first_err.get_or_insert(e);
            }
        }
        match first_err {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
