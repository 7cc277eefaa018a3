//! 標準時刻実装（chrono::Local を委譲）とテスト用の固定時刻

use crate::ports::outbound::Clock;
use chrono::{DateTime, FixedOffset, Local};

/// システムのローカル時刻を返す Clock 実装
#[derive(Debug, Clone, Default)]
pub struct StdClock;

impl Clock for StdClock {
    fn now(&self) -> DateTime<FixedOffset> {
        let now = Local::now();
        now.with_timezone(now.offset())
    }
}

/// 常に同じ時刻を返す Clock 実装（テスト用）
#[derive(Debug, Clone)]
pub struct FixedClock {
    at: DateTime<FixedOffset>,
}

impl FixedClock {
    pub fn new(at: DateTime<FixedOffset>) -> Self {
        Self { at }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.at
    }
}
