//! 時刻取得 Outbound ポート
//!
//! usecase はこの trait 経由で「現在時刻」を取得し、記録のファイル名と created_at に使う。

use chrono::{DateTime, FixedOffset};

/// 時刻取得の抽象
///
/// 実装は `common::adapter::StdClock` やテスト用の `FixedClock`。
pub trait Clock: Send + Sync {
    /// 現在時刻（ローカルのオフセット付き）
    fn now(&self) -> DateTime<FixedOffset>;
}
