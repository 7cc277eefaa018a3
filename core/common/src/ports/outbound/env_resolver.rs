//! 環境変数解決 Outbound ポート
//!
//! usecase / 設定解決はこの trait 経由でのみ環境変数にアクセスする。

/// 環境変数解決抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdEnvResolver` やテスト用の `MapEnvResolver`。
pub trait EnvResolver: Send + Sync {
    /// 環境変数を取得する。未設定または空文字のときは None
    fn var(&self, name: &str) -> Option<String>;
}
