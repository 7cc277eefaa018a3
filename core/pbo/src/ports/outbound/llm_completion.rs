//! 単発 LLM 完了の Outbound ポート
//!
//! system + user を 1 回送り、応答本文を全文で受け取る。リトライ・ストリーミングはしない。

use common::error::Error;

/// 単発の LLM 完了
pub trait LlmCompletion {
    /// 通信・認証・レート制限・非 2xx の失敗は `Error::Service`
    fn complete(&self, system_instruction: &str, user_message: &str) -> Result<String, Error>;

    /// ログ用のモデル名
    fn model(&self) -> &str;
}
