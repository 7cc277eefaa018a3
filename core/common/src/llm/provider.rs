//! LLMプロバイダのトレイト定義

use crate::error::Error;
use serde_json::Value;

/// LLMプロバイダのトレイト
///
/// 1 回の system + user メッセージを送り、応答本文を 1 つ受け取る単発の契約。
pub trait LlmProvider {
    /// プロバイダ名を返す
    fn name(&self) -> &str;

    /// モデル名を返す（ログ用）
    fn model(&self) -> &str;

    /// リクエストペイロードを生成
    ///
    /// # Arguments
    /// * `query` - ユーザーメッセージ
    /// * `system_instruction` - システム指示（オプション）
    fn make_request_payload(
        &self,
        query: &str,
        system_instruction: Option<&str>,
    ) -> Result<Value, Error>;

    /// HTTPリクエストを実行してレスポンスを取得
    ///
    /// 通信失敗・非 2xx は `Error::Service` で返す。
    fn make_http_request(&self, request_json: &str) -> Result<String, Error>;

    /// レスポンスからテキストを抽出
    ///
    /// # Returns
    /// * `Ok(Some(String))` - 応答本文
    /// * `Ok(None)` - 本文が無い
    /// * `Err(Error)` - レスポンス自体が API エラーを示す、または JSON として壊れている
    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error>;
}
