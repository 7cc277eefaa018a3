//! エラーハンドリング
//!
//! 全レイヤー共通のエラー型。バリアントごとに終了コード（sysexits.h 準拠）を持つ。

/// エラー型
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// 引数不正（usage を表示する）
    #[error("{0}")]
    InvalidArgument(String),
    /// 入力（トピック・説明文）の検証エラー
    #[error("{0}")]
    Validation(String),
    /// 必須設定（API キー等）の欠落・不正
    #[error("Configuration error: {0}")]
    Configuration(String),
    /// LLM サービスとの通信エラー（ネットワーク・認証・レート制限・非 2xx）
    #[error("LLM service error: {0}")]
    Service(String),
    /// LLM の応答が JSON オブジェクトとして解釈できない
    #[error("Failed to parse LLM reply: {reason}")]
    Parse { reason: String, raw: String },
    /// 記録の保存に失敗
    #[error("Failed to save record: {0}")]
    Storage(String),
    #[error("{0}")]
    Io(String),
    #[error("{0}")]
    Json(String),
    #[error("{0}")]
    Env(String),
}

impl Error {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn service(msg: impl Into<String>) -> Self {
        Self::Service(msg.into())
    }

    /// 解析失敗。`raw` は運用者の調査用に応答全文を保持する
    pub fn parse(reason: impl Into<String>, raw: impl Into<String>) -> Self {
        Self::Parse {
            reason: reason.into(),
            raw: raw.into(),
        }
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    pub fn io_msg(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    pub fn json(msg: impl Into<String>) -> Self {
        Self::Json(msg.into())
    }

    pub fn env(msg: impl Into<String>) -> Self {
        Self::Env(msg.into())
    }

    /// usage を併せて表示すべきエラーか
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// プロセスの終了コード
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument(_) => 64,
            Self::Validation(_) | Self::Json(_) => 65,
            Self::Service(_) => 69,
            Self::Storage(_) => 73,
            Self::Io(_) => 74,
            Self::Parse { .. } => 76,
            Self::Configuration(_) | Self::Env(_) => 78,
        }
    }

    /// 解析失敗時の応答全文
    pub fn raw_reply(&self) -> Option<&str> {
        match self {
            Self::Parse { raw, .. } => Some(raw),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_helpers() {
        let err = Error::invalid_argument("test");
        assert_eq!(err.to_string(), "test");
        assert_eq!(err.exit_code(), 64);
        assert!(err.is_usage());

        let err = Error::service("connection refused");
        assert_eq!(err.to_string(), "LLM service error: connection refused");
        assert_eq!(err.exit_code(), 69);
        assert!(!err.is_usage());
    }

    #[test]
    fn test_parse_error_keeps_raw_reply() {
        let err = Error::parse("expected value at line 1 column 1", "not json");
        assert_eq!(err.raw_reply(), Some("not json"));
        assert_eq!(err.exit_code(), 76);
        assert!(err.to_string().contains("expected value"));
        assert_eq!(Error::storage("x").raw_reply(), None);
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = Error::from(io);
        assert_eq!(err, Error::Io("denied".to_string()));
    }
}
