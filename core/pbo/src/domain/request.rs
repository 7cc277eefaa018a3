//! 診断リクエストと入力検証
//!
//! DiagnosisRequest は検証を通ったときだけ作れる。

use common::error::Error;
use std::fmt;

/// 説明文の最低文字数
pub const MIN_CHARS: usize = 60;

/// 文字数（Unicode スカラー値の数。空白・改行も数える）
pub fn count_chars(text: &str) -> usize {
    text.chars().count()
}

/// 入力検証エラー。Display は利用者向けの案内文
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    EmptyTopic,
    TooShort { char_count: usize, min_chars: usize },
}

impl ValidationError {
    /// 最低文字数までの不足分
    pub fn deficit(&self) -> Option<usize> {
        match self {
            Self::EmptyTopic => None,
            Self::TooShort {
                char_count,
                min_chars,
            } => Some(min_chars.saturating_sub(*char_count)),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTopic => write!(f, "トピック名は必須です。例: TypeScriptのUnion型"),
            Self::TooShort {
                char_count,
                min_chars,
            } => write!(
                f,
                "説明文は{}文字以上必要です（現在{}文字、あと{}文字）。\nヒント: 『〜とは』『なぜ使うか』『具体例』の3点を書くと到達しやすいです。",
                min_chars,
                char_count,
                min_chars.saturating_sub(*char_count)
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for Error {
    fn from(e: ValidationError) -> Self {
        Error::validation(e.to_string())
    }
}

/// トピックと説明文を検証する（副作用なし）
pub fn validate(topic: &str, explanation: &str) -> Result<(), ValidationError> {
    validate_with_min(topic, explanation, MIN_CHARS)
}

/// 最低文字数を指定して検証する
pub fn validate_with_min(
    topic: &str,
    explanation: &str,
    min_chars: usize,
) -> Result<(), ValidationError> {
    if topic.trim().is_empty() {
        return Err(ValidationError::EmptyTopic);
    }
    let char_count = count_chars(explanation);
    if char_count < min_chars {
        return Err(ValidationError::TooShort {
            char_count,
            min_chars,
        });
    }
    Ok(())
}

/// 検証済みの診断リクエスト（作成後は不変）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosisRequest {
    topic: String,
    explanation: String,
}

impl DiagnosisRequest {
    pub fn new(
        topic: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let topic = topic.into();
        let explanation = explanation.into();
        validate(&topic, &explanation)?;
        Ok(Self { topic, explanation })
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    pub fn char_count(&self) -> usize {
        count_chars(&self.explanation)
    }
}
