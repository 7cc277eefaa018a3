//! 永続化される 1 件の診断記録
//!
//! ファイルのトップレベルキーは app / created_at / topic / explanation / char_count / result。

use super::request::DiagnosisRequest;
use super::result::DiagnosisResult;
use chrono::{DateTime, FixedOffset, SecondsFormat};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 記録に書き込むアプリ名
pub const APP_NAME: &str = "Proof by Output";

/// 診断記録（作成後は更新しない）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default)]
    pub app: String,
    /// ISO8601 (RFC3339、オフセット付き)
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub char_count: usize,
    #[serde(default, deserialize_with = "super::result::deserialize_lenient")]
    pub result: DiagnosisResult,
}

impl Record {
    pub fn new(
        request: &DiagnosisRequest,
        result: DiagnosisResult,
        created_at: DateTime<FixedOffset>,
    ) -> Self {
        Self {
            app: APP_NAME.to_string(),
            created_at: created_at.to_rfc3339_opts(SecondsFormat::Secs, false),
            topic: request.topic().to_string(),
            explanation: request.explanation().to_string(),
            char_count: request.char_count(),
            result,
        }
    }
}

/// 読み込んだ記録と、その保存先
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredRecord {
    pub path: PathBuf,
    pub record: Record,
}
