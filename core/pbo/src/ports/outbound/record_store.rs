//! 診断記録ストアの Outbound ポート
//!
//! 追記と読み出しのみ。既存の記録を更新・削除する操作は持たない。

use crate::domain::{DiagnosisRequest, DiagnosisResult, StoredRecord};
use common::error::Error;
use std::path::PathBuf;

pub trait RecordStore {
    /// 入力と結果を 1 件の記録として保存し、保存先パスを返す。
    /// 失敗時は `Error::Storage` で、部分的なファイルは残さない。
    fn save(&self, request: &DiagnosisRequest, result: &DiagnosisResult) -> Result<PathBuf, Error>;

    /// 新しい順に最大 `limit` 件。壊れた記録は飛ばしてログに残す
    fn list_recent(&self, limit: usize) -> Result<Vec<StoredRecord>, Error>;
}
