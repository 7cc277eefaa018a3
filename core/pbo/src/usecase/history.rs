//! 履歴ユースケース: 保存済みの記録を新しい順に読む

use crate::domain::StoredRecord;
use crate::ports::outbound::RecordStore;
use common::error::Error;
use std::sync::Arc;

pub struct HistoryUseCase {
    store: Arc<dyn RecordStore>,
}

impl HistoryUseCase {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// 新しい順に最大 `limit` 件
    pub fn list(&self, limit: usize) -> Result<Vec<StoredRecord>, Error> {
        self.store.list_recent(limit)
    }

    /// 一覧の `index` 番目（1 始まり）の記録
    pub fn get(&self, limit: usize, index: usize) -> Result<StoredRecord, Error> {
        let records = self.list(limit)?;
        let count = records.len();
        index
            .checked_sub(1)
            .and_then(|i| records.into_iter().nth(i))
            .ok_or_else(|| {
                Error::invalid_argument(format!(
                    "No history entry #{} (available: 1..={})",
                    index, count
                ))
            })
    }
}
