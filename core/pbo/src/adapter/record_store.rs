//! 診断記録のファイルストア（1 記録 = 1 JSON ファイル）
//!
//! ファイル名は `{YYYYMMDD_HHMMSS}_{slug}.json`。辞書順の逆順がそのまま新しい順になる。
//! 書き込みは隠し一時ファイルに書いてからリネームする。
//! 同じ秒・同じ slug の記録が既にあれば `_2`, `_3`, … を付けて上書きを避ける
//! （存在確認とリネームの間の別プロセスとの競合は防がない）。

use crate::domain::{
    safe_slug, DiagnosisRequest, DiagnosisResult, Record, StoredRecord,
};
use crate::ports::outbound::RecordStore;
use chrono::{DateTime, FixedOffset};
use common::error::Error;
use common::ports::outbound::{Clock, FileSystem, Log, LogLevel, LogRecord};
use std::path::{Path, PathBuf};
use std::sync::Arc;

const RECORD_EXT: &str = "json";

/// JSON ファイルで記録を保存・列挙する RecordStore 実装
pub struct JsonFileRecordStore {
    fs: Arc<dyn FileSystem>,
    clock: Arc<dyn Clock>,
    log: Arc<dyn Log>,
    dir: PathBuf,
}

impl JsonFileRecordStore {
    /// `dir` は初回保存時に作成する
    pub fn new(
        fs: Arc<dyn FileSystem>,
        clock: Arc<dyn Clock>,
        log: Arc<dyn Log>,
        dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            fs,
            clock,
            log,
            dir: dir.into(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// 拡張子を除いたファイル名
    pub fn file_stem(at: &DateTime<FixedOffset>, topic: &str) -> String {
        format!("{}_{}", at.format("%Y%m%d_%H%M%S"), safe_slug(topic))
    }

    fn free_path(&self, stem: &str) -> PathBuf {
        let mut path = self.dir.join(format!("{}.{}", stem, RECORD_EXT));
        let mut n = 2;
        while self.fs.exists(&path) {
            path = self.dir.join(format!("{}_{}.{}", stem, n, RECORD_EXT));
            n += 1;
        }
        path
    }

    fn write_atomically(&self, path: &Path, contents: &str) -> Result<(), Error> {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let tmp = self.dir.join(format!(".{}.tmp", file_name));
        let written = self
            .fs
            .write(&tmp, contents)
            .and_then(|_| self.fs.rename(&tmp, path));
        if let Err(e) = written {
            if self.fs.exists(&tmp) {
                let _ = self.fs.remove_file(&tmp);
            }
            return Err(Error::storage(e.to_string()));
        }
        Ok(())
    }

    fn is_record_file(path: &Path) -> bool {
        let hidden = path
            .file_name()
            .map(|n| n.to_string_lossy().starts_with('.'))
            .unwrap_or(true);
        !hidden && path.extension().map(|e| e == RECORD_EXT).unwrap_or(false)
    }

    fn load(&self, path: &Path) -> Result<Record, Error> {
        let text = self.fs.read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    fn log(&self, record: LogRecord) {
        let _ = self.log.log(&record.layer("adapter").kind("record"));
    }
}

impl RecordStore for JsonFileRecordStore {
    fn save(&self, request: &DiagnosisRequest, result: &DiagnosisResult) -> Result<PathBuf, Error> {
        self.fs
            .create_dir_all(&self.dir)
            .map_err(|e| Error::storage(e.to_string()))?;

        let now = self.clock.now();
        let record = Record::new(request, result.clone(), now);
        let json = serde_json::to_string_pretty(&record)
            .map_err(|e| Error::storage(format!("Failed to serialize record: {}", e)))?;

        let path = self.free_path(&Self::file_stem(&now, request.topic()));
        self.write_atomically(&path, &json)?;

        self.log(
            LogRecord::new(LogLevel::Info, "record saved")
                .field("path", path.to_string_lossy().to_string()),
        );
        Ok(path)
    }

    fn list_recent(&self, limit: usize) -> Result<Vec<StoredRecord>, Error> {
        if !self.fs.exists(&self.dir) {
            return Ok(Vec::new());
        }
        let mut paths: Vec<PathBuf> = self
            .fs
            .read_dir(&self.dir)?
            .into_iter()
            .filter(|p| Self::is_record_file(p))
            .collect();
        paths.sort_by(|a, b| b.file_name().cmp(&a.file_name()));

        let mut records = Vec::new();
        for path in paths.into_iter().take(limit) {
            match self.load(&path) {
                Ok(record) => records.push(StoredRecord { path, record }),
                Err(e) => self.log(
                    LogRecord::new(LogLevel::Warn, "history entry skipped")
                        .field("path", path.to_string_lossy().to_string())
                        .field("reason", e.to_string()),
                ),
            }
        }
        Ok(records)
    }
}
