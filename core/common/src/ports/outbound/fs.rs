//! ファイルシステム Outbound ポート
//!
//! 記録ストア・ログ・説明文ファイルの読み込みはこの trait 経由でのみ行う。

use crate::error::Error;
use std::path::{Path, PathBuf};

/// ファイルシステム抽象。失敗はパスを含んだ `Error::Io`
pub trait FileSystem: Send + Sync {
    fn read_to_string(&self, path: &Path) -> Result<String, Error>;
    /// 新規作成または上書き
    fn write(&self, path: &Path, contents: &str) -> Result<(), Error>;
    /// 同一ディレクトリ内のリネーム。置き換えはアトミック
    fn rename(&self, from: &Path, to: &Path) -> Result<(), Error>;
    fn create_dir_all(&self, path: &Path) -> Result<(), Error>;
    fn remove_file(&self, path: &Path) -> Result<(), Error>;
    /// 直下のエントリのフルパス（順序は不定）
    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>, Error>;
    /// 追記用に開く（無ければ作成）
    fn open_append(&self, path: &Path) -> Result<Box<dyn std::io::Write + Send>, Error>;
    fn exists(&self, path: &Path) -> bool;
}
