//! std::fs による FileSystem 実装

use crate::error::Error;
use crate::ports::outbound::FileSystem;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default)]
pub struct StdFileSystem;

/// 失敗した操作と対象パスを添えて Io エラーにする
fn io_error(action: &str, path: &Path) -> impl FnOnce(io::Error) -> Error {
    let target = path.display().to_string();
    let action = action.to_string();
    move |e| Error::io_msg(format!("Failed to {} '{}': {}", action, target, e))
}

impl FileSystem for StdFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String, Error> {
        fs::read_to_string(path).map_err(io_error("read", path))
    }

    fn write(&self, path: &Path, contents: &str) -> Result<(), Error> {
        fs::write(path, contents).map_err(io_error("write", path))
    }

    fn rename(&self, from: &Path, to: &Path) -> Result<(), Error> {
        fs::rename(from, to).map_err(io_error(&format!("move '{}' to", from.display()), to))
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), Error> {
        fs::create_dir_all(path).map_err(io_error("create directory", path))
    }

    fn remove_file(&self, path: &Path) -> Result<(), Error> {
        fs::remove_file(path).map_err(io_error("remove", path))
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>, Error> {
        fs::read_dir(path)
            .and_then(|entries| entries.map(|e| e.map(|e| e.path())).collect())
            .map_err(io_error("list", path))
    }

    fn open_append(&self, path: &Path) -> Result<Box<dyn io::Write + Send>, Error> {
        let file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(io_error("append to", path))?;
        Ok(Box::new(file))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
