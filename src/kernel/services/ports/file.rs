//! 文件系统 Provider trait
//!
//! 侧边栏动作只通过这里访问文件系统；测试可以包一层记录调用

use std::io;
use std::path::{Path, PathBuf};

pub type Result<T> = std::result::Result<T, FileError>;

#[derive(Debug, thiserror::Error)]
pub enum FileError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Already exists: {}", .0.display())]
    AlreadyExists(PathBuf),
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
    #[error("Not a file: {}", .0.display())]
    NotAFile(PathBuf),
    #[error("Invalid path: {0}")]
    InvalidPath(String),
    #[error("Unable to move to trash: {0}")]
    Trash(String),
}

pub trait FileProvider: Send + Sync {
    fn exists(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;

    fn is_file(&self, path: &Path) -> bool;

    /// Creates an empty file; fails with `AlreadyExists` instead of truncating.
    fn create_file(&self, path: &Path) -> Result<()>;

    fn create_dir_all(&self, path: &Path) -> Result<()>;

    fn rename(&self, from: &Path, to: &Path) -> Result<()>;

    /// Copies file content, permissions and modification time.
    fn copy_file(&self, from: &Path, to: &Path) -> Result<()>;

    /// Copies a whole directory tree into a new directory at `to`.
    fn copy_dir(&self, from: &Path, to: &Path) -> Result<()>;

    /// Moves a file or directory, also across filesystems.
    fn move_path(&self, from: &Path, to: &Path) -> Result<()>;

    /// Creates the missing parent directories of `path`.
    fn ensure_parent(&self, path: &Path) -> Result<()> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !self.exists(parent) => {
                self.create_dir_all(parent)
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/file.rs"]
mod tests;
