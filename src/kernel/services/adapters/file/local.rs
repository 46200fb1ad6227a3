//! 本地文件系统 Provider
//!
//! 基于 std::fs 实现 FileProvider

use crate::kernel::services::ports::file::{FileError, FileProvider, Result};
use std::fs;
use std::io;
use std::path::Path;

pub struct LocalFileProvider;

impl LocalFileProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFileProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl FileProvider for LocalFileProvider {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn create_file(&self, path: &Path) -> Result<()> {
        match fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
        {
            Ok(_) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                Err(FileError::AlreadyExists(path.to_path_buf()))
            }
            Err(e) => Err(e.into()),
        }
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        Ok(fs::create_dir_all(path)?)
    }

    fn rename(&self, from: &Path, to: &Path) -> Result<()> {
        if !from.exists() {
            return Err(FileError::NotFound(from.to_path_buf()));
        }
        if to.exists() {
            return Err(FileError::AlreadyExists(to.to_path_buf()));
        }
        Ok(fs::rename(from, to)?)
    }

    fn copy_file(&self, from: &Path, to: &Path) -> Result<()> {
        if !from.exists() {
            return Err(FileError::NotFound(from.to_path_buf()));
        }
        if !from.is_file() {
            return Err(FileError::NotAFile(from.to_path_buf()));
        }
        fs::copy(from, to)?;
        preserve_mtime(from, to);
        Ok(())
    }

    fn copy_dir(&self, from: &Path, to: &Path) -> Result<()> {
        if !from.exists() {
            return Err(FileError::NotFound(from.to_path_buf()));
        }
        if !from.is_dir() {
            return Err(FileError::NotADirectory(from.to_path_buf()));
        }
        if to.exists() {
            return Err(FileError::AlreadyExists(to.to_path_buf()));
        }
        if to.starts_with(from) {
            return Err(FileError::InvalidPath(format!(
                "cannot copy {} into itself",
                from.display()
            )));
        }
        copy_tree(self, from, to).inspect_err(|_| discard_partial(to))
    }

    fn move_path(&self, from: &Path, to: &Path) -> Result<()> {
        if fs::symlink_metadata(from).is_err() {
            return Err(FileError::NotFound(from.to_path_buf()));
        }
        if to.exists() {
            return Err(FileError::AlreadyExists(to.to_path_buf()));
        }
        match fs::rename(from, to) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
                tracing::debug!(
                    from = %from.display(),
                    to = %to.display(),
                    "rename crosses devices, falling back to copy + remove"
                );
                self.move_by_copy(from, to)
            }
            Err(e) => Err(e.into()),
        }
    }
}

impl LocalFileProvider {
    /// Copies `from` to `to`, then removes `from`. A failed copy removes
    /// whatever part of `to` it created and leaves `from` intact.
    pub(crate) fn move_by_copy(&self, from: &Path, to: &Path) -> Result<()> {
        if fs::symlink_metadata(to).is_ok() {
            return Err(FileError::AlreadyExists(to.to_path_buf()));
        }
        let file_type = fs::symlink_metadata(from)?.file_type();
        let copied = if file_type.is_symlink() {
            copy_link(from, to)
        } else if file_type.is_dir() {
            self.copy_dir(from, to)
        } else {
            self.copy_file(from, to)
        };
        if let Err(e) = copied {
            discard_partial(to);
            return Err(e);
        }

        if file_type.is_dir() {
            fs::remove_dir_all(from)?;
        } else {
            fs::remove_file(from)?;
        }
        Ok(())
    }
}

/// Symlinks are recreated as links, never followed.
fn copy_tree(provider: &LocalFileProvider, from: &Path, to: &Path) -> Result<()> {
    fs::create_dir_all(to)?;
    for entry in fs::read_dir(from)? {
        let entry = entry?;
        let source = entry.path();
        let target = to.join(entry.file_name());
        let file_type = entry.file_type()?;
        if file_type.is_symlink() {
            copy_link(&source, &target)?;
        } else if file_type.is_dir() {
            copy_tree(provider, &source, &target)?;
        } else {
            provider.copy_file(&source, &target)?;
        }
    }
    Ok(())
}

#[cfg(unix)]
fn copy_link(from: &Path, to: &Path) -> Result<()> {
    let target = fs::read_link(from)?;
    Ok(std::os::unix::fs::symlink(target, to)?)
}

#[cfg(windows)]
fn copy_link(from: &Path, to: &Path) -> Result<()> {
    let target = fs::read_link(from)?;
    if from.is_dir() {
        Ok(std::os::windows::fs::symlink_dir(target, to)?)
    } else {
        Ok(std::os::windows::fs::symlink_file(target, to)?)
    }
}

/// Best effort: a read-only copy may refuse new timestamps on some platforms.
fn preserve_mtime(from: &Path, to: &Path) {
    let result = fs::metadata(from)
        .and_then(|meta| meta.modified())
        .and_then(|modified| fs::File::open(to)?.set_modified(modified));
    if let Err(e) = result {
        tracing::debug!(path = %to.display(), error = %e, "mtime not preserved");
    }
}

/// Removes a partially written destination.
fn discard_partial(to: &Path) {
    let removed = match fs::symlink_metadata(to) {
        Ok(meta) if meta.is_dir() => fs::remove_dir_all(to),
        Ok(_) => fs::remove_file(to),
        Err(_) => return,
    };
    if let Err(e) = removed {
        tracing::warn!(path = %to.display(), error = %e, "failed to clean up partial copy");
    }
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/file/local.rs"]
mod tests;
