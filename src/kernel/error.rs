use crate::kernel::services::ports::{ClipboardError, FileError};
use std::path::PathBuf;

/// Closed classification every sidebar failure falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The destination already exists.
    Conflict,
    /// Permission, missing parent, I/O and trash failures.
    Filesystem,
    Unknown,
}

#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    #[error("File or Folder already exists: {}", .0.display())]
    Conflict(PathBuf),
    #[error("{0}")]
    Filesystem(FileError),
    #[error("{0}")]
    Unknown(String),
}

impl ActionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ActionError::Conflict(_) => ErrorKind::Conflict,
            ActionError::Filesystem(_) => ErrorKind::Filesystem,
            ActionError::Unknown(_) => ErrorKind::Unknown,
        }
    }
}

impl From<FileError> for ActionError {
    fn from(e: FileError) -> Self {
        match e {
            FileError::AlreadyExists(path) => ActionError::Conflict(path),
            other => ActionError::Filesystem(other),
        }
    }
}

impl From<ClipboardError> for ActionError {
    fn from(e: ClipboardError) -> Self {
        ActionError::Unknown(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/error.rs"]
mod tests;
