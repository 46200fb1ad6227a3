use crate::kernel::services::ports::file::{FileError, Result};
use crate::kernel::services::ports::TrashPort;
use std::path::Path;

/// Sends paths to the platform trash via the `trash` crate.
#[derive(Debug, Default)]
pub struct TrashService;

impl TrashService {
    pub fn new() -> Self {
        Self
    }
}

impl TrashPort for TrashService {
    fn send_to_trash(&self, path: &Path) -> Result<()> {
        if !path.exists() && path.symlink_metadata().is_err() {
            return Err(FileError::NotFound(path.to_path_buf()));
        }
        trash::delete(path).map_err(|e| FileError::Trash(e.to_string()))
    }
}
