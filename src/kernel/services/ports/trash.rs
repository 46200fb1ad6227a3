use super::file::Result;
use std::path::Path;

/// Recoverable deletion (recycle bin / freedesktop trash).
pub trait TrashPort {
    fn send_to_trash(&self, path: &Path) -> Result<()>;
}
