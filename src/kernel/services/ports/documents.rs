//! Open documents as seen by the sidebar: ids, owning window, backing path.

use slotmap::new_key_type;
use std::path::{Path, PathBuf};

new_key_type! {
    pub struct WindowId;
    pub struct DocumentId;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenDocument {
    pub id: DocumentId,
    pub window: WindowId,
    /// `None` for scratch buffers that were never saved.
    pub path: Option<PathBuf>,
}

pub trait DocumentRegistry {
    /// Every open document across every window, window by window.
    fn documents(&self) -> Vec<OpenDocument>;

    /// Documents whose backing path is exactly `path`.
    fn lookup(&self, path: &Path) -> Vec<DocumentId> {
        self.documents()
            .into_iter()
            .filter(|doc| doc.path.as_deref() == Some(path))
            .map(|doc| doc.id)
            .collect()
    }

    /// Points a document at a new backing file without touching its content.
    /// Returns `false` when the document is no longer open.
    fn repoint(&mut self, id: DocumentId, path: PathBuf) -> bool;
}
