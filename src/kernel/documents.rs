//! 打开文档表与重定向
//!
//! 重命名/移动之后，让已经打开的文档跟随新路径（不关闭、不重新加载）

use crate::kernel::paths::{absolutize, comparable, fold_case};
use crate::kernel::services::ports::{DocumentId, DocumentRegistry, OpenDocument, WindowId};
use rustc_hash::FxHashMap;
use slotmap::SlotMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
struct DocumentEntry {
    window: WindowId,
    path: Option<PathBuf>,
}

/// In-memory [`DocumentRegistry`]: windows in creation order, each holding
/// its documents in tab order, plus an index by backing path.
#[derive(Debug, Default)]
pub struct OpenDocuments {
    windows: SlotMap<WindowId, Vec<DocumentId>>,
    docs: SlotMap<DocumentId, DocumentEntry>,
    by_path: FxHashMap<PathBuf, Vec<DocumentId>>,
}

impl OpenDocuments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_window(&mut self) -> WindowId {
        self.windows.insert(Vec::new())
    }

    /// Closes a window and every document in it.
    pub fn close_window(&mut self, window: WindowId) -> bool {
        let Some(ids) = self.windows.remove(window) else {
            return false;
        };
        for id in ids {
            if let Some(entry) = self.docs.remove(id) {
                self.unindex(id, entry.path.as_deref());
            }
        }
        true
    }

    /// `None` when the window is gone.
    pub fn open(&mut self, window: WindowId, path: Option<PathBuf>) -> Option<DocumentId> {
        if !self.windows.contains_key(window) {
            return None;
        }
        let id = self.docs.insert(DocumentEntry {
            window,
            path: path.clone(),
        });
        if let Some(path) = path {
            self.by_path.entry(path).or_default().push(id);
        }
        self.windows[window].push(id);
        Some(id)
    }

    pub fn close(&mut self, id: DocumentId) -> bool {
        let Some(entry) = self.docs.remove(id) else {
            return false;
        };
        if let Some(ids) = self.windows.get_mut(entry.window) {
            ids.retain(|doc| *doc != id);
        }
        self.unindex(id, entry.path.as_deref());
        true
    }

    pub fn path(&self, id: DocumentId) -> Option<&Path> {
        self.docs.get(id).and_then(|entry| entry.path.as_deref())
    }

    pub fn documents_in(&self, window: WindowId) -> &[DocumentId] {
        self.windows.get(window).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    fn unindex(&mut self, id: DocumentId, path: Option<&Path>) {
        let Some(path) = path else {
            return;
        };
        if let Some(ids) = self.by_path.get_mut(path) {
            ids.retain(|doc| *doc != id);
            if ids.is_empty() {
                self.by_path.remove(path);
            }
        }
    }
}

impl DocumentRegistry for OpenDocuments {
    fn documents(&self) -> Vec<OpenDocument> {
        self.windows
            .iter()
            .flat_map(|(window, ids)| {
                ids.iter().filter_map(move |id| {
                    self.docs.get(*id).map(|entry| OpenDocument {
                        id: *id,
                        window,
                        path: entry.path.clone(),
                    })
                })
            })
            .collect()
    }

    fn lookup(&self, path: &Path) -> Vec<DocumentId> {
        self.by_path.get(path).cloned().unwrap_or_default()
    }

    fn repoint(&mut self, id: DocumentId, path: PathBuf) -> bool {
        let Some(old) = self.docs.get(id).map(|entry| entry.path.clone()) else {
            return false;
        };
        self.unindex(id, old.as_deref());
        self.by_path.entry(path.clone()).or_default().push(id);
        if let Some(entry) = self.docs.get_mut(id) {
            entry.path = Some(path);
        }
        true
    }
}

/// Repoints every document backed by `source` (compared absolute and
/// case-folded) to `destination`. Returns how many documents moved.
pub fn retarget_document<R>(docs: &mut R, source: &Path, destination: &Path) -> usize
where
    R: DocumentRegistry + ?Sized,
{
    let source = comparable(source);
    let destination = absolutize(destination);

    let matches: Vec<DocumentId> = docs
        .documents()
        .into_iter()
        .filter(|doc| {
            doc.path
                .as_deref()
                .is_some_and(|path| comparable(path) == source)
        })
        .map(|doc| doc.id)
        .collect();

    let mut retargeted = 0;
    for id in matches {
        if docs.repoint(id, destination.clone()) {
            retargeted += 1;
        }
    }
    if retargeted > 0 {
        tracing::debug!(
            from = %source.display(),
            to = %destination.display(),
            retargeted,
            "retargeted document"
        );
    }
    retargeted
}

/// Repoints every document strictly inside `source_dir` to the same
/// relative location under `destination_dir`. Matching is per component,
/// so `/a/b` never captures `/a/bx.txt`.
pub fn retarget_subtree<R>(docs: &mut R, source_dir: &Path, destination_dir: &Path) -> usize
where
    R: DocumentRegistry + ?Sized,
{
    let source = absolutize(source_dir);
    let source_key = fold_case(&source);
    let depth = source.components().count();
    let destination = absolutize(destination_dir);

    let moves: Vec<(DocumentId, PathBuf)> = docs
        .documents()
        .into_iter()
        .filter_map(|doc| {
            let path = absolutize(doc.path.as_deref()?);
            if !fold_case(&path).starts_with(&source_key) {
                return None;
            }
            let rest: PathBuf = path.components().skip(depth).collect();
            if rest.as_os_str().is_empty() {
                return None;
            }
            Some((doc.id, destination.join(rest)))
        })
        .collect();

    let mut retargeted = 0;
    for (id, path) in moves {
        if docs.repoint(id, path) {
            retargeted += 1;
        }
    }
    if retargeted > 0 {
        tracing::debug!(
            from = %source.display(),
            to = %destination.display(),
            retargeted,
            "retargeted subtree"
        );
    }
    retargeted
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/documents.rs"]
mod tests;
