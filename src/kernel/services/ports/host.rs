use std::ops::Range;
use std::path::{Path, PathBuf};

/// Text prompt shown in the host's input panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRequest {
    pub label: String,
    pub initial: String,
    /// Pre-selected part of `initial`, in characters.
    pub selection: Range<usize>,
}

impl InputRequest {
    pub fn new(label: impl Into<String>, initial: impl Into<String>) -> Self {
        let initial = initial.into();
        let end = initial.chars().count();
        Self {
            label: label.into(),
            initial,
            selection: end..end,
        }
    }

    pub fn with_selection(mut self, selection: Range<usize>) -> Self {
        self.selection = selection;
        self
    }

    /// The pre-selected text.
    pub fn selected_text(&self) -> String {
        self.initial
            .chars()
            .skip(self.selection.start)
            .take(self.selection.end.saturating_sub(self.selection.start))
            .collect()
    }
}

/// UI primitives the editor window offers to sidebar actions.
pub trait SidebarHost {
    /// `None` when the user cancels the prompt.
    fn show_input(&mut self, request: InputRequest) -> Option<String>;

    fn confirm(&mut self, message: &str, ok_label: &str) -> bool;

    fn status_message(&mut self, message: &str);

    fn open_file(&mut self, path: &Path);

    fn refresh_folder_list(&mut self);

    /// Workspace roots, in the order the window lists them.
    fn folders(&self) -> Vec<PathBuf>;

    /// Backing path of the active document, if it has one.
    fn active_file(&self) -> Option<PathBuf>;
}
