//! Service ports: traits + data contracts.

pub mod clipboard;
pub mod documents;
pub mod file;
pub mod host;
pub mod settings;
pub mod trash;

pub use clipboard::{ClipboardError, ClipboardPort};
pub use documents::{DocumentId, DocumentRegistry, OpenDocument, WindowId};
pub use file::{FileError, FileProvider, Result as FileResult};
pub use host::{InputRequest, SidebarHost};
pub use settings::{Settings, DEFAULT_LOG_FILTER};
pub use trash::TrashPort;
