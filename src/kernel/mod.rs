//! Headless sidebar core: paths, open documents, commands and their handlers.

pub mod command;
pub mod documents;
pub mod error;
pub mod paths;
pub mod services;
pub mod sidebar;

pub use command::SidebarCommand;
pub use documents::{retarget_document, retarget_subtree, OpenDocuments};
pub use error::{ActionError, ErrorKind};
pub use sidebar::{ActionContext, ActionResult, Outcome, Sidebar, SidebarServices};
