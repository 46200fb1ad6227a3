use super::{report, ActionContext, ActionResult, Outcome, Sidebar};
use crate::kernel::error::ActionError;
use std::path::PathBuf;

impl Sidebar {
    /// Sends the selected paths to the trash. Only an explicit selection is
    /// deleted, never the active document. A failure stops the batch and is
    /// reported generically; items trashed before it stay trashed.
    pub fn delete(&mut self, cx: &mut ActionContext<'_>, paths: &[PathBuf]) -> ActionResult {
        let message = match paths {
            [] => return Ok(Outcome::NoTarget),
            [path] => format!("Delete {}?", path.display()),
            _ => format!("Delete {} items?", paths.len()),
        };
        if self.settings.confirm_delete && !cx.host.confirm(&message, "Delete") {
            return Ok(Outcome::Cancelled);
        }

        let result = self.trash_all(paths);
        report(cx, result, |_| "Unable to delete".to_string())
    }

    fn trash_all(&self, paths: &[PathBuf]) -> Result<Outcome, ActionError> {
        for path in paths {
            if let Err(e) = self.trash.send_to_trash(path) {
                tracing::warn!(path = %path.display(), error = %e, "trash failed");
                return Err(e.into());
            }
            tracing::info!(path = %path.display(), "moved to trash");
        }
        Ok(Outcome::Trashed(paths.len()))
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/sidebar/delete.rs"]
mod tests;
