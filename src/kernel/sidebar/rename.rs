use super::{report, ActionContext, ActionResult, Outcome, Sidebar};
use crate::kernel::documents::{retarget_document, retarget_subtree};
use crate::kernel::error::{ActionError, ErrorKind};
use crate::kernel::paths::{leaf_name, rename_selection};
use crate::kernel::services::ports::InputRequest;
use std::path::{Path, PathBuf};

impl Sidebar {
    pub fn rename(&mut self, cx: &mut ActionContext<'_>, paths: &[PathBuf]) -> ActionResult {
        let Some(source) = Self::target(cx, paths) else {
            return Ok(Outcome::NoTarget);
        };
        let leaf = leaf_name(&source);
        let request =
            InputRequest::new("New Name:", leaf.as_str()).with_selection(rename_selection(&leaf));
        let Some(answer) = cx.host.show_input(request) else {
            return Ok(Outcome::Cancelled);
        };
        if answer.is_empty() {
            return Ok(Outcome::Cancelled);
        }

        let base = source.parent().map(Path::to_path_buf).unwrap_or_default();
        let new = base.join(&answer);
        if new == source {
            return Ok(Outcome::Unchanged);
        }

        let result = self.rename_path(cx, &source, &new);
        report(cx, result, |e| match e.kind() {
            ErrorKind::Unknown => format!(
                "Unable to rename: \"{}\" to \"{}\"",
                source.display(),
                new.display()
            ),
            _ => format!(
                "Unable to rename: \"{}\" to \"{}\". {}",
                source.display(),
                new.display(),
                e
            ),
        })
    }

    fn rename_path(
        &self,
        cx: &mut ActionContext<'_>,
        source: &Path,
        new: &Path,
    ) -> Result<Outcome, ActionError> {
        if self.fs.exists(new) {
            return Err(ActionError::Conflict(new.to_path_buf()));
        }
        self.fs.ensure_parent(new)?;
        self.fs.rename(source, new)?;

        let retargeted = if self.fs.is_dir(new) {
            retarget_subtree(&mut *cx.documents, source, new)
        } else {
            retarget_document(&mut *cx.documents, source, new)
        };
        tracing::info!(
            from = %source.display(),
            to = %new.display(),
            retargeted,
            "renamed"
        );
        Ok(Outcome::Relocated {
            to: new.to_path_buf(),
            retargeted,
        })
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/sidebar/rename.rs"]
mod tests;
