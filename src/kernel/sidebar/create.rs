use super::{report, ActionContext, ActionResult, Outcome, Sidebar};
use crate::kernel::error::{ActionError, ErrorKind};
use crate::kernel::services::ports::InputRequest;
use std::path::{Path, PathBuf};

impl Sidebar {
    pub fn new_file(&mut self, cx: &mut ActionContext<'_>, paths: &[PathBuf]) -> ActionResult {
        let Some(target) = Self::target(cx, paths) else {
            return Ok(Outcome::NoTarget);
        };
        let base = self.base_dir(&target);
        let Some(leaf) = cx.host.show_input(InputRequest::new("File Name:", "")) else {
            return Ok(Outcome::Cancelled);
        };
        if leaf.is_empty() {
            return Ok(Outcome::Cancelled);
        }

        let new = base.join(&leaf);
        let result = self.create_file(&new).map(|()| {
            if self.settings.open_created_files {
                cx.host.open_file(&new);
            }
            Outcome::Created(new.clone())
        });
        report(cx, result, |e| match e.kind() {
            ErrorKind::Unknown => format!("Unable to create file: \"{}\"", new.display()),
            _ => format!("Unable to create file: \"{}\"", e),
        })
    }

    pub fn new_folder(&mut self, cx: &mut ActionContext<'_>, paths: &[PathBuf]) -> ActionResult {
        let Some(target) = Self::target(cx, paths) else {
            return Ok(Outcome::NoTarget);
        };
        let base = self.base_dir(&target);
        let Some(leaf) = cx.host.show_input(InputRequest::new("Folder Name:", "")) else {
            return Ok(Outcome::Cancelled);
        };
        if leaf.is_empty() {
            return Ok(Outcome::Cancelled);
        }

        let new = base.join(&leaf);
        let result = self.create_folder(&new).map(|()| Outcome::Created(new.clone()));
        report(cx, result, |e| match e.kind() {
            ErrorKind::Unknown => format!("Unable to create folder: \"{}\"", new.display()),
            _ => format!("Unable to create folder: \"{}\"", e),
        })
    }

    fn create_file(&self, new: &Path) -> Result<(), ActionError> {
        if self.fs.exists(new) {
            return Err(ActionError::Conflict(new.to_path_buf()));
        }
        self.fs.ensure_parent(new)?;
        self.fs.create_file(new)?;
        tracing::info!(path = %new.display(), "created file");
        Ok(())
    }

    fn create_folder(&self, new: &Path) -> Result<(), ActionError> {
        if self.fs.exists(new) {
            return Err(ActionError::Conflict(new.to_path_buf()));
        }
        self.fs.create_dir_all(new)?;
        tracing::info!(path = %new.display(), "created folder");
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/sidebar/create.rs"]
mod tests;
