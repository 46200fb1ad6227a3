//! Duplicate and move: prompt on the UI thread, work on the fs runtime,
//! completion applied back on the UI thread.

use super::{report, ActionContext, ActionResult, Outcome, Sidebar};
use crate::kernel::documents::{retarget_document, retarget_subtree};
use crate::kernel::error::ErrorKind;
use crate::kernel::paths::path_selection;
use crate::kernel::services::adapters::FsMessage;
use crate::kernel::services::ports::InputRequest;
use std::path::{Path, PathBuf};

impl Sidebar {
    pub fn duplicate(&mut self, cx: &mut ActionContext<'_>, paths: &[PathBuf]) -> ActionResult {
        let (source, to) = match Self::ask_destination(cx, paths, "Duplicate as:") {
            Ok(pair) => pair,
            Err(outcome) => return Ok(outcome),
        };
        cx.host.status_message(&format!(
            "Copying \"{}\" to \"{}\"",
            source.display(),
            to.display()
        ));
        Ok(Outcome::Submitted(self.runtime.duplicate(source, to)))
    }

    pub fn move_path(&mut self, cx: &mut ActionContext<'_>, paths: &[PathBuf]) -> ActionResult {
        let (source, to) = match Self::ask_destination(cx, paths, "Move to:") {
            Ok(pair) => pair,
            Err(outcome) => return Ok(outcome),
        };
        cx.host.status_message(&format!(
            "Moving \"{}\" to \"{}\"",
            source.display(),
            to.display()
        ));
        Ok(Outcome::Submitted(self.runtime.move_path(source, to)))
    }

    /// Applies a finished duplicate/move: opens or retargets documents,
    /// reports the outcome and refreshes the folder view either way.
    pub fn handle_message(&mut self, cx: &mut ActionContext<'_>, msg: FsMessage) -> ActionResult {
        let result = match msg {
            FsMessage::Duplicated {
                task,
                from,
                to,
                is_dir,
            } => {
                tracing::info!(task = %task, from = %from.display(), to = %to.display(), "duplicated");
                cx.host.status_message(&format!(
                    "Duplicated \"{}\" to \"{}\"",
                    from.display(),
                    to.display()
                ));
                if !is_dir && self.settings.open_duplicated_files {
                    cx.host.open_file(&to);
                }
                Ok(Outcome::Duplicated(to))
            }
            FsMessage::Moved {
                task,
                from,
                to,
                is_dir,
            } => {
                let retargeted = if is_dir {
                    retarget_subtree(&mut *cx.documents, &from, &to)
                } else {
                    retarget_document(&mut *cx.documents, &from, &to)
                };
                tracing::info!(task = %task, from = %from.display(), to = %to.display(), retargeted, "moved");
                cx.host.status_message(&format!(
                    "Moved \"{}\" to \"{}\"",
                    from.display(),
                    to.display()
                ));
                Ok(Outcome::Relocated { to, retargeted })
            }
            FsMessage::Failed {
                task,
                op,
                from,
                to,
                error,
            } => {
                tracing::debug!(task = %task, op = op.name(), "fs task failed");
                let verb = op.name();
                report(cx, Err(error), |e| match e.kind() {
                    ErrorKind::Unknown => format!(
                        "Unable to {}: \"{}\" to \"{}\"",
                        verb,
                        from.display(),
                        to.display()
                    ),
                    _ => format!(
                        "Unable to {}: \"{}\" to \"{}\". {}",
                        verb,
                        from.display(),
                        to.display(),
                        e
                    ),
                })
            }
        };
        cx.host.refresh_folder_list();
        result
    }

    /// Source plus the destination typed into a prompt pre-filled with the
    /// source path. Relative answers land next to the source. `Err` carries
    /// the outcome to return when there is nothing to do.
    fn ask_destination(
        cx: &mut ActionContext<'_>,
        paths: &[PathBuf],
        label: &str,
    ) -> Result<(PathBuf, PathBuf), Outcome> {
        let source = Self::target(cx, paths).ok_or(Outcome::NoTarget)?;
        let request = InputRequest::new(label, source.to_string_lossy())
            .with_selection(path_selection(&source));
        let answer = cx
            .host
            .show_input(request)
            .filter(|answer| !answer.is_empty())
            .ok_or(Outcome::Cancelled)?;

        let base = source.parent().map(Path::to_path_buf).unwrap_or_default();
        let to = base.join(answer);
        Ok((source, to))
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/sidebar/transfer.rs"]
mod tests;
