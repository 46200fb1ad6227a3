use super::{report, ActionContext, ActionResult, Outcome, Sidebar};
use crate::kernel::paths::{clipboard_summary, leaf_name, relative_to_roots};
use std::path::PathBuf;

impl Sidebar {
    pub fn copy_name(&mut self, cx: &mut ActionContext<'_>, paths: &[PathBuf]) -> ActionResult {
        let names: Vec<String> = Self::targets(cx, paths)
            .iter()
            .map(|path| leaf_name(path))
            .collect();
        self.copy_lines(cx, names)
    }

    pub fn copy_relative_path(
        &mut self,
        cx: &mut ActionContext<'_>,
        paths: &[PathBuf],
    ) -> ActionResult {
        let roots = cx.host.folders();
        let relative: Vec<String> = Self::targets(cx, paths)
            .iter()
            .map(|path| relative_to_roots(path, &roots))
            .collect();
        self.copy_lines(cx, relative)
    }

    pub fn copy_absolute_path(
        &mut self,
        cx: &mut ActionContext<'_>,
        paths: &[PathBuf],
    ) -> ActionResult {
        let verbatim: Vec<String> = Self::targets(cx, paths)
            .iter()
            .map(|path| path.to_string_lossy().to_string())
            .collect();
        self.copy_lines(cx, verbatim)
    }

    fn copy_lines(&mut self, cx: &mut ActionContext<'_>, lines: Vec<String>) -> ActionResult {
        if lines.is_empty() {
            return Ok(Outcome::NoTarget);
        }
        let data = lines.join("\n");
        let result = self
            .clipboard
            .set_text(&data)
            .map(|()| Outcome::Copied(data.clone()))
            .map_err(Into::into);
        let result = report(cx, result, |e| format!("Unable to copy to clipboard: {}", e));
        if result.is_ok() {
            cx.host.status_message(&clipboard_summary(&data));
        }
        result
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/sidebar/copy.rs"]
mod tests;
