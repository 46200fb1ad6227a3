//! 终端宿主：stdin 读取输入框/确认框，状态消息写到 stderr

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use zside::kernel::services::ports::{InputRequest, SidebarHost};

pub struct TerminalHost<R, W> {
    input: R,
    output: W,
    roots: Vec<PathBuf>,
    active: Option<PathBuf>,
    assume_yes: bool,
    opened: Vec<PathBuf>,
}

impl<R: BufRead, W: Write> TerminalHost<R, W> {
    pub fn new(
        input: R,
        output: W,
        roots: Vec<PathBuf>,
        active: Option<PathBuf>,
        assume_yes: bool,
    ) -> Self {
        Self {
            input,
            output,
            roots,
            active,
            assume_yes,
            opened: Vec::new(),
        }
    }

    /// Files the actions asked to open, in request order.
    pub fn take_opened(&mut self) -> Vec<PathBuf> {
        std::mem::take(&mut self.opened)
    }

    /// One line without its terminator; `None` on EOF or a read error.
    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
            Err(e) => {
                tracing::warn!(error = %e, "stdin read failed");
                None
            }
        }
    }

    fn print(&mut self, text: &str) {
        let _ = write!(self.output, "{}", text);
        let _ = self.output.flush();
    }
}

impl<R: BufRead, W: Write> SidebarHost for TerminalHost<R, W> {
    fn show_input(&mut self, request: InputRequest) -> Option<String> {
        let selected = request.selected_text();
        let prompt = if selected.is_empty() {
            format!("{} [{}] ", request.label, request.initial)
        } else {
            format!("{} [{}] ({}) ", request.label, request.initial, selected)
        };
        self.print(&prompt);
        let answer = self.read_line()?;
        if answer.is_empty() {
            Some(request.initial)
        } else {
            Some(answer)
        }
    }

    fn confirm(&mut self, message: &str, ok_label: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        self.print(&format!("{} [{}: y/N] ", message, ok_label));
        match self.read_line() {
            Some(answer) => {
                let answer = answer.trim();
                answer.eq_ignore_ascii_case("y")
                    || answer.eq_ignore_ascii_case("yes")
                    || answer.eq_ignore_ascii_case(ok_label)
            }
            None => false,
        }
    }

    fn status_message(&mut self, message: &str) {
        self.print(&format!("{}\n", message));
    }

    fn open_file(&mut self, path: &Path) {
        tracing::debug!(path = %path.display(), "open requested");
        self.opened.push(path.to_path_buf());
    }

    fn refresh_folder_list(&mut self) {}

    fn folders(&self) -> Vec<PathBuf> {
        self.roots.clone()
    }

    fn active_file(&self) -> Option<PathBuf> {
        self.active.clone()
    }
}

#[cfg(test)]
#[path = "../tests/unit/terminal_host.rs"]
mod tests;
