//! 剪贴板服务
//!
//! 封装系统剪贴板；无图形会话时（CI、ssh）降级为不可用

use crate::kernel::services::ports::{ClipboardError, ClipboardPort};
use arboard::Clipboard;

pub struct ClipboardService {
    clipboard: Option<Clipboard>,
}

impl ClipboardService {
    pub fn new() -> Self {
        let clipboard = match Clipboard::new() {
            Ok(clipboard) => Some(clipboard),
            Err(e) => {
                tracing::debug!(error = %e, "system clipboard unavailable");
                None
            }
        };
        Self { clipboard }
    }
}

impl ClipboardPort for ClipboardService {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let clipboard = self
            .clipboard
            .as_mut()
            .ok_or(ClipboardError::NotAvailable)?;

        clipboard
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::SetFailed(e.to_string()))
    }
}

impl Default for ClipboardService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/clipboard.rs"]
mod tests;
