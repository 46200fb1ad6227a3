#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard is not available")]
    NotAvailable,
    #[error("failed to write clipboard: {0}")]
    SetFailed(String),
}

pub trait ClipboardPort {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}
