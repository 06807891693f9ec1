use crate::domain::AppError;

/// Port for writing the exported email to the system clipboard.
pub trait ClipboardWriter {
    /// Write text to the clipboard.
    ///
    /// Fails with [`AppError::Clipboard`] when no clipboard backend is available.
    fn write_text(&mut self, text: &str) -> Result<(), AppError>;
}
