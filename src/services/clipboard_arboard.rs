use arboard::Clipboard;

use crate::domain::AppError;
use crate::ports::ClipboardWriter;

/// Arboard-based clipboard implementation.
///
/// The backend is opened on first write so that a headless environment only
/// fails when the user actually asks to copy.
#[derive(Default)]
pub struct ArboardClipboard {
    clipboard: Option<Clipboard>,
}

impl ArboardClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn backend(&mut self) -> Result<&mut Clipboard, AppError> {
        if self.clipboard.is_none() {
            let clipboard =
                Clipboard::new().map_err(|e| AppError::Clipboard(format!("{}", e)))?;
            self.clipboard = Some(clipboard);
        }
        self.clipboard.as_mut().ok_or_else(|| AppError::Clipboard("not initialized".to_string()))
    }
}

impl ClipboardWriter for ArboardClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), AppError> {
        self.backend()?.set_text(text).map_err(|e| AppError::Clipboard(format!("{}", e)))
    }
}
