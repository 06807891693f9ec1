use crate::ports::{ClipboardWriter, TextGenerator};

/// Application context holding the collaborators a submission needs.
///
/// Built once at startup and passed to every submission.
pub struct AppContext<G: TextGenerator, C: ClipboardWriter> {
    generator: G,
    clipboard: C,
}

impl<G: TextGenerator, C: ClipboardWriter> AppContext<G, C> {
    /// Create a new application context.
    pub fn new(generator: G, clipboard: C) -> Self {
        Self { generator, clipboard }
    }

    /// Get a reference to the text-generation client.
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Get a mutable reference to the clipboard writer.
    pub fn clipboard_mut(&mut self) -> &mut C {
        &mut self.clipboard
    }
}
