use serde::Serialize;
use tracing::debug;

use crate::app::AppContext;
use crate::domain::AgentReply;
use crate::ports::{ClipboardWriter, TextGenerator};

/// Result of copying the drafted email to the clipboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CopyOutcome {
    Copied,
    /// The clipboard backend failed; the user has to copy by hand.
    Unavailable { reason: String },
    /// The reply was unparsed, so there is no subject and body to export.
    NothingToCopy,
}

impl CopyOutcome {
    pub fn message(&self) -> String {
        match self {
            CopyOutcome::Copied => "Full email (Subject + Body) copied to clipboard!".to_string(),
            CopyOutcome::Unavailable { reason } => format!(
                "Could not copy to clipboard automatically ({}). Please copy the text manually.\n\
                 On Linux you may need a clipboard provider such as xclip or wl-clipboard.",
                reason
            ),
            CopyOutcome::NothingToCopy => {
                "Nothing to copy: the reply could not be split into subject and body.".to_string()
            }
        }
    }
}

/// Copy `Subject: {subject}\n\n{body}` to the clipboard.
///
/// Never fails: clipboard errors are folded into [`CopyOutcome::Unavailable`].
pub fn execute<G, C>(ctx: &mut AppContext<G, C>, reply: &AgentReply) -> CopyOutcome
where
    G: TextGenerator,
    C: ClipboardWriter,
{
    let Some(text) = reply.export_text() else {
        return CopyOutcome::NothingToCopy;
    };

    match ctx.clipboard_mut().write_text(&text) {
        Ok(()) => CopyOutcome::Copied,
        Err(err) => {
            debug!(error = %err, "clipboard write failed");
            CopyOutcome::Unavailable { reason: err.to_string() }
        }
    }
}
