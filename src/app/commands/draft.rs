use serde::Serialize;
use tracing::info;

use crate::app::AppContext;
use crate::domain::{AgentReply, AppError, EmailRequest, ParseNotice, compose, parse};
use crate::ports::{ClipboardWriter, TextGenerator};

/// Everything the display surface needs from one submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DraftOutcome {
    pub reply: AgentReply,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<ParseNotice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_text: Option<String>,
}

impl DraftOutcome {
    /// Parse a raw reply and attach its notice and export text.
    pub fn from_raw(raw: &str) -> Self {
        let reply = parse(raw);
        let notice = reply.notice();
        let export_text = reply.export_text();
        Self { reply, notice, export_text }
    }

    pub fn is_unparsed(&self) -> bool {
        matches!(self.reply, AgentReply::Unparsed { .. })
    }
}

/// Execute one drafting submission: compose, generate, parse.
///
/// Service failures are returned to the caller; parse degradation is not an
/// error and is reported through [`DraftOutcome::notice`].
pub fn execute<G, C>(
    ctx: &AppContext<G, C>,
    request: &EmailRequest,
) -> Result<DraftOutcome, AppError>
where
    G: TextGenerator,
    C: ClipboardWriter,
{
    let instruction = compose(request);
    info!(tone = %request.tone(), chars = instruction.len(), "submitting draft request");

    let raw = ctx.generator().generate(&instruction)?;
    let outcome = DraftOutcome::from_raw(&raw);

    match outcome.notice {
        Some(notice) => info!(?notice, "reply did not match the five-section layout"),
        None => info!("reply parsed into five sections"),
    }

    Ok(outcome)
}
