//! Structured view of the model's reply.

use serde::Serialize;

/// Subject shown when the reply used the older format without a subject section.
pub const DEGRADED_SUBJECT: &str = "Check Body for Subject";
/// Guide shown when the reply used the older format without a guide section.
pub const DEGRADED_GUIDE: &str = "Could not parse guide.";

/// Result of parsing one model reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AgentReply {
    /// All five sections were found.
    Full { reasoning: String, plan: String, subject: String, body: String, guide: String },
    /// Only the older reasoning / plan / draft layout was found.
    Degraded { reasoning: String, plan: String, draft_body: String },
    /// Neither layout matched; the raw reply is kept verbatim.
    Unparsed { raw: String },
}

impl AgentReply {
    pub fn reasoning(&self) -> Option<&str> {
        match self {
            AgentReply::Full { reasoning, .. } | AgentReply::Degraded { reasoning, .. } => {
                Some(reasoning)
            }
            AgentReply::Unparsed { .. } => None,
        }
    }

    pub fn plan(&self) -> Option<&str> {
        match self {
            AgentReply::Full { plan, .. } | AgentReply::Degraded { plan, .. } => Some(plan),
            AgentReply::Unparsed { .. } => None,
        }
    }

    /// Subject line, or the fixed placeholder for a degraded reply.
    pub fn subject(&self) -> Option<&str> {
        match self {
            AgentReply::Full { subject, .. } => Some(subject),
            AgentReply::Degraded { .. } => Some(DEGRADED_SUBJECT),
            AgentReply::Unparsed { .. } => None,
        }
    }

    pub fn body(&self) -> Option<&str> {
        match self {
            AgentReply::Full { body, .. } => Some(body),
            AgentReply::Degraded { draft_body, .. } => Some(draft_body),
            AgentReply::Unparsed { .. } => None,
        }
    }

    /// Guide text, or the fixed placeholder for a degraded reply.
    pub fn guide(&self) -> Option<&str> {
        match self {
            AgentReply::Full { guide, .. } => Some(guide),
            AgentReply::Degraded { .. } => Some(DEGRADED_GUIDE),
            AgentReply::Unparsed { .. } => None,
        }
    }

    /// Raw text of an unparsed reply.
    pub fn raw(&self) -> Option<&str> {
        match self {
            AgentReply::Unparsed { raw } => Some(raw),
            _ => None,
        }
    }

    /// Text placed on the clipboard: `Subject: {subject}\n\n{body}`.
    pub fn export_text(&self) -> Option<String> {
        let subject = self.subject()?;
        let body = self.body()?;
        Some(format!("Subject: {subject}\n\n{body}"))
    }

    /// Warning or error that should accompany this reply when rendered.
    pub fn notice(&self) -> Option<ParseNotice> {
        match self {
            AgentReply::Full { .. } => None,
            AgentReply::Degraded { .. } => Some(ParseNotice::Degraded),
            AgentReply::Unparsed { .. } => Some(ParseNotice::Unparsed),
        }
    }
}

/// Non-fatal parse outcome surfaced next to the reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseNotice {
    /// Older four-part layout; shown as a warning.
    Degraded,
    /// No layout matched; shown as an error next to the raw text.
    Unparsed,
}

impl ParseNotice {
    pub fn message(&self) -> &'static str {
        match self {
            ParseNotice::Degraded => {
                "Agent response was not in the expected 5-part format. Showing fallback parse."
            }
            ParseNotice::Unparsed => "Failed to parse agent response. Displaying raw output.",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ParseNotice::Unparsed)
    }
}
