//! Terminal rendering of a drafting outcome.

use crate::app::commands::draft::DraftOutcome;
use crate::app::commands::export::CopyOutcome;
use crate::domain::{AgentReply, ParseNotice};

/// Process exit code for an outcome: 2 when the reply could not be parsed.
pub fn exit_code(outcome: &DraftOutcome) -> i32 {
    if outcome.is_unparsed() { 2 } else { 0 }
}

/// Sections for stdout. An unparsed reply renders as its raw text.
pub fn render_reply(reply: &AgentReply) -> String {
    if let AgentReply::Unparsed { raw } = reply {
        return raw.clone();
    }

    let section = |value: Option<&str>| value.unwrap_or_default().to_string();
    format!(
        "✅ Agent Executed Successfully\n\
         \n\
         ── Agent's Internal Process ──\n\
         🧠 Reasoning:\n{}\n\
         \n\
         📝 Plan:\n{}\n\
         \n\
         ── Your Ready-to-Send Email ──\n\
         💡 Guide & Analysis:\n{}\n\
         \n\
         📬 Subject:\n{}\n\
         \n\
         📧 Email Body:\n{}",
        section(reply.reasoning()),
        section(reply.plan()),
        section(reply.guide()),
        section(reply.subject()),
        section(reply.body()),
    )
}

pub fn render_notice(notice: ParseNotice) -> String {
    let marker = if notice.is_error() { "❌" } else { "⚠️ " };
    format!("{} {}", marker, notice.message())
}

/// Print notice to stderr and sections to stdout.
pub fn print_outcome(outcome: &DraftOutcome) {
    if let Some(notice) = outcome.notice {
        eprintln!("{}", render_notice(notice));
    }
    println!("{}", render_reply(&outcome.reply));
}

pub fn print_copy_outcome(outcome: &CopyOutcome) {
    match outcome {
        CopyOutcome::Copied => println!("📋 {}", outcome.message()),
        CopyOutcome::Unavailable { .. } | CopyOutcome::NothingToCopy => {
            eprintln!("⚠️  {}", outcome.message())
        }
    }
}
