//! maildraft: draft professional emails with a hosted language model.
//!
//! The core is a prompt/parse contract: [`compose`] turns an [`EmailRequest`]
//! into an instruction and [`parse`] splits the model's reply into an
//! [`AgentReply`].

use std::path::Path;

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;


pub use app::AppContext;
pub use app::commands::draft::DraftOutcome;
pub use app::commands::export::CopyOutcome;
pub use domain::{
    AgentReply, AppConfig, AppError, EmailRequest, GeminiApiConfig, ParseNotice, SenderIdentity,
    Tone, compose, parse,
};
pub use ports::{ClipboardWriter, TextGenerator};

/// Draft one email using the configuration and credential found under `root`.
///
/// Reads `root/.maildraft/config.toml` and the API key from
/// `root/.maildraft/secrets.toml` or `GOOGLE_API_KEY`.
pub fn draft_at(root: &Path, request: &EmailRequest) -> Result<DraftOutcome, AppError> {
    let ctx = app::api::connect(root)?;
    app::commands::draft::execute(&ctx, request)
}

/// Draft one email with caller-supplied collaborators.
pub fn draft_with<G, C>(
    ctx: &AppContext<G, C>,
    request: &EmailRequest,
) -> Result<DraftOutcome, AppError>
where
    G: TextGenerator,
    C: ClipboardWriter,
{
    app::commands::draft::execute(ctx, request)
}

/// Copy the reply's `Subject + Body` export to the context's clipboard.
pub fn copy_to_clipboard<G, C>(ctx: &mut AppContext<G, C>, reply: &AgentReply) -> CopyOutcome
where
    G: TextGenerator,
    C: ClipboardWriter,
{
    app::commands::export::execute(ctx, reply)
}
