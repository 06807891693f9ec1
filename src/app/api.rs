//! Startup wiring for the production collaborators.

use std::path::Path;

use tracing::info;

use crate::app::AppContext;
use crate::app::config::{load_config, resolve_api_key};
use crate::domain::AppError;
use crate::services::{ArboardClipboard, HttpGeminiClient};

/// Context backed by Gemini over HTTP and the system clipboard.
pub type LiveContext = AppContext<HttpGeminiClient, ArboardClipboard>;

/// Resolve configuration and credential under `root` and build the context.
///
/// Any failure here is a configuration error and must stop the program
/// before a submission is accepted.
pub fn connect(root: &Path) -> Result<LiveContext, AppError> {
    let config = load_config(root)?;
    let api_key = resolve_api_key(root, |name| std::env::var(name).ok())?;
    let client = HttpGeminiClient::new(api_key, &config.gemini)?;

    info!(model = client.model(), "text-generation client ready");
    Ok(AppContext::new(client, ArboardClipboard::new()))
}

/// [`connect`] using the current working directory.
pub fn connect_current() -> Result<LiveContext, AppError> {
    let root = std::env::current_dir()?;
    connect(&root)
}
