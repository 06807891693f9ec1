//! Configuration and credential loading from the working directory.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::domain::{AppConfig, AppError};

/// Control directory holding `config.toml` and `secrets.toml`.
pub const CONFIG_DIR: &str = ".maildraft";
pub const CONFIG_FILE: &str = "config.toml";
pub const SECRETS_FILE: &str = "secrets.toml";
/// Credential key, both in `secrets.toml` and the environment.
pub const API_KEY_VAR: &str = "GOOGLE_API_KEY";

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_DIR).join(CONFIG_FILE)
}

pub fn secrets_path(root: &Path) -> PathBuf {
    root.join(CONFIG_DIR).join(SECRETS_FILE)
}

/// Load `.maildraft/config.toml`, falling back to defaults when it is absent.
pub fn load_config(root: &Path) -> Result<AppConfig, AppError> {
    let path = config_path(root);
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(AppConfig::default());
    }

    let content = fs::read_to_string(&path)?;
    AppConfig::from_toml(&content)
        .map_err(|e| AppError::config_error(format!("{}: {}", path.display(), e)))
}

#[derive(Debug, Deserialize)]
struct Secrets {
    #[serde(rename = "GOOGLE_API_KEY", default)]
    google_api_key: Option<String>,
}

/// Resolve the API key: `secrets.toml` first, then the environment.
///
/// A missing or blank key is a configuration error.
pub fn resolve_api_key<F>(root: &Path, env_lookup: F) -> Result<String, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(key) = read_secrets_key(root) {
        debug!("using API key from secrets file");
        return Ok(key);
    }

    env_lookup(API_KEY_VAR)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .ok_or_else(|| {
            AppError::config_error(format!(
                "{} not found in {}/{} or environment. Set it before running.",
                API_KEY_VAR, CONFIG_DIR, SECRETS_FILE
            ))
        })
}

fn read_secrets_key(root: &Path) -> Option<String> {
    let path = secrets_path(root);
    let content = fs::read_to_string(&path).ok()?;

    match toml::from_str::<Secrets>(&content) {
        Ok(secrets) => secrets
            .google_api_key
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty()),
        Err(err) => {
            warn!(path = %path.display(), error = %err, "ignoring unreadable secrets file");
            None
        }
    }
}
