//! Configuration models loaded from `.maildraft/config.toml`.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

/// Top-level configuration. Every table is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Gemini API configuration.
    #[serde(default)]
    pub gemini: GeminiApiConfig,
}

impl AppConfig {
    /// Parse and validate TOML content.
    pub fn from_toml(content: &str) -> Result<Self, AppError> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        self.gemini.validate()
    }
}

/// Gemini `generateContent` endpoint configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeminiApiConfig {
    /// API base URL, without the `models/...` suffix.
    #[serde(default = "default_api_base")]
    pub api_base: Url,
    /// Model name.
    #[serde(default = "default_model")]
    pub model: String,
    /// Transport timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for GeminiApiConfig {
    fn default() -> Self {
        Self { api_base: default_api_base(), model: default_model(), timeout_secs: default_timeout() }
    }
}

impl GeminiApiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.model.trim().is_empty() {
            return Err(AppError::config_error("gemini.model must not be empty"));
        }
        if self.model.contains('/') {
            return Err(AppError::config_error(format!(
                "gemini.model '{}' must be a bare model name",
                self.model
            )));
        }
        if self.timeout_secs == 0 {
            return Err(AppError::config_error("gemini.timeout_secs must be greater than 0"));
        }
        Ok(())
    }

    /// Full URL of the `generateContent` method for the configured model.
    pub fn generate_content_url(&self) -> Result<Url, AppError> {
        let base = self.api_base.as_str().trim_end_matches('/');
        let url = format!("{}/models/{}:generateContent", base, self.model.trim());
        Url::parse(&url)
            .map_err(|e| AppError::config_error(format!("Invalid Gemini endpoint '{}': {}", url, e)))
    }
}

fn default_api_base() -> Url {
    Url::parse("https://generativelanguage.googleapis.com/v1beta")
        .expect("Default API URL must be valid")
}

fn default_model() -> String {
    "gemini-2.5-pro".to_string()
}

fn default_timeout() -> u64 {
    120
}
