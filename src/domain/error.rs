use std::io;

use thiserror::Error;

/// Library-wide error type for maildraft operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or credential issue. Fatal at startup.
    #[error("{0}")]
    Configuration(String),

    /// Form input rejected before a request could be composed.
    #[error("{0}")]
    Validation(String),

    /// Tone name is not one of the supported tones.
    #[error("Invalid tone '{name}': must be one of Formal, Polite, Direct, Concise, Empathetic")]
    InvalidTone { name: String },

    /// The text-generation call failed (network, auth rejection, quota).
    #[error("Error communicating with the AI: {0}")]
    Service(String),

    /// No clipboard backend is available.
    #[error("Clipboard unavailable: {0}")]
    Clipboard(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn service_error<S: Into<String>>(message: S) -> Self {
        AppError::Service(message.into())
    }
}
