//! Error types for alertfreq

use thiserror::Error;

/// Result type alias using alertfreq's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for alertfreq operations
///
/// Backend rejections (non-2xx status) and malformed response bodies are
/// deliberately *not* represented here: those are soft failures that the
/// search client logs and maps to "no data", so a missing enrichment can
/// never block delivery of the alert it was meant to decorate.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (bad endpoint URL, missing credentials)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation error on caller-supplied input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Transport error (connection, TLS handshake, or read timeout)
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl Error {
    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
