//! Configuration for the search backend connection

use serde::{Deserialize, Serialize};

/// Connection configuration for the search backend
///
/// `url` is the full search endpoint, including scheme, port, and path
/// (e.g. `https://splunk.example.com:8089/services/search/jobs`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Search endpoint URL
    pub url: String,

    /// Username authorized to run searches
    pub username: String,

    /// Password for `username`
    pub password: String,

    /// Connection-establishment timeout in seconds
    pub connect_timeout_secs: u64,

    /// Response-read timeout in seconds
    pub read_timeout_secs: u64,

    /// Skip TLS certificate validation
    ///
    /// Off by default. Only enable for internal backends with self-signed
    /// certificates; the legacy deployment this tool replaces had validation
    /// hard-disabled, which is preserved here as an explicit opt-in instead.
    pub accept_invalid_certs: bool,
}

impl SearchConfig {
    /// Create a config for the given endpoint and credentials, with default
    /// timeouts and certificate validation enabled.
    pub fn new(
        url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            username: username.into(),
            password: password.into(),
            ..Self::default()
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            username: String::new(),
            password: String::new(),
            connect_timeout_secs: 1,
            read_timeout_secs: 2,
            accept_invalid_certs: false,
        }
    }
}
