//! Search execution against the backend HTTP API

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};
use url::Url;

use crate::config::SearchConfig;
use crate::error::{Error, Result};
use crate::models::RawEvent;

use super::query::SearchParameters;

/// Client for one Splunk-style search endpoint
///
/// Issues exactly one authenticated POST per [`search`](Self::search) call;
/// retry policy belongs to the caller. Holds only the endpoint, credentials,
/// and a configured `reqwest::Client`, so a single instance is safe to share
/// across concurrent lookups.
#[derive(Debug)]
pub struct SearchClient {
    endpoint: Url,
    username: String,
    password: String,
    http: Client,
}

impl SearchClient {
    /// Create a client from connection configuration
    ///
    /// Fails with [`Error::Config`] on a malformed endpoint URL or missing
    /// credentials; nothing is retried or deferred to request time.
    pub fn new(config: &SearchConfig) -> Result<Self> {
        let endpoint = Url::parse(&config.url)
            .map_err(|e| Error::config(format!("invalid search endpoint '{}': {e}", config.url)))?;

        if config.username.is_empty() {
            return Err(Error::config("search username must not be empty"));
        }
        if config.password.is_empty() {
            return Err(Error::config("search password must not be empty"));
        }

        let http = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.read_timeout_secs))
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()
            .map_err(|e| Error::config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            endpoint,
            username: config.username.clone(),
            password: config.password.clone(),
            http,
        })
    }

    /// Run one oneshot search
    ///
    /// Returns `Ok(Some(events))` on a parseable 2xx response (the list may
    /// be empty: that is the backend confirming zero matches), `Ok(None)`
    /// when the backend rejected the query or returned an unparsable body
    /// (both logged, with distinct messages, so operators can tell the two
    /// apart), and `Err` only for transport-level failures.
    pub async fn search(&self, params: &SearchParameters) -> Result<Option<Vec<RawEvent>>> {
        debug!(search = %params.search, earliest = %params.earliest_time, "Submitting search");

        let response = self
            .http
            .post(self.endpoint.clone())
            .basic_auth(&self.username, Some(&self.password))
            .form(params)
            .send()
            .await
            .map_err(Error::Transport)?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, "Search backend rejected the query");
            return Ok(None);
        }

        let body = response.text().await.map_err(Error::Transport)?;

        match serde_json::from_str::<Vec<RawEvent>>(&body) {
            Ok(events) => {
                debug!(count = events.len(), "Search returned events");
                Ok(Some(events))
            }
            Err(e) => {
                warn!(error = %e, "Failed to parse search response; perhaps an empty result?");
                Ok(None)
            }
        }
    }
}
