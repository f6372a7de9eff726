//! Orchestration of the frequency lookup pipeline

use tracing::debug;

use crate::aggregate::aggregate_events;
use crate::config::SearchConfig;
use crate::error::{Error, Result};
use crate::models::FrequencyReport;
use crate::splunk::{SearchClient, SearchParameters, SearchQuery};

/// Options shaping one frequency lookup
#[derive(Debug, Clone)]
pub struct FrequencyOptions {
    /// Days of history to search
    pub duration_days: u32,
    /// Maximum number of raw rows to request
    pub max_results: u32,
    /// Window end, `now` or an explicit timestamp
    pub latest_time: String,
}

impl Default for FrequencyOptions {
    fn default() -> Self {
        Self {
            duration_days: 7,
            max_results: 10_000,
            latest_time: "now".to_string(),
        }
    }
}

/// Answers "how often has this alert fired recently?"
///
/// Ties the pipeline together: query construction, one search request,
/// aggregation, and report assembly. Construct once and reuse; the reporter
/// holds no per-call state.
pub struct AlertFrequencyReporter {
    client: SearchClient,
}

impl AlertFrequencyReporter {
    /// Create a reporter for the configured search backend
    pub fn new(config: &SearchConfig) -> Result<Self> {
        Ok(Self {
            client: SearchClient::new(config)?,
        })
    }

    /// Look up how frequently an alert for `hostname` (and optionally
    /// `service`) fired within the options' search window.
    ///
    /// `Ok(None)` means no data: the backend rejected the search or returned
    /// an unparsable body. A report with empty counts means the backend
    /// confirmed zero matching events; callers that embed the report need
    /// not distinguish the two, but logs do.
    pub async fn alert_frequency(
        &self,
        hostname: &str,
        service: Option<&str>,
        options: &FrequencyOptions,
    ) -> Result<Option<FrequencyReport>> {
        if hostname.is_empty() {
            return Err(Error::validation("hostname must not be empty"));
        }

        let query = SearchQuery::new(hostname, service);
        let params = SearchParameters::new(
            &query,
            options.duration_days,
            options.max_results,
            &options.latest_time,
        );

        let Some(events) = self.client.search(&params).await? else {
            return Ok(None);
        };

        debug!(hostname, service = ?service, rows = events.len(), "Aggregating search results");

        let counts = aggregate_events(&events);
        Ok(Some(FrequencyReport::new(
            hostname,
            service.map(String::from),
            options.duration_days,
            counts,
        )))
    }
}
