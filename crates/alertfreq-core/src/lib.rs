//! # alertfreq
//!
//! Historical alert-frequency enrichment for monitoring notifications.
//!
//! Given the host (and optionally the service) behind a freshly fired alert,
//! alertfreq queries a Splunk-style event-search backend for prior
//! occurrences, collapses redundant log rows, and renders a one-line summary
//! such as "this has fired 12 times this week" for inclusion in the outgoing
//! notification.
//!
//! ## Pipeline
//!
//! - **Query building**: host/service identity → search expression
//! - **Search**: one authenticated POST under strict timeouts
//! - **Aggregation**: duplicate log rows → deduplicated per-state counts
//! - **Formatting**: counts → a human-readable sentence
//!
//! Backend-side failures degrade to "no data" rather than blocking the alert
//! that triggered the lookup; only transport-level failures are surfaced.
//!
//! ## Quick Start
//!
//! ```bash
//! export SPLUNK_URL=https://splunk.example.com:8089/services/search/jobs
//! export SPLUNK_USERNAME=herald
//! export SPLUNK_PASSWORD=secret
//! alertfreq web0200.ny4 --service 'Disk Space'
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod aggregate;
pub mod config;
pub mod error;
pub mod models;
pub mod reporter;
pub mod splunk;

pub use config::SearchConfig;
pub use error::{Error, Result};
pub use reporter::{AlertFrequencyReporter, FrequencyOptions};

/// Re-exports for convenience
pub mod prelude {
    pub use crate::aggregate::aggregate_events;
    pub use crate::config::SearchConfig;
    pub use crate::error::{Error, Result};
    pub use crate::models::*;
    pub use crate::reporter::{AlertFrequencyReporter, FrequencyOptions};
    pub use crate::splunk::{SearchClient, SearchParameters, SearchQuery};
}
