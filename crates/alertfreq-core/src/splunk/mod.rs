//! Search backend integration
//!
//! Query construction and the single-request search client for a
//! Splunk-style event-search API.

mod client;
mod query;

pub use client::SearchClient;
pub use query::{SearchParameters, SearchQuery, DEFAULT_INDEX};
