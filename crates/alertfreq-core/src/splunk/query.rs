//! Search query construction
//!
//! Builds the backend search expression from an alert's host/service
//! identity. A host-level search looks for `DOWN` rows; a service-level
//! search looks for any degraded state of that one service.

use serde::Serialize;

use crate::models::{AlertState, PROJECTED_FIELDS};

/// Index the monitoring system logs alert rows to
pub const DEFAULT_INDEX: &str = "nagios";

/// A search scoped to one host and optionally one service
///
/// Immutable once built. Hostname and service are substituted into the
/// expression literally, without escaping: they originate from trusted
/// monitoring configuration, not user input.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    index: String,
    hostname: String,
    service: Option<String>,
}

impl SearchQuery {
    /// Create a query against the default index
    pub fn new(hostname: impl Into<String>, service: Option<&str>) -> Self {
        Self {
            index: DEFAULT_INDEX.to_string(),
            hostname: hostname.into(),
            service: service.map(String::from),
        }
    }

    /// Render the search expression
    ///
    /// Without a service the filter is `state="DOWN"` (host outage); with a
    /// service it is any of the four degraded states OR-combined. The
    /// trailing fields clause restricts output to the projected schema,
    /// which bounds response size and keeps dedup keys well-defined.
    pub fn render(&self) -> String {
        let mut query = format!(r#"search index={} hostname="{}""#, self.index, self.hostname);

        match &self.service {
            None => {
                query.push_str(&format!(r#" state="{}""#, AlertState::Down));
            }
            Some(service) => {
                let states = AlertState::SERVICE_STATES
                    .iter()
                    .map(|s| format!(r#"state="{s}""#))
                    .collect::<Vec<_>>()
                    .join(" OR ");
                query.push_str(&format!(r#" service_name="{service}" ({states})"#));
            }
        }

        query.push_str(&format!("| fields {}", PROJECTED_FIELDS.join(",")));
        query
    }
}

/// Form-encoded parameters for one oneshot search request
///
/// `exec_mode=oneshot` runs the search synchronously to completion and
/// returns all results in a single response, instead of creating a search
/// job to poll.
#[derive(Debug, Clone, Serialize)]
pub struct SearchParameters {
    /// Search execution mode, always `oneshot`
    pub exec_mode: &'static str,
    /// Window start, relative (e.g. `-7d`)
    pub earliest_time: String,
    /// Window end, `now` or an explicit timestamp
    pub latest_time: String,
    /// Response encoding, always `json`
    pub output_mode: &'static str,
    /// Result cap
    pub count: u32,
    /// Rendered search expression
    pub search: String,
}

impl SearchParameters {
    /// Build the request parameters for `query` over the last
    /// `duration_days` days ending at `latest_time`.
    pub fn new(
        query: &SearchQuery,
        duration_days: u32,
        max_results: u32,
        latest_time: &str,
    ) -> Self {
        Self {
            exec_mode: "oneshot",
            earliest_time: format!("-{duration_days}d"),
            latest_time: latest_time.to_string(),
            output_mode: "json",
            count: max_results,
            search: query.render(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_host_query_searches_down_state() {
        let rendered = SearchQuery::new("web0200.ny4", None).render();

        assert_eq!(
            rendered,
            r#"search index=nagios hostname="web0200.ny4" state="DOWN"| fields hostname,service_name,state,date_year,date_month,date_mday,date_hour,date_minute"#
        );
        assert!(!rendered.contains("service_name="));
    }

    #[test]
    fn test_service_query_combines_degraded_states() {
        let rendered = SearchQuery::new("web0200.ny4", Some("Disk Space")).render();

        assert_eq!(
            rendered,
            r#"search index=nagios hostname="web0200.ny4" service_name="Disk Space" (state="WARNING" OR state="CRITICAL" OR state="UNKNOWN" OR state="DOWN")| fields hostname,service_name,state,date_year,date_month,date_mday,date_hour,date_minute"#
        );
    }

    #[test]
    fn test_parameters_encode_window_and_cap() {
        let query = SearchQuery::new("web0200.ny4", None);
        let params = SearchParameters::new(&query, 7, 10000, "now");

        assert_eq!(params.exec_mode, "oneshot");
        assert_eq!(params.earliest_time, "-7d");
        assert_eq!(params.latest_time, "now");
        assert_eq!(params.output_mode, "json");
        assert_eq!(params.count, 10000);
        assert_eq!(params.search, query.render());
    }

    #[test]
    fn test_parameters_respect_latest_time_override() {
        let query = SearchQuery::new("web0200.ny4", None);
        let params = SearchParameters::new(&query, 1, 100, "2014-05-17T01:34:07");

        assert_eq!(params.earliest_time, "-1d");
        assert_eq!(params.latest_time, "2014-05-17T01:34:07");
    }
}
