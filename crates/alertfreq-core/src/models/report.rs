//! Frequency report model and sentence rendering

use std::fmt;

/// Deduplicated occurrence count for one alert state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateCount {
    /// Alert state as logged by the backend
    pub state: String,
    /// Number of distinct occurrences in the search window
    pub count: usize,
}

/// Per-state occurrence counts, descending by count
///
/// Never contains a zero-count entry: an absent state means zero. Equal
/// counts keep the order the states were first seen in the input.
pub type AggregatedCounts = Vec<StateCount>;

/// Summary of how often an alert fired over a search window
///
/// Only constructed when the backend actually answered; "backend confirmed
/// zero matching events" is a report with empty `counts`, which is distinct
/// from the no-data outcome of a failed search.
#[derive(Debug, Clone)]
pub struct FrequencyReport {
    /// Human-readable window, e.g. "7 days"
    pub period: String,
    /// Host the search was scoped to
    pub hostname: String,
    /// Service the search was scoped to, if any
    pub service: Option<String>,
    /// Deduplicated per-state counts
    pub counts: AggregatedCounts,
}

impl FrequencyReport {
    /// Build a report for the given scope and duration
    pub fn new(
        hostname: impl Into<String>,
        service: Option<String>,
        duration_days: u32,
        counts: AggregatedCounts,
    ) -> Self {
        Self {
            period: format!("{} {}", duration_days, day_word(duration_days)),
            hostname: hostname.into(),
            service,
            counts,
        }
    }
}

impl fmt::Display for FrequencyReport {
    /// Renders the notification sentence, e.g.
    /// `HOST 'web0200.ny4' has experienced 3 CRITICAL alerts, 1 WARNING
    /// alerts for SERVICE 'Disk Space' in the last 7 days.`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HOST '{}' has experienced ", self.hostname)?;

        if self.counts.is_empty() {
            write!(f, "no alerts")?;
        } else {
            for (i, entry) in self.counts.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{} {} alerts", entry.count, entry.state)?;
            }
        }

        if let Some(service) = &self.service {
            write!(f, " for SERVICE '{service}'")?;
        }

        write!(f, " in the last {}.", self.period)
    }
}

/// "day" for exactly 1, "days" for everything else (including 0)
fn day_word(duration_days: u32) -> &'static str {
    if duration_days == 1 {
        "day"
    } else {
        "days"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn count(state: &str, count: usize) -> StateCount {
        StateCount {
            state: state.to_string(),
            count,
        }
    }

    #[test]
    fn test_host_report_single_day() {
        let report = FrequencyReport::new("web0200.ny4", None, 1, vec![count("DOWN", 2)]);

        assert_eq!(
            report.to_string(),
            "HOST 'web0200.ny4' has experienced 2 DOWN alerts in the last 1 day."
        );
    }

    #[test]
    fn test_service_report_multiple_states() {
        let report = FrequencyReport::new(
            "web0200.ny4",
            Some("Disk Space".to_string()),
            7,
            vec![count("CRITICAL", 3), count("WARNING", 1)],
        );

        assert_eq!(
            report.to_string(),
            "HOST 'web0200.ny4' has experienced 3 CRITICAL alerts, 1 WARNING alerts \
             for SERVICE 'Disk Space' in the last 7 days."
        );
    }

    #[test]
    fn test_zero_duration_pluralizes() {
        let report = FrequencyReport::new("web0200.ny4", None, 0, vec![count("DOWN", 1)]);

        assert!(report.to_string().ends_with("in the last 0 days."));
    }

    #[test]
    fn test_empty_counts_render_no_alerts() {
        let report = FrequencyReport::new("web0200.ny4", None, 7, vec![]);

        assert_eq!(
            report.to_string(),
            "HOST 'web0200.ny4' has experienced no alerts in the last 7 days."
        );
    }
}
