//! Raw search event model

use serde::{Deserialize, Deserializer};

/// The eight fields every search projects, in the order they are both
/// requested from the backend and concatenated into dedup keys.
///
/// The fields clause of the query and [`RawEvent::dedup_key`] must agree on
/// this order; changing one without the other breaks dedup correctness.
pub const PROJECTED_FIELDS: [&str; 8] = [
    "hostname",
    "service_name",
    "state",
    "date_year",
    "date_month",
    "date_mday",
    "date_hour",
    "date_minute",
];

/// Alert states recognised by the query builder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertState {
    /// Service degraded
    Warning,
    /// Service in a critical state
    Critical,
    /// Service state could not be determined
    Unknown,
    /// Host or service down
    Down,
}

impl AlertState {
    /// The four states a service-level search matches
    pub const SERVICE_STATES: [AlertState; 4] =
        [Self::Warning, Self::Critical, Self::Unknown, Self::Down];

    /// Wire form of the state, as logged by the monitoring system
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Warning => "WARNING",
            Self::Critical => "CRITICAL",
            Self::Unknown => "UNKNOWN",
            Self::Down => "DOWN",
        }
    }
}

impl std::fmt::Display for AlertState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One log row returned by the search backend, restricted to the projected
/// schema fields
///
/// Timestamps are carried at minute granularity only. The backend logs one
/// row per alerted entity, and rows for the same occurrence can skew by a
/// few seconds, so two rows that agree on all eight fields are the same
/// logical alert occurrence.
///
/// Every field tolerates absence (filled with an empty string) and numeric
/// values (stringified); the backend is not trusted to be tidy. Extra fields
/// in the response are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawEvent {
    /// Host the alert fired on
    #[serde(default, deserialize_with = "scalar_string")]
    pub hostname: String,

    /// Service the alert fired for, empty for host-level alerts
    #[serde(default, deserialize_with = "scalar_string")]
    pub service_name: String,

    /// Alert state as logged (e.g. `CRITICAL`, `DOWN`)
    #[serde(default, deserialize_with = "scalar_string")]
    pub state: String,

    /// Year the row was logged
    #[serde(default, deserialize_with = "scalar_string")]
    pub date_year: String,

    /// Month the row was logged
    #[serde(default, deserialize_with = "scalar_string")]
    pub date_month: String,

    /// Day of month the row was logged
    #[serde(default, deserialize_with = "scalar_string")]
    pub date_mday: String,

    /// Hour the row was logged
    #[serde(default, deserialize_with = "scalar_string")]
    pub date_hour: String,

    /// Minute the row was logged
    #[serde(default, deserialize_with = "scalar_string")]
    pub date_minute: String,
}

impl RawEvent {
    /// Composite key identifying the logical alert occurrence this row
    /// belongs to: the eight projected fields joined in schema order.
    ///
    /// Rows differing only in seconds collapse to the same key because the
    /// schema stops at minute granularity.
    pub fn dedup_key(&self) -> String {
        [
            self.hostname.as_str(),
            self.service_name.as_str(),
            self.state.as_str(),
            self.date_year.as_str(),
            self.date_month.as_str(),
            self.date_mday.as_str(),
            self.date_hour.as_str(),
            self.date_minute.as_str(),
        ]
        .join("-")
    }
}

/// Accept strings, numbers, booleans, or null for a schema field, folding
/// everything into a string. Splunk emits date parts as either.
fn scalar_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => String::new(),
        Some(serde_json::Value::String(s)) => s,
        Some(other) => other.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedup_key_joins_fields_in_schema_order() {
        let event: RawEvent = serde_json::from_value(serde_json::json!({
            "hostname": "web0200.ny4",
            "service_name": "Disk Space",
            "state": "CRITICAL",
            "date_year": "2014",
            "date_month": "5",
            "date_mday": "17",
            "date_hour": "1",
            "date_minute": "14",
        }))
        .unwrap();

        assert_eq!(
            event.dedup_key(),
            "web0200.ny4-Disk Space-CRITICAL-2014-5-17-1-14"
        );
    }

    #[test]
    fn test_missing_fields_fill_empty() {
        let event: RawEvent = serde_json::from_value(serde_json::json!({
            "hostname": "web0200.ny4",
            "state": "DOWN",
        }))
        .unwrap();

        assert_eq!(event.service_name, "");
        assert_eq!(event.dedup_key(), "web0200.ny4--DOWN-----");
    }

    #[test]
    fn test_numeric_date_parts_stringified() {
        let event: RawEvent = serde_json::from_value(serde_json::json!({
            "hostname": "web0200.ny4",
            "state": "DOWN",
            "date_year": 2014,
            "date_minute": 14,
        }))
        .unwrap();

        assert_eq!(event.date_year, "2014");
        assert_eq!(event.date_minute, "14");
    }

    #[test]
    fn test_extra_fields_ignored() {
        let event: RawEvent = serde_json::from_value(serde_json::json!({
            "hostname": "web0200.ny4",
            "state": "DOWN",
            "_raw": "something verbose",
        }))
        .unwrap();

        assert_eq!(event.hostname, "web0200.ny4");
    }

    #[test]
    fn test_alert_state_wire_form() {
        assert_eq!(AlertState::Warning.to_string(), "WARNING");
        assert_eq!(AlertState::Down.to_string(), "DOWN");
    }
}
