//! Data models for search events and frequency reports

mod event;
mod report;

pub use event::{AlertState, RawEvent, PROJECTED_FIELDS};
pub use report::{AggregatedCounts, FrequencyReport, StateCount};
