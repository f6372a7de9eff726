//! Event aggregation
//!
//! Collapses the backend's redundant log rows into deduplicated per-state
//! occurrence counts. The monitoring system logs one row per alerted entity,
//! so a single alert occurrence can produce several rows; rows for the same
//! occurrence can also skew by a few seconds, which the minute-granularity
//! dedup key absorbs.

use std::collections::{HashMap, HashSet};

use crate::models::{AggregatedCounts, RawEvent, StateCount};

/// Aggregate raw log rows into per-state counts of distinct occurrences
///
/// Rows sharing an identical eight-field projection count once. Output is
/// sorted by descending count; equal counts keep first-seen state order
/// (the sort is stable over insertion order), so the result is deterministic
/// for a given input ordering. Empty input produces empty counts.
pub fn aggregate_events(events: &[RawEvent]) -> AggregatedCounts {
    let mut state_order: Vec<String> = Vec::new();
    let mut keys_by_state: HashMap<String, HashSet<String>> = HashMap::new();

    for event in events {
        if !keys_by_state.contains_key(&event.state) {
            state_order.push(event.state.clone());
        }
        keys_by_state
            .entry(event.state.clone())
            .or_default()
            .insert(event.dedup_key());
    }

    let mut counts: AggregatedCounts = state_order
        .into_iter()
        .map(|state| {
            let count = keys_by_state[&state].len();
            StateCount { state, count }
        })
        .collect();

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}
