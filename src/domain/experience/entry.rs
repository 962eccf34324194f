//! Experience timeline entries as the backend returns them.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A work experience entry owned by the backend.
///
/// Invariants (enforced at the form boundary, trusted here):
/// - `is_current` implies `end_date` is `None`
/// - when both dates are present, `end_date >= start_date`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    /// Backend-generated identifier.
    #[serde(rename = "_id")]
    pub id: String,

    pub role: String,
    pub company: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,

    /// `None` means "no end date / currently ongoing".
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub is_current: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    /// Manual display position; the timeline sorts by this before dates.
    #[serde(default)]
    pub order: f64,
}

/// Display ordering for the timeline: `order` ascending, ties broken by
/// `start_date` descending. A missing start date counts as the epoch, so
/// among equal orders entries without a date sink to the bottom.
pub fn display_ordering(a: &ExperienceEntry, b: &ExperienceEntry) -> Ordering {
    a.order.total_cmp(&b.order).then_with(|| {
        let a_start = a.start_date.map(|d| d.timestamp_millis()).unwrap_or(0);
        let b_start = b.start_date.map(|d| d.timestamp_millis()).unwrap_or(0);
        b_start.cmp(&a_start)
    })
}

/// Returns the entries sorted for display without mutating the input.
pub fn sorted_for_display(entries: &[ExperienceEntry]) -> Vec<&ExperienceEntry> {
    let mut sorted: Vec<&ExperienceEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| display_ordering(a, b));
    sorted
}

/// Counters shown above the experience table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperienceStats {
    pub total: usize,
    pub current: usize,
}

impl ExperienceStats {
    /// Tallies the list: total entries and how many are marked current.
    pub fn tally(entries: &[ExperienceEntry]) -> Self {
        Self {
            total: entries.len(),
            current: entries.iter().filter(|e| e.is_current).count(),
        }
    }
}

#[cfg(test)]
#[path = "entry_test.rs"]
mod entry_test;
