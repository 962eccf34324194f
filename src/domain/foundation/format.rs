//! Date formatting helpers for list and detail views.
//!
//! The backend sends ISO-8601 timestamps; the admin tables show the date
//! part only, and detail views add the time. Absent values render as an
//! em dash placeholder.

use chrono::{DateTime, Utc};

/// Placeholder shown for absent dates.
pub const NO_DATE: &str = "\u{2014}";

/// Formats a timestamp as `YYYY-MM-DD`, or the placeholder when absent.
pub fn format_date(value: Option<&DateTime<Utc>>) -> String {
    match value {
        Some(date) => date.format("%Y-%m-%d").to_string(),
        None => NO_DATE.to_string(),
    }
}

/// Formats a timestamp as `YYYY-MM-DD HH:MM`, or the placeholder when absent.
pub fn format_date_time(value: Option<&DateTime<Utc>>) -> String {
    match value {
        Some(date) => date.format("%Y-%m-%d %H:%M").to_string(),
        None => NO_DATE.to_string(),
    }
}
