//! Form state and client-side validation for experience entries.
//!
//! The draft holds fields exactly as a form does (strings, a checkbox);
//! `validate` either produces the wire payload or the per-field errors
//! that block submission. Nothing invalid is ever sent to the backend.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::domain::foundation::{FieldErrors, ValidationError};

use super::ExperienceEntry;

/// Date format used by form date inputs.
const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// What the form holds while the user edits an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExperienceDraft {
    pub role: String,
    pub company: String,
    pub location: String,
    /// `YYYY-MM-DD`, empty when unset.
    pub start_date: String,
    /// `YYYY-MM-DD`, empty when unset. Must stay empty while `is_current`.
    pub end_date: String,
    pub is_current: bool,
    pub description: String,
    /// Comma-separated tags as typed.
    pub tags_text: String,
    /// Display position as typed; coerces to a finite number or 0.
    pub order_text: String,
}

impl ExperienceDraft {
    /// Prefills a draft from an existing entry (edit mode).
    pub fn from_entry(entry: &ExperienceEntry) -> Self {
        Self {
            role: entry.role.clone(),
            company: entry.company.clone(),
            location: entry.location.clone().unwrap_or_default(),
            start_date: entry
                .start_date
                .map(|d| d.format(DATE_INPUT_FORMAT).to_string())
                .unwrap_or_default(),
            end_date: entry
                .end_date
                .map(|d| d.format(DATE_INPUT_FORMAT).to_string())
                .unwrap_or_default(),
            is_current: entry.is_current,
            description: entry.description.clone().unwrap_or_default(),
            tags_text: entry.tags.join(", "),
            order_text: entry.order.to_string(),
        }
    }

    /// Validates the draft and builds the wire payload.
    ///
    /// Rules:
    /// - `role` and `company` are required non-empty strings
    /// - dates must be `YYYY-MM-DD` when present
    /// - `is_current` requires an empty `end_date`
    /// - when both dates are set, `end_date` must not precede `start_date`
    pub fn validate(&self) -> Result<ExperiencePayload, FieldErrors> {
        let mut errors = FieldErrors::new();

        if self.role.trim().is_empty() {
            errors.push(ValidationError::empty_field("role"));
        }
        if self.company.trim().is_empty() {
            errors.push(ValidationError::empty_field("company"));
        }

        let start = parse_date_field("startDate", &self.start_date, &mut errors);
        let end = parse_date_field("endDate", &self.end_date, &mut errors);

        if self.is_current && !self.end_date.trim().is_empty() {
            errors.push(ValidationError::conflict(
                "endDate",
                "must be empty for a current role",
            ));
        }

        if let (Some(start), Some(end)) = (start, end) {
            if end < start {
                errors.push(ValidationError::conflict(
                    "endDate",
                    "must not precede startDate",
                ));
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        let location = non_empty(&self.location);
        let description = non_empty(&self.description);

        Ok(ExperiencePayload {
            role: self.role.trim().to_string(),
            company: self.company.trim().to_string(),
            location,
            start_date: start.map(to_utc_midnight),
            end_date: if self.is_current { None } else { end.map(to_utc_midnight) },
            is_current: self.is_current,
            description,
            tags: normalize_tags(&self.tags_text),
            order: coerce_order(&self.order_text),
        })
    }
}

/// The create/update request body.
///
/// Absent optionals are omitted from the JSON, except `endDate`: the
/// backend distinguishes "no end date / currently ongoing" with an
/// explicit `null`, so it always serializes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperiencePayload {
    pub role: String,
    pub company: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,

    pub end_date: Option<DateTime<Utc>>,

    pub is_current: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub tags: Vec<String>,

    pub order: f64,
}

/// Parses a comma-separated tag list into an ordered set: tokens are
/// trimmed, empties dropped, and duplicates removed keeping the first
/// occurrence. Normalization is idempotent.
pub fn normalize_tags(text: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for token in text.split(',') {
        let token = token.trim();
        if token.is_empty() || tags.iter().any(|t| t == token) {
            continue;
        }
        tags.push(token.to_string());
    }
    tags
}

/// Coerces the order field to a finite number, defaulting to 0.
pub fn coerce_order(text: &str) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

fn parse_date_field(
    field: &'static str,
    value: &str,
    errors: &mut FieldErrors,
) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    match NaiveDate::parse_from_str(value, DATE_INPUT_FORMAT) {
        Ok(date) => Some(date),
        Err(_) => {
            errors.push(ValidationError::invalid_format(field, "expected YYYY-MM-DD"));
            None
        }
    }
}

fn to_utc_midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(chrono::NaiveTime::MIN).and_utc()
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
#[path = "draft_test.rs"]
mod draft_test;
