//! Experience timeline domain: entries, form drafts, and display ordering.

mod draft;
mod entry;

pub use draft::{coerce_order, normalize_tags, ExperienceDraft, ExperiencePayload};
pub use entry::{display_ordering, sorted_for_display, ExperienceEntry, ExperienceStats};
