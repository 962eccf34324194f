//! Domain layer containing pure types and derivations.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (identity, validation errors, formatting)
//! - `experience` - Work timeline entries, form drafts, display ordering
//! - `message` - Contact messages, statuses, list filtering, public form
//! - `project` - Read-only portfolio projects
//! - `dashboard` - Aggregated summary over the loaded lists

pub mod dashboard;
pub mod experience;
pub mod foundation;
pub mod message;
pub mod project;
