//! Foundation module - Shared domain primitives.
//!
//! Contains the identity type, field-level validation errors, and the
//! formatting helpers shared by the admin views.

mod errors;
mod format;
mod identity;

pub use errors::{FieldErrors, ValidationError};
pub use format::{format_date, format_date_time, NO_DATE};
pub use identity::Identity;
