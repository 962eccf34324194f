//! Public contact-form submission.
//!
//! The only unauthenticated write in the whole API: visitors submit
//! `{name, email, message}` and the backend creates a `new` message.

use serde::Serialize;

use crate::domain::foundation::{FieldErrors, ValidationError};

/// What the public contact form holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    /// Validates the draft: every field required, email must look like one.
    pub fn validate(&self) -> Result<ContactPayload, FieldErrors> {
        let mut errors = FieldErrors::new();

        if self.name.trim().is_empty() {
            errors.push(ValidationError::empty_field("name"));
        }
        let email = self.email.trim();
        if email.is_empty() {
            errors.push(ValidationError::empty_field("email"));
        } else if !email.contains('@') {
            errors.push(ValidationError::invalid_format("email", "missing @"));
        }
        if self.message.trim().is_empty() {
            errors.push(ValidationError::empty_field("message"));
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ContactPayload {
            name: self.name.trim().to_string(),
            email: email.to_string(),
            message: self.message.trim().to_string(),
        })
    }
}

/// The POST /messages request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub message: String,
}
