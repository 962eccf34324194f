//! Error types for the domain layer.

use thiserror::Error;

/// Errors produced by client-side form validation.
///
/// These never reach the backend: a draft that fails validation blocks
/// submission and the errors are rendered inline next to their fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    #[error("Field '{field}' conflicts with another field: {reason}")]
    Conflict { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a cross-field conflict validation error.
    pub fn conflict(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::Conflict {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// The field this error is attached to.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::EmptyField { field } => field,
            ValidationError::InvalidFormat { field, .. } => field,
            ValidationError::Conflict { field, .. } => field,
        }
    }
}

/// Collection of field-level validation errors for a whole form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: Vec<ValidationError>,
}

impl FieldErrors {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an error to the collection.
    pub fn push(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// True when no field failed validation.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// First error attached to the given field, if any.
    pub fn for_field(&self, field: &str) -> Option<&ValidationError> {
        self.errors.iter().find(|e| e.field() == field)
    }

    /// All collected errors, in the order fields were checked.
    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter()
    }
}

impl IntoIterator for FieldErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_field_displays_correctly() {
        let err = ValidationError::empty_field("role");
        assert_eq!(format!("{}", err), "Field 'role' cannot be empty");
    }

    #[test]
    fn invalid_format_displays_correctly() {
        let err = ValidationError::invalid_format("startDate", "expected YYYY-MM-DD");
        assert_eq!(
            format!("{}", err),
            "Field 'startDate' has invalid format: expected YYYY-MM-DD"
        );
    }

    #[test]
    fn conflict_displays_correctly() {
        let err = ValidationError::conflict("endDate", "must be empty for a current role");
        assert_eq!(
            format!("{}", err),
            "Field 'endDate' conflicts with another field: must be empty for a current role"
        );
    }

    #[test]
    fn field_errors_lookup_by_field() {
        let mut errors = FieldErrors::new();
        errors.push(ValidationError::empty_field("role"));
        errors.push(ValidationError::empty_field("company"));

        assert!(!errors.is_empty());
        assert!(errors.for_field("role").is_some());
        assert!(errors.for_field("company").is_some());
        assert!(errors.for_field("location").is_none());
    }

    #[test]
    fn field_errors_preserve_insertion_order() {
        let mut errors = FieldErrors::new();
        errors.push(ValidationError::empty_field("role"));
        errors.push(ValidationError::invalid_format("order", "not a number"));

        let fields: Vec<&str> = errors.iter().map(|e| e.field()).collect();
        assert_eq!(fields, vec!["role", "order"]);
    }
}
