//! Identity of the authenticated admin user.
//!
//! This is a **domain type** with no transport dependencies: the HTTP
//! adapter populates it from the `/auth/me` response, and the session
//! store is the only writer.

use serde::{Deserialize, Serialize};

/// The current user as reported by the backend session endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    /// Backend-generated identifier.
    #[serde(rename = "_id", alias = "id")]
    pub id: String,

    /// Email the session was opened with.
    pub email: String,

    /// Display name, when the backend stores one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Identity {
    /// Returns the display name, or the email as fallback.
    pub fn display_name_or_email(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_from_backend_shape() {
        let json = r#"{"_id":"64f1c2","email":"admin@example.com","name":"Admin"}"#;
        let identity: Identity = serde_json::from_str(json).unwrap();

        assert_eq!(identity.id, "64f1c2");
        assert_eq!(identity.email, "admin@example.com");
        assert_eq!(identity.name.as_deref(), Some("Admin"));
    }

    #[test]
    fn accepts_plain_id_field() {
        let json = r#"{"id":"u-1","email":"admin@example.com"}"#;
        let identity: Identity = serde_json::from_str(json).unwrap();

        assert_eq!(identity.id, "u-1");
        assert!(identity.name.is_none());
    }

    #[test]
    fn display_name_falls_back_to_email() {
        let identity = Identity {
            id: "u-1".to_string(),
            email: "admin@example.com".to_string(),
            name: None,
        };

        assert_eq!(identity.display_name_or_email(), "admin@example.com");
    }
}
