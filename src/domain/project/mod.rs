//! Portfolio projects, read-only on the admin side.
//!
//! Projects are managed elsewhere; the admin panel only consumes the
//! admin-scoped list, currently for the dashboard counter.

use serde::{Deserialize, Serialize};

/// A portfolio project as returned by the admin-scoped list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Backend-generated identifier.
    #[serde(rename = "_id")]
    pub id: String,

    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    /// Unpublished projects only show up in the admin-scoped list.
    #[serde(default)]
    pub published: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_backend_shape() {
        let json = r#"{
            "_id": "64f3",
            "title": "Portfolio v2",
            "tags": ["React", "NestJS"],
            "published": true
        }"#;

        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.id, "64f3");
        assert_eq!(project.title, "Portfolio v2");
        assert!(project.published);
        assert!(project.description.is_none());
    }
}
