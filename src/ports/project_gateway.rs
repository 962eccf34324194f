//! Project gateway port - read-only.

use async_trait::async_trait;

use crate::domain::project::Project;

use super::ApiError;

/// Admin-scoped project listing, consumed by the dashboard.
#[async_trait]
pub trait ProjectGateway: Send + Sync {
    /// GET /projects?admin=true - includes unpublished projects.
    async fn list_admin(&self) -> Result<Vec<Project>, ApiError>;
}
