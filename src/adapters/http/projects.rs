//! HTTP implementation of the project gateway.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::project::Project;
use crate::ports::{ApiError, ProjectGateway};

use super::ApiClient;

/// Project endpoints over the shared client.
pub struct HttpProjectGateway {
    client: Arc<ApiClient>,
}

impl HttpProjectGateway {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProjectGateway for HttpProjectGateway {
    async fn list_admin(&self) -> Result<Vec<Project>, ApiError> {
        self.client.get("/projects?admin=true").await
    }
}
