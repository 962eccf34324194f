//! HTTP implementation of the experience gateway.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::experience::{ExperienceEntry, ExperiencePayload};
use crate::ports::{ApiError, ExperienceGateway};

use super::ApiClient;

/// Experience endpoints over the shared client.
pub struct HttpExperienceGateway {
    client: Arc<ApiClient>,
}

impl HttpExperienceGateway {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ExperienceGateway for HttpExperienceGateway {
    async fn list(&self) -> Result<Vec<ExperienceEntry>, ApiError> {
        self.client.get("/experience").await
    }

    async fn create(&self, payload: &ExperiencePayload) -> Result<ExperienceEntry, ApiError> {
        self.client.post("/experience", payload).await
    }

    async fn update(
        &self,
        id: &str,
        payload: &ExperiencePayload,
    ) -> Result<ExperienceEntry, ApiError> {
        self.client.put(&format!("/experience/{}", id), payload).await
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        // The backend answers {"message": "deleted"}; only the status matters.
        self.client.delete_unit(&format!("/experience/{}", id)).await
    }
}
