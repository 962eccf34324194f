//! Experience gateway port.
//!
//! One round trip per call, no caching. The server is authoritative for
//! generated fields: create and update return the canonical record, which
//! the caller merges into its local list.

use async_trait::async_trait;

use crate::domain::experience::{ExperienceEntry, ExperiencePayload};

use super::ApiError;

/// CRUD operations on the experience timeline.
#[async_trait]
pub trait ExperienceGateway: Send + Sync {
    /// GET /experience - full list.
    async fn list(&self) -> Result<Vec<ExperienceEntry>, ApiError>;

    /// POST /experience - creates an entry, returns the canonical record.
    async fn create(&self, payload: &ExperiencePayload) -> Result<ExperienceEntry, ApiError>;

    /// PUT /experience/{id} - updates an entry, returns the canonical record.
    async fn update(
        &self,
        id: &str,
        payload: &ExperiencePayload,
    ) -> Result<ExperienceEntry, ApiError>;

    /// DELETE /experience/{id}.
    async fn delete(&self, id: &str) -> Result<(), ApiError>;
}
