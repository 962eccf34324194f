//! Message gateway port.

use async_trait::async_trait;

use crate::domain::message::{ContactPayload, Message, MessageStatus};

use super::ApiError;

/// Operations on contact messages.
///
/// `submit` is the one public (unauthenticated) write in the API; the
/// rest require an admin session.
#[async_trait]
pub trait MessageGateway: Send + Sync {
    /// GET /messages - full list.
    async fn list(&self) -> Result<Vec<Message>, ApiError>;

    /// POST /messages - public contact submission.
    async fn submit(&self, contact: &ContactPayload) -> Result<Message, ApiError>;

    /// PUT /messages/{id}/status - transitions the status, returns the
    /// updated record. Any status may move to any other.
    async fn set_status(&self, id: &str, status: MessageStatus) -> Result<Message, ApiError>;

    /// DELETE /messages/{id}.
    async fn delete(&self, id: &str) -> Result<(), ApiError>;
}
