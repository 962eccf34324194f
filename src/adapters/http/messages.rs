//! HTTP implementation of the message gateway.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use crate::domain::message::{ContactPayload, Message, MessageStatus};
use crate::ports::{ApiError, MessageGateway};

use super::ApiClient;

/// Message endpoints over the shared client.
pub struct HttpMessageGateway {
    client: Arc<ApiClient>,
}

impl HttpMessageGateway {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MessageGateway for HttpMessageGateway {
    async fn list(&self) -> Result<Vec<Message>, ApiError> {
        self.client.get("/messages").await
    }

    async fn submit(&self, contact: &ContactPayload) -> Result<Message, ApiError> {
        self.client.post("/messages", contact).await
    }

    async fn set_status(&self, id: &str, status: MessageStatus) -> Result<Message, ApiError> {
        self.client
            .put(&format!("/messages/{}/status", id), &json!({ "status": status }))
            .await
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete_unit(&format!("/messages/{}", id)).await
    }
}
