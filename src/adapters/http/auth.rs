//! HTTP implementation of the auth gateway.

use std::sync::Arc;

use async_trait::async_trait;
use secrecy::ExposeSecret;
use serde_json::json;

use crate::domain::foundation::Identity;
use crate::ports::{ApiError, AuthGateway, Credentials};

use super::ApiClient;

/// Auth endpoints over the shared client.
pub struct HttpAuthGateway {
    client: Arc<ApiClient>,
}

impl HttpAuthGateway {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthGateway for HttpAuthGateway {
    async fn prime_csrf(&self) -> Result<(), ApiError> {
        self.client.get_unit("/auth/csrf").await
    }

    async fn me(&self) -> Result<Identity, ApiError> {
        self.client.get("/auth/me").await
    }

    async fn login(&self, credentials: &Credentials) -> Result<(), ApiError> {
        let body = json!({
            "email": credentials.email,
            "password": credentials.password.expose_secret(),
        });
        self.client.post_unit("/auth/login", &body).await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.client.post_unit("/auth/logout", &json!({})).await
    }
}
