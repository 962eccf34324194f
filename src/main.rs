//! Connectivity smoke check: load configuration, bootstrap a session
//! against the configured backend, and report the outcome.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use portfolio_admin::adapters::{ApiClient, HttpAuthGateway};
use portfolio_admin::application::{CsrfGate, SessionStore};
use portfolio_admin::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::load()?;
    config.validate()?;
    tracing::info!(base_url = %config.api.base_url, "bootstrapping session");

    let client = Arc::new(ApiClient::new(&config.api));
    let auth = Arc::new(HttpAuthGateway::new(client));
    let csrf = Arc::new(CsrfGate::new(auth.clone()));
    let session = Arc::new(SessionStore::new(auth, csrf));

    session.bootstrap().await;

    match session.snapshot().await.user {
        Some(user) => tracing::info!(email = %user.email, "session active"),
        None => tracing::info!("no active session"),
    }

    Ok(())
}
