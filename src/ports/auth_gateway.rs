//! Auth gateway port: CSRF priming and session endpoints.
//!
//! The backend owns the session (httpOnly cookies); this port only
//! triggers the round trips. `prime_csrf` must be called before any
//! mutating request so the XSRF cookie/header pair is in place - the
//! application layer's `CsrfGate` makes that idempotent.

use async_trait::async_trait;
use secrecy::Secret;

use crate::domain::foundation::Identity;

use super::ApiError;

/// Login credentials. The password is a [`Secret`] so it never shows up
/// in `Debug` output or logs.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: Secret<String>,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: Secret::new(password.into()),
        }
    }
}

/// Session and CSRF operations against the backend.
///
/// # Contract
///
/// - `prime_csrf` makes the backend set the XSRF cookie; calling it more
///   than once is harmless but wasteful
/// - `me` fails with `ApiError::Unauthorized` when no session is active -
///   for the bootstrap path that is a normal outcome, not an error
/// - `login` sets the session cookies server-side; the caller re-fetches
///   the identity afterwards
/// - `logout` is best-effort from the caller's point of view
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// GET /auth/csrf - primes the CSRF cookie/header pair.
    async fn prime_csrf(&self) -> Result<(), ApiError>;

    /// GET /auth/me - resolves the current identity, or fails.
    async fn me(&self) -> Result<Identity, ApiError>;

    /// POST /auth/login - opens a session for the given credentials.
    async fn login(&self, credentials: &Credentials) -> Result<(), ApiError>;

    /// POST /auth/logout - terminates the server-side session.
    async fn logout(&self) -> Result<(), ApiError>;
}
