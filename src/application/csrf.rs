//! CSRF gate - primes the token handshake at most once per session.
//!
//! Every mutating call goes through [`CsrfGate::ensure`] first. The first
//! call performs the GET /auth/csrf round trip; once primed, later calls
//! are no-ops until [`CsrfGate::reset`] marks a session boundary
//! (logout or a forced logout), after which the next session re-primes.
//!
//! The gate is owned by the session context rather than living in a
//! module-level global, so two contexts never share priming state.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::ports::{ApiError, AuthGateway};

/// Idempotent CSRF priming over the auth gateway.
pub struct CsrfGate {
    auth: Arc<dyn AuthGateway>,
    // Held across the priming round trip so concurrent callers cannot
    // both fire the handshake.
    primed: Mutex<bool>,
}

impl CsrfGate {
    pub fn new(auth: Arc<dyn AuthGateway>) -> Self {
        Self {
            auth,
            primed: Mutex::new(false),
        }
    }

    /// Primes the CSRF cookie/header pair if not already primed.
    ///
    /// A failed priming attempt leaves the gate unprimed, so the next
    /// mutation retries the handshake.
    pub async fn ensure(&self) -> Result<(), ApiError> {
        let mut primed = self.primed.lock().await;
        if *primed {
            return Ok(());
        }
        self.auth.prime_csrf().await?;
        *primed = true;
        Ok(())
    }

    /// Forgets the priming state; the next [`ensure`](Self::ensure)
    /// performs the handshake again.
    pub async fn reset(&self) {
        *self.primed.lock().await = false;
    }

    /// Whether the handshake has completed for the current session.
    pub async fn is_primed(&self) -> bool {
        *self.primed.lock().await
    }
}
