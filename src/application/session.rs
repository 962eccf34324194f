//! Session store - identity, bootstrap, login and logout.
//!
//! The backend keeps the session in httpOnly cookies; this store keeps
//! the client-side mirror: who is logged in, whether the bootstrap is
//! still in flight, and the last login error. Consumers read a
//! [`snapshot`](SessionStore::snapshot) after each operation resolves -
//! the route guard derives its state from it.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::foundation::Identity;
use crate::ports::{AuthGateway, Credentials};

use super::best_effort::best_effort;
use super::csrf::CsrfGate;

/// Fallback shown when a login fails without a server-provided message.
pub const INVALID_CREDENTIALS: &str = "Credenciales inválidas";

/// Client-side view of the session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    /// The authenticated user, when a session is active.
    pub user: Option<Identity>,

    /// True while the startup bootstrap is in flight.
    pub loading: bool,

    /// Last login error, user-facing.
    pub error: Option<String>,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        // A fresh store is "checking" until bootstrap resolves.
        Self {
            user: None,
            loading: true,
            error: None,
        }
    }
}

/// Owns the session state and the operations that move it.
pub struct SessionStore {
    auth: Arc<dyn AuthGateway>,
    csrf: Arc<CsrfGate>,
    state: RwLock<SessionState>,
}

impl SessionStore {
    pub fn new(auth: Arc<dyn AuthGateway>, csrf: Arc<CsrfGate>) -> Self {
        Self {
            auth,
            csrf,
            state: RwLock::new(SessionState::default()),
        }
    }

    /// The CSRF gate scoped to this session context.
    pub fn csrf(&self) -> Arc<CsrfGate> {
        self.csrf.clone()
    }

    /// Current state, cheap to clone.
    pub async fn snapshot(&self) -> SessionState {
        self.state.read().await.clone()
    }

    /// Startup handshake: prime CSRF, then try to resolve the identity.
    ///
    /// An expired or missing session is a normal outcome, not an error -
    /// nothing is surfaced on failure, the session just stays
    /// unauthenticated. `loading` flips to false exactly once, after the
    /// handshake resolves either way.
    pub async fn bootstrap(&self) {
        let identity = match self.csrf.ensure().await {
            Ok(()) => match self.auth.me().await {
                Ok(identity) => Some(identity),
                Err(err) => {
                    tracing::debug!(error = %err, "bootstrap found no active session");
                    None
                }
            },
            Err(err) => {
                tracing::debug!(error = %err, "csrf priming failed during bootstrap");
                None
            }
        };

        let mut state = self.state.write().await;
        if let Some(identity) = &identity {
            tracing::info!(email = %identity.email, "session restored");
        }
        state.user = identity;
        state.loading = false;
    }

    /// Attempts to open a session. Returns true on success.
    ///
    /// On failure the state keeps the server-provided message when the
    /// response carried one, or [`INVALID_CREDENTIALS`] otherwise, and
    /// the session stays unauthenticated.
    pub async fn login(&self, credentials: &Credentials) -> bool {
        self.state.write().await.error = None;

        let identity = match self.auth.login(credentials).await {
            Ok(()) => self.auth.me().await,
            Err(err) => Err(err),
        };

        let mut state = self.state.write().await;
        match identity {
            Ok(identity) => {
                tracing::info!(email = %identity.email, "session opened");
                state.user = Some(identity);
                true
            }
            Err(err) => {
                state.error = Some(err.user_message(INVALID_CREDENTIALS));
                false
            }
        }
    }

    /// Closes the session.
    ///
    /// The server-side termination is best-effort; the local identity is
    /// cleared unconditionally and the CSRF gate resets so the next
    /// session re-primes.
    pub async fn logout(&self) {
        best_effort("logout", self.auth.logout().await);
        self.csrf.reset().await;

        let mut state = self.state.write().await;
        if state.user.take().is_some() {
            tracing::info!("session closed");
        }
        state.error = None;
    }

    /// The 401 path: clears the local session without a server round
    /// trip. Idempotent - a burst of 401s from parallel requests
    /// produces a single authenticated -> unauthenticated transition.
    pub async fn force_logout(&self) {
        self.csrf.reset().await;

        let mut state = self.state.write().await;
        if state.user.take().is_some() {
            tracing::info!("session expired, forcing logout");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use crate::ports::ApiError;

    /// Scripted auth gateway: each endpoint's next outcome is configurable.
    #[derive(Default)]
    struct ScriptedAuthGateway {
        me_result: Mutex<Option<Result<Identity, ApiError>>>,
        login_result: Mutex<Option<Result<(), ApiError>>>,
        logout_result: Mutex<Option<Result<(), ApiError>>>,
        csrf_calls: AtomicUsize,
    }

    impl ScriptedAuthGateway {
        fn with_identity(identity: Identity) -> Self {
            let gateway = Self::default();
            *gateway.me_result.lock().unwrap() = Some(Ok(identity));
            gateway
        }

        fn set_me(&self, result: Result<Identity, ApiError>) {
            *self.me_result.lock().unwrap() = Some(result);
        }

        fn set_login(&self, result: Result<(), ApiError>) {
            *self.login_result.lock().unwrap() = Some(result);
        }

        fn set_logout(&self, result: Result<(), ApiError>) {
            *self.logout_result.lock().unwrap() = Some(result);
        }
    }

    #[async_trait]
    impl AuthGateway for ScriptedAuthGateway {
        async fn prime_csrf(&self) -> Result<(), ApiError> {
            self.csrf_calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        async fn me(&self) -> Result<Identity, ApiError> {
            self.me_result
                .lock()
                .unwrap()
                .clone()
                .unwrap_or(Err(ApiError::unauthorized()))
        }

        async fn login(&self, _credentials: &Credentials) -> Result<(), ApiError> {
            self.login_result.lock().unwrap().clone().unwrap_or(Ok(()))
        }

        async fn logout(&self) -> Result<(), ApiError> {
            self.logout_result.lock().unwrap().clone().unwrap_or(Ok(()))
        }
    }

    fn admin() -> Identity {
        Identity {
            id: "u-1".to_string(),
            email: "admin@example.com".to_string(),
            name: None,
        }
    }

    #[tokio::test]
    async fn bootstrap_with_session_authenticates() {
        let auth = Arc::new(ScriptedAuthGateway::with_identity(admin()));
        let csrf = Arc::new(CsrfGate::new(auth.clone()));
        let store = SessionStore::new(auth, csrf);

        assert!(store.snapshot().await.loading);
        store.bootstrap().await;

        let state = store.snapshot().await;
        assert!(!state.loading);
        assert!(state.is_authenticated());
        assert!(state.error.is_none());
    }

    #[tokio::test]
    async fn bootstrap_without_session_is_silent() {
        let auth = Arc::new(ScriptedAuthGateway::default());
        let csrf = Arc::new(CsrfGate::new(auth.clone()));
        let store = SessionStore::new(auth, csrf);

        store.bootstrap().await;

        let state = store.snapshot().await;
        assert!(!state.loading);
        assert!(!state.is_authenticated());
        // An expired session is normal: no error surfaced.
        assert!(state.error.is_none());
    }

    #[tokio::test]
    async fn login_failure_keeps_server_message() {
        let auth = Arc::new(ScriptedAuthGateway::default());
        auth.set_login(Err(ApiError::Unauthorized {
            message: Some("Cuenta bloqueada".to_string()),
        }));
        let csrf = Arc::new(CsrfGate::new(auth.clone()));
        let store = SessionStore::new(auth, csrf);

        assert!(!store.login(&Credentials::new("a@b.com", "x")).await);
        let state = store.snapshot().await;
        assert_eq!(state.error.as_deref(), Some("Cuenta bloqueada"));
        assert!(!state.is_authenticated());
    }

    #[tokio::test]
    async fn login_failure_falls_back_to_invalid_credentials() {
        let auth = Arc::new(ScriptedAuthGateway::default());
        auth.set_login(Err(ApiError::unauthorized()));
        let csrf = Arc::new(CsrfGate::new(auth.clone()));
        let store = SessionStore::new(auth, csrf);

        assert!(!store.login(&Credentials::new("a@b.com", "wrong")).await);
        let state = store.snapshot().await;
        assert_eq!(state.error.as_deref(), Some(INVALID_CREDENTIALS));
    }

    #[tokio::test]
    async fn login_success_fetches_identity() {
        let auth = Arc::new(ScriptedAuthGateway::default());
        auth.set_me(Ok(admin()));
        let csrf = Arc::new(CsrfGate::new(auth.clone()));
        let store = SessionStore::new(auth, csrf);

        assert!(store.login(&Credentials::new("admin@example.com", "x")).await);
        let state = store.snapshot().await;
        assert!(state.is_authenticated());
        assert_eq!(state.user.unwrap().email, "admin@example.com");
    }

    #[tokio::test]
    async fn login_clears_previous_error() {
        let auth = Arc::new(ScriptedAuthGateway::default());
        auth.set_login(Err(ApiError::unauthorized()));
        let csrf = Arc::new(CsrfGate::new(auth.clone()));
        let store = SessionStore::new(auth.clone(), csrf);

        store.login(&Credentials::new("a@b.com", "wrong")).await;
        assert!(store.snapshot().await.error.is_some());

        auth.set_login(Ok(()));
        auth.set_me(Ok(admin()));
        assert!(store.login(&Credentials::new("a@b.com", "right")).await);
        assert!(store.snapshot().await.error.is_none());
    }

    #[tokio::test]
    async fn logout_swallows_server_failure() {
        let auth = Arc::new(ScriptedAuthGateway::with_identity(admin()));
        let csrf = Arc::new(CsrfGate::new(auth.clone()));
        let store = SessionStore::new(auth.clone(), csrf);
        store.bootstrap().await;
        assert!(store.snapshot().await.is_authenticated());

        auth.set_logout(Err(ApiError::network("backend down")));
        store.logout().await;

        assert!(!store.snapshot().await.is_authenticated());
    }

    #[tokio::test]
    async fn logout_resets_csrf_gate() {
        let auth = Arc::new(ScriptedAuthGateway::with_identity(admin()));
        let csrf = Arc::new(CsrfGate::new(auth.clone()));
        let store = SessionStore::new(auth.clone(), csrf.clone());

        store.bootstrap().await;
        assert!(csrf.is_primed().await);

        store.logout().await;
        assert!(!csrf.is_primed().await);
    }

    #[tokio::test]
    async fn force_logout_is_idempotent() {
        let auth = Arc::new(ScriptedAuthGateway::with_identity(admin()));
        let csrf = Arc::new(CsrfGate::new(auth.clone()));
        let store = SessionStore::new(auth, csrf);
        store.bootstrap().await;

        store.force_logout().await;
        store.force_logout().await;

        let state = store.snapshot().await;
        assert!(!state.is_authenticated());
        assert!(state.error.is_none());
    }
}
