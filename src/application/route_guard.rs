//! Route guard for the admin area.
//!
//! Three states derived from the session snapshot: while the bootstrap
//! is in flight the guard says "render nothing yet"; once it resolves,
//! either the protected content renders or the user is redirected to
//! login with the originally requested path remembered, so a successful
//! login can return them there.

use crate::application::SessionState;

/// Where login returns to when no origin path was remembered.
pub const DEFAULT_ADMIN_PATH: &str = "/admin";

/// Outcome of evaluating the guard for a requested path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardState {
    /// Session bootstrap still in flight - render a placeholder.
    Checking,
    /// Render the protected content.
    Authenticated,
    /// Redirect to login, remembering where the user wanted to go.
    RedirectToLogin { from: String },
}

/// Gate for admin routes.
#[derive(Debug, Default)]
pub struct RouteGuard {
    remembered: Option<String>,
}

impl RouteGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluates the guard for a requested path against the current
    /// session snapshot. Resolves `Checking` exactly once per bootstrap;
    /// any later forced logout re-enters the redirect branch.
    pub fn decide(&mut self, session: &SessionState, requested_path: &str) -> GuardState {
        if session.loading {
            return GuardState::Checking;
        }
        if session.is_authenticated() {
            return GuardState::Authenticated;
        }
        self.remembered = Some(requested_path.to_string());
        GuardState::RedirectToLogin {
            from: requested_path.to_string(),
        }
    }

    /// Path to navigate to after a successful login: the remembered
    /// origin, or the admin root. Consumes the remembered path.
    pub fn post_login_target(&mut self) -> String {
        self.remembered
            .take()
            .unwrap_or_else(|| DEFAULT_ADMIN_PATH.to_string())
    }
}
