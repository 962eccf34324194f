//! Application layer - the stateful client core.
//!
//! This layer holds everything a UI binds to: the session store and its
//! CSRF gate, the route guard, and one controller per page. Controllers
//! own the list they loaded and reconcile it with server responses;
//! derived views (filters, sorting, stats) are pure functions over that
//! state.

mod best_effort;
mod contact_form;
mod csrf;
mod dashboard_page;
mod experience_page;
mod messages_page;
mod route_guard;
mod session;

pub use best_effort::best_effort;
pub use contact_form::ContactForm;
pub use csrf::CsrfGate;
pub use dashboard_page::DashboardController;
pub use experience_page::ExperienceController;
pub use messages_page::MessagesController;
pub use route_guard::{GuardState, RouteGuard, DEFAULT_ADMIN_PATH};
pub use session::{SessionState, SessionStore, INVALID_CREDENTIALS};
