//! HTTP adapters - the reqwest-backed implementations of every port.
//!
//! One shared [`ApiClient`] carries the session cookies and the CSRF
//! echo; each resource gets its own thin gateway over it.

mod auth;
mod client;
mod experience;
mod messages;
mod projects;

pub use auth::HttpAuthGateway;
pub use client::{ApiClient, XSRF_COOKIE, XSRF_HEADER};
pub use experience::HttpExperienceGateway;
pub use messages::HttpMessageGateway;
pub use projects::HttpProjectGateway;
