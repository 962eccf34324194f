//! Ports - Interfaces for the backend API.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the application core and the outside world. The HTTP adapter
//! implements them; tests substitute mocks.
//!
//! - `AuthGateway` - CSRF priming and session endpoints
//! - `ExperienceGateway` - experience timeline CRUD
//! - `MessageGateway` - contact messages (list, public submit, status, delete)
//! - `ProjectGateway` - read-only admin project list
//! - `ApiError` - the discriminated failure type every port returns

mod auth_gateway;
mod error;
mod experience_gateway;
mod message_gateway;
mod project_gateway;

pub use auth_gateway::{AuthGateway, Credentials};
pub use error::ApiError;
pub use experience_gateway::ExperienceGateway;
pub use message_gateway::MessageGateway;
pub use project_gateway::ProjectGateway;
