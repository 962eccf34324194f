//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the application core to the backend API:
//! - `http` - reqwest-backed gateways over a shared client

pub mod http;

pub use http::{
    ApiClient, HttpAuthGateway, HttpExperienceGateway, HttpMessageGateway, HttpProjectGateway,
};
