//! Portfolio Admin - typed client for the portfolio backend API.
//!
//! This crate implements the session bootstrap, CSRF handshake, and the
//! CRUD controllers behind the portfolio's admin panel. The backend owns
//! persistence and business rules; everything here is typed transport
//! and presentational state.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
