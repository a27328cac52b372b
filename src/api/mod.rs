//! # API Module
//!
//! HTTP surface of the backend: route configuration and request
//! handlers. Handlers stay thin — deserialize, call one service, wrap
//! the result in the standard response envelope.

pub mod handlers;
pub mod routes;

pub use routes::configure_routes;
