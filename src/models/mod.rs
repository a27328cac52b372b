//! # API Models
//!
//! Request and response structures for the HTTP surface.
//! Field names are snake_case, matching the persisted schema.

pub mod requests;
pub mod responses;

pub use requests::*;
pub use responses::*;
