//! # Service Layer
//!
//! The services own all business rules; HTTP handlers deserialize,
//! delegate here, and map errors to status codes.
//!
//! | Service | Responsibility |
//! |---------|----------------|
//! | `CatalogService` | Room types and rooms (advisory status only) |
//! | `GuestDirectory` | Uniqueness-checked guest storage |
//! | `ReservationEngine` | Availability + booking lifecycle |
//! | `ConsistencyGuard` | Per-room atomic check-then-write |
//! | `PaymentLedger` | Payments recorded against bookings |

pub mod catalog;
pub mod guard;
pub mod guests;
pub mod payments;
pub mod reservations;

pub use catalog::CatalogService;
pub use guard::ConsistencyGuard;
pub use guests::GuestDirectory;
pub use payments::PaymentLedger;
pub use reservations::ReservationEngine;

use thiserror::Error;

use crate::db::models::BookingStatus;
use crate::db::DatabaseError;

/// Errors surfaced by the service layer.
///
/// The first four are the caller-visible error kinds of the reservation
/// system; `InvalidInput` covers field validation and `Database` wraps
/// storage failures that abort the in-flight request.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A referenced entity does not exist.
    #[error("{0} not found")]
    NotFound(String),

    /// check_in >= check_out.
    #[error("check-in date must be strictly before check-out date")]
    InvalidRange,

    /// Uniqueness violation or booking overlap. Not transient: callers
    /// should pick another room or date, not retry.
    #[error("{0}")]
    Conflict(String),

    /// A status change outside the booking transition table.
    #[error("booking cannot move from {from} to {to}")]
    InvalidTransition {
        from: BookingStatus,
        to: BookingStatus,
    },

    /// A field failed validation.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Storage failure; fatal for this request only.
    #[error("database error: {0}")]
    Database(String),
}

impl From<DatabaseError> for ServiceError {
    fn from(e: DatabaseError) -> Self {
        ServiceError::Database(e.to_string())
    }
}
