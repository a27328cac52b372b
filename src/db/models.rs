//! # Database Models
//!
//! This module defines the data structures that map to database tables,
//! plus the closed status enumerations and the booking transition table.
//!
//! ## Table Overview
//!
//! | Table | Description |
//! |-------|-------------|
//! | `room_types` | Room categories with base price and capacity |
//! | `rooms` | Physical rooms and their advisory status |
//! | `guests` | Guest identity records |
//! | `bookings` | Reservations and their lifecycle status |
//! | `payments` | Payments recorded against bookings |
//!
//! ## Status Enumerations
//!
//! Statuses are closed enums rendered to/from fixed strings, never free
//! text: an illegal status cannot be represented, and the legal booking
//! transitions live in one table (`BookingStatus::can_transition_to`).
//!
//! A room's own status is advisory (operational state such as
//! maintenance). Whether a room can be booked for a date range is derived
//! from bookings, never from this flag.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Operational status of a room.
///
/// Independent of booking-derived availability: a room can be
/// `available` and still have future bookings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RoomStatus {
    /// Room is in service and sellable
    Available,
    /// Guest currently in the room
    Occupied,
    /// Out of service for maintenance
    Maintenance,
    /// Held back by the front desk
    Reserved,
}

impl RoomStatus {
    /// The string stored in the `rooms.status` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomStatus::Available => "available",
            RoomStatus::Occupied => "occupied",
            RoomStatus::Maintenance => "maintenance",
            RoomStatus::Reserved => "reserved",
        }
    }
}

impl FromStr for RoomStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(RoomStatus::Available),
            "occupied" => Ok(RoomStatus::Occupied),
            "maintenance" => Ok(RoomStatus::Maintenance),
            "reserved" => Ok(RoomStatus::Reserved),
            other => Err(format!("unknown room status: {}", other)),
        }
    }
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle status of a booking.
///
/// New bookings start `pending`. `checked_out` and `cancelled` are
/// terminal. Only `confirmed` and `checked_in` bookings hold the room
/// against other reservations.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    /// Provisional hold; does not block the room
    Pending,
    /// Inventory committed
    Confirmed,
    /// Guest has arrived
    CheckedIn,
    /// Guest has departed (terminal)
    CheckedOut,
    /// Reservation withdrawn (terminal)
    Cancelled,
}

impl BookingStatus {
    /// Every status, for exhaustive sweeps.
    pub const ALL: [BookingStatus; 5] = [
        BookingStatus::Pending,
        BookingStatus::Confirmed,
        BookingStatus::CheckedIn,
        BookingStatus::CheckedOut,
        BookingStatus::Cancelled,
    ];

    /// The string stored in the `bookings.status` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::CheckedIn => "checked_in",
            BookingStatus::CheckedOut => "checked_out",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    /// The booking lifecycle transition table.
    ///
    /// | From | To |
    /// |------|----|
    /// | pending | confirmed, cancelled |
    /// | confirmed | checked_in, cancelled |
    /// | checked_in | checked_out |
    ///
    /// Everything else, including self-transitions and anything out of a
    /// terminal state, is rejected.
    pub fn can_transition_to(&self, next: BookingStatus) -> bool {
        matches!(
            (self, next),
            (BookingStatus::Pending, BookingStatus::Confirmed)
                | (BookingStatus::Pending, BookingStatus::Cancelled)
                | (BookingStatus::Confirmed, BookingStatus::CheckedIn)
                | (BookingStatus::Confirmed, BookingStatus::Cancelled)
                | (BookingStatus::CheckedIn, BookingStatus::CheckedOut)
        )
    }

    /// Whether a booking in this status holds the room against
    /// overlapping reservations.
    pub fn blocks_room(&self) -> bool {
        matches!(self, BookingStatus::Confirmed | BookingStatus::CheckedIn)
    }
}

impl FromStr for BookingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(BookingStatus::Pending),
            "confirmed" => Ok(BookingStatus::Confirmed),
            "checked_in" => Ok(BookingStatus::CheckedIn),
            "checked_out" => Ok(BookingStatus::CheckedOut),
            "cancelled" => Ok(BookingStatus::Cancelled),
            other => Err(format!("unknown booking status: {}", other)),
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Financial status of a payment.
///
/// Tracked independently of the booking's lifecycle. No transition
/// table is imposed here.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Awaiting settlement
    Pending,
    /// Settled
    Completed,
    /// Rejected by the processor
    Declined,
    /// Returned to the payer
    Refunded,
}

impl PaymentStatus {
    /// The string stored in the `payments.payment_status` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Completed => "completed",
            PaymentStatus::Declined => "declined",
            PaymentStatus::Refunded => "refunded",
        }
    }
}

impl FromStr for PaymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(PaymentStatus::Pending),
            "completed" => Ok(PaymentStatus::Completed),
            "declined" => Ok(PaymentStatus::Declined),
            "refunded" => Ok(PaymentStatus::Refunded),
            other => Err(format!("unknown payment status: {}", other)),
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a payment was made.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    CreditCard,
    DebitCard,
    Online,
}

impl PaymentMethod {
    /// The string stored in the `payments.payment_method` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::CreditCard => "credit_card",
            PaymentMethod::DebitCard => "debit_card",
            PaymentMethod::Online => "online",
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cash" => Ok(PaymentMethod::Cash),
            "credit_card" => Ok(PaymentMethod::CreditCard),
            "debit_card" => Ok(PaymentMethod::DebitCard),
            "online" => Ok(PaymentMethod::Online),
            other => Err(format!("unknown payment method: {}", other)),
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A room category.
///
/// ## Note on Prices
///
/// Money is stored as `i64` minor units (cents), so 120.50 is 12050.
/// PostgreSQL BIGINT maps cleanly and no floating point is involved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomTypeRecord {
    /// Primary key.
    pub id: i32,

    /// Display name, unique across the hotel.
    pub name: String,

    /// Free-text description.
    pub description: Option<String>,

    /// Nightly base price in minor units. Never negative.
    pub base_price: i64,

    /// Maximum number of guests. Always positive.
    pub capacity: i32,

    /// When the room type was created.
    pub created_at: DateTime<Utc>,
}

/// A physical room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomRecord {
    /// Primary key.
    pub id: i32,

    /// Door number, unique across the hotel.
    pub room_number: String,

    /// The room's category.
    pub room_type_id: i32,

    /// Floor the room is on. Always positive.
    pub floor: i32,

    /// Advisory operational status.
    pub status: RoomStatus,

    /// When the room was created.
    pub created_at: DateTime<Utc>,
}

/// A guest identity record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuestRecord {
    /// Primary key.
    pub id: i32,

    pub first_name: String,

    pub last_name: String,

    /// Contact email, unique across all guests.
    pub email: String,

    pub phone: String,

    /// Passport number, unique when present.
    pub passport_number: Option<String>,

    pub date_of_birth: Option<NaiveDate>,

    /// When the guest was registered.
    pub created_at: DateTime<Utc>,
}

/// A reservation.
///
/// The stay interval is half-open: `[check_in_date, check_out_date)`.
/// Two intervals [a,b) and [c,d) overlap iff `a < d && c < b`, which is
/// what lets back-to-back bookings share a turnover day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRecord {
    /// Primary key.
    pub id: i32,

    /// The guest the room is held for.
    pub guest_id: i32,

    /// The room being held.
    pub room_id: i32,

    /// First night of the stay.
    pub check_in_date: NaiveDate,

    /// Departure day; strictly after check-in.
    pub check_out_date: NaiveDate,

    /// Total price for the stay in minor units. Never negative.
    pub total_price: i64,

    /// Lifecycle status; mutated only through the transition table.
    pub status: BookingStatus,

    /// Free-text wishes from the guest.
    pub special_requests: Option<String>,

    /// When the booking was created.
    pub created_at: DateTime<Utc>,
}

/// A payment recorded against a booking.
///
/// Payments reference bookings, they never own them: recording a payment
/// does not move the booking's lifecycle status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentRecord {
    /// Primary key.
    pub id: i32,

    /// The booking this payment settles (fully or in part).
    pub booking_id: i32,

    /// Amount paid in minor units. Always positive.
    pub amount: i64,

    pub payment_method: PaymentMethod,

    pub payment_status: PaymentStatus,

    /// Gateway reference, unique when present.
    pub transaction_id: Option<String>,

    /// When the payment was recorded.
    pub payment_date: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The five legal transitions, verbatim from the lifecycle table.
    const ALLOWED: [(BookingStatus, BookingStatus); 5] = [
        (BookingStatus::Pending, BookingStatus::Confirmed),
        (BookingStatus::Pending, BookingStatus::Cancelled),
        (BookingStatus::Confirmed, BookingStatus::CheckedIn),
        (BookingStatus::Confirmed, BookingStatus::Cancelled),
        (BookingStatus::CheckedIn, BookingStatus::CheckedOut),
    ];

    #[test]
    fn test_transition_table_exhaustive() {
        for from in BookingStatus::ALL {
            for to in BookingStatus::ALL {
                let expected = ALLOWED.contains(&(from, to));
                assert_eq!(
                    from.can_transition_to(to),
                    expected,
                    "{} -> {}",
                    from,
                    to
                );
            }
        }
    }

    #[test]
    fn test_terminal_states_are_dead_ends() {
        for to in BookingStatus::ALL {
            assert!(!BookingStatus::CheckedOut.can_transition_to(to));
            assert!(!BookingStatus::Cancelled.can_transition_to(to));
        }
    }

    #[test]
    fn test_cancel_is_not_idempotent() {
        // Cancelling an already-cancelled booking is rejected, not absorbed.
        assert!(!BookingStatus::Cancelled.can_transition_to(BookingStatus::Cancelled));
    }

    #[test]
    fn test_blocking_statuses() {
        assert!(BookingStatus::Confirmed.blocks_room());
        assert!(BookingStatus::CheckedIn.blocks_room());
        assert!(!BookingStatus::Pending.blocks_room());
        assert!(!BookingStatus::CheckedOut.blocks_room());
        assert!(!BookingStatus::Cancelled.blocks_room());
    }

    #[test]
    fn test_booking_status_round_trip() {
        for status in BookingStatus::ALL {
            assert_eq!(status.as_str().parse::<BookingStatus>().unwrap(), status);
        }
        assert!("departed".parse::<BookingStatus>().is_err());
    }

    #[test]
    fn test_room_status_round_trip() {
        for status in [
            RoomStatus::Available,
            RoomStatus::Occupied,
            RoomStatus::Maintenance,
            RoomStatus::Reserved,
        ] {
            assert_eq!(status.as_str().parse::<RoomStatus>().unwrap(), status);
        }
        assert!("closed".parse::<RoomStatus>().is_err());
    }

    #[test]
    fn test_payment_enums_round_trip() {
        for status in [
            PaymentStatus::Pending,
            PaymentStatus::Completed,
            PaymentStatus::Declined,
            PaymentStatus::Refunded,
        ] {
            assert_eq!(status.as_str().parse::<PaymentStatus>().unwrap(), status);
        }
        for method in [
            PaymentMethod::Cash,
            PaymentMethod::CreditCard,
            PaymentMethod::DebitCard,
            PaymentMethod::Online,
        ] {
            assert_eq!(method.as_str().parse::<PaymentMethod>().unwrap(), method);
        }
    }

    #[test]
    fn test_serde_matches_column_strings() {
        // JSON rendering and the stored column strings must agree.
        let json = serde_json::to_string(&BookingStatus::CheckedIn).unwrap();
        assert_eq!(json, "\"checked_in\"");
        let json = serde_json::to_string(&PaymentMethod::CreditCard).unwrap();
        assert_eq!(json, "\"credit_card\"");
        let parsed: BookingStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(parsed, BookingStatus::Cancelled);
    }
}
