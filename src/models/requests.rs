//! # API Request Models
//!
//! Structures for incoming API request bodies and query strings.
//! Each struct represents the expected JSON body for an endpoint.
//!
//! Update bodies are explicit change sets: omitted fields keep their
//! stored values, and status changes go through the service layer's
//! transition checks rather than free-form field assignment.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::db::models::{BookingStatus, PaymentMethod, PaymentStatus, RoomStatus};

/// Request to create a room type.
///
/// ## Example JSON
///
/// ```json
/// {
///     "name": "Double Deluxe",
///     "description": "Two queen beds, sea view",
///     "base_price": 12050,
///     "capacity": 4
/// }
/// ```
///
/// `base_price` is in minor units (cents): 120.50 is 12050.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRoomTypeRequest {
    /// Display name, unique across the hotel.
    pub name: String,

    pub description: Option<String>,

    /// Nightly base price in minor units. Must be >= 0.
    pub base_price: i64,

    /// Maximum number of guests. Must be > 0.
    pub capacity: i32,
}

/// Partial update for a room type. Omitted fields are left unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateRoomTypeRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub base_price: Option<i64>,
    pub capacity: Option<i32>,
}

/// Request to create a room.
///
/// ## Example JSON
///
/// ```json
/// {
///     "room_number": "101",
///     "room_type_id": 1,
///     "floor": 1,
///     "status": "available"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRoomRequest {
    /// Door number, unique across the hotel.
    pub room_number: String,

    pub room_type_id: i32,

    /// Must be > 0.
    pub floor: i32,

    /// Defaults to `available` when omitted.
    pub status: Option<RoomStatus>,
}

/// Update a room's advisory status.
///
/// The operational flag is the only mutable room field; structural
/// attributes (number, type, floor) are fixed at creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateRoomRequest {
    pub status: RoomStatus,
}

/// Request to register a guest.
///
/// ## Example JSON
///
/// ```json
/// {
///     "first_name": "Maria",
///     "last_name": "Petrova",
///     "email": "maria@example.com",
///     "phone": "+7 900 000 00 00",
///     "passport_number": "4509 123456",
///     "date_of_birth": "1990-04-12"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGuestRequest {
    pub first_name: String,
    pub last_name: String,

    /// Must be unique across all guests.
    pub email: String,

    pub phone: String,

    /// Unique when present.
    pub passport_number: Option<String>,

    pub date_of_birth: Option<NaiveDate>,
}

/// Partial update for a guest's contact details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateGuestRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Request to create a booking.
///
/// The stay interval is half-open: the guest occupies the room for the
/// nights `[check_in_date, check_out_date)`.
///
/// ## Example JSON
///
/// ```json
/// {
///     "guest_id": 7,
///     "room_id": 3,
///     "check_in_date": "2024-06-01",
///     "check_out_date": "2024-06-05",
///     "total_price": 48200,
///     "special_requests": "late arrival"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookingRequest {
    pub guest_id: i32,

    pub room_id: i32,

    pub check_in_date: NaiveDate,

    /// Must be strictly after `check_in_date`.
    pub check_out_date: NaiveDate,

    /// Total price for the stay in minor units. Must be >= 0.
    pub total_price: i64,

    pub special_requests: Option<String>,
}

/// Update a booking.
///
/// `status` drives the lifecycle state machine (confirm, cancel,
/// check-in, check-out); `special_requests` is a plain field update.
/// A body carrying neither is rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateBookingRequest {
    pub status: Option<BookingStatus>,
    pub special_requests: Option<String>,
}

/// Request to record a payment against a booking.
///
/// ## Example JSON
///
/// ```json
/// {
///     "booking_id": 12,
///     "amount": 48200,
///     "payment_method": "credit_card",
///     "transaction_id": "ch_3PqX9aLk"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePaymentRequest {
    /// Must reference an existing booking.
    pub booking_id: i32,

    /// In minor units. Must be > 0.
    pub amount: i64,

    pub payment_method: PaymentMethod,

    /// Defaults to `pending` when omitted.
    pub payment_status: Option<PaymentStatus>,

    /// Gateway reference, unique when present.
    pub transaction_id: Option<String>,
}

/// Partial update for a payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePaymentRequest {
    pub payment_status: Option<PaymentStatus>,
    pub transaction_id: Option<String>,
}

/// Pagination for list endpoints. Defaults: limit 100, offset 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl PageQuery {
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(100)
    }

    pub fn offset(&self) -> i64 {
        self.offset.unwrap_or(0)
    }
}

/// Query string for `GET /rooms`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomListQuery {
    pub status: Option<RoomStatus>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Query string for `GET /bookings`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingListQuery {
    pub status: Option<BookingStatus>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Query string for `GET /rooms/available`.
///
/// ## Example
///
/// `GET /rooms/available?check_in=2024-06-01&check_out=2024-06-05`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityQuery {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}
