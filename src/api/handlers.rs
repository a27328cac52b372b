//! # API Request Handlers
//!
//! This module contains the handler functions for each API endpoint.
//! Each handler:
//! 1. Extracts request data
//! 2. Calls the appropriate service
//! 3. Returns a formatted response
//!
//! ## Error Handling
//!
//! All errors are caught and returned as JSON:
//!
//! ```json
//! {
//!     "success": false,
//!     "error": {
//!         "code": "BOOKING_CONFLICT",
//!         "message": "room 3 is already booked for the requested dates"
//!     }
//! }
//! ```
//!
//! Error kind to status code:
//!
//! | Kind | Status |
//! |------|--------|
//! | NotFound | 404 |
//! | InvalidRange, InvalidInput | 400 |
//! | Conflict, InvalidTransition | 409 |
//! | Database | 500 |

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use chrono::Utc;
use serde_json::json;
use tracing::{error, info};

use crate::models::{
    ApiResponse, AvailabilityQuery, BookingListQuery, CreateBookingRequest, CreateGuestRequest,
    CreatePaymentRequest, CreateRoomRequest, CreateRoomTypeRequest, HealthResponse, PageQuery,
    RoomListQuery, UpdateBookingRequest, UpdateGuestRequest, UpdatePaymentRequest,
    UpdateRoomRequest, UpdateRoomTypeRequest,
};
use crate::services::ServiceError;
use crate::AppState;

/// Map a service error to its HTTP representation.
fn error_response(err: &ServiceError) -> HttpResponse {
    let (status, code) = match err {
        ServiceError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
        ServiceError::InvalidRange => (StatusCode::BAD_REQUEST, "INVALID_DATE_RANGE"),
        ServiceError::InvalidInput(_) => (StatusCode::BAD_REQUEST, "INVALID_INPUT"),
        ServiceError::Conflict(_) => (StatusCode::CONFLICT, "BOOKING_CONFLICT"),
        ServiceError::InvalidTransition { .. } => (StatusCode::CONFLICT, "INVALID_TRANSITION"),
        ServiceError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, "DATABASE_ERROR"),
    };

    if matches!(err, ServiceError::Database(_)) {
        error!("Request failed: {}", err);
    }

    HttpResponse::build(status).json(ApiResponse::<()>::error(code, &err.to_string()))
}

/// API information endpoint (root).
///
/// ## Endpoint
///
/// `GET /`
pub async fn api_info() -> HttpResponse {
    let info = json!({
        "name": "Hotel Booking API",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Backend API for hotel inventory and reservations",
        "endpoints": {
            "health": "GET /health",
            "roomTypes": "GET|POST /room-types, GET|PUT|DELETE /room-types/{id}",
            "rooms": "GET|POST /rooms, GET /rooms/available, GET|PUT|DELETE /rooms/{id}",
            "guests": "GET|POST /guests, GET|PUT|DELETE /guests/{id}",
            "bookings": "GET|POST /bookings, GET|PUT|DELETE /bookings/{id}",
            "payments": "GET|POST /payments, GET|PUT|DELETE /payments/{id}"
        }
    });

    HttpResponse::Ok().json(ApiResponse::success(info))
}

/// Health check endpoint.
///
/// ## Endpoint
///
/// `GET /health`
///
/// ## Example
///
/// ```bash
/// curl http://127.0.0.1:8080/health
/// ```
pub async fn health_check(state: web::Data<Arc<AppState>>) -> HttpResponse {
    // Check database
    let db_healthy = state.db.pool().get().await.is_ok();

    let response = HealthResponse {
        status: if db_healthy { "healthy" } else { "unhealthy" }.to_string(),
        database: db_healthy,
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
    };

    let status_code = if db_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    HttpResponse::build(status_code).json(ApiResponse::success(response))
}

// ============================================
// ROOM TYPE HANDLERS
// ============================================

/// `GET /room-types`
pub async fn list_room_types(
    state: web::Data<Arc<AppState>>,
    query: web::Query<PageQuery>,
) -> HttpResponse {
    match state.catalog.list_room_types(query.limit(), query.offset()).await {
        Ok(types) => HttpResponse::Ok().json(ApiResponse::success(types)),
        Err(e) => error_response(&e),
    }
}

/// `GET /room-types/{id}`
pub async fn get_room_type(
    state: web::Data<Arc<AppState>>,
    path: web::Path<i32>,
) -> HttpResponse {
    match state.catalog.get_room_type(path.into_inner()).await {
        Ok(record) => HttpResponse::Ok().json(ApiResponse::success(record)),
        Err(e) => error_response(&e),
    }
}

/// `POST /room-types`
pub async fn create_room_type(
    state: web::Data<Arc<AppState>>,
    body: web::Json<CreateRoomTypeRequest>,
) -> HttpResponse {
    match state.catalog.create_room_type(body.into_inner()).await {
        Ok(record) => HttpResponse::Created().json(ApiResponse::success(record)),
        Err(e) => error_response(&e),
    }
}

/// `PUT /room-types/{id}`
pub async fn update_room_type(
    state: web::Data<Arc<AppState>>,
    path: web::Path<i32>,
    body: web::Json<UpdateRoomTypeRequest>,
) -> HttpResponse {
    match state
        .catalog
        .update_room_type(path.into_inner(), body.into_inner())
        .await
    {
        Ok(record) => HttpResponse::Ok().json(ApiResponse::success(record)),
        Err(e) => error_response(&e),
    }
}

/// `DELETE /room-types/{id}`
pub async fn delete_room_type(
    state: web::Data<Arc<AppState>>,
    path: web::Path<i32>,
) -> HttpResponse {
    match state.catalog.delete_room_type(path.into_inner()).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => error_response(&e),
    }
}

// ============================================
// ROOM HANDLERS
// ============================================

/// `GET /rooms`
///
/// Accepts `status`, `limit` and `offset` query parameters. The status
/// filter is the advisory flag, not booking-derived availability.
pub async fn list_rooms(
    state: web::Data<Arc<AppState>>,
    query: web::Query<RoomListQuery>,
) -> HttpResponse {
    let limit = query.limit.unwrap_or(100);
    let offset = query.offset.unwrap_or(0);
    match state.catalog.list_rooms(query.status, limit, offset).await {
        Ok(rooms) => HttpResponse::Ok().json(ApiResponse::success(rooms)),
        Err(e) => error_response(&e),
    }
}

/// Rooms free to book for a date range.
///
/// ## Endpoint
///
/// `GET /rooms/available?check_in=2024-06-01&check_out=2024-06-05`
///
/// Returns rooms whose advisory status is `available` and that have no
/// confirmed or checked-in booking overlapping the half-open interval
/// `[check_in, check_out)`. An empty or inverted range is a 400.
pub async fn available_rooms(
    state: web::Data<Arc<AppState>>,
    query: web::Query<AvailabilityQuery>,
) -> HttpResponse {
    info!("Availability request: {} .. {}", query.check_in, query.check_out);

    match state
        .reservations
        .available_rooms(query.check_in, query.check_out)
        .await
    {
        Ok(rooms) => HttpResponse::Ok().json(ApiResponse::success(rooms)),
        Err(e) => error_response(&e),
    }
}

/// `GET /rooms/{id}`
pub async fn get_room(state: web::Data<Arc<AppState>>, path: web::Path<i32>) -> HttpResponse {
    match state.catalog.get_room(path.into_inner()).await {
        Ok(record) => HttpResponse::Ok().json(ApiResponse::success(record)),
        Err(e) => error_response(&e),
    }
}

/// `POST /rooms`
pub async fn create_room(
    state: web::Data<Arc<AppState>>,
    body: web::Json<CreateRoomRequest>,
) -> HttpResponse {
    match state.catalog.create_room(body.into_inner()).await {
        Ok(record) => HttpResponse::Created().json(ApiResponse::success(record)),
        Err(e) => error_response(&e),
    }
}

/// `PUT /rooms/{id}`
///
/// Updates the advisory status flag, the room's only mutable field.
pub async fn update_room(
    state: web::Data<Arc<AppState>>,
    path: web::Path<i32>,
    body: web::Json<UpdateRoomRequest>,
) -> HttpResponse {
    match state
        .catalog
        .update_room_status(path.into_inner(), body.status)
        .await
    {
        Ok(record) => HttpResponse::Ok().json(ApiResponse::success(record)),
        Err(e) => error_response(&e),
    }
}

/// `DELETE /rooms/{id}`
pub async fn delete_room(state: web::Data<Arc<AppState>>, path: web::Path<i32>) -> HttpResponse {
    match state.catalog.delete_room(path.into_inner()).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => error_response(&e),
    }
}

// ============================================
// GUEST HANDLERS
// ============================================

/// `GET /guests`
pub async fn list_guests(
    state: web::Data<Arc<AppState>>,
    query: web::Query<PageQuery>,
) -> HttpResponse {
    match state.guests.list_guests(query.limit(), query.offset()).await {
        Ok(guests) => HttpResponse::Ok().json(ApiResponse::success(guests)),
        Err(e) => error_response(&e),
    }
}

/// `GET /guests/{id}`
pub async fn get_guest(state: web::Data<Arc<AppState>>, path: web::Path<i32>) -> HttpResponse {
    match state.guests.get_guest(path.into_inner()).await {
        Ok(record) => HttpResponse::Ok().json(ApiResponse::success(record)),
        Err(e) => error_response(&e),
    }
}

/// `POST /guests`
///
/// 409 when the email or passport number is already registered.
pub async fn create_guest(
    state: web::Data<Arc<AppState>>,
    body: web::Json<CreateGuestRequest>,
) -> HttpResponse {
    match state.guests.create_guest(body.into_inner()).await {
        Ok(record) => HttpResponse::Created().json(ApiResponse::success(record)),
        Err(e) => error_response(&e),
    }
}

/// `PUT /guests/{id}`
pub async fn update_guest(
    state: web::Data<Arc<AppState>>,
    path: web::Path<i32>,
    body: web::Json<UpdateGuestRequest>,
) -> HttpResponse {
    match state
        .guests
        .update_guest(path.into_inner(), body.into_inner())
        .await
    {
        Ok(record) => HttpResponse::Ok().json(ApiResponse::success(record)),
        Err(e) => error_response(&e),
    }
}

/// `DELETE /guests/{id}`
pub async fn delete_guest(state: web::Data<Arc<AppState>>, path: web::Path<i32>) -> HttpResponse {
    match state.guests.delete_guest(path.into_inner()).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => error_response(&e),
    }
}

// ============================================
// BOOKING HANDLERS
// ============================================

/// `GET /bookings`
///
/// Accepts `status`, `limit` and `offset` query parameters.
pub async fn list_bookings(
    state: web::Data<Arc<AppState>>,
    query: web::Query<BookingListQuery>,
) -> HttpResponse {
    let limit = query.limit.unwrap_or(100);
    let offset = query.offset.unwrap_or(0);
    match state
        .reservations
        .list_bookings(query.status, limit, offset)
        .await
    {
        Ok(bookings) => HttpResponse::Ok().json(ApiResponse::success(bookings)),
        Err(e) => error_response(&e),
    }
}

/// `GET /bookings/{id}`
pub async fn get_booking(state: web::Data<Arc<AppState>>, path: web::Path<i32>) -> HttpResponse {
    match state.reservations.get_booking(path.into_inner()).await {
        Ok(record) => HttpResponse::Ok().json(ApiResponse::success(record)),
        Err(e) => error_response(&e),
    }
}

/// Create a booking.
///
/// ## Endpoint
///
/// `POST /bookings`
///
/// ## Example
///
/// ```bash
/// curl -X POST http://127.0.0.1:8080/bookings \
///   -H "Content-Type: application/json" \
///   -d '{
///     "guest_id": 7,
///     "room_id": 3,
///     "check_in_date": "2024-06-01",
///     "check_out_date": "2024-06-05",
///     "total_price": 48200
///   }'
/// ```
///
/// New bookings start in `pending` status. 400 for an empty or inverted
/// date range, 404 for an unknown guest or room, 409 when a confirmed
/// or checked-in booking already overlaps the window.
pub async fn create_booking(
    state: web::Data<Arc<AppState>>,
    body: web::Json<CreateBookingRequest>,
) -> HttpResponse {
    let req = body.into_inner();
    info!(
        "Booking request: room {} for guest {} ({} .. {})",
        req.room_id, req.guest_id, req.check_in_date, req.check_out_date
    );

    match state.reservations.create_booking(req).await {
        Ok(record) => HttpResponse::Created().json(ApiResponse::success(record)),
        Err(e) => error_response(&e),
    }
}

/// Update a booking.
///
/// ## Endpoint
///
/// `PUT /bookings/{id}`
///
/// The body may carry `status` (driving the lifecycle state machine:
/// confirm, cancel, check-in, check-out) and/or `special_requests` (a
/// plain field update). A body with neither is a 400. An illegal status
/// change is a 409 with code `INVALID_TRANSITION`; losing the room to
/// an overlapping booking at confirmation time is a 409 with code
/// `BOOKING_CONFLICT`.
pub async fn update_booking(
    state: web::Data<Arc<AppState>>,
    path: web::Path<i32>,
    body: web::Json<UpdateBookingRequest>,
) -> HttpResponse {
    let id = path.into_inner();
    let req = body.into_inner();

    if req.status.is_none() && req.special_requests.is_none() {
        return error_response(&ServiceError::InvalidInput(
            "update requires status or special_requests".to_string(),
        ));
    }

    // Run the state machine first; the text update only applies if the
    // transition (when present) was accepted.
    if let Some(next) = req.status {
        if let Err(e) = state.reservations.change_status(id, next).await {
            return error_response(&e);
        }
    }

    if let Some(text) = req.special_requests.as_deref() {
        if let Err(e) = state.reservations.update_requests(id, Some(text)).await {
            return error_response(&e);
        }
    }

    match state.reservations.get_booking(id).await {
        Ok(record) => HttpResponse::Ok().json(ApiResponse::success(record)),
        Err(e) => error_response(&e),
    }
}

/// `DELETE /bookings/{id}`
///
/// Administrative removal, distinct from cancellation. 409 while
/// payments still reference the booking.
pub async fn delete_booking(
    state: web::Data<Arc<AppState>>,
    path: web::Path<i32>,
) -> HttpResponse {
    match state.reservations.delete_booking(path.into_inner()).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => error_response(&e),
    }
}

// ============================================
// PAYMENT HANDLERS
// ============================================

/// `GET /payments`
pub async fn list_payments(
    state: web::Data<Arc<AppState>>,
    query: web::Query<PageQuery>,
) -> HttpResponse {
    match state.payments.list_payments(query.limit(), query.offset()).await {
        Ok(payments) => HttpResponse::Ok().json(ApiResponse::success(payments)),
        Err(e) => error_response(&e),
    }
}

/// `GET /payments/{id}`
pub async fn get_payment(state: web::Data<Arc<AppState>>, path: web::Path<i32>) -> HttpResponse {
    match state.payments.get_payment(path.into_inner()).await {
        Ok(record) => HttpResponse::Ok().json(ApiResponse::success(record)),
        Err(e) => error_response(&e),
    }
}

/// Record a payment against a booking.
///
/// ## Endpoint
///
/// `POST /payments`
///
/// 404 when the referenced booking does not exist (and no payment row
/// is written). Recording a payment never changes the booking's
/// lifecycle status.
pub async fn create_payment(
    state: web::Data<Arc<AppState>>,
    body: web::Json<CreatePaymentRequest>,
) -> HttpResponse {
    match state.payments.create_payment(body.into_inner()).await {
        Ok(record) => HttpResponse::Created().json(ApiResponse::success(record)),
        Err(e) => error_response(&e),
    }
}

/// `PUT /payments/{id}`
pub async fn update_payment(
    state: web::Data<Arc<AppState>>,
    path: web::Path<i32>,
    body: web::Json<UpdatePaymentRequest>,
) -> HttpResponse {
    match state
        .payments
        .update_payment(path.into_inner(), body.into_inner())
        .await
    {
        Ok(record) => HttpResponse::Ok().json(ApiResponse::success(record)),
        Err(e) => error_response(&e),
    }
}

/// `DELETE /payments/{id}`
pub async fn delete_payment(
    state: web::Data<Arc<AppState>>,
    path: web::Path<i32>,
) -> HttpResponse {
    match state.payments.delete_payment(path.into_inner()).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => error_response(&e),
    }
}
