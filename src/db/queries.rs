//! # Database Queries
//!
//! This module contains all the SQL for the backend. Each function
//! performs one database operation.
//!
//! ## Query Organization
//!
//! Queries are grouped by the table they operate on:
//! - `*_room_type*` - Room type operations
//! - `*_room*` - Room operations (including the availability scan)
//! - `*_guest*` - Guest operations
//! - `*_booking*` - Booking operations (including the overlap count)
//! - `*_payment*` - Payment operations
//!
//! ## Sessions and Transactions
//!
//! Plain CRUD takes the pool and borrows a connection for the single
//! statement. The booking write path is different: the insert and the
//! compare-and-set status update run against an explicit
//! `tokio_postgres::Transaction` handed in by the consistency guard, so
//! the overlap check and the write commit or roll back as one unit.
//!
//! ## Error Handling
//!
//! All queries return `Result<T, DatabaseError>`. Constraint violations
//! (unique, foreign key, check) surface as `QueryError` and are
//! classified by the service layer via
//! `DatabaseError::is_unique_violation` and friends.

use chrono::NaiveDate;
use deadpool_postgres::Pool;
use tokio_postgres::{Row, Transaction};
use tracing::debug;

use super::models::*;
use super::DatabaseError;
use crate::models::requests::{
    CreateBookingRequest, CreateGuestRequest, CreatePaymentRequest, CreateRoomRequest,
    CreateRoomTypeRequest, UpdateGuestRequest, UpdatePaymentRequest, UpdateRoomTypeRequest,
};

// ============================================
// HELPER FUNCTIONS
// ============================================

/// Helper to convert a database row to RoomTypeRecord
fn row_to_room_type(row: &Row) -> Result<RoomTypeRecord, DatabaseError> {
    Ok(RoomTypeRecord {
        id: row.get("id"),
        name: row.get("name"),
        description: row.get("description"),
        base_price: row.get("base_price"),
        capacity: row.get("capacity"),
        created_at: row.get("created_at"),
    })
}

/// Helper to convert a database row to RoomRecord
fn row_to_room(row: &Row) -> Result<RoomRecord, DatabaseError> {
    let status: String = row.get("status");
    Ok(RoomRecord {
        id: row.get("id"),
        room_number: row.get("room_number"),
        room_type_id: row.get("room_type_id"),
        floor: row.get("floor"),
        status: status.parse().map_err(DatabaseError::InvalidColumn)?,
        created_at: row.get("created_at"),
    })
}

/// Helper to convert a database row to GuestRecord
fn row_to_guest(row: &Row) -> Result<GuestRecord, DatabaseError> {
    Ok(GuestRecord {
        id: row.get("id"),
        first_name: row.get("first_name"),
        last_name: row.get("last_name"),
        email: row.get("email"),
        phone: row.get("phone"),
        passport_number: row.get("passport_number"),
        date_of_birth: row.get("date_of_birth"),
        created_at: row.get("created_at"),
    })
}

/// Helper to convert a database row to BookingRecord
fn row_to_booking(row: &Row) -> Result<BookingRecord, DatabaseError> {
    let status: String = row.get("status");
    Ok(BookingRecord {
        id: row.get("id"),
        guest_id: row.get("guest_id"),
        room_id: row.get("room_id"),
        check_in_date: row.get("check_in_date"),
        check_out_date: row.get("check_out_date"),
        total_price: row.get("total_price"),
        status: status.parse().map_err(DatabaseError::InvalidColumn)?,
        special_requests: row.get("special_requests"),
        created_at: row.get("created_at"),
    })
}

/// Helper to convert a database row to PaymentRecord
fn row_to_payment(row: &Row) -> Result<PaymentRecord, DatabaseError> {
    let method: String = row.get("payment_method");
    let status: String = row.get("payment_status");
    Ok(PaymentRecord {
        id: row.get("id"),
        booking_id: row.get("booking_id"),
        amount: row.get("amount"),
        payment_method: method.parse().map_err(DatabaseError::InvalidColumn)?,
        payment_status: status.parse().map_err(DatabaseError::InvalidColumn)?,
        transaction_id: row.get("transaction_id"),
        payment_date: row.get("payment_date"),
    })
}

// ============================================
// ROOM TYPE QUERIES
// ============================================

/// List room types.
pub async fn list_room_types(
    pool: &Pool,
    limit: i64,
    offset: i64,
) -> Result<Vec<RoomTypeRecord>, DatabaseError> {
    debug!("Fetching room types (limit: {}, offset: {})", limit, offset);

    let client = pool.get().await
        .map_err(|e| DatabaseError::ConnectionError(e.to_string()))?;

    let rows = client.query(
        r#"
        SELECT id, name, description, base_price, capacity, created_at
        FROM room_types
        ORDER BY id
        LIMIT $1 OFFSET $2
        "#,
        &[&limit, &offset],
    ).await?;

    rows.iter().map(row_to_room_type).collect()
}

/// Get a room type by id.
pub async fn get_room_type(
    pool: &Pool,
    id: i32,
) -> Result<Option<RoomTypeRecord>, DatabaseError> {
    let client = pool.get().await
        .map_err(|e| DatabaseError::ConnectionError(e.to_string()))?;

    let row = client.query_opt(
        r#"
        SELECT id, name, description, base_price, capacity, created_at
        FROM room_types
        WHERE id = $1
        "#,
        &[&id],
    ).await?;

    row.as_ref().map(row_to_room_type).transpose()
}

/// Insert a room type and return the stored record.
pub async fn create_room_type(
    pool: &Pool,
    req: &CreateRoomTypeRequest,
) -> Result<RoomTypeRecord, DatabaseError> {
    debug!("Creating room type: {}", req.name);

    let client = pool.get().await
        .map_err(|e| DatabaseError::ConnectionError(e.to_string()))?;

    let row = client.query_one(
        r#"
        INSERT INTO room_types (name, description, base_price, capacity)
        VALUES ($1, $2, $3, $4)
        RETURNING id, name, description, base_price, capacity, created_at
        "#,
        &[&req.name, &req.description, &req.base_price, &req.capacity],
    ).await?;

    row_to_room_type(&row)
}

/// Apply a partial change set to a room type.
///
/// Omitted fields keep their stored values. Returns `None` when the id
/// does not exist.
pub async fn update_room_type(
    pool: &Pool,
    id: i32,
    changes: &UpdateRoomTypeRequest,
) -> Result<Option<RoomTypeRecord>, DatabaseError> {
    let client = pool.get().await
        .map_err(|e| DatabaseError::ConnectionError(e.to_string()))?;

    let row = client.query_opt(
        r#"
        UPDATE room_types
        SET
            name = COALESCE($2, name),
            description = COALESCE($3, description),
            base_price = COALESCE($4, base_price),
            capacity = COALESCE($5, capacity)
        WHERE id = $1
        RETURNING id, name, description, base_price, capacity, created_at
        "#,
        &[&id, &changes.name, &changes.description, &changes.base_price, &changes.capacity],
    ).await?;

    row.as_ref().map(row_to_room_type).transpose()
}

/// Delete a room type. Returns false when the id does not exist.
pub async fn delete_room_type(pool: &Pool, id: i32) -> Result<bool, DatabaseError> {
    let client = pool.get().await
        .map_err(|e| DatabaseError::ConnectionError(e.to_string()))?;

    let affected = client.execute("DELETE FROM room_types WHERE id = $1", &[&id]).await?;
    Ok(affected > 0)
}

// ============================================
// ROOM QUERIES
// ============================================

/// List rooms, optionally filtered by advisory status.
pub async fn list_rooms(
    pool: &Pool,
    status: Option<RoomStatus>,
    limit: i64,
    offset: i64,
) -> Result<Vec<RoomRecord>, DatabaseError> {
    debug!("Fetching rooms (status: {:?}, limit: {}, offset: {})", status, limit, offset);

    let client = pool.get().await
        .map_err(|e| DatabaseError::ConnectionError(e.to_string()))?;

    let status_str = status.map(|s| s.as_str());
    let rows = client.query(
        r#"
        SELECT id, room_number, room_type_id, floor, status, created_at
        FROM rooms
        WHERE $1::VARCHAR IS NULL OR status = $1
        ORDER BY room_number
        LIMIT $2 OFFSET $3
        "#,
        &[&status_str, &limit, &offset],
    ).await?;

    rows.iter().map(row_to_room).collect()
}

/// Get a room by id.
pub async fn get_room(pool: &Pool, id: i32) -> Result<Option<RoomRecord>, DatabaseError> {
    let client = pool.get().await
        .map_err(|e| DatabaseError::ConnectionError(e.to_string()))?;

    let row = client.query_opt(
        r#"
        SELECT id, room_number, room_type_id, floor, status, created_at
        FROM rooms
        WHERE id = $1
        "#,
        &[&id],
    ).await?;

    row.as_ref().map(row_to_room).transpose()
}

/// Insert a room and return the stored record.
pub async fn create_room(
    pool: &Pool,
    req: &CreateRoomRequest,
) -> Result<RoomRecord, DatabaseError> {
    debug!("Creating room: {}", req.room_number);

    let client = pool.get().await
        .map_err(|e| DatabaseError::ConnectionError(e.to_string()))?;

    let status = req.status.unwrap_or(RoomStatus::Available);
    let row = client.query_one(
        r#"
        INSERT INTO rooms (room_number, room_type_id, floor, status)
        VALUES ($1, $2, $3, $4)
        RETURNING id, room_number, room_type_id, floor, status, created_at
        "#,
        &[&req.room_number, &req.room_type_id, &req.floor, &status.as_str()],
    ).await?;

    row_to_room(&row)
}

/// Set a room's advisory status. Returns `None` when the id does not exist.
pub async fn update_room_status(
    pool: &Pool,
    id: i32,
    status: RoomStatus,
) -> Result<Option<RoomRecord>, DatabaseError> {
    debug!("Updating room {} status to {}", id, status);

    let client = pool.get().await
        .map_err(|e| DatabaseError::ConnectionError(e.to_string()))?;

    let row = client.query_opt(
        r#"
        UPDATE rooms
        SET status = $2
        WHERE id = $1
        RETURNING id, room_number, room_type_id, floor, status, created_at
        "#,
        &[&id, &status.as_str()],
    ).await?;

    row.as_ref().map(row_to_room).transpose()
}

/// Delete a room. Returns false when the id does not exist.
pub async fn delete_room(pool: &Pool, id: i32) -> Result<bool, DatabaseError> {
    let client = pool.get().await
        .map_err(|e| DatabaseError::ConnectionError(e.to_string()))?;

    let affected = client.execute("DELETE FROM rooms WHERE id = $1", &[&id]).await?;
    Ok(affected > 0)
}

/// Rooms free to book for `[check_in, check_out)`.
///
/// A room qualifies when its advisory status is `available` AND no
/// booking in a blocking status (`confirmed`, `checked_in`) overlaps
/// the requested interval. Two intervals overlap iff
/// `a.check_in < b.check_out AND b.check_in < a.check_out`.
///
/// Read-only and lock-free: the answer is advisory until a create is
/// attempted, at which point the consistency guard re-checks under the
/// room's lock.
pub async fn available_rooms(
    pool: &Pool,
    check_in: NaiveDate,
    check_out: NaiveDate,
) -> Result<Vec<RoomRecord>, DatabaseError> {
    debug!("Scanning availability for {} .. {}", check_in, check_out);

    let client = pool.get().await
        .map_err(|e| DatabaseError::ConnectionError(e.to_string()))?;

    let rows = client.query(
        r#"
        SELECT r.id, r.room_number, r.room_type_id, r.floor, r.status, r.created_at
        FROM rooms r
        WHERE r.status = 'available'
          AND NOT EXISTS (
              SELECT 1 FROM bookings b
              WHERE b.room_id = r.id
                AND b.status IN ('confirmed', 'checked_in')
                AND b.check_in_date < $2
                AND b.check_out_date > $1
          )
        ORDER BY r.room_number
        "#,
        &[&check_in, &check_out],
    ).await?;

    rows.iter().map(row_to_room).collect()
}

// ============================================
// GUEST QUERIES
// ============================================

/// List guests.
pub async fn list_guests(
    pool: &Pool,
    limit: i64,
    offset: i64,
) -> Result<Vec<GuestRecord>, DatabaseError> {
    let client = pool.get().await
        .map_err(|e| DatabaseError::ConnectionError(e.to_string()))?;

    let rows = client.query(
        r#"
        SELECT id, first_name, last_name, email, phone, passport_number,
               date_of_birth, created_at
        FROM guests
        ORDER BY id
        LIMIT $1 OFFSET $2
        "#,
        &[&limit, &offset],
    ).await?;

    rows.iter().map(row_to_guest).collect()
}

/// Get a guest by id.
pub async fn get_guest(pool: &Pool, id: i32) -> Result<Option<GuestRecord>, DatabaseError> {
    let client = pool.get().await
        .map_err(|e| DatabaseError::ConnectionError(e.to_string()))?;

    let row = client.query_opt(
        r#"
        SELECT id, first_name, last_name, email, phone, passport_number,
               date_of_birth, created_at
        FROM guests
        WHERE id = $1
        "#,
        &[&id],
    ).await?;

    row.as_ref().map(row_to_guest).transpose()
}

/// Look a guest up by email (unique).
pub async fn get_guest_by_email(
    pool: &Pool,
    email: &str,
) -> Result<Option<GuestRecord>, DatabaseError> {
    let client = pool.get().await
        .map_err(|e| DatabaseError::ConnectionError(e.to_string()))?;

    let row = client.query_opt(
        r#"
        SELECT id, first_name, last_name, email, phone, passport_number,
               date_of_birth, created_at
        FROM guests
        WHERE email = $1
        "#,
        &[&email],
    ).await?;

    row.as_ref().map(row_to_guest).transpose()
}

/// Insert a guest and return the stored record.
///
/// The unique indexes on email and passport_number are the real
/// gatekeepers; a violation comes back as SQLSTATE 23505.
pub async fn create_guest(
    pool: &Pool,
    req: &CreateGuestRequest,
) -> Result<GuestRecord, DatabaseError> {
    debug!("Creating guest: {}", req.email);

    let client = pool.get().await
        .map_err(|e| DatabaseError::ConnectionError(e.to_string()))?;

    let row = client.query_one(
        r#"
        INSERT INTO guests (first_name, last_name, email, phone, passport_number, date_of_birth)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, first_name, last_name, email, phone, passport_number,
                  date_of_birth, created_at
        "#,
        &[
            &req.first_name,
            &req.last_name,
            &req.email,
            &req.phone,
            &req.passport_number,
            &req.date_of_birth,
        ],
    ).await?;

    row_to_guest(&row)
}

/// Apply a partial change set to a guest.
pub async fn update_guest(
    pool: &Pool,
    id: i32,
    changes: &UpdateGuestRequest,
) -> Result<Option<GuestRecord>, DatabaseError> {
    let client = pool.get().await
        .map_err(|e| DatabaseError::ConnectionError(e.to_string()))?;

    let row = client.query_opt(
        r#"
        UPDATE guests
        SET
            first_name = COALESCE($2, first_name),
            last_name = COALESCE($3, last_name),
            email = COALESCE($4, email),
            phone = COALESCE($5, phone)
        WHERE id = $1
        RETURNING id, first_name, last_name, email, phone, passport_number,
                  date_of_birth, created_at
        "#,
        &[&id, &changes.first_name, &changes.last_name, &changes.email, &changes.phone],
    ).await?;

    row.as_ref().map(row_to_guest).transpose()
}

/// Delete a guest. Returns false when the id does not exist.
pub async fn delete_guest(pool: &Pool, id: i32) -> Result<bool, DatabaseError> {
    let client = pool.get().await
        .map_err(|e| DatabaseError::ConnectionError(e.to_string()))?;

    let affected = client.execute("DELETE FROM guests WHERE id = $1", &[&id]).await?;
    Ok(affected > 0)
}

// ============================================
// BOOKING QUERIES
// ============================================

/// List bookings, optionally filtered by lifecycle status.
pub async fn list_bookings(
    pool: &Pool,
    status: Option<BookingStatus>,
    limit: i64,
    offset: i64,
) -> Result<Vec<BookingRecord>, DatabaseError> {
    let client = pool.get().await
        .map_err(|e| DatabaseError::ConnectionError(e.to_string()))?;

    let status_str = status.map(|s| s.as_str());
    let rows = client.query(
        r#"
        SELECT id, guest_id, room_id, check_in_date, check_out_date,
               total_price, status, special_requests, created_at
        FROM bookings
        WHERE $1::VARCHAR IS NULL OR status = $1
        ORDER BY id
        LIMIT $2 OFFSET $3
        "#,
        &[&status_str, &limit, &offset],
    ).await?;

    rows.iter().map(row_to_booking).collect()
}

/// Get a booking by id.
pub async fn get_booking(pool: &Pool, id: i32) -> Result<Option<BookingRecord>, DatabaseError> {
    let client = pool.get().await
        .map_err(|e| DatabaseError::ConnectionError(e.to_string()))?;

    let row = client.query_opt(
        r#"
        SELECT id, guest_id, room_id, check_in_date, check_out_date,
               total_price, status, special_requests, created_at
        FROM bookings
        WHERE id = $1
        "#,
        &[&id],
    ).await?;

    row.as_ref().map(row_to_booking).transpose()
}

/// Count bookings on `room_id` that hold the room and overlap
/// `[check_in, check_out)`.
///
/// Runs on the guard's transaction so the count is taken under the
/// room's advisory lock. `exclude_booking` keeps a booking being
/// re-checked (e.g. at confirmation) from colliding with its own row.
pub async fn count_overlapping_bookings(
    tx: &Transaction<'_>,
    room_id: i32,
    check_in: NaiveDate,
    check_out: NaiveDate,
    exclude_booking: Option<i32>,
) -> Result<i64, DatabaseError> {
    let row = tx.query_one(
        r#"
        SELECT COUNT(*) AS overlapping
        FROM bookings
        WHERE room_id = $1
          AND status IN ('confirmed', 'checked_in')
          AND check_in_date < $3
          AND check_out_date > $2
          AND ($4::INTEGER IS NULL OR id <> $4)
        "#,
        &[&room_id, &check_in, &check_out, &exclude_booking],
    ).await?;

    Ok(row.get("overlapping"))
}

/// Insert a booking in `pending` status on the guard's transaction.
pub async fn insert_booking(
    tx: &Transaction<'_>,
    req: &CreateBookingRequest,
) -> Result<BookingRecord, DatabaseError> {
    let row = tx.query_one(
        r#"
        INSERT INTO bookings (guest_id, room_id, check_in_date, check_out_date,
                              total_price, status, special_requests)
        VALUES ($1, $2, $3, $4, $5, 'pending', $6)
        RETURNING id, guest_id, room_id, check_in_date, check_out_date,
                  total_price, status, special_requests, created_at
        "#,
        &[
            &req.guest_id,
            &req.room_id,
            &req.check_in_date,
            &req.check_out_date,
            &req.total_price,
            &req.special_requests,
        ],
    ).await?;

    row_to_booking(&row)
}

/// Compare-and-set a booking's status on the guard's transaction.
///
/// The WHERE clause pins the expected source status, so a transition
/// that lost a race updates zero rows and returns `None` instead of
/// silently overwriting someone else's transition.
pub async fn cas_booking_status_tx(
    tx: &Transaction<'_>,
    id: i32,
    from: BookingStatus,
    to: BookingStatus,
) -> Result<Option<BookingRecord>, DatabaseError> {
    let row = tx.query_opt(
        r#"
        UPDATE bookings
        SET status = $3
        WHERE id = $1 AND status = $2
        RETURNING id, guest_id, room_id, check_in_date, check_out_date,
                  total_price, status, special_requests, created_at
        "#,
        &[&id, &from.as_str(), &to.as_str()],
    ).await?;

    row.as_ref().map(row_to_booking).transpose()
}

/// Compare-and-set a booking's status outside the guard.
///
/// Used for transitions that release inventory (cancel, check-out) and
/// therefore need no overlap re-check.
pub async fn cas_booking_status(
    pool: &Pool,
    id: i32,
    from: BookingStatus,
    to: BookingStatus,
) -> Result<Option<BookingRecord>, DatabaseError> {
    let client = pool.get().await
        .map_err(|e| DatabaseError::ConnectionError(e.to_string()))?;

    let row = client.query_opt(
        r#"
        UPDATE bookings
        SET status = $3
        WHERE id = $1 AND status = $2
        RETURNING id, guest_id, room_id, check_in_date, check_out_date,
                  total_price, status, special_requests, created_at
        "#,
        &[&id, &from.as_str(), &to.as_str()],
    ).await?;

    row.as_ref().map(row_to_booking).transpose()
}

/// Replace a booking's special_requests text.
pub async fn update_booking_requests(
    pool: &Pool,
    id: i32,
    special_requests: Option<&str>,
) -> Result<Option<BookingRecord>, DatabaseError> {
    let client = pool.get().await
        .map_err(|e| DatabaseError::ConnectionError(e.to_string()))?;

    let row = client.query_opt(
        r#"
        UPDATE bookings
        SET special_requests = $2
        WHERE id = $1
        RETURNING id, guest_id, room_id, check_in_date, check_out_date,
                  total_price, status, special_requests, created_at
        "#,
        &[&id, &special_requests],
    ).await?;

    row.as_ref().map(row_to_booking).transpose()
}

/// Physically remove a booking (administrative path, not cancellation).
///
/// Payments referencing the booking make the FK refuse; the caller maps
/// that to a conflict rather than cascading.
pub async fn delete_booking(pool: &Pool, id: i32) -> Result<bool, DatabaseError> {
    let client = pool.get().await
        .map_err(|e| DatabaseError::ConnectionError(e.to_string()))?;

    let affected = client.execute("DELETE FROM bookings WHERE id = $1", &[&id]).await?;
    Ok(affected > 0)
}

// ============================================
// PAYMENT QUERIES
// ============================================

/// List payments.
pub async fn list_payments(
    pool: &Pool,
    limit: i64,
    offset: i64,
) -> Result<Vec<PaymentRecord>, DatabaseError> {
    let client = pool.get().await
        .map_err(|e| DatabaseError::ConnectionError(e.to_string()))?;

    let rows = client.query(
        r#"
        SELECT id, booking_id, amount, payment_method, payment_status,
               transaction_id, payment_date
        FROM payments
        ORDER BY id
        LIMIT $1 OFFSET $2
        "#,
        &[&limit, &offset],
    ).await?;

    rows.iter().map(row_to_payment).collect()
}

/// Get a payment by id.
pub async fn get_payment(pool: &Pool, id: i32) -> Result<Option<PaymentRecord>, DatabaseError> {
    let client = pool.get().await
        .map_err(|e| DatabaseError::ConnectionError(e.to_string()))?;

    let row = client.query_opt(
        r#"
        SELECT id, booking_id, amount, payment_method, payment_status,
               transaction_id, payment_date
        FROM payments
        WHERE id = $1
        "#,
        &[&id],
    ).await?;

    row.as_ref().map(row_to_payment).transpose()
}

/// Insert a payment and return the stored record.
///
/// The booking FK guarantees the reference resolves at creation time; a
/// dangling booking_id comes back as SQLSTATE 23503 and no row is
/// written.
pub async fn create_payment(
    pool: &Pool,
    req: &CreatePaymentRequest,
) -> Result<PaymentRecord, DatabaseError> {
    debug!("Recording payment for booking {}", req.booking_id);

    let client = pool.get().await
        .map_err(|e| DatabaseError::ConnectionError(e.to_string()))?;

    let status = req.payment_status.unwrap_or(PaymentStatus::Pending);
    let row = client.query_one(
        r#"
        INSERT INTO payments (booking_id, amount, payment_method, payment_status, transaction_id)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, booking_id, amount, payment_method, payment_status,
                  transaction_id, payment_date
        "#,
        &[
            &req.booking_id,
            &req.amount,
            &req.payment_method.as_str(),
            &status.as_str(),
            &req.transaction_id,
        ],
    ).await?;

    row_to_payment(&row)
}

/// Apply a partial change set to a payment.
///
/// payment_status moves freely between any two values here; there is no
/// transition table for payments.
pub async fn update_payment(
    pool: &Pool,
    id: i32,
    changes: &UpdatePaymentRequest,
) -> Result<Option<PaymentRecord>, DatabaseError> {
    let client = pool.get().await
        .map_err(|e| DatabaseError::ConnectionError(e.to_string()))?;

    let status_str = changes.payment_status.map(|s| s.as_str());
    let row = client.query_opt(
        r#"
        UPDATE payments
        SET
            payment_status = COALESCE($2, payment_status),
            transaction_id = COALESCE($3, transaction_id)
        WHERE id = $1
        RETURNING id, booking_id, amount, payment_method, payment_status,
                  transaction_id, payment_date
        "#,
        &[&id, &status_str, &changes.transaction_id],
    ).await?;

    row.as_ref().map(row_to_payment).transpose()
}

/// Delete a payment. Returns false when the id does not exist.
pub async fn delete_payment(pool: &Pool, id: i32) -> Result<bool, DatabaseError> {
    let client = pool.get().await
        .map_err(|e| DatabaseError::ConnectionError(e.to_string()))?;

    let affected = client.execute("DELETE FROM payments WHERE id = $1", &[&id]).await?;
    Ok(affected > 0)
}
