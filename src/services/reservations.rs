//! # Reservation Engine
//!
//! The central service: computes room availability over a date range
//! and drives the booking lifecycle state machine.
//!
//! ## Lifecycle
//!
//! ```text
//!             confirm            arrival            departure
//! pending ─────────────▶ confirmed ────────▶ checked_in ────────▶ checked_out
//!    │                      │
//!    │ cancel               │ cancel
//!    ▼                      ▼
//! cancelled              cancelled
//! ```
//!
//! A `pending` booking is a provisional hold: it does not block the
//! room, so several pending bookings may coexist on the same dates.
//! Inventory is committed at the transition into `confirmed` (or
//! `checked_in`), which runs under the consistency guard — the first
//! transition wins and rivals get `Conflict`.

use futures::FutureExt;
use tracing::{info, warn};

use super::{ConsistencyGuard, ServiceError};
use crate::db::models::{BookingRecord, BookingStatus, RoomRecord};
use crate::db::{queries, Database};
use crate::models::requests::CreateBookingRequest;
use chrono::NaiveDate;

/// Reject empty or inverted stay intervals.
///
/// `check_in == check_out` is a zero-night stay and is refused along
/// with inverted ranges.
pub fn ensure_date_range(check_in: NaiveDate, check_out: NaiveDate) -> Result<(), ServiceError> {
    if check_in < check_out {
        Ok(())
    } else {
        Err(ServiceError::InvalidRange)
    }
}

/// Availability queries and booking lifecycle management.
#[derive(Clone)]
pub struct ReservationEngine {
    /// Database connection for booking state.
    db: Database,

    /// Per-room serialization of check-then-write units.
    guard: ConsistencyGuard,
}

impl ReservationEngine {
    /// Create a new ReservationEngine instance.
    pub fn new(db: Database) -> Self {
        let guard = ConsistencyGuard::new(db.clone());
        Self { db, guard }
    }

    // ==========================================
    // AVAILABILITY
    // ==========================================

    /// Rooms free to book for `[check_in, check_out)`.
    ///
    /// Structurally-available rooms (advisory status `available`) minus
    /// those with an overlapping booking in a blocking status. The
    /// answer is advisory: nothing is locked, and a create attempt
    /// re-checks under the guard.
    ///
    /// ## Returns
    ///
    /// * `Ok(Vec<RoomRecord>)` - rooms with a clear window
    /// * `Err(ServiceError::InvalidRange)` - check_in >= check_out
    pub async fn available_rooms(
        &self,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<Vec<RoomRecord>, ServiceError> {
        ensure_date_range(check_in, check_out)?;
        Ok(queries::available_rooms(self.db.pool(), check_in, check_out).await?)
    }

    // ==========================================
    // BOOKING LIFECYCLE
    // ==========================================

    /// Create a booking in `pending` status.
    ///
    /// Validates the date range and price, resolves guest and room,
    /// then delegates the overlap check plus insert to the guard as one
    /// atomic unit.
    ///
    /// ## Returns
    ///
    /// * `Ok(BookingRecord)` - the persisted booking, status `pending`
    /// * `Err(ServiceError::InvalidRange)` - empty or inverted interval
    /// * `Err(ServiceError::NotFound)` - guest or room absent
    /// * `Err(ServiceError::Conflict)` - an overlapping booking holds
    ///   the room (including a concurrent create that won the race)
    pub async fn create_booking(
        &self,
        req: CreateBookingRequest,
    ) -> Result<BookingRecord, ServiceError> {
        ensure_date_range(req.check_in_date, req.check_out_date)?;

        if req.total_price < 0 {
            return Err(ServiceError::InvalidInput(
                "total_price must not be negative".to_string(),
            ));
        }

        queries::get_guest(self.db.pool(), req.guest_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("guest {}", req.guest_id)))?;

        let room = queries::get_room(self.db.pool(), req.room_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("room {}", req.room_id)))?;

        let room_id = room.id;
        let (check_in, check_out) = (req.check_in_date, req.check_out_date);

        let booking = self
            .guard
            .reserve(room_id, check_in, check_out, None, move |tx| {
                async move {
                    queries::insert_booking(tx, &req).await.map_err(|e| {
                        if e.is_foreign_key_violation() {
                            // Guest or room vanished between the lookup
                            // and the insert.
                            ServiceError::NotFound("guest or room".to_string())
                        } else if e.is_check_violation() {
                            // The schema's date CHECK backstops the
                            // range validation above.
                            ServiceError::InvalidRange
                        } else {
                            ServiceError::from(e)
                        }
                    })
                }
                .boxed()
            })
            .await?;

        info!(
            "Booking {} created: room {} for guest {}, {} night(s) at {}",
            booking.id,
            booking.room_id,
            booking.guest_id,
            crate::utils::nights_between(check_in, check_out),
            crate::utils::format_price(booking.total_price)
        );
        Ok(booking)
    }

    /// Advance a booking through the lifecycle state machine.
    ///
    /// Transitions into a blocking status (`confirmed`, `checked_in`)
    /// re-verify the overlap invariant under the room's guard, with the
    /// booking's own row excluded from the count. Transitions that
    /// release inventory (cancel, check-out) skip the guard but still
    /// compare-and-set on the source status so racing callers cannot
    /// both win.
    ///
    /// ## Returns
    ///
    /// * `Ok(BookingRecord)` - the booking in its new status
    /// * `Err(ServiceError::NotFound)` - unknown booking id
    /// * `Err(ServiceError::InvalidTransition)` - not in the table
    /// * `Err(ServiceError::Conflict)` - another booking took the room
    ///   before this one could be committed
    pub async fn change_status(
        &self,
        booking_id: i32,
        next: BookingStatus,
    ) -> Result<BookingRecord, ServiceError> {
        let booking = queries::get_booking(self.db.pool(), booking_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("booking {}", booking_id)))?;

        let current = booking.status;
        if !current.can_transition_to(next) {
            return Err(ServiceError::InvalidTransition {
                from: current,
                to: next,
            });
        }

        let updated = if next.blocks_room() {
            self.guard
                .reserve(
                    booking.room_id,
                    booking.check_in_date,
                    booking.check_out_date,
                    Some(booking_id),
                    move |tx| {
                        async move {
                            queries::cas_booking_status_tx(tx, booking_id, current, next)
                                .await
                                .map_err(ServiceError::from)
                        }
                        .boxed()
                    },
                )
                .await?
        } else {
            queries::cas_booking_status(self.db.pool(), booking_id, current, next).await?
        };

        match updated {
            Some(record) => {
                info!("Booking {} moved {} -> {}", booking_id, current, next);
                Ok(record)
            }
            None => {
                // The compare-and-set missed: someone else transitioned
                // the booking first. Report against the fresh status.
                let fresh = queries::get_booking(self.db.pool(), booking_id)
                    .await?
                    .ok_or_else(|| ServiceError::NotFound(format!("booking {}", booking_id)))?;
                warn!(
                    "Booking {} transition to {} lost a race; now {}",
                    booking_id, next, fresh.status
                );
                Err(ServiceError::InvalidTransition {
                    from: fresh.status,
                    to: next,
                })
            }
        }
    }

    /// Replace a booking's special_requests text.
    pub async fn update_requests(
        &self,
        booking_id: i32,
        special_requests: Option<&str>,
    ) -> Result<BookingRecord, ServiceError> {
        queries::update_booking_requests(self.db.pool(), booking_id, special_requests)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("booking {}", booking_id)))
    }

    // ==========================================
    // BOOKING QUERIES & ADMIN
    // ==========================================

    /// List bookings, optionally filtered by status.
    pub async fn list_bookings(
        &self,
        status: Option<BookingStatus>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<BookingRecord>, ServiceError> {
        Ok(queries::list_bookings(self.db.pool(), status, limit, offset).await?)
    }

    /// Get a booking by id.
    pub async fn get_booking(&self, booking_id: i32) -> Result<BookingRecord, ServiceError> {
        queries::get_booking(self.db.pool(), booking_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("booking {}", booking_id)))
    }

    /// Physically remove a booking.
    ///
    /// This is the administrative path, distinct from cancellation: it
    /// bypasses the state machine entirely. Payments referencing the
    /// booking make the FK refuse, and that refusal is surfaced rather
    /// than cascading into financial records.
    pub async fn delete_booking(&self, booking_id: i32) -> Result<(), ServiceError> {
        match queries::delete_booking(self.db.pool(), booking_id).await {
            Ok(true) => {
                info!("Booking {} removed (administrative)", booking_id);
                Ok(())
            }
            Ok(false) => Err(ServiceError::NotFound(format!("booking {}", booking_id))),
            Err(e) if e.is_foreign_key_violation() => Err(ServiceError::Conflict(format!(
                "payments still reference booking {}",
                booking_id
            ))),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_range_must_be_forward() {
        assert!(ensure_date_range(day(2024, 6, 1), day(2024, 6, 5)).is_ok());
    }

    #[test]
    fn test_zero_night_stay_rejected() {
        let result = ensure_date_range(day(2024, 6, 1), day(2024, 6, 1));
        assert!(matches!(result, Err(ServiceError::InvalidRange)));
    }

    #[test]
    fn test_inverted_range_rejected() {
        let result = ensure_date_range(day(2024, 6, 5), day(2024, 6, 1));
        assert!(matches!(result, Err(ServiceError::InvalidRange)));
    }
}
