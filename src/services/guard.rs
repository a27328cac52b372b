//! # Consistency Guard
//!
//! The concurrency-control discipline that makes "check availability,
//! then write a booking" atomic across concurrent callers.
//!
//! ## Design
//!
//! Pessimistic, scoped to one room: every booking mutation for room R
//! runs inside a transaction holding PostgreSQL's transaction-scoped
//! advisory lock keyed on `(ROOM_LOCK_SPACE, R)`. The lock lives in the
//! database, derived purely from the room id, so it serializes writers
//! across processes and owes nothing to in-process state that a restart
//! would wipe.
//!
//! ## Flow
//!
//! ```text
//! 1. BEGIN
//! 2. pg_advisory_xact_lock(space, room_id)   <- blocks rival writers
//! 3. count overlapping confirmed/checked_in bookings
//! 4. overlap?  -> Conflict, ROLLBACK (nothing written)
//! 5. run the writer closure on the same transaction
//! 6. COMMIT                                  <- lock released here
//! ```
//!
//! Between two concurrent `reserve` calls for the same room and
//! overlapping dates, at most one commits; the loser observes a clean
//! `Conflict`, never a half-written booking. Rooms are independent
//! units of contention, so unrelated rooms never wait on each other.

use chrono::NaiveDate;
use futures::future::BoxFuture;
use tokio_postgres::Transaction;
use tracing::{debug, warn};

use super::ServiceError;
use crate::db::{queries, Database};

/// Advisory-lock classid for room reservations. Any constant works as
/// long as every writer agrees on it; this one spells "ROOM".
const ROOM_LOCK_SPACE: i32 = 0x524F_4F4D;

/// Serializes check-then-write booking mutations per room.
#[derive(Clone)]
pub struct ConsistencyGuard {
    /// Database owning both the lock and the data it protects.
    db: Database,
}

impl ConsistencyGuard {
    /// Create a new guard over the given database.
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Run `writer` atomically with respect to other reservations on
    /// `room_id`.
    ///
    /// Verifies under the room's lock that no booking in a blocking
    /// status overlaps `[check_in, check_out)`, then hands the open
    /// transaction to `writer`. The transaction commits only if the
    /// check and the writer both succeed; any failure rolls the whole
    /// unit back.
    ///
    /// ## Arguments
    ///
    /// * `exclude_booking` - booking id to leave out of the overlap
    ///   count. Status re-checks pass the booking being advanced so it
    ///   does not collide with its own row; creation passes `None`.
    /// * `writer` - the write to perform once the window is clear,
    ///   executed on the guarded transaction.
    ///
    /// ## Returns
    ///
    /// * `Ok(T)` - the writer's result, committed
    /// * `Err(ServiceError::Conflict)` - an overlapping booking holds
    ///   the room; nothing was written
    pub async fn reserve<T, F>(
        &self,
        room_id: i32,
        check_in: NaiveDate,
        check_out: NaiveDate,
        exclude_booking: Option<i32>,
        writer: F,
    ) -> Result<T, ServiceError>
    where
        F: for<'t> FnOnce(&'t Transaction<'t>) -> BoxFuture<'t, Result<T, ServiceError>>,
    {
        debug!(
            "Reserving room {} for {} .. {} (exclude: {:?})",
            room_id, check_in, check_out, exclude_booking
        );

        let mut client = self.db.pool().get().await
            .map_err(|e| ServiceError::Database(e.to_string()))?;

        let tx = client.transaction().await
            .map_err(|e| ServiceError::Database(e.to_string()))?;

        // Blocks until every earlier writer for this room has committed
        // or rolled back; released automatically with the transaction.
        tx.execute(
            "SELECT pg_advisory_xact_lock($1, $2)",
            &[&ROOM_LOCK_SPACE, &room_id],
        )
        .await
        .map_err(|e| ServiceError::Database(e.to_string()))?;

        let overlapping = queries::count_overlapping_bookings(
            &tx,
            room_id,
            check_in,
            check_out,
            exclude_booking,
        )
        .await
        .map_err(ServiceError::from)?;

        if overlapping > 0 {
            warn!(
                "Room {} refused for {} .. {}: {} overlapping booking(s)",
                room_id, check_in, check_out, overlapping
            );
            // Dropping the transaction rolls it back.
            return Err(ServiceError::Conflict(format!(
                "room {} is already booked for the requested dates",
                room_id
            )));
        }

        let value = writer(&tx).await?;

        tx.commit().await
            .map_err(|e| ServiceError::Database(e.to_string()))?;

        debug!("Room {} reservation unit committed", room_id);
        Ok(value)
    }
}
