//! # Guest Directory
//!
//! Uniqueness-checked guest storage. No state machine: a guest record
//! is identity plus contact details, nothing else.
//!
//! Email and passport number are globally unique. The unique indexes
//! are the authority; the application-level email pre-check only buys a
//! friendlier error message for the common case.

use tracing::info;

use super::ServiceError;
use crate::db::models::GuestRecord;
use crate::db::{queries, Database};
use crate::models::requests::{CreateGuestRequest, UpdateGuestRequest};

/// Guest identity storage.
#[derive(Clone)]
pub struct GuestDirectory {
    db: Database,
}

impl GuestDirectory {
    /// Create a new GuestDirectory instance.
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// List guests.
    pub async fn list_guests(
        &self,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<GuestRecord>, ServiceError> {
        Ok(queries::list_guests(self.db.pool(), limit, offset).await?)
    }

    /// Get a guest by id.
    pub async fn get_guest(&self, id: i32) -> Result<GuestRecord, ServiceError> {
        queries::get_guest(self.db.pool(), id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("guest {}", id)))
    }

    /// Look a guest up by email.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<GuestRecord>, ServiceError> {
        Ok(queries::get_guest_by_email(self.db.pool(), email).await?)
    }

    /// Register a guest.
    ///
    /// ## Returns
    ///
    /// * `Err(ServiceError::Conflict)` - email or passport number
    ///   already registered
    pub async fn create_guest(&self, req: CreateGuestRequest) -> Result<GuestRecord, ServiceError> {
        if self.find_by_email(&req.email).await?.is_some() {
            return Err(ServiceError::Conflict(format!(
                "email {} is already registered",
                req.email
            )));
        }

        // A concurrent insert can still slip between the pre-check and
        // here; the unique index answers for that window.
        let record = queries::create_guest(self.db.pool(), &req).await.map_err(|e| {
            if e.is_unique_violation() {
                ServiceError::Conflict("email or passport number already registered".to_string())
            } else {
                e.into()
            }
        })?;

        info!("Guest {} registered: {}", record.id, record.email);
        Ok(record)
    }

    /// Apply a partial change set to a guest's contact details.
    pub async fn update_guest(
        &self,
        id: i32,
        changes: UpdateGuestRequest,
    ) -> Result<GuestRecord, ServiceError> {
        queries::update_guest(self.db.pool(), id, &changes)
            .await
            .map_err(|e| {
                if e.is_unique_violation() {
                    ServiceError::Conflict("email already registered".to_string())
                } else {
                    ServiceError::from(e)
                }
            })?
            .ok_or_else(|| ServiceError::NotFound(format!("guest {}", id)))
    }

    /// Delete a guest.
    ///
    /// Bookings referencing the guest make the FK refuse; surfaced as a
    /// conflict.
    pub async fn delete_guest(&self, id: i32) -> Result<(), ServiceError> {
        match queries::delete_guest(self.db.pool(), id).await {
            Ok(true) => Ok(()),
            Ok(false) => Err(ServiceError::NotFound(format!("guest {}", id))),
            Err(e) if e.is_foreign_key_violation() => Err(ServiceError::Conflict(format!(
                "bookings still reference guest {}",
                id
            ))),
            Err(e) => Err(e.into()),
        }
    }
}
