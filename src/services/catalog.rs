//! # Catalog Store
//!
//! Owns room types and rooms: static attributes, capacity, and the
//! advisory status flag. No availability logic lives here — whether a
//! room can be booked for a date range is the reservation engine's
//! question, answered from bookings.

use tracing::info;

use super::ServiceError;
use crate::db::models::{RoomRecord, RoomStatus, RoomTypeRecord};
use crate::db::{queries, Database};
use crate::models::requests::{
    CreateRoomRequest, CreateRoomTypeRequest, UpdateRoomTypeRequest,
};

/// Room type and room storage.
#[derive(Clone)]
pub struct CatalogService {
    db: Database,
}

impl CatalogService {
    /// Create a new CatalogService instance.
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    // ==========================================
    // ROOM TYPES
    // ==========================================

    /// List room types.
    pub async fn list_room_types(
        &self,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<RoomTypeRecord>, ServiceError> {
        Ok(queries::list_room_types(self.db.pool(), limit, offset).await?)
    }

    /// Get a room type by id.
    pub async fn get_room_type(&self, id: i32) -> Result<RoomTypeRecord, ServiceError> {
        queries::get_room_type(self.db.pool(), id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("room type {}", id)))
    }

    /// Create a room type.
    ///
    /// ## Returns
    ///
    /// * `Err(ServiceError::InvalidInput)` - non-positive capacity or
    ///   negative base price
    /// * `Err(ServiceError::Conflict)` - name already taken
    pub async fn create_room_type(
        &self,
        req: CreateRoomTypeRequest,
    ) -> Result<RoomTypeRecord, ServiceError> {
        if req.capacity <= 0 {
            return Err(ServiceError::InvalidInput(
                "capacity must be positive".to_string(),
            ));
        }
        if req.base_price < 0 {
            return Err(ServiceError::InvalidInput(
                "base_price must not be negative".to_string(),
            ));
        }

        let record = queries::create_room_type(self.db.pool(), &req)
            .await
            .map_err(|e| {
                if e.is_unique_violation() {
                    ServiceError::Conflict(format!("room type '{}' already exists", req.name))
                } else {
                    e.into()
                }
            })?;

        info!("Room type {} created: {}", record.id, record.name);
        Ok(record)
    }

    /// Apply a partial change set to a room type.
    pub async fn update_room_type(
        &self,
        id: i32,
        changes: UpdateRoomTypeRequest,
    ) -> Result<RoomTypeRecord, ServiceError> {
        if matches!(changes.capacity, Some(c) if c <= 0) {
            return Err(ServiceError::InvalidInput(
                "capacity must be positive".to_string(),
            ));
        }
        if matches!(changes.base_price, Some(p) if p < 0) {
            return Err(ServiceError::InvalidInput(
                "base_price must not be negative".to_string(),
            ));
        }

        queries::update_room_type(self.db.pool(), id, &changes)
            .await
            .map_err(|e| {
                if e.is_unique_violation() {
                    ServiceError::Conflict("room type name already exists".to_string())
                } else {
                    ServiceError::from(e)
                }
            })?
            .ok_or_else(|| ServiceError::NotFound(format!("room type {}", id)))
    }

    /// Delete a room type.
    ///
    /// Rooms referencing the type make the FK refuse; surfaced as a
    /// conflict.
    pub async fn delete_room_type(&self, id: i32) -> Result<(), ServiceError> {
        match queries::delete_room_type(self.db.pool(), id).await {
            Ok(true) => Ok(()),
            Ok(false) => Err(ServiceError::NotFound(format!("room type {}", id))),
            Err(e) if e.is_foreign_key_violation() => Err(ServiceError::Conflict(format!(
                "rooms still reference room type {}",
                id
            ))),
            Err(e) => Err(e.into()),
        }
    }

    // ==========================================
    // ROOMS
    // ==========================================

    /// List rooms, optionally filtered by advisory status.
    pub async fn list_rooms(
        &self,
        status: Option<RoomStatus>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<RoomRecord>, ServiceError> {
        Ok(queries::list_rooms(self.db.pool(), status, limit, offset).await?)
    }

    /// Get a room by id.
    pub async fn get_room(&self, id: i32) -> Result<RoomRecord, ServiceError> {
        queries::get_room(self.db.pool(), id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("room {}", id)))
    }

    /// Create a room.
    ///
    /// ## Returns
    ///
    /// * `Err(ServiceError::InvalidInput)` - non-positive floor
    /// * `Err(ServiceError::NotFound)` - unknown room type
    /// * `Err(ServiceError::Conflict)` - room number already taken
    pub async fn create_room(&self, req: CreateRoomRequest) -> Result<RoomRecord, ServiceError> {
        if req.floor <= 0 {
            return Err(ServiceError::InvalidInput(
                "floor must be positive".to_string(),
            ));
        }

        queries::get_room_type(self.db.pool(), req.room_type_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("room type {}", req.room_type_id)))?;

        let record = queries::create_room(self.db.pool(), &req).await.map_err(|e| {
            if e.is_unique_violation() {
                ServiceError::Conflict(format!("room number '{}' already exists", req.room_number))
            } else if e.is_foreign_key_violation() {
                ServiceError::NotFound(format!("room type {}", req.room_type_id))
            } else {
                e.into()
            }
        })?;

        info!("Room {} created: number {}", record.id, record.room_number);
        Ok(record)
    }

    /// Set a room's advisory status.
    ///
    /// Purely operational: marking a room `maintenance` takes it out of
    /// future availability scans but does not touch existing bookings.
    pub async fn update_room_status(
        &self,
        id: i32,
        status: RoomStatus,
    ) -> Result<RoomRecord, ServiceError> {
        let record = queries::update_room_status(self.db.pool(), id, status)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("room {}", id)))?;

        info!("Room {} status set to {}", id, status);
        Ok(record)
    }

    /// Delete a room.
    ///
    /// Bookings referencing the room make the FK refuse; surfaced as a
    /// conflict.
    pub async fn delete_room(&self, id: i32) -> Result<(), ServiceError> {
        match queries::delete_room(self.db.pool(), id).await {
            Ok(true) => Ok(()),
            Ok(false) => Err(ServiceError::NotFound(format!("room {}", id))),
            Err(e) if e.is_foreign_key_violation() => Err(ServiceError::Conflict(format!(
                "bookings still reference room {}",
                id
            ))),
            Err(e) => Err(e.into()),
        }
    }
}
