//! # Hotel Booking Backend
//!
//! Backend service managing hotel inventory and reservations: room
//! types, rooms, guests, bookings and payments over PostgreSQL.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                        BACKEND SERVICE                         │
//! │                                                                │
//! │  ┌──────────────────────────────────────────────────────────┐  │
//! │  │                   REST API (Actix)                       │  │
//! │  │  /room-types  /rooms  /guests  /bookings  /payments      │  │
//! │  └──────────────────────────┬───────────────────────────────┘  │
//! │                             │                                  │
//! │  ┌──────────────────────────┴───────────────────────────────┐  │
//! │  │                      SERVICE LAYER                       │  │
//! │  │  ┌─────────┐ ┌─────────┐ ┌─────────────────┐ ┌────────┐  │  │
//! │  │  │ Catalog │ │ Guests  │ │ ReservationEngine│ │Payments│  │  │
//! │  │  └─────────┘ └─────────┘ └────────┬────────┘ └────────┘  │  │
//! │  │                          ┌────────┴────────┐             │  │
//! │  │                          │ ConsistencyGuard│             │  │
//! │  │                          └────────┬────────┘             │  │
//! │  └───────────────────────────────────┼──────────────────────┘  │
//! │                                      │                         │
//! │                             ┌────────┴────────┐                │
//! │                             │   PostgreSQL    │                │
//! │                             └─────────────────┘                │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The interesting part is the reservation path: the availability query
//! is advisory and lock-free, while every booking write for a room runs
//! through the [`services::ConsistencyGuard`], which serializes
//! check-then-write units per room so no two confirmed or checked-in
//! bookings can ever overlap on one room.

pub mod api;
pub mod config;
pub mod db;
pub mod models;
pub mod services;
pub mod utils;

use config::AppConfig;
use db::Database;
use services::{CatalogService, GuestDirectory, PaymentLedger, ReservationEngine};

/// Application state shared across all handlers.
///
/// Every service holds a clone of the connection pool, so this struct
/// is cheap to share behind an `Arc`.
pub struct AppState {
    /// Database connection pool for PostgreSQL
    pub db: Database,

    /// Room type and room catalog
    pub catalog: CatalogService,

    /// Guest directory
    pub guests: GuestDirectory,

    /// Availability and booking lifecycle
    pub reservations: ReservationEngine,

    /// Payment ledger
    pub payments: PaymentLedger,

    /// Application configuration
    pub config: AppConfig,
}

impl AppState {
    /// Wire up all services over one database handle.
    pub fn new(db: Database, config: AppConfig) -> Self {
        Self {
            catalog: CatalogService::new(db.clone()),
            guests: GuestDirectory::new(db.clone()),
            reservations: ReservationEngine::new(db.clone()),
            payments: PaymentLedger::new(db.clone()),
            db,
            config,
        }
    }
}
