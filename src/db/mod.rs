//! # Database Module
//!
//! This module handles all database operations for the hotel booking
//! backend. PostgreSQL stores:
//!
//! - Room types and rooms (the catalog)
//! - Guest identity records
//! - Bookings and their lifecycle status
//! - Payments recorded against bookings
//!
//! The schema is the authority for uniqueness (room numbers, room-type
//! names, guest emails/passports, payment transaction ids) and for the
//! booking status / date-range constraints. Application code validates
//! early for better error messages, but concurrent writers are only kept
//! honest by the constraints in `migrations/001_initial_schema.sql`.

pub mod models;
pub mod queries;

use deadpool_postgres::{Config, Pool, Runtime};
use thiserror::Error;
use tokio_postgres::error::SqlState;
use tokio_postgres::{Config as TokioConfig, NoTls};
use tracing::info;

/// Schema applied at startup; idempotent via IF NOT EXISTS.
const INITIAL_SCHEMA: &str = include_str!("../../migrations/001_initial_schema.sql");

/// Advisory lock key serializing migration runs. Two backends starting
/// against the same database race their CREATE statements otherwise.
const MIGRATION_LOCK: i64 = 0x686F_7465_6C5F_6462; // "hotel_db"

/// Database-related errors.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to connect to the database
    #[error("Database connection failed: {0}")]
    ConnectionError(String),

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryError(#[from] tokio_postgres::Error),

    /// Migration failed
    #[error("Migration failed: {0}")]
    MigrationError(String),

    /// A stored value could not be mapped back into its Rust type
    #[error("Invalid column value: {0}")]
    InvalidColumn(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

impl DatabaseError {
    /// True when the underlying error is a unique-constraint violation
    /// (SQLSTATE 23505). Services surface these as conflicts.
    pub fn is_unique_violation(&self) -> bool {
        matches!(self, DatabaseError::QueryError(e)
            if e.code() == Some(&SqlState::UNIQUE_VIOLATION))
    }

    /// True when the underlying error is a foreign-key violation
    /// (SQLSTATE 23503).
    pub fn is_foreign_key_violation(&self) -> bool {
        matches!(self, DatabaseError::QueryError(e)
            if e.code() == Some(&SqlState::FOREIGN_KEY_VIOLATION))
    }

    /// True when the underlying error is a CHECK-constraint violation
    /// (SQLSTATE 23514).
    pub fn is_check_violation(&self) -> bool {
        matches!(self, DatabaseError::QueryError(e)
            if e.code() == Some(&SqlState::CHECK_VIOLATION))
    }
}

/// Database connection wrapper.
///
/// Wraps the deadpool-postgres connection pool and provides the
/// connection and migration entry points used at startup.
#[derive(Clone)]
pub struct Database {
    /// The connection pool
    pool: Pool,
}

impl Database {
    /// Connect to the PostgreSQL database.
    ///
    /// ## Arguments
    ///
    /// * `database_url` - PostgreSQL connection string
    /// * `max_connections` - Pool size
    ///
    /// ## Returns
    ///
    /// * `Ok(Database)` - Connected successfully (verified with a probe query)
    /// * `Err(DatabaseError)` - Connection failed
    pub async fn connect(database_url: &str, max_connections: usize) -> Result<Self, DatabaseError> {
        info!("Connecting to database...");

        // Parse the connection string using tokio_postgres::Config
        let tokio_config = database_url.parse::<TokioConfig>()
            .map_err(|e| DatabaseError::ConfigError(format!("Invalid database URL: {}", e)))?;

        // Convert to deadpool config
        let mut config = Config::new();

        if let Some(dbname) = tokio_config.get_dbname() {
            config.dbname = Some(dbname.to_string());
        }
        if let Some(user) = tokio_config.get_user() {
            config.user = Some(user.to_string());
        }
        if let Some(password) = tokio_config.get_password() {
            // Password is &[u8], convert to String
            config.password = Some(String::from_utf8_lossy(password).to_string());
        }
        if let Some(host) = tokio_config.get_hosts().first() {
            if let tokio_postgres::config::Host::Tcp(host_str) = host {
                config.host = Some(host_str.clone());
            }
        }
        if let Some(port) = tokio_config.get_ports().first() {
            config.port = Some(*port);
        }

        config.pool = Some(deadpool_postgres::PoolConfig {
            max_size: max_connections,
            ..Default::default()
        });

        let pool = config
            .create_pool(Some(Runtime::Tokio1), NoTls)
            .map_err(|e| DatabaseError::ConnectionError(e.to_string()))?;

        // Test connection
        let client = pool.get().await
            .map_err(|e| DatabaseError::ConnectionError(e.to_string()))?;

        client.query("SELECT 1", &[]).await
            .map_err(|e| DatabaseError::ConnectionError(e.to_string()))?;

        info!("Database connection established");

        Ok(Self { pool })
    }

    /// Run database migrations.
    ///
    /// The schema is embedded in the binary and executed as one batch.
    /// Every statement uses IF NOT EXISTS, so re-running against an
    /// existing database is a no-op.
    pub async fn run_migrations(&self) -> Result<(), DatabaseError> {
        info!("Running database migrations...");

        let client = self.pool.get().await
            .map_err(|e| DatabaseError::ConnectionError(e.to_string()))?;

        client.execute("SELECT pg_advisory_lock($1)", &[&MIGRATION_LOCK]).await
            .map_err(|e| DatabaseError::MigrationError(e.to_string()))?;

        let result = client.batch_execute(INITIAL_SCHEMA).await;

        client.execute("SELECT pg_advisory_unlock($1)", &[&MIGRATION_LOCK]).await
            .map_err(|e| DatabaseError::MigrationError(e.to_string()))?;

        result.map_err(|e| DatabaseError::MigrationError(e.to_string()))?;

        info!("Migrations completed successfully");
        Ok(())
    }

    /// Get a reference to the connection pool.
    ///
    /// Use this when you need direct access to the pool
    /// for custom queries.
    pub fn pool(&self) -> &Pool {
        &self.pool
    }
}

// Re-export commonly used items
pub use models::*;
