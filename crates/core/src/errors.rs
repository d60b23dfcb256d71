//! Core error types.
//!
//! This module defines database-agnostic error types. Storage-specific
//! errors (from Diesel, SQLite, etc.) are converted to these types by the
//! storage layer, so nothing above that layer ever names a database
//! library.

use thiserror::Error;

use crate::ranks::RankError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the rank resolution domain.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("Rank operation failed: {0}")]
    Rank(#[from] RankError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl Error {
    /// True when resolution failed because every provider was
    /// unavailable. The caller-facing "could not fetch ranks" case.
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Error::Rank(RankError::Exhausted { .. }))
    }
}

/// Database-agnostic error type for storage operations.
///
/// All details are carried as `String` so the storage layer can fold its
/// own error types into this format without leaking them.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to establish a database connection.
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Failed to create or configure the connection pool.
    #[error("Failed to create database pool: {0}")]
    PoolCreationFailed(String),

    /// A database query failed to execute.
    #[error("Database query failed: {0}")]
    QueryFailed(String),

    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// Database migration failed.
    #[error("Database migration failed: {0}")]
    MigrationFailed(String),

    /// Internal/unexpected database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
