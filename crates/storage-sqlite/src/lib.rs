//! SQLite storage implementation for Rocketranks.
//!
//! This crate is the only place in the workspace where Diesel
//! dependencies exist. All other crates are database-agnostic and work
//! with the traits defined in `rocketranks-core`.
//!
//! ```text
//!       core (domain)
//!            │
//!            ▼
//!   storage-sqlite (this crate)
//!            │
//!            ▼
//!        SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod ranks;
pub mod schema;

// Re-export database utilities
pub use db::{create_pool, get_connection, init, run_migrations, DbConnection, DbPool};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export the repository
pub use ranks::RankSetRepository;

// Re-export from rocketranks-core for convenience
pub use rocketranks_core::{DatabaseError, Error, Result};
