//! Database connection pooling and migrations.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};
use diesel::sqlite::SqliteConnection;
use diesel::{sql_query, Connection, RunQueryDsl};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

use rocketranks_core::{DatabaseError, Result};

use crate::errors::IntoCore;

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Ensures the database file exists and is migrated, then builds the
/// connection pool. The usual single entry point for consumers.
pub fn init(db_path: &str) -> Result<Arc<DbPool>> {
    if !Path::new(db_path).exists() {
        create_db_file(db_path)?;
    }
    run_migrations(db_path)?;
    create_pool(db_path)
}

pub fn create_pool(db_path: &str) -> Result<Arc<DbPool>> {
    let manager = ConnectionManager::<SqliteConnection>::new(db_path);
    let pool = Pool::builder()
        .build(manager)
        .map_err(|e| DatabaseError::PoolCreationFailed(e.to_string()))?;
    Ok(Arc::new(pool))
}

/// Checks out a connection with a busy timeout set, so concurrent
/// resolutions writing the same database wait instead of failing with
/// SQLITE_BUSY.
pub fn get_connection(pool: &DbPool) -> Result<DbConnection> {
    let mut conn = pool.get().into_core()?;
    sql_query("PRAGMA busy_timeout = 5000")
        .execute(&mut conn)
        .into_core()?;
    Ok(conn)
}

pub fn run_migrations(db_path: &str) -> Result<()> {
    let mut conn = SqliteConnection::establish(db_path)
        .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))?;
    Ok(())
}

fn create_db_file(db_path: &str) -> Result<()> {
    let db_dir = Path::new(db_path).parent().ok_or_else(|| {
        DatabaseError::ConnectionFailed(format!("Invalid database path: {}", db_path))
    })?;

    if !db_dir.exists() {
        fs::create_dir_all(db_dir)
            .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;
    }
    fs::File::create(db_path).map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;
    Ok(())
}
