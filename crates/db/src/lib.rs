//! SQLite storage for the lore wiki.
//!
//! Owns the connection pool, the embedded schema migration, the row models
//! and the repositories that read and insert them.

use std::str::FromStr;

use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub mod models;
pub mod repositories;
pub mod schema;

pub type DbPool = sqlx::SqlitePool;

/// Embedded schema migrations.
///
/// Exported so integration tests can hand it to `#[sqlx::test(migrator = ...)]`.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Create a connection pool from a database URL, creating the database file
/// if it does not exist yet.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Ensure the wiki tables exist. Safe to call on every startup.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    tracing::debug!(migrations = MIGRATOR.iter().count(), "Applying schema migrations");
    MIGRATOR.run(pool).await
}
