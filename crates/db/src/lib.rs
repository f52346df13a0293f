//! Database access layer for the portfolio dashboard.
//!
//! Owns the connection pool, the sqlx migrations, the entity models and
//! request DTOs, the repository structs, and the seed/migrate routines.
//! The pool is created once at startup and injected into handlers through
//! the API crate's shared state; nothing in here holds hidden global state.

use sqlx::postgres::PgPoolOptions;

pub mod migrate;
pub mod models;
pub mod repositories;
pub mod seed;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Verify the database is reachable with a trivial round trip.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded schema migrations.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await
}
