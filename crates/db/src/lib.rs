//! Form-submission storage for the lead-capture boundary.
//!
//! The write path is deliberately small: one insert per form submission,
//! plus an idempotent newsletter upsert and the CRM lead operations. The
//! [`store::FormStore`] trait is the storage collaborator contract -- any
//! backend offering filtered reads and inserts satisfies it. Two
//! implementations ship here: Postgres ([`repositories::PgFormStore`]) and
//! in-memory ([`store::MemoryFormStore`], for tests and database-less runs).

pub mod models;
pub mod repositories;
pub mod store;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

pub type DbPool = PgPool;

/// Create a connection pool against the given database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await
}

/// Cheap connectivity probe used by the health endpoint.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply pending migrations from `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
