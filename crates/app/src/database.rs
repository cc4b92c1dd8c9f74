//! Database connection management

use sqlx::{PgPool, migrate::Migrator, postgres::PgPoolOptions};

/// Embedded schema migrations for the listings store.
pub static MIGRATOR: Migrator = sqlx::migrate!();

/// Pool size used when the caller does not configure one.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Connect to `PostgreSQL` with the default pool size.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str) -> Result<PgPool, sqlx::Error> {
    connect_with(database_url, DEFAULT_MAX_CONNECTIONS).await
}

/// Connect to `PostgreSQL` with an explicit pool size.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect_with(
    database_url: &str,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}
