//! Connection-pool setup for PostgreSQL.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;

use crate::config::Config;

/// Build a lazily connecting pool from the configured database fields.
///
/// No connection is attempted until the first query, so the HTTP server can
/// come up while PostgreSQL is still starting.
pub fn connect_lazy(config: &Config) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .connect_lazy(&config.database_url())
}

/// Round-trip a trivial query to verify connectivity.
pub async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
