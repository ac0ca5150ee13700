//! Postgres pool setup for the `hazard_reports` table.

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

/// Connect to Postgres and bring the `hazard_reports` schema up to date.
///
/// # Errors
///
/// Returns an error if the connection or a migration fails.
pub async fn init_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    sqlx::migrate!("src/db/migrations").run(&pool).await?;
    tracing::info!(max_connections, "hazard_reports migrations applied");

    Ok(pool)
}
