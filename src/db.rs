use sqlx::postgres::{PgPool, PgPoolOptions};

pub type DbPool = PgPool;

/// Opens the store connection for the session's lifetime.
///
/// The pool is capped at a single connection: one interactive session drives
/// each statement to completion before the next, and sequence lookups via
/// `currval` only make sense on the connection that ran the insert.
pub async fn create_pool(database_url: &str) -> anyhow::Result<DbPool> {
    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(database_url)
        .await?;
    Ok(pool)
}
