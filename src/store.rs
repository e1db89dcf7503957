use sqlx::postgres::PgRow;
use sqlx::{Execute, Executor, FromRow, Postgres, Row};

use crate::db::DbPool;
use crate::error::AppResult;

/// Gateway every component issues its reads and writes through.
///
/// Callers build parameter-bound statements; each call is an independent
/// unit of work against the store, with no enclosing transaction.
pub struct Store {
    pool: DbPool,
}

impl Store {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Runs a data-modifying statement and reports how many rows it touched.
    pub async fn execute<'q, E>(&self, query: E) -> AppResult<u64>
    where
        E: Execute<'q, Postgres> + 'q,
    {
        Ok((&self.pool).execute(query).await?.rows_affected())
    }

    pub async fn fetch_all<'q, T, E>(&self, query: E) -> AppResult<Vec<T>>
    where
        E: Execute<'q, Postgres> + 'q,
        T: for<'r> FromRow<'r, PgRow>,
    {
        let rows = (&self.pool).fetch_all(query).await?;
        let mut items = Vec::with_capacity(rows.len());
        for row in &rows {
            items.push(T::from_row(row)?);
        }
        Ok(items)
    }

    pub async fn fetch_optional<'q, T, E>(&self, query: E) -> AppResult<Option<T>>
    where
        E: Execute<'q, Postgres> + 'q,
        T: for<'r> FromRow<'r, PgRow>,
    {
        match (&self.pool).fetch_optional(query).await? {
            Some(row) => Ok(Some(T::from_row(&row)?)),
            None => Ok(None),
        }
    }

    pub async fn fetch_one<'q, T, E>(&self, query: E) -> AppResult<T>
    where
        E: Execute<'q, Postgres> + 'q,
        T: for<'r> FromRow<'r, PgRow>,
    {
        let row = (&self.pool).fetch_one(query).await?;
        Ok(T::from_row(&row)?)
    }

    /// Scalar count for a `SELECT count(*)`-style query.
    pub async fn count<'q, E>(&self, query: E) -> AppResult<i64>
    where
        E: Execute<'q, Postgres> + 'q,
    {
        let row = (&self.pool).fetch_one(query).await?;
        Ok(row.try_get::<i64, _>(0)?)
    }

    /// Current value of a store-managed sequence.
    ///
    /// Only defined once an insert has advanced the sequence on this
    /// session's connection; the pool is capped at one connection so every
    /// statement shares it.
    pub async fn current_sequence_value(&self, sequence: &str) -> AppResult<i64> {
        let value = sqlx::query_scalar("SELECT currval($1::regclass)")
            .bind(sequence)
            .fetch_one(&self.pool)
            .await?;
        Ok(value)
    }
}
