use crate::error::{AppError, AppResult};
use crate::models::MenuItem;
use crate::store::Store;

pub async fn list_all(store: &Store) -> AppResult<Vec<MenuItem>> {
    store
        .fetch_all(sqlx::query("SELECT * FROM menu ORDER BY item_name"))
        .await
}

/// Matches items whose category or exact name equals `text`. An empty result
/// is a valid answer, not an error.
pub async fn find_by_name_or_category(store: &Store, text: &str) -> AppResult<Vec<MenuItem>> {
    let query =
        sqlx::query("SELECT * FROM menu WHERE category = $1 OR item_name = $1 ORDER BY item_name")
            .bind(text);
    store.fetch_all(query).await
}

pub async fn exists(store: &Store, item_name: &str) -> AppResult<bool> {
    let query = sqlx::query("SELECT count(*) FROM menu WHERE item_name = $1").bind(item_name);
    Ok(store.count(query).await? > 0)
}

pub async fn price_of(store: &Store, item_name: &str) -> AppResult<f64> {
    let query = sqlx::query("SELECT price FROM menu WHERE item_name = $1").bind(item_name);
    let row: Option<(f64,)> = store.fetch_optional(query).await?;
    let (price,) = row.ok_or(AppError::NotFound)?;
    Ok(price)
}
