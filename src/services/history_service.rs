use crate::error::AppResult;
use crate::models::Order;
use crate::store::Store;

/// Unsettled orders received within the last day, across all customers.
pub async fn unsettled_recent(store: &Store) -> AppResult<Vec<Order>> {
    let query = sqlx::query(
        "SELECT * FROM orders \
         WHERE paid = FALSE AND received_at >= now() - INTERVAL '1 day' \
         ORDER BY received_at DESC",
    );
    store.fetch_all(query).await
}

/// The caller's five most recent orders, paid or not.
pub async fn recent_for(store: &Store, login: &str) -> AppResult<Vec<Order>> {
    let query =
        sqlx::query("SELECT * FROM orders WHERE login = $1 ORDER BY received_at DESC LIMIT 5")
            .bind(login);
    store.fetch_all(query).await
}
