use crate::error::{AppError, AppResult};
use crate::models::{Order, OrderLine};
use crate::services::menu_service;
use crate::store::Store;

/// Total written at placement so the fresh row can be found again; the real
/// total replaces it when the order is finalized.
pub const PLACEHOLDER_TOTAL: f64 = 666.666;

/// Single point where a stored total is adjusted by one item's price.
///
/// Totals are updated incrementally, never re-summed from the order's lines,
/// so a diverged total stays diverged until it is rewritten wholesale.
pub fn apply_price_delta(total: f64, delta: f64) -> f64 {
    total + delta
}

/// Opens an order with the placeholder total and re-queries for the assigned
/// id. The insert and the lookup are two independent statements; if two open
/// drafts carry the placeholder at once the lookup can pick either.
pub async fn create_draft(store: &Store, login: &str) -> AppResult<i64> {
    let insert = sqlx::query(
        "INSERT INTO orders (login, paid, received_at, total) VALUES ($1, FALSE, now(), $2)",
    )
    .bind(login)
    .bind(PLACEHOLDER_TOTAL);
    store.execute(insert).await?;

    let lookup =
        sqlx::query("SELECT order_id FROM orders WHERE total = $1").bind(PLACEHOLDER_TOTAL);
    let row: Option<(i64,)> = store.fetch_optional(lookup).await?;
    let (order_id,) = row.ok_or(AppError::NotFound)?;
    tracing::debug!(order_id, login, "order opened");
    Ok(order_id)
}

/// Attaches one item instance to an order. Placement calls this directly
/// while accumulating; post-placement additions go through `add_line`.
pub async fn attach_line(store: &Store, order_id: i64, item_name: &str) -> AppResult<()> {
    let insert = sqlx::query(
        "INSERT INTO order_lines (order_id, item_name, last_updated, status) \
         VALUES ($1, $2, now(), 'Started')",
    )
    .bind(order_id)
    .bind(item_name);
    store.execute(insert).await?;
    Ok(())
}

/// Writes the accumulated total back and returns the finalized order.
pub async fn finalize(store: &Store, order_id: i64, total: f64) -> AppResult<Order> {
    let update = sqlx::query("UPDATE orders SET total = $1 WHERE order_id = $2")
        .bind(total)
        .bind(order_id);
    store.execute(update).await?;
    tracing::info!(order_id, total, "order placed");
    order_by_id(store, order_id).await
}

pub async fn order_by_id(store: &Store, order_id: i64) -> AppResult<Order> {
    let query = sqlx::query("SELECT * FROM orders WHERE order_id = $1").bind(order_id);
    store.fetch_optional(query).await?.ok_or(AppError::NotFound)
}

pub async fn orders_for(store: &Store, login: &str) -> AppResult<Vec<Order>> {
    let query = sqlx::query("SELECT * FROM orders WHERE login = $1 ORDER BY received_at DESC")
        .bind(login);
    store.fetch_all(query).await
}

pub async fn lines_for(store: &Store, order_id: i64) -> AppResult<Vec<OrderLine>> {
    let query = sqlx::query("SELECT * FROM order_lines WHERE order_id = $1 ORDER BY last_updated")
        .bind(order_id);
    store.fetch_all(query).await
}

/// Marks an order paid and refreshes its lines' timestamps. Paid orders are
/// immutable; settling one twice is rejected.
pub async fn settle(store: &Store, order_id: i64) -> AppResult<Order> {
    let order = order_by_id(store, order_id).await?;
    if order.paid {
        return Err(AppError::OrderSettled);
    }
    store
        .execute(sqlx::query("UPDATE orders SET paid = TRUE WHERE order_id = $1").bind(order_id))
        .await?;
    store
        .execute(
            sqlx::query("UPDATE order_lines SET last_updated = now() WHERE order_id = $1")
                .bind(order_id),
        )
        .await?;
    tracing::info!(order_id, "order settled");
    order_by_id(store, order_id).await
}

/// Adds one item to an unpaid order and bumps the stored total by its
/// catalog price. Returns the new total.
pub async fn add_line(store: &Store, order_id: i64, item_name: &str) -> AppResult<f64> {
    let order = order_by_id(store, order_id).await?;
    if order.paid {
        return Err(AppError::OrderSettled);
    }
    let price = menu_service::price_of(store, item_name).await?;
    attach_line(store, order_id, item_name).await?;
    let total = apply_price_delta(order.total, price);
    store
        .execute(
            sqlx::query("UPDATE orders SET total = $1 WHERE order_id = $2")
                .bind(total)
                .bind(order_id),
        )
        .await?;
    Ok(total)
}

/// Removes the matching line(s) from an unpaid order and subtracts one
/// catalog price from the stored total. Returns the new total.
pub async fn remove_line(store: &Store, order_id: i64, item_name: &str) -> AppResult<f64> {
    let order = order_by_id(store, order_id).await?;
    if order.paid {
        return Err(AppError::OrderSettled);
    }
    let deleted = store
        .execute(
            sqlx::query("DELETE FROM order_lines WHERE order_id = $1 AND item_name = $2")
                .bind(order_id)
                .bind(item_name),
        )
        .await?;
    if deleted == 0 {
        return Err(AppError::LineNotFound);
    }
    let price = menu_service::price_of(store, item_name).await?;
    let total = apply_price_delta(order.total, -price);
    store
        .execute(
            sqlx::query("UPDATE orders SET total = $1 WHERE order_id = $2")
                .bind(total)
                .bind(order_id),
        )
        .await?;
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::apply_price_delta;

    #[test]
    fn add_then_remove_restores_total() {
        let total = apply_price_delta(2.50, 1.75);
        let total = apply_price_delta(total, -1.75);
        assert!((total - 2.50).abs() < 1e-9);
    }
}
