use crate::console::Console;
use crate::error::AppResult;
use crate::flows::render_orders;
use crate::services::{auth_service, history_service};
use crate::store::Store;

/// Role-differentiated order listing: staff see every unsettled order from
/// the last day, customers their own five most recent.
pub async fn order_history<C: Console>(
    store: &Store,
    console: &mut C,
    login: &str,
) -> AppResult<()> {
    let role = auth_service::resolve_role(store, login).await?;
    let orders = if role.is_staff() {
        history_service::unsettled_recent(store).await?
    } else {
        history_service::recent_for(store, login).await?
    };

    if orders.is_empty() {
        console.write_line("No orders found.");
    } else {
        render_orders(console, &orders);
    }
    Ok(())
}
