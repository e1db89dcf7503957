use crate::console::Console;
use crate::error::{AppError, AppResult};
use crate::flows::{render_lines, render_menu, render_order, render_orders};
use crate::models::Order;
use crate::services::order_service::apply_price_delta;
use crate::services::{auth_service, menu_service, order_service};
use crate::store::Store;

/// Sentinel that ends item accumulation during placement.
const DONE: &str = "q";

/// Places a new order: open a draft, accumulate priced line items until the
/// sentinel, then write the total back and display the finalized order.
///
/// Any store failure aborts the placement; lines inserted before the failure
/// are not rolled back.
pub async fn place_order<C: Console>(
    store: &Store,
    console: &mut C,
    login: &str,
) -> AppResult<Order> {
    let items = menu_service::list_all(store).await?;
    render_menu(console, &items);

    let order_id = order_service::create_draft(store, login).await?;
    console.write_line("What would you like to order? (enter 'q' to complete the order)");

    // The running total lives here, not in the store; only the finalize step
    // persists it.
    let mut total = 0.0;
    loop {
        let item = console.read_line("> ")?;
        if item == DONE {
            break;
        }
        if !menu_service::exists(store, &item).await? {
            console.write_line("No menu item by that name exists. Please try again.");
            continue;
        }
        order_service::attach_line(store, order_id, &item).await?;
        let price = menu_service::price_of(store, &item).await?;
        total = apply_price_delta(total, price);
    }

    let order = order_service::finalize(store, order_id, total).await?;
    console.write_line(&format!("Order placed with orderID {order_id}"));
    render_order(console, &order);
    Ok(order)
}

/// Post-placement mutation: staff settle a customer's order; customers add
/// or remove items on their own unpaid orders.
pub async fn update_order<C: Console>(
    store: &Store,
    console: &mut C,
    login: &str,
) -> AppResult<()> {
    let role = auth_service::resolve_role(store, login).await?;

    if role.is_staff() {
        let target = console.read_line("Enter login of the customer whose order to settle: ")?;
        let orders = order_service::orders_for(store, &target).await?;
        render_orders(console, &orders);
        let order_id = read_order_id(console)?;
        let order = order_service::settle(store, order_id).await?;
        console.write_line("Order marked as paid.");
        render_order(console, &order);
        return Ok(());
    }

    let orders = order_service::orders_for(store, login).await?;
    render_orders(console, &orders);
    let order_id = read_order_id(console)?;
    let order = order_service::order_by_id(store, order_id).await?;
    if order.paid {
        render_order(console, &order);
        console.write_line("Order has been paid; changes can no longer be made.");
        return Err(AppError::OrderSettled);
    }

    let lines = order_service::lines_for(store, order_id).await?;
    render_lines(console, &lines);
    console.write_line("Would you like to remove or add items? (0 to remove, 1 to add)");
    match console.read_choice()? {
        0 => {
            let item = console.read_line("Enter the name of the item to remove: ")?;
            let total = order_service::remove_line(store, order_id, &item).await?;
            console.write_line(&format!(
                "Removed {item} from orderID {order_id}. New order total: ${total:.2}"
            ));
        }
        1 => {
            let item = console.read_line("Enter the name of the item to add: ")?;
            let total = order_service::add_line(store, order_id, &item).await?;
            console.write_line(&format!(
                "Added {item} to orderID {order_id}. New order total: ${total:.2}"
            ));
        }
        _ => console.write_line("Unrecognized choice!"),
    }
    Ok(())
}

fn read_order_id<C: Console>(console: &mut C) -> AppResult<i64> {
    loop {
        let line = console.read_line("Enter the orderID: ")?;
        match line.trim().parse::<i64>() {
            Ok(id) => return Ok(id),
            Err(_) => console.write_line("Your input is invalid!"),
        }
    }
}
