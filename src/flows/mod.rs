//! Interactive workflows: each one drives a complete, role-conditioned
//! sequence of prompts and store operations for a single session. A failed
//! workflow aborts only itself; the caller's menu loop continues.

mod history;
mod menu;
mod order;
mod profile;

pub use history::order_history;
pub use menu::{browse_menu, search_menu};
pub use order::{place_order, update_order};
pub use profile::update_profile;

use crate::console::Console;
use crate::models::{Account, MenuItem, Order, OrderLine};

pub(crate) fn render_menu<C: Console>(console: &mut C, items: &[MenuItem]) {
    console.write_line("item\tcategory\tprice");
    for item in items {
        console.write_line(&format!(
            "{}\t{}\t${:.2}",
            item.item_name, item.category, item.price
        ));
    }
}

pub(crate) fn render_order<C: Console>(console: &mut C, order: &Order) {
    console.write_line("order\tlogin\tpaid\treceived\ttotal");
    console.write_line(&format_order(order));
}

pub(crate) fn render_orders<C: Console>(console: &mut C, orders: &[Order]) {
    console.write_line("order\tlogin\tpaid\treceived\ttotal");
    for order in orders {
        console.write_line(&format_order(order));
    }
}

pub(crate) fn render_lines<C: Console>(console: &mut C, lines: &[OrderLine]) {
    console.write_line("order\titem\tlast updated\tstatus");
    for line in lines {
        console.write_line(&format!(
            "{}\t{}\t{}\t{}",
            line.order_id,
            line.item_name,
            line.last_updated.format("%Y-%m-%d %H:%M:%S"),
            line.status
        ));
    }
}

pub(crate) fn render_account<C: Console>(console: &mut C, account: &Account) {
    console.write_line("login\tpassword\tphone\tfavorites\trole");
    console.write_line(&format!(
        "{}\t{}\t{}\t{}\t{}",
        account.login, account.password, account.phone, account.fav_items, account.role
    ));
}

fn format_order(order: &Order) -> String {
    format!(
        "{}\t{}\t{}\t{}\t${:.2}",
        order.order_id,
        order.login,
        order.paid,
        order.received_at.format("%Y-%m-%d %H:%M:%S"),
        order.total
    )
}
