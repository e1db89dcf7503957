use crate::console::Console;
use crate::error::AppResult;
use crate::flows::render_menu;
use crate::services::menu_service;
use crate::store::Store;

pub async fn browse_menu<C: Console>(store: &Store, console: &mut C) -> AppResult<()> {
    let items = menu_service::list_all(store).await?;
    render_menu(console, &items);
    Ok(())
}

pub async fn search_menu<C: Console>(store: &Store, console: &mut C) -> AppResult<()> {
    let text = console.read_line("Enter an item category or name: ")?;
    let items = menu_service::find_by_name_or_category(store, &text).await?;
    if items.is_empty() {
        console.write_line("No matching menu items found.");
    } else {
        render_menu(console, &items);
    }
    Ok(())
}
