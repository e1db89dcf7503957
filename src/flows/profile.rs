use crate::console::Console;
use crate::error::AppResult;
use crate::flows::render_account;
use crate::models::Role;
use crate::services::profile_service::ProfileField;
use crate::services::{auth_service, profile_service};
use crate::store::Store;

/// Role-gated profile editing.
///
/// A manager first edits any account they name; a missing target aborts the
/// whole flow. Afterwards every caller, managers included, performs the same
/// one-field edit on their own account.
pub async fn update_profile<C: Console>(
    store: &Store,
    console: &mut C,
    login: &str,
) -> AppResult<()> {
    let role = auth_service::resolve_role(store, login).await?;

    if role == Role::Manager {
        let target = console.read_line("Enter login of the account to modify: ")?;
        let account = profile_service::find_account(store, &target).await?;
        render_account(console, &account);
        edit_one_field(store, console, &target).await?;
    }

    edit_one_field(store, console, login).await
}

async fn edit_one_field<C: Console>(store: &Store, console: &mut C, target: &str) -> AppResult<()> {
    console.write_line("Which field would you like to edit?");
    console.write_line("1. Login");
    console.write_line("2. Password");
    console.write_line("3. Phone number");
    console.write_line("4. Role");
    let field = loop {
        match ProfileField::from_choice(console.read_choice()?) {
            Some(field) => break field,
            None => console.write_line("Unrecognized choice!"),
        }
    };

    let value = console.read_line(&format!("Enter new {}: ", field.label()))?;
    let account = profile_service::update_field(store, target, field, &value).await?;
    console.write_line("Updated account:");
    render_account(console, &account);
    Ok(())
}
