use crate::error::{AppError, AppResult};
use crate::models::Account;
use crate::store::Store;

/// The one account field a profile edit overwrites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Login,
    Password,
    Phone,
    Role,
}

impl ProfileField {
    pub fn from_choice(choice: i32) -> Option<Self> {
        match choice {
            1 => Some(Self::Login),
            2 => Some(Self::Password),
            3 => Some(Self::Phone),
            4 => Some(Self::Role),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Password => "password",
            Self::Phone => "phone number",
            Self::Role => "role",
        }
    }

    fn column(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Password => "password",
            Self::Phone => "phone",
            Self::Role => "role",
        }
    }
}

pub async fn find_account(store: &Store, login: &str) -> AppResult<Account> {
    let query = sqlx::query("SELECT * FROM users WHERE login = $1").bind(login);
    store.fetch_optional(query).await?.ok_or(AppError::NotFound)
}

/// Overwrites one field of the target account, unconditioned on its current
/// contents: if two actors edit the same account, the last write wins.
/// Returns the refetched row, keyed by the new login when the login itself
/// changed.
pub async fn update_field(
    store: &Store,
    target: &str,
    field: ProfileField,
    value: &str,
) -> AppResult<Account> {
    // The column name comes from the enum, never from user input.
    let statement = format!("UPDATE users SET {} = $1 WHERE login = $2", field.column());
    let updated = store
        .execute(sqlx::query(&statement).bind(value).bind(target))
        .await?;
    if updated == 0 {
        return Err(AppError::NotFound);
    }
    tracing::info!(login = target, field = field.label(), "profile field updated");

    let login = if field == ProfileField::Login { value } else { target };
    find_account(store, login).await
}

#[cfg(test)]
mod tests {
    use super::ProfileField;

    #[test]
    fn field_choices_match_the_menu() {
        assert_eq!(ProfileField::from_choice(1), Some(ProfileField::Login));
        assert_eq!(ProfileField::from_choice(2), Some(ProfileField::Password));
        assert_eq!(ProfileField::from_choice(3), Some(ProfileField::Phone));
        assert_eq!(ProfileField::from_choice(4), Some(ProfileField::Role));
        assert_eq!(ProfileField::from_choice(0), None);
        assert_eq!(ProfileField::from_choice(5), None);
    }
}
