use crate::error::{AppError, AppResult};
use crate::models::{Account, Role};
use crate::store::Store;

/// Creates a new customer account with empty favorites.
pub async fn register(
    store: &Store,
    login: &str,
    password: &str,
    phone: &str,
) -> AppResult<Account> {
    let insert = sqlx::query(
        "INSERT INTO users (login, password, phone, fav_items, role) \
         VALUES ($1, $2, $3, '', 'Customer') RETURNING *",
    )
    .bind(login)
    .bind(password)
    .bind(phone);

    let created: AppResult<Account> = store.fetch_one(insert).await;
    match created {
        Ok(account) => {
            tracing::info!(login, "account registered");
            Ok(account)
        }
        Err(AppError::Storage(sqlx::Error::Database(db))) if db.is_unique_violation() => {
            Err(AppError::DuplicateLogin)
        }
        Err(err) => Err(err),
    }
}

/// Credentials are compared exactly as stored; there is no hashing, lockout,
/// or retry limiting.
pub async fn login(store: &Store, login: &str, password: &str) -> AppResult<Account> {
    let query = sqlx::query("SELECT * FROM users WHERE login = $1 AND password = $2")
        .bind(login)
        .bind(password);

    store
        .fetch_optional(query)
        .await?
        .ok_or(AppError::Unauthenticated)
}

/// Looks the account's role up fresh; every role-gated workflow branches on
/// the value stored at the time it runs, not the one seen at login.
pub async fn resolve_role(store: &Store, login: &str) -> AppResult<Role> {
    let query = sqlx::query("SELECT role FROM users WHERE login = $1").bind(login);
    let row: Option<(String,)> = store.fetch_optional(query).await?;
    let (role,) = row.ok_or(AppError::NotFound)?;
    Role::parse(&role).ok_or_else(|| {
        AppError::Storage(sqlx::Error::Decode(
            format!("unexpected role value {role:?}").into(),
        ))
    })
}
