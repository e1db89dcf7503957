use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid login or password")]
    Unauthenticated,

    #[error("that login is already taken")]
    DuplicateLogin,

    #[error("not found")]
    NotFound,

    #[error("order has been paid and can no longer be changed")]
    OrderSettled,

    #[error("no such item on this order")]
    LineNotFound,

    #[error("storage error")]
    Storage(#[from] sqlx::Error),

    #[error("console error")]
    Console(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
