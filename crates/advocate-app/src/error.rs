use thiserror::Error;

/// Application-level errors (HTTP layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    ServiceError(#[from] advocate_service::error::ServiceError),

    #[error(transparent)]
    DatabaseError(#[from] advocate_db::error::DbError),

    #[error(transparent)]
    CoreError(#[from] advocate_core::error::CoreError),
}

pub type AppResult<T> = std::result::Result<T, AppError>;
