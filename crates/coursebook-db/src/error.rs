use anyhow::anyhow;
use coursebook_core::AppError;
use thiserror::Error;

pub const CONFLICTING_RECORD: &str = "The request conflicts with an existing record";
pub const MISSING_REFERENCE: &str = "The request references a record that does not exist";

#[derive(Debug, Error)]
pub enum StoreError {
    /// A unique constraint rejected the write. Carries the constraint name.
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),

    /// A foreign key rejected the write. Carries the constraint name.
    #[error("foreign key constraint violated: {0}")]
    ForeignKeyViolation(String),

    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            let constraint = db_err.constraint().unwrap_or_default().to_string();
            if db_err.is_unique_violation() {
                return StoreError::UniqueViolation(constraint);
            }
            if db_err.is_foreign_key_violation() {
                return StoreError::ForeignKeyViolation(constraint);
            }
        }
        StoreError::Database(err)
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::UniqueViolation(constraint) => {
                tracing::warn!(%constraint, "Unique constraint rejected write");
                AppError::bad_request(anyhow!(CONFLICTING_RECORD))
            }
            StoreError::ForeignKeyViolation(constraint) => {
                tracing::warn!(%constraint, "Foreign key rejected write");
                AppError::bad_request(anyhow!(MISSING_REFERENCE))
            }
            StoreError::Database(_) => AppError::internal(err),
        }
    }
}
