use thiserror::Error;

/// Errors reported by an [`EmployeeStore`](crate::EmployeeStore).
///
/// Backend errors are wrapped as-is so callers see the driver's own message.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Postgres(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("Unsupported database URL: {0}")]
    UnsupportedUrl(String),

    #[error("Store unavailable")]
    Unavailable,
}
