use thiserror::Error;

/// Errors raised while preparing a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Failed to connect to the in-memory database or to create tables.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
}
