//! Error types for shoplist-core
//!
//! Storage errors are passed through untouched. The only errors this crate
//! originates are input validation failures, raised before any statement
//! is sent.

use thiserror::Error;

use crate::models::ValidationError;

/// Database layer error
#[derive(Debug, Error)]
pub enum DbError {
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),

    #[error(transparent)]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error("configuration error: {reason}")]
    Config { reason: String },
}

/// Result type alias for shoplist-core operations
pub type Result<T> = std::result::Result<T, DbError>;

impl DbError {
    /// Create a configuration error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    /// True when the error came from input validation rather than storage.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
