// ABOUTME: Record access layer for person records stored in PostgreSQL
// ABOUTME: Exposes the PersonStore seam, its Postgres implementation and pool configuration

use thiserror::Error;

pub mod config;
pub mod persons;
pub mod types;

pub use config::DatabaseConfig;
pub use persons::{PersonStore, PgPersonStorage};
pub use types::{Person, PersonInput};

/// Underlying driver error carried by [`StorageError::Database`]
pub use sqlx::Error as DriverError;

/// Errors surfaced by the record access layer
#[derive(Debug, Error)]
pub enum StorageError {
    /// A single-row fetch matched nothing
    #[error("no person with id {0}")]
    NotFound(i64),
    #[error("Database error: {0}")]
    Database(#[from] DriverError),
}

impl StorageError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StorageError::NotFound(_))
    }
}

pub type StorageResult<T> = Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_the_id() {
        let err = StorageError::NotFound(42);
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "no person with id 42");
    }

    #[test]
    fn test_database_error_carries_driver_message() {
        let err = StorageError::from(DriverError::PoolTimedOut);
        assert!(!err.is_not_found());
        assert!(err.to_string().starts_with("Database error: "));
        assert!(err.to_string().contains(&DriverError::PoolTimedOut.to_string()));
    }
}
