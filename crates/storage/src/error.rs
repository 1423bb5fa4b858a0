//! Typed error enum for the storage layer.
//!
//! Callers match on `NotFound` / `AlreadyExists` to tell business outcomes
//! apart from database failures.

use thiserror::Error;

/// Storage-layer error with variants covering every expected failure mode.
#[derive(Debug, Error)]
pub enum StorageError {
    /// No contact with this (normalized) name.
    #[error("not found: contact '{name}'")]
    NotFound { name: String },

    /// A contact with this name is already stored. `name` is the stored value.
    #[error("duplicate: contact '{name}' already exists")]
    AlreadyExists { name: String },

    /// PostgreSQL query / connection / pool timeout failure.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// SQLite statement failure.
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// SQLite connection pool could not hand out a connection.
    #[error("connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    /// A blocking SQLite task panicked or was cancelled.
    #[error("blocking task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    /// Schema initialization failure.
    #[error("migration error: {0}")]
    Migration(String),
}

impl StorageError {
    /// Whether this error is likely transient (worth retrying by the caller).
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::Database(sqlx::Error::PoolTimedOut | sqlx::Error::Io(_)) | Self::Pool(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_timeout_is_transient() {
        assert!(StorageError::Database(sqlx::Error::PoolTimedOut).is_transient());
        assert!(!StorageError::Database(sqlx::Error::RowNotFound).is_transient());
        assert!(!StorageError::NotFound { name: "john".to_owned() }.is_transient());
    }
}
