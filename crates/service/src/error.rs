//! Typed error enum for the service layer.
//!
//! Separates rejected input (shown to the user) from storage failures
//! (logged and reported as an internal error).

use contact_list_core::ValidationError;
use contact_list_storage::StorageError;
use thiserror::Error;

/// Service-layer error.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Form input failed validation; the store was not touched.
    #[error(transparent)]
    InvalidInput(#[from] ValidationError),

    /// Storage operation failed (connectivity, SQL, pool).
    #[error("storage: {0}")]
    Storage(#[from] StorageError),
}

impl ServiceError {
    /// The validation failure, if this error is one.
    pub fn validation(&self) -> Option<ValidationError> {
        match self {
            Self::InvalidInput(e) => Some(*e),
            Self::Storage(_) => None,
        }
    }

    /// Whether this error is likely transient (worth retrying).
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Storage(e) => e.is_transient(),
            Self::InvalidInput(_) => false,
        }
    }
}
