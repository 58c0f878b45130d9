//! Error types for the post store

use thiserror::Error;

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during store operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// One or more required fields were missing or blank
    #[error("Missing or empty fields: {}", .fields.join(", "))]
    Validation { fields: Vec<&'static str> },

    /// No post carries the requested id
    #[error("Post with id {id} not found.")]
    NotFound { id: u64 },
}

impl StoreError {
    /// Whether this error was caused by rejected input
    pub fn is_validation(&self) -> bool {
        matches!(self, StoreError::Validation { .. })
    }

    /// Whether this error was caused by an unknown id
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}
