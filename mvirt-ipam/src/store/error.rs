//! Store error types.

use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A prefix with the same cidr and namespace is already stored.
    #[error("prefix already exists: {cidr}@{namespace}")]
    AlreadyExists { cidr: String, namespace: String },

    /// No prefix is stored under the given cidr and namespace.
    #[error("prefix not found: {cidr}@{namespace}")]
    NotFound { cidr: String, namespace: String },

    /// The request is missing an identifying field.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A prefix record could not be encoded or decoded.
    #[error("serialization: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal backend error.
    #[error("internal: {0}")]
    Internal(String),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }

    pub fn is_already_exists(&self) -> bool {
        matches!(self, StoreError::AlreadyExists { .. })
    }
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
