//! Service-level error for the stateful stores.

use thiserror::Error;

use dukaan_core::DomainError;

use crate::kv::StorageError;

/// Result type used by the stores.
pub type StoreResult<T> = Result<T, StoreError>;

/// Failure of a store operation.
///
/// Folds the deterministic domain failures (validation, missing id) together
/// with the two infrastructure kinds: a persisted blob that would not parse,
/// and a read/write the backend rejected.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Deterministic domain failure, detected before any write.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The persisted blob is not valid JSON of the expected shape.
    #[error("malformed blob: {0}")]
    Deserialization(String),

    /// The underlying key-value read or write failed.
    #[error("persistence failed: {0}")]
    Persistence(#[from] StorageError),
}

impl StoreError {
    pub fn deserialization(msg: impl Into<String>) -> Self {
        Self::Deserialization(msg.into())
    }
}
