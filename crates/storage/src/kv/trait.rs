use std::sync::Arc;

use thiserror::Error;

/// Key-value operation error.
///
/// Whatever the medium, failures surface as one I/O-class error carrying the
/// backend's message. Callers must not assume a read or write succeeded.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// String key-value store.
///
/// The persistence contract every store writes through: read a key, overwrite
/// a key, remove a key. Values are opaque strings (the stores encode JSON
/// into them).
///
/// ## Write Semantics
///
/// `set` is atomic from the caller's point of view: either the new value is
/// visible on the next `get`, or the call failed and the previous value is
/// intact. Implementations must uphold this; nothing at this layer retries
/// or rolls back.
#[async_trait::async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value under `key`, `None` when absent.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the value under `key` in one call.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}

#[async_trait::async_trait]
impl<S> KeyValueStore for Arc<S>
where
    S: KeyValueStore + ?Sized,
{
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value).await
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key).await
    }
}
