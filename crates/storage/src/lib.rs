//! Persistence layer: key-value backends and the stateful stores built on them.
//!
//! The [`kv`] module defines the storage boundary (a string key-value trait
//! with in-memory and SQLite backends). The stores built on top of it own
//! their keys and mediate every read and write; nothing else in the workspace
//! touches the backend directly.

pub mod error;
pub mod inventory_store;
pub mod keys;
pub mod kv;
pub mod profile_store;
pub mod session_store;

pub use error::{StoreError, StoreResult};
pub use inventory_store::InventoryStore;
pub use kv::{InMemoryKvStore, KeyValueStore, SqliteKvStore, StorageError};
pub use profile_store::ProfileStore;
pub use session_store::SessionStore;
