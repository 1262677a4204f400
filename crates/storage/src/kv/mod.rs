//! Key-value persistence boundary.
//!
//! This module defines the storage-facing abstraction the stores write
//! through without making any assumptions about the medium: an in-memory map
//! for tests and a SQLite file for real devices.

pub mod in_memory;
pub mod sqlite;
pub mod r#trait;

pub use in_memory::InMemoryKvStore;
pub use sqlite::SqliteKvStore;
pub use r#trait::{KeyValueStore, StorageError};
