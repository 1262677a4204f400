//! Inventory domain: items, drafts, and the pure collection transforms.
//!
//! This crate contains business rules only, implemented as deterministic
//! functions over the item collection (no IO, no storage). The stateful store
//! that persists collections lives in `dukaan-storage`.

pub mod catalog;
pub mod item;
pub mod seed;

pub use item::{CURRENCY_PREFIX, DEFAULT_CATEGORY, Item, ItemDraft, ItemId};
pub use seed::starter_items;
