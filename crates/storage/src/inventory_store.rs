//! The inventory store: the authoritative item collection over one blob key.

use tokio::sync::Mutex;

use dukaan_inventory::catalog;
use dukaan_inventory::{Item, ItemDraft, ItemId, starter_items};

use crate::error::{StoreError, StoreResult};
use crate::keys;
use crate::kv::{KeyValueStore, StorageError};

/// Authoritative item collection, persisted wholesale as one JSON array under
/// [`keys::ITEMS`].
///
/// The store is stateless between calls: every operation takes the caller's
/// current collection, computes the new one, persists it, and hands it back
/// for the caller to adopt. On any error the caller keeps its last known-good
/// collection; a failed save never partially applies.
///
/// ## Write Serialization
///
/// A scoped write lock serializes blob writes, so that when two mutations
/// overlap each write lands whole and the later one wins. The lock covers the
/// write only, not the surrounding read-modify-write cycle; overlapping
/// cycles still resolve to last-save-wins.
pub struct InventoryStore<S> {
    kv: S,
    write_lock: Mutex<()>,
}

impl<S: KeyValueStore> InventoryStore<S> {
    pub fn new(kv: S) -> Self {
        Self {
            kv,
            write_lock: Mutex::new(()),
        }
    }

    /// Read the collection, seeding the starter set when nothing is persisted.
    ///
    /// A blob that fails to parse surfaces as [`StoreError::Deserialization`];
    /// callers that can degrade should log and fall back rather than crash.
    pub async fn load(&self) -> StoreResult<Vec<Item>> {
        match self.kv.get(keys::ITEMS).await? {
            Some(blob) => decode(&blob),
            None => {
                let items = starter_items();
                tracing::info!(count = items.len(), "no inventory found; seeding starter set");
                self.save(&items).await?;
                Ok(items)
            }
        }
    }

    /// Read the collection without seeding; an absent blob is an empty list.
    ///
    /// The management screen uses this: an untouched store simply has
    /// nothing to manage yet. Only [`InventoryStore::load`] seeds.
    pub async fn read(&self) -> StoreResult<Vec<Item>> {
        match self.kv.get(keys::ITEMS).await? {
            Some(blob) => decode(&blob),
            None => Ok(Vec::new()),
        }
    }

    /// Overwrite the persisted collection in one write.
    pub async fn save(&self, items: &[Item]) -> StoreResult<()> {
        let blob = encode(items)?;

        let _guard = self.write_lock.lock().await;
        self.kv.set(keys::ITEMS, &blob).await?;
        Ok(())
    }

    /// Validate `draft`, append the created item, and persist.
    ///
    /// Returns the new collection and the created item.
    pub async fn create(
        &self,
        items: &[Item],
        draft: &ItemDraft,
    ) -> StoreResult<(Vec<Item>, Item)> {
        let (next, created) = catalog::create(items, draft, now_millis())?;
        self.save(&next).await?;

        tracing::debug!(id = %created.id, name = %created.name, "item created");
        Ok((next, created))
    }

    /// Validate `draft`, replace the item carrying `id` in place, and persist.
    ///
    /// Returns the new collection and the updated item.
    pub async fn update(
        &self,
        items: &[Item],
        id: &ItemId,
        draft: &ItemDraft,
    ) -> StoreResult<(Vec<Item>, Item)> {
        let (next, updated) = catalog::update(items, id, draft)?;
        self.save(&next).await?;

        tracing::debug!(id = %updated.id, name = %updated.name, "item updated");
        Ok((next, updated))
    }

    /// Remove the item carrying `id` and persist the shrunk collection.
    pub async fn delete(&self, items: &[Item], id: &ItemId) -> StoreResult<Vec<Item>> {
        let next = catalog::remove(items, id)?;
        self.save(&next).await?;

        tracing::debug!(%id, "item deleted");
        Ok(next)
    }
}

fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

fn encode(items: &[Item]) -> StoreResult<String> {
    serde_json::to_string(items).map_err(|e| {
        StoreError::Persistence(StorageError::Backend(format!(
            "failed to encode inventory blob: {e}"
        )))
    })
}

fn decode(blob: &str) -> StoreResult<Vec<Item>> {
    serde_json::from_str(blob)
        .map_err(|e| StoreError::deserialization(format!("invalid inventory blob: {e}")))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    use dukaan_core::DomainError;

    use crate::kv::InMemoryKvStore;

    use super::*;

    /// Backend whose writes can be made to fail on demand.
    struct FlakyKvStore {
        inner: InMemoryKvStore,
        fail_writes: AtomicBool,
    }

    impl FlakyKvStore {
        fn new() -> Self {
            Self {
                inner: InMemoryKvStore::new(),
                fail_writes: AtomicBool::new(false),
            }
        }

        fn fail_writes(&self, fail: bool) {
            self.fail_writes.store(fail, Ordering::SeqCst);
        }
    }

    #[async_trait::async_trait]
    impl KeyValueStore for FlakyKvStore {
        async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.inner.get(key).await
        }

        async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if self.fail_writes.load(Ordering::SeqCst) {
                return Err(StorageError::Backend("disk full".to_string()));
            }
            self.inner.set(key, value).await
        }

        async fn remove(&self, key: &str) -> Result<(), StorageError> {
            self.inner.remove(key).await
        }
    }

    fn test_store() -> InventoryStore<InMemoryKvStore> {
        InventoryStore::new(InMemoryKvStore::new())
    }

    fn ghee_draft() -> ItemDraft {
        ItemDraft::new("Ghee", "30", "10 kg", "Dairy")
    }

    #[tokio::test]
    async fn load_seeds_starter_set_and_persists_it() {
        let store = test_store();

        let items = store.load().await.unwrap();
        assert_eq!(items.len(), 20);
        assert_eq!(items[0].name, "Rice (Basmati)");
        assert_eq!(items[0].price, "Rs. 20");
        assert_eq!(items[0].stock, "50 kg");
        assert_eq!(items[0].category, "Grains");

        // The seed was written through, so the blob now exists.
        let blob = store.kv.get(keys::ITEMS).await.unwrap();
        assert!(blob.is_some());

        // And the next load reads it back identically.
        assert_eq!(store.load().await.unwrap(), items);
    }

    #[tokio::test]
    async fn read_does_not_seed() {
        let store = test_store();
        assert!(store.read().await.unwrap().is_empty());
        assert_eq!(store.kv.get(keys::ITEMS).await.unwrap(), None);

        // After a seeding load, read sees the same collection.
        let items = store.load().await.unwrap();
        assert_eq!(store.read().await.unwrap(), items);
    }

    #[tokio::test]
    async fn save_then_load_round_trips_field_for_field() {
        let store = test_store();
        let items = store.load().await.unwrap();

        let (with_ghee, _) = store.create(&items, &ghee_draft()).await.unwrap();
        store.save(&with_ghee).await.unwrap();

        assert_eq!(store.load().await.unwrap(), with_ghee);
    }

    #[tokio::test]
    async fn load_rejects_malformed_blob() {
        let store = test_store();
        store.kv.set(keys::ITEMS, "{not json").await.unwrap();

        let err = store.load().await.unwrap_err();
        match err {
            StoreError::Deserialization(_) => {}
            other => panic!("Expected Deserialization error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn create_appends_normalized_item_at_the_end() {
        let store = test_store();
        let items = store.load().await.unwrap();

        let (next, created) = store.create(&items, &ghee_draft()).await.unwrap();
        assert_eq!(next.len(), 21);
        assert_eq!(next.last(), Some(&created));
        assert_eq!(created.name, "Ghee");
        assert_eq!(created.price, "Rs. 30");

        // The whole collection, new item included, is what loads next.
        assert_eq!(store.load().await.unwrap(), next);
    }

    #[tokio::test]
    async fn create_with_blank_name_fails_and_writes_nothing() {
        let store = test_store();
        let items = store.load().await.unwrap();
        let before = store.kv.get(keys::ITEMS).await.unwrap().unwrap();

        let draft = ItemDraft::new("   ", "30", "10 kg", "Dairy");
        let err = store.create(&items, &draft).await.unwrap_err();
        match err {
            StoreError::Domain(DomainError::Validation(_)) => {}
            other => panic!("Expected Validation error, got {other:?}"),
        }

        let after = store.kv.get(keys::ITEMS).await.unwrap().unwrap();
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn update_replaces_in_place_and_persists() {
        let store = test_store();
        let items = store.load().await.unwrap();

        let id = items[4].id.clone();
        let (next, updated) = store.update(&items, &id, &ghee_draft()).await.unwrap();

        assert_eq!(next.len(), items.len());
        assert_eq!(next[4], updated);
        assert_eq!(updated.id, id);
        assert_eq!(updated.price, "Rs. 30");
        assert_eq!(store.load().await.unwrap(), next);
    }

    #[tokio::test]
    async fn update_unknown_id_leaves_blob_byte_for_byte_unchanged() {
        let store = test_store();
        let items = store.load().await.unwrap();
        let before = store.kv.get(keys::ITEMS).await.unwrap().unwrap();

        let err = store
            .update(&items, &ItemId::from("999"), &ghee_draft())
            .await
            .unwrap_err();
        match err {
            StoreError::Domain(DomainError::NotFound) => {}
            other => panic!("Expected NotFound error, got {other:?}"),
        }

        let after = store.kv.get(keys::ITEMS).await.unwrap().unwrap();
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn delete_shrinks_collection_by_exactly_one() {
        let store = test_store();
        let items = store.load().await.unwrap();

        let next = store.delete(&items, &items[0].id).await.unwrap();
        assert_eq!(next.len(), items.len() - 1);
        assert!(!next.iter().any(|item| item.id == items[0].id));
        assert_eq!(store.load().await.unwrap(), next);
    }

    #[tokio::test]
    async fn delete_unknown_id_is_not_found_and_writes_nothing() {
        let store = test_store();
        let items = store.load().await.unwrap();
        let before = store.kv.get(keys::ITEMS).await.unwrap().unwrap();

        let err = store.delete(&items, &ItemId::from("999")).await.unwrap_err();
        match err {
            StoreError::Domain(DomainError::NotFound) => {}
            other => panic!("Expected NotFound error, got {other:?}"),
        }

        assert_eq!(store.kv.get(keys::ITEMS).await.unwrap().unwrap(), before);
    }

    #[tokio::test]
    async fn failed_save_leaves_last_known_good_collection() {
        let kv = Arc::new(FlakyKvStore::new());
        let store = InventoryStore::new(Arc::clone(&kv));

        let items = store.load().await.unwrap();

        kv.fail_writes(true);
        let err = store.create(&items, &ghee_draft()).await.unwrap_err();
        match err {
            StoreError::Persistence(_) => {}
            other => panic!("Expected Persistence error, got {other:?}"),
        }

        // The blob still holds the pre-failure collection.
        kv.fail_writes(false);
        assert_eq!(store.load().await.unwrap(), items);
    }

    #[tokio::test]
    async fn overlapping_saves_resolve_to_one_whole_collection() {
        let store = Arc::new(InventoryStore::new(InMemoryKvStore::new()));
        let base = store.load().await.unwrap();

        let (first, _) = catalog::create(&base, &ghee_draft(), 1).unwrap();
        let (second, _) = catalog::create(
            &base,
            &ItemDraft::new("Honey", "45", "5 jars", "Essentials"),
            2,
        )
        .unwrap();

        let (a, b) = tokio::join!(store.save(&first), store.save(&second));
        a.unwrap();
        b.unwrap();

        // Last save wins, and the winner landed whole.
        let final_items = store.load().await.unwrap();
        assert!(final_items == first || final_items == second);
    }
}
