//! Pure collection transforms behind the inventory store.
//!
//! Every operation is a deterministic function from (collection, args) to a
//! new collection plus result. Nothing here touches storage; the persistence
//! call happens one layer up, after the transform has succeeded.

use dukaan_core::{DomainError, DomainResult};

use crate::item::{Item, ItemDraft, ItemId};

/// Case-insensitive substring filter on item names.
///
/// An empty query returns the full collection unchanged, in original order.
pub fn filter(items: &[Item], query: &str) -> Vec<Item> {
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| item.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Allocate an id for a new item.
///
/// Starts from `now_millis` rendered as a string and bumps by one until the
/// value is unused, so rapid successive creates within the same millisecond
/// still get distinct ids.
pub fn next_item_id(items: &[Item], now_millis: i64) -> ItemId {
    let mut candidate = now_millis;
    loop {
        let id = ItemId::new(candidate.to_string());
        if !items.iter().any(|item| item.id == id) {
            return id;
        }
        candidate += 1;
    }
}

/// Append a new item built from `draft`, its id drawn from `now_millis`.
///
/// Returns the new collection and the created item. The input collection is
/// not mutated.
pub fn create(
    items: &[Item],
    draft: &ItemDraft,
    now_millis: i64,
) -> DomainResult<(Vec<Item>, Item)> {
    let item = Item::from_draft(next_item_id(items, now_millis), draft)?;

    let mut next = items.to_vec();
    next.push(item.clone());
    Ok((next, item))
}

/// Rebuild the item carrying `id` from `draft`, replacing it in place.
///
/// Order-preserving: the edited item keeps its position and every other item
/// is untouched. Fails with `NotFound` when no item carries `id`.
pub fn update(
    items: &[Item],
    id: &ItemId,
    draft: &ItemDraft,
) -> DomainResult<(Vec<Item>, Item)> {
    if !items.iter().any(|item| &item.id == id) {
        return Err(DomainError::not_found());
    }

    let updated = Item::from_draft(id.clone(), draft)?;
    let next = items
        .iter()
        .map(|item| {
            if &item.id == id {
                updated.clone()
            } else {
                item.clone()
            }
        })
        .collect();
    Ok((next, updated))
}

/// Drop the item carrying `id`, preserving the relative order of the rest.
///
/// Fails with `NotFound` when no item carries `id`.
pub fn remove(items: &[Item], id: &ItemId) -> DomainResult<Vec<Item>> {
    if !items.iter().any(|item| &item.id == id) {
        return Err(DomainError::not_found());
    }

    Ok(items
        .iter()
        .filter(|item| &item.id != id)
        .cloned()
        .collect())
}
