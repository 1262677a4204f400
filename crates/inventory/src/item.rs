use serde::{Deserialize, Serialize};

use dukaan_core::{DomainError, DomainResult};

/// Currency label prepended to every price on create/update.
pub const CURRENCY_PREFIX: &str = "Rs. ";

/// Category an item falls back to when the draft leaves it blank.
pub const DEFAULT_CATEGORY: &str = "General";

// ─────────────────────────────────────────────────────────────────────────────
// Item ID
// ─────────────────────────────────────────────────────────────────────────────

/// Unique identifier for an item within the collection.
///
/// Assigned once at creation (wall-clock milliseconds rendered as a string,
/// bumped past collisions) and never reassigned. Serializes as the bare
/// string, so persisted collections stay a flat array of string fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<ItemId> for String {
    fn from(value: ItemId) -> Self {
        value.0
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Item
// ─────────────────────────────────────────────────────────────────────────────

/// One inventory record.
///
/// Every field is a display string: `price` carries the currency label and
/// `stock` carries its unit ("50 kg", "30 bottles"). Neither is ever parsed
/// as a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub price: String,
    pub stock: String,
    pub category: String,
}

impl Item {
    /// Build an item from a draft, validating and normalizing its fields.
    ///
    /// `name`, `price` and `stock` must be non-empty after trimming; a blank
    /// `category` falls back to [`DEFAULT_CATEGORY`]. The currency prefix is
    /// prepended to `price` whether or not it is already present; edit forms
    /// strip it first via [`ItemDraft::from_item`].
    pub fn from_draft(id: ItemId, draft: &ItemDraft) -> DomainResult<Self> {
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }

        let price = draft.price.trim();
        if price.is_empty() {
            return Err(DomainError::validation("price cannot be empty"));
        }

        let stock = draft.stock.trim();
        if stock.is_empty() {
            return Err(DomainError::validation("stock cannot be empty"));
        }

        let category = match draft.category.trim() {
            "" => DEFAULT_CATEGORY,
            trimmed => trimmed,
        };

        Ok(Self {
            id,
            name: name.to_string(),
            price: format!("{CURRENCY_PREFIX}{price}"),
            stock: stock.to_string(),
            category: category.to_string(),
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Item draft
// ─────────────────────────────────────────────────────────────────────────────

/// Unvalidated field set supplied to create/update before normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDraft {
    pub name: String,
    pub price: String,
    pub stock: String,
    pub category: String,
}

impl ItemDraft {
    pub fn new(
        name: impl Into<String>,
        price: impl Into<String>,
        stock: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            stock: stock.into(),
            category: category.into(),
        }
    }

    /// Turn an existing item back into an editable draft.
    ///
    /// Strips the currency label (and any stray dollar signs) from `price` so
    /// that saving the edit does not stack prefixes.
    pub fn from_item(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            price: item.price.replace(CURRENCY_PREFIX, "").replace('$', ""),
            stock: item.stock.clone(),
            category: item.category.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_draft() -> ItemDraft {
        ItemDraft::new("Ghee", "30", "10 kg", "Dairy")
    }

    #[test]
    fn from_draft_normalizes_price_with_currency_prefix() {
        let item = Item::from_draft(ItemId::from("7"), &test_draft()).unwrap();
        assert_eq!(item.price, "Rs. 30");
        assert_eq!(item.name, "Ghee");
        assert_eq!(item.stock, "10 kg");
        assert_eq!(item.category, "Dairy");
    }

    #[test]
    fn from_draft_trims_whitespace() {
        let draft = ItemDraft::new("  Ghee  ", " 30 ", " 10 kg ", "  Dairy ");
        let item = Item::from_draft(ItemId::from("7"), &draft).unwrap();
        assert_eq!(item.name, "Ghee");
        assert_eq!(item.price, "Rs. 30");
        assert_eq!(item.stock, "10 kg");
        assert_eq!(item.category, "Dairy");
    }

    #[test]
    fn from_draft_rejects_blank_name() {
        let mut draft = test_draft();
        draft.name = "   ".to_string();

        let err = Item::from_draft(ItemId::from("7"), &draft).unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            other => panic!("Expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn from_draft_rejects_blank_price() {
        let mut draft = test_draft();
        draft.price = String::new();

        let err = Item::from_draft(ItemId::from("7"), &draft).unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            other => panic!("Expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn from_draft_rejects_blank_stock() {
        let mut draft = test_draft();
        draft.stock = "  ".to_string();

        let err = Item::from_draft(ItemId::from("7"), &draft).unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            other => panic!("Expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn from_draft_defaults_blank_category_to_general() {
        let mut draft = test_draft();
        draft.category = "  ".to_string();

        let item = Item::from_draft(ItemId::from("7"), &draft).unwrap();
        assert_eq!(item.category, DEFAULT_CATEGORY);
    }

    #[test]
    fn from_item_strips_currency_prefix_for_editing() {
        let item = Item::from_draft(ItemId::from("7"), &test_draft()).unwrap();
        let draft = ItemDraft::from_item(&item);
        assert_eq!(draft.price, "30");

        // Round-tripping through an edit keeps the price stable.
        let edited = Item::from_draft(item.id.clone(), &draft).unwrap();
        assert_eq!(edited.price, item.price);
    }

    #[test]
    fn from_draft_stacks_prefix_when_already_present() {
        // Drafts that arrive pre-prefixed double up. Callers editing an
        // existing item go through `ItemDraft::from_item`, which strips the
        // label first.
        let draft = ItemDraft::new("Ghee", "Rs. 30", "10 kg", "Dairy");
        let item = Item::from_draft(ItemId::from("7"), &draft).unwrap();
        assert_eq!(item.price, "Rs. Rs. 30");
    }

    #[test]
    fn item_id_serializes_transparently() {
        let item = Item::from_draft(ItemId::from("1755850000000"), &test_draft()).unwrap();
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["id"], "1755850000000");
    }
}
