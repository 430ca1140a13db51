//! # Wishlist Store
//!
//! Ordered list of saved listings, persisted with the same write-through
//! discipline as the cart.
//!
//! ## Known Quirk: Duplicates
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  The store does NOT deduplicate on add: saving the same listing twice  │
//! │  yields two entries. Removal strips every entry for the id, so the     │
//! │  pair of operations still converges. This mirrors the shipped          │
//! │  front-end behavior; dedup would silently change what users see.       │
//! │  UIs that want one-entry-per-listing should gate the save button on    │
//! │  `contains()`.                                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use tracing::{debug, warn};

use agrilift_core::{Product, WishlistItem};

use crate::config::StoreConfig;
use crate::error::{StorageError, StoreResult};
use crate::notify::Notifier;
use crate::persist::Storage;

/// The saved-items store.
///
/// ## Invariants
/// - Insertion order is display order.
/// - Durable storage holds exactly the current list after every mutation.
#[derive(Debug)]
pub struct WishlistStore<S: Storage, N: Notifier> {
    items: Vec<WishlistItem>,
    storage: S,
    notifier: N,
    key: String,
}

impl<S: Storage, N: Notifier> WishlistStore<S, N> {
    /// Restores the wishlist from durable storage, or starts empty.
    ///
    /// A malformed record is logged, replaced with an empty list, and
    /// overwritten; the caller never sees the decode failure.
    pub fn open(storage: S, notifier: N, config: &StoreConfig) -> StoreResult<Self> {
        let key = config.wishlist_key.clone();

        let (items, dirty) = match storage.load(&key)? {
            None => (Vec::new(), false),
            Some(raw) => match serde_json::from_str::<Vec<WishlistItem>>(&raw) {
                Ok(items) => (items, false),
                Err(e) => {
                    warn!(key = %key, error = %e, "malformed wishlist record, resetting to empty");
                    (Vec::new(), true)
                }
            },
        };

        let store = WishlistStore {
            items,
            storage,
            notifier,
            key,
        };
        if dirty {
            store.persist()?;
        }

        debug!(key = %store.key, entries = store.items.len(), "wishlist store opened");
        Ok(store)
    }

    /// Appends the product as a new entry stamped with the current time.
    ///
    /// No duplicate check is made; see the module docs.
    pub fn add_item(&mut self, product: &Product) -> StoreResult<()> {
        self.items
            .push(WishlistItem::from_product(product, Utc::now()));
        self.persist()?;

        debug!(id = %product.id, "added to wishlist");
        self.notifier
            .notify(&format!("{} added to wishlist", product.name));
        Ok(())
    }

    /// Removes every entry matching `id`. Removing an absent id is a no-op.
    pub fn remove_item(&mut self, id: &str) -> StoreResult<()> {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        if self.items.len() == before {
            debug!(id = %id, "remove on absent wishlist entry, ignoring");
            return Ok(());
        }
        self.persist()?;

        debug!(id = %id, removed = before - self.items.len(), "removed from wishlist");
        self.notifier.notify("Removed from wishlist");
        Ok(())
    }

    /// Whether any entry matches `id`. O(n) over the saved list.
    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    /// Empties the list and removes the persisted record entirely.
    pub fn clear(&mut self) -> StoreResult<()> {
        self.items.clear();
        self.storage.remove(&self.key)?;

        debug!(key = %self.key, "wishlist cleared");
        self.notifier.notify("Wishlist cleared");
        Ok(())
    }

    /// Saved entries in insertion order.
    pub fn items(&self) -> &[WishlistItem] {
        &self.items
    }

    /// Number of saved entries (duplicates counted).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the wishlist is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Writes the list through to durable storage.
    fn persist(&self) -> StoreResult<()> {
        let encoded = serde_json::to_string(&self.items)
            .map_err(|e| StorageError::encode(self.key.as_str(), e))?;
        self.storage.save(&self.key, &encoded)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::RecordingNotifier;
    use crate::persist::MemoryStorage;
    use std::sync::Arc;

    fn product(id: &str, name: &str, price: f64) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            price,
            image: format!("/images/{}.jpg", id),
            category: "dairy".to_string(),
        }
    }

    fn open(
        storage: Arc<MemoryStorage>,
        notifier: Arc<RecordingNotifier>,
    ) -> WishlistStore<Arc<MemoryStorage>, Arc<RecordingNotifier>> {
        WishlistStore::open(storage, notifier, &StoreConfig::default()).unwrap()
    }

    fn fresh() -> (
        WishlistStore<Arc<MemoryStorage>, Arc<RecordingNotifier>>,
        Arc<MemoryStorage>,
        Arc<RecordingNotifier>,
    ) {
        let storage = Arc::new(MemoryStorage::new());
        let notifier = Arc::new(RecordingNotifier::new());
        let store = open(Arc::clone(&storage), Arc::clone(&notifier));
        (store, storage, notifier)
    }

    #[test]
    fn test_add_stamps_and_preserves_order() {
        let (mut wishlist, _, _) = fresh();
        wishlist.add_item(&product("w1", "Buffalo Milk", 65.0)).unwrap();
        wishlist.add_item(&product("w2", "Paneer", 320.0)).unwrap();

        let ids: Vec<_> = wishlist.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["w1", "w2"]);
        assert!(wishlist.items()[0].date_added <= wishlist.items()[1].date_added);
    }

    #[test]
    fn test_duplicates_permitted_and_removed_together() {
        let (mut wishlist, _, _) = fresh();
        let milk = product("w1", "Buffalo Milk", 65.0);

        wishlist.add_item(&milk).unwrap();
        wishlist.add_item(&milk).unwrap();
        assert_eq!(wishlist.len(), 2);
        assert!(wishlist.contains("w1"));

        wishlist.remove_item("w1").unwrap();
        assert!(wishlist.is_empty());
        assert!(!wishlist.contains("w1"));
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let (mut wishlist, storage, notifier) = fresh();
        wishlist.add_item(&product("w1", "Buffalo Milk", 65.0)).unwrap();
        let saved = storage.load("wishlist").unwrap();

        wishlist.remove_item("ghost").unwrap();

        assert_eq!(wishlist.len(), 1);
        assert_eq!(storage.load("wishlist").unwrap(), saved);
        assert_eq!(notifier.messages(), vec!["Buffalo Milk added to wishlist"]);
    }

    #[test]
    fn test_write_through_round_trip() {
        let storage = Arc::new(MemoryStorage::new());
        let notifier = Arc::new(RecordingNotifier::new());

        {
            let mut wishlist = open(Arc::clone(&storage), Arc::clone(&notifier));
            wishlist.add_item(&product("w1", "Buffalo Milk", 65.0)).unwrap();
            wishlist.add_item(&product("w2", "Paneer", 320.0)).unwrap();
        }

        let restored = open(storage, notifier);
        assert_eq!(restored.len(), 2);
        assert_eq!(restored.items()[1].name, "Paneer");
        assert_eq!(restored.items()[1].category_id, "dairy");
    }

    #[test]
    fn test_malformed_record_resets_to_empty_and_overwrites() {
        let storage = Arc::new(MemoryStorage::new());
        storage.seed("wishlist", "[{broken");

        let wishlist = open(Arc::clone(&storage), Arc::new(RecordingNotifier::new()));

        assert!(wishlist.is_empty());
        assert_eq!(storage.load("wishlist").unwrap().unwrap(), "[]");
    }

    #[test]
    fn test_clear_removes_persisted_record() {
        let (mut wishlist, storage, notifier) = fresh();
        wishlist.add_item(&product("w1", "Buffalo Milk", 65.0)).unwrap();

        wishlist.clear().unwrap();

        assert!(wishlist.is_empty());
        assert!(storage.load("wishlist").unwrap().is_none());
        assert_eq!(
            notifier.messages(),
            vec!["Buffalo Milk added to wishlist", "Wishlist cleared"]
        );
    }
}
