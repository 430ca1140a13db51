//! # Cart Store
//!
//! Owns the authoritative id→quantity mapping and its catalog-joined view.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Store Operations                                │
//! │                                                                         │
//! │  UI Action               Store Method            State Change           │
//! │  ─────────               ────────────            ────────────           │
//! │                                                                         │
//! │  Click "Add to Cart" ───► add_item() ──────────► quantity += n         │
//! │                                                                         │
//! │  Change Quantity ───────► update_quantity() ───► quantity = n          │
//! │                           (n < 1 removes)                               │
//! │                                                                         │
//! │  Click Remove ──────────► remove_item() ───────► entry deleted         │
//! │                                                                         │
//! │  Click Clear ───────────► clear() ─────────────► mapping emptied,      │
//! │                                                   record removed        │
//! │                                                                         │
//! │  After EVERY mutation:                                                  │
//! │    1. re-join the full mapping against the catalog (derived items)     │
//! │    2. write the mapping through to durable storage                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Recovery Policy
//! Corrupt persisted records and entries whose product has left the catalog
//! are never surfaced as errors. The store logs the condition, degrades to a
//! consistent pruned/empty state, and overwrites the bad record.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use tracing::{debug, warn};

use agrilift_core::{CartItem, CartSummary, Catalog, Product};

use crate::config::StoreConfig;
use crate::error::{StorageError, StoreResult};
use crate::notify::Notifier;
use crate::persist::Storage;

/// The catalog handle shared between the cart store and the UI layer.
///
/// The cart needs write access for the synthetic-product fallback, the UI
/// reads it for browsing, so both hold the same `Arc<Mutex<_>>`.
pub type SharedCatalog = Arc<Mutex<Catalog>>;

/// Wraps a catalog for sharing between the cart store and its consumers.
pub fn shared_catalog(catalog: Catalog) -> SharedCatalog {
    Arc::new(Mutex::new(catalog))
}

/// The shopping cart store.
///
/// ## Invariants
/// - Entries are unique by product id; quantities are always >= 1.
/// - `items` is always the join of `quantities` against the catalog.
/// - Durable storage holds exactly the current mapping after every mutation
///   (write-through, never write-back).
#[derive(Debug)]
pub struct CartStore<S: Storage, N: Notifier> {
    catalog: SharedCatalog,
    /// Authoritative id → quantity mapping. BTreeMap keeps the persisted
    /// record deterministic.
    quantities: BTreeMap<String, i64>,
    /// Derived, catalog-joined view. Recomputed in full on every mutation.
    items: Vec<CartItem>,
    storage: S,
    notifier: N,
    key: String,
}

impl<S: Storage, N: Notifier> CartStore<S, N> {
    /// Restores the cart from durable storage, or starts empty.
    ///
    /// ## Recovery
    /// - Absent record: fresh empty cart, nothing written.
    /// - Malformed record: logged, reset to empty, record overwritten.
    /// - Entries that no longer resolve in the catalog (or carry an invalid
    ///   quantity): pruned, with a corrective re-save.
    pub fn open(
        catalog: SharedCatalog,
        storage: S,
        notifier: N,
        config: &StoreConfig,
    ) -> StoreResult<Self> {
        let key = config.cart_key.clone();

        let (quantities, mut dirty) = match storage.load(&key)? {
            None => (BTreeMap::new(), false),
            Some(raw) => match serde_json::from_str::<BTreeMap<String, i64>>(&raw) {
                Ok(decoded) => {
                    let total = decoded.len();
                    let cleaned: BTreeMap<String, i64> = decoded
                        .into_iter()
                        .filter(|&(_, quantity)| quantity >= 1)
                        .collect();
                    if cleaned.len() != total {
                        warn!(
                            key = %key,
                            dropped = total - cleaned.len(),
                            "dropped cart entries with non-positive quantity"
                        );
                    }
                    let dirty = cleaned.len() != total;
                    (cleaned, dirty)
                }
                Err(e) => {
                    warn!(key = %key, error = %e, "malformed cart record, resetting to empty");
                    (BTreeMap::new(), true)
                }
            },
        };

        let mut store = CartStore {
            catalog,
            quantities,
            items: Vec::new(),
            storage,
            notifier,
            key,
        };

        let pruned = store.rejoin();
        if !pruned.is_empty() {
            warn!(
                key = %store.key,
                pruned = pruned.len(),
                "pruned cart entries whose product left the catalog"
            );
            dirty = true;
        }
        if dirty {
            store.persist()?;
        }

        debug!(key = %store.key, entries = store.quantities.len(), "cart store opened");
        Ok(store)
    }

    /// Adds a product to the cart, or increases its quantity if present.
    ///
    /// ## Behavior
    /// - Unknown id: the caller-supplied product is upserted into the shared
    ///   catalog first, so the join never fails. This masks id typos and is
    ///   logged for that reason.
    /// - Non-positive `quantity` is treated as 1.
    pub fn add_item(&mut self, product: &Product, quantity: i64) -> StoreResult<()> {
        let quantity = quantity.max(1);

        {
            let mut catalog = self.catalog.lock().expect("catalog mutex poisoned");
            if !catalog.contains(&product.id) {
                warn!(id = %product.id, "product missing from catalog, inserting caller data");
                catalog.upsert(product.clone());
            }
        }

        *self.quantities.entry(product.id.clone()).or_insert(0) += quantity;
        self.rejoin();
        self.persist()?;

        debug!(id = %product.id, quantity, "added to cart");
        self.notifier
            .notify(&format!("{} added to cart", product.name));
        Ok(())
    }

    /// Removes an entry unconditionally. Removing an absent id is a no-op.
    pub fn remove_item(&mut self, id: &str) -> StoreResult<()> {
        if self.quantities.remove(id).is_none() {
            debug!(id = %id, "remove on absent cart entry, ignoring");
            return Ok(());
        }

        let name = self
            .items
            .iter()
            .find(|item| item.id == id)
            .map(|item| item.name.clone());

        self.rejoin();
        self.persist()?;

        debug!(id = %id, "removed from cart");
        let message = match name {
            Some(name) => format!("{} removed from cart", name),
            None => "Item removed from cart".to_string(),
        };
        self.notifier.notify(&message);
        Ok(())
    }

    /// Sets an entry's quantity (absolute, not additive).
    ///
    /// A quantity below 1 delegates to [`CartStore::remove_item`]. Updating
    /// an id that is not in the cart is a no-op.
    pub fn update_quantity(&mut self, id: &str, quantity: i64) -> StoreResult<()> {
        if quantity < 1 {
            return self.remove_item(id);
        }

        match self.quantities.get_mut(id) {
            Some(stored) => {
                *stored = quantity;
                self.rejoin();
                self.persist()?;
                debug!(id = %id, quantity, "cart quantity updated");
            }
            None => debug!(id = %id, "quantity update for absent cart entry, ignoring"),
        }
        Ok(())
    }

    /// Empties the cart and removes the persisted record entirely.
    pub fn clear(&mut self) -> StoreResult<()> {
        self.quantities.clear();
        self.items.clear();
        self.storage.remove(&self.key)?;

        debug!(key = %self.key, "cart cleared");
        self.notifier.notify("Cart cleared");
        Ok(())
    }

    /// The catalog-joined view of the cart, in id order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Σ (price × quantity) in rupees. 0 for an empty cart.
    pub fn total(&self) -> f64 {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Total unit count across all entries (not distinct-product count).
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Quantity for one entry; 0 when absent.
    pub fn quantity_of(&self, id: &str) -> i64 {
        self.quantities.get(id).copied().unwrap_or(0)
    }

    /// Whether the product is in the cart (for the "in cart" badge).
    pub fn contains(&self, id: &str) -> bool {
        self.quantities.contains_key(id)
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }

    /// The cart total rendered in the store's fixed locale (whole-rupee INR).
    pub fn formatted_total(&self) -> String {
        agrilift_core::format_inr(self.total())
    }

    /// Totals for the header badge and checkout pane.
    pub fn summary(&self) -> CartSummary {
        CartSummary {
            distinct_items: self.quantities.len(),
            total_quantity: self.total_quantity(),
            total: self.total(),
        }
    }

    /// Recomputes the derived item list by re-joining the whole mapping
    /// against the catalog. Entries that no longer resolve are dropped from
    /// the mapping and returned. O(n), acceptable at marketplace cart sizes.
    fn rejoin(&mut self) -> Vec<String> {
        let mut items = Vec::with_capacity(self.quantities.len());
        let mut unresolved = Vec::new();

        {
            let catalog = self.catalog.lock().expect("catalog mutex poisoned");
            for (id, &quantity) in &self.quantities {
                match catalog.get(id) {
                    Some(product) => items.push(CartItem::from_product(product, quantity)),
                    None => unresolved.push(id.clone()),
                }
            }
        }

        for id in &unresolved {
            self.quantities.remove(id);
        }
        self.items = items;
        unresolved
    }

    /// Writes the mapping through to durable storage.
    fn persist(&self) -> StoreResult<()> {
        let encoded = serde_json::to_string(&self.quantities)
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
    use agrilift_core::Category;

    fn product(id: &str, name: &str, price: f64) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            price,
            image: format!("/images/{}.jpg", id),
            category: "grains".to_string(),
        }
    }

    fn catalog() -> SharedCatalog {
        shared_catalog(Catalog::from_categories(&[Category {
            id: "grains".to_string(),
            name: "Grains & Cereals".to_string(),
            products: vec![
                product("p1", "Basmati Rice", 100.0),
                product("p2", "Wheat", 32.0),
            ],
        }]))
    }

    fn open_cart(
        catalog: SharedCatalog,
        storage: Arc<MemoryStorage>,
        notifier: Arc<RecordingNotifier>,
    ) -> CartStore<Arc<MemoryStorage>, Arc<RecordingNotifier>> {
        CartStore::open(catalog, storage, notifier, &StoreConfig::default()).unwrap()
    }

    fn fresh() -> (
        CartStore<Arc<MemoryStorage>, Arc<RecordingNotifier>>,
        Arc<MemoryStorage>,
        Arc<RecordingNotifier>,
        SharedCatalog,
    ) {
        let storage = Arc::new(MemoryStorage::new());
        let notifier = Arc::new(RecordingNotifier::new());
        let catalog = catalog();
        let cart = open_cart(
            Arc::clone(&catalog),
            Arc::clone(&storage),
            Arc::clone(&notifier),
        );
        (cart, storage, notifier, catalog)
    }

    #[test]
    fn test_add_accumulates_quantity() {
        let (mut cart, _, _, _) = fresh();
        let rice = product("p1", "Basmati Rice", 100.0);

        cart.add_item(&rice, 2).unwrap();
        cart.add_item(&rice, 3).unwrap();

        assert_eq!(cart.quantity_of("p1"), 5);
        assert_eq!(cart.total(), 500.0);
        assert_eq!(cart.formatted_total(), "₹500");
        assert_eq!(cart.total_quantity(), 5);
        assert_eq!(cart.items().len(), 1);
    }

    #[test]
    fn test_totals_track_mutations() {
        let (mut cart, _, _, _) = fresh();
        cart.add_item(&product("p1", "Basmati Rice", 100.0), 2).unwrap();
        cart.add_item(&product("p2", "Wheat", 32.0), 4).unwrap();

        assert_eq!(cart.total(), 2.0 * 100.0 + 4.0 * 32.0);
        assert_eq!(cart.total_quantity(), 6);

        cart.update_quantity("p2", 1).unwrap();
        assert_eq!(cart.total(), 232.0);
        assert_eq!(cart.total_quantity(), 3);

        let summary = cart.summary();
        assert_eq!(summary.distinct_items, 2);
        assert_eq!(summary.total_quantity, 3);
        assert_eq!(summary.total, 232.0);
    }

    #[test]
    fn test_unknown_product_is_upserted_into_catalog() {
        let (mut cart, _, _, catalog) = fresh();
        let tractor = Product {
            id: "m1".to_string(),
            name: "Mini Tractor".to_string(),
            price: 245000.0,
            image: "/images/tractor.jpg".to_string(),
            category: "machinery".to_string(),
        };

        cart.add_item(&tractor, 1).unwrap();

        assert!(catalog.lock().unwrap().contains("m1"));
        assert_eq!(cart.items()[0].name, "Mini Tractor");
    }

    #[test]
    fn test_update_quantity_is_absolute() {
        let (mut cart, _, _, _) = fresh();
        cart.add_item(&product("p1", "Basmati Rice", 100.0), 2).unwrap();

        cart.update_quantity("p1", 7).unwrap();
        assert_eq!(cart.quantity_of("p1"), 7);
    }

    #[test]
    fn test_update_quantity_below_one_removes() {
        let (mut cart, _, _, _) = fresh();
        cart.add_item(&product("p1", "Basmati Rice", 100.0), 2).unwrap();
        cart.add_item(&product("p2", "Wheat", 32.0), 2).unwrap();

        cart.update_quantity("p1", 0).unwrap();
        assert!(!cart.contains("p1"));

        cart.update_quantity("p2", -5).unwrap();
        assert!(!cart.contains("p2"));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_on_absent_id_is_noop() {
        let (mut cart, storage, _, _) = fresh();
        cart.add_item(&product("p1", "Basmati Rice", 100.0), 1).unwrap();
        let saved = storage.load("agrilift-cart").unwrap();

        cart.update_quantity("ghost", 4).unwrap();

        assert!(!cart.contains("ghost"));
        assert_eq!(storage.load("agrilift-cart").unwrap(), saved);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let (mut cart, _, notifier, _) = fresh();
        cart.add_item(&product("p1", "Basmati Rice", 100.0), 2).unwrap();

        cart.remove_item("p1").unwrap();
        cart.remove_item("p1").unwrap();

        assert!(cart.is_empty());
        // The second call emitted no confirmation.
        let removals: Vec<_> = notifier
            .messages()
            .into_iter()
            .filter(|m| m.contains("removed"))
            .collect();
        assert_eq!(removals, vec!["Basmati Rice removed from cart"]);
    }

    #[test]
    fn test_write_through_round_trip() {
        let storage = Arc::new(MemoryStorage::new());
        let notifier = Arc::new(RecordingNotifier::new());
        let shared = catalog();

        {
            let mut cart = open_cart(
                Arc::clone(&shared),
                Arc::clone(&storage),
                Arc::clone(&notifier),
            );
            cart.add_item(&product("p1", "Basmati Rice", 100.0), 2).unwrap();
            cart.add_item(&product("p2", "Wheat", 32.0), 1).unwrap();
        }

        let restored = open_cart(shared, storage, notifier);
        assert_eq!(restored.quantity_of("p1"), 2);
        assert_eq!(restored.quantity_of("p2"), 1);
        assert_eq!(restored.total(), 232.0);
    }

    #[test]
    fn test_malformed_record_resets_to_empty_and_overwrites() {
        let storage = Arc::new(MemoryStorage::new());
        storage.seed("agrilift-cart", "{not valid json");

        let cart = open_cart(
            catalog(),
            Arc::clone(&storage),
            Arc::new(RecordingNotifier::new()),
        );

        assert!(cart.is_empty());
        assert_eq!(storage.load("agrilift-cart").unwrap().unwrap(), "{}");
    }

    #[test]
    fn test_catalog_drift_pruned_on_open() {
        let storage = Arc::new(MemoryStorage::new());
        storage.seed("agrilift-cart", r#"{"ghost":2,"p1":1}"#);

        let cart = open_cart(
            catalog(),
            Arc::clone(&storage),
            Arc::new(RecordingNotifier::new()),
        );

        assert!(!cart.contains("ghost"));
        assert_eq!(cart.quantity_of("p1"), 1);
        // The corrective save dropped the unresolvable entry.
        assert_eq!(storage.load("agrilift-cart").unwrap().unwrap(), r#"{"p1":1}"#);
    }

    #[test]
    fn test_non_positive_quantities_dropped_on_open() {
        let storage = Arc::new(MemoryStorage::new());
        storage.seed("agrilift-cart", r#"{"p1":0,"p2":3}"#);

        let cart = open_cart(
            catalog(),
            Arc::clone(&storage),
            Arc::new(RecordingNotifier::new()),
        );

        assert!(!cart.contains("p1"));
        assert_eq!(cart.quantity_of("p2"), 3);
        assert_eq!(storage.load("agrilift-cart").unwrap().unwrap(), r#"{"p2":3}"#);
    }

    #[test]
    fn test_clear_removes_persisted_record() {
        let (mut cart, storage, _, _) = fresh();
        cart.add_item(&product("p1", "Basmati Rice", 100.0), 2).unwrap();
        assert!(storage.load("agrilift-cart").unwrap().is_some());

        cart.clear().unwrap();

        assert!(cart.is_empty());
        assert!(cart.items().is_empty());
        assert!(storage.load("agrilift-cart").unwrap().is_none());
    }

    #[test]
    fn test_empty_cart_totals_are_zero() {
        let (cart, _, _, _) = fresh();
        assert_eq!(cart.total(), 0.0);
        assert_eq!(cart.total_quantity(), 0);
        assert!(cart.items().is_empty());
    }

    #[test]
    fn test_confirmations_emitted() {
        let (mut cart, _, notifier, _) = fresh();
        cart.add_item(&product("p1", "Basmati Rice", 100.0), 1).unwrap();
        cart.clear().unwrap();

        assert_eq!(
            notifier.messages(),
            vec!["Basmati Rice added to cart", "Cart cleared"]
        );
    }
}
