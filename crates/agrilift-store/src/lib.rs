//! # agrilift-store: Client State Layer for AgriLift
//!
//! Stateful stores behind the marketplace UI: the shopping cart and the
//! wishlist, each persisted write-through via an injected storage port.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      AgriLift Client State                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Web Front-End                                │   │
//! │  │    add/remove/update handlers, cart badge, wishlist hearts     │   │
//! │  └──────────────┬─────────────────────────────┬────────────────────┘   │
//! │                 │                             │                         │
//! │  ┌──────────────▼──────────────┐ ┌────────────▼─────────────────────┐  │
//! │  │         CartStore           │ │         WishlistStore            │  │
//! │  │  id→quantity mapping        │ │  ordered, timestamped entries    │  │
//! │  │  derived CartItem join      │ │  (duplicates permitted)          │  │
//! │  └──────┬───────────┬──────────┘ └────────────┬─────────────────────┘  │
//! │         │           │                         │                         │
//! │  ┌──────▼─────┐ ┌───▼──────────┐   ┌──────────▼──────────┐             │
//! │  │ Catalog    │ │ Storage port │   │ Storage port        │             │
//! │  │ (shared,   │ │ agrilift-cart│   │ wishlist record     │             │
//! │  │  injected) │ │ record       │   │                     │             │
//! │  └────────────┘ └──────────────┘   └─────────────────────┘             │
//! │                                                                         │
//! │  SINGLE SESSION • SYNCHRONOUS WRITES • NO CROSS-TAB BROADCAST          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`cart`] - Cart store with catalog join and write-through persistence
//! - [`wishlist`] - Saved-items store
//! - [`persist`] - Storage port + memory/file backends
//! - [`notify`] - Confirmation-toast port
//! - [`config`] - Durable record names
//! - [`error`] - Storage-port error types
//!
//! ## Example Usage
//!
//! ```rust
//! use agrilift_core::{Catalog, Category, Product};
//! use agrilift_store::{shared_catalog, CartStore, LogNotifier, MemoryStorage, StoreConfig};
//!
//! let catalog = shared_catalog(Catalog::from_categories(&[Category {
//!     id: "grains".into(),
//!     name: "Grains & Cereals".into(),
//!     products: vec![Product {
//!         id: "p1".into(),
//!         name: "Basmati Rice".into(),
//!         price: 120.0,
//!         image: "/images/rice.jpg".into(),
//!         category: "grains".into(),
//!     }],
//! }]));
//!
//! let mut cart = CartStore::open(
//!     catalog.clone(),
//!     MemoryStorage::new(),
//!     LogNotifier,
//!     &StoreConfig::default(),
//! )
//! .unwrap();
//!
//! let rice = catalog.lock().unwrap().get("p1").cloned().unwrap();
//! cart.add_item(&rice, 2).unwrap();
//! assert_eq!(cart.total(), 240.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod config;
pub mod error;
pub mod notify;
pub mod persist;
pub mod wishlist;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{shared_catalog, CartStore, SharedCatalog};
pub use config::{StoreConfig, CART_STORAGE_KEY, WISHLIST_STORAGE_KEY};
pub use error::{StorageError, StoreResult};
pub use notify::{LogNotifier, Notifier, RecordingNotifier};
pub use persist::{FileStorage, MemoryStorage, Storage};
pub use wishlist::WishlistStore;
