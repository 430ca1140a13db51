//! # Domain Types
//!
//! Core domain types shared between the stores and the web front-end.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    CartItem     │   │  WishlistItem   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id             │   │  id             │       │
//! │  │  name           │   │  name, price    │   │  name, price    │       │
//! │  │  price (₹)      │   │  quantity       │   │  category_id    │       │
//! │  │  image          │   │  category       │   │  date_added     │       │
//! │  │  category       │   └─────────────────┘   └─────────────────┘       │
//! │  └─────────────────┘                                                    │
//! │                                                                         │
//! │  Category { id, name, products } ──flatten──► Catalog (catalog.rs)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Derived vs Stored
//! `CartItem` is a *view*: it is always recomputed by joining the cart's
//! id→quantity mapping against the catalog, never persisted on its own.
//! Only the mapping itself is written to durable storage.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Product
// =============================================================================

/// A product listed on the marketplace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier within the catalog.
    pub id: String,

    /// Display name shown on listing cards and in the cart.
    pub name: String,

    /// Display price in rupees. Never negative.
    pub price: f64,

    /// Image URL for listing cards.
    pub image: String,

    /// Id of the category this product belongs to.
    pub category: String,
}

// =============================================================================
// Category
// =============================================================================

/// A marketplace category with its product listings.
///
/// Categories are the raw shape the surrounding application supplies; the
/// [`Catalog`](crate::catalog::Catalog) flattens them into an id-keyed map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub products: Vec<Product>,
}

// =============================================================================
// Cart Item (derived view)
// =============================================================================

/// The catalog-joined view of a single cart entry.
///
/// ## Design Notes
/// - Display fields come from the catalog at join time, so a catalog update
///   is reflected the next time the cart recomputes its item list.
/// - Entries whose product left the catalog never produce a `CartItem`; they
///   are pruned from the cart instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub image: String,
    /// Quantity in cart, always >= 1.
    pub quantity: i64,
    pub category: String,
}

impl CartItem {
    /// Builds the joined view for one cart entry.
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        CartItem {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity,
            category: product.category.clone(),
        }
    }

    /// Line total in rupees (unit price × quantity).
    pub fn line_total(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

// =============================================================================
// Wishlist Item
// =============================================================================

/// A saved marketplace listing.
///
/// Wishlist entries are stored in insertion order, which is also the display
/// order. The store does not deduplicate by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct WishlistItem {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub image: String,
    pub category_id: String,
    /// When the item was saved (ISO-8601 in the persisted record).
    #[ts(as = "String")]
    pub date_added: DateTime<Utc>,
}

impl WishlistItem {
    /// Stamps a product as a wishlist entry at the given moment.
    pub fn from_product(product: &Product, date_added: DateTime<Utc>) -> Self {
        WishlistItem {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            category_id: product.category.clone(),
            date_added,
        }
    }
}

// =============================================================================
// Cart Summary
// =============================================================================

/// Cart totals summary for the front-end header badge and checkout pane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartSummary {
    /// Number of distinct products in the cart.
    pub distinct_items: usize,
    /// Total unit count across all entries.
    pub total_quantity: i64,
    /// Σ (price × quantity) in rupees.
    pub total: f64,
}

// =============================================================================
// Unit Tests
// =============================================================================
