//! # Store Configuration
//!
//! Durable-storage record names for the client stores.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     AGRILIFT_CART_KEY=agrilift-cart-staging                            │
//! │     AGRILIFT_WISHLIST_KEY=wishlist-staging                             │
//! │                                                                         │
//! │  2. Default Values (lowest priority)                                   │
//! │     agrilift-cart, wishlist — the keys the shipped front-end uses      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The key names are part of the application's external surface: a session
//! restores whatever an earlier session wrote under the same key.

use std::env;

/// Default durable-storage key for the cart's id→quantity mapping.
pub const CART_STORAGE_KEY: &str = "agrilift-cart";

/// Default durable-storage key for the wishlist array.
pub const WISHLIST_STORAGE_KEY: &str = "wishlist";

/// Record names the stores persist under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub cart_key: String,
    pub wishlist_key: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            cart_key: CART_STORAGE_KEY.to_string(),
            wishlist_key: WISHLIST_STORAGE_KEY.to_string(),
        }
    }
}

impl StoreConfig {
    /// Loads the configuration, honoring environment overrides.
    pub fn from_env() -> Self {
        let defaults = StoreConfig::default();
        StoreConfig {
            cart_key: env::var("AGRILIFT_CART_KEY").unwrap_or(defaults.cart_key),
            wishlist_key: env::var("AGRILIFT_WISHLIST_KEY").unwrap_or(defaults.wishlist_key),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
