//! # agrilift-core: Pure Business Logic for AgriLift
//!
//! This crate is the **heart** of the AgriLift marketplace client. It contains
//! the reusable logic behind the shopping experience as pure functions and
//! plain data types with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      AgriLift Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Web Front-End                                │   │
//! │  │    Market UI ──► Cart UI ──► Loans UI ──► Export UI            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    agrilift-store                               │   │
//! │  │    CartStore, WishlistStore, Storage port, notifications       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ agrilift-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  catalog  │  │ currency  │  │  finance  │  │   │
//! │  │   │  Product  │  │  Catalog  │  │ INR       │  │ EMI,      │  │   │
//! │  │   │  CartItem │  │  lookup   │  │ grouping  │  │ readiness │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Category, CartItem, WishlistItem)
//! - [`catalog`] - O(1) product lookup built from category data
//! - [`currency`] - Whole-rupee INR formatting with Indian digit grouping
//! - [`finance`] - Loan EMI and export-readiness calculators
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Storage, network, file system access is FORBIDDEN here
//! 3. **Catalog as a Service**: the catalog is an explicit value passed by
//!    reference, never ambient module-level state
//!
//! ## Example Usage
//!
//! ```rust
//! use agrilift_core::catalog::Catalog;
//! use agrilift_core::currency::format_inr;
//! use agrilift_core::types::{Category, Product};
//!
//! let categories = vec![Category {
//!     id: "grains".into(),
//!     name: "Grains & Cereals".into(),
//!     products: vec![Product {
//!         id: "p1".into(),
//!         name: "Basmati Rice".into(),
//!         price: 120.0,
//!         image: "/images/rice.jpg".into(),
//!         category: "grains".into(),
//!     }],
//! }];
//!
//! let catalog = Catalog::from_categories(&categories);
//! let rice = catalog.get("p1").unwrap();
//! assert_eq!(format_inr(rice.price), "₹120");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod currency;
pub mod finance;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use agrilift_core::Catalog` instead of
// `use agrilift_core::catalog::Catalog`

pub use catalog::Catalog;
pub use currency::format_inr;
pub use types::*;
