//! # Product Catalog
//!
//! O(1) lookup from product id to its display metadata and category.
//!
//! ## Construction
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Catalog Construction                                │
//! │                                                                         │
//! │  Category "grains"  ──┐                                                 │
//! │    Basmati Rice       │                                                 │
//! │    Wheat              ├──flatten──►  HashMap<id, Product>               │
//! │  Category "dairy"     │                "p1" → Basmati Rice              │
//! │    Buffalo Milk     ──┘                "p2" → Wheat                     │
//! │                                        "d1" → Buffalo Milk              │
//! │                                                                         │
//! │  Construction cannot fail: it is a pure transform over static input.   │
//! │  Later-listed duplicates of an id win, matching the source ordering.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Mutation
//! The catalog is immutable for the session except for [`Catalog::upsert`],
//! the explicit fallback the cart store uses when asked to add a product the
//! catalog has never seen. Keeping that path as a named method (rather than a
//! side effect buried inside the cart) makes catalog drift visible.

use std::collections::HashMap;

use crate::types::{Category, Product};

/// Id-keyed product lookup built once from category data.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: HashMap<String, Product>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Catalog {
            products: HashMap::new(),
        }
    }

    /// Builds the catalog by flattening every category's product list.
    pub fn from_categories(categories: &[Category]) -> Self {
        let mut products = HashMap::new();
        for category in categories {
            for product in &category.products {
                products.insert(product.id.clone(), product.clone());
            }
        }
        Catalog { products }
    }

    /// Looks up a product by id.
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.get(id)
    }

    /// Checks whether an id resolves in the catalog.
    pub fn contains(&self, id: &str) -> bool {
        self.products.contains_key(id)
    }

    /// Inserts or replaces a product.
    ///
    /// Returns the previous entry for the id, if any.
    pub fn upsert(&mut self, product: Product) -> Option<Product> {
        self.products.insert(product.id.clone(), product)
    }

    /// All products in a category, for the category browse pages.
    ///
    /// Order is unspecified; the UI sorts for display.
    pub fn products_in_category(&self, category: &str) -> Vec<&Product> {
        self.products
            .values()
            .filter(|p| p.category == category)
            .collect()
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Checks if the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, category: &str, price: f64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            price,
            image: format!("/images/{}.jpg", id),
            category: category.to_string(),
        }
    }

    fn sample_categories() -> Vec<Category> {
        vec![
            Category {
                id: "grains".to_string(),
                name: "Grains & Cereals".to_string(),
                products: vec![product("p1", "grains", 120.0), product("p2", "grains", 32.0)],
            },
            Category {
                id: "dairy".to_string(),
                name: "Dairy".to_string(),
                products: vec![product("d1", "dairy", 65.0)],
            },
        ]
    }

    #[test]
    fn test_flattens_all_categories() {
        let catalog = Catalog::from_categories(&sample_categories());
        assert_eq!(catalog.len(), 3);
        assert!(catalog.contains("p1"));
        assert!(catalog.contains("d1"));
        assert!(!catalog.contains("missing"));
    }

    #[test]
    fn test_lookup_returns_display_metadata() {
        let catalog = Catalog::from_categories(&sample_categories());
        let p = catalog.get("d1").unwrap();
        assert_eq!(p.name, "Product d1");
        assert_eq!(p.category, "dairy");
        assert_eq!(p.price, 65.0);
    }

    #[test]
    fn test_upsert_inserts_and_replaces() {
        let mut catalog = Catalog::from_categories(&sample_categories());

        assert!(catalog.upsert(product("x1", "machinery", 45000.0)).is_none());
        assert!(catalog.contains("x1"));

        let previous = catalog.upsert(product("x1", "machinery", 42000.0));
        assert_eq!(previous.unwrap().price, 45000.0);
        assert_eq!(catalog.get("x1").unwrap().price, 42000.0);
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn test_products_in_category() {
        let catalog = Catalog::from_categories(&sample_categories());
        let mut grains: Vec<&str> = catalog
            .products_in_category("grains")
            .into_iter()
            .map(|p| p.id.as_str())
            .collect();
        grains.sort_unstable();
        assert_eq!(grains, vec!["p1", "p2"]);
        assert!(catalog.products_in_category("fisheries").is_empty());
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new();
        assert!(catalog.is_empty());
        assert!(catalog.get("p1").is_none());
    }
}
