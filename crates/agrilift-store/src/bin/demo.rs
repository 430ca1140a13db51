//! # Demo Session
//!
//! Seeds a sample agricultural catalog and walks a complete shopping
//! session against file-backed storage.
//!
//! ## Usage
//! ```bash
//! # Run with default storage directory (./data)
//! cargo run -p agrilift-store --bin demo
//!
//! # Custom storage directory; state survives between runs
//! AGRILIFT_DATA_DIR=/tmp/agrilift cargo run -p agrilift-store --bin demo
//! ```

use std::env;

use tracing_subscriber::EnvFilter;

use agrilift_core::currency::format_inr;
use agrilift_core::finance::{export_checklist, monthly_installment, readiness_score};
use agrilift_core::{Catalog, Category, Product};
use agrilift_store::{
    shared_catalog, CartStore, FileStorage, LogNotifier, StoreConfig, WishlistStore,
};

fn product(id: &str, name: &str, price: f64, category: &str) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        price,
        image: format!("/images/{}.jpg", id),
        category: category.to_string(),
    }
}

/// Sample marketplace data in the shape the category pages supply.
fn sample_categories() -> Vec<Category> {
    vec![
        Category {
            id: "grains".to_string(),
            name: "Grains & Cereals".to_string(),
            products: vec![
                product("grain-1", "Basmati Rice (25kg)", 2450.0, "grains"),
                product("grain-2", "Wheat (50kg)", 1320.0, "grains"),
                product("grain-3", "Maize (50kg)", 1050.0, "grains"),
            ],
        },
        Category {
            id: "dairy".to_string(),
            name: "Dairy".to_string(),
            products: vec![
                product("dairy-1", "Buffalo Milk (per litre)", 65.0, "dairy"),
                product("dairy-2", "Paneer (per kg)", 320.0, "dairy"),
            ],
        },
        Category {
            id: "machinery".to_string(),
            name: "Farm Machinery".to_string(),
            products: vec![
                product("mach-1", "Rotavator (6ft)", 98000.0, "machinery"),
                product("mach-2", "Seed Drill (9 row)", 145000.0, "machinery"),
            ],
        },
    ]
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let data_dir = env::var("AGRILIFT_DATA_DIR").unwrap_or_else(|_| "./data".to_string());
    let storage = FileStorage::open(&data_dir)?;
    let config = StoreConfig::from_env();

    let catalog = shared_catalog(Catalog::from_categories(&sample_categories()));
    let mut cart = CartStore::open(catalog.clone(), storage.clone(), LogNotifier, &config)?;
    let mut wishlist = WishlistStore::open(storage, LogNotifier, &config)?;

    if !cart.is_empty() {
        println!("Restored cart from previous session:");
        for item in cart.items() {
            println!("  {} x{}  {}", item.name, item.quantity, format_inr(item.line_total()));
        }
        cart.clear()?;
    }

    let (rice, milk, rotavator) = {
        let catalog = catalog.lock().expect("catalog mutex poisoned");
        (
            catalog.get("grain-1").cloned().expect("seeded"),
            catalog.get("dairy-1").cloned().expect("seeded"),
            catalog.get("mach-1").cloned().expect("seeded"),
        )
    };

    cart.add_item(&rice, 2)?;
    cart.add_item(&milk, 10)?;
    cart.add_item(&rice, 1)?; // same listing again: quantity accumulates
    wishlist.add_item(&rotavator)?;

    println!("\nCart:");
    for item in cart.items() {
        println!(
            "  {:<28} x{:<3} {}",
            item.name,
            item.quantity,
            format_inr(item.line_total())
        );
    }
    let summary = cart.summary();
    println!(
        "  {} products, {} units — total {}",
        summary.distinct_items,
        summary.total_quantity,
        format_inr(summary.total)
    );

    println!("\nWishlist:");
    for item in wishlist.items() {
        println!("  {} ({})", item.name, format_inr(item.price));
    }

    // Financing the rotavator: 3-year machinery loan at 10.5%.
    if let Some(emi) = monthly_installment(rotavator.price, 10.5, 3) {
        println!(
            "\nLoan quote for {}: {} per month over 36 months",
            rotavator.name,
            format_inr(emi)
        );
    }

    let mut checklist = export_checklist();
    checklist[0].completed = true;
    checklist[1].completed = true;
    println!("Export readiness: {}%", readiness_score(&checklist));

    println!("\nState persisted under {}", data_dir);
    Ok(())
}
