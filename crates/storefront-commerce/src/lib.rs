//! Storefront domain types and logic.
//!
//! This crate holds the state and rules behind a clothing storefront:
//!
//! - **Catalog**: Products, categories, reviews and catalog lookups
//! - **Cart**: An explicitly owned cart store with change observers
//! - **Search**: Filter specifications and the sorted query engine
//! - **Checkout**: Shipping options, order summary and local order placement
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use storefront_commerce::prelude::*;
//!
//! let tee = Arc::new(
//!     Product::new(
//!         "tee-1",
//!         "Classic Tee",
//!         "classic-tee",
//!         Money::from_units(50, Currency::USD),
//!         Category::Men,
//!         "t-shirts",
//!     )
//!     .with_images(["/images/tee.jpg"])
//!     .with_sizes(["M"])
//!     .with_colors(["Black"]),
//! );
//!
//! let mut store = CartStore::new(Currency::USD);
//! store.add_item(&tee, Some("M"), "Black", 2);
//! store.add_item(&tee, Some("M"), "Black", 3);
//!
//! assert_eq!(store.total_items(), 5);
//! assert_eq!(store.total_price(), Money::from_units(250, Currency::USD));
//! ```

pub mod config;
pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod search;

pub use config::StorefrontConfig;
pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::{FilterConfig, LoggingConfig, PricingConfig, StoreConfig, StorefrontConfig};
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Catalog, Category, Product, Review, ReviewSummary};

    // Cart
    pub use crate::cart::{
        Cart, CartEvent, CartStore, LineItem, LineKey, OrderSummary, SubscriptionId,
        MAX_QUANTITY_PER_ITEM,
    };

    // Checkout
    pub use crate::checkout::{place_order, ContactDetails, Order, OrderStatus, ShippingMethod};

    // Search
    pub use crate::search::{query, result_label, FilterOptions, FilterSpec, PriceRange, SortKey};
}
