//! Filter panel options and result labels.

use crate::catalog::Product;
use crate::search::PriceRange;
use serde::{Deserialize, Serialize};

/// Values a filter panel can offer for a set of products.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FilterOptions {
    /// Distinct subcategories, first-seen order.
    pub subcategories: Vec<FacetValue>,
    /// Distinct sizes, first-seen order.
    pub sizes: Vec<FacetValue>,
    /// Distinct colors, first-seen order.
    pub colors: Vec<FacetValue>,
    /// Cheapest to dearest price, `None` when there are no products.
    pub price_bounds: Option<PriceRange>,
}

impl FilterOptions {
    pub fn from_products<'a, I>(products: I) -> Self
    where
        I: IntoIterator<Item = &'a Product>,
    {
        let mut options = FilterOptions::default();
        let mut seen: Vec<&Product> = Vec::new();

        for product in products {
            add_value(&mut options.subcategories, &product.subcategory);
            for size in &product.sizes {
                add_value(&mut options.sizes, size);
            }
            for color in &product.colors {
                add_value(&mut options.colors, color);
            }
            seen.push(product);
        }

        options.price_bounds = PriceRange::covering(seen);
        options
    }
}

/// One option and how many products carry it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FacetValue {
    pub value: String,
    pub count: usize,
}

fn add_value(values: &mut Vec<FacetValue>, value: &str) {
    match values.iter_mut().find(|v| v.value == value) {
        Some(existing) => existing.count += 1,
        None => values.push(FacetValue {
            value: value.to_string(),
            count: 1,
        }),
    }
}

/// Heading above the product grid.
pub fn result_label(count: usize) -> String {
    if count == 1 {
        "Showing 1 product".to_string()
    } else {
        format!("Showing {} products", count)
    }
}
