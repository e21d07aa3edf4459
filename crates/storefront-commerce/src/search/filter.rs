//! Filter specification for catalog queries.

use std::collections::BTreeSet;

use crate::catalog::{Category, Product};
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Inclusive price bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Money,
    pub max: Money,
}

impl PriceRange {
    pub fn new(min: Money, max: Money) -> Self {
        Self { min, max }
    }

    /// Range that admits every non-negative price.
    pub fn unbounded(currency: Currency) -> Self {
        Self::new(Money::zero(currency), Money::new(i64::MAX, currency))
    }

    /// Whole-unit bounds, e.g. `PriceRange::units(0, 500, Currency::USD)`.
    pub fn units(min: i64, max: i64, currency: Currency) -> Self {
        Self::new(
            Money::from_units(min, currency),
            Money::from_units(max, currency),
        )
    }

    /// Smallest range containing every product price, or `None` for no products.
    pub fn covering<'a, I>(products: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Product>,
    {
        products.into_iter().fold(None, |range, product| {
            let price = product.price;
            Some(match range {
                None => PriceRange::new(price, price),
                Some(PriceRange { min, max }) => PriceRange::new(
                    if price.amount_cents < min.amount_cents { price } else { min },
                    if price.amount_cents > max.amount_cents { price } else { max },
                ),
            })
        })
    }

    pub fn contains(&self, price: Money) -> bool {
        self.min.amount_cents <= price.amount_cents && price.amount_cents <= self.max.amount_cents
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::unbounded(Currency::default())
    }
}

/// User-selected constraints narrowing the catalog view.
///
/// Each populated set is one predicate; values inside a set are alternatives
/// and the predicates must all hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FilterSpec {
    /// Department, `None` for all.
    pub category: Option<Category>,
    pub subcategories: BTreeSet<String>,
    pub sizes: BTreeSet<String>,
    pub colors: BTreeSet<String>,
    pub price_range: PriceRange,
    pub in_stock_only: bool,
}

impl FilterSpec {
    /// No restriction at all.
    pub fn new() -> Self {
        Self::default()
    }

    /// The filter panel's starting state: price slider from zero to `price_max`.
    pub fn storefront_default(price_max: Money) -> Self {
        Self {
            price_range: PriceRange::new(Money::zero(price_max.currency), price_max),
            ..Self::default()
        }
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_subcategory(mut self, subcategory: impl Into<String>) -> Self {
        self.subcategories.insert(subcategory.into());
        self
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.sizes.insert(size.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.colors.insert(color.into());
        self
    }

    pub fn with_price_range(mut self, range: PriceRange) -> Self {
        self.price_range = range;
        self
    }

    pub fn in_stock_only(mut self) -> Self {
        self.in_stock_only = true;
        self
    }

    /// Select the subcategory if unselected, unselect it otherwise.
    pub fn toggle_subcategory(&mut self, subcategory: &str) {
        toggle(&mut self.subcategories, subcategory);
    }

    pub fn toggle_size(&mut self, size: &str) {
        toggle(&mut self.sizes, size);
    }

    pub fn toggle_color(&mut self, color: &str) {
        toggle(&mut self.colors, color);
    }

    /// Drop every selection and reset the price range to `default_range`.
    /// The category is kept; it comes from the route, not the panel.
    pub fn clear(&mut self, default_range: PriceRange) {
        self.subcategories.clear();
        self.sizes.clear();
        self.colors.clear();
        self.price_range = default_range;
        self.in_stock_only = false;
    }

    /// Whether the panel differs from its starting state.
    pub fn has_active_filters(&self, default_range: &PriceRange) -> bool {
        !self.subcategories.is_empty()
            || !self.sizes.is_empty()
            || !self.colors.is_empty()
            || self.price_range.min.amount_cents > default_range.min.amount_cents
            || self.price_range.max.amount_cents < default_range.max.amount_cents
            || self.in_stock_only
    }

    /// Check a single product against every predicate.
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = self.category {
            if product.category != category {
                return false;
            }
        }
        if !self.subcategories.is_empty() && !self.subcategories.contains(&product.subcategory) {
            return false;
        }
        if !self.sizes.is_empty() && !product.sizes.iter().any(|s| self.sizes.contains(s)) {
            return false;
        }
        if !self.colors.is_empty() && !product.colors.iter().any(|c| self.colors.contains(c)) {
            return false;
        }
        if !self.price_range.contains(product.price) {
            return false;
        }
        !self.in_stock_only || product.in_stock
    }
}

fn toggle(set: &mut BTreeSet<String>, value: &str) {
    if !set.remove(value) {
        set.insert(value.to_string());
    }
}
