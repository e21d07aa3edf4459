//! Product type.

use crate::catalog::Category;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Highest rating a product or review can carry.
pub const MAX_RATING: f64 = 5.0;

/// A product in the catalog.
///
/// Products are immutable once the catalog is built; the cart holds them
/// behind an `Arc` and never writes through.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// URL-friendly slug (unique).
    pub slug: String,
    /// Long-form description.
    pub description: String,
    /// Selling price.
    pub price: Money,
    /// Strike-through comparison price.
    pub original_price: Option<Money>,
    /// Department.
    pub category: Category,
    /// Free-form tag within the department (e.g. "shoes").
    pub subcategory: String,
    /// Image URLs, primary first.
    pub images: Vec<String>,
    /// Size labels on offer.
    pub sizes: Vec<String>,
    /// Color labels on offer.
    pub colors: Vec<String>,
    /// Whether the product can be bought right now.
    pub in_stock: bool,
    /// Merchandised as featured.
    pub featured: bool,
    /// Merchandised as a new arrival.
    pub new: bool,
    /// Average rating, 0 to 5.
    pub rating: f64,
    /// Number of reviews behind `rating`.
    pub review_count: u32,
}

impl Product {
    /// Create an in-stock product with no images, sizes or colors yet.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        slug: impl Into<String>,
        price: Money,
        category: Category,
        subcategory: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            slug: slug.into(),
            description: String::new(),
            price,
            original_price: None,
            category,
            subcategory: subcategory.into(),
            images: Vec::new(),
            sizes: Vec::new(),
            colors: Vec::new(),
            in_stock: true,
            featured: false,
            new: false,
            rating: 0.0,
            review_count: 0,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_original_price(mut self, original_price: Money) -> Self {
        self.original_price = Some(original_price);
        self
    }

    pub fn with_images<I, S>(mut self, images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.images = images.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_sizes<I, S>(mut self, sizes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sizes = sizes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.colors = colors.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_rating(mut self, rating: f64, review_count: u32) -> Self {
        self.rating = rating;
        self.review_count = review_count;
        self
    }

    pub fn with_stock(mut self, in_stock: bool) -> Self {
        self.in_stock = in_stock;
        self
    }

    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }

    pub fn new_arrival(mut self) -> Self {
        self.new = true;
        self
    }

    /// Check the product's own invariants.
    pub fn validate(&self) -> Result<(), CommerceError> {
        let fail = |what: &str| {
            Err(CommerceError::ValidationError(format!(
                "product {}: {}",
                self.id, what
            )))
        };

        if self.id.as_str().is_empty() {
            return fail("id is empty");
        }
        if self.slug.is_empty() || !is_url_safe(&self.slug) {
            return fail("slug must be non-empty and URL-safe");
        }
        if self.price.is_negative() {
            return fail("price is negative");
        }
        if let Some(original) = self.original_price {
            if original.currency != self.price.currency {
                return fail("original price currency differs from price");
            }
            if original.amount_cents < self.price.amount_cents {
                return fail("original price is below price");
            }
        }
        if self.subcategory.trim().is_empty() {
            return fail("subcategory is empty");
        }
        if self.images.is_empty() {
            return fail("no images");
        }
        if self.sizes.is_empty() {
            return fail("no sizes");
        }
        if self.colors.is_empty() {
            return fail("no colors");
        }
        if !(0.0..=MAX_RATING).contains(&self.rating) {
            return fail("rating outside 0-5");
        }
        Ok(())
    }

    /// Check if the product has a strike-through price above its price.
    pub fn is_on_sale(&self) -> bool {
        self.original_price
            .map(|op| op.amount_cents > self.price.amount_cents)
            .unwrap_or(false)
    }

    /// Percentage saved against the original price, if on sale.
    pub fn discount_percentage(&self) -> Option<f64> {
        self.original_price.and_then(|op| {
            if op.amount_cents > self.price.amount_cents {
                let savings = op.amount_cents - self.price.amount_cents;
                Some((savings as f64 / op.amount_cents as f64) * 100.0)
            } else {
                None
            }
        })
    }

    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Size used when the shopper doesn't pick one.
    pub fn default_size(&self) -> Option<&str> {
        self.sizes.first().map(String::as_str)
    }

    /// Color used when the shopper doesn't pick one.
    pub fn default_color(&self) -> Option<&str> {
        self.colors.first().map(String::as_str)
    }

    pub fn has_size(&self, size: &str) -> bool {
        self.sizes.iter().any(|s| s == size)
    }

    pub fn has_color(&self, color: &str) -> bool {
        self.colors.iter().any(|c| c == color)
    }
}

fn is_url_safe(slug: &str) -> bool {
    slug.chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~'))
}
