//! The immutable product catalog.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::catalog::{Category, Product, Review, ReviewSummary};
use crate::error::CommerceError;
use crate::ids::{ProductId, ReviewId};
use crate::money::{Currency, Money};

/// Number of related products the product page shows.
pub const RELATED_PRODUCTS_LIMIT: usize = 4;

/// Products and reviews, validated and indexed once at startup.
///
/// Products are handed out as `Arc<Product>` so that cart line items can
/// share them without copying.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Arc<Product>>,
    reviews: Vec<Review>,
    by_id: HashMap<ProductId, usize>,
    by_slug: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting invalid products, duplicate ids or slugs,
    /// products priced in more than one currency, and reviews that point at
    /// unknown products.
    pub fn new(products: Vec<Product>, reviews: Vec<Review>) -> Result<Self, CommerceError> {
        let mut by_id = HashMap::with_capacity(products.len());
        let mut by_slug = HashMap::with_capacity(products.len());

        let currency = products.first().map(|p| p.price.currency);

        for (index, product) in products.iter().enumerate() {
            product.validate()?;
            if let Some(expected) = currency {
                if product.price.currency != expected {
                    return Err(CommerceError::CurrencyMismatch {
                        product: product.id.to_string(),
                        expected,
                        got: product.price.currency,
                    });
                }
            }
            if by_id.insert(product.id.clone(), index).is_some() {
                return Err(CommerceError::DuplicateProduct(product.id.to_string()));
            }
            if by_slug.insert(product.slug.clone(), index).is_some() {
                return Err(CommerceError::DuplicateSlug(product.slug.clone()));
            }
        }

        for review in &reviews {
            if !by_id.contains_key(&review.product_id) {
                return Err(CommerceError::ProductNotFound(review.product_id.to_string()));
            }
            if !(1..=5).contains(&review.rating) {
                return Err(CommerceError::ValidationError(format!(
                    "review {}: rating {} outside 1-5",
                    review.id, review.rating
                )));
            }
        }

        tracing::debug!(
            products = products.len(),
            reviews = reviews.len(),
            "catalog loaded"
        );

        Ok(Self {
            products: products.into_iter().map(Arc::new).collect(),
            reviews,
            by_id,
            by_slug,
        })
    }

    /// Load a catalog document of the form `{"products": [...], "reviews": [...]}`.
    ///
    /// Field names are camelCase and prices are decimal amounts in `currency`.
    pub fn from_json(json: &str, currency: Currency) -> Result<Self, CommerceError> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        let products = document
            .products
            .into_iter()
            .map(|record| record.into_product(currency))
            .collect();
        let reviews = document
            .reviews
            .into_iter()
            .map(ReviewRecord::into_review)
            .collect();
        Self::new(products, reviews)
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Arc<Product>] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn product(&self, id: &ProductId) -> Option<&Arc<Product>> {
        self.by_id.get(id).map(|&i| &self.products[i])
    }

    pub fn by_slug(&self, slug: &str) -> Option<&Arc<Product>> {
        self.by_slug.get(slug).map(|&i| &self.products[i])
    }

    /// Products in a department, or everything for `None`.
    pub fn in_category(&self, category: Option<Category>) -> Vec<Arc<Product>> {
        self.products
            .iter()
            .filter(|p| category.map_or(true, |c| p.category == c))
            .cloned()
            .collect()
    }

    pub fn featured(&self) -> Vec<Arc<Product>> {
        self.products.iter().filter(|p| p.featured).cloned().collect()
    }

    pub fn new_arrivals(&self) -> Vec<Arc<Product>> {
        self.products.iter().filter(|p| p.new).cloned().collect()
    }

    /// Other products from the same department, in catalog order.
    pub fn related(&self, product: &Product, limit: usize) -> Vec<Arc<Product>> {
        self.products
            .iter()
            .filter(|p| p.category == product.category && p.id != product.id)
            .take(limit)
            .cloned()
            .collect()
    }

    pub fn reviews_for(&self, product_id: &ProductId) -> Vec<&Review> {
        self.reviews
            .iter()
            .filter(|r| &r.product_id == product_id)
            .collect()
    }

    pub fn review_summary(&self, product_id: &ProductId) -> ReviewSummary {
        ReviewSummary::from_reviews(self.reviews.iter().filter(|r| &r.product_id == product_id))
    }
}

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    products: Vec<ProductRecord>,
    #[serde(default)]
    reviews: Vec<ReviewRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductRecord {
    id: String,
    name: String,
    slug: String,
    #[serde(default)]
    description: String,
    price: f64,
    #[serde(default)]
    original_price: Option<f64>,
    category: Category,
    subcategory: String,
    images: Vec<String>,
    sizes: Vec<String>,
    colors: Vec<String>,
    in_stock: bool,
    #[serde(default)]
    featured: bool,
    #[serde(default)]
    new: bool,
    rating: f64,
    review_count: u32,
}

impl ProductRecord {
    fn into_product(self, currency: Currency) -> Product {
        Product {
            id: ProductId::new(self.id),
            name: self.name,
            slug: self.slug,
            description: self.description,
            price: Money::from_decimal(self.price, currency),
            original_price: self.original_price.map(|p| Money::from_decimal(p, currency)),
            category: self.category,
            subcategory: self.subcategory,
            images: self.images,
            sizes: self.sizes,
            colors: self.colors,
            in_stock: self.in_stock,
            featured: self.featured,
            new: self.new,
            rating: self.rating,
            review_count: self.review_count,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReviewRecord {
    id: String,
    product_id: String,
    user_name: String,
    rating: u8,
    comment: String,
    date: NaiveDate,
    #[serde(default)]
    verified: bool,
}

impl ReviewRecord {
    fn into_review(self) -> Review {
        Review {
            id: ReviewId::new(self.id),
            product_id: ProductId::new(self.product_id),
            user_name: self.user_name,
            rating: self.rating,
            comment: self.comment,
            date: self.date,
            verified: self.verified,
        }
    }
}
