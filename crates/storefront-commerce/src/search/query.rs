//! Catalog query engine: filter, then stable sort.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::search::FilterSpec;
use serde::{Deserialize, Serialize};

/// Sort options for the product grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Featured products first.
    #[default]
    Featured,
    /// New arrivals first.
    Newest,
    /// Sort by price, low to high.
    PriceAscending,
    /// Sort by price, high to low.
    PriceDescending,
    /// Sort by highest rated.
    RatingDescending,
}

impl SortKey {
    /// Every key in the order the sort menu lists them.
    pub const ALL: [SortKey; 5] = [
        SortKey::Featured,
        SortKey::Newest,
        SortKey::PriceAscending,
        SortKey::PriceDescending,
        SortKey::RatingDescending,
    ];

    /// The value the sort menu submits.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Featured => "featured",
            SortKey::Newest => "newest",
            SortKey::PriceAscending => "price-low",
            SortKey::PriceDescending => "price-high",
            SortKey::RatingDescending => "rating",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::Featured => "Featured",
            SortKey::Newest => "Newest",
            SortKey::PriceAscending => "Price: Low to High",
            SortKey::PriceDescending => "Price: High to Low",
            SortKey::RatingDescending => "Highest Rated",
        }
    }

    /// Ordering of two products under this key. Equal products keep their
    /// relative order because the sort is stable.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            // `true` before `false`
            SortKey::Featured => b.featured.cmp(&a.featured),
            SortKey::Newest => b.new.cmp(&a.new),
            SortKey::PriceAscending => a.price.amount_cents.cmp(&b.price.amount_cents),
            SortKey::PriceDescending => b.price.amount_cents.cmp(&a.price.amount_cents),
            SortKey::RatingDescending => b.rating.total_cmp(&a.rating),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "featured" => Ok(SortKey::Featured),
            "newest" => Ok(SortKey::Newest),
            "price-low" | "price-ascending" => Ok(SortKey::PriceAscending),
            "price-high" | "price-descending" => Ok(SortKey::PriceDescending),
            "rating" | "rating-descending" => Ok(SortKey::RatingDescending),
            _ => Err(CommerceError::InvalidSortKey(s.to_string())),
        }
    }
}

/// Filter `products` by `filter` and order the survivors by `sort`.
///
/// Works on owned products or shared handles such as `Arc<Product>`; the
/// matching elements are cloned into the result. Pure: the same inputs
/// always give the same sequence, and a filter matching nothing gives an
/// empty vector.
pub fn query<P>(products: &[P], filter: &FilterSpec, sort: SortKey) -> Vec<P>
where
    P: Borrow<Product> + Clone,
{
    let mut matched: Vec<P> = products
        .iter()
        .filter(|p| filter.matches(Borrow::<Product>::borrow(*p)))
        .cloned()
        .collect();
    matched.sort_by(|a, b| {
        sort.compare(Borrow::<Product>::borrow(a), Borrow::<Product>::borrow(b))
    });
    matched
}
