//! Product catalog module.
//!
//! Contains the product, category and review types and the immutable
//! catalog they are served from.

mod catalog;
mod category;
mod product;
mod review;

pub use catalog::{Catalog, RELATED_PRODUCTS_LIMIT};
pub use category::Category;
pub use product::{Product, MAX_RATING};
pub use review::{Review, ReviewSummary};
