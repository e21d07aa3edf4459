//! Search module.
//!
//! The filter specification, sort keys and the query engine that applies
//! them to a product list, plus the option lists a filter panel shows.

mod filter;
mod query;
mod results;

pub use filter::{FilterSpec, PriceRange};
pub use query::{query, SortKey};
pub use results::{result_label, FacetValue, FilterOptions};
