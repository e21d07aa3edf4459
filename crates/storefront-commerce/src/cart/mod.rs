//! Shopping cart module.
//!
//! Contains the cart, its line items, the session cart store and the
//! order summary derived from a cart.

mod cart;
mod pricing;
mod store;

pub use cart::{Cart, CartEvent, LineItem, LineKey, MAX_QUANTITY_PER_ITEM};
pub use pricing::OrderSummary;
pub use store::{CartObserver, CartStore, SubscriptionId};
