//! Checkout module.
//!
//! Shipping options, contact details and the local-only order placement
//! that empties the cart.

mod flow;
mod order;
mod shipping;

pub use flow::{place_order, ContactDetails};
pub use order::{Order, OrderLine, OrderStatus};
pub use shipping::ShippingMethod;
