//! Local-only checkout: turn the cart into an order confirmation.

use crate::cart::{CartStore, OrderSummary};
use crate::checkout::{Order, OrderLine, OrderStatus, ShippingMethod};
use crate::config::PricingConfig;
use crate::error::CommerceError;
use crate::ids::OrderId;
use serde::{Deserialize, Serialize};

/// Contact and shipping address entered at checkout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactDetails {
    pub email: String,
    pub phone: String,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

impl Default for ContactDetails {
    fn default() -> Self {
        Self {
            email: String::new(),
            phone: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            address: String::new(),
            city: String::new(),
            state: String::new(),
            zip_code: String::new(),
            country: "United States".to_string(),
        }
    }
}

impl ContactDetails {
    /// Names of required fields that are blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let required = [
            ("email", &self.email),
            ("phone", &self.phone),
            ("first name", &self.first_name),
            ("last name", &self.last_name),
            ("address", &self.address),
            ("city", &self.city),
            ("state", &self.state),
            ("zip code", &self.zip_code),
        ];
        let mut missing: Vec<&'static str> = required
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| name)
            .collect();
        if !missing.contains(&"email") && !self.email.contains('@') {
            missing.push("valid email");
        }
        missing
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
    }
}

/// Place an order for everything in the cart.
///
/// On success the cart is cleared, so subscribers see a `Cleared` event.
/// No payment is taken and the order is not stored anywhere.
pub fn place_order(
    store: &mut CartStore,
    contact: ContactDetails,
    shipping_method: ShippingMethod,
    pricing: &PricingConfig,
) -> Result<Order, CommerceError> {
    if store.is_empty() {
        return Err(CommerceError::EmptyCart);
    }

    let missing = contact.missing_fields();
    if !missing.is_empty() {
        return Err(CommerceError::CheckoutIncomplete(missing.join(", ")));
    }

    let summary = OrderSummary::for_cart(store.cart(), shipping_method, pricing)?;
    let lines: Vec<OrderLine> = store.items().iter().map(OrderLine::from).collect();

    let order = Order {
        id: OrderId::generate(),
        placed_at: chrono::Utc::now(),
        status: OrderStatus::Processing,
        contact,
        shipping_method,
        lines,
        summary,
    };

    store.clear();

    tracing::info!(
        order_id = %order.id,
        items = order.item_count(),
        total = %order.total(),
        shipping = shipping_method.as_str(),
        "order placed"
    );

    Ok(order)
}
