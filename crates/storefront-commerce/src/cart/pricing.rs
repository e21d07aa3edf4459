//! Order summary shown beside the cart and at checkout.

use crate::cart::Cart;
use crate::checkout::ShippingMethod;
use crate::config::PricingConfig;
use crate::error::CommerceError;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Subtotal, shipping, tax and total for a cart.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct OrderSummary {
    /// Sum of quantities.
    pub item_count: u64,
    /// Sum of line totals.
    pub subtotal: Money,
    pub shipping: Money,
    pub tax: Money,
    /// subtotal + shipping + tax.
    pub total: Money,
    /// How much more unlocks free standard shipping, while below the threshold.
    pub amount_until_free_shipping: Option<Money>,
}

impl OrderSummary {
    /// Price a cart. An empty cart ships for free.
    pub fn for_cart(
        cart: &Cart,
        method: ShippingMethod,
        pricing: &PricingConfig,
    ) -> Result<Self, CommerceError> {
        let currency = cart.currency();
        let subtotal = cart.total_price();
        let shipping = if cart.is_empty() {
            Money::zero(currency)
        } else {
            method.cost(subtotal, pricing)
        };
        let tax = subtotal.percentage(pricing.tax_rate_percent);
        let total = subtotal
            .try_add(&shipping)
            .and_then(|m| m.try_add(&tax))
            .ok_or(CommerceError::Overflow)?;

        let threshold = pricing.free_shipping_threshold(currency);
        let amount_until_free_shipping = if subtotal.amount_cents < threshold.amount_cents {
            threshold.try_subtract(&subtotal)
        } else {
            None
        };

        Ok(Self {
            item_count: cart.total_items(),
            subtotal,
            shipping,
            tax,
            total,
            amount_until_free_shipping,
        })
    }

    pub fn has_free_shipping(&self) -> bool {
        self.shipping.is_zero()
    }

    /// Shipping line as the storefront prints it.
    pub fn shipping_label(&self) -> String {
        if self.has_free_shipping() {
            "Free".to_string()
        } else {
            self.shipping.display()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartStore;
    use crate::catalog::{Category, Product};
    use crate::money::Currency;
    use std::sync::Arc;

    fn store_with(price_cents: i64, quantity: u32) -> CartStore {
        let product = Arc::new(
            Product::new(
                "p",
                "Knit Beanie",
                "knit-beanie",
                Money::new(price_cents, Currency::USD),
                Category::Accessories,
                "hats",
            )
            .with_images(["/beanie.jpg"])
            .with_sizes(["One Size"])
            .with_colors(["Gray"]),
        );
        let mut store = CartStore::default();
        store.add_item(&product, None, "Gray", quantity);
        store
    }

    #[test]
    fn test_standard_shipping_below_threshold() {
        let store = store_with(2500, 2);
        let summary =
            OrderSummary::for_cart(store.cart(), ShippingMethod::Standard, &PricingConfig::default())
                .unwrap();

        assert_eq!(summary.item_count, 2);
        assert_eq!(summary.subtotal.amount_cents, 5000);
        assert_eq!(summary.shipping.amount_cents, 1000);
        assert_eq!(summary.tax.amount_cents, 400);
        assert_eq!(summary.total.amount_cents, 6400);
        assert_eq!(summary.amount_until_free_shipping.unwrap().amount_cents, 5000);
        assert_eq!(summary.shipping_label(), "$10.00");
    }

    #[test]
    fn test_free_standard_shipping_above_threshold() {
        let store = store_with(6000, 2);
        let summary =
            OrderSummary::for_cart(store.cart(), ShippingMethod::Standard, &PricingConfig::default())
                .unwrap();

        assert!(summary.has_free_shipping());
        assert_eq!(summary.shipping_label(), "Free");
        assert_eq!(summary.total.amount_cents, 12000 + 960);
        assert!(summary.amount_until_free_shipping.is_none());
    }

    #[test]
    fn test_exact_threshold_still_pays_standard_shipping() {
        let store = store_with(10000, 1);
        let summary =
            OrderSummary::for_cart(store.cart(), ShippingMethod::Standard, &PricingConfig::default())
                .unwrap();
        assert_eq!(summary.shipping.amount_cents, 1000);
        assert!(summary.amount_until_free_shipping.is_none());
    }

    #[test]
    fn test_express_always_charged() {
        let store = store_with(6000, 2);
        let summary =
            OrderSummary::for_cart(store.cart(), ShippingMethod::Express, &PricingConfig::default())
                .unwrap();
        assert_eq!(summary.shipping.amount_cents, 2000);
    }

    #[test]
    fn test_empty_cart() {
        let store = CartStore::default();
        let summary =
            OrderSummary::for_cart(store.cart(), ShippingMethod::Express, &PricingConfig::default())
                .unwrap();
        assert!(summary.total.is_zero());
        assert_eq!(summary.item_count, 0);
    }
}
