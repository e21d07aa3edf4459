//! Shipping method types.

use crate::config::PricingConfig;
use crate::error::CommerceError;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Shipping options offered at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ShippingMethod {
    #[default]
    Standard,
    Express,
}

impl ShippingMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShippingMethod::Standard => "standard",
            ShippingMethod::Express => "express",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ShippingMethod::Standard => "Standard Shipping",
            ShippingMethod::Express => "Express Shipping",
        }
    }

    /// Business-day delivery window, e.g. (5, 7).
    pub fn delivery_days(&self) -> (u8, u8) {
        match self {
            ShippingMethod::Standard => (5, 7),
            ShippingMethod::Express => (2, 3),
        }
    }

    pub fn delivery_estimate(&self) -> String {
        let (min, max) = self.delivery_days();
        format!("{}-{} business days", min, max)
    }

    /// Shipping charge for a subtotal. Standard is free above the threshold.
    pub fn cost(&self, subtotal: Money, pricing: &PricingConfig) -> Money {
        let currency = subtotal.currency;
        match self {
            ShippingMethod::Express => pricing.express_shipping(currency),
            ShippingMethod::Standard => {
                if subtotal.amount_cents > pricing.free_shipping_threshold(currency).amount_cents {
                    Money::zero(currency)
                } else {
                    pricing.standard_shipping(currency)
                }
            }
        }
    }
}

impl FromStr for ShippingMethod {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "standard" => Ok(ShippingMethod::Standard),
            "express" => Ok(ShippingMethod::Express),
            other => Err(CommerceError::ValidationError(format!(
                "unknown shipping method: {other}"
            ))),
        }
    }
}
