//! Storefront configuration.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::CommerceError;
use crate::money::{Currency, Money};

/// Top-level configuration file.
///
/// Every section is optional; missing values fall back to the storefront
/// defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StorefrontConfig {
    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub pricing: PricingConfig,

    #[serde(default)]
    pub filters: FilterConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StorefrontConfig {
    /// Load config from a file. `.json` files are parsed as JSON, anything
    /// else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))?
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))?
        };

        config
            .validate()
            .with_context(|| format!("Invalid config: {}", path.display()))?;
        Ok(config)
    }

    /// Parse TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, CommerceError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), CommerceError> {
        let pricing = &self.pricing;
        let amounts = [
            ("pricing.free_shipping_threshold", pricing.free_shipping_threshold),
            ("pricing.standard_shipping", pricing.standard_shipping),
            ("pricing.express_shipping", pricing.express_shipping),
            ("pricing.tax_rate_percent", pricing.tax_rate_percent),
            ("filters.default_price_max", self.filters.default_price_max),
        ];
        for (name, value) in amounts {
            if !value.is_finite() || value < 0.0 {
                return Err(CommerceError::ConfigError(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Store-wide settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoreConfig {
    /// Currency every catalog price is expressed in.
    #[serde(default)]
    pub currency: Currency,

    /// How many related products a product page lists.
    #[serde(default = "default_related_limit")]
    pub related_products_limit: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            currency: Currency::default(),
            related_products_limit: default_related_limit(),
        }
    }
}

fn default_related_limit() -> usize {
    crate::catalog::RELATED_PRODUCTS_LIMIT
}

/// Shipping and tax rates, as decimal amounts in the store currency.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricingConfig {
    /// Standard shipping is free for subtotals above this.
    #[serde(default = "default_free_shipping_threshold")]
    pub free_shipping_threshold: f64,

    #[serde(default = "default_standard_shipping")]
    pub standard_shipping: f64,

    #[serde(default = "default_express_shipping")]
    pub express_shipping: f64,

    #[serde(default = "default_tax_rate_percent")]
    pub tax_rate_percent: f64,
}

impl PricingConfig {
    pub fn free_shipping_threshold(&self, currency: Currency) -> Money {
        Money::from_decimal(self.free_shipping_threshold, currency)
    }

    pub fn standard_shipping(&self, currency: Currency) -> Money {
        Money::from_decimal(self.standard_shipping, currency)
    }

    pub fn express_shipping(&self, currency: Currency) -> Money {
        Money::from_decimal(self.express_shipping, currency)
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            free_shipping_threshold: default_free_shipping_threshold(),
            standard_shipping: default_standard_shipping(),
            express_shipping: default_express_shipping(),
            tax_rate_percent: default_tax_rate_percent(),
        }
    }
}

fn default_free_shipping_threshold() -> f64 {
    100.0
}

fn default_standard_shipping() -> f64 {
    10.0
}

fn default_express_shipping() -> f64 {
    20.0
}

fn default_tax_rate_percent() -> f64 {
    8.0
}

/// Filter panel settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FilterConfig {
    /// Upper end of the price slider.
    #[serde(default = "default_price_max")]
    pub default_price_max: f64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            default_price_max: default_price_max(),
        }
    }
}

fn default_price_max() -> f64 {
    500.0
}

/// Log output settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Minimum level: trace, debug, info, warn or error.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// `json` or `human`.
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}
