//! Cart and line item types.

use std::fmt;
use std::sync::Arc;

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::Serialize;

/// Maximum quantity allowed per line item. Larger quantities saturate here.
pub const MAX_QUANTITY_PER_ITEM: u32 = 9999;

/// Identity of a line item: one product in one size and one color.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LineKey {
    pub product_id: ProductId,
    pub size: String,
    pub color: String,
}

impl LineKey {
    pub fn new(product_id: ProductId, size: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            product_id,
            size: size.into(),
            color: color.into(),
        }
    }

    fn matches(&self, product_id: &ProductId, size: &str, color: &str) -> bool {
        &self.product_id == product_id && self.size == size && self.color == color
    }
}

impl fmt::Display for LineKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.product_id, self.size, self.color)
    }
}

/// A row in the cart.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LineItem {
    /// The catalog product, shared read-only.
    pub product: Arc<Product>,
    /// Always at least 1.
    pub quantity: u32,
    pub size: String,
    pub color: String,
}

impl LineItem {
    pub fn key(&self) -> LineKey {
        LineKey::new(self.product.id.clone(), self.size.clone(), self.color.clone())
    }

    /// Unit price times quantity.
    pub fn line_total(&self) -> Money {
        Money::new(
            self.product
                .price
                .amount_cents
                .saturating_mul(i64::from(self.quantity)),
            self.product.price.currency,
        )
    }

    fn is(&self, product_id: &ProductId, size: &str, color: &str) -> bool {
        &self.product.id == product_id && self.size == size && self.color == color
    }
}

/// What a successful cart mutation did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum CartEvent {
    /// `quantity` units were added, either as a new line or onto an existing
    /// one. This is the amount actually applied after the per-line cap.
    ItemAdded { key: LineKey, quantity: u32 },
    /// A line's quantity was set to `quantity`.
    QuantityChanged { key: LineKey, quantity: u32 },
    ItemRemoved { key: LineKey },
    Cleared { removed_lines: usize },
}

impl CartEvent {
    pub fn name(&self) -> &'static str {
        match self {
            CartEvent::ItemAdded { .. } => "item_added",
            CartEvent::QuantityChanged { .. } => "quantity_changed",
            CartEvent::ItemRemoved { .. } => "item_removed",
            CartEvent::Cleared { .. } => "cleared",
        }
    }
}

/// Why a cart mutation left the cart untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Ignored {
    ZeroQuantity,
    SizeRequired,
    UnknownSize(String),
    UnknownColor(String),
    CurrencyMismatch(Currency),
    NoSuchLine,
    AtQuantityLimit,
    SameQuantity,
    AlreadyEmpty,
}

impl fmt::Display for Ignored {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ignored::ZeroQuantity => write!(f, "quantity must be at least 1"),
            Ignored::SizeRequired => write!(f, "product has several sizes and none was chosen"),
            Ignored::UnknownSize(size) => write!(f, "size {size:?} is not offered"),
            Ignored::UnknownColor(color) => write!(f, "color {color:?} is not offered"),
            Ignored::CurrencyMismatch(c) => write!(f, "product is priced in {c}"),
            Ignored::NoSuchLine => write!(f, "no matching line item"),
            Ignored::AtQuantityLimit => {
                write!(f, "line already holds {MAX_QUANTITY_PER_ITEM} units")
            }
            Ignored::SameQuantity => write!(f, "line already has that quantity"),
            Ignored::AlreadyEmpty => write!(f, "cart is already empty"),
        }
    }
}

/// The line items of one shopping session.
///
/// Only [`CartStore`](crate::cart::CartStore) mutates a cart; everything
/// else sees it read-only. Totals are computed from the lines on every read.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Cart {
    items: Vec<LineItem>,
    currency: Currency,
}

impl Cart {
    pub fn new(currency: Currency) -> Self {
        Self {
            items: Vec::new(),
            currency,
        }
    }

    /// Line items in the order they were first added.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of all quantities.
    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Sum of price times quantity over all lines.
    pub fn total_price(&self) -> Money {
        let cents = self
            .items
            .iter()
            .fold(0_i64, |acc, item| acc.saturating_add(item.line_total().amount_cents));
        Money::new(cents, self.currency)
    }

    pub fn get(&self, product_id: &ProductId, size: &str, color: &str) -> Option<&LineItem> {
        self.items.iter().find(|i| i.is(product_id, size, color))
    }

    pub(crate) fn add(
        &mut self,
        product: &Arc<Product>,
        size: Option<&str>,
        color: &str,
        quantity: u32,
    ) -> Result<CartEvent, Ignored> {
        if quantity == 0 {
            return Err(Ignored::ZeroQuantity);
        }
        if product.price.currency != self.currency {
            return Err(Ignored::CurrencyMismatch(product.price.currency));
        }
        let size = match size {
            Some(size) if product.has_size(size) => size,
            Some(size) => return Err(Ignored::UnknownSize(size.to_string())),
            None if product.sizes.len() == 1 => product.sizes[0].as_str(),
            None => return Err(Ignored::SizeRequired),
        };
        if !product.has_color(color) {
            return Err(Ignored::UnknownColor(color.to_string()));
        }

        let key = LineKey::new(product.id.clone(), size, color);
        let added = if let Some(existing) = self
            .items
            .iter_mut()
            .find(|i| key.matches(&i.product.id, &i.size, &i.color))
        {
            let before = existing.quantity;
            existing.quantity = before.saturating_add(quantity).min(MAX_QUANTITY_PER_ITEM);
            existing.quantity - before
        } else {
            let quantity = quantity.min(MAX_QUANTITY_PER_ITEM);
            self.items.push(LineItem {
                product: Arc::clone(product),
                quantity,
                size: size.to_string(),
                color: color.to_string(),
            });
            quantity
        };
        if added == 0 {
            return Err(Ignored::AtQuantityLimit);
        }
        Ok(CartEvent::ItemAdded {
            key,
            quantity: added,
        })
    }

    pub(crate) fn set_quantity(
        &mut self,
        product_id: &ProductId,
        size: &str,
        color: &str,
        quantity: i64,
    ) -> Result<CartEvent, Ignored> {
        if quantity <= 0 {
            return self.remove(product_id, size, color);
        }
        let item = self
            .items
            .iter_mut()
            .find(|i| i.is(product_id, size, color))
            .ok_or(Ignored::NoSuchLine)?;
        let quantity = u32::try_from(quantity)
            .unwrap_or(MAX_QUANTITY_PER_ITEM)
            .min(MAX_QUANTITY_PER_ITEM);
        if item.quantity == quantity {
            return Err(Ignored::SameQuantity);
        }
        item.quantity = quantity;
        Ok(CartEvent::QuantityChanged {
            key: item.key(),
            quantity,
        })
    }

    pub(crate) fn remove(
        &mut self,
        product_id: &ProductId,
        size: &str,
        color: &str,
    ) -> Result<CartEvent, Ignored> {
        let index = self
            .items
            .iter()
            .position(|i| i.is(product_id, size, color))
            .ok_or(Ignored::NoSuchLine)?;
        let removed = self.items.remove(index);
        Ok(CartEvent::ItemRemoved { key: removed.key() })
    }

    pub(crate) fn clear(&mut self) -> Result<CartEvent, Ignored> {
        if self.items.is_empty() {
            return Err(Ignored::AlreadyEmpty);
        }
        let removed_lines = self.items.len();
        self.items.clear();
        Ok(CartEvent::Cleared { removed_lines })
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new(Currency::USD)
    }
}
