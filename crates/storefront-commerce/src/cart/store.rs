//! Session-scoped cart store with synchronous change notification.

use std::fmt;
use std::sync::Arc;

use crate::cart::cart::Ignored;
use crate::cart::{Cart, CartEvent, LineItem};
use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::{Currency, Money};

/// Callback invoked after every applied cart mutation.
pub type CartObserver = Box<dyn FnMut(&CartEvent, &Cart)>;

/// Handle returned by [`CartStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Owns the cart for one shopping session.
///
/// Construct one per session and pass it to whatever needs the cart. All
/// mutations go through the methods below; each returns `true` when the
/// cart changed and `false` when the input was ignored. Observers run
/// synchronously, in subscription order, before the mutating call returns,
/// and only when something changed.
pub struct CartStore {
    cart: Cart,
    observers: Vec<(SubscriptionId, CartObserver)>,
    next_subscription: u64,
}

impl CartStore {
    pub fn new(currency: Currency) -> Self {
        Self {
            cart: Cart::new(currency),
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Read-only view of the current cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn items(&self) -> &[LineItem] {
        self.cart.items()
    }

    pub fn total_items(&self) -> u64 {
        self.cart.total_items()
    }

    pub fn total_price(&self) -> Money {
        self.cart.total_price()
    }

    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    /// Add `quantity` units of a product in the given size and color.
    ///
    /// `size` may be `None` for single-size products. Adding a line that
    /// already exists increases its quantity.
    pub fn add_item(
        &mut self,
        product: &Arc<Product>,
        size: Option<&str>,
        color: &str,
        quantity: u32,
    ) -> bool {
        let outcome = self.cart.add(product, size, color, quantity);
        self.commit("add_item", outcome)
    }

    /// Add one unit in the product's first size and first color.
    pub fn quick_add(&mut self, product: &Arc<Product>) -> bool {
        let (Some(size), Some(color)) = (product.default_size(), product.default_color()) else {
            tracing::debug!(product = %product.id, "quick add ignored: product has no size or color");
            return false;
        };
        let outcome = self.cart.add(product, Some(size), color, 1);
        self.commit("quick_add", outcome)
    }

    /// Set a line's quantity. Zero or below removes the line.
    pub fn update_quantity(
        &mut self,
        product_id: &ProductId,
        size: &str,
        color: &str,
        new_quantity: i64,
    ) -> bool {
        let outcome = self.cart.set_quantity(product_id, size, color, new_quantity);
        self.commit("update_quantity", outcome)
    }

    pub fn remove_item(&mut self, product_id: &ProductId, size: &str, color: &str) -> bool {
        let outcome = self.cart.remove(product_id, size, color);
        self.commit("remove_item", outcome)
    }

    pub fn clear(&mut self) -> bool {
        let outcome = self.cart.clear();
        self.commit("clear", outcome)
    }

    /// Register an observer. It sees every later change until unsubscribed.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&CartEvent, &Cart) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() < before
    }

    pub fn subscriber_count(&self) -> usize {
        self.observers.len()
    }

    fn commit(&mut self, operation: &'static str, outcome: Result<CartEvent, Ignored>) -> bool {
        match outcome {
            Ok(event) => {
                tracing::trace!(
                    operation,
                    event = event.name(),
                    total_items = self.cart.total_items(),
                    "cart updated"
                );
                for (_, observer) in self.observers.iter_mut() {
                    observer(&event, &self.cart);
                }
                true
            }
            Err(reason) => {
                tracing::debug!(operation, %reason, "cart input ignored");
                false
            }
        }
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new(Currency::USD)
    }
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("cart", &self.cart)
            .field("observers", &self.observers.len())
            .finish()
    }
}
