//! Cart change logging.

use storefront_commerce::cart::{Cart, CartEvent};

use crate::{LogLevel, StructuredLogger};

/// A cart observer that writes one info entry per applied change.
///
/// ```rust,ignore
/// store.subscribe(cart_logger(logger.clone()));
/// ```
pub fn cart_logger(logger: StructuredLogger) -> impl FnMut(&CartEvent, &Cart) + 'static {
    move |event, cart| {
        let mut entry = logger
            .entry(LogLevel::Info, "cart updated")
            .field("event", event.name());

        entry = match event {
            CartEvent::ItemAdded { key, quantity } | CartEvent::QuantityChanged { key, quantity } => {
                entry
                    .field("line", key.to_string())
                    .field_u64("quantity", u64::from(*quantity))
            }
            CartEvent::ItemRemoved { key } => entry.field("line", key.to_string()),
            CartEvent::Cleared { removed_lines } => {
                entry.field_u64("removed_lines", *removed_lines as u64)
            }
        };

        entry
            .field_u64("total_items", cart.total_items())
            .field("total_price", cart.total_price().display())
            .emit();
    }
}
