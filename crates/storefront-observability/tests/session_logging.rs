//! Logging a shopping session configured from a storefront config file.

use std::sync::Arc;

use storefront_commerce::prelude::*;
use storefront_observability::{cart_logger, LogSink, MemoryLog, SessionId, StructuredLogger};

#[test]
fn configured_logger_records_cart_activity() {
    let config = StorefrontConfig::from_toml_str(
        r#"
        [logging]
        level = "info"
        format = "human"
        "#,
    )
    .unwrap();

    let memory = MemoryLog::new();
    let logger = StructuredLogger::from_config(&config.logging, SessionId::from_string("s-77"))
        .unwrap()
        .with_page("/product/linen-shirt")
        .with_sink(LogSink::Memory(memory.clone()));

    let shirt = Arc::new(
        Product::new(
            "ls-1",
            "Linen Shirt",
            "linen-shirt",
            Money::from_units(70, Currency::USD),
            Category::Men,
            "shirts",
        )
        .with_images(["/linen.jpg"])
        .with_sizes(["L"])
        .with_colors(["Sand"]),
    );

    let mut store = CartStore::new(config.store.currency);
    let subscription = store.subscribe(cart_logger(logger));
    assert!(store.quick_add(&shirt));
    assert!(store.unsubscribe(subscription));
    assert!(store.quick_add(&shirt));

    let lines = memory.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("[INFO] cart updated session=s-77 page=/product/linen-shirt"));
    assert!(lines[0].contains("event=item_added"));
    assert!(lines[0].contains("total_price=$70.00"));
}
