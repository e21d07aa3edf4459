//! End-to-end storefront behavior: browse, filter, fill a cart, check out.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use storefront_commerce::prelude::*;

fn product_a() -> Arc<Product> {
    Arc::new(
        Product::new(
            "a",
            "Classic Oxford Shirt",
            "classic-oxford-shirt",
            Money::from_units(50, Currency::USD),
            Category::Men,
            "shirts",
        )
        .with_images(["/images/a.jpg"])
        .with_sizes(["M"])
        .with_colors(["Black", "White"])
        .with_rating(4.5, 12)
        .featured(),
    )
}

fn product_b() -> Arc<Product> {
    Arc::new(
        Product::new(
            "b",
            "Wrap Dress",
            "wrap-dress",
            Money::from_units(150, Currency::USD),
            Category::Women,
            "dresses",
        )
        .with_images(["/images/b.jpg"])
        .with_sizes(["S", "M"])
        .with_colors(["White", "Navy"])
        .with_rating(4.8, 30)
        .new_arrival(),
    )
}

fn catalog() -> Catalog {
    let products = vec![(*product_b()).clone(), (*product_a()).clone()];
    Catalog::new(products, Vec::new()).unwrap()
}

fn contact() -> ContactDetails {
    ContactDetails {
        email: "sam@example.com".to_string(),
        phone: "555-0100".to_string(),
        first_name: "Sam".to_string(),
        last_name: "Rivera".to_string(),
        address: "1 Main St".to_string(),
        city: "Springfield".to_string(),
        state: "IL".to_string(),
        zip_code: "62701".to_string(),
        ..ContactDetails::default()
    }
}

#[test]
fn price_ascending_orders_cheapest_first() {
    let catalog = catalog();
    let sorted = query(catalog.products(), &FilterSpec::new(), SortKey::PriceAscending);
    let ids: Vec<&str> = sorted.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);
}

#[test]
fn price_range_excludes_dearer_products() {
    let catalog = catalog();
    let filter = FilterSpec::new().with_price_range(PriceRange::units(0, 100, Currency::USD));
    let sorted = query(catalog.products(), &filter, SortKey::PriceAscending);
    let ids: Vec<&str> = sorted.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["a"]);
    assert_eq!(result_label(sorted.len()), "Showing 1 product");
}

#[test]
fn query_is_repeatable_and_never_adds_products() {
    let catalog = catalog();
    let filter = FilterSpec::new().with_size("M");
    for key in SortKey::ALL {
        let first = query(catalog.products(), &filter, key);
        let second = query(catalog.products(), &filter, key);
        assert_eq!(first, second);
        assert!(first.len() <= catalog.len());
        assert!(first.iter().all(|p| filter.matches(p)));
    }
}

#[test]
fn category_route_narrows_results() {
    let catalog = catalog();
    let category = Category::from_route("women").unwrap();
    let filter = FilterSpec {
        category,
        ..FilterSpec::new()
    };
    let found = query(catalog.products(), &filter, SortKey::Featured);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].slug, "wrap-dress");

    assert_eq!(Category::from_route("all").unwrap(), None);
}

#[test]
fn adding_same_line_twice_merges_quantity() {
    let a = product_a();
    let mut store = CartStore::new(Currency::USD);
    assert!(store.add_item(&a, Some("M"), "Black", 2));
    assert!(store.add_item(&a, Some("M"), "Black", 3));

    assert_eq!(store.items().len(), 1);
    assert_eq!(store.items()[0].quantity, 5);
    assert_eq!(store.total_items(), 5);
    assert_eq!(store.total_price(), Money::from_units(250, Currency::USD));
}

#[test]
fn removing_one_product_keeps_the_other() {
    let (a, b) = (product_a(), product_b());
    let mut store = CartStore::new(Currency::USD);
    store.add_item(&a, Some("M"), "Black", 1);
    store.add_item(&b, Some("S"), "White", 1);

    assert!(store.remove_item(&a.id, "M", "Black"));
    assert_eq!(store.items().len(), 1);
    assert_eq!(store.items()[0].product.id, b.id);
}

#[test]
fn different_variants_are_separate_lines() {
    let a = product_a();
    let mut store = CartStore::new(Currency::USD);
    store.add_item(&a, Some("M"), "Black", 1);
    store.add_item(&a, Some("M"), "White", 1);
    assert_eq!(store.items().len(), 2);
    assert_eq!(store.total_items(), 2);
}

#[test]
fn totals_track_every_mutation() {
    let (a, b) = (product_a(), product_b());
    let mut store = CartStore::new(Currency::USD);
    store.add_item(&a, None, "White", 1);
    store.add_item(&b, Some("M"), "Navy", 2);
    store.update_quantity(&a.id, "M", "White", 4);

    let expected: i64 = store
        .items()
        .iter()
        .map(|i| i.product.price.amount_cents * i64::from(i.quantity))
        .sum();
    assert_eq!(store.total_price().amount_cents, expected);
    assert_eq!(store.total_items(), 6);

    store.update_quantity(&b.id, "M", "Navy", 0);
    assert_eq!(store.total_items(), 4);
    assert_eq!(store.total_price(), Money::from_units(200, Currency::USD));
}

#[test]
fn observers_see_applied_changes_only() {
    let a = product_a();
    let mut store = CartStore::new(Currency::USD);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let recorder = Rc::clone(&seen);
    store.subscribe(move |event, cart| {
        recorder
            .borrow_mut()
            .push((event.name(), cart.total_items()));
    });

    store.add_item(&a, Some("M"), "Black", 2);
    store.add_item(&a, Some("XXL"), "Black", 1);
    store.remove_item(&a.id, "M", "Navy");
    store.clear();
    store.clear();

    assert_eq!(
        *seen.borrow(),
        vec![("item_added", 2), ("cleared", 0)]
    );
}

#[test]
fn checkout_places_order_and_empties_cart() {
    let (a, b) = (product_a(), product_b());
    let pricing = PricingConfig::default();
    let mut store = CartStore::new(Currency::USD);
    store.add_item(&a, Some("M"), "Black", 1);
    store.add_item(&b, Some("S"), "White", 1);

    let summary = OrderSummary::for_cart(store.cart(), ShippingMethod::Standard, &pricing).unwrap();
    assert!(summary.has_free_shipping());
    assert_eq!(summary.tax, Money::from_units(16, Currency::USD));
    assert_eq!(summary.total, Money::from_units(216, Currency::USD));

    let order = place_order(&mut store, contact(), ShippingMethod::Standard, &pricing).unwrap();
    assert_eq!(order.status, OrderStatus::Processing);
    assert_eq!(order.item_count(), 2);
    assert_eq!(order.total(), summary.total);
    assert!(store.is_empty());
}

#[test]
fn checkout_rejects_empty_cart_and_missing_details() {
    let pricing = PricingConfig::default();
    let mut store = CartStore::new(Currency::USD);
    let err = place_order(&mut store, contact(), ShippingMethod::Express, &pricing).unwrap_err();
    assert!(matches!(err, CommerceError::EmptyCart));

    store.add_item(&product_a(), Some("M"), "Black", 1);
    let incomplete = ContactDetails {
        city: String::new(),
        ..contact()
    };
    let err = place_order(&mut store, incomplete, ShippingMethod::Express, &pricing).unwrap_err();
    assert!(matches!(err, CommerceError::CheckoutIncomplete(_)));
    assert_eq!(store.total_items(), 1);
}

#[test]
fn filter_options_reflect_catalog() {
    let catalog = catalog();
    let options = FilterOptions::from_products(catalog.products().iter().map(|p| &**p));
    let sizes: Vec<&str> = options.sizes.iter().map(|f| f.value.as_str()).collect();
    assert_eq!(sizes, vec!["S", "M"]);
    assert_eq!(
        options.price_bounds,
        Some(PriceRange::units(50, 150, Currency::USD))
    );
}

#[test]
fn update_to_zero_removes_then_does_nothing() {
    let a = product_a();
    let mut store = CartStore::new(Currency::USD);
    store.add_item(&a, Some("M"), "Black", 3);

    assert!(store.update_quantity(&a.id, "M", "Black", 0));
    assert!(store.is_empty());
    assert!(!store.update_quantity(&a.id, "M", "Black", 0));
    assert!(store.is_empty());
}

#[test]
fn clear_resets_totals() {
    let (a, b) = (product_a(), product_b());
    let mut store = CartStore::new(Currency::USD);
    store.add_item(&a, Some("M"), "White", 2);
    store.add_item(&b, Some("S"), "Navy", 1);

    assert!(store.clear());
    assert!(store.items().is_empty());
    assert_eq!(store.total_items(), 0);
    assert_eq!(store.total_price(), Money::zero(Currency::USD));
}
