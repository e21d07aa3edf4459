//! Cart invariants over random sequences of store operations.

use std::cell::Cell;
use std::collections::HashSet;
use std::rc::Rc;
use std::sync::Arc;

use proptest::prelude::*;
use storefront_commerce::prelude::*;

const SIZES: [&str; 3] = ["S", "M", "XXL"];
const COLORS: [&str; 3] = ["Black", "White", "Chartreuse"];

fn products() -> Vec<Arc<Product>> {
    vec![
        Arc::new(
            Product::new(
                "tee",
                "Pocket Tee",
                "pocket-tee",
                Money::new(2_499, Currency::USD),
                Category::Men,
                "t-shirts",
            )
            .with_images(["/tee.jpg"])
            .with_sizes(["S", "M"])
            .with_colors(["Black", "White"]),
        ),
        Arc::new(
            Product::new(
                "scarf",
                "Wool Scarf",
                "wool-scarf",
                Money::new(3_950, Currency::USD),
                Category::Accessories,
                "scarves",
            )
            .with_images(["/scarf.jpg"])
            .with_sizes(["M"])
            .with_colors(["White"]),
        ),
    ]
}

#[derive(Debug, Clone)]
enum Op {
    Add {
        product: usize,
        size: Option<usize>,
        color: usize,
        quantity: u32,
    },
    QuickAdd {
        product: usize,
    },
    Update {
        product: usize,
        size: usize,
        color: usize,
        quantity: i64,
    },
    Remove {
        product: usize,
        size: usize,
        color: usize,
    },
    Clear,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0..2usize, prop::option::of(0..3usize), 0..3usize, 0..20u32).prop_map(
            |(product, size, color, quantity)| Op::Add {
                product,
                size,
                color,
                quantity,
            }
        ),
        1 => (0..2usize).prop_map(|product| Op::QuickAdd { product }),
        2 => (0..2usize, 0..3usize, 0..3usize, -3..20i64).prop_map(
            |(product, size, color, quantity)| Op::Update {
                product,
                size,
                color,
                quantity,
            }
        ),
        1 => (0..2usize, 0..3usize, 0..3usize).prop_map(|(product, size, color)| Op::Remove {
            product,
            size,
            color,
        }),
        1 => Just(Op::Clear),
    ]
}

fn apply(store: &mut CartStore, products: &[Arc<Product>], op: &Op) -> bool {
    match *op {
        Op::Add {
            product,
            size,
            color,
            quantity,
        } => store.add_item(
            &products[product],
            size.map(|s| SIZES[s]),
            COLORS[color],
            quantity,
        ),
        Op::QuickAdd { product } => store.quick_add(&products[product]),
        Op::Update {
            product,
            size,
            color,
            quantity,
        } => store.update_quantity(&products[product].id, SIZES[size], COLORS[color], quantity),
        Op::Remove {
            product,
            size,
            color,
        } => store.remove_item(&products[product].id, SIZES[size], COLORS[color]),
        Op::Clear => store.clear(),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Line keys stay unique, quantities stay in range and totals always
    /// equal the sums over the lines.
    #[test]
    fn cart_invariants_hold_for_any_sequence(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let products = products();
        let mut store = CartStore::new(Currency::USD);
        let notified = Rc::new(Cell::new(0usize));
        let counter = Rc::clone(&notified);
        store.subscribe(move |_, _| counter.set(counter.get() + 1));

        let mut applied = 0usize;
        for op in &ops {
            let before = store.cart().clone();
            if apply(&mut store, &products, op) {
                applied += 1;
            } else {
                prop_assert_eq!(store.cart(), &before);
            }

            let mut keys = HashSet::new();
            for item in store.items() {
                prop_assert!(keys.insert(item.key()));
                prop_assert!(item.quantity >= 1);
                prop_assert!(item.quantity <= MAX_QUANTITY_PER_ITEM);
                prop_assert!(item.product.has_size(&item.size));
                prop_assert!(item.product.has_color(&item.color));
            }

            let items: u64 = store.items().iter().map(|i| u64::from(i.quantity)).sum();
            let cents: i64 = store
                .items()
                .iter()
                .map(|i| i.product.price.amount_cents * i64::from(i.quantity))
                .sum();
            prop_assert_eq!(store.total_items(), items);
            prop_assert_eq!(store.total_price(), Money::new(cents, Currency::USD));
        }

        prop_assert_eq!(notified.get(), applied);
    }

    /// Adding one line repeatedly leaves a single line holding the capped sum.
    #[test]
    fn repeated_adds_merge_into_one_line(quantities in prop::collection::vec(1..5_000u32, 1..10)) {
        let products = products();
        let mut store = CartStore::new(Currency::USD);
        for &quantity in &quantities {
            store.add_item(&products[0], Some("M"), "Black", quantity);
        }

        let expected = quantities
            .iter()
            .map(|&q| u64::from(q))
            .sum::<u64>()
            .min(u64::from(MAX_QUANTITY_PER_ITEM));
        prop_assert_eq!(store.items().len(), 1);
        prop_assert_eq!(store.total_items(), expected);
    }
}
