use std::sync::Arc;

use storefront_cart::{
    CartCommand, CartEntry, CartEvent, CartStore, CartViewModel, CommandRequest, DomainError,
    Money, PriceFormat,
};

fn product(sku: &str, name: &str, price: &str) -> CartEntry {
    CartEntry::from_catalog(sku, name, price).expect("valid catalog row")
}

fn assert_totals(view: &CartViewModel, count: u64, cents: u64) {
    assert_eq!(view.total_item_count, count, "item count");
    assert_eq!(view.total_price_raw, Money::from_cents(cents), "raw total");
}

#[test]
fn shopper_session_from_first_add_to_order_placement() {
    storefront_observability::init();

    let store = CartStore::new(PriceFormat::default());
    let events = store.subscribe();

    let x = product("item0002", "Widget", "10.00");
    let y = product("item0001", "Gadget", "5.00");

    store.dispatch(CartCommand::Add(x.clone())).unwrap();
    store.dispatch(CartCommand::Add(x.clone())).unwrap();
    let view = store.dispatch(CartCommand::Add(y.clone())).unwrap();
    assert_totals(&view, 3, 2500);
    assert_eq!(view.total_price, "$25.00");
    let order: Vec<&str> = view.ordered_entries.iter().map(|e| e.sku.as_str()).collect();
    assert_eq!(order, vec!["item0001", "item0002"]);

    let view = store
        .dispatch(CartCommand::SetQuantity(x.with_quantity(5)))
        .unwrap();
    assert_totals(&view, 6, 5500);

    let view = store.dispatch(CartCommand::Remove(y.clone())).unwrap();
    assert_totals(&view, 5, 5000);
    assert!(!view.contains(&y.sku));

    let view = store.dispatch(CartCommand::Submit).unwrap();
    assert_totals(&view, 0, 0);
    assert_eq!(view.total_price, "$0.00");
    assert!(!view.can_submit());

    let published = events.drain();
    assert_eq!(published.len(), 6);
    match published.last().map(|e| e.payload()) {
        Some(CartEvent::OrderSubmitted(order)) => {
            assert_eq!(order.total_item_count, 5);
            assert_eq!(order.total, Money::from_cents(5000));
            assert_eq!(order.entries, vec![x.with_quantity(5)]);
        }
        other => panic!("Expected OrderSubmitted, got {other:?}"),
    }

    // The cart keeps accepting commands after an order.
    let view = store.dispatch(CartCommand::Add(y)).unwrap();
    assert_totals(&view, 1, 500);
}

#[test]
fn json_requests_from_the_presentation_layer() {
    let store: CartStore = CartStore::default();

    let add = r#"{"kind":"ADD","payload":{"sku":"item0007","name":"Lamp","unit_price":1999,"quantity":1}}"#;
    store
        .dispatch_request(CommandRequest::from_json(add).unwrap())
        .unwrap();
    store
        .dispatch_request(CommandRequest::from_json(add).unwrap())
        .unwrap();

    let qty = r#"{"kind":"QUANTITY","payload":{"sku":"item0007","name":"Lamp","unit_price":1999,"quantity":4}}"#;
    let view = store
        .dispatch_request(CommandRequest::from_json(qty).unwrap())
        .unwrap();
    assert_totals(&view, 4, 7996);
    assert_eq!(view.total_price, "$79.96");

    let err = store
        .dispatch_request(CommandRequest::from_json(r#"{"kind":"REMOVE"}"#).unwrap())
        .unwrap_err();
    assert!(matches!(err, DomainError::InvalidCommand(_)));

    let err = store
        .dispatch_request(CommandRequest::from_json(r#"{"kind":"WISHLIST"}"#).unwrap())
        .unwrap_err();
    assert!(matches!(err, DomainError::UnknownCommand(_)));

    let snapshot = serde_json::to_value(store.snapshot().as_ref()).unwrap();
    assert_eq!(snapshot["total_item_count"], 4);
    assert_eq!(snapshot["total_price"], "$79.96");
    assert_eq!(snapshot["total_price_raw"], 7996);
    assert_eq!(snapshot["ordered_entries"][0]["sku"], "item0007");
}

#[test]
fn shared_store_serialises_concurrent_writers() {
    let store: Arc<CartStore> = Arc::new(CartStore::default());
    let skus = ["item0001", "item0002", "item0003"];

    let handles: Vec<_> = skus
        .iter()
        .map(|sku| {
            let store = Arc::clone(&store);
            let entry = product(sku, sku, "2.00");
            std::thread::spawn(move || {
                for _ in 0..10 {
                    store.dispatch(CartCommand::Add(entry.clone())).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let view = store.snapshot();
    assert_totals(&view, 30, 6000);
    assert!(view.ordered_entries.iter().all(|e| e.quantity == 10));
}
