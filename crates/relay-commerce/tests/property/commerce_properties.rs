use proptest::prelude::*;
use relay_commerce::CommerceEventTranslator;
use relay_core::config::{CommerceConfig, ItemEmissionMode};
use relay_core::{CommerceEvent, Product, ProductAction, TransactionAttributes};
use relay_sanitize::NameValueSanitizer;

fn action_strategy() -> impl Strategy<Value = Option<ProductAction>> {
    prop::option::of(prop::sample::select(vec![
        ProductAction::AddToCart,
        ProductAction::AddToWishlist,
        ProductAction::Checkout,
        ProductAction::Purchase,
        ProductAction::Refund,
        ProductAction::RemoveFromCart,
        ProductAction::Click,
        ProductAction::Detail,
    ]))
}

fn product_strategy() -> impl Strategy<Value = Product> {
    (
        prop::option::of("[a-z0-9]{1,6}"),
        prop::option::of("[A-Za-z ]{1,10}"),
        0.0f64..20.0,
        0.0f64..500.0,
    )
        .prop_map(|(sku, name, quantity, unit_price)| Product {
            sku,
            name,
            category: None,
            quantity,
            unit_price,
        })
}

fn event_strategy() -> impl Strategy<Value = CommerceEvent> {
    (
        action_strategy(),
        prop::option::of(prop::collection::vec(product_strategy(), 0..5)),
        prop::option::of(prop::sample::select(vec!["USD", "EUR", "JPY"])),
    )
        .prop_map(|(action, products, currency)| CommerceEvent {
            action,
            products,
            currency: currency.map(String::from),
            ..CommerceEvent::default()
        })
}

fn order_strategy() -> impl Strategy<Value = CommerceEvent> {
    (
        prop::sample::select(vec![
            ProductAction::Checkout,
            ProductAction::Purchase,
            ProductAction::Refund,
        ]),
        prop::collection::vec(product_strategy(), 1..5),
        0.0f64..1000.0,
        0.0f64..100.0,
    )
        .prop_map(|(action, products, revenue, tax)| CommerceEvent {
            action: Some(action),
            products: Some(products),
            currency: Some("USD".to_string()),
            transaction_attributes: Some(TransactionAttributes {
                id: Some("T".to_string()),
                revenue: Some(revenue),
                tax: Some(tax),
                shipping: None,
                coupon_code: None,
            }),
            ..CommerceEvent::default()
        })
}

fn translator(mode: ItemEmissionMode) -> CommerceEventTranslator {
    CommerceEventTranslator::new(
        CommerceConfig {
            item_emission_mode: mode,
            ..CommerceConfig::default()
        },
        NameValueSanitizer::default(),
    )
}

proptest! {
    #[test]
    fn prop_aggregated_emits_at_most_one_event(event in event_strategy()) {
        let events = translator(ItemEmissionMode::Aggregated).translate(&event);
        let expected = usize::from(event.action.is_some());
        prop_assert_eq!(events.len(), expected);
        for e in &events {
            let items = e.payload.get_items("items").map(<[_]>::len);
            prop_assert_eq!(items, Some(event.products.as_ref().map_or(0, Vec::len)));
        }
    }

    #[test]
    fn prop_per_item_emits_one_event_per_product(event in event_strategy()) {
        let events = translator(ItemEmissionMode::PerItem).translate(&event);
        let expected = match event.action {
            None => 0,
            Some(_) => event.products.as_ref().map_or(0, Vec::len).max(1),
        };
        prop_assert_eq!(events.len(), expected);
    }

    #[test]
    fn prop_currency_always_present(event in event_strategy(), per_item in any::<bool>()) {
        let mode = if per_item { ItemEmissionMode::PerItem } else { ItemEmissionMode::Aggregated };
        let translation = translator(mode).translate_with_notices(&event);
        for e in &translation.events {
            let expected = event.currency.as_deref().unwrap_or("USD");
            prop_assert_eq!(e.payload.get_str("currency"), Some(expected));
        }
        let defaulted = event.action.is_some() && event.currency.is_none();
        prop_assert_eq!(translation.notices.len(), usize::from(defaulted));
    }

    #[test]
    fn prop_per_item_splits_order_without_inflating_it(event in order_strategy()) {
        let events = translator(ItemEmissionMode::PerItem).translate(&event);
        let value: f64 = events.iter().filter_map(|e| e.payload.get_float("value")).sum();
        let expected = event.products_value().unwrap_or_default();
        prop_assert!((value - expected).abs() <= 1e-6 * expected.max(1.0));

        let taxed = events.iter().filter(|e| e.payload.contains_key("tax")).count();
        prop_assert_eq!(taxed, 1);
    }
}
