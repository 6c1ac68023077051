use proptest::prelude::*;
use relay_core::payload::PayloadBuilder;

#[derive(Debug, Clone)]
enum Put {
    Str(String, Option<String>),
    Int(String, Option<i64>),
    Float(String, Option<f64>),
}

fn key_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["a", "b", "c", "value", "currency"]).prop_map(String::from)
}

fn put_strategy() -> impl Strategy<Value = Put> {
    prop_oneof![
        (key_strategy(), prop::option::of("[a-z]{0,8}")).prop_map(|(k, v)| Put::Str(k, v)),
        (key_strategy(), prop::option::of(any::<i64>())).prop_map(|(k, v)| Put::Int(k, v)),
        (key_strategy(), prop::option::of(-1e6f64..1e6)).prop_map(|(k, v)| Put::Float(k, v)),
    ]
}

fn apply(puts: &[Put]) -> relay_core::Payload {
    puts.iter()
        .fold(PayloadBuilder::new(), |builder, put| match put {
            Put::Str(k, v) => builder.put_string(k, v.as_deref()),
            Put::Int(k, v) => builder.put_int(k, *v),
            Put::Float(k, v) => builder.put_float(k, *v),
        })
        .build()
}

proptest! {
    #[test]
    fn prop_keys_present_iff_some_value_supplied(puts in prop::collection::vec(put_strategy(), 0..20)) {
        let payload = apply(&puts);
        for key in ["a", "b", "c", "value", "currency"] {
            let supplied = puts.iter().any(|put| match put {
                Put::Str(k, v) => k == key && v.is_some(),
                Put::Int(k, v) => k == key && v.is_some(),
                Put::Float(k, v) => k == key && v.is_some(),
            });
            prop_assert_eq!(payload.contains_key(key), supplied);
        }
    }

    #[test]
    fn prop_keys_are_unique(puts in prop::collection::vec(put_strategy(), 0..20)) {
        let payload = apply(&puts);
        let mut keys: Vec<_> = payload.keys().collect();
        let before = keys.len();
        keys.sort_unstable();
        keys.dedup();
        prop_assert_eq!(keys.len(), before);
    }

    #[test]
    fn prop_last_present_write_wins(values in prop::collection::vec(prop::option::of(any::<i64>()), 1..10)) {
        let payload = values
            .iter()
            .fold(PayloadBuilder::new(), |b, v| b.put_int("k", *v))
            .build();
        let expected = values.iter().rev().find_map(|v| *v);
        prop_assert_eq!(payload.get_int("k"), expected);
    }
}
