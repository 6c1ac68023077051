use proptest::prelude::*;
use relay_core::config::SanitizationPolicy;
use relay_sanitize::NameValueSanitizer;

fn sanitizer() -> NameValueSanitizer {
    NameValueSanitizer::new(SanitizationPolicy::default())
}

fn starts_with_forbidden_prefix(s: &str) -> bool {
    SanitizationPolicy::default()
        .forbidden_prefixes
        .iter()
        .any(|p| s.starts_with(p.as_str()))
}

proptest! {
    #[test]
    fn prop_name_charset_and_shape(raw in ".{0,80}", is_event in any::<bool>()) {
        let s = sanitizer();
        let name = s.standardize_name(&raw, is_event);
        prop_assert!(name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'));
        prop_assert!(name.is_empty() || name.starts_with(|c: char| c.is_ascii_alphabetic()));
        prop_assert!(name.len() <= s.policy().name_max_len(is_event));
    }

    #[test]
    fn prop_name_idempotent(raw in "[a-zA-Z0-9_ !@#-]{0,60}", is_event in any::<bool>()) {
        let s = sanitizer();
        let once = s.standardize_name(&raw, is_event);
        prop_assume!(!starts_with_forbidden_prefix(&once));
        prop_assert_eq!(s.standardize_name(&once, is_event), once);
    }

    #[test]
    fn prop_long_value_is_bounded_prefix(raw in ".{0,200}", is_event in any::<bool>()) {
        let s = sanitizer();
        let max = s.policy().value_max_len(is_event);
        let value = s.standardize_value(&raw, is_event);
        prop_assert!(raw.starts_with(&value));
        prop_assert_eq!(value.chars().count(), raw.chars().count().min(max));
    }
}
