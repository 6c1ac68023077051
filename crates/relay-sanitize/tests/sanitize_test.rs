use std::collections::BTreeMap;

use relay_core::config::SanitizationPolicy;
use relay_sanitize::NameValueSanitizer;

fn sanitizer() -> NameValueSanitizer {
    NameValueSanitizer::new(SanitizationPolicy::default())
}

#[test]
fn forbidden_prefixes_are_removed() {
    let s = sanitizer();
    for raw in ["firebase_event_name", "google_event_name", "ga_event_name"] {
        assert_eq!(s.standardize_name(raw, true), "event_name", "input: {raw}");
    }
}

#[test]
fn whitespace_runs_become_one_underscore() {
    let s = sanitizer();
    assert_eq!(s.standardize_name("event name", true), "event_name");
    assert_eq!(s.standardize_name("event_name ", true), "event_name_");
    assert_eq!(s.standardize_name("event  name ", true), "event_name_");
    assert_eq!(s.standardize_name("event\t\nname", true), "event_name");
}

#[test]
fn punctuation_is_stripped_before_collapsing() {
    let s = sanitizer();
    assert_eq!(s.standardize_name("event - name ", true), "event_name_");
}

#[test]
fn leading_non_letters_are_dropped() {
    let s = sanitizer();
    for raw in [
        "!@#$%^&*()_+=[]{}|'\"?><:;event_name",
        "_event_name",
        "   event_name",
        "123event_name",
        "_1_event_name",
    ] {
        assert_eq!(s.standardize_name(raw, true), "event_name", "input: {raw}");
    }
}

#[test]
fn prefix_is_removed_only_once() {
    let s = sanitizer();
    assert_eq!(s.standardize_name("ga_ga_event", true), "ga_event");
    // Prefixes are checked in order, so a later prefix can follow an earlier one.
    assert_eq!(s.standardize_name("google_firebase_event", true), "event");
}

#[test]
fn prefix_is_checked_after_stripping() {
    let s = sanitizer();
    assert_eq!(s.standardize_name("fire-base_event", true), "event");
    assert_eq!(s.standardize_name("ga event", true), "event");
}

#[test]
fn non_ascii_is_stripped() {
    let s = sanitizer();
    assert_eq!(s.standardize_name("événement", true), "vnement");
    assert_eq!(s.standardize_name("a\u{00A0}b", true), "ab");
}

#[test]
fn only_forbidden_characters_collapse_to_empty() {
    let s = sanitizer();
    assert_eq!(s.standardize_name("!!!", true), "");
    assert_eq!(s.standardize_name("   ", true), "");
    assert_eq!(s.standardize_name("", true), "");
    assert_eq!(s.standardize_name("firebase_", true), "");
    assert_eq!(s.standardize_name("123", false), "");
}

#[test]
fn absent_stays_absent() {
    let s = sanitizer();
    assert_eq!(s.standardize_name_opt(None, true), None);
    assert_eq!(s.standardize_value_opt(None, false), None);
    assert_eq!(
        s.standardize_name_opt(Some("ga_x"), true).as_deref(),
        Some("x")
    );
}

#[test]
fn long_names_are_truncated_per_context() {
    let s = sanitizer();
    let raw = "abcdefghijklmnopqrstuvwxyz1234567890abcdefghijklmnopqrstuvwxyz1234567890";

    let event = s.standardize_name(raw, true);
    assert_eq!(event.len(), 40);
    assert!(raw.starts_with(&event));

    let attribute = s.standardize_name(raw, false);
    assert_eq!(attribute.len(), 24);
    assert!(raw.starts_with(&attribute));
}

#[test]
fn long_values_are_truncated_per_context() {
    let s = sanitizer();
    let raw = "abcdefghijklmnopqrstuvwxyz1234567890!@#$%^&*()".repeat(4);

    let event = s.standardize_value(&raw, true);
    assert_eq!(event.chars().count(), 100);
    assert!(raw.starts_with(&event));

    let attribute = s.standardize_value(&raw, false);
    assert_eq!(attribute.chars().count(), 36);
    assert!(raw.starts_with(&attribute));
}

#[test]
fn short_values_pass_through_unchanged() {
    let s = sanitizer();
    assert_eq!(s.standardize_value("ga_ !@# value ", true), "ga_ !@# value ");
}

#[test]
fn custom_policy_is_respected() {
    let policy = SanitizationPolicy {
        forbidden_prefixes: vec!["app_".into()],
        event_name_max_len: 5,
        ..SanitizationPolicy::default()
    };
    let s = NameValueSanitizer::new(policy);
    assert_eq!(s.standardize_name("app_checkout", true), "check");
    assert_eq!(s.standardize_name("ga_checkout", false), "ga_checkout");
}

#[test]
fn attributes_drop_empty_keys() {
    let s = sanitizer();
    let mut attributes = BTreeMap::new();
    attributes.insert("Item Color".to_string(), "red".to_string());
    attributes.insert("$$$".to_string(), "dropped".to_string());
    attributes.insert("google_size".to_string(), "L".to_string());

    let out = s.standardize_attributes(&attributes, true);
    assert_eq!(
        out,
        vec![
            ("Item_Color".to_string(), "red".to_string()),
            ("size".to_string(), "L".to_string()),
        ]
    );
}

#[test]
fn sanitizer_is_shareable_across_threads() {
    let s = std::sync::Arc::new(sanitizer());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let s = std::sync::Arc::clone(&s);
            std::thread::spawn(move || s.standardize_name(&format!("ga_event {i}"), true))
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), format!("event_{i}"));
    }
}

