use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use relay_core::config::ScreenReporting;
use relay_core::models::{AnalyticsEvent, EventType, MessageType};
use relay_core::traits::EventListener;
use relay_core::RelayConfig;
use relay_kit::FirebaseKit;
use test_fixtures::{BackendCall, FixedForeground, RecordingBackend};

fn kit_with(config: RelayConfig, backend: &Arc<RecordingBackend>) -> FirebaseKit {
    FirebaseKit::new(config, HashMap::new())
        .with_backend(backend.clone())
        .with_foreground_context(Arc::new(FixedForeground(Some("MainActivity".into()))))
}

fn kit(backend: &Arc<RecordingBackend>) -> FirebaseKit {
    kit_with(RelayConfig::default(), backend)
}

#[test]
fn custom_event_is_standardized_and_forwarded() {
    let backend = Arc::new(RecordingBackend::new());
    let event = AnalyticsEvent::new("firebase_Added Item!", EventType::Other)
        .with_attribute("Item Color", "red")
        .with_attribute("$$$", "dropped");

    let ack = kit(&backend).log_event(&event).unwrap();
    assert_eq!(ack.message_type, MessageType::Event);
    assert_eq!(ack.event_name.as_deref(), Some("Added_Item"));

    let logged = backend.logged_events();
    assert_eq!(logged.len(), 1);
    assert_eq!(logged[0].name, "Added_Item");
    assert_eq!(logged[0].payload.get_str("Item_Color"), Some("red"));
    assert_eq!(logged[0].payload.len(), 1);
}

#[test]
fn search_and_screen_types_use_fixed_names() {
    let backend = Arc::new(RecordingBackend::new());
    let kit = kit(&backend);
    kit.log_event(&AnalyticsEvent::new("Find shoes", EventType::Search));
    kit.log_event(&AnalyticsEvent::new("Product page", EventType::Screen));

    let names: Vec<_> = backend.logged_events().into_iter().map(|e| e.name).collect();
    assert_eq!(names, vec!["search", "view_item"]);
}

#[test]
fn attribute_values_are_truncated_to_event_limit() {
    let backend = Arc::new(RecordingBackend::new());
    let long = "x".repeat(150);
    kit(&backend).log_event(&AnalyticsEvent::new("evt", EventType::Other).with_attribute("k", long));
    let payload = &backend.logged_events()[0].payload;
    assert_eq!(payload.get_str("k").map(str::len), Some(100));
}

#[test]
fn event_with_empty_standardized_name_is_dropped() {
    let backend = Arc::new(RecordingBackend::new());
    let kit = kit(&backend);
    assert!(kit.log_event(&AnalyticsEvent::new("123 !!!", EventType::Other)).is_none());
    assert_eq!(backend.call_count(), 0);
    assert_eq!(kit.metrics().events_forwarded, 0);
}

#[test]
fn missing_backend_skips_without_ack() {
    let kit = FirebaseKit::new(RelayConfig::default(), HashMap::new());
    assert!(kit
        .log_event(&AnalyticsEvent::new("evt", EventType::Other))
        .is_none());
    assert_eq!(kit.metrics().skipped_calls, 1);
}

#[test]
fn screen_sets_current_screen_by_default() {
    let backend = Arc::new(RecordingBackend::new());
    let ack = kit(&backend)
        .log_screen("Home Screen", &BTreeMap::new())
        .unwrap();
    assert_eq!(ack.message_type, MessageType::ScreenView);
    assert_eq!(backend.screens(), vec!["Home_Screen".to_string()]);
    assert!(backend.logged_events().is_empty());
}

#[test]
fn screen_view_event_mode_logs_event() {
    let backend = Arc::new(RecordingBackend::new());
    let mut config = RelayConfig::default();
    config.screen.reporting = ScreenReporting::ScreenViewEvent;
    let mut attributes = BTreeMap::new();
    attributes.insert("ga_referrer".to_string(), "push".to_string());

    kit_with(config, &backend).log_screen("Home Screen", &attributes);

    let logged = backend.logged_events();
    assert_eq!(logged.len(), 1);
    assert_eq!(logged[0].name, "screen_view");
    assert_eq!(logged[0].payload.get_str("screen_name"), Some("Home_Screen"));
    assert_eq!(logged[0].payload.get_str("referrer"), Some("push"));
}

#[test]
fn screen_with_empty_standardized_name_is_dropped() {
    let backend = Arc::new(RecordingBackend::new());
    let kit = kit(&backend);
    assert!(kit.log_screen("42 ???", &BTreeMap::new()).is_none());
    assert_eq!(backend.call_count(), 0);
    assert_eq!(kit.metrics().screens_forwarded, 0);

    let mut config = RelayConfig::default();
    config.screen.reporting = ScreenReporting::ScreenViewEvent;
    assert!(kit_with(config, &backend)
        .log_screen("", &BTreeMap::new())
        .is_none());
    assert!(backend.logged_events().is_empty());
}

#[test]
fn screen_skipped_without_foreground() {
    let backend = Arc::new(RecordingBackend::new());
    let backgrounded = FirebaseKit::new(RelayConfig::default(), HashMap::new())
        .with_backend(backend.clone())
        .with_foreground_context(Arc::new(FixedForeground(None)));
    assert!(backgrounded.log_screen("Home", &BTreeMap::new()).is_none());

    let no_context = FirebaseKit::new(RelayConfig::default(), HashMap::new())
        .with_backend(backend.clone());
    assert!(no_context.log_screen("Home", &BTreeMap::new()).is_none());

    assert_eq!(backend.call_count(), 0);
    assert_eq!(backgrounded.metrics().skipped_calls, 1);
}

#[test]
fn metrics_track_forwarded_events() {
    let backend = Arc::new(RecordingBackend::new());
    let kit = kit(&backend);
    kit.log_event(&AnalyticsEvent::new("a", EventType::Other));
    kit.log_event(&AnalyticsEvent::new("b", EventType::Other));
    kit.log_screen("s", &BTreeMap::new());
    let snap = kit.metrics();
    assert_eq!(snap.events_forwarded, 2);
    assert_eq!(snap.screens_forwarded, 1);
    assert!(matches!(backend.calls()[2], BackendCall::SetCurrentScreen(_)));
}

#[test]
fn load_reads_config_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("relay.toml");
    std::fs::write(&path, "[screen]\nreporting = \"screen_view_event\"\n").unwrap();

    let kit = FirebaseKit::load(Some(&path), HashMap::new()).unwrap();
    assert_eq!(kit.config().screen.reporting, ScreenReporting::ScreenViewEvent);
    assert_eq!(kit.name(), "Google Analytics for Firebase");

    let err = FirebaseKit::load(Some(&dir.path().join("missing.toml")), HashMap::new()).unwrap_err();
    assert!(matches!(err, relay_core::RelayError::Config(_)));
}
