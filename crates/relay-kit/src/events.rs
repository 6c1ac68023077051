//! Analytics events and screen views.

use std::collections::BTreeMap;

use relay_core::config::ScreenReporting;
use relay_core::constants::{events as backend_events, params};
use relay_core::models::{AnalyticsEvent, EventType, MessageType, ReportingMessage};
use relay_core::payload::PayloadBuilder;
use relay_core::traits::EventListener;
use relay_observability::events;
use relay_sanitize::NameValueSanitizer;

use crate::kit::FirebaseKit;

/// Backend name for a host event: searches and screen events map to fixed
/// backend events, everything else is standardized.
pub fn backend_event_name(sanitizer: &NameValueSanitizer, event: &AnalyticsEvent) -> String {
    if event.event_type == EventType::Search {
        return backend_events::SEARCH.to_string();
    }
    if event.is_screen_event() {
        return backend_events::VIEW_ITEM.to_string();
    }
    sanitizer.standardize_name(&event.name, true)
}

impl EventListener for FirebaseKit {
    fn log_event(&self, event: &AnalyticsEvent) -> Option<ReportingMessage> {
        let name = backend_event_name(self.sanitizer(), event);
        if name.is_empty() {
            events::event_dropped(&event.name);
            return None;
        }
        let backend = self.backend("log_event")?;

        let payload = self.attribute_payload(&event.attributes);
        backend.log_event(&name, &payload);
        events::event_forwarded(&name, payload.len());
        self.record().record_event();
        Some(self.ack(MessageType::Event, Some(name)))
    }

    fn log_screen(
        &self,
        screen_name: &str,
        attributes: &BTreeMap<String, String>,
    ) -> Option<ReportingMessage> {
        let raw_name = screen_name;
        let screen_name = self.sanitizer().standardize_name(raw_name, true);
        if screen_name.is_empty() {
            events::event_dropped(raw_name);
            return None;
        }
        if !self.has_foreground("log_screen") {
            return None;
        }
        let backend = self.backend("log_screen")?;

        match self.config().screen.reporting {
            ScreenReporting::CurrentScreen => {
                backend.set_current_screen(&screen_name);
                events::event_forwarded(&screen_name, 0);
            }
            ScreenReporting::ScreenViewEvent => {
                let payload = PayloadBuilder::from_payload(self.attribute_payload(attributes))
                    .put_string(params::SCREEN_NAME, Some(screen_name.as_str()))
                    .build();
                backend.log_event(backend_events::SCREEN_VIEW, &payload);
                events::event_forwarded(backend_events::SCREEN_VIEW, payload.len());
            }
        }
        self.record().record_screen();
        Some(self.ack(MessageType::ScreenView, Some(screen_name)))
    }
}
