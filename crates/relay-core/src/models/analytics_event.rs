use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Host-side classification of a custom event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Navigation,
    Location,
    Search,
    Transaction,
    UserContent,
    UserPreference,
    Social,
    Media,
    Screen,
    #[default]
    Other,
}

/// A custom analytics event produced by the host SDK.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsEvent {
    pub name: String,
    #[serde(default)]
    pub event_type: EventType,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

impl AnalyticsEvent {
    pub fn new(name: impl Into<String>, event_type: EventType) -> Self {
        Self {
            name: name.into(),
            event_type,
            attributes: BTreeMap::new(),
        }
    }

    /// Add an attribute, replacing any previous value for the key.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn is_screen_event(&self) -> bool {
        self.event_type == EventType::Screen
    }
}
