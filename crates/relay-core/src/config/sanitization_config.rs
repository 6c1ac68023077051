use serde::{Deserialize, Serialize};

use super::defaults;

/// Character, prefix, and length rules a name or value must satisfy before
/// it reaches the backend. Built once at startup and shared read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SanitizationPolicy {
    /// Prefixes reserved by the backend, checked in order.
    pub forbidden_prefixes: Vec<String>,
    /// Maximum length of an event name.
    pub event_name_max_len: usize,
    /// Maximum length of a user attribute (user property) name.
    pub attribute_name_max_len: usize,
    /// Maximum length of an event parameter value.
    pub event_value_max_len: usize,
    /// Maximum length of a user attribute value.
    pub attribute_value_max_len: usize,
}

impl SanitizationPolicy {
    /// Name length limit for the given context.
    pub fn name_max_len(&self, is_event: bool) -> usize {
        if is_event {
            self.event_name_max_len
        } else {
            self.attribute_name_max_len
        }
    }

    /// Value length limit for the given context.
    pub fn value_max_len(&self, is_event: bool) -> usize {
        if is_event {
            self.event_value_max_len
        } else {
            self.attribute_value_max_len
        }
    }
}

impl Default for SanitizationPolicy {
    fn default() -> Self {
        Self {
            forbidden_prefixes: defaults::DEFAULT_FORBIDDEN_PREFIXES
                .iter()
                .map(|p| p.to_string())
                .collect(),
            event_name_max_len: defaults::DEFAULT_EVENT_NAME_MAX_LEN,
            attribute_name_max_len: defaults::DEFAULT_ATTRIBUTE_NAME_MAX_LEN,
            event_value_max_len: defaults::DEFAULT_EVENT_VALUE_MAX_LEN,
            attribute_value_max_len: defaults::DEFAULT_ATTRIBUTE_VALUE_MAX_LEN,
        }
    }
}
