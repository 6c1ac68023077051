use chrono::Utc;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageType {
    Event,
    CommerceEvent,
    ScreenView,
}

/// Acknowledgement returned to the host for each forwarded call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportingMessage {
    pub kit_name: String,
    pub message_type: MessageType,
    pub timestamp_ms: i64,
    pub event_name: Option<String>,
}

impl ReportingMessage {
    /// Create an acknowledgement stamped with the current time.
    pub fn new(
        kit_name: impl Into<String>,
        message_type: MessageType,
        event_name: Option<String>,
    ) -> Self {
        Self {
            kit_name: kit_name.into(),
            message_type,
            timestamp_ms: Utc::now().timestamp_millis(),
            event_name,
        }
    }
}
