use serde::Serialize;

use crate::payload::Payload;

/// One `(event name, payload)` pair ready for `BackendClient::log_event`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BackendEvent {
    pub name: String,
    pub payload: Payload,
}

impl BackendEvent {
    pub fn new(name: impl Into<String>, payload: Payload) -> Self {
        Self {
            name: name.into(),
            payload,
        }
    }
}
