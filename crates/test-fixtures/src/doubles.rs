use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use relay_core::models::{AttributeValue, ConsentSettings, ConsentState, IdentityKind};
use relay_core::payload::Payload;
use relay_core::traits::{BackendClient, ForegroundContext, HostUser};
use relay_core::BackendEvent;

/// One call received by [`RecordingBackend`].
#[derive(Debug, Clone, PartialEq)]
pub enum BackendCall {
    LogEvent { name: String, payload: Payload },
    SetUserId(String),
    SetUserProperty { key: String, value: Option<String> },
    SetCurrentScreen(String),
    SetConsent(ConsentSettings),
}

/// A backend client that records every call in order.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    calls: Mutex<Vec<BackendCall>>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<BackendCall>> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn calls(&self) -> Vec<BackendCall> {
        self.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.lock().len()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn logged_events(&self) -> Vec<BackendEvent> {
        self.lock()
            .iter()
            .filter_map(|call| match call {
                BackendCall::LogEvent { name, payload } => {
                    Some(BackendEvent::new(name.clone(), payload.clone()))
                }
                _ => None,
            })
            .collect()
    }

    pub fn user_ids(&self) -> Vec<String> {
        self.lock()
            .iter()
            .filter_map(|call| match call {
                BackendCall::SetUserId(id) => Some(id.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn user_properties(&self) -> Vec<(String, Option<String>)> {
        self.lock()
            .iter()
            .filter_map(|call| match call {
                BackendCall::SetUserProperty { key, value } => Some((key.clone(), value.clone())),
                _ => None,
            })
            .collect()
    }

    pub fn screens(&self) -> Vec<String> {
        self.lock()
            .iter()
            .filter_map(|call| match call {
                BackendCall::SetCurrentScreen(name) => Some(name.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn consents(&self) -> Vec<ConsentSettings> {
        self.lock()
            .iter()
            .filter_map(|call| match call {
                BackendCall::SetConsent(settings) => Some(settings.clone()),
                _ => None,
            })
            .collect()
    }
}

impl BackendClient for RecordingBackend {
    fn log_event(&self, name: &str, payload: &Payload) {
        self.lock().push(BackendCall::LogEvent {
            name: name.to_string(),
            payload: payload.clone(),
        });
    }

    fn set_user_id(&self, id: &str) {
        self.lock().push(BackendCall::SetUserId(id.to_string()));
    }

    fn set_user_property(&self, key: &str, value: Option<&str>) {
        self.lock().push(BackendCall::SetUserProperty {
            key: key.to_string(),
            value: value.map(str::to_string),
        });
    }

    fn set_current_screen(&self, screen_name: &str) {
        self.lock()
            .push(BackendCall::SetCurrentScreen(screen_name.to_string()));
    }

    fn set_consent(&self, consent: &ConsentSettings) {
        self.lock().push(BackendCall::SetConsent(consent.clone()));
    }
}

/// A host user built up in tests.
#[derive(Debug, Clone, Default)]
pub struct TestUser {
    pub identities: BTreeMap<IdentityKind, String>,
    pub id: i64,
    pub attributes: BTreeMap<String, AttributeValue>,
    pub consent: Option<ConsentState>,
}

impl TestUser {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    pub fn with_identity(mut self, kind: IdentityKind, value: impl Into<String>) -> Self {
        self.identities.insert(kind, value.into());
        self
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes
            .insert(key.into(), AttributeValue::Single(value.into()));
        self
    }

    pub fn with_attribute_list(mut self, key: impl Into<String>, values: &[&str]) -> Self {
        self.attributes.insert(
            key.into(),
            AttributeValue::List(values.iter().map(|v| v.to_string()).collect()),
        );
        self
    }

    pub fn with_consent(mut self, consent: ConsentState) -> Self {
        self.consent = Some(consent);
        self
    }
}

impl HostUser for TestUser {
    fn identities(&self) -> BTreeMap<IdentityKind, String> {
        self.identities.clone()
    }

    fn numeric_id(&self) -> i64 {
        self.id
    }

    fn user_attributes(&self) -> BTreeMap<String, AttributeValue> {
        self.attributes.clone()
    }

    fn consent_state(&self) -> Option<ConsentState> {
        self.consent.clone()
    }
}

/// A foreground context that always reports the same activity.
#[derive(Debug, Clone, Default)]
pub struct FixedForeground(pub Option<String>);

impl ForegroundContext for FixedForeground {
    fn current_activity(&self) -> Option<String> {
        self.0.clone()
    }
}
