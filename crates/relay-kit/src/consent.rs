//! Consent forwarding.
//!
//! The backend consent map is built from two host settings layers: the four
//! per-type defaults, then `consentMappingSDK`, which maps host consent
//! purposes onto backend consent types using the user's consent state.

use serde::Deserialize;

use relay_core::constants::settings;
use relay_core::errors::ConsentError;
use relay_core::models::{ConsentSettings, ConsentState, ConsentStatus, ConsentType};
use relay_core::traits::{ConsentListener, HostSettings, HostUser};
use relay_observability::events;

use crate::kit::FirebaseKit;

/// One `consentMappingSDK` entry: host purpose → backend consent type.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ConsentMappingEntry {
    pub map: String,
    pub value: String,
}

/// Settings key holding the default status for `consent_type`.
pub fn default_setting_key(consent_type: ConsentType) -> &'static str {
    match consent_type {
        ConsentType::AdStorage => settings::DEFAULT_AD_STORAGE_CONSENT,
        ConsentType::AdUserData => settings::DEFAULT_AD_USER_DATA_CONSENT,
        ConsentType::AdPersonalization => settings::DEFAULT_AD_PERSONALIZATION_CONSENT,
        ConsentType::AnalyticsStorage => settings::DEFAULT_ANALYTICS_STORAGE_CONSENT,
    }
}

/// Parse the `consentMappingSDK` setting. The host delivers it with escaped
/// quotes, so backslashes are removed first. An empty setting is an empty
/// mapping.
pub fn parse_consent_mapping(raw: &str) -> Result<Vec<ConsentMappingEntry>, ConsentError> {
    let unescaped = raw.replace('\\', "");
    if unescaped.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(&unescaped).map_err(|e| ConsentError::MalformedMapping {
        reason: e.to_string(),
    })
}

/// Build the backend consent map for `state`. Mapped purposes override
/// the defaults. A malformed mapping is logged and contributes nothing.
pub fn build_consent_settings(settings: &dyn HostSettings, state: &ConsentState) -> ConsentSettings {
    let mut consent = ConsentSettings::new();

    for consent_type in ConsentType::ALL {
        let status = settings
            .get(default_setting_key(consent_type))
            .and_then(|value| ConsentStatus::from_setting(&value));
        if let Some(status) = status {
            consent.insert(consent_type, status);
        }
    }

    let mapping = match settings.get(settings::CONSENT_MAPPING) {
        Some(raw) => parse_consent_mapping(&raw).unwrap_or_else(|e| {
            events::consent_mapping_invalid(&e.to_string());
            Vec::new()
        }),
        None => Vec::new(),
    };

    for entry in &mapping {
        let Some(consent_type) = ConsentType::from_backend_name(&entry.value) else {
            continue;
        };
        if let Some(purpose) = state.find(&entry.map) {
            consent.insert(consent_type, ConsentStatus::from_consented(purpose.consented));
        }
    }
    consent
}

impl FirebaseKit {
    pub(crate) fn forward_consent(&self, state: &ConsentState) {
        let consent = build_consent_settings(self.settings(), state);
        if consent.is_empty() {
            return;
        }
        let Some(backend) = self.backend("set_consent") else {
            return;
        };
        backend.set_consent(&consent);
        events::consent_forwarded(consent.len());
        self.record().record_consent();
    }
}

impl ConsentListener for FirebaseKit {
    fn on_consent_state_updated(
        &self,
        _old_state: Option<&ConsentState>,
        new_state: &ConsentState,
        _user: &dyn HostUser,
    ) {
        self.forward_consent(new_state);
    }
}
