//! User consent as held by the host, and the backend's consent vocabulary.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Consent recorded for a single purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConsentPurpose {
    pub consented: bool,
}

/// The host's consent state for a user: GDPR purposes plus the CCPA
/// data-sale opt-out.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsentState {
    pub gdpr: BTreeMap<String, ConsentPurpose>,
    pub ccpa: Option<ConsentPurpose>,
}

impl ConsentState {
    /// Key under which the CCPA entry is addressed by consent mappings.
    pub const CCPA_PURPOSE: &'static str = "data_sale_opt_out";

    pub fn with_gdpr(mut self, purpose: impl Into<String>, consented: bool) -> Self {
        self.gdpr
            .insert(purpose.into(), ConsentPurpose { consented });
        self
    }

    /// Find a purpose by name, case-insensitively.
    pub fn find(&self, purpose: &str) -> Option<ConsentPurpose> {
        if let Some(found) = self
            .gdpr
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(purpose))
            .map(|(_, p)| *p)
        {
            return Some(found);
        }
        if purpose.eq_ignore_ascii_case(Self::CCPA_PURPOSE) {
            return self.ccpa;
        }
        None
    }
}

/// Consent categories understood by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsentType {
    AdStorage,
    AdUserData,
    AdPersonalization,
    AnalyticsStorage,
}

impl ConsentType {
    pub const ALL: [ConsentType; 4] = [
        Self::AdStorage,
        Self::AdUserData,
        Self::AdPersonalization,
        Self::AnalyticsStorage,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AdStorage => "ad_storage",
            Self::AdUserData => "ad_user_data",
            Self::AdPersonalization => "ad_personalization",
            Self::AnalyticsStorage => "analytics_storage",
        }
    }

    /// Parse the backend name used in consent mapping settings.
    pub fn from_backend_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsentStatus {
    Granted,
    Denied,
}

impl ConsentStatus {
    pub fn from_consented(consented: bool) -> Self {
        if consented {
            Self::Granted
        } else {
            Self::Denied
        }
    }

    /// Parse a default-consent setting value (`Granted` / `Denied`).
    /// Anything else, including `Unspecified`, means no default.
    pub fn from_setting(value: &str) -> Option<Self> {
        match value {
            "Granted" => Some(Self::Granted),
            "Denied" => Some(Self::Denied),
            _ => None,
        }
    }
}

/// Consent map handed to the backend.
pub type ConsentSettings = BTreeMap<ConsentType, ConsentStatus>;
