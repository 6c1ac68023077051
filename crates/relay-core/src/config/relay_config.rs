//! Top-level relay configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{
    CommerceConfig, ItemEmissionMode, ObservabilityConfig, SanitizationPolicy, ScreenConfig,
    ScreenReporting,
};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`RELAY_*`)
/// 2. Config file (TOML)
/// 3. Compiled defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    pub sanitization: SanitizationPolicy,
    pub commerce: CommerceConfig,
    pub screen: ScreenConfig,
    pub observability: ObservabilityConfig,
}

impl RelayConfig {
    /// Load configuration with layered resolution. A missing `path` means
    /// defaults plus environment only.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Self::apply_env_overrides(&mut config);
        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string. Missing sections and keys take
    /// their defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &RelayConfig) -> Result<(), ConfigError> {
        let policy = &config.sanitization;
        for (field, value) in [
            ("sanitization.event_name_max_len", policy.event_name_max_len),
            ("sanitization.attribute_name_max_len", policy.attribute_name_max_len),
            ("sanitization.event_value_max_len", policy.event_value_max_len),
            ("sanitization.attribute_value_max_len", policy.attribute_value_max_len),
        ] {
            if value == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        if policy.forbidden_prefixes.iter().any(|p| p.is_empty()) {
            return Err(ConfigError::ValidationFailed {
                field: "sanitization.forbidden_prefixes".to_string(),
                message: "prefixes must be non-empty".to_string(),
            });
        }
        let currency = &config.commerce.default_currency;
        if currency.len() != 3 || !currency.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(ConfigError::ValidationFailed {
                field: "commerce.default_currency".to_string(),
                message: format!("'{currency}' is not a 3-letter uppercase currency code"),
            });
        }
        Ok(())
    }

    /// Apply `RELAY_*` environment overrides. Unparseable values are ignored.
    fn apply_env_overrides(config: &mut RelayConfig) {
        if let Ok(val) = std::env::var("RELAY_ITEM_EMISSION_MODE") {
            if let Ok(v) = val.parse::<ItemEmissionMode>() {
                config.commerce.item_emission_mode = v;
            }
        }
        if let Ok(val) = std::env::var("RELAY_DEFAULT_CURRENCY") {
            config.commerce.default_currency = val;
        }
        if let Ok(val) = std::env::var("RELAY_SCREEN_REPORTING") {
            if let Ok(v) = val.parse::<ScreenReporting>() {
                config.screen.reporting = v;
            }
        }
        if let Ok(val) = std::env::var("RELAY_LOG_LEVEL") {
            config.observability.log_level = val;
        }
    }
}
