//! Configuration system for the relay.
//! TOML-based, 3-layer resolution: env > file > defaults.

pub mod commerce_config;
pub mod defaults;
pub mod observability_config;
pub mod relay_config;
pub mod sanitization_config;
pub mod screen_config;

pub use commerce_config::{CommerceConfig, ItemEmissionMode};
pub use observability_config::ObservabilityConfig;
pub use relay_config::RelayConfig;
pub use sanitization_config::SanitizationPolicy;
pub use screen_config::{ScreenConfig, ScreenReporting};
