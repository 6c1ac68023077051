//! Error handling for the relay.
//! One error enum per subsystem, `thiserror` only.
//!
//! Nothing on the translation path returns these: translation degrades to
//! sending less data. Errors surface only from configuration loading and
//! from parsing host-supplied consent settings.

pub mod config_error;
pub mod consent_error;
pub mod error_code;
pub mod relay_error;

pub use config_error::ConfigError;
pub use consent_error::ConsentError;
pub use error_code::RelayErrorCode;
pub use relay_error::{RelayError, RelayResult};
