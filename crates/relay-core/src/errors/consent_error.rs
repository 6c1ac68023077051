//! Consent parsing errors. Always logged and degraded, never fatal.

use super::error_code::{self, RelayErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ConsentError {
    #[error("malformed consent mapping: {reason}")]
    MalformedMapping { reason: String },
}

impl RelayErrorCode for ConsentError {
    fn error_code(&self) -> &'static str {
        error_code::CONSENT_ERROR
    }
}
