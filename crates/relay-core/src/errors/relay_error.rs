use super::error_code::{self, RelayErrorCode};
use super::{ConfigError, ConsentError};

/// Aggregate error for the relay. Subsystem errors convert via `From`.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("consent error: {0}")]
    Consent(#[from] ConsentError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl RelayErrorCode for RelayError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Consent(e) => e.error_code(),
            Self::SerializationError(_) => error_code::SERIALIZATION_ERROR,
        }
    }
}

pub type RelayResult<T> = Result<T, RelayError>;
