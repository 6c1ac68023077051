//! RelayErrorCode trait for the host boundary.

/// Every error enum implements this to provide a structured error code
/// string the host can match on.
pub trait RelayErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted host string: `[ERROR_CODE] message`.
    fn host_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const CONSENT_ERROR: &str = "CONSENT_ERROR";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";
