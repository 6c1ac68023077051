use crate::models::ConsentSettings;
use crate::payload::Payload;

/// The third-party analytics backend, as an opaque capability.
///
/// Calls are fire-and-forget: the relay neither waits on them nor retries.
pub trait BackendClient: Send + Sync {
    fn log_event(&self, name: &str, payload: &Payload);

    fn set_user_id(&self, id: &str);

    /// `None` clears the property.
    fn set_user_property(&self, key: &str, value: Option<&str>);

    fn set_current_screen(&self, screen_name: &str);

    /// Backends without a consent API ignore this.
    fn set_consent(&self, _consent: &ConsentSettings) {}
}
