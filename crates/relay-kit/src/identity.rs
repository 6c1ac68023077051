//! User id forwarding on identity changes.

use relay_core::constants::settings;
use relay_core::models::{AttributeValue, IdentityKind, UserIdField};
use relay_core::traits::{HostUser, IdentityListener};
use relay_observability::events;

use crate::kit::FirebaseKit;

/// The user id to forward for `field`, or `None` when the user has no
/// non-empty value for it.
pub fn resolve_user_id(user: &dyn HostUser, field: UserIdField) -> Option<String> {
    let id = match field {
        UserIdField::CustomerId => user.identities().remove(&IdentityKind::CustomerId),
        UserIdField::Email => user.identities().remove(&IdentityKind::Email),
        UserIdField::Mpid => Some(user.numeric_id().to_string()),
    };
    id.filter(|id| !id.is_empty())
}

impl FirebaseKit {
    /// The configured `userIdField` setting; unset or unknown means no user
    /// id is forwarded.
    pub fn user_id_field(&self) -> Option<UserIdField> {
        let raw = self.setting(settings::USER_ID_FIELD)?;
        match raw.parse() {
            Ok(field) => Some(field),
            Err(reason) => {
                tracing::debug!(setting = settings::USER_ID_FIELD, %reason, "user id field ignored");
                None
            }
        }
    }

    fn forward_user_id(&self, user: &dyn HostUser) {
        let Some(field) = self.user_id_field() else {
            return;
        };
        let span = relay_observability::identity_span!(field);
        let _guard = span.enter();

        let Some(user_id) = resolve_user_id(user, field) else {
            return;
        };
        let Some(backend) = self.backend("set_user_id") else {
            return;
        };
        backend.set_user_id(&user_id);
        events::user_id_forwarded(field.as_setting());
        self.record().record_user_id();
    }

    /// Re-send the user's single-valued attributes as user properties.
    fn forward_user_attributes(&self, user: &dyn HostUser) {
        let singles: Vec<(String, String)> = user
            .user_attributes()
            .into_iter()
            .filter_map(|(key, value)| match value {
                AttributeValue::Single(value) => Some((key, value)),
                AttributeValue::List(_) => None,
            })
            .collect();
        self.forward_user_properties(singles.iter().map(|(k, v)| (k, v)));
    }
}

impl IdentityListener for FirebaseKit {
    fn on_user_identity_changed(&self, user: &dyn HostUser) {
        self.forward_user_id(user);
    }

    fn on_identify_completed(&self, user: &dyn HostUser) {
        self.forward_user_id(user);
        self.forward_user_attributes(user);
    }

    fn on_login_completed(&self, user: &dyn HostUser) {
        self.forward_user_id(user);
        self.forward_user_attributes(user);
    }

    fn on_logout_completed(&self, user: &dyn HostUser) {
        self.forward_user_id(user);
    }

    fn on_modify_completed(&self, user: &dyn HostUser) {
        self.forward_user_id(user);
        self.forward_user_attributes(user);
    }
}
