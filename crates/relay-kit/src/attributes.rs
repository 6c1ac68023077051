//! User attribute forwarding. The backend only stores single string user
//! properties, so attribute lists and tags are not forwarded.

use std::collections::BTreeMap;

use relay_core::models::AttributeValue;
use relay_core::traits::{HostUser, UserAttributeListener};
use relay_observability::events;

use crate::kit::FirebaseKit;

impl FirebaseKit {
    /// Standardize (attribute context) and forward each pair as a user
    /// property. Keys that standardize to nothing are dropped.
    pub(crate) fn forward_user_properties<'a, I>(&self, attributes: I)
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        let properties = self.sanitizer().standardize_attributes(attributes, false);
        if properties.is_empty() {
            return;
        }
        let Some(backend) = self.backend("set_user_property") else {
            return;
        };
        for (key, value) in &properties {
            backend.set_user_property(key, Some(value.as_str()));
            events::user_property_forwarded(key, false);
            self.record().record_user_property();
        }
    }

    fn forward_user_property(&self, key: &str, value: Option<&str>) {
        let key = self.sanitizer().standardize_name(key, false);
        if key.is_empty() {
            return;
        }
        let Some(backend) = self.backend("set_user_property") else {
            return;
        };
        let value = value.map(|value| self.sanitizer().standardize_value(value, false));
        backend.set_user_property(&key, value.as_deref());
        events::user_property_forwarded(&key, value.is_none());
        self.record().record_user_property();
    }
}

impl UserAttributeListener for FirebaseKit {
    fn on_set_user_attribute(&self, key: &str, value: &AttributeValue, _user: &dyn HostUser) {
        match value {
            AttributeValue::Single(value) => self.forward_user_property(key, Some(value.as_str())),
            AttributeValue::List(_) => {
                tracing::debug!(key, "attribute lists are not supported, dropped");
            }
        }
    }

    fn on_set_user_attribute_list(&self, _key: &str, _values: &[String], _user: &dyn HostUser) {}

    fn on_set_user_tag(&self, _key: &str, _user: &dyn HostUser) {}

    fn on_remove_user_attribute(&self, key: &str, _user: &dyn HostUser) {
        self.forward_user_property(key, None);
    }

    fn on_increment_user_attribute(
        &self,
        key: &str,
        _increment: f64,
        new_value: &str,
        _user: &dyn HostUser,
    ) {
        self.forward_user_property(key, Some(new_value));
    }

    fn on_set_all_user_attributes(
        &self,
        attributes: &BTreeMap<String, String>,
        _attribute_lists: &BTreeMap<String, Vec<String>>,
        _user: &dyn HostUser,
    ) {
        self.forward_user_properties(attributes);
    }

    fn supports_attribute_lists(&self) -> bool {
        false
    }
}
