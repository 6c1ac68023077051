//! Host-facing callback surfaces. One kit implements all of them; each is
//! testable on its own.

use std::collections::BTreeMap;

use crate::models::{AnalyticsEvent, AttributeValue, CommerceEvent, ConsentState, ReportingMessage};
use crate::traits::host::HostUser;

pub trait EventListener {
    /// Forward an analytics event. `None` when nothing was forwarded.
    fn log_event(&self, event: &AnalyticsEvent) -> Option<ReportingMessage>;

    fn log_screen(
        &self,
        screen_name: &str,
        attributes: &BTreeMap<String, String>,
    ) -> Option<ReportingMessage>;
}

pub trait CommerceListener {
    /// One acknowledgement per backend event forwarded, possibly none.
    fn log_commerce_event(&self, event: &CommerceEvent) -> Vec<ReportingMessage>;
}

pub trait IdentityListener {
    /// Forward the configured user id, if resolvable.
    fn on_user_identity_changed(&self, user: &dyn HostUser);

    fn on_identify_completed(&self, user: &dyn HostUser);

    fn on_login_completed(&self, user: &dyn HostUser);

    fn on_logout_completed(&self, user: &dyn HostUser);

    fn on_modify_completed(&self, user: &dyn HostUser);
}

pub trait UserAttributeListener {
    fn on_set_user_attribute(&self, key: &str, value: &AttributeValue, user: &dyn HostUser);

    fn on_set_user_attribute_list(&self, key: &str, values: &[String], user: &dyn HostUser);

    fn on_set_user_tag(&self, key: &str, user: &dyn HostUser);

    fn on_remove_user_attribute(&self, key: &str, user: &dyn HostUser);

    /// `new_value` is the attribute's value after the increment.
    fn on_increment_user_attribute(
        &self,
        key: &str,
        increment: f64,
        new_value: &str,
        user: &dyn HostUser,
    );

    fn on_set_all_user_attributes(
        &self,
        attributes: &BTreeMap<String, String>,
        attribute_lists: &BTreeMap<String, Vec<String>>,
        user: &dyn HostUser,
    );

    fn supports_attribute_lists(&self) -> bool;
}

pub trait ConsentListener {
    fn on_consent_state_updated(
        &self,
        old_state: Option<&ConsentState>,
        new_state: &ConsentState,
        user: &dyn HostUser,
    );
}
