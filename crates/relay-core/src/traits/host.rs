use std::collections::{BTreeMap, HashMap};

use crate::models::{AttributeValue, ConsentState, IdentityKind};

/// The host's view of the current user.
pub trait HostUser {
    fn identities(&self) -> BTreeMap<IdentityKind, String>;

    /// The host-assigned numeric user id (MPID).
    fn numeric_id(&self) -> i64;

    fn user_attributes(&self) -> BTreeMap<String, AttributeValue> {
        BTreeMap::new()
    }

    fn consent_state(&self) -> Option<ConsentState> {
        None
    }
}

/// Kit configuration supplied by the host as a string map.
pub trait HostSettings: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
}

impl HostSettings for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

impl HostSettings for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        BTreeMap::get(self, key).cloned()
    }
}

/// Access to the host's foreground UI context. Screen reporting needs one.
pub trait ForegroundContext: Send + Sync {
    /// Name of the foreground screen, `None` when the app is backgrounded.
    fn current_activity(&self) -> Option<String>;
}
