use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::settings;

/// Kinds of identity a host user can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentityKind {
    CustomerId,
    Email,
    Facebook,
    Google,
    Microsoft,
    Other,
}

/// Which identity the kit forwards as the backend user id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserIdField {
    CustomerId,
    Email,
    Mpid,
}

impl UserIdField {
    pub fn as_setting(&self) -> &'static str {
        match self {
            Self::CustomerId => settings::USER_ID_CUSTOMER_ID,
            Self::Email => settings::USER_ID_EMAIL,
            Self::Mpid => settings::USER_ID_MPID,
        }
    }
}

impl fmt::Display for UserIdField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_setting())
    }
}

impl FromStr for UserIdField {
    type Err = String;

    /// Case-insensitive match against the host setting values.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Self::CustomerId, Self::Email, Self::Mpid]
            .into_iter()
            .find(|field| field.as_setting().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown user id field '{s}'"))
    }
}

/// A user attribute value. The backend only accepts single strings; lists
/// are dropped by the forwarding layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Single(String),
    List(Vec<String>),
}
