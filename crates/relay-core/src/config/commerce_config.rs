use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::defaults;

/// How the products of a commerce event are emitted.
///
/// Both shapes exist in the wild for this backend. `Aggregated` sends one
/// event with a nested `items` list; `PerItem` sends one event per product
/// with the item fields flattened into the top level of the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemEmissionMode {
    #[default]
    Aggregated,
    PerItem,
}

impl ItemEmissionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Aggregated => "aggregated",
            Self::PerItem => "per_item",
        }
    }
}

impl fmt::Display for ItemEmissionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemEmissionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "aggregated" => Ok(Self::Aggregated),
            "per_item" | "peritem" => Ok(Self::PerItem),
            other => Err(format!("unknown item emission mode '{other}'")),
        }
    }
}

/// Commerce translation configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommerceConfig {
    /// Aggregated item list vs one event per product.
    pub item_emission_mode: ItemEmissionMode,
    /// Currency written when the event carries none.
    pub default_currency: String,
}

impl Default for CommerceConfig {
    fn default() -> Self {
        Self {
            item_emission_mode: ItemEmissionMode::default(),
            default_currency: defaults::DEFAULT_CURRENCY.to_string(),
        }
    }
}
