use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How screen views reach the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreenReporting {
    /// `setCurrentScreen(name)`.
    #[default]
    CurrentScreen,
    /// A `screen_view` event carrying `screen_name` and the screen attributes.
    ScreenViewEvent,
}

impl FromStr for ScreenReporting {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "current_screen" => Ok(Self::CurrentScreen),
            "screen_view_event" => Ok(Self::ScreenViewEvent),
            other => Err(format!("unknown screen reporting mode '{other}'")),
        }
    }
}

/// Screen logging configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    pub reporting: ScreenReporting,
}
