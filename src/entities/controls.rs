use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Controls {
    pub route_visible: bool,
    pub reset_visible: bool,
}

impl Controls {
    pub fn enabled() -> Self {
        Self {
            route_visible: true,
            reset_visible: true,
        }
    }
}

/// Where an operation was requested from. `Control` requests are refused
/// while the matching control is hidden.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trigger {
    Control,
    Direct,
}
