use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    GeocodeUnavailable,
    RouteUnavailable,
}

/// Informational dialog shown to the user until dismissed.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Alert {
    pub id: Uuid,
    pub kind: AlertKind,
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn new(kind: AlertKind) -> Self {
        let message = match kind {
            AlertKind::GeocodeUnavailable => "Server is unavailable. Try adding the address again",
            AlertKind::RouteUnavailable => "Route is unavailable",
        };

        Self {
            id: Uuid::new_v4(),
            kind,
            title: "Error".into(),
            message: message.into(),
        }
    }
}
