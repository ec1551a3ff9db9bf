use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::Coordinates;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Waypoint {
    pub id: Uuid,
    pub label: String,
    pub coordinates: Coordinates,
    pub created_at: DateTime<Utc>,
}

impl Waypoint {
    pub fn new(label: String, coordinates: Coordinates) -> Self {
        Self {
            id: Uuid::new_v4(),
            label,
            coordinates,
            created_at: Utc::now(),
        }
    }
}
