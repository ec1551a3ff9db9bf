use geo_types::LineString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::Coordinates;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelMode {
    Walking,
}

impl TravelMode {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Walking => "walking",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DirectionsRequest {
    pub origin: Coordinates,
    pub destination: Coordinates,
    pub mode: TravelMode,
    pub alternatives: bool,
}

impl DirectionsRequest {
    pub fn walking(origin: Coordinates, destination: Coordinates) -> Self {
        Self {
            origin,
            destination,
            mode: TravelMode::Walking,
            alternatives: true,
        }
    }
}

/// One alternative path offered by the directions service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PathCandidate {
    pub distance: f64,
    pub path: LineString<f64>,
}

/// Rendered path between `Waypoint[from]` and `Waypoint[to]`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RouteSegment {
    pub id: Uuid,
    pub from: usize,
    pub to: usize,
    pub distance: f64,
    pub path: LineString<f64>,
}

impl RouteSegment {
    pub fn new(from: usize, candidate: PathCandidate) -> Self {
        Self {
            id: Uuid::new_v4(),
            from,
            to: from + 1,
            distance: candidate.distance,
            path: candidate.path,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RouteSummary {
    pub requested: usize,
    pub segments: Vec<RouteSegment>,
    pub failed_pairs: Vec<usize>,
}

impl RouteSummary {
    pub fn new(requested: usize) -> Self {
        Self {
            requested,
            segments: Vec::with_capacity(requested),
            failed_pairs: vec![],
        }
    }

    pub fn completed(&self) -> usize {
        self.segments.len() + self.failed_pairs.len()
    }

    pub fn is_complete(&self) -> bool {
        self.completed() == self.requested
    }
}
