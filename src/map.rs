use geo_types::{coord, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{Alert, Controls, Coordinates, RouteSegment, Waypoint};
use crate::error::{invalid_input_error, Error};

const REGION_PADDING: f64 = 0.1;
const MIN_REGION_SPAN: f64 = 0.01;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    pub color: String,
    pub width: f64,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: "#ff0000".into(),
            width: 3.0,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Annotation {
    pub waypoint_id: Uuid,
    pub title: String,
    pub coordinates: Coordinates,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Overlay {
    pub segment: RouteSegment,
    pub stroke: StrokeStyle,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MapSnapshot {
    pub waypoints: Vec<Waypoint>,
    pub map: MapView,
}

/// Display state of the map: what a client draws.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MapView {
    pub annotations: Vec<Annotation>,
    pub overlays: Vec<Overlay>,
    pub region: Option<Rect<f64>>,
    pub controls: Controls,
    pub alerts: Vec<Alert>,
}

impl MapView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the pins with one per waypoint and fits the region around them.
    pub fn show_annotations(&mut self, waypoints: &[Waypoint]) {
        self.annotations = waypoints
            .iter()
            .map(|waypoint| Annotation {
                waypoint_id: waypoint.id,
                title: waypoint.label.clone(),
                coordinates: waypoint.coordinates,
            })
            .collect();

        self.region = fit_region(waypoints.iter().map(|waypoint| waypoint.coordinates));
    }

    pub fn remove_annotations(&mut self) {
        self.annotations.clear();
        self.region = None;
    }

    pub fn add_overlay(&mut self, segment: RouteSegment) {
        self.overlays.push(Overlay {
            segment,
            stroke: StrokeStyle::default(),
        });
    }

    pub fn remove_overlays(&mut self) {
        self.overlays.clear();
    }

    pub fn set_controls(&mut self, controls: Controls) {
        self.controls = controls;
    }

    pub fn alert(&mut self, alert: Alert) {
        tracing::info!("alert {:?}: {}", alert.kind, alert.message);
        self.alerts.push(alert);
    }

    pub fn dismiss_alert(&mut self, id: Uuid) -> Result<(), Error> {
        let index = self
            .alerts
            .iter()
            .position(|alert| alert.id == id)
            .ok_or_else(|| invalid_input_error())?;

        self.alerts.remove(index);
        Ok(())
    }
}

fn fit_region(coordinates: impl Iterator<Item = Coordinates>) -> Option<Rect<f64>> {
    let mut bounds: Option<(f64, f64, f64, f64)> = None;

    for c in coordinates {
        bounds = Some(match bounds {
            None => (c.longitude, c.latitude, c.longitude, c.latitude),
            Some((min_x, min_y, max_x, max_y)) => (
                min_x.min(c.longitude),
                min_y.min(c.latitude),
                max_x.max(c.longitude),
                max_y.max(c.latitude),
            ),
        });
    }

    let (min_x, min_y, max_x, max_y) = bounds?;
    let pad_x = ((max_x - min_x) * REGION_PADDING).max(MIN_REGION_SPAN / 2.0);
    let pad_y = ((max_y - min_y) * REGION_PADDING).max(MIN_REGION_SPAN / 2.0);

    Some(Rect::new(
        coord! { x: min_x - pad_x, y: min_y - pad_y },
        coord! { x: max_x + pad_x, y: max_y + pad_y },
    ))
}
