//! Service stubs shared by the controller and server tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use geo_types::{Coord, LineString};
use tokio::sync::Notify;

use crate::entities::{Coordinates, DirectionsRequest, PathCandidate};
use crate::error::{upstream_error, Error};
use crate::external::{Directions, Geocoder, Placemark};

#[derive(Default)]
pub struct StubGeocoder {
    pub places: HashMap<String, Coordinates>,
    pub calls: AtomicUsize,
    pub gate: Option<Arc<Notify>>,
}

impl StubGeocoder {
    pub fn new() -> Self {
        let places = [
            ("a", (55.0, 37.0)),
            ("b", (55.1, 37.1)),
            ("c", (55.2, 37.2)),
            ("d", (55.3, 37.3)),
            ("pole", (95.0, 37.0)),
        ]
        .into_iter()
        .map(|(name, (lat, lng))| (name.to_string(), Coordinates::new(lat, lng)))
        .collect();

        Self {
            places,
            ..Default::default()
        }
    }

    pub fn gated(gate: Arc<Notify>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::new()
        }
    }

    pub fn coordinates(&self, name: &str) -> Coordinates {
        self.places[name]
    }
}

#[async_trait]
impl Geocoder for StubGeocoder {
    async fn geocode(&self, address: &str) -> Result<Vec<Placemark>, Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        if address == "explode" {
            panic!("geocoder blew up on {}", address);
        }

        if address == "offline" {
            return Err(upstream_error());
        }

        Ok(self
            .places
            .get(address)
            .map(|coordinates| {
                vec![Placemark {
                    formatted_address: address.to_uppercase(),
                    coordinates: *coordinates,
                }]
            })
            .unwrap_or_default())
    }
}

#[derive(Default)]
pub struct StubDirections {
    pub distances: Vec<f64>,
    pub failing_origins: Vec<Coordinates>,
    pub panicking_origins: Vec<Coordinates>,
    pub requests: Mutex<Vec<DirectionsRequest>>,
    pub gate: Option<Arc<Notify>>,
}

impl StubDirections {
    pub fn with_distances(distances: &[f64]) -> Self {
        Self {
            distances: distances.to_vec(),
            ..Default::default()
        }
    }

    pub fn requests(&self) -> Vec<DirectionsRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Directions for StubDirections {
    async fn directions(&self, request: DirectionsRequest) -> Result<Vec<PathCandidate>, Error> {
        self.requests.lock().unwrap().push(request.clone());

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        if self.panicking_origins.contains(&request.origin) {
            panic!("directions blew up for {:?}", request.origin);
        }

        if self.failing_origins.contains(&request.origin) {
            return Err(upstream_error());
        }

        let path = LineString::from(vec![
            Coord::from(request.origin),
            Coord::from(request.destination),
        ]);

        Ok(self
            .distances
            .iter()
            .map(|distance| PathCandidate {
                distance: *distance,
                path: path.clone(),
            })
            .collect())
    }
}
