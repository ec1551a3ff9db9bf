pub mod google_maps;
pub mod polyline;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::entities::{Coordinates, DirectionsRequest, PathCandidate};
use crate::error::Error;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Placemark {
    pub formatted_address: String,
    pub coordinates: Coordinates,
}

/// Resolves free text into candidate locations, best match first.
#[async_trait]
pub trait Geocoder {
    async fn geocode(&self, address: &str) -> Result<Vec<Placemark>, Error>;
}

#[async_trait]
pub trait Directions {
    async fn directions(&self, request: DirectionsRequest) -> Result<Vec<PathCandidate>, Error>;
}
