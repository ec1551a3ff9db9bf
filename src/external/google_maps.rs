use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    entities::{Coordinates, DirectionsRequest, PathCandidate},
    error::{invalid_input_error, upstream_error, Error},
    external::{polyline, Directions, Geocoder, Placemark},
};

#[derive(Clone, Debug, Serialize, Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

impl From<LatLng> for Coordinates {
    fn from(location: LatLng) -> Self {
        Coordinates::new(location.lat, location.lng)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Geometry {
    location: LatLng,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct GeocodeResult {
    formatted_address: String,
    geometry: Geometry,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Distance {
    value: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Leg {
    distance: Distance,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct OverviewPolyline {
    points: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct DirectionsRoute {
    legs: Vec<Leg>,
    overview_polyline: OverviewPolyline,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Response<T> {
    status: String,
    results: Option<T>,
    routes: Option<T>,
}

/// Client for the Google Geocoding and Directions web services.
#[derive(Clone, Debug)]
pub struct GoogleMaps {
    client: reqwest::Client,
    api_base: String,
    key: String,
}

impl GoogleMaps {
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: config.google_maps_api_base.clone(),
            key: config.google_maps_api_key.clone(),
        }
    }

    async fn get<T>(&self, path: &str, query: &[(&str, String)]) -> Result<Response<T>, Error>
    where
        T: for<'de> Deserialize<'de>,
    {
        let url = format!("https://{}/maps/api/{}/json", self.api_base, path);

        let res = self
            .client
            .get(url)
            .query(&[("key", self.key.as_str())])
            .query(query)
            .send()
            .await?;

        let status_code = res.status().as_u16();

        if status_code >= 400 && status_code < 500 {
            return Err(invalid_input_error());
        } else if status_code != 200 {
            return Err(upstream_error());
        }

        Ok(res.json().await?)
    }
}

#[async_trait]
impl Geocoder for GoogleMaps {
    #[tracing::instrument(skip(self))]
    async fn geocode(&self, address: &str) -> Result<Vec<Placemark>, Error> {
        let data = self
            .get("geocode", &[("address", address.to_string())])
            .await?;

        placemarks(data)
    }
}

#[async_trait]
impl Directions for GoogleMaps {
    #[tracing::instrument(skip(self))]
    async fn directions(&self, request: DirectionsRequest) -> Result<Vec<PathCandidate>, Error> {
        let origin: String = request.origin.into();
        let destination: String = request.destination.into();

        let data = self
            .get(
                "directions",
                &[
                    ("origin", origin),
                    ("destination", destination),
                    ("mode", request.mode.name().to_string()),
                    ("alternatives", request.alternatives.to_string()),
                ],
            )
            .await?;

        path_candidates(data)
    }
}

fn placemarks(data: Response<Vec<GeocodeResult>>) -> Result<Vec<Placemark>, Error> {
    match data.status.as_str() {
        "OK" => {}
        "ZERO_RESULTS" => return Ok(vec![]),
        status => {
            tracing::warn!("geocode returned status {}", status);
            return Err(upstream_error());
        }
    }

    let results = data.results.ok_or_else(|| upstream_error())?;

    Ok(results
        .into_iter()
        .map(|result| Placemark {
            formatted_address: result.formatted_address,
            coordinates: result.geometry.location.into(),
        })
        .collect())
}

fn path_candidates(data: Response<Vec<DirectionsRoute>>) -> Result<Vec<PathCandidate>, Error> {
    match data.status.as_str() {
        "OK" => {}
        "ZERO_RESULTS" => return Ok(vec![]),
        status => {
            tracing::warn!("directions returned status {}", status);
            return Err(upstream_error());
        }
    }

    let routes = data.routes.ok_or_else(|| upstream_error())?;

    routes
        .into_iter()
        .map(|route| {
            Ok(PathCandidate {
                distance: route.legs.iter().map(|leg| leg.distance.value).sum(),
                path: polyline::decode(&route.overview_polyline.points)
                    .map_err(|_| upstream_error())?,
            })
        })
        .collect()
}
