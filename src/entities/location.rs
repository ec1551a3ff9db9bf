use geo_types::Coord;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

impl From<Coordinates> for String {
    fn from(coordinates: Coordinates) -> Self {
        format!("{},{}", coordinates.latitude, coordinates.longitude)
    }
}

impl From<Coordinates> for Coord<f64> {
    fn from(coordinates: Coordinates) -> Self {
        Coord {
            x: coordinates.longitude,
            y: coordinates.latitude,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_string_is_lat_lng() {
        let location: String = Coordinates::new(55.75, 37.62).into();
        assert_eq!(location, "55.75,37.62");
    }

    #[test]
    fn coord_uses_longitude_as_x() {
        let coord: Coord<f64> = Coordinates::new(55.75, 37.62).into();
        assert_eq!(coord.x, 37.62);
        assert_eq!(coord.y, 55.75);
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(Coordinates::new(10.0, 20.0).is_valid());
        assert!(!Coordinates::new(91.0, 20.0).is_valid());
        assert!(!Coordinates::new(10.0, f64::NAN).is_valid());
    }
}
