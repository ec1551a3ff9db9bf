use geo_types::{Coord, LineString};

use crate::error::{invalid_input_error, Error};

const PRECISION: f64 = 1e5;

/// Decodes a Google encoded polyline into a line string of (lng, lat) coords.
pub fn decode(encoded: &str) -> Result<LineString<f64>, Error> {
    let bytes = encoded.as_bytes();
    let mut index = 0;
    let mut latitude: i64 = 0;
    let mut longitude: i64 = 0;
    let mut coords = vec![];

    while index < bytes.len() {
        latitude = latitude
            .checked_add(next_value(bytes, &mut index)?)
            .ok_or_else(|| invalid_input_error())?;
        longitude = longitude
            .checked_add(next_value(bytes, &mut index)?)
            .ok_or_else(|| invalid_input_error())?;

        coords.push(Coord {
            x: longitude as f64 / PRECISION,
            y: latitude as f64 / PRECISION,
        });
    }

    Ok(LineString::new(coords))
}

fn next_value(bytes: &[u8], index: &mut usize) -> Result<i64, Error> {
    let mut result: i64 = 0;
    let mut shift = 0;

    loop {
        let byte = *bytes.get(*index).ok_or_else(|| invalid_input_error())?;
        *index += 1;

        if !(63..127).contains(&byte) || shift > 60 {
            return Err(invalid_input_error());
        }

        let chunk = (byte - 63) as i64;
        result |= (chunk & 0x1f) << shift;
        shift += 5;

        if chunk < 0x20 {
            break;
        }
    }

    if result & 1 == 1 {
        Ok(!(result >> 1))
    } else {
        Ok(result >> 1)
    }
}
