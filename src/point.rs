// src/point.rs

use serde::{Deserialize, Serialize};

use crate::bbox::{bounding_box, BoundingBox};
use crate::distance::calculate_distance;
use crate::error::GeoError;

/// A geographical point: latitude and longitude in degrees.
///
/// Construction never validates. An out-of-range point is representable and
/// the distance math will happily produce garbage for it; call
/// [`GeoPoint::is_valid`] (or construct via [`GeoPoint::validated`]) before
/// trusting coordinates that came from the outside.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Creates a new `GeoPoint` without validating the coordinates.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        GeoPoint {
            latitude,
            longitude,
        }
    }

    /// Strict constructor for untrusted input.
    ///
    /// Rejects out-of-range and non-finite coordinates instead of letting
    /// them propagate into the distance math.
    pub fn validated(latitude: f64, longitude: f64) -> Result<Self, GeoError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(GeoError::InvalidLatitude(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(GeoError::InvalidLongitude(longitude));
        }
        Ok(GeoPoint {
            latitude,
            longitude,
        })
    }

    /// Strict counterpart of [`parse_coordinates`], reporting why the string
    /// was rejected instead of collapsing every failure into `None`.
    pub fn try_parse(text: &str) -> Result<Self, GeoError> {
        let tokens: Vec<&str> = text.split(',').collect();
        if tokens.len() != 2 {
            return Err(GeoError::MalformedCoordinates(text.to_string()));
        }
        let latitude: f64 = tokens[0]
            .trim()
            .parse()
            .map_err(|_| GeoError::MalformedCoordinates(text.to_string()))?;
        let longitude: f64 = tokens[1]
            .trim()
            .parse()
            .map_err(|_| GeoError::MalformedCoordinates(text.to_string()))?;
        GeoPoint::validated(latitude, longitude)
    }

    /// Whether both coordinates lie within their legal degree ranges.
    pub fn is_valid(&self) -> bool {
        is_valid_coordinates(self.latitude, self.longitude)
    }

    /// Great-circle distance to another point in kilometers, two-decimal
    /// rounded. Permissive like [`calculate_distance`].
    pub fn distance_to(&self, other: &GeoPoint) -> f64 {
        calculate_distance(
            self.latitude,
            self.longitude,
            other.latitude,
            other.longitude,
        )
    }

    /// Approximate square search region of `radius_km` around this point.
    /// See [`bounding_box`] for the caveats.
    pub fn bounding_box(&self, radius_km: f64) -> BoundingBox {
        bounding_box(self.latitude, self.longitude, radius_km)
    }
}

/// `lat ∈ [-90, 90] ∧ lon ∈ [-180, 180]`, inclusive on both ends. NaN fails
/// both checks.
pub fn is_valid_coordinates(latitude: f64, longitude: f64) -> bool {
    (-90.0..=90.0).contains(&latitude) && (-180.0..=180.0).contains(&longitude)
}

/// Parses a `"lat, lon"` string into a [`GeoPoint`].
///
/// Splits on `,` and trims each token. Returns `None` (never an error) when
/// the token count is not exactly two, either token fails to parse as a
/// float, or the parsed pair is out of coordinate range.
///
/// Token order is latitude first, which is the opposite of the GeoJSON
/// `[lng, lat]` convention. Callers feeding GeoJSON-ordered text must swap
/// before parsing.
pub fn parse_coordinates(text: &str) -> Option<GeoPoint> {
    let tokens: Vec<&str> = text.split(',').collect();
    if tokens.len() != 2 {
        return None;
    }
    let latitude: f64 = tokens[0].trim().parse().ok()?;
    let longitude: f64 = tokens[1].trim().parse().ok()?;
    if !is_valid_coordinates(latitude, longitude) {
        return None;
    }
    Some(GeoPoint {
        latitude,
        longitude,
    })
}
