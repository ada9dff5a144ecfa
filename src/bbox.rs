// src/bbox.rs

use serde::{Deserialize, Serialize};

use crate::distance::{to_radians, KM_PER_DEGREE};
use crate::point::GeoPoint;

/// Axis-aligned search region around a center point, in degrees.
///
/// This is a candidate-set pre-filter for a storage query, not an exact
/// boundary: records inside the box still need an exact distance check, and
/// the bounds are deliberately NOT clamped to the legal [-90, 90] and
/// [-180, 180] ranges. A radius that pushes a bound past a pole or across the
/// antimeridian produces out-of-range values the caller must handle.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl BoundingBox {
    /// Inclusive membership test against both coordinate ranges.
    pub fn contains(&self, point: &GeoPoint) -> bool {
        point.latitude >= self.min_lat
            && point.latitude <= self.max_lat
            && point.longitude >= self.min_lon
            && point.longitude <= self.max_lon
    }
}

/// Derives the approximate square region spanning `radius_km` in every
/// direction from the center.
///
/// One degree of latitude is taken as a constant 111.32 km; longitude degrees
/// shrink by `cos(latitude)`. The cosine division is not guarded: as the
/// center approaches a pole the longitude delta diverges, and the resulting
/// box spans an absurdly wide (still finite in f64, since `cos` never reaches
/// exactly zero there) longitude range. That still behaves as a correct,
/// merely useless, pre-filter, so it is left as is.
pub fn bounding_box(latitude: f64, longitude: f64, radius_km: f64) -> BoundingBox {
    let lat_delta = radius_km / KM_PER_DEGREE;
    let lon_delta = radius_km / (KM_PER_DEGREE * to_radians(latitude).cos());

    BoundingBox {
        min_lat: latitude - lat_delta,
        max_lat: latitude + lat_delta,
        min_lon: longitude - lon_delta,
        max_lon: longitude + lon_delta,
    }
}
