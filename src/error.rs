// src/error.rs
use thiserror::Error;

/// Errors produced by the strict entry points (`GeoPoint::validated`,
/// `NearbyQuery::new`, `GeoPoint::try_parse`).
///
/// The permissive numeric functions in [`crate::distance`] never return these;
/// out-of-range or non-finite inputs there propagate as NaN/infinity in the
/// output instead of being reported.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeoError {
    #[error("Latitude out of range [-90, 90]: {0}")]
    InvalidLatitude(f64),

    #[error("Longitude out of range [-180, 180]: {0}")]
    InvalidLongitude(f64),

    #[error("Search radius must be a finite, non-negative number of kilometers, got {0}")]
    InvalidRadius(f64),

    #[error("Malformed coordinate string: {0}")]
    MalformedCoordinates(String),
}
