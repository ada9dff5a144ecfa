// src/distance.rs

use std::f64::consts::PI;

/// Mean Earth radius in kilometers, as used by the Haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Kilometers spanned by one degree of latitude (and by one degree of
/// longitude at the equator).
pub const KM_PER_DEGREE: f64 = 111.32;

/// Converts degrees to radians.
pub fn to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Converts radians to degrees. Exact inverse of [`to_radians`].
pub fn to_degrees(radians: f64) -> f64 {
    radians * 180.0 / PI
}

/// Great-circle distance between two points in kilometers, rounded to two
/// decimal places.
///
/// Inputs are degrees. No range validation is performed: out-of-range or
/// non-finite coordinates produce NaN/garbage output rather than an error.
/// Callers holding untrusted input should validate first, e.g. with
/// [`crate::point::is_valid_coordinates`].
///
/// The two-decimal rounding is a display/storage convention applied after the
/// full-precision computation; it is `(d * 100).round() / 100` exactly, so
/// results compare equal across call sites.
pub fn calculate_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = to_radians(lat2 - lat1);
    let d_lon = to_radians(lon2 - lon1);

    let a = (d_lat / 2.0).sin().powi(2)
        + to_radians(lat1).cos() * to_radians(lat2).cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    let distance = EARTH_RADIUS_KM * c;
    (distance * 100.0).round() / 100.0
}

/// Whether the point lies within `radius_km` of the center, boundary
/// inclusive.
///
/// The comparison uses the rounded output of [`calculate_distance`], so a
/// point whose rounded distance equals `radius_km` counts as within.
pub fn is_within_radius(
    center_lat: f64,
    center_lon: f64,
    point_lat: f64,
    point_lon: f64,
    radius_km: f64,
) -> bool {
    calculate_distance(center_lat, center_lon, point_lat, point_lon) <= radius_km
}

/// Renders a distance for display: integer meters below 1 km, otherwise
/// kilometers with one decimal digit.
///
/// Negative input is not guarded and formats verbatim.
pub fn format_distance(distance_km: f64) -> String {
    if distance_km < 1.0 {
        format!("{}m", (distance_km * 1000.0).round() as i64)
    } else {
        format!("{:.1}km", distance_km)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_degree_of_longitude_at_the_equator() {
        assert_eq!(calculate_distance(0.0, 0.0, 0.0, 1.0), 111.19);
    }

    #[test]
    fn identical_points_are_zero_distance() {
        assert_eq!(calculate_distance(48.8566, 2.3522, 48.8566, 2.3522), 0.0);
    }

    #[test]
    fn radians_round_trip() {
        for degrees in [-180.0, -90.0, -45.5, 0.0, 12.34, 90.0, 179.9] {
            let back = to_degrees(to_radians(degrees));
            assert!(
                (back - degrees).abs() < 1e-12,
                "Round-trip drifted for {degrees}: got {back}"
            );
        }
    }

    #[test]
    fn formatting_switches_units_at_one_kilometer() {
        assert_eq!(format_distance(0.5), "500m");
        assert_eq!(format_distance(0.001), "1m");
        assert_eq!(format_distance(2.5), "2.5km");
        assert_eq!(format_distance(1.0), "1.0km");
    }
}
