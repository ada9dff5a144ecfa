pub mod bbox;
pub mod distance;
pub mod error;
pub mod point;
pub mod query;

pub use bbox::{bounding_box, BoundingBox};
pub use distance::{
    calculate_distance, format_distance, is_within_radius, to_degrees, to_radians,
    EARTH_RADIUS_KM, KM_PER_DEGREE,
};
pub use error::GeoError;
pub use point::{is_valid_coordinates, parse_coordinates, GeoPoint};
pub use query::NearbyQuery;
