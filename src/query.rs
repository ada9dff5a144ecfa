// src/query.rs

use serde_json::{Map, Value};

use crate::bbox::{bounding_box, BoundingBox};
use crate::error::GeoError;
use crate::point::GeoPoint;

/// A center-and-radius nearby search, expressed as pure geometry.
///
/// The intended flow: build the query from user input, send
/// [`NearbyQuery::filter`] to the document store to cheaply narrow the
/// candidate set, then run the candidates through [`NearbyQuery::rank`] for
/// the exact Haversine refinement and ordering. The storage round-trip itself
/// belongs to the caller; nothing here performs I/O.
#[derive(Debug, Clone, PartialEq)]
pub struct NearbyQuery {
    center: GeoPoint,
    radius_km: f64,
    limit: Option<usize>,
}

impl NearbyQuery {
    /// Creates a new `NearbyQuery`.
    ///
    /// This is the untrusted-input seam, so unlike the permissive distance
    /// functions it rejects an out-of-range center and a negative or
    /// non-finite radius.
    pub fn new(center: GeoPoint, radius_km: f64) -> Result<Self, GeoError> {
        let center = GeoPoint::validated(center.latitude, center.longitude)?;
        if !radius_km.is_finite() || radius_km < 0.0 {
            return Err(GeoError::InvalidRadius(radius_km));
        }
        Ok(Self {
            center,
            radius_km,
            limit: None,
        })
    }

    /// Returns the query center.
    pub fn center(&self) -> &GeoPoint {
        &self.center
    }

    /// Returns the search radius in kilometers.
    pub fn radius_km(&self) -> f64 {
        self.radius_km
    }

    /// Caps the number of results [`NearbyQuery::rank`] returns.
    pub fn limit(&mut self, limit: usize) -> &mut Self {
        self.limit = Some(limit);
        self
    }

    /// The approximate square region this query pre-filters with.
    pub fn bounding_box(&self) -> BoundingBox {
        bounding_box(self.center.latitude, self.center.longitude, self.radius_km)
    }

    /// Renders the bounding box as a document-database range filter over the
    /// caller's latitude/longitude field names, e.g.
    /// `{"lat": {"$gte": .., "$lte": ..}, "lng": {"$gte": .., "$lte": ..}}`.
    ///
    /// This narrows the candidate set only; records matching the filter still
    /// need the exact check in [`NearbyQuery::matches`] or
    /// [`NearbyQuery::rank`].
    pub fn filter(&self, lat_field: &str, lon_field: &str) -> Value {
        let bbox = self.bounding_box();

        let mut conditions = Map::new();
        conditions.insert(lat_field.to_string(), range_condition(bbox.min_lat, bbox.max_lat));
        conditions.insert(lon_field.to_string(), range_condition(bbox.min_lon, bbox.max_lon));

        log::debug!(
            "NearbyQuery filter: center=({}, {}), radius={}km, fields=({}, {})",
            self.center.latitude,
            self.center.longitude,
            self.radius_km,
            lat_field,
            lon_field
        );

        Value::Object(conditions)
    }

    /// Exact membership test: is the point within the radius (inclusive)?
    pub fn matches(&self, point: &GeoPoint) -> bool {
        self.center.distance_to(point) <= self.radius_km
    }

    /// Refines a candidate set: computes the exact distance to each point,
    /// drops those beyond the radius, sorts ascending by distance, and applies
    /// the configured limit.
    ///
    /// Candidates with unparseable geometry (NaN distance) are dropped along
    /// with the out-of-radius ones.
    pub fn rank(&self, candidates: &[GeoPoint]) -> Vec<(GeoPoint, f64)> {
        let mut ranked: Vec<(GeoPoint, f64)> = candidates
            .iter()
            .map(|point| (*point, self.center.distance_to(point)))
            .filter(|(_, distance)| *distance <= self.radius_km)
            .collect();

        // NaN distances were filtered out above, so the comparison is total.
        ranked.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

        if let Some(limit) = self.limit {
            ranked.truncate(limit);
        }
        ranked
    }
}

// Helper building a {"$gte": min, "$lte": max} operator object.
fn range_condition(min: f64, max: f64) -> Value {
    let mut op_map = Map::new();
    op_map.insert("$gte".to_string(), Value::from(min));
    op_map.insert("$lte".to_string(), Value::from(max));
    Value::Object(op_map)
}
