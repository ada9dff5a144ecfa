#[cfg(test)]
mod serialization_tests {
    use geonear_rs::{bounding_box, BoundingBox, GeoPoint};
    use serde_json::json;

    #[test]
    fn test_geo_point_wire_shape() {
        let point = GeoPoint::new(12.34, -56.78);
        let value = serde_json::to_value(point).expect("GeoPoint should serialize");
        assert_eq!(value, json!({"latitude": 12.34, "longitude": -56.78}));
    }

    #[test]
    fn test_geo_point_round_trip() {
        let point = GeoPoint::new(48.8566, 2.3522);
        let text = serde_json::to_string(&point).expect("GeoPoint should serialize");
        let back: GeoPoint = serde_json::from_str(&text).expect("GeoPoint should deserialize");
        assert_eq!(back, point);
    }

    #[test]
    fn test_deserialization_does_not_validate_ranges() {
        // Validity is checked, never enforced by construction; the wire layer
        // follows the same rule.
        let point: GeoPoint = serde_json::from_value(json!({"latitude": 100.0, "longitude": 0.0}))
            .expect("Out-of-range GeoPoint should still deserialize");
        assert!(!point.is_valid());
    }

    #[test]
    fn test_bounding_box_round_trip() {
        let bbox = bounding_box(40.7128, -74.0060, 10.0);
        let text = serde_json::to_string(&bbox).expect("BoundingBox should serialize");
        let back: BoundingBox = serde_json::from_str(&text).expect("BoundingBox should deserialize");
        assert_eq!(back, bbox);
    }
}
