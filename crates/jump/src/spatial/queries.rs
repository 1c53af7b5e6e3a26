//! Spatial query utilities for distance calculations.
//!
//! Uses the Haversine formula on a spherical Earth. Points follow the
//! `geo` convention: x is longitude, y is latitude, both in degrees.

use geo::Point;

/// Mean Earth radius in miles
pub const EARTH_RADIUS_MILES: f64 = 3958.756;

fn hsin(theta: f64) -> f64 {
    (theta / 2.0).sin().powi(2)
}

/// Calculate Haversine distance between two points in miles
///
/// Coordinates are not range-checked; out-of-range degrees go straight
/// into the formula.
pub fn haversine_miles(p1: Point, p2: Point) -> f64 {
    let (lat1, lon1) = (p1.y().to_radians(), p1.x().to_radians());
    let (lat2, lon2) = (p2.y().to_radians(), p2.x().to_radians());

    let h = hsin(lat2 - lat1) + lat1.cos() * lat2.cos() * hsin(lon2 - lon1);

    2.0 * EARTH_RADIUS_MILES * h.sqrt().asin()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use geo::HaversineDistance;

    const METERS_PER_MILE: f64 = 1609.344;

    #[test]
    fn test_one_degree_of_longitude_at_equator() {
        let dist = haversine_miles(Point::new(0.0, 0.0), Point::new(1.0, 0.0));
        assert_relative_eq!(dist, 69.17, max_relative = 0.005);
    }

    #[test]
    fn test_one_degree_of_latitude() {
        let dist = haversine_miles(Point::new(0.0, 0.0), Point::new(0.0, 1.0));
        assert_relative_eq!(dist, 69.17, max_relative = 0.005);
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let sf = Point::new(-122.4194, 37.7749);
        assert_eq!(haversine_miles(sf, sf), 0.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let pairs = [
            (Point::new(-122.4194, 37.7749), Point::new(-122.2711, 37.8044)),
            (Point::new(-74.0060, 40.7128), Point::new(-118.2437, 34.0522)),
            (Point::new(179.5, -10.0), Point::new(-179.5, 10.0)),
        ];

        for (a, b) in pairs {
            assert_eq!(haversine_miles(a, b), haversine_miles(b, a));
        }
    }

    #[test]
    fn test_matches_geo_haversine() {
        // NYC to LA, about 2,445 miles
        let nyc = Point::new(-74.0060, 40.7128);
        let la = Point::new(-118.2437, 34.0522);

        let miles = haversine_miles(nyc, la);
        let meters = nyc.haversine_distance(&la);
        assert_relative_eq!(miles * METERS_PER_MILE, meters, max_relative = 0.001);
    }

    #[test]
    fn test_out_of_range_input_is_not_rejected() {
        let dist = haversine_miles(Point::new(0.0, 0.0), Point::new(400.0, 95.0));
        assert!(dist.is_finite());
    }
}
