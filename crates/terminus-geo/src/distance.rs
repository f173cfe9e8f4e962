//! Great-circle distance on a spherical earth.

use crate::{EARTH_RADIUS_KM, GeoPoint};

/// Length of the shortest path between `a` and `b` along the earth's surface,
/// in kilometers.
///
/// Uses the haversine formula on a sphere of radius [`EARTH_RADIUS_KM`].
/// The haversine term is clamped to `[0, 1]` so rounding near antipodal or
/// coincident points never leaves the domain of `asin`.
pub fn spherical_distance(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1 = a.lat.to_radians();
    let lon1 = a.lon.to_radians();
    let lat2 = b.lat.to_radians();
    let lon2 = b.lon.to_radians();

    let u = ((lat2 - lat1) / 2.0).sin();
    let v = ((lon2 - lon1) / 2.0).sin();

    let h = (u * u + lat1.cos() * lat2.cos() * v * v).clamp(0.0, 1.0);

    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

impl GeoPoint {
    /// Great-circle distance to `other` in kilometers. See [`spherical_distance`].
    pub fn spherical_distance(&self, other: &GeoPoint) -> f64 {
        spherical_distance(*self, *other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    const EPSILON_KM: f64 = 1e-6;

    #[test]
    fn test_quarter_great_circle_at_equator() {
        let d = spherical_distance(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 90.0));
        let expected = FRAC_PI_2 * EARTH_RADIUS_KM;
        assert!(
            (d - expected).abs() < 1e-6,
            "Expected {expected} km, got {d} km"
        );
        assert!((d - 10007.5).abs() < 0.1, "Expected ~10007.5 km, got {d}");
    }

    #[test]
    fn test_distance_is_symmetric() {
        let points = [
            GeoPoint::new(47.7511, 120.7401),
            GeoPoint::new(-33.9, -18.4),
            GeoPoint::new(0.0, 180.0),
            GeoPoint::new(-90.0, 0.0),
            GeoPoint::new(89.999, -45.0),
        ];
        for a in points {
            for b in points {
                let ab = spherical_distance(a, b);
                let ba = spherical_distance(b, a);
                assert!(
                    (ab - ba).abs() < EPSILON_KM,
                    "Distance {a} -> {b} = {ab}, reverse = {ba}"
                );
            }
        }
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        for lat in [-90.0, -45.5, 0.0, 12.25, 90.0] {
            for lon in [-179.0, -90.0, 0.0, 33.3, 180.0] {
                let p = GeoPoint::new(lat, lon);
                let d = p.spherical_distance(&p);
                assert!(d.abs() < EPSILON_KM, "Distance from {p} to itself was {d}");
            }
        }
    }

    #[test]
    fn test_pole_longitude_is_irrelevant() {
        let d = spherical_distance(GeoPoint::new(90.0, 0.0), GeoPoint::new(90.0, 180.0));
        assert!(d.is_finite(), "Pole distance must not be NaN");
        assert!(d < 1e-3, "Both points are the north pole, got {d} km");
    }

    #[test]
    fn test_antipodal_points_are_finite() {
        let d = spherical_distance(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 180.0));
        let half_circle = std::f64::consts::PI * EARTH_RADIUS_KM;
        assert!(d.is_finite(), "Antipodal distance must not be NaN");
        assert!((d - half_circle).abs() < 1e-6, "Expected {half_circle}, got {d}");

        let d = spherical_distance(GeoPoint::new(90.0, 0.0), GeoPoint::new(-90.0, 0.0));
        assert!((d - half_circle).abs() < 1e-6, "Pole to pole should be {half_circle}, got {d}");
    }

    #[test]
    fn test_distance_is_non_negative() {
        let a = GeoPoint::new(10.0, 20.0);
        let b = GeoPoint::new(10.0 + 1e-12, 20.0 - 1e-12);
        assert!(spherical_distance(a, b) >= 0.0);
    }

    #[test]
    fn test_new_york_to_london() {
        // Positive-west longitudes.
        let new_york = GeoPoint::new(40.7128, 74.0060);
        let london = GeoPoint::new(51.5074, 0.1278);
        let d = spherical_distance(new_york, london);
        assert!(
            (d - 5570.0).abs() < 50.0,
            "NYC to London should be ~5570 km, got {d} km"
        );
    }
}
