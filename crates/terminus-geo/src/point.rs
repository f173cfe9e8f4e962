//! Point types for the sphere and for the projection disk.

use std::fmt;

use glam::DVec2;

use crate::MIN_LATITUDE_DEG;

/// A point on the sphere expressed as latitude and longitude in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct GeoPoint {
    /// Latitude in degrees. 90 at the north pole, -90 at the south pole.
    ///
    /// Values below -90 are produced by the inverse projection for planar
    /// points outside the unit disk and mean "not on the map".
    pub lat: f64,
    /// Longitude in degrees. Range: (-180, 180\].
    /// 0 at the reference meridian, positive = **west**.
    pub lon: f64,
}

impl GeoPoint {
    /// The north pole. Its longitude is arbitrary.
    pub const NORTH_POLE: Self = Self { lat: 90.0, lon: 0.0 };

    /// Create a new geographic point.
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Returns `false` for the off-map sentinel (`lat < -90`).
    pub fn is_on_map(&self) -> bool {
        self.lat >= MIN_LATITUDE_DEG
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lat_dir = if self.lat >= 0.0 { "N" } else { "S" };
        let lon_dir = if self.lon >= 0.0 { "W" } else { "E" };
        write!(
            f,
            "{:.1}\u{00B0}{}, {:.1}\u{00B0}{}",
            self.lat.abs(),
            lat_dir,
            self.lon.abs(),
            lon_dir,
        )
    }
}

/// A point on the normalized projection disk.
///
/// The north pole sits at the origin and the south pole on the unit circle.
/// Points with length greater than 1 are representable but lie off the map.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct PlanarPoint {
    pub x: f64,
    pub y: f64,
}

impl PlanarPoint {
    /// Disk center, where the north pole projects.
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Distance from the disk center.
    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn as_dvec2(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

impl From<DVec2> for PlanarPoint {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<PlanarPoint> for DVec2 {
    fn from(p: PlanarPoint) -> Self {
        p.as_dvec2()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_format() {
        let washington = GeoPoint::new(47.7511, 120.7401);
        assert_eq!(format!("{washington}"), "47.8\u{00B0}N, 120.7\u{00B0}W");

        let cape_town = GeoPoint::new(-33.9, -18.4);
        assert_eq!(format!("{cape_town}"), "33.9\u{00B0}S, 18.4\u{00B0}E");
    }

    #[test]
    fn test_on_map_boundary() {
        assert!(GeoPoint::new(-90.0, 0.0).is_on_map(), "South pole is on the map");
        assert!(GeoPoint::NORTH_POLE.is_on_map());
        assert!(!GeoPoint::new(-90.0001, 0.0).is_on_map());
        assert!(!GeoPoint::new(-180.0, 45.0).is_on_map());
    }

    #[test]
    fn test_planar_length() {
        assert_eq!(PlanarPoint::new(3.0, 4.0).length(), 5.0);
        assert_eq!(PlanarPoint::ORIGIN.length(), 0.0);
    }

    #[test]
    fn test_dvec2_conversion() {
        let p = PlanarPoint::new(0.25, -0.5);
        let v: DVec2 = p.into();
        assert_eq!(v, DVec2::new(0.25, -0.5));
        assert_eq!(PlanarPoint::from(v), p);
    }
}
