//! Forward and inverse polar projection centered on the north pole.
//!
//! Longitude becomes the polar angle, with lon = 0 along +y and increasing
//! longitude rotating toward -x. Latitude becomes the radius linearly.

use terminus_geo::{GeoPoint, MAX_LATITUDE_DEG, PlanarPoint};

/// Degrees of latitude spanned from the disk center to its edge.
const LATITUDE_SPAN_DEG: f64 = 180.0;

/// Project a geographic point onto the map disk.
///
/// `lat = 90` maps to the origin for every longitude and `lat = -90` lands on
/// the unit circle.
pub fn to_planar(g: GeoPoint) -> PlanarPoint {
    let r = -(g.lat - MAX_LATITUDE_DEG) / LATITUDE_SPAN_DEG;
    let (sin_th, cos_th) = g.lon.to_radians().sin_cos();
    PlanarPoint::new(r * -sin_th, r * cos_th)
}

/// Recover the geographic point for a planar disk position.
///
/// The latitude is not clamped: any point with length > 1 yields
/// `lat < -90` (see [`GeoPoint::is_on_map`]). The origin yields the north
/// pole with `lon = 0`.
pub fn from_planar(p: PlanarPoint) -> GeoPoint {
    let r = p.length();
    let th = (-p.x).atan2(p.y);

    GeoPoint::new(-r * LATITUDE_SPAN_DEG + MAX_LATITUDE_DEG, th.to_degrees())
}
