//! Per-tile illumination decision.

use terminus_geo::{EARTH_CIRCUMFERENCE_KM, GeoPoint, PlanarPoint, spherical_distance};
use terminus_projection::from_planar;

/// Great-circle distance from the sun point at which night begins, in km.
pub const TERMINATOR_DISTANCE_KM: f64 = EARTH_CIRCUMFERENCE_KM / 4.0;

/// Lighting state of one tile of the map disk.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Illumination {
    /// The tile does not correspond to any point on the map. Draw nothing.
    OutsideMap,
    /// Within the terminator. No overlay.
    Lit,
    /// Beyond the terminator. Draw the night overlay.
    Shadowed,
}

impl Illumination {
    /// Whether the night overlay is drawn for this tile.
    pub fn draws_overlay(self) -> bool {
        self == Self::Shadowed
    }
}

/// Classify a tile given its planar disk coordinates.
pub fn classify(sun: GeoPoint, tile: PlanarPoint) -> Illumination {
    classify_geo(sun, from_planar(tile))
}

/// Classify a tile that has already been inverse-projected.
///
/// `tile` with `lat < -90` is the off-map sentinel.
pub fn classify_geo(sun: GeoPoint, tile: GeoPoint) -> Illumination {
    if !tile.is_on_map() {
        return Illumination::OutsideMap;
    }

    if spherical_distance(sun, tile) < TERMINATOR_DISTANCE_KM {
        Illumination::Lit
    } else {
        Illumination::Shadowed
    }
}
