//! Geographic and planar point types plus great-circle distance for Terminus.
//!
//! [`GeoPoint`] is a latitude/longitude pair on a spherical earth, with
//! longitude increasing **westward**. [`PlanarPoint`] is a position on the
//! normalized projection disk (north pole at the origin, south pole on the
//! unit circle). Projection between the two lives in `terminus-projection`.

mod distance;
mod point;
mod units;

pub use distance::spherical_distance;
pub use point::{GeoPoint, PlanarPoint};
pub use units::{
    EARTH_CIRCUMFERENCE_KM, EARTH_RADIUS_KM, MAX_LATITUDE_DEG, MIN_LATITUDE_DEG,
};
