//! Day/night classification of the map disk around a sub-solar point.
//!
//! A tile is lit when its great-circle distance from the sun point is under a
//! quarter of the earth's circumference, shadowed otherwise, and skipped when
//! it lies outside the map disk. The terminator is therefore a fixed-radius
//! circle around the sun point on the sphere.

mod illumination;
mod mask;
mod sun;

pub use illumination::{Illumination, TERMINATOR_DISTANCE_KM, classify, classify_geo};
pub use mask::{IlluminationCounts, IlluminationMask, TileGrid};
pub use sun::{FrameInput, SunState};
