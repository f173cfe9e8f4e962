//! Azimuthal projection between the sphere and the map disk, and the mapping
//! between the disk and a pixel surface.
//!
//! # Coordinate Spaces
//!
//! 1. **Geographic** — [`GeoPoint`], latitude/longitude in degrees
//! 2. **Planar** — [`PlanarPoint`], normalized disk with the north pole at the
//!    origin and the south pole on the unit circle
//! 3. **Pixel** — `DVec2` on the render surface, mapped to the disk by a
//!    [`ScreenMapping`]
//!
//! The planar radius is linear in latitude (`r = (90 - lat) / 180`), so the
//! disk is only approximately equidistant. Planar points outside the unit
//! disk invert to `lat < -90`, which callers treat as "off the map".
//!
//! ```rust
//! use terminus_geo::GeoPoint;
//! use terminus_projection::{from_planar, to_planar};
//!
//! let equator = GeoPoint::new(0.0, 90.0);
//! let p = to_planar(equator);
//! assert!((p.length() - 0.5).abs() < 1e-12);
//!
//! let back = from_planar(p);
//! assert!((back.lat - equator.lat).abs() < 1e-9);
//! assert!((back.lon - equator.lon).abs() < 1e-9);
//! ```

mod azimuthal;
mod error;
mod screen;

pub use azimuthal::{from_planar, to_planar};
pub use error::ProjectionError;
pub use screen::{ScreenMapping, pointer_to_geo};

pub use terminus_geo::{GeoPoint, PlanarPoint};
