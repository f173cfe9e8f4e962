//! Mapping between pixel coordinates on a render surface and the map disk.

use glam::DVec2;
use terminus_geo::{GeoPoint, PlanarPoint};

use crate::{ProjectionError, from_planar};

/// Placement of the map disk on a pixel surface.
///
/// Pixel space is used as-is: no axis is flipped, so with screen y pointing
/// down, longitude 0 points toward the bottom of the surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenMapping {
    center: DVec2,
    radius: f64,
}

impl ScreenMapping {
    /// Create a mapping for a disk centered at `center` with `radius` pixels.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectionError`] if the radius is not finite and positive,
    /// or if the center is not finite.
    pub fn new(center: DVec2, radius: f64) -> Result<Self, ProjectionError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(ProjectionError::InvalidRadius(radius));
        }
        if !center.is_finite() {
            return Err(ProjectionError::InvalidCenter(center.x, center.y));
        }
        Ok(Self { center, radius })
    }

    /// Largest disk that fits a `width` x `height` surface, centered on it.
    pub fn for_surface(width: u32, height: u32) -> Result<Self, ProjectionError> {
        let size = DVec2::new(width as f64, height as f64);
        Self::new(size / 2.0, size.min_element() / 2.0)
    }

    pub fn center(&self) -> DVec2 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Normalize a pixel position onto the disk.
    pub fn pixel_to_planar(&self, pixel: DVec2) -> PlanarPoint {
        ((pixel - self.center) / self.radius).into()
    }

    /// Pixel position of a planar disk point.
    pub fn planar_to_pixel(&self, p: PlanarPoint) -> DVec2 {
        self.center + self.radius * p.as_dvec2()
    }

    /// Geographic point under a pixel. May be off the map.
    pub fn pointer_to_geo(&self, pixel: DVec2) -> GeoPoint {
        from_planar(self.pixel_to_planar(pixel))
    }
}

/// Geographic point under `pixel` for a disk at `center` with `radius` pixels.
///
/// Unlike [`ScreenMapping::new`] this does not validate its inputs; a zero
/// radius yields non-finite coordinates.
pub fn pointer_to_geo(pixel: DVec2, center: DVec2, radius: f64) -> GeoPoint {
    from_planar(((pixel - center) / radius).into())
}
