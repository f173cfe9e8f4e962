//! Tracked sub-solar point, carried from frame to frame by the caller.

use glam::DVec2;
use terminus_geo::{GeoPoint, PlanarPoint};
use terminus_projection::{ScreenMapping, to_planar};
use tracing::debug;

/// Per-frame input from the presentation layer.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameInput {
    /// Pointer position in pixel space, if the pointer is known.
    pub pointer: Option<DVec2>,
    /// The user asked to move the sun to the pointer this frame.
    pub update_requested: bool,
}

impl FrameInput {
    /// Input that moves the sun to `pointer`.
    pub fn move_to(pointer: DVec2) -> Self {
        Self {
            pointer: Some(pointer),
            update_requested: true,
        }
    }
}

/// Current sun position. Owned by the frame loop; never mutated in place.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SunState {
    position: GeoPoint,
}

impl SunState {
    pub fn new(position: GeoPoint) -> Self {
        Self { position }
    }

    pub fn position(&self) -> GeoPoint {
        self.position
    }

    /// Returns the state for the next frame.
    ///
    /// The sun moves to the point under the pointer only when an update was
    /// requested and a pointer position is available. A pointer outside the
    /// disk still moves the sun, to an off-map position.
    pub fn step(self, input: &FrameInput, mapping: &ScreenMapping) -> Self {
        match (input.update_requested, input.pointer) {
            (true, Some(pointer)) => {
                let position = mapping.pointer_to_geo(pointer);
                if !position.is_on_map() {
                    debug!("Sun moved off the map to lat {:.2}", position.lat);
                }
                Self { position }
            }
            _ => self,
        }
    }

    /// Disk position for the sun marker.
    pub fn marker_planar(&self) -> PlanarPoint {
        to_planar(self.position)
    }

    /// Pixel position for the sun marker.
    pub fn marker_pixel(&self, mapping: &ScreenMapping) -> DVec2 {
        mapping.planar_to_pixel(self.marker_planar())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping() -> ScreenMapping {
        ScreenMapping::new(DVec2::new(400.0, 400.0), 400.0).unwrap()
    }

    #[test]
    fn test_no_update_without_request() {
        let state = SunState::new(GeoPoint::new(10.0, 20.0));
        let input = FrameInput {
            pointer: Some(DVec2::new(400.0, 400.0)),
            update_requested: false,
        };
        assert_eq!(state.step(&input, &mapping()), state);
    }

    #[test]
    fn test_no_update_without_pointer() {
        let state = SunState::new(GeoPoint::new(10.0, 20.0));
        let input = FrameInput {
            pointer: None,
            update_requested: true,
        };
        assert_eq!(state.step(&input, &mapping()), state);
    }

    #[test]
    fn test_update_moves_to_pointer() {
        let state = SunState::new(GeoPoint::new(10.0, 20.0));
        let next = state.step(&FrameInput::move_to(DVec2::new(400.0, 400.0)), &mapping());
        assert!((next.position().lat - 90.0).abs() < 1e-9, "got {:?}", next.position());
    }

    #[test]
    fn test_off_map_pointer_still_moves() {
        let state = SunState::new(GeoPoint::new(10.0, 20.0));
        let next = state.step(&FrameInput::move_to(DVec2::new(0.0, 0.0)), &mapping());
        assert!(!next.position().is_on_map());
    }

    #[test]
    fn test_marker_pixel_roundtrips_pointer() {
        let m = mapping();
        let pointer = DVec2::new(612.0, 233.0);
        let state = SunState::new(GeoPoint::NORTH_POLE).step(&FrameInput::move_to(pointer), &m);
        let marker = state.marker_pixel(&m);
        assert!(
            (marker - pointer).length() < 1e-9,
            "Marker at {marker}, pointer at {pointer}"
        );
    }
}
