//! Per-frame driver: advance the sun state, classify the surface, render.
//!
//! The loop owns the only mutable copy of [`SunState`]; each frame replaces
//! it with the value returned by [`SunState::step`].

use std::time::{Duration, Instant};

use glam::DVec2;
use terminus_config::Config;
use terminus_geo::GeoPoint;
use terminus_lighting::{FrameInput, IlluminationCounts, IlluminationMask, SunState, TileGrid};
use terminus_projection::ScreenMapping;
use tracing::{debug, warn};

use crate::AppError;

/// Frames slower than this are reported at warn level.
pub const SLOW_FRAME: Duration = Duration::from_millis(250);

/// Summary of one completed frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameReport {
    /// Zero-based frame index.
    pub frame: u64,
    /// Sun position used for this frame.
    pub sun: GeoPoint,
    /// Pixel position of the sun marker.
    pub marker: DVec2,
    pub counts: IlluminationCounts,
    pub elapsed: Duration,
}

/// Frame loop state.
pub struct FrameLoop {
    sun: SunState,
    mapping: ScreenMapping,
    grid: TileGrid,
    frame_count: u64,
}

impl FrameLoop {
    pub fn new(initial_sun: GeoPoint, mapping: ScreenMapping, grid: TileGrid) -> Self {
        Self {
            sun: SunState::new(initial_sun),
            mapping,
            grid,
            frame_count: 0,
        }
    }

    /// Build the loop from the view, sun, and tile settings of `config`.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let mapping = ScreenMapping::for_surface(config.view.width, config.view.height)?;
        let grid = TileGrid::new(config.view.width, config.view.height, config.render.tile_step);
        let sun = GeoPoint::new(config.sun.latitude, config.sun.longitude);
        Ok(Self::new(sun, mapping, grid))
    }

    /// Run one frame.
    ///
    /// Applies `input` to the sun state, classifies every tile, then calls
    /// `render_fn` exactly once with the mask and the new sun state.
    pub fn tick(
        &mut self,
        input: &FrameInput,
        mut render_fn: impl FnMut(&IlluminationMask, &SunState),
    ) -> FrameReport {
        let start = Instant::now();

        self.sun = self.sun.step(input, &self.mapping);
        let mask = IlluminationMask::compute(self.sun.position(), &self.mapping, self.grid);
        render_fn(&mask, &self.sun);

        let report = FrameReport {
            frame: self.frame_count,
            sun: self.sun.position(),
            marker: self.sun.marker_pixel(&self.mapping),
            counts: mask.counts(),
            elapsed: start.elapsed(),
        };
        self.frame_count += 1;

        if report.elapsed > SLOW_FRAME {
            warn!(
                "Frame {} took {:.1}ms",
                report.frame,
                report.elapsed.as_secs_f64() * 1000.0
            );
        }
        debug!(
            frame = report.frame,
            sun = %report.sun,
            lit = report.counts.lit,
            shadowed = report.counts.shadowed,
            outside = report.counts.outside,
            "frame complete"
        );

        report
    }

    pub fn sun(&self) -> SunState {
        self.sun
    }

    pub fn mapping(&self) -> &ScreenMapping {
        &self.mapping
    }

    pub fn grid(&self) -> TileGrid {
        self.grid
    }

    /// Returns the total number of frames rendered.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}
