//! Draws the night overlay and the sun marker over the world map.

use std::path::Path;

use glam::DVec2;
use image::imageops::{self, FilterType};
use image::{ImageFormat, Rgba, RgbaImage};
use terminus_config::RenderConfig;
use terminus_lighting::IlluminationMask;
use terminus_projection::ScreenMapping;
use tracing::{debug, info};

use crate::AppError;

/// Colors and sizes for everything drawn on top of the map.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayStyle {
    /// Alpha of the black night overlay.
    pub shadow_alpha: u8,
    /// Sun marker radius in pixels.
    pub marker_radius: f32,
    pub marker_color: [u8; 3],
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self::from_config(&RenderConfig::default())
    }
}

impl OverlayStyle {
    pub fn from_config(render: &RenderConfig) -> Self {
        Self {
            shadow_alpha: render.shadow_alpha,
            marker_radius: render.marker_radius,
            marker_color: render.marker_color,
        }
    }
}

/// Holds the opaque background frame and draws overlays onto copies of it.
pub struct MapCompositor {
    base: RgbaImage,
    style: OverlayStyle,
}

impl MapCompositor {
    /// Use `base` as the background. It should be opaque.
    pub fn new(base: RgbaImage, style: OverlayStyle) -> Self {
        Self { base, style }
    }

    /// Load the world map and fit it to the disk described by `mapping` on a
    /// black `width` x `height` surface.
    ///
    /// The image is assumed to already show the polar disk edge to edge;
    /// its own pixel size does not matter.
    pub fn load(
        path: &Path,
        width: u32,
        height: u32,
        mapping: &ScreenMapping,
        style: OverlayStyle,
    ) -> Result<Self, AppError> {
        let map = image::open(path)
            .map_err(|source| AppError::MapLoad {
                path: path.to_path_buf(),
                source,
            })?
            .to_rgba8();
        info!(
            "Loaded map {} ({}x{})",
            path.display(),
            map.width(),
            map.height()
        );

        let diameter = (mapping.radius() * 2.0).round().max(1.0) as u32;
        let disk = imageops::resize(&map, diameter, diameter, FilterType::Triangle);

        let mut base = RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 255]));
        let top_left = mapping.center() - DVec2::splat(mapping.radius());
        imageops::overlay(
            &mut base,
            &disk,
            top_left.x.round() as i64,
            top_left.y.round() as i64,
        );

        Ok(Self::new(base, style))
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.base.dimensions()
    }

    /// Render one frame: map, then the overlay on every shadowed tile, then
    /// the sun marker at `marker` (pixel space).
    pub fn compose(&self, mask: &IlluminationMask, marker: DVec2) -> RgbaImage {
        let mut frame = self.base.clone();
        let step = mask.grid().step;

        let mut darkened = 0usize;
        for tile in mask.shadowed_tiles() {
            darken_tile(&mut frame, tile, step, self.style.shadow_alpha);
            darkened += 1;
        }
        debug!("Darkened {darkened} tiles");

        draw_disc(
            &mut frame,
            marker,
            self.style.marker_radius,
            self.style.marker_color,
        );
        frame
    }
}

/// Write a frame as PNG.
pub fn save_frame(frame: &RgbaImage, path: &Path) -> Result<(), AppError> {
    frame
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| AppError::FrameWrite {
            path: path.to_path_buf(),
            source,
        })?;
    info!("Wrote frame to {}", path.display());
    Ok(())
}

/// Blend black at `alpha` over the `step` x `step` square centered on `tile`,
/// clipped to the frame.
fn darken_tile(frame: &mut RgbaImage, tile: DVec2, step: u32, alpha: u8) {
    let half = (step / 2) as i64;
    let x0 = tile.x as i64 - half;
    let y0 = tile.y as i64 - half;
    let keep = 255 - alpha as u32;

    let xs = x0.max(0)..(x0 + step as i64).min(frame.width() as i64);
    let ys = y0.max(0)..(y0 + step as i64).min(frame.height() as i64);

    for y in ys {
        for x in xs.clone() {
            let px = frame.get_pixel_mut(x as u32, y as u32);
            for channel in &mut px.0[..3] {
                *channel = (*channel as u32 * keep / 255) as u8;
            }
        }
    }
}

/// Fill every pixel whose center lies within `radius` of `center`.
fn draw_disc(frame: &mut RgbaImage, center: DVec2, radius: f32, color: [u8; 3]) {
    if !center.is_finite() {
        return;
    }
    let r = radius as f64;
    let r2 = r * r;
    let min_x = (center.x - r).floor().max(0.0) as u32;
    let min_y = (center.y - r).floor().max(0.0) as u32;
    let max_x = ((center.x + r).ceil().max(0.0) as u32).min(frame.width());
    let max_y = ((center.y + r).ceil().max(0.0) as u32).min(frame.height());

    for y in min_y..max_y {
        for x in min_x..max_x {
            let d = DVec2::new(x as f64 + 0.5, y as f64 + 0.5) - center;
            if d.length_squared() <= r2 {
                frame.put_pixel(x, y, Rgba([color[0], color[1], color[2], 255]));
            }
        }
    }
}
