//! Full-surface illumination scan.
//!
//! Every tile of a regular pixel grid is inverse-projected and classified.
//! Tiles are independent, so rows are classified in parallel.

use glam::DVec2;
use rayon::prelude::*;
use terminus_geo::GeoPoint;
use terminus_projection::ScreenMapping;

use crate::{Illumination, classify};

/// A regular grid of tiles `step` pixels apart covering a render surface.
///
/// Tile `(col, row)` sits at pixel `(col * step, row * step)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileGrid {
    pub width: u32,
    pub height: u32,
    pub step: u32,
}

impl TileGrid {
    /// A step of zero is treated as one pixel.
    pub fn new(width: u32, height: u32, step: u32) -> Self {
        Self {
            width,
            height,
            step: step.max(1),
        }
    }

    pub fn columns(&self) -> u32 {
        self.width.div_ceil(self.step)
    }

    pub fn rows(&self) -> u32 {
        self.height.div_ceil(self.step)
    }

    pub fn tile_count(&self) -> usize {
        self.columns() as usize * self.rows() as usize
    }

    /// Pixel position of a tile.
    pub fn tile_pixel(&self, col: u32, row: u32) -> DVec2 {
        DVec2::new((col * self.step) as f64, (row * self.step) as f64)
    }
}

/// Number of tiles in each illumination state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IlluminationCounts {
    pub outside: usize,
    pub lit: usize,
    pub shadowed: usize,
}

impl IlluminationCounts {
    pub fn total(&self) -> usize {
        self.outside + self.lit + self.shadowed
    }
}

/// Classification of every tile of a [`TileGrid`] for one sun position.
#[derive(Clone, Debug, PartialEq)]
pub struct IlluminationMask {
    grid: TileGrid,
    cells: Vec<Illumination>,
}

impl IlluminationMask {
    /// Classify every tile, one rayon task per row.
    pub fn compute(sun: GeoPoint, mapping: &ScreenMapping, grid: TileGrid) -> Self {
        let columns = grid.columns() as usize;
        let mut cells = vec![Illumination::OutsideMap; grid.tile_count()];

        if columns > 0 {
            cells
                .par_chunks_mut(columns)
                .enumerate()
                .for_each(|(row, row_cells)| {
                    classify_row(sun, mapping, &grid, row as u32, row_cells)
                });
        }

        Self { grid, cells }
    }

    /// Single-threaded equivalent of [`compute`](Self::compute).
    pub fn compute_sequential(sun: GeoPoint, mapping: &ScreenMapping, grid: TileGrid) -> Self {
        let columns = grid.columns() as usize;
        let mut cells = vec![Illumination::OutsideMap; grid.tile_count()];

        if columns > 0 {
            for (row, row_cells) in cells.chunks_mut(columns).enumerate() {
                classify_row(sun, mapping, &grid, row as u32, row_cells);
            }
        }

        Self { grid, cells }
    }

    pub fn grid(&self) -> TileGrid {
        self.grid
    }

    /// Classification of tile `(col, row)`, or `None` outside the grid.
    pub fn get(&self, col: u32, row: u32) -> Option<Illumination> {
        if col >= self.grid.columns() || row >= self.grid.rows() {
            return None;
        }
        let idx = row as usize * self.grid.columns() as usize + col as usize;
        self.cells.get(idx).copied()
    }

    /// Iterate `(tile pixel, illumination)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (DVec2, Illumination)> + '_ {
        let columns = self.grid.columns().max(1);
        self.cells.iter().enumerate().map(move |(idx, state)| {
            let idx = idx as u32;
            (self.grid.tile_pixel(idx % columns, idx / columns), *state)
        })
    }

    /// Pixel positions of the tiles that get the night overlay.
    pub fn shadowed_tiles(&self) -> impl Iterator<Item = DVec2> + '_ {
        self.iter()
            .filter(|(_, state)| state.draws_overlay())
            .map(|(pixel, _)| pixel)
    }

    pub fn counts(&self) -> IlluminationCounts {
        self.cells
            .iter()
            .fold(IlluminationCounts::default(), |mut counts, state| {
                match state {
                    Illumination::OutsideMap => counts.outside += 1,
                    Illumination::Lit => counts.lit += 1,
                    Illumination::Shadowed => counts.shadowed += 1,
                }
                counts
            })
    }
}

fn classify_row(
    sun: GeoPoint,
    mapping: &ScreenMapping,
    grid: &TileGrid,
    row: u32,
    row_cells: &mut [Illumination],
) {
    for (col, cell) in row_cells.iter_mut().enumerate() {
        let pixel = grid.tile_pixel(col as u32, row);
        *cell = classify(sun, mapping.pixel_to_planar(pixel));
    }
}
