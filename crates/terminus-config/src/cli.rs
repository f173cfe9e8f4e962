//! Command-line argument parsing for Terminus.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Terminus command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "terminus", about = "Render day and night on a polar world map")]
pub struct CliArgs {
    /// Surface width in pixels.
    #[arg(long)]
    pub width: Option<u32>,

    /// Surface height in pixels.
    #[arg(long)]
    pub height: Option<u32>,

    /// Initial sun latitude in degrees.
    #[arg(long, allow_negative_numbers = true)]
    pub sun_lat: Option<f64>,

    /// Initial sun longitude in degrees, positive west.
    #[arg(long, allow_negative_numbers = true)]
    pub sun_lon: Option<f64>,

    /// Illumination tile spacing in pixels.
    #[arg(long)]
    pub tile_step: Option<u32>,

    /// World map image.
    #[arg(long)]
    pub map: Option<PathBuf>,

    /// Output PNG path.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Move the sun to this pixel before rendering, as `X,Y`.
    #[arg(long, value_parser = parse_pointer, allow_hyphen_values = true)]
    pub pointer: Option<(f64, f64)>,

    /// Number of frames to run before writing the last one.
    #[arg(long, default_value_t = 1)]
    pub frames: u32,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Parse a pixel position written as `X,Y`.
pub fn parse_pointer(s: &str) -> Result<(f64, f64), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `X,Y`, got `{s}`"))?;
    let x: f64 = x.trim().parse().map_err(|e| format!("bad x `{x}`: {e}"))?;
    let y: f64 = y.trim().parse().map_err(|e| format!("bad y `{y}`: {e}"))?;
    if !x.is_finite() || !y.is_finite() {
        return Err(format!("pointer must be finite, got `{s}`"));
    }
    Ok((x, y))
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(w) = args.width {
            self.view.width = w;
        }
        if let Some(h) = args.height {
            self.view.height = h;
        }
        if let Some(lat) = args.sun_lat {
            self.sun.latitude = lat;
        }
        if let Some(lon) = args.sun_lon {
            self.sun.longitude = lon;
        }
        if let Some(step) = args.tile_step {
            self.render.tile_step = step;
        }
        if let Some(ref map) = args.map {
            self.render.map_path = map.clone();
        }
        if let Some(ref output) = args.output {
            self.render.output_path = output.clone();
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
