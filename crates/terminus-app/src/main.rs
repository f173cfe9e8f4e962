//! `terminus` binary: render the day/night disk to a PNG.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p terminus-app -- --map map.jpg --pointer 600,250`.

use clap::Parser;
use terminus_app::compositor::save_frame;
use terminus_app::{AppError, FrameLoop, MapCompositor, OverlayStyle, PlatformDirs};
use terminus_config::{CliArgs, Config};
use terminus_lighting::FrameInput;
use tracing::{error, info};

fn main() {
    let args = CliArgs::parse();

    let (config, dirs) = match load_config(&args) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    terminus_log::init_logging(Some(&dirs.log_dir), cfg!(debug_assertions), Some(&config));
    info!("Using config {}", Config::file_path(&dirs.config_dir).display());

    if let Err(e) = run(&config, &args) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn load_config(args: &CliArgs) -> Result<(Config, PlatformDirs), AppError> {
    let dirs = match args.config {
        Some(ref dir) => PlatformDirs::with_config_dir(dir),
        None => PlatformDirs::resolve()?,
    };
    dirs.create_dirs()?;

    let mut config = Config::load_or_create(&dirs.config_dir)?;
    config.apply_cli_overrides(args);
    config.validate()?;
    Ok((config, dirs))
}

fn run(config: &Config, args: &CliArgs) -> Result<(), AppError> {
    let mut frame_loop = FrameLoop::from_config(config)?;
    let compositor = MapCompositor::load(
        &config.render.map_path,
        config.view.width,
        config.view.height,
        frame_loop.mapping(),
        OverlayStyle::from_config(&config.render),
    )?;

    info!(
        "Rendering {} frame(s) at {}x{}, sun at {}",
        args.frames,
        config.view.width,
        config.view.height,
        frame_loop.sun().position()
    );

    let input = match args.pointer {
        Some((x, y)) => FrameInput::move_to(glam::DVec2::new(x, y)),
        None => FrameInput::default(),
    };

    let mapping = *frame_loop.mapping();
    let mut last_frame = None;
    for _ in 0..args.frames.max(1) {
        let report = frame_loop.tick(&input, |mask, sun| {
            last_frame = Some(compositor.compose(mask, sun.marker_pixel(&mapping)));
        });
        info!(
            "Frame {}: sun {} | lit {} shadowed {} outside {} | {:.1}ms",
            report.frame,
            report.sun,
            report.counts.lit,
            report.counts.shadowed,
            report.counts.outside,
            report.elapsed.as_secs_f64() * 1000.0
        );
    }

    match last_frame {
        Some(frame) => save_frame(&frame, &config.render.output_path),
        None => Ok(()),
    }
}
