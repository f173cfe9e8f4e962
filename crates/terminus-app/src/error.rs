//! Application error types.

use std::path::PathBuf;

use terminus_config::ConfigError;
use terminus_projection::ProjectionError;

use crate::platform::PlatformError;

/// Startup and output failures of the Terminus binary.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error("cannot place map disk: {0}")]
    Projection(#[from] ProjectionError),

    /// The world map could not be opened or decoded.
    #[error("can't load map {}: {source}", .path.display())]
    MapLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The rendered frame could not be encoded or written.
    #[error("can't write frame {}: {source}", .path.display())]
    FrameWrite {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
