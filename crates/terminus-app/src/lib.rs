//! Terminus application layer.
//!
//! Drives the illumination core once per frame and composites the result
//! over the world map image. Rendering is headless: frames are written as PNG.

pub mod compositor;
pub mod error;
pub mod frame_loop;
pub mod platform;

pub use compositor::{MapCompositor, OverlayStyle};
pub use error::AppError;
pub use frame_loop::{FrameLoop, FrameReport};
pub use platform::{PlatformDirs, PlatformError};
