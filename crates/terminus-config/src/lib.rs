//! Configuration system for Terminus.
//!
//! Settings persist to disk as a RON file and can be overridden from the
//! command line via clap. Unknown or missing fields fall back to defaults so
//! older and newer config files keep loading.

mod cli;
mod config;
mod error;

pub use cli::{CliArgs, parse_pointer};
pub use config::{Config, DebugConfig, RenderConfig, SunConfig, ViewConfig};
pub use error::ConfigError;
