//! Configuration structs with defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const CONFIG_FILE: &str = "config.ron";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Render surface size.
    pub view: ViewConfig,
    /// Initial sun position.
    pub sun: SunConfig,
    /// Overlay, marker, and file settings.
    pub render: RenderConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Render surface configuration. The map disk is centered on the surface.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewConfig {
    /// Surface width in pixels.
    pub width: u32,
    /// Surface height in pixels.
    pub height: u32,
}

/// Sun position at startup, in degrees. Longitude is positive west.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SunConfig {
    pub latitude: f64,
    pub longitude: f64,
}

/// Rendering configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    /// Spacing of the illumination tiles in pixels.
    pub tile_step: u32,
    /// Alpha of the night overlay (0 - 255).
    pub shadow_alpha: u8,
    /// Sun marker radius in pixels.
    pub marker_radius: f32,
    /// Sun marker RGB color.
    pub marker_color: [u8; 3],
    /// World map image, already in the polar disk layout.
    pub map_path: PathBuf,
    /// Where the rendered frame is written.
    pub output_path: PathBuf,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
        }
    }
}

impl Default for SunConfig {
    fn default() -> Self {
        // Washington state.
        Self {
            latitude: 47.7511,
            longitude: 120.7401,
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            tile_step: 1,
            shadow_alpha: 220,
            marker_radius: 10.0,
            marker_color: [220, 220, 30],
            map_path: PathBuf::from("map.jpg"),
            output_path: PathBuf::from("terminus.png"),
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

// --- Load / Save ---

impl Config {
    /// Path of the config file inside `config_dir`.
    pub fn file_path(config_dir: &Path) -> PathBuf {
        config_dir.join(CONFIG_FILE)
    }

    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = Self::file_path(config_dir);

        if config_path.exists() {
            let config = Self::read(&config_path)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(2)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(Self::file_path(config_dir), serialized)
            .map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Reject settings that cannot produce a frame.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.view.width == 0 || self.view.height == 0 {
            return Err(ConfigError::InvalidValue {
                field: "view",
                reason: format!(
                    "surface must be non-empty, got {}x{}",
                    self.view.width, self.view.height
                ),
            });
        }
        if self.render.tile_step == 0 {
            return Err(ConfigError::InvalidValue {
                field: "render.tile_step",
                reason: "must be at least 1 pixel".to_string(),
            });
        }
        let longest_side = self.view.width.max(self.view.height);
        if self.render.tile_step > longest_side {
            return Err(ConfigError::InvalidValue {
                field: "render.tile_step",
                reason: format!(
                    "must not exceed the surface size {longest_side}, got {}",
                    self.render.tile_step
                ),
            });
        }
        if !self.sun.latitude.is_finite() || !self.sun.longitude.is_finite() {
            return Err(ConfigError::InvalidValue {
                field: "sun",
                reason: format!(
                    "coordinates must be finite, got ({}, {})",
                    self.sun.latitude, self.sun.longitude
                ),
            });
        }
        if self.render.marker_radius.is_nan() || self.render.marker_radius < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "render.marker_radius",
                reason: format!("must be non-negative, got {}", self.render.marker_radius),
            });
        }
        Ok(())
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        ron::from_str(&contents).map_err(ConfigError::ParseError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let ron_str =
            ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::new().depth_limit(2))
                .unwrap();
        assert!(ron_str.contains("width: 800"));
        assert!(ron_str.contains("shadow_alpha: 220"));
        assert!(ron_str.contains("latitude: 47.7511"));
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let ron_str = ron::to_string(&config).unwrap();
        let deserialized: Config = ron::from_str(&ron_str).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_missing_field_uses_default() {
        let ron_str = "(view: (width: 1024), debug: ())";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config.view.width, 1024);
        assert_eq!(config.view.height, 800);
        assert_eq!(config.sun, SunConfig::default());
        assert_eq!(config.render, RenderConfig::default());
    }

    #[test]
    fn test_extra_field_ignored() {
        let result: Result<Config, _> = ron::from_str("(future_setting: true)");
        assert!(result.is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.view.width = 1024;
        config.sun.latitude = -12.5;
        config.render.map_path = PathBuf::from("assets/disk.png");

        config.save(dir.path()).unwrap();
        let loaded = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_load_or_create_writes_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert!(dir.path().join("config.ron").exists());
    }

    #[test]
    fn test_invalid_ron_produces_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.ron"), "{{not valid}}").unwrap();
        let result = Config::load_or_create(dir.path());
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_default_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_step() {
        let mut config = Config::default();
        config.render.tile_step = 0;
        let err = config.validate().unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidValue { field: "render.tile_step", .. }),
            "got {err}"
        );
    }

    #[test]
    fn test_validate_rejects_step_larger_than_surface() {
        let mut config = Config::default();
        config.view.width = 4;
        config.view.height = 4;
        config.render.tile_step = 4_000_000_000;
        let err = config.validate().unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidValue { field: "render.tile_step", .. }),
            "got {err}"
        );

        config.render.tile_step = 4;
        assert!(config.validate().is_ok(), "one tile covering the surface is fine");
    }

    #[test]
    fn test_file_path_points_into_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        Config::default().save(dir.path()).unwrap();
        let path = Config::file_path(dir.path());
        assert_eq!(path, dir.path().join("config.ron"));
        assert!(path.exists());
    }

    #[test]
    fn test_validate_rejects_empty_surface() {
        let mut config = Config::default();
        config.view.height = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_nan_sun() {
        let mut config = Config::default();
        config.sun.latitude = f64::NAN;
        assert!(config.validate().is_err());
    }
}
