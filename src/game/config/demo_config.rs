//! Demo Configuration
//!
//! Tunables shared by the sketches. `Default` returns the values the sketches
//! were tuned with; a JSON file can override any subset of them.

use std::path::{Path, PathBuf};

use glam::{Vec2, Vec3};
use serde::Deserialize;
use thiserror::Error;

/// Environment variable naming an alternative config file.
pub const CONFIG_ENV_VAR: &str = "LETTERFALL_CONFIG";
/// Config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "letterfall.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Window and camera settings.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewConfig {
    pub width: u32,
    pub height: u32,
    /// Initial camera eye position
    pub camera_position: Vec3,
    /// Range of the camera panel sliders (symmetric, per axis)
    pub panel_range: f32,
    pub vsync: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            camera_position: Vec3::new(13.0, 13.0, 16.0),
            panel_range: 10.0,
            vsync: true,
        }
    }
}

/// Physics world settings.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct PhysicsConfig {
    pub gravity: Vec3,
    /// Seconds advanced per world step
    pub fixed_step: f32,
    pub solver_iterations: u32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: Vec3::new(0.0, -40.0, 0.0),
            fixed_step: 1.0 / 60.0,
            solver_iterations: 10,
        }
    }
}

/// Letter spawning, glyph geometry and the ground tilt.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct LetterConfig {
    /// Font asset path (JSON glyph bitmaps)
    pub font_path: PathBuf,
    /// Cap height of a spawned glyph (meters)
    pub glyph_size: f32,
    /// Extrusion depth of a spawned glyph (meters)
    pub glyph_depth: f32,
    /// Physics box used for every glyph
    pub glyph_half_extents: Vec3,
    pub glyph_mass: f32,
    pub glyph_color: u32,
    /// Spawn region, inclusive: x/z within +-spawn_half_width
    pub spawn_half_width: f32,
    pub spawn_min_height: f32,
    pub spawn_max_height: f32,
    /// Horizontal scatter speed bound (+-)
    pub scatter_horizontal: f32,
    /// Vertical scatter speed range
    pub scatter_vertical_min: f32,
    pub scatter_vertical_max: f32,
    /// Half size of the ground slab
    pub ground_half_size: Vec2,
    pub ground_color: u32,
    /// Peak tilt angle in radians
    pub tilt_angle: f32,
    /// Seconds for the whole there-and-back tilt
    pub tilt_duration: f32,
}

impl Default for LetterConfig {
    fn default() -> Self {
        Self {
            font_path: PathBuf::from("assets/pixel_bold.json"),
            glyph_size: 2.0,
            glyph_depth: 0.2,
            glyph_half_extents: Vec3::new(1.0, 1.0, 0.1),
            glyph_mass: 1.0,
            glyph_color: 0xff0000,
            spawn_half_width: 5.0,
            spawn_min_height: 10.0,
            spawn_max_height: 20.0,
            scatter_horizontal: 10.0,
            scatter_vertical_min: 5.0,
            scatter_vertical_max: 15.0,
            ground_half_size: Vec2::splat(10.0),
            ground_color: 0xcccccc,
            tilt_angle: std::f32::consts::FRAC_PI_3,
            tilt_duration: 3.0,
        }
    }
}

/// Central configuration for every sketch.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct DemoConfig {
    pub view: ViewConfig,
    pub physics: PhysicsConfig,
    pub letters: LetterConfig,
}

impl DemoConfig {
    /// Parse a JSON document; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from `$LETTERFALL_CONFIG` or `letterfall.json`, falling back to
    /// defaults when there is no file or it cannot be used.
    pub fn load_or_default() -> Self {
        let (path, explicit) = match std::env::var_os(CONFIG_ENV_VAR) {
            Some(p) => (PathBuf::from(p), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };

        if !explicit && !path.exists() {
            log::debug!("no {} found, using default config", path.display());
            return Self::default();
        }

        match Self::load(&path) {
            Ok(config) => {
                log::info!("loaded config from {}", path.display());
                config
            }
            Err(err) => {
                log::warn!("{err}; using default config");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DemoConfig::default();
        assert_eq!(config.physics.gravity, Vec3::new(0.0, -40.0, 0.0));
        assert_eq!(config.physics.solver_iterations, 10);
        assert_eq!(config.letters.glyph_half_extents, Vec3::new(1.0, 1.0, 0.1));
        assert_eq!(config.letters.spawn_half_width, 5.0);
        assert_eq!(config.view.camera_position, Vec3::new(13.0, 13.0, 16.0));
    }

    #[test]
    fn test_partial_override() {
        let config = DemoConfig::from_json(
            r#"{ "physics": { "gravity": [0.0, -9.8, 0.0] }, "view": { "width": 640 } }"#,
        )
        .unwrap();
        assert_eq!(config.physics.gravity, Vec3::new(0.0, -9.8, 0.0));
        assert_eq!(config.physics.solver_iterations, 10);
        assert_eq!(config.view.width, 640);
        assert_eq!(config.view.height, 720);
        assert_eq!(config.letters, LetterConfig::default());
    }

    #[test]
    fn test_invalid_json() {
        assert!(DemoConfig::from_json("{ not json").is_err());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = DemoConfig::load(Path::new("does/not/exist.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
