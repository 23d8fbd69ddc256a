use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::Path;

use crate::error::ConfigError;

/// Default config file, looked up in the working directory
pub const CONFIG_FILE: &str = "earth_view.ron";

/// Viewer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Window size in logical pixels
    pub window_size: [f32; 2],
    pub default_star_count: u32,
    pub default_star_depth: u32,
    /// Upper bound of the star count slider
    pub star_count_max: u32,
    /// Upper bound of the star depth slider
    pub star_depth_max: u32,
    /// Inner radius of the star shell
    pub star_radius: f32,
    /// Star size multiplier
    pub star_factor: f32,
    pub star_seed: u64,
    pub earth_model: String,
    pub moon_model: String,
    pub earth_scale: f32,
    pub moon_scale: f32,
    pub moon_position: [f32; 3],
    pub ambient_brightness: f32,
    pub point_light_position: [f32; 3],
    pub camera_position: [f32; 3],
    /// 2.0 is one full turn every 30 seconds
    pub auto_rotate_speed: f32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            window_size: [1600.0, 900.0],
            default_star_count: 5000,
            default_star_depth: 50,
            star_count_max: 100_000,
            star_depth_max: 1000,
            star_radius: 100.0,
            star_factor: 4.0,
            star_seed: 42,
            earth_model: "Earth.glb".to_string(),
            moon_model: "Moon.glb".to_string(),
            earth_scale: 0.004,
            moon_scale: 0.0005,
            moon_position: [3.0, 1.0, 0.0],
            ambient_brightness: 500.0,
            point_light_position: [10.0, 10.0, 10.0],
            camera_position: [0.0, 0.0, 5.0],
            auto_rotate_speed: 2.0,
        }
    }
}

impl ViewConfig {
    /// Read a RON config. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(ConfigError::Read(e)),
        };
        ron::from_str(&contents).map_err(ConfigError::Parse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ViewConfig::load(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config, ViewConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "(star_seed: 7, moon_model: \"Luna.glb\")").unwrap();

        let config = ViewConfig::load(&path).unwrap();
        assert_eq!(config.star_seed, 7);
        assert_eq!(config.moon_model, "Luna.glb");
        assert_eq!(config.default_star_count, 5000);
        assert_eq!(config.default_star_depth, 50);
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "(star_seed: \"seven\"").unwrap();

        let result = ViewConfig::load(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
