// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Engine configuration, stored as JSON.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strada_core::math::LinearRgba;
use strada_core::renderer::RenderSettings;

/// Environment variable naming the configuration file.
pub const CONFIG_PATH_ENV: &str = "STRADA_CONFIG";

/// Configuration file used when [`CONFIG_PATH_ENV`] is not set.
pub const DEFAULT_CONFIG_PATH: &str = "strada.json";

/// Settings read once at startup.
///
/// Every field is optional in the file; missing fields keep their default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Title of the game window.
    pub window_title: String,
    /// Initial inner width of the window, in logical pixels.
    pub window_width: u32,
    /// Initial inner height of the window, in logical pixels.
    pub window_height: u32,
    /// Wait for vertical blank when presenting.
    pub vsync: bool,
    /// Draw the decorative triangle and square over the ground.
    pub show_primitives: bool,
    /// Color the frame is cleared to, as `[r, g, b, a]`.
    pub clear_color: LinearRgba,
    /// Seconds between two frame telemetry summaries in the log. 0 disables them.
    pub telemetry_interval_secs: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            window_title: "Strada".to_string(),
            window_width: 1280,
            window_height: 720,
            vsync: true,
            show_primitives: false,
            clear_color: LinearRgba::SKY,
            telemetry_interval_secs: 5,
        }
    }
}

impl EngineConfig {
    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("Failed to parse config file '{}'", path.display()))
    }

    /// Save configuration to a JSON file
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write config file '{}'", path.display()))?;
        Ok(())
    }

    /// Loads `path`, or returns the defaults if it does not exist.
    ///
    /// A file that exists but cannot be read or parsed is an error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            log::info!(
                "No config file at '{}', using default settings.",
                path.display()
            );
            return Ok(Self::default());
        }
        let config = Self::from_file(path)?;
        log::info!("Loaded config from '{}'.", path.display());
        Ok(config)
    }

    /// The per-frame render settings derived from this configuration.
    pub fn render_settings(&self) -> RenderSettings {
        RenderSettings {
            clear_color: self.clear_color,
            show_primitives: self.show_primitives,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.window_title, "Strada");
        assert_eq!((config.window_width, config.window_height), (1280, 720));
        assert!(config.vsync);
        assert!(!config.show_primitives);
        assert_eq!(config.clear_color.to_array(), [0.6, 0.6, 1.0, 1.0]);
        assert_eq!(config.telemetry_interval_secs, 5);
        assert_eq!(config.render_settings(), RenderSettings::default());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config =
            EngineConfig::from_json(r#"{ "show_primitives": true, "window_width": 800 }"#)
                .unwrap();
        assert!(config.show_primitives);
        assert_eq!(config.window_width, 800);
        assert_eq!(config.window_height, 720);
        assert!(config.render_settings().show_primitives);
    }

    #[test]
    fn clear_color_is_an_array() {
        let config = EngineConfig::from_json(r#"{ "clear_color": [0.0, 0.5, 1.0, 1.0] }"#).unwrap();
        assert_eq!(config.clear_color, LinearRgba::new(0.0, 0.5, 1.0, 1.0));

        let json = serde_json::to_value(EngineConfig::default()).unwrap();
        assert!(json["clear_color"].is_array());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(EngineConfig::from_json("{ not json").is_err());
        assert!(EngineConfig::from_json(r#"{ "vsync": "yes" }"#).is_err());
    }

    #[test]
    fn file_round_trip() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("strada.json");

        let config = EngineConfig {
            window_title: "Night Race".to_string(),
            vsync: false,
            telemetry_interval_secs: 0,
            ..Default::default()
        };
        config.to_file(&path)?;

        assert_eq!(EngineConfig::from_file(&path)?, config);
        assert_eq!(EngineConfig::load_or_default(&path)?, config);
        Ok(())
    }

    #[test]
    fn missing_file_falls_back_to_defaults() -> Result<()> {
        let dir = tempdir()?;
        let config = EngineConfig::load_or_default(dir.path().join("absent.json"))?;
        assert_eq!(config, EngineConfig::default());
        Ok(())
    }

    #[test]
    fn unreadable_file_is_an_error() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "[1, 2")?;
        let err = EngineConfig::load_or_default(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse config file"));
        Ok(())
    }
}
