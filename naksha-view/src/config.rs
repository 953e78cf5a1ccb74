//! Configuration for the naksha viewer
//!
//! Loads configuration from a TOML file; every section and field has a
//! default so a partial file works.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Top-level viewer configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ViewerConfig {
    #[serde(default)]
    pub map: MapConfig,
    #[serde(default)]
    pub interaction: InteractionConfig,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Map source configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MapConfig {
    /// Map description (YAML) path; the grid image path is resolved from
    /// the description's `image` field relative to this file
    pub description_path: String,
    /// Waypoint JSON file imported on startup and targeted by exports
    pub waypoints_path: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            description_path: "sample-map.yaml".to_string(),
            waypoints_path: "waypoints.json".to_string(),
        }
    }
}

/// Pointer interaction configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InteractionConfig {
    /// Hit-test radius around a marker, in screen pixels
    pub hit_radius_px: f64,
    /// Multiplier applied per zoom step
    pub zoom_step: f64,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            hit_radius_px: 10.0,
            zoom_step: 1.2,
        }
    }
}

/// Marker and label rendering configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RenderConfig {
    /// Marker radius in screen pixels (constant across zoom levels)
    pub marker_radius_px: f64,
    /// Marker outline width in screen pixels
    pub outline_width_px: f64,
    /// Marker outline color
    pub outline_color: String,
    /// Label font size in screen pixels
    pub label_font_px: f64,
    /// Label text color
    pub label_color: String,
    /// Color given to newly created waypoints
    pub default_waypoint_color: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            marker_radius_px: 8.0,
            outline_width_px: 2.0,
            outline_color: "#000000".to_string(),
            label_font_px: 12.0,
            label_color: "#000000".to_string(),
            default_waypoint_color: naksha_map::waypoint::DEFAULT_COLOR.to_string(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl ViewerConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| Error::Config(e.to_string()))
    }

    /// Save configuration to a TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let contents = toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))?;
        fs::write(path, contents)?;
        Ok(())
    }
}
