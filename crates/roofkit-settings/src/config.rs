//! Configuration for the RoofKit measurement engine
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats.
//!
//! Configuration is organized into logical sections:
//! - Drawing settings (snap radius, history depth, facet palette)
//! - Imagery defaults (zoom level, canvas size)
//! - Measurement defaults (pitch, waste factor)

use crate::error::{ConfigError, SettingsResult};
use roofkit_core::constants::{
    DEFAULT_HISTORY_DEPTH, DEFAULT_SNAP_THRESHOLD_PX, MAX_ZOOM, MIN_ZOOM,
};
use roofkit_core::Pitch;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Facet fill colors, assigned in rotation as facets are completed.
pub const DEFAULT_PALETTE: [&str; 8] = [
    "#3b82f6", "#10b981", "#f59e0b", "#ef4444", "#8b5cf6", "#ec4899", "#14b8a6", "#f97316",
];

/// Drawing settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawingSettings {
    /// Distance in pixels at which a click closes the polygon
    pub snap_threshold_px: f64,
    /// Maximum number of undoable commands
    pub history_depth: usize,
    /// Facet colors, used in rotation
    pub palette: Vec<String>,
    /// Prefix for default facet labels ("Facet 1", "Facet 2", ...)
    pub default_label_prefix: String,
}

impl Default for DrawingSettings {
    fn default() -> Self {
        Self {
            snap_threshold_px: DEFAULT_SNAP_THRESHOLD_PX,
            history_depth: DEFAULT_HISTORY_DEPTH,
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
            default_label_prefix: "Facet".to_string(),
        }
    }
}

/// Imagery defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImagerySettings {
    /// Zoom level requested from the imagery provider
    pub default_zoom: u8,
    /// Canvas width in pixels
    pub canvas_width: f64,
    /// Canvas height in pixels
    pub canvas_height: f64,
}

impl Default for ImagerySettings {
    fn default() -> Self {
        Self {
            default_zoom: 20,
            canvas_width: 800.0,
            canvas_height: 600.0,
        }
    }
}

/// Measurement defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeasurementSettings {
    /// Pitch applied when the user has not picked one
    pub default_pitch: String,
    /// Extra material percentage added to the square count
    pub waste_factor_pct: f64,
}

impl Default for MeasurementSettings {
    fn default() -> Self {
        Self {
            default_pitch: "6/12".to_string(),
            waste_factor_pct: 10.0,
        }
    }
}

impl MeasurementSettings {
    /// Parsed default pitch.
    pub fn pitch(&self) -> Pitch {
        Pitch::parse_lenient(&self.default_pitch)
    }
}

/// Complete engine configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EngineConfig {
    /// Drawing settings
    pub drawing: DrawingSettings,
    /// Imagery defaults
    pub imagery: ImagerySettings,
    /// Measurement defaults
    pub measurement: MeasurementSettings,
}

impl EngineConfig {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform config location (`<config dir>/roofkit/config.toml`)
    pub fn default_path() -> SettingsResult<PathBuf> {
        let dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::UnsupportedPlatform(std::env::consts::OS.to_string())
        })?;
        Ok(dir.join("roofkit").join("config.toml"))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = match config_format(path)? {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load config from the platform location, falling back to defaults when
    /// no file exists there.
    pub fn load_or_default() -> SettingsResult<Self> {
        let path = Self::default_path()?;
        if path.exists() {
            Self::load_from_file(&path)
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match config_format(path)? {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let snap = self.drawing.snap_threshold_px;
        if !snap.is_finite() || snap <= 0.0 {
            return Err(out_of_range("drawing.snap_threshold_px", snap));
        }

        if self.drawing.history_depth == 0 {
            return Err(out_of_range("drawing.history_depth", 0));
        }

        if self.drawing.palette.is_empty() {
            return Err(ConfigError::InvalidSetting {
                key: "drawing.palette".to_string(),
                reason: "at least one color is required".to_string(),
            });
        }

        let zoom = self.imagery.default_zoom;
        if !(MIN_ZOOM..=MAX_ZOOM).contains(&zoom) {
            return Err(out_of_range("imagery.default_zoom", zoom));
        }

        let (w, h) = (self.imagery.canvas_width, self.imagery.canvas_height);
        if !w.is_finite() || w <= 0.0 {
            return Err(out_of_range("imagery.canvas_width", w));
        }
        if !h.is_finite() || h <= 0.0 {
            return Err(out_of_range("imagery.canvas_height", h));
        }

        if let Err(reason) = self.measurement.default_pitch.parse::<Pitch>() {
            return Err(ConfigError::InvalidSetting {
                key: "measurement.default_pitch".to_string(),
                reason,
            });
        }

        let waste = self.measurement.waste_factor_pct;
        if !waste.is_finite() || !(0.0..=100.0).contains(&waste) {
            return Err(out_of_range("measurement.waste_factor_pct", waste));
        }

        Ok(())
    }
}

enum ConfigFormat {
    Json,
    Toml,
}

fn config_format(path: &Path) -> Result<ConfigFormat, ConfigError> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(ConfigFormat::Json),
        Some("toml") => Ok(ConfigFormat::Toml),
        other => Err(ConfigError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

fn out_of_range(key: &str, value: impl ToString) -> ConfigError {
    ConfigError::ValueOutOfRange {
        key: key.to_string(),
        value: value.to_string(),
    }
}
