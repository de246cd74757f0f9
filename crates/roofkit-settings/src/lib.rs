//! RoofKit Settings Crate
//!
//! Handles engine configuration: loading, saving and validation.

pub mod config;
pub mod error;

pub use config::{
    DrawingSettings, EngineConfig, ImagerySettings, MeasurementSettings, DEFAULT_PALETTE,
};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
