//! # RoofKit
//!
//! Roof measurement digitizing engine. A user traces roof facets over a
//! satellite image, or imports an automatically detected building outline,
//! and RoofKit produces flat and pitch-adjusted areas, perimeters and an
//! edge classification report used downstream for pricing.
//!
//! ## Architecture
//!
//! RoofKit is organized as a workspace with multiple crates:
//!
//! 1. **roofkit-core** - Points, edge types, pitch, calibration constants, errors
//! 2. **roofkit-settings** - Engine configuration (TOML/JSON), validation
//! 3. **roofkit-designer** - Drawing state machine, geometry, projection,
//!    edge verification, rendering adapter
//! 4. **roofkit** - Re-exports, logging setup and the command-line driver

pub mod cli;

pub use roofkit_designer as designer;

pub use roofkit_core::{
    format_area, format_length, DrawingError, EdgeType, Error, GeoPoint, Pitch, Point,
    ProjectionError, Result, ScaleError,
};

pub use roofkit_designer::{
    AddPointOutcome, Canvas, DetectionResult, DrawingListener, DrawingState, EdgeLabels,
    EdgeVerification, Facet, FacetId, GeoReference, MeasurementRecord, RenderAdapter,
    RenderOptions, Renderer, ScaleContext, Segment, SvgRenderer,
};

pub use roofkit_settings::{ConfigError, EngineConfig, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Log level comes from `RUST_LOG` and defaults to `info`. Output goes to
/// stderr so that machine-readable output on stdout stays clean.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
