//! Command-line driver.
//!
//! `roofkit measure` imports an auto-detect result around an image center,
//! prints the measurement record as JSON and optionally writes an SVG
//! preview. `roofkit config` shows or writes the effective configuration.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use roofkit_core::{GeoPoint, Pitch};
use roofkit_designer::edges::{facet_segments, verify_edges, EdgeLabels};
use roofkit_designer::{
    import_detection, DetectionResult, DrawingState, GeoReference, MeasurementRecord,
    RenderAdapter, RenderOptions, SvgRenderer,
};
use roofkit_settings::EngineConfig;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "roofkit")]
#[command(about = "Roof measurement from detected building outlines")]
pub struct Cli {
    /// Configuration file (TOML or JSON); defaults to the platform location
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Import a detection result and print the measurement record.
    Measure {
        #[arg(value_name = "DETECTION")]
        detection: PathBuf,
        /// Image center latitude
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        /// Image center longitude
        #[arg(long, allow_hyphen_values = true)]
        lng: f64,
        /// Imagery zoom level; defaults to the configured zoom
        #[arg(long)]
        zoom: Option<f64>,
        /// Roof pitch such as "7/12"; defaults to the configured pitch
        #[arg(long)]
        pitch: Option<String>,
        /// Label for the imported facet
        #[arg(long)]
        label: Option<String>,
        /// Write an SVG preview to this file
        #[arg(long, value_name = "FILE")]
        svg: Option<PathBuf>,
    },
    /// Print the effective configuration, or write it to a file.
    Config {
        #[arg(long, value_name = "FILE")]
        write: Option<PathBuf>,
    },
    /// Print version and build date.
    Version,
}

pub fn run<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::parse_from(args);
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Measure {
            detection,
            lat,
            lng,
            zoom,
            pitch,
            label,
            svg,
        } => {
            let request = MeasureRequest {
                center: GeoPoint::new(lat, lng),
                zoom,
                pitch,
                label,
            };
            let (record, svg_document) = measure(&config, &detection, &request)?;
            println!("{}", record.to_json()?);
            if let Some(path) = svg {
                std::fs::write(&path, svg_document)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                tracing::info!("Wrote preview to {}", path.display());
            }
            Ok(())
        }
        Commands::Config { write } => match write {
            Some(path) => {
                config
                    .save_to_file(&path)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                Ok(())
            }
            None => {
                println!("{}", serde_json::to_string_pretty(&config)?);
                Ok(())
            }
        },
        Commands::Version => {
            println!("roofkit {} ({})", crate::VERSION, crate::BUILD_DATE);
            Ok(())
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    match path {
        Some(path) => EngineConfig::load_from_file(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => EngineConfig::load_or_default().context("failed to load config"),
    }
}

struct MeasureRequest {
    center: GeoPoint,
    zoom: Option<f64>,
    pitch: Option<String>,
    label: Option<String>,
}

fn measure(
    config: &EngineConfig,
    detection_path: &Path,
    request: &MeasureRequest,
) -> Result<(MeasurementRecord, String)> {
    let zoom = request
        .zoom
        .unwrap_or(f64::from(config.imagery.default_zoom));
    let (width, height) = (config.imagery.canvas_width, config.imagery.canvas_height);

    let json = std::fs::read_to_string(detection_path)
        .with_context(|| format!("failed to read {}", detection_path.display()))?;
    let detection = DetectionResult::from_json(&json)
        .with_context(|| format!("invalid detection result {}", detection_path.display()))?;

    let reference = GeoReference::new(request.center, zoom, width, height)
        .context("cannot place the image")?;
    let mut state = DrawingState::from_settings(config, zoom)?;
    let outcome = import_detection(&mut state, &detection, &reference, request.label.as_deref())?;

    let ppf = state.scale().pixels_per_foot();
    let labels = EdgeLabels::new();
    let mut segments: Vec<_> = state
        .facets()
        .iter()
        .flat_map(|facet| facet_segments(facet, &labels, ppf, Some(&reference)))
        .collect();
    segments.extend(outcome.feature_segments);
    let verification = verify_edges(&segments, state.get_total_perimeter());

    let pitch = match &request.pitch {
        Some(pitch) => pitch
            .parse::<Pitch>()
            .map_err(anyhow::Error::msg)
            .context("invalid --pitch")?,
        None => config.measurement.pitch(),
    };
    let record = MeasurementRecord::from_state(
        &state,
        pitch,
        config.measurement.waste_factor_pct,
        Some(verification),
    );

    let mut svg = SvgRenderer::new();
    RenderAdapter::new().render(
        state.canvas(),
        &RenderOptions::default(),
        &mut svg,
        width,
        height,
    );

    Ok((record, svg.to_svg()))
}
