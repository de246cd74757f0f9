//! Measurement record handed to the persistence collaborator.
//!
//! The engine performs no I/O; the record only serializes to JSON.

use crate::drawing_state::DrawingState;
use crate::edges::EdgeVerification;
use crate::facet::FacetId;
use crate::geometry;
use chrono::{DateTime, Utc};
use roofkit_core::Pitch;
use serde::{Deserialize, Serialize};

/// Record format version
const RECORD_FORMAT_VERSION: &str = "1.0";

/// Measurements of one facet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetMeasurement {
    pub id: FacetId,
    pub label: String,
    pub color: String,
    pub vertex_count: usize,
    pub flat_area_sq_ft: f64,
    pub adjusted_area_sq_ft: f64,
    pub perimeter_ft: f64,
}

/// Complete roof measurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementRecord {
    pub version: String,
    pub created: DateTime<Utc>,
    pub pitch: Pitch,
    pub pixels_per_foot: f64,
    pub waste_factor_pct: f64,
    pub facets: Vec<FacetMeasurement>,
    pub total_flat_area_sq_ft: f64,
    pub total_adjusted_area_sq_ft: f64,
    pub total_perimeter_ft: f64,
    /// Roofing squares including waste
    pub squares: f64,
    #[serde(default)]
    pub edges: Option<EdgeVerification>,
}

impl MeasurementRecord {
    /// Builds a record from the completed facets.
    pub fn from_state(
        state: &DrawingState,
        pitch: Pitch,
        waste_factor_pct: f64,
        edges: Option<EdgeVerification>,
    ) -> Self {
        let ppf = state.scale().pixels_per_foot();
        let facets: Vec<FacetMeasurement> = state
            .facets()
            .iter()
            .map(|facet| FacetMeasurement {
                id: facet.id,
                label: facet.label.clone(),
                color: facet.color.clone(),
                vertex_count: facet.points.len(),
                flat_area_sq_ft: facet.area(ppf),
                adjusted_area_sq_ft: facet.adjusted_area(ppf, pitch),
                perimeter_ft: facet.perimeter(ppf),
            })
            .collect();

        let total_flat_area_sq_ft = state.get_total_area();
        let total_adjusted_area_sq_ft = geometry::pitch_adjusted_area(total_flat_area_sq_ft, pitch);

        Self {
            version: RECORD_FORMAT_VERSION.to_string(),
            created: Utc::now(),
            pitch,
            pixels_per_foot: ppf,
            waste_factor_pct,
            facets,
            total_flat_area_sq_ft,
            total_adjusted_area_sq_ft,
            total_perimeter_ft: state.get_total_perimeter(),
            squares: geometry::squares(total_adjusted_area_sq_ft, waste_factor_pct),
            edges,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
