//! Auto-detect import.
//!
//! Takes a building detection result (footprint plus optional ridge, hip and
//! valley line strings in geographic coordinates), projects it onto the
//! canvas and seeds the drawing state with the footprint as one facet.
//! Either the whole footprint is imported or nothing is.

use crate::drawing_state::DrawingState;
use crate::edges::{linear_feature_segments, Segment};
use crate::facet::FacetId;
use crate::projection::GeoReference;
use roofkit_core::{EdgeType, Error, GeoPoint, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A detected linear roof feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedFeature {
    pub kind: EdgeType,
    /// `LINESTRING(lng lat, ...)`
    pub wkt: String,
}

/// Payload returned by the auto-detect collaborator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionResult {
    pub footprint: Vec<GeoPoint>,
    pub features: Vec<DetectedFeature>,
    /// Set when detection failed upstream
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DetectionResult {
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// What an import added.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportOutcome {
    pub facet_id: FacetId,
    /// Projected linear-feature segments
    pub feature_segments: Vec<Segment>,
    /// Parsed line strings per type; malformed ones are not counted
    pub feature_counts: BTreeMap<EdgeType, usize>,
}

impl ImportOutcome {
    pub fn feature_count(&self, kind: EdgeType) -> usize {
        self.feature_counts.get(&kind).copied().unwrap_or(0)
    }
}

/// Projects a detection result and imports its footprint.
pub fn import_detection(
    state: &mut DrawingState,
    detection: &DetectionResult,
    reference: &GeoReference,
    label: Option<&str>,
) -> Result<ImportOutcome> {
    if let Some(message) = &detection.error {
        tracing::warn!("Detection failed: {}", message);
        return Err(Error::other(format!("Detection failed: {}", message)));
    }

    let pixels = reference.geo_to_pixel(&detection.footprint);
    let facet_id = state.import_building_outline(&pixels, label)?;

    let pixels_per_foot = state.scale().pixels_per_foot();
    let mut feature_segments = Vec::new();
    let mut feature_counts = BTreeMap::new();
    for feature in &detection.features {
        let segments = linear_feature_segments(&feature.wkt, feature.kind, reference, pixels_per_foot);
        if segments.is_empty() {
            continue;
        }
        *feature_counts.entry(feature.kind).or_insert(0) += 1;
        feature_segments.extend(segments);
    }

    tracing::info!(
        "Imported detection with {} footprint vertices and {} feature segments",
        detection.footprint.len(),
        feature_segments.len()
    );
    Ok(ImportOutcome {
        facet_id,
        feature_segments,
        feature_counts,
    })
}

/// Guards the image center, then imports.
///
/// A degenerate center yields the "no valid coordinates" error and leaves
/// the drawing state untouched.
pub fn import_detection_at(
    state: &mut DrawingState,
    detection: &DetectionResult,
    center: GeoPoint,
    zoom: f64,
    canvas_width: f64,
    canvas_height: f64,
) -> Result<ImportOutcome> {
    let reference = GeoReference::new(center, zoom, canvas_width, canvas_height)?;
    import_detection(state, detection, &reference, None)
}
