//! Edge classification and verification.
//!
//! Segments come from two places: the edges of completed facets, labeled by
//! the user (unlabeled edges count as eaves), and linear features supplied
//! by the auto-detect collaborator. Verification compares the classified
//! eave and rake length against the total facet perimeter. It only reports;
//! it never changes the facets.

use crate::facet::{Facet, FacetId};
use crate::geometry::pixels_to_feet;
use crate::projection::{line_string_to_geo, parse_line_string, GeoReference};
use roofkit_core::constants::COVERAGE_TOLERANCE_FT;
use roofkit_core::{EdgeType, GeoPoint, Point};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// One classified roof edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
    pub length_ft: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gps_start: Option<GeoPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gps_end: Option<GeoPoint>,
    #[serde(rename = "type")]
    pub edge_type: EdgeType,
}

impl Segment {
    /// Creates a segment, measuring it with the given scale.
    pub fn new(start: Point, end: Point, edge_type: EdgeType, pixels_per_foot: f64) -> Self {
        Self {
            start,
            end,
            length_ft: pixels_to_feet(start.distance_to(&end), pixels_per_foot),
            gps_start: None,
            gps_end: None,
            edge_type,
        }
    }

    /// Attaches GPS endpoints through the inverse projection.
    pub fn with_gps(mut self, reference: &GeoReference) -> Self {
        self.gps_start = Some(reference.unproject(&self.start));
        self.gps_end = Some(reference.unproject(&self.end));
        self
    }
}

/// User-assigned edge types, keyed by facet and edge index.
///
/// Edge `i` of a facet runs from vertex `i` to vertex `i + 1`, wrapping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EdgeLabels {
    labels: HashMap<(FacetId, usize), EdgeType>,
}

impl EdgeLabels {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, facet: FacetId, edge: usize, edge_type: EdgeType) {
        self.labels.insert((facet, edge), edge_type);
    }

    /// Label for an edge; unlabeled edges are eaves.
    pub fn get(&self, facet: FacetId, edge: usize) -> EdgeType {
        self.labels
            .get(&(facet, edge))
            .copied()
            .unwrap_or(EdgeType::Eave)
    }

    pub fn remove(&mut self, facet: FacetId, edge: usize) -> Option<EdgeType> {
        self.labels.remove(&(facet, edge))
    }

    /// Drops labels for facets that no longer exist.
    pub fn retain_facets(&mut self, facets: &[Facet]) {
        self.labels
            .retain(|(id, edge), _| facets.iter().any(|f| f.id == *id && *edge < f.edge_count()));
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Every edge of a facet as a classified segment.
pub fn facet_segments(
    facet: &Facet,
    labels: &EdgeLabels,
    pixels_per_foot: f64,
    reference: Option<&GeoReference>,
) -> Vec<Segment> {
    (0..facet.edge_count())
        .filter_map(|i| {
            let (start, end) = facet.edge(i)?;
            let segment = Segment::new(start, end, labels.get(facet.id, i), pixels_per_foot);
            Some(match reference {
                Some(reference) => segment.with_gps(reference),
                None => segment,
            })
        })
        .collect()
}

/// Segments of a detected `LINESTRING` feature, one per consecutive pair.
///
/// Malformed input yields no segments.
pub fn linear_feature_segments(
    wkt: &str,
    edge_type: EdgeType,
    reference: &GeoReference,
    pixels_per_foot: f64,
) -> Vec<Segment> {
    let geo = line_string_to_geo(&parse_line_string(wkt));
    geo.windows(2)
        .map(|pair| {
            let start = reference.project(&pair[0]);
            let end = reference.project(&pair[1]);
            let mut segment = Segment::new(start, end, edge_type, pixels_per_foot);
            segment.gps_start = Some(pair[0]);
            segment.gps_end = Some(pair[1]);
            segment
        })
        .collect()
}

/// Length totals per edge type, in feet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeTotals {
    pub eave: f64,
    pub rake: f64,
    pub ridge: f64,
    pub hip: f64,
    pub valley: f64,
}

impl EdgeTotals {
    pub fn get(&self, edge_type: EdgeType) -> f64 {
        match edge_type {
            EdgeType::Eave => self.eave,
            EdgeType::Rake => self.rake,
            EdgeType::Ridge => self.ridge,
            EdgeType::Hip => self.hip,
            EdgeType::Valley => self.valley,
        }
    }

    fn add(&mut self, edge_type: EdgeType, length_ft: f64) {
        let slot = match edge_type {
            EdgeType::Eave => &mut self.eave,
            EdgeType::Rake => &mut self.rake,
            EdgeType::Ridge => &mut self.ridge,
            EdgeType::Hip => &mut self.hip,
            EdgeType::Valley => &mut self.valley,
        };
        *slot += length_ft;
    }
}

/// Outcome of comparing classified edges against the facet perimeter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeVerification {
    pub totals: EdgeTotals,
    pub segment_counts: BTreeMap<EdgeType, usize>,
    /// Eave plus rake length
    pub perimeter_edges_ft: f64,
    pub total_perimeter_ft: f64,
    /// `perimeter_edges_ft / total_perimeter_ft * 100`, 0 with no perimeter
    pub coverage_pct: f64,
    /// Set when eave plus rake differs from the perimeter by more than
    /// the coverage tolerance. A warning, never an error.
    pub mismatch: bool,
}

impl EdgeVerification {
    /// Absolute difference between classified and measured perimeter.
    pub fn difference_ft(&self) -> f64 {
        (self.perimeter_edges_ft - self.total_perimeter_ft).abs()
    }

    pub fn count(&self, edge_type: EdgeType) -> usize {
        self.segment_counts.get(&edge_type).copied().unwrap_or(0)
    }
}

/// Groups segments by type and checks perimeter coverage.
pub fn verify_edges(segments: &[Segment], total_perimeter_ft: f64) -> EdgeVerification {
    let mut totals = EdgeTotals::default();
    let mut segment_counts = BTreeMap::new();
    for segment in segments {
        totals.add(segment.edge_type, segment.length_ft);
        *segment_counts.entry(segment.edge_type).or_insert(0) += 1;
    }

    let perimeter_edges_ft = totals.eave + totals.rake;
    let coverage_pct = if total_perimeter_ft > 0.0 {
        perimeter_edges_ft / total_perimeter_ft * 100.0
    } else {
        0.0
    };
    let mismatch = (perimeter_edges_ft - total_perimeter_ft).abs() > COVERAGE_TOLERANCE_FT;
    if mismatch {
        tracing::warn!(
            "Edge coverage mismatch: eave+rake {:.1} ft vs perimeter {:.1} ft",
            perimeter_edges_ft,
            total_perimeter_ft
        );
    }

    EdgeVerification {
        totals,
        segment_counts,
        perimeter_edges_ft,
        total_perimeter_ft,
        coverage_pct,
        mismatch,
    }
}
