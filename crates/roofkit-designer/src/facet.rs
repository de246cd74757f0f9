//! Completed roof facets.

use crate::geometry::{self, ChainKind};
use roofkit_core::{Pitch, Point};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Stable facet identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FacetId(Uuid);

impl FacetId {
    /// Generates a fresh random id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for FacetId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FacetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for FacetId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// A completed roof plane.
///
/// Always holds at least three points once it is part of a canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facet {
    pub id: FacetId,
    pub label: String,
    pub points: Vec<Point>,
    pub color: String,
}

impl Facet {
    /// Creates a facet with a fresh id.
    pub fn new(label: impl Into<String>, points: Vec<Point>, color: impl Into<String>) -> Self {
        Self {
            id: FacetId::new(),
            label: label.into(),
            points,
            color: color.into(),
        }
    }

    /// Flat plan area in square feet.
    pub fn area(&self, pixels_per_foot: f64) -> f64 {
        geometry::area(&self.points, pixels_per_foot)
    }

    /// Area corrected for roof slope.
    pub fn adjusted_area(&self, pixels_per_foot: f64, pitch: Pitch) -> f64 {
        geometry::pitch_adjusted_area(self.area(pixels_per_foot), pitch)
    }

    /// Closed perimeter in feet.
    pub fn perimeter(&self, pixels_per_foot: f64) -> f64 {
        geometry::perimeter(&self.points, pixels_per_foot, ChainKind::Closed)
    }

    /// Label anchor.
    pub fn centroid(&self) -> Option<Point> {
        geometry::centroid(&self.points)
    }

    /// Number of edges, wrapping the last point back to the first.
    pub fn edge_count(&self) -> usize {
        self.points.len()
    }

    /// Endpoints of edge `index`.
    pub fn edge(&self, index: usize) -> Option<(Point, Point)> {
        let n = self.points.len();
        if index >= n {
            return None;
        }
        Some((self.points[index], self.points[(index + 1) % n]))
    }
}

/// Picks the palette entry for the `n`th completed facet.
pub fn palette_color(palette: &[String], n: usize) -> String {
    if palette.is_empty() {
        return String::from("#3b82f6");
    }
    palette[n % palette.len()].clone()
}

/// Default label for the `n`th facet, counted from 1.
pub fn default_label(prefix: &str, n: usize) -> String {
    format!("{} {}", prefix, n)
}
