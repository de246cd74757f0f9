//! Value types shared across the engine.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A point in canvas-pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point, in pixels.
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Midpoint between this point and another.
    pub fn midpoint(&self, other: &Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Returns true when both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

/// A geographic coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    /// Creates a new geographic point.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.lat, self.lng)
    }
}

/// Architectural role of a roof edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeType {
    /// Horizontal lower edge where gutters hang
    Eave,
    /// Sloped gable edge
    Rake,
    /// Horizontal peak line
    Ridge,
    /// External sloped intersection of two facets
    Hip,
    /// Internal sloped intersection of two facets
    Valley,
}

impl EdgeType {
    /// All edge types in reporting order.
    pub const ALL: [EdgeType; 5] = [
        EdgeType::Eave,
        EdgeType::Rake,
        EdgeType::Ridge,
        EdgeType::Hip,
        EdgeType::Valley,
    ];

    /// Eaves and rakes lie on the outline of the roof and are compared
    /// against the facet perimeter during verification.
    pub fn is_perimeter(&self) -> bool {
        matches!(self, EdgeType::Eave | EdgeType::Rake)
    }

    /// Ridges, hips and valleys arrive as detected line features.
    pub fn is_linear_feature(&self) -> bool {
        !self.is_perimeter()
    }
}

impl fmt::Display for EdgeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Eave => write!(f, "eave"),
            Self::Rake => write!(f, "rake"),
            Self::Ridge => write!(f, "ridge"),
            Self::Hip => write!(f, "hip"),
            Self::Valley => write!(f, "valley"),
        }
    }
}

impl FromStr for EdgeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "eave" | "eaves" => Ok(Self::Eave),
            "rake" | "rakes" => Ok(Self::Rake),
            "ridge" | "ridges" => Ok(Self::Ridge),
            "hip" | "hips" => Ok(Self::Hip),
            "valley" | "valleys" => Ok(Self::Valley),
            _ => Err(format!("Unknown edge type: {}", s)),
        }
    }
}
