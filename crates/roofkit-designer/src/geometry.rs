//! Geometry engine: pure area, length and slope computations.
//!
//! All inputs are canvas-pixel coordinates; results are converted to feet
//! through the caller's pixels-per-foot scale. Nothing here rounds; display
//! rounding is left to the presentation layer.

use roofkit_core::constants::{MIN_POLYGON_POINTS, SQUARE_FEET_PER_SQUARE};
use roofkit_core::{Pitch, Point};

/// Whether a point chain wraps from its last point back to its first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainKind {
    /// An in-progress polyline
    Open,
    /// A completed polygon
    Closed,
}

/// Shoelace area of the polygon in square pixels.
pub fn pixel_area(points: &[Point]) -> f64 {
    let n = points.len();
    if n < MIN_POLYGON_POINTS {
        return 0.0;
    }
    let mut twice_area = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        twice_area += points[i].x * points[j].y;
        twice_area -= points[j].x * points[i].y;
    }
    (twice_area / 2.0).abs()
}

/// Plan (flat) area in square feet.
///
/// Returns 0 for fewer than three points. Independent of the starting
/// vertex and of the traversal direction.
pub fn area(points: &[Point], pixels_per_foot: f64) -> f64 {
    pixel_area(points) / (pixels_per_foot * pixels_per_foot)
}

/// Chain length in pixels.
pub fn pixel_length(points: &[Point], kind: ChainKind) -> f64 {
    let open: f64 = points.windows(2).map(|w| w[0].distance_to(&w[1])).sum();
    match (kind, points.first(), points.last()) {
        (ChainKind::Closed, Some(first), Some(last)) if points.len() > 2 => {
            open + last.distance_to(first)
        }
        _ => open,
    }
}

/// Chain length in feet.
pub fn perimeter(points: &[Point], pixels_per_foot: f64, kind: ChainKind) -> f64 {
    pixel_length(points, kind) / pixels_per_foot
}

/// Slope factor for a `"rise/12"` pitch string; unparsable input uses 6/12.
pub fn pitch_multiplier(pitch: &str) -> f64 {
    Pitch::parse_lenient(pitch).multiplier()
}

/// Flat area corrected for roof slope.
pub fn pitch_adjusted_area(flat_area: f64, pitch: Pitch) -> f64 {
    flat_area * pitch.multiplier()
}

/// Roofing squares for an area in square feet, with a waste allowance in
/// percent.
pub fn squares(area_sq_ft: f64, waste_factor_pct: f64) -> f64 {
    area_sq_ft * (1.0 + waste_factor_pct / 100.0) / SQUARE_FEET_PER_SQUARE
}

/// Average of the vertices, used for label placement.
pub fn centroid(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }
    let n = points.len() as f64;
    let sum_x: f64 = points.iter().map(|p| p.x).sum();
    let sum_y: f64 = points.iter().map(|p| p.y).sum();
    Some(Point::new(sum_x / n, sum_y / n))
}

/// Axis-aligned bounds as `(min_x, min_y, max_x, max_y)`.
pub fn bounds(points: &[Point]) -> Option<(f64, f64, f64, f64)> {
    let first = points.first()?;
    Some(points.iter().fold(
        (first.x, first.y, first.x, first.y),
        |(x1, y1, x2, y2), p| (x1.min(p.x), y1.min(p.y), x2.max(p.x), y2.max(p.y)),
    ))
}

/// Pixel distance converted to feet.
pub fn pixels_to_feet(pixels: f64, pixels_per_foot: f64) -> f64 {
    pixels / pixels_per_foot
}

/// Feet converted to a pixel distance.
pub fn feet_to_pixels(feet: f64, pixels_per_foot: f64) -> f64 {
    feet * pixels_per_foot
}
