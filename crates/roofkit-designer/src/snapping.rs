//! Snap/closure decision for point entry.
//!
//! A new point landing within the snap radius of the first point of a chain
//! that already has three or more points closes the polygon instead of
//! extending it.

use roofkit_core::constants::MIN_POLYGON_POINTS;
use roofkit_core::Point;

/// What the drawing state should do with a proposed point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapDecision {
    /// Append the point to the chain
    Append,
    /// Close the chain into a facet and discard the point
    Close,
}

/// Returns true when `candidate` closes the chain.
pub fn should_close(points: &[Point], candidate: &Point, threshold_px: f64) -> bool {
    if points.len() < MIN_POLYGON_POINTS {
        return false;
    }
    points
        .first()
        .map(|first| first.distance_to(candidate) <= threshold_px)
        .unwrap_or(false)
}

/// Classifies a proposed point.
pub fn decide(points: &[Point], candidate: &Point, threshold_px: f64) -> SnapDecision {
    if should_close(points, candidate, threshold_px) {
        SnapDecision::Close
    } else {
        SnapDecision::Append
    }
}
