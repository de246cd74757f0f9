//! Calibration and tolerance constants.
//!
//! The imagery constants are an empirical calibration of the satellite tiles
//! the engine is fed, not a geodesic projection. Area figures downstream are
//! tuned against these exact values.

/// Zoom level at which [`BASE_FEET_PER_PIXEL`] was measured.
pub const REFERENCE_ZOOM: f64 = 20.0;

/// Ground distance covered by one image pixel at [`REFERENCE_ZOOM`].
pub const BASE_FEET_PER_PIXEL: f64 = 0.3;

/// Feet per degree of latitude (and of longitude at the equator).
pub const FEET_PER_DEGREE: f64 = 364_000.0;

/// Center coordinates within this many degrees of zero on both axes are
/// treated as unset.
pub const DEGENERATE_COORDINATE_EPSILON: f64 = 0.001;

/// Allowed difference between classified eave+rake length and the facet
/// perimeter before verification raises a mismatch.
pub const COVERAGE_TOLERANCE_FT: f64 = 5.0;

/// Default closure snap radius in canvas pixels.
pub const DEFAULT_SNAP_THRESHOLD_PX: f64 = 15.0;

/// Default number of undoable commands retained.
pub const DEFAULT_HISTORY_DEPTH: usize = 50;

/// Rise used when a pitch string cannot be parsed.
pub const DEFAULT_PITCH_RISE: f64 = 6.0;

/// Horizontal run every pitch is expressed against.
pub const PITCH_RUN: f64 = 12.0;

/// One roofing square.
pub const SQUARE_FEET_PER_SQUARE: f64 = 100.0;

/// Minimum number of vertices for a facet.
pub const MIN_POLYGON_POINTS: usize = 3;

/// Supported zoom range of the imagery provider.
pub const MIN_ZOOM: u8 = 1;
pub const MAX_ZOOM: u8 = 23;
