//! Error handling for RoofKit
//!
//! Provides error types for each layer of the engine:
//! - Drawing errors (precondition violations on drawing operations)
//! - Projection errors (geographic to canvas conversion)
//! - Scale errors (invalid calibration input)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Drawing error type
///
/// Raised when a drawing operation is invoked in a state that does not
/// allow it. A failed operation never mutates the drawing state.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DrawingError {
    /// A point was added while no polygon is being drawn
    #[error("No polygon is being drawn")]
    NotDrawing,

    /// A polygon was closed with fewer than three points
    #[error("A facet needs at least 3 points, got {count}")]
    TooFewPoints {
        /// The number of points available.
        count: usize,
    },

    /// The referenced facet does not exist
    #[error("Facet not found: {id}")]
    FacetNotFound {
        /// The facet identifier that was looked up.
        id: String,
    },

    /// The referenced vertex does not exist on the facet
    #[error("Point index {index} out of range for facet with {len} points")]
    PointIndexOutOfRange {
        /// The requested vertex index.
        index: usize,
        /// The number of vertices on the facet.
        len: usize,
    },

    /// A point with NaN or infinite coordinates was supplied
    #[error("Invalid point ({x}, {y})")]
    InvalidPoint {
        /// X coordinate.
        x: f64,
        /// Y coordinate.
        y: f64,
    },
}

/// Projection error type
///
/// Represents failures to set up a geographic to canvas projection.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProjectionError {
    /// Center coordinates are unset or placeholder values near (0, 0)
    #[error("No valid coordinates: center ({lat}, {lng}) is unset")]
    NoValidCoordinates {
        /// Center latitude.
        lat: f64,
        /// Center longitude.
        lng: f64,
    },

    /// Zoom level outside the supported imagery range
    #[error("Invalid zoom level {zoom}")]
    InvalidZoom {
        /// The rejected zoom level.
        zoom: f64,
    },

    /// Canvas dimensions must be positive
    #[error("Invalid canvas size {width}x{height}")]
    InvalidCanvasSize {
        /// Canvas width in pixels.
        width: f64,
        /// Canvas height in pixels.
        height: f64,
    },
}

/// Scale error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScaleError {
    /// Pixels-per-foot must be positive and finite
    #[error("Invalid pixels per foot: {value}")]
    InvalidPixelsPerFoot {
        /// The rejected value.
        value: f64,
    },

    /// Snap threshold must be non-negative and finite
    #[error("Invalid snap threshold: {value}")]
    InvalidSnapThreshold {
        /// The rejected value.
        value: f64,
    },
}

/// Main error type for RoofKit
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Drawing error
    #[error(transparent)]
    Drawing(#[from] DrawingError),

    /// Projection error
    #[error(transparent)]
    Projection(#[from] ProjectionError),

    /// Scale error
    #[error(transparent)]
    Scale(#[from] ScaleError),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a generic error from a message
    pub fn other(message: impl Into<String>) -> Self {
        Error::Other(message.into())
    }

    /// Check if this error is the "no valid coordinates" condition
    pub fn is_no_valid_coordinates(&self) -> bool {
        matches!(
            self,
            Error::Projection(ProjectionError::NoValidCoordinates { .. })
        )
    }
}

/// Result type for RoofKit operations
pub type Result<T> = std::result::Result<T, Error>;
