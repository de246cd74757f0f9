//! # RoofKit Core
//!
//! Core types, constants and error taxonomy shared by the RoofKit crates.
//! Provides canvas and geographic points, edge classifications, roof pitch
//! handling and the calibration constants the measurement engine is tuned
//! against.

pub mod constants;
pub mod error;
pub mod types;
pub mod units;

pub use error::{DrawingError, Error, ProjectionError, Result, ScaleError};
pub use types::{EdgeType, GeoPoint, Point};
pub use units::{format_area, format_length, Pitch};
