//! # RoofKit Designer
//!
//! Interactive polygon drawing and geometry engine for roof measurement.
//! A user traces roof facets over a satellite image, or imports a detected
//! building outline, and the engine produces areas, perimeters and edge
//! classifications.
//!
//! ## Architecture
//!
//! ```text
//! DrawingState (state machine)
//!   ├── Canvas (completed facets, in-progress chain, selection)
//!   ├── CommandHistory (bounded undo/redo of DrawingCommand)
//!   ├── ScaleContext (pixels per foot, snap radius)
//!   └── snapping (closure decision)
//!
//! geometry (area, perimeter, pitch)     projection (lat/lng <-> pixels)
//! edges (segments, verification)        import (auto-detect results)
//! measurement (record for storage)      renderer / svg_renderer
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use roofkit_designer::{DrawingState, ScaleContext};
//! use roofkit_core::Point;
//!
//! let mut state = DrawingState::new(ScaleContext::new(1.0, 15.0).unwrap());
//! state.start_drawing();
//! state.add_point(Point::new(0.0, 0.0)).unwrap();
//! state.add_point(Point::new(10.0, 0.0)).unwrap();
//! state.add_point(Point::new(10.0, 10.0)).unwrap();
//! state.complete_polygon(None).unwrap();
//! assert_eq!(state.get_total_area(), 50.0);
//! ```

pub mod canvas;
pub mod commands;
pub mod drawing_state;
pub mod edges;
pub mod facet;
pub mod geometry;
pub mod history;
pub mod import;
pub mod listener;
pub mod measurement;
pub mod projection;
pub mod renderer;
pub mod scale;
pub mod snapping;
pub mod svg_renderer;

pub use canvas::Canvas;
pub use commands::DrawingCommand;
pub use drawing_state::{AddPointOutcome, DrawingState};
pub use edges::{facet_segments, verify_edges, EdgeLabels, EdgeTotals, EdgeVerification, Segment};
pub use facet::{Facet, FacetId};
pub use geometry::ChainKind;
pub use history::CommandHistory;
pub use import::{import_detection, import_detection_at, DetectedFeature, DetectionResult, ImportOutcome};
pub use listener::{DrawingListener, DrawingListenerHandle};
pub use measurement::{FacetMeasurement, MeasurementRecord};
pub use projection::{geo_to_pixel, parse_line_string, pixel_to_geo, GeoReference};
pub use renderer::{FrameDiff, RenderAdapter, RenderOptions, Renderer};
pub use scale::ScaleContext;
pub use snapping::{should_close, SnapDecision};
pub use svg_renderer::SvgRenderer;
