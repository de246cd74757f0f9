//! Drawing listener interface
//!
//! Hosts register listeners to react to facet changes, for example to show
//! the area of a facet the moment it is closed.

use crate::facet::{Facet, FacetId};

/// Handle for a registered drawing listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DrawingListenerHandle(pub u64);

/// Listener trait for drawing events
///
/// Callbacks run synchronously on the thread that mutated the drawing state.
pub trait DrawingListener: Send + Sync {
    /// Called when a facet is completed, by closure, completion or import
    fn on_polygon_completed(&self, _facet: &Facet) {}

    /// Called when a facet is deleted
    fn on_polygon_deleted(&self, _id: FacetId) {}

    /// Called after any change to the undo or redo stacks
    fn on_history_changed(&self, _can_undo: bool, _can_redo: bool) {}
}
