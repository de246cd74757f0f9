//! Rendering capability.
//!
//! The engine holds plain state and never talks to a drawing library. A host
//! supplies a [`Renderer`]; [`RenderAdapter`] diffs the previous and next
//! facet collections each frame and only issues calls for what changed.
//! Presentation flags travel in [`RenderOptions`] instead of shared state.

use crate::canvas::Canvas;
use crate::facet::{Facet, FacetId};
use roofkit_core::Point;
use std::collections::HashMap;

/// Presentation flags for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Facet drawn with the highlight style
    pub highlighted: Option<FacetId>,
    pub show_labels: bool,
    pub show_vertices: bool,
    pub fill_opacity: f64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            highlighted: None,
            show_labels: true,
            show_vertices: false,
            fill_opacity: 0.35,
        }
    }
}

/// Drawing backend driven by [`RenderAdapter`].
pub trait Renderer {
    /// Called once before any other call of a frame
    fn begin_frame(&mut self, width: f64, height: f64);

    /// Draws a new facet or replaces the drawing of an existing one.
    /// `index` is the facet's position in draw order; later facets paint
    /// over earlier ones.
    fn draw_facet(&mut self, index: usize, facet: &Facet, options: &RenderOptions);

    /// Removes a facet drawn in an earlier frame
    fn remove_facet(&mut self, id: FacetId);

    /// Replaces the in-progress chain; an empty slice clears it
    fn draw_in_progress(&mut self, points: &[Point], options: &RenderOptions);

    fn end_frame(&mut self);
}

/// Calls issued for one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameDiff {
    pub added: Vec<FacetId>,
    pub changed: Vec<FacetId>,
    pub removed: Vec<FacetId>,
    pub in_progress_changed: bool,
}

impl FrameDiff {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty()
            && self.changed.is_empty()
            && self.removed.is_empty()
            && !self.in_progress_changed
    }
}

/// Remembers the last rendered frame and forwards only the differences.
#[derive(Debug, Clone, Default)]
pub struct RenderAdapter {
    previous: HashMap<FacetId, Facet>,
    previous_order: Vec<FacetId>,
    previous_points: Vec<Point>,
    previous_options: Option<RenderOptions>,
}

impl RenderAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forgets the last frame so the next one redraws everything.
    pub fn invalidate(&mut self) {
        self.previous_options = None;
    }

    /// Renders one frame of `canvas`.
    pub fn render<R: Renderer>(
        &mut self,
        canvas: &Canvas,
        options: &RenderOptions,
        renderer: &mut R,
        width: f64,
        height: f64,
    ) -> FrameDiff {
        let full_redraw = self.previous_options.as_ref() != Some(options);
        let mut diff = FrameDiff::default();

        renderer.begin_frame(width, height);

        for id in &self.previous_order {
            if canvas.get_facet(*id).is_none() {
                renderer.remove_facet(*id);
                diff.removed.push(*id);
            }
        }

        for (index, facet) in canvas.facets().iter().enumerate() {
            match self.previous.get(&facet.id) {
                None => {
                    renderer.draw_facet(index, facet, options);
                    diff.added.push(facet.id);
                }
                Some(previous) if full_redraw || previous != facet => {
                    renderer.draw_facet(index, facet, options);
                    diff.changed.push(facet.id);
                }
                Some(_) => {}
            }
        }

        let points = canvas.current_points();
        if full_redraw || points != self.previous_points.as_slice() {
            renderer.draw_in_progress(points, options);
            diff.in_progress_changed = true;
        }

        renderer.end_frame();

        self.previous = canvas
            .facets()
            .iter()
            .map(|f| (f.id, f.clone()))
            .collect();
        self.previous_order = canvas.facets().iter().map(|f| f.id).collect();
        self.previous_points = points.to_vec();
        self.previous_options = Some(options.clone());

        if !diff.is_empty() {
            tracing::trace!(
                "Frame: {} added, {} changed, {} removed",
                diff.added.len(),
                diff.changed.len(),
                diff.removed.len()
            );
        }
        diff
    }
}
