//! Facet store and in-progress session.
//!
//! The canvas is plain state. It is mutated only through
//! [`DrawingCommand`](crate::commands::DrawingCommand) application and by
//! [`DrawingState`](crate::drawing_state::DrawingState).

use crate::facet::{Facet, FacetId};
use crate::geometry;
use roofkit_core::Point;

/// Completed facets in draw order plus the in-progress chain.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Canvas {
    facets: Vec<Facet>,
    current_points: Vec<Point>,
    drawing: bool,
    selected: Option<FacetId>,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Completed facets in draw order.
    pub fn facets(&self) -> &[Facet] {
        &self.facets
    }

    pub fn facet_count(&self) -> usize {
        self.facets.len()
    }

    pub fn get_facet(&self, id: FacetId) -> Option<&Facet> {
        self.facets.iter().find(|f| f.id == id)
    }

    pub fn get_facet_mut(&mut self, id: FacetId) -> Option<&mut Facet> {
        self.facets.iter_mut().find(|f| f.id == id)
    }

    /// Position of a facet in draw order.
    pub fn index_of(&self, id: FacetId) -> Option<usize> {
        self.facets.iter().position(|f| f.id == id)
    }

    /// Appends a facet at the end of draw order.
    pub fn push_facet(&mut self, facet: Facet) {
        self.facets.push(facet);
    }

    /// Re-inserts a facet at its former position (used for undo/redo).
    pub fn restore_facet(&mut self, index: usize, facet: Facet) {
        let index = index.min(self.facets.len());
        self.facets.insert(index, facet);
    }

    /// Removes a facet, returning its former index and the facet.
    pub fn remove_facet_return(&mut self, id: FacetId) -> Option<(usize, Facet)> {
        let index = self.index_of(id)?;
        let facet = self.facets.remove(index);
        if self.selected == Some(id) {
            self.selected = None;
        }
        Some((index, facet))
    }

    /// Removes every facet, returning them in draw order.
    pub fn take_facets(&mut self) -> Vec<Facet> {
        self.selected = None;
        std::mem::take(&mut self.facets)
    }

    /// Replaces the facet collection.
    pub fn set_facets(&mut self, facets: Vec<Facet>) {
        self.facets = facets;
    }

    /// Points of the in-progress chain.
    pub fn current_points(&self) -> &[Point] {
        &self.current_points
    }

    pub fn current_points_mut(&mut self) -> &mut Vec<Point> {
        &mut self.current_points
    }

    pub fn take_current_points(&mut self) -> Vec<Point> {
        std::mem::take(&mut self.current_points)
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    pub fn set_drawing(&mut self, drawing: bool) {
        self.drawing = drawing;
    }

    pub fn selected(&self) -> Option<FacetId> {
        self.selected
    }

    /// Selects a facet; ids not on the canvas clear the selection.
    pub fn set_selected(&mut self, id: Option<FacetId>) {
        self.selected = id.filter(|id| self.get_facet(*id).is_some());
    }

    /// Sum of the flat areas of all completed facets.
    pub fn total_area(&self, pixels_per_foot: f64) -> f64 {
        self.facets.iter().map(|f| f.area(pixels_per_foot)).sum()
    }

    /// Sum of the closed perimeters of all completed facets.
    pub fn total_perimeter(&self, pixels_per_foot: f64) -> f64 {
        self.facets.iter().map(|f| f.perimeter(pixels_per_foot)).sum()
    }

    /// Bounds over every completed and in-progress point.
    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        let all: Vec<Point> = self
            .facets
            .iter()
            .flat_map(|f| f.points.iter().copied())
            .chain(self.current_points.iter().copied())
            .collect();
        geometry::bounds(&all)
    }
}
