//! Drawing state machine.
//!
//! Owns the completed facets, the in-progress chain and the command history.
//! The machine is `idle` until [`DrawingState::start_drawing`] and returns to
//! `idle` on completion, closure or cancel. Every mutation of the facet
//! collection goes through a [`DrawingCommand`] so it can be undone.

use crate::canvas::Canvas;
use crate::commands::{
    AddPoint, ClearCanvas, CompletePolygon, CompositeCommand, DeletePolygon, DrawingCommand,
    MovePoint, Relabel,
};
use crate::facet::{default_label, palette_color, Facet, FacetId};
use crate::geometry::{self, ChainKind};
use crate::history::CommandHistory;
use crate::listener::{DrawingListener, DrawingListenerHandle};
use crate::scale::ScaleContext;
use crate::snapping::{self, SnapDecision};
use roofkit_core::constants::{DEFAULT_HISTORY_DEPTH, MIN_POLYGON_POINTS};
use roofkit_core::{DrawingError, Pitch, Point, ScaleError};
use roofkit_settings::{EngineConfig, DEFAULT_PALETTE};
use std::fmt;
use std::sync::Arc;

/// Result of feeding a point to the drawing state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddPointOutcome {
    /// The point extended the in-progress chain
    Appended,
    /// The point snapped to the first point and closed this facet
    Closed(FacetId),
}

/// Interactive polygon drawing state.
pub struct DrawingState {
    canvas: Canvas,
    history: CommandHistory,
    scale: ScaleContext,
    palette: Vec<String>,
    label_prefix: String,
    listeners: Vec<(DrawingListenerHandle, Arc<dyn DrawingListener>)>,
    next_listener_id: u64,
}

impl DrawingState {
    /// Creates an empty drawing state for one image.
    pub fn new(scale: ScaleContext) -> Self {
        Self {
            canvas: Canvas::new(),
            history: CommandHistory::new(DEFAULT_HISTORY_DEPTH),
            scale,
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
            label_prefix: "Facet".to_string(),
            listeners: Vec::new(),
            next_listener_id: 0,
        }
    }

    /// Creates a drawing state from engine settings at the given zoom.
    pub fn from_settings(config: &EngineConfig, zoom: f64) -> Result<Self, ScaleError> {
        let scale = ScaleContext::from_zoom(zoom, config.drawing.snap_threshold_px)?;
        let mut state = Self::new(scale);
        state.history = CommandHistory::new(config.drawing.history_depth);
        if !config.drawing.palette.is_empty() {
            state.palette = config.drawing.palette.clone();
        }
        state.label_prefix = config.drawing.default_label_prefix.clone();
        Ok(state)
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn scale(&self) -> ScaleContext {
        self.scale
    }

    /// Replaces the scale when a new image is loaded.
    pub fn set_scale(&mut self, scale: ScaleContext) {
        self.scale = scale;
    }

    /// Completed facets in draw order.
    pub fn facets(&self) -> &[Facet] {
        self.canvas.facets()
    }

    pub fn facet(&self, id: FacetId) -> Option<&Facet> {
        self.canvas.get_facet(id)
    }

    pub fn current_points(&self) -> &[Point] {
        self.canvas.current_points()
    }

    pub fn is_drawing(&self) -> bool {
        self.canvas.is_drawing()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Registers a listener, returning a handle for removal.
    pub fn add_listener(&mut self, listener: Arc<dyn DrawingListener>) -> DrawingListenerHandle {
        let handle = DrawingListenerHandle(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((handle, listener));
        handle
    }

    pub fn remove_listener(&mut self, handle: DrawingListenerHandle) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(h, _)| *h != handle);
        self.listeners.len() != before
    }

    /// Enters drawing mode with an empty chain.
    ///
    /// An unfinished session is cancelled first.
    pub fn start_drawing(&mut self) {
        if self.canvas.is_drawing() || !self.canvas.current_points().is_empty() {
            self.cancel_drawing();
        }
        self.canvas.take_current_points();
        self.canvas.set_drawing(true);
        tracing::debug!("Drawing started");
    }

    /// Adds a point to the in-progress chain, or closes the facet when the
    /// point lands on the first point.
    pub fn add_point(&mut self, point: Point) -> Result<AddPointOutcome, DrawingError> {
        if !self.canvas.is_drawing() {
            return Err(DrawingError::NotDrawing);
        }
        if !point.is_finite() {
            return Err(DrawingError::InvalidPoint {
                x: point.x,
                y: point.y,
            });
        }

        let decision = snapping::decide(
            self.canvas.current_points(),
            &point,
            self.scale.snap_threshold_pixels(),
        );
        match decision {
            SnapDecision::Close => {
                tracing::debug!("Point {} snapped to start, closing facet", point);
                self.complete_polygon(None).map(AddPointOutcome::Closed)
            }
            SnapDecision::Append => {
                let index = self.canvas.current_points().len();
                self.push_command(DrawingCommand::AddPoint(AddPoint { point, index }));
                tracing::debug!("Added point {} at index {}", point, index);
                Ok(AddPointOutcome::Appended)
            }
        }
    }

    /// Turns the in-progress chain into a completed facet.
    ///
    /// Needs at least three points; otherwise nothing changes.
    pub fn complete_polygon(&mut self, label: Option<&str>) -> Result<FacetId, DrawingError> {
        let count = self.canvas.current_points().len();
        if count < MIN_POLYGON_POINTS {
            return Err(DrawingError::TooFewPoints { count });
        }

        let facet = self.new_facet(self.canvas.current_points().to_vec(), label);
        let id = facet.id;
        self.push_command(DrawingCommand::CompletePolygon(CompletePolygon {
            facet: facet.clone(),
        }));

        tracing::info!(
            "Completed facet '{}' with {} points ({:.1} sq ft)",
            facet.label,
            facet.points.len(),
            facet.area(self.scale.pixels_per_foot())
        );
        self.notify_completed(&facet);
        Ok(id)
    }

    /// Discards the in-progress chain without creating a facet.
    ///
    /// Not undoable. The session's add-point commands are removed from
    /// history and the redo stack is cleared.
    pub fn cancel_drawing(&mut self) {
        if !self.canvas.is_drawing() && self.canvas.current_points().is_empty() {
            return;
        }
        let dropped = self.history.discard_session_points();
        let points = self.canvas.take_current_points();
        self.canvas.set_drawing(false);
        tracing::debug!(
            "Drawing cancelled, discarded {} points and {} history entries",
            points.len(),
            dropped
        );
        self.notify_history();
    }

    /// Moves one vertex of a completed facet.
    pub fn move_point(
        &mut self,
        id: FacetId,
        index: usize,
        position: Point,
    ) -> Result<(), DrawingError> {
        if !position.is_finite() {
            return Err(DrawingError::InvalidPoint {
                x: position.x,
                y: position.y,
            });
        }
        let facet = self.canvas.get_facet(id).ok_or_else(|| not_found(id))?;
        let from = *facet
            .points
            .get(index)
            .ok_or(DrawingError::PointIndexOutOfRange {
                index,
                len: facet.points.len(),
            })?;
        if from == position {
            return Ok(());
        }

        self.push_command(DrawingCommand::MovePoint(MovePoint {
            facet_id: id,
            index,
            from,
            to: position,
        }));
        tracing::debug!("Moved vertex {} of {} to {}", index, id, position);
        Ok(())
    }

    /// Removes a completed facet. Undo restores it at its former position.
    pub fn delete_polygon(&mut self, id: FacetId) -> Result<(), DrawingError> {
        let index = self.canvas.index_of(id).ok_or_else(|| not_found(id))?;
        self.push_command(DrawingCommand::DeletePolygon(DeletePolygon {
            id,
            index,
            facet: None,
        }));
        tracing::debug!("Deleted facet {}", id);
        for (_, listener) in &self.listeners {
            listener.on_polygon_deleted(id);
        }
        Ok(())
    }

    /// Changes a facet's label.
    pub fn rename_polygon(&mut self, id: FacetId, label: &str) -> Result<(), DrawingError> {
        let facet = self.canvas.get_facet(id).ok_or_else(|| not_found(id))?;
        if facet.label == label {
            return Ok(());
        }
        let old_label = facet.label.clone();
        self.push_command(DrawingCommand::Relabel(Relabel {
            id,
            old_label,
            new_label: label.to_string(),
        }));
        Ok(())
    }

    /// Selects a completed facet.
    pub fn select_polygon(&mut self, id: FacetId) -> Result<(), DrawingError> {
        if self.canvas.get_facet(id).is_none() {
            return Err(not_found(id));
        }
        self.canvas.set_selected(Some(id));
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.canvas.set_selected(None);
    }

    pub fn selected_polygon(&self) -> Option<&Facet> {
        self.canvas
            .selected()
            .and_then(|id| self.canvas.get_facet(id))
    }

    /// Undoes the most recent command. Returns false when there is none.
    pub fn undo(&mut self) -> bool {
        let undone = self.history.undo(&mut self.canvas);
        if undone {
            self.revalidate_selection();
            self.notify_history();
        }
        undone
    }

    /// Re-applies the most recently undone command.
    pub fn redo(&mut self) -> bool {
        let redone = self.history.redo(&mut self.canvas);
        if redone {
            self.revalidate_selection();
            self.notify_history();
        }
        redone
    }

    /// Removes every facet and the in-progress chain as one undoable step.
    ///
    /// Returns false, recording nothing, when there is nothing to clear.
    pub fn clear(&mut self) -> bool {
        if self.canvas.facet_count() == 0
            && self.canvas.current_points().is_empty()
            && !self.canvas.is_drawing()
        {
            return false;
        }
        self.push_command(DrawingCommand::Clear(ClearCanvas::default()));
        tracing::debug!("Canvas cleared");
        true
    }

    /// Imports a pre-built outline as a completed facet.
    ///
    /// Behaves like adding each point and then completing, without snapping,
    /// and records a single undo step. A trailing point equal to the first
    /// is dropped. An unfinished session is cancelled first. Nothing changes
    /// when the outline is invalid.
    pub fn import_building_outline(
        &mut self,
        points: &[Point],
        label: Option<&str>,
    ) -> Result<FacetId, DrawingError> {
        let mut points = points.to_vec();
        if points.len() > 1 && points.first() == points.last() {
            points.pop();
        }
        if points.len() < MIN_POLYGON_POINTS {
            return Err(DrawingError::TooFewPoints {
                count: points.len(),
            });
        }
        if let Some(bad) = points.iter().find(|p| !p.is_finite()) {
            return Err(DrawingError::InvalidPoint { x: bad.x, y: bad.y });
        }

        self.cancel_drawing();

        let facet = self.new_facet(points.clone(), label);
        let id = facet.id;
        let mut commands: Vec<DrawingCommand> = points
            .iter()
            .enumerate()
            .map(|(index, point)| {
                DrawingCommand::AddPoint(AddPoint {
                    point: *point,
                    index,
                })
            })
            .collect();
        commands.push(DrawingCommand::CompletePolygon(CompletePolygon {
            facet: facet.clone(),
        }));
        self.push_command(DrawingCommand::Composite(CompositeCommand {
            commands,
            name: "Import Footprint".to_string(),
        }));

        tracing::info!(
            "Imported outline '{}' with {} points",
            facet.label,
            facet.points.len()
        );
        self.notify_completed(&facet);
        Ok(id)
    }

    /// Sum of the flat areas of all completed facets, in square feet.
    pub fn get_total_area(&self) -> f64 {
        self.canvas.total_area(self.scale.pixels_per_foot())
    }

    /// Total area corrected for roof slope.
    pub fn get_total_adjusted_area(&self, pitch: Pitch) -> f64 {
        geometry::pitch_adjusted_area(self.get_total_area(), pitch)
    }

    /// Sum of the closed perimeters of all completed facets, in feet.
    pub fn get_total_perimeter(&self) -> f64 {
        self.canvas.total_perimeter(self.scale.pixels_per_foot())
    }

    /// Area enclosed by the in-progress chain.
    pub fn get_current_area(&self) -> f64 {
        geometry::area(self.canvas.current_points(), self.scale.pixels_per_foot())
    }

    /// Length of the in-progress chain, not closed.
    pub fn get_current_perimeter(&self) -> f64 {
        geometry::perimeter(
            self.canvas.current_points(),
            self.scale.pixels_per_foot(),
            ChainKind::Open,
        )
    }

    fn new_facet(&self, points: Vec<Point>, label: Option<&str>) -> Facet {
        let n = self.canvas.facet_count();
        let label = match label.map(str::trim) {
            Some(label) if !label.is_empty() => label.to_string(),
            _ => default_label(&self.label_prefix, n + 1),
        };
        Facet::new(label, points, palette_color(&self.palette, n))
    }

    fn push_command(&mut self, mut cmd: DrawingCommand) {
        cmd.apply(&mut self.canvas);
        self.history.record(cmd);
        self.notify_history();
    }

    fn revalidate_selection(&mut self) {
        let selected = self.canvas.selected();
        self.canvas.set_selected(selected);
    }

    fn notify_completed(&self, facet: &Facet) {
        for (_, listener) in &self.listeners {
            listener.on_polygon_completed(facet);
        }
    }

    fn notify_history(&self) {
        let (can_undo, can_redo) = (self.history.can_undo(), self.history.can_redo());
        for (_, listener) in &self.listeners {
            listener.on_history_changed(can_undo, can_redo);
        }
    }
}

impl Default for DrawingState {
    fn default() -> Self {
        Self::new(ScaleContext::default())
    }
}

impl fmt::Debug for DrawingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DrawingState")
            .field("canvas", &self.canvas)
            .field("scale", &self.scale)
            .field("undo_len", &self.history.undo_len())
            .field("redo_len", &self.history.redo_len())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

fn not_found(id: FacetId) -> DrawingError {
    DrawingError::FacetNotFound { id: id.to_string() }
}
