//! Reversible drawing commands.
//!
//! Each variant carries enough data to invert itself. Commands are applied
//! and undone strictly in stack order, so every command sees the canvas in
//! the state it left it.

use crate::canvas::Canvas;
use crate::facet::{Facet, FacetId};
use roofkit_core::Point;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawingCommand {
    AddPoint(AddPoint),
    CompletePolygon(CompletePolygon),
    DeletePolygon(DeletePolygon),
    MovePoint(MovePoint),
    Clear(ClearCanvas),
    Relabel(Relabel),
    Composite(CompositeCommand),
}

/// Appends `point` at `index` of the in-progress chain.
#[derive(Debug, Clone, PartialEq)]
pub struct AddPoint {
    pub point: Point,
    pub index: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompletePolygon {
    pub facet: Facet,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeletePolygon {
    pub id: FacetId,
    pub index: usize,
    pub facet: Option<Facet>, // Some while removed from the canvas
}

#[derive(Debug, Clone, PartialEq)]
pub struct MovePoint {
    pub facet_id: FacetId,
    pub index: usize,
    pub from: Point,
    pub to: Point,
}

/// Removes all facets and the in-progress session.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClearCanvas {
    pub facets: Vec<Facet>,
    pub points: Vec<Point>,
    pub was_drawing: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Relabel {
    pub id: FacetId,
    pub old_label: String,
    pub new_label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompositeCommand {
    pub commands: Vec<DrawingCommand>,
    pub name: String,
}

impl DrawingCommand {
    pub fn apply(&mut self, canvas: &mut Canvas) {
        match self {
            DrawingCommand::AddPoint(cmd) => {
                if canvas.current_points().len() == cmd.index {
                    canvas.current_points_mut().push(cmd.point);
                    canvas.set_drawing(true);
                }
            }
            DrawingCommand::CompletePolygon(cmd) => {
                canvas.take_current_points();
                canvas.set_drawing(false);
                canvas.push_facet(cmd.facet.clone());
            }
            DrawingCommand::DeletePolygon(cmd) => {
                if let Some((index, facet)) = canvas.remove_facet_return(cmd.id) {
                    cmd.index = index;
                    cmd.facet = Some(facet);
                }
            }
            DrawingCommand::MovePoint(cmd) => {
                set_vertex(canvas, cmd.facet_id, cmd.index, cmd.to);
            }
            DrawingCommand::Clear(cmd) => {
                cmd.facets = canvas.take_facets();
                cmd.points = canvas.take_current_points();
                cmd.was_drawing = canvas.is_drawing();
                canvas.set_drawing(false);
            }
            DrawingCommand::Relabel(cmd) => {
                if let Some(facet) = canvas.get_facet_mut(cmd.id) {
                    facet.label = cmd.new_label.clone();
                }
            }
            DrawingCommand::Composite(cmd) => {
                for sub_cmd in &mut cmd.commands {
                    sub_cmd.apply(canvas);
                }
            }
        }
    }

    pub fn undo(&mut self, canvas: &mut Canvas) {
        match self {
            DrawingCommand::AddPoint(cmd) => {
                if canvas.current_points().len() == cmd.index + 1 {
                    canvas.current_points_mut().pop();
                    if cmd.index == 0 {
                        canvas.set_drawing(false);
                    }
                }
            }
            DrawingCommand::CompletePolygon(cmd) => {
                if let Some((_, facet)) = canvas.remove_facet_return(cmd.facet.id) {
                    *canvas.current_points_mut() = facet.points;
                    canvas.set_drawing(true);
                }
            }
            DrawingCommand::DeletePolygon(cmd) => {
                if let Some(facet) = cmd.facet.take() {
                    canvas.restore_facet(cmd.index, facet);
                }
            }
            DrawingCommand::MovePoint(cmd) => {
                set_vertex(canvas, cmd.facet_id, cmd.index, cmd.from);
            }
            DrawingCommand::Clear(cmd) => {
                canvas.set_facets(std::mem::take(&mut cmd.facets));
                *canvas.current_points_mut() = std::mem::take(&mut cmd.points);
                canvas.set_drawing(cmd.was_drawing);
            }
            DrawingCommand::Relabel(cmd) => {
                if let Some(facet) = canvas.get_facet_mut(cmd.id) {
                    facet.label = cmd.old_label.clone();
                }
            }
            DrawingCommand::Composite(cmd) => {
                for sub_cmd in cmd.commands.iter_mut().rev() {
                    sub_cmd.undo(canvas);
                }
            }
        }
    }

    /// Display name for history menus.
    pub fn name(&self) -> &str {
        match self {
            DrawingCommand::AddPoint(_) => "Add Point",
            DrawingCommand::CompletePolygon(_) => "Complete Polygon",
            DrawingCommand::DeletePolygon(_) => "Delete Polygon",
            DrawingCommand::MovePoint(_) => "Move Point",
            DrawingCommand::Clear(_) => "Clear",
            DrawingCommand::Relabel(_) => "Rename Polygon",
            DrawingCommand::Composite(cmd) => &cmd.name,
        }
    }

    /// True for commands that end a drawing session.
    pub fn ends_session(&self) -> bool {
        matches!(
            self,
            DrawingCommand::CompletePolygon(_)
                | DrawingCommand::Clear(_)
                | DrawingCommand::Composite(_)
        )
    }
}

fn set_vertex(canvas: &mut Canvas, id: FacetId, index: usize, position: Point) {
    if let Some(point) = canvas
        .get_facet_mut(id)
        .and_then(|facet| facet.points.get_mut(index))
    {
        *point = position;
    }
}
