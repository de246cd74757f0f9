use roofkit_core::{DrawingError, Point};
use roofkit_designer::{AddPointOutcome, DrawingState, ScaleContext};

fn state() -> DrawingState {
    DrawingState::new(ScaleContext::new(1.0, 15.0).unwrap())
}

fn draw(state: &mut DrawingState, points: &[(f64, f64)]) {
    state.start_drawing();
    for p in points {
        state.add_point((*p).into()).unwrap();
    }
}

#[test]
fn test_snap_closes_polygon() {
    let mut state = state();
    draw(&mut state, &[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);

    let outcome = state.add_point(Point::new(2.0, 2.0)).unwrap();
    let AddPointOutcome::Closed(id) = outcome else {
        panic!("expected closure, got {:?}", outcome);
    };

    let facet = state.facet(id).unwrap();
    assert_eq!(facet.points.len(), 3);
    assert!(!state.is_drawing());
    assert!(state.current_points().is_empty());
}

#[test]
fn test_near_first_point_with_two_points_appends() {
    let mut state = state();
    draw(&mut state, &[(0.0, 0.0), (100.0, 0.0)]);
    assert_eq!(
        state.add_point(Point::new(1.0, 1.0)).unwrap(),
        AddPointOutcome::Appended
    );
    assert_eq!(state.current_points().len(), 3);
}

#[test]
fn test_undo_redo_round_trip() {
    let mut state = state();
    let a = Point::new(5.0, 5.0);
    let b = Point::new(50.0, 5.0);
    state.start_drawing();
    state.add_point(a).unwrap();
    state.add_point(b).unwrap();

    assert!(state.undo());
    assert!(state.undo());
    assert!(state.current_points().is_empty());
    assert!(!state.is_drawing());

    assert!(state.redo());
    assert!(state.redo());
    assert_eq!(state.current_points(), &[a, b]);
    assert!(state.is_drawing());
    assert!(!state.redo());
}

#[test]
fn test_undo_on_empty_history_is_noop() {
    let mut state = state();
    assert!(!state.undo());
    assert!(!state.redo());
    assert!(state.facets().is_empty());
}

#[test]
fn test_delete_then_undo_restores_position() {
    let mut state = state();
    let mut ids = Vec::new();
    for offset in [0.0, 200.0, 400.0] {
        draw(
            &mut state,
            &[(offset, 0.0), (offset + 100.0, 0.0), (offset + 100.0, 100.0)],
        );
        ids.push(state.complete_polygon(None).unwrap());
    }
    let middle = state.facet(ids[1]).unwrap().clone();

    state.delete_polygon(ids[1]).unwrap();
    assert_eq!(state.facets().len(), 2);

    assert!(state.undo());
    assert_eq!(state.facets().len(), 3);
    assert_eq!(state.facets()[1], middle);
}

#[test]
fn test_undo_complete_reopens_session() {
    let mut state = state();
    draw(&mut state, &[(0.0, 0.0), (100.0, 0.0), (100.0, 100.0)]);
    state.complete_polygon(Some("Ridge side")).unwrap();

    assert!(state.undo());
    assert!(state.facets().is_empty());
    assert!(state.is_drawing());
    assert_eq!(state.current_points().len(), 3);

    assert!(state.redo());
    assert_eq!(state.facets()[0].label, "Ridge side");
    assert!(!state.is_drawing());
}

#[test]
fn test_new_action_clears_redo() {
    let mut state = state();
    draw(&mut state, &[(0.0, 0.0), (100.0, 0.0)]);
    assert!(state.undo());
    assert!(state.can_redo());
    state.add_point(Point::new(0.0, 100.0)).unwrap();
    assert!(!state.can_redo());
}

#[test]
fn test_cancel_discards_session() {
    let mut state = state();
    draw(&mut state, &[(0.0, 0.0), (100.0, 0.0), (100.0, 100.0)]);
    let id = state.complete_polygon(None).unwrap();

    draw(&mut state, &[(300.0, 0.0), (400.0, 0.0)]);
    state.cancel_drawing();
    assert!(!state.is_drawing());
    assert!(state.current_points().is_empty());
    assert!(!state.can_redo());

    // Next undo reverts the completed facet, not a discarded point
    assert!(state.undo());
    assert!(state.facet(id).is_none());
    assert_eq!(state.current_points().len(), 3);
}

#[test]
fn test_complete_with_too_few_points() {
    let mut state = state();
    draw(&mut state, &[(0.0, 0.0), (100.0, 0.0)]);
    let undo_len = state.history().undo_len();
    assert_eq!(
        state.complete_polygon(None),
        Err(DrawingError::TooFewPoints { count: 2 })
    );
    assert_eq!(state.history().undo_len(), undo_len);
    assert!(state.facets().is_empty());
}

#[test]
fn test_move_point_and_undo() {
    let mut state = state();
    draw(&mut state, &[(0.0, 0.0), (100.0, 0.0), (100.0, 100.0)]);
    let id = state.complete_polygon(None).unwrap();
    assert_eq!(state.get_total_area(), 5000.0);

    state.move_point(id, 2, Point::new(100.0, 200.0)).unwrap();
    assert_eq!(state.get_total_area(), 10_000.0);

    assert!(state.undo());
    assert_eq!(state.facet(id).unwrap().points[2], Point::new(100.0, 100.0));

    assert!(matches!(
        state.move_point(id, 7, Point::new(0.0, 0.0)),
        Err(DrawingError::PointIndexOutOfRange { index: 7, len: 3 })
    ));
}

#[test]
fn test_clear_is_one_undo_step() {
    let mut state = state();
    for offset in [0.0, 200.0] {
        draw(
            &mut state,
            &[(offset, 0.0), (offset + 100.0, 0.0), (offset + 100.0, 100.0)],
        );
        state.complete_polygon(None).unwrap();
    }
    draw(&mut state, &[(500.0, 0.0)]);
    let before = state.facets().to_vec();

    assert!(state.clear());
    assert!(state.facets().is_empty());
    assert!(state.current_points().is_empty());
    assert!(!state.is_drawing());

    assert!(state.undo());
    assert_eq!(state.facets(), before.as_slice());
    assert_eq!(state.current_points(), &[Point::new(500.0, 0.0)]);
    assert!(state.is_drawing());
}

#[test]
fn test_clear_with_nothing_records_nothing() {
    let mut state = state();
    assert!(!state.clear());
    assert!(!state.can_undo());
}

#[test]
fn test_import_is_single_undo_step() {
    let mut state = state();
    let outline = [
        Point::new(0.0, 0.0),
        Point::new(100.0, 0.0),
        Point::new(100.0, 50.0),
        Point::new(0.0, 50.0),
        Point::new(0.0, 0.0),
    ];
    let id = state.import_building_outline(&outline, Some("Detected")).unwrap();
    let facet = state.facet(id).unwrap();
    assert_eq!(facet.points.len(), 4);
    assert_eq!(facet.label, "Detected");
    assert_eq!(state.get_total_area(), 5000.0);
    assert_eq!(state.history().undo_len(), 1);

    assert!(state.undo());
    assert!(state.facets().is_empty());
    assert!(state.current_points().is_empty());
    assert!(!state.is_drawing());

    assert!(state.redo());
    assert_eq!(state.facets()[0].id, id);
}

#[test]
fn test_import_rejects_short_outline() {
    let mut state = state();
    let outline = [Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(0.0, 0.0)];
    assert_eq!(
        state.import_building_outline(&outline, None),
        Err(DrawingError::TooFewPoints { count: 2 })
    );
    assert!(!state.can_undo());
}

#[test]
fn test_rename_is_undoable() {
    let mut state = state();
    draw(&mut state, &[(0.0, 0.0), (100.0, 0.0), (100.0, 100.0)]);
    let id = state.complete_polygon(None).unwrap();

    state.rename_polygon(id, "Back slope").unwrap();
    assert_eq!(state.facet(id).unwrap().label, "Back slope");
    assert!(state.undo());
    assert_eq!(state.facet(id).unwrap().label, "Facet 1");
}
