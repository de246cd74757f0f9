use roofkit_core::Point;
use roofkit_designer::{CommandHistory, DrawingState, ScaleContext};
use roofkit_settings::EngineConfig;

#[test]
fn test_default_depth() {
    assert_eq!(CommandHistory::default().max_depth(), 50);
}

#[test]
fn test_depth_from_settings_bounds_history() {
    let mut config = EngineConfig::default();
    config.drawing.history_depth = 5;
    let mut state = DrawingState::from_settings(&config, 20.0).unwrap();

    state.start_drawing();
    for i in 0..8 {
        state
            .add_point(Point::new(i as f64 * 100.0, (i % 2) as f64 * 100.0))
            .unwrap();
    }
    assert_eq!(state.history().undo_len(), 5);

    let mut undone = 0;
    while state.undo() {
        undone += 1;
    }
    assert_eq!(undone, 5);
    assert_eq!(state.current_points().len(), 3);
}

#[test]
fn test_history_names() {
    let mut state = DrawingState::new(ScaleContext::new(1.0, 15.0).unwrap());
    let outline = [
        Point::new(0.0, 0.0),
        Point::new(100.0, 0.0),
        Point::new(100.0, 100.0),
    ];
    state.import_building_outline(&outline, None).unwrap();
    assert_eq!(state.history().undo_name(), Some("Import Footprint"));

    state.undo();
    assert_eq!(state.history().undo_name(), None);
    assert_eq!(state.history().redo_name(), Some("Import Footprint"));
}
