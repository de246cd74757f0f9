use roofkit_core::{Pitch, Point};
use roofkit_designer::{
    DrawingState, MeasurementRecord, RenderAdapter, RenderOptions, ScaleContext, SvgRenderer,
};
use std::fs;
use tempfile::TempDir;

fn state_with_two_facets() -> DrawingState {
    let mut state = DrawingState::new(ScaleContext::new(2.0, 15.0).unwrap());
    let front = [
        Point::new(0.0, 0.0),
        Point::new(80.0, 0.0),
        Point::new(80.0, 40.0),
        Point::new(0.0, 40.0),
    ];
    let back = [
        Point::new(0.0, 40.0),
        Point::new(80.0, 40.0),
        Point::new(80.0, 80.0),
        Point::new(0.0, 80.0),
    ];
    state.import_building_outline(&front, Some("Front")).unwrap();
    state.import_building_outline(&back, Some("Back")).unwrap();
    state
}

#[test]
fn test_record_written_and_reloaded() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("measurement.json");

    let state = state_with_two_facets();
    let record = MeasurementRecord::from_state(&state, Pitch::new(6.0), 10.0, None);
    fs::write(&path, record.to_json().unwrap()).unwrap();

    let loaded = MeasurementRecord::from_json(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(loaded.facets.len(), 2);
    assert_eq!(loaded.facets[0].label, "Front");
    assert_eq!(loaded.facets[1].label, "Back");
    assert_eq!(loaded.total_flat_area_sq_ft, 1600.0);
    assert_eq!(loaded.pitch, Pitch::new(6.0));
}

#[test]
fn test_svg_preview_written() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("roof.svg");

    let state = state_with_two_facets();
    let mut svg = SvgRenderer::new();
    RenderAdapter::new().render(
        state.canvas(),
        &RenderOptions::default(),
        &mut svg,
        640.0,
        480.0,
    );
    fs::write(&path, svg.to_svg()).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents.matches("<polygon").count(), 2);
    assert!(contents.find(">Front</text>").unwrap() < contents.find(">Back</text>").unwrap());
}
