use roofkit_core::{EdgeType, Point};
use roofkit_designer::edges::{facet_segments, verify_edges, EdgeLabels, Segment};
use roofkit_designer::{DrawingState, ScaleContext};

fn segment(length: f64, edge_type: EdgeType) -> Segment {
    Segment::new(Point::new(0.0, 0.0), Point::new(0.0, length), edge_type, 1.0)
}

#[test]
fn test_coverage_gap_is_flagged() {
    let segments = vec![segment(80.0, EdgeType::Eave), segment(12.0, EdgeType::Rake)];
    let result = verify_edges(&segments, 100.0);
    assert!((result.coverage_pct - 92.0).abs() < 1e-9);
    assert!(result.mismatch);
}

#[test]
fn test_exactly_five_feet_is_not_flagged() {
    let segments = vec![segment(90.0, EdgeType::Eave), segment(5.0, EdgeType::Rake)];
    let result = verify_edges(&segments, 100.0);
    assert!(!result.mismatch);
}

#[test]
fn test_linear_features_do_not_count_toward_coverage() {
    let segments = vec![
        segment(100.0, EdgeType::Eave),
        segment(30.0, EdgeType::Ridge),
        segment(10.0, EdgeType::Hip),
        segment(10.0, EdgeType::Valley),
    ];
    let result = verify_edges(&segments, 100.0);
    assert!(!result.mismatch);
    assert_eq!(result.totals.get(EdgeType::Ridge), 30.0);
    assert_eq!(result.perimeter_edges_ft, 100.0);
}

#[test]
fn test_labeled_facet_verification() {
    let mut state = DrawingState::new(ScaleContext::new(2.0, 15.0).unwrap());
    let id = state
        .import_building_outline(
            &[
                Point::new(0.0, 0.0),
                Point::new(80.0, 0.0),
                Point::new(80.0, 40.0),
                Point::new(0.0, 40.0),
            ],
            None,
        )
        .unwrap();

    let mut labels = EdgeLabels::new();
    labels.set(id, 1, EdgeType::Rake);
    labels.set(id, 3, EdgeType::Rake);

    let facet = state.facet(id).unwrap();
    let segments = facet_segments(facet, &labels, 2.0, None);
    let result = verify_edges(&segments, state.get_total_perimeter());

    assert_eq!(result.totals.eave, 80.0);
    assert_eq!(result.totals.rake, 40.0);
    assert!((result.coverage_pct - 100.0).abs() < 1e-9);
    // Verification never touches the facets
    assert_eq!(state.facets().len(), 1);
}
