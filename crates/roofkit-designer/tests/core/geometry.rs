use proptest::prelude::*;
use roofkit_core::Point;
use roofkit_designer::geometry::{area, perimeter, pitch_multiplier, ChainKind};

fn square() -> Vec<Point> {
    vec![
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(10.0, 10.0),
        Point::new(0.0, 10.0),
    ]
}

fn polygon_strategy() -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((-500.0f64..500.0, -500.0f64..500.0), 3..12)
        .prop_map(|coords| coords.into_iter().map(Point::from).collect())
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-6 * (1.0 + a.abs().max(b.abs()))
}

#[test]
fn test_square_area() {
    assert_eq!(area(&square(), 1.0), 100.0);
}

#[test]
fn test_doubling_scale_halves_perimeter() {
    let single = perimeter(&square(), 1.0, ChainKind::Closed);
    let double = perimeter(&square(), 2.0, ChainKind::Closed);
    assert_eq!(single, 40.0);
    assert_eq!(double, 20.0);
}

#[test]
fn test_pitch_multipliers() {
    assert!((pitch_multiplier("6/12") - 1.1180).abs() < 1e-4);
    assert!((pitch_multiplier("12/12") - 1.4142).abs() < 1e-4);
    assert_eq!(pitch_multiplier("0/12"), 1.0);
}

proptest! {
    #[test]
    fn prop_area_direction_invariant(points in polygon_strategy()) {
        let mut reversed = points.clone();
        reversed.reverse();
        prop_assert!(close(area(&points, 1.0), area(&reversed, 1.0)));
    }

    #[test]
    fn prop_area_start_vertex_invariant(points in polygon_strategy(), shift in 0usize..12) {
        let mut rotated = points.clone();
        let n = rotated.len();
        rotated.rotate_left(shift % n);
        prop_assert!(close(area(&points, 1.0), area(&rotated, 1.0)));
    }

    #[test]
    fn prop_area_scale_invariant(points in polygon_strategy(), ppf in 0.1f64..10.0, k in 0.1f64..10.0) {
        let base = area(&points, ppf);
        let scaled = area(&points, k * ppf);
        prop_assert!(close(scaled, base / (k * k)));
    }

    #[test]
    fn prop_perimeter_scales_linearly(points in polygon_strategy(), ppf in 0.1f64..10.0, k in 0.1f64..10.0) {
        let base = perimeter(&points, ppf, ChainKind::Closed);
        let scaled = perimeter(&points, k * ppf, ChainKind::Closed);
        prop_assert!(close(scaled, base / k));
    }

    #[test]
    fn prop_closed_at_least_open(points in polygon_strategy()) {
        let open = perimeter(&points, 1.0, ChainKind::Open);
        let closed = perimeter(&points, 1.0, ChainKind::Closed);
        prop_assert!(closed >= open);
    }
}
