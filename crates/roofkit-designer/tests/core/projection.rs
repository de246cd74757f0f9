use roofkit_core::{GeoPoint, Point, ProjectionError};
use roofkit_designer::projection::{geo_to_pixel, pixel_to_geo, GeoReference};

#[test]
fn test_degenerate_center_reports_no_valid_coordinates() {
    let footprint = vec![GeoPoint::new(40.0, -75.0); 4];
    let result = geo_to_pixel(&footprint, 0.0001, -0.0002, 20.0, 800.0, 600.0);
    assert_eq!(
        result,
        Err(ProjectionError::NoValidCoordinates {
            lat: 0.0001,
            lng: -0.0002
        })
    );
    assert!(GeoReference::new(GeoPoint::new(0.0, 0.0), 20.0, 800.0, 600.0).is_err());
}

#[test]
fn test_center_away_from_zero_on_one_axis_is_valid() {
    // Equator and prime meridian are fine as long as both are not near zero
    assert!(GeoReference::new(GeoPoint::new(0.0, 30.0), 20.0, 800.0, 600.0).is_ok());
    assert!(GeoReference::new(GeoPoint::new(51.5, 0.0), 20.0, 800.0, 600.0).is_ok());
}

#[test]
fn test_forward_and_inverse_agree() {
    let geo = vec![
        GeoPoint::new(33.7491, -84.3881),
        GeoPoint::new(33.7493, -84.3878),
    ];
    let pixels = geo_to_pixel(&geo, 33.7490, -84.3880, 20.0, 800.0, 600.0).unwrap();
    let back = pixel_to_geo(&pixels, 33.7490, -84.3880, 20.0, 800.0, 600.0).unwrap();
    for (a, b) in geo.iter().zip(&back) {
        assert!((a.lat - b.lat).abs() < 1e-10);
        assert!((a.lng - b.lng).abs() < 1e-10);
    }
}

#[test]
fn test_coarser_zoom_shrinks_displacement() {
    let geo = [GeoPoint::new(40.0002, -75.0)];
    let at20 = geo_to_pixel(&geo, 40.0, -75.0, 20.0, 800.0, 600.0).unwrap();
    let at19 = geo_to_pixel(&geo, 40.0, -75.0, 19.0, 800.0, 600.0).unwrap();
    let d20 = 300.0 - at20[0].y;
    let d19 = 300.0 - at19[0].y;
    assert!((d20 - 2.0 * d19).abs() < 1e-9);
}

#[test]
fn test_longitude_shortened_by_latitude() {
    let reference = GeoReference::new(GeoPoint::new(60.0, 10.0), 20.0, 800.0, 600.0).unwrap();
    let east = reference.project(&GeoPoint::new(60.0, 10.0001));
    let north = reference.project(&GeoPoint::new(60.0001, 10.0));
    let dx = east.x - 400.0;
    let dy = 300.0 - north.y;
    // cos(60 deg) = 0.5
    assert!((dx / dy - 0.5).abs() < 1e-9);
    assert_eq!(reference.project(&reference.center()), Point::new(400.0, 300.0));
}
