//! Geographic to canvas coordinate projection.
//!
//! Converts detected building footprints and linear features from latitude
//! and longitude into canvas pixels around the image center, and back again
//! to attach GPS positions to drawn edges.
//!
//! The transform is a calibrated linear approximation, not a map projection:
//! pixel displacement from the canvas center is proportional to angular
//! displacement from the image center, scaled by the per-zoom
//! feet-per-pixel constant. Error grows at coarse zoom levels and away from
//! the equator. Area figures downstream are tuned against this transform.
//!
//! ```text
//! dx_ft   = (lng - center_lng) * FEET_PER_DEGREE * cos(center_lat)
//! dy_ft   = (lat - center_lat) * FEET_PER_DEGREE
//! pixel_x = canvas_width / 2  + dx_ft / feet_per_pixel
//! pixel_y = canvas_height / 2 - dy_ft / feet_per_pixel   // north is up
//! ```

use crate::scale::feet_per_pixel;
use roofkit_core::constants::{DEGENERATE_COORDINATE_EPSILON, FEET_PER_DEGREE, MAX_ZOOM, MIN_ZOOM};
use roofkit_core::{GeoPoint, Point, ProjectionError};

/// Returns true for unset or placeholder centers near (0, 0).
pub fn is_degenerate_center(lat: f64, lng: f64) -> bool {
    lat.abs() < DEGENERATE_COORDINATE_EPSILON && lng.abs() < DEGENERATE_COORDINATE_EPSILON
}

/// Image placement used to project between degrees and canvas pixels.
///
/// Can only be constructed around a valid, non-degenerate center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoReference {
    center: GeoPoint,
    zoom: f64,
    canvas_width: f64,
    canvas_height: f64,
}

impl GeoReference {
    /// Creates a projection, refusing degenerate centers.
    pub fn new(
        center: GeoPoint,
        zoom: f64,
        canvas_width: f64,
        canvas_height: f64,
    ) -> Result<Self, ProjectionError> {
        let (lat, lng) = (center.lat, center.lng);
        if !lat.is_finite()
            || !lng.is_finite()
            || lat.abs() >= 90.0
            || lng.abs() > 180.0
            || is_degenerate_center(lat, lng)
        {
            tracing::warn!("Refusing projection around ({}, {})", lat, lng);
            return Err(ProjectionError::NoValidCoordinates { lat, lng });
        }
        if !zoom.is_finite() || zoom < MIN_ZOOM as f64 || zoom > MAX_ZOOM as f64 {
            return Err(ProjectionError::InvalidZoom { zoom });
        }
        if !(canvas_width.is_finite() && canvas_width > 0.0)
            || !(canvas_height.is_finite() && canvas_height > 0.0)
        {
            return Err(ProjectionError::InvalidCanvasSize {
                width: canvas_width,
                height: canvas_height,
            });
        }
        Ok(Self {
            center,
            zoom,
            canvas_width,
            canvas_height,
        })
    }

    /// Image center.
    pub fn center(&self) -> GeoPoint {
        self.center
    }

    /// Imagery zoom level.
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Canvas width in pixels.
    pub fn canvas_width(&self) -> f64 {
        self.canvas_width
    }

    /// Canvas height in pixels.
    pub fn canvas_height(&self) -> f64 {
        self.canvas_height
    }

    /// Ground distance per pixel at this zoom.
    pub fn feet_per_pixel(&self) -> f64 {
        feet_per_pixel(self.zoom)
    }

    fn feet_per_degree_lng(&self) -> f64 {
        FEET_PER_DEGREE * self.center.lat.to_radians().cos()
    }

    /// Projects one geographic point onto the canvas.
    pub fn project(&self, geo: &GeoPoint) -> Point {
        let fpp = self.feet_per_pixel();
        let dx_ft = (geo.lng - self.center.lng) * self.feet_per_degree_lng();
        let dy_ft = (geo.lat - self.center.lat) * FEET_PER_DEGREE;
        Point::new(
            self.canvas_width / 2.0 + dx_ft / fpp,
            self.canvas_height / 2.0 - dy_ft / fpp,
        )
    }

    /// Inverse of [`GeoReference::project`].
    pub fn unproject(&self, point: &Point) -> GeoPoint {
        let fpp = self.feet_per_pixel();
        let dx_ft = (point.x - self.canvas_width / 2.0) * fpp;
        let dy_ft = (self.canvas_height / 2.0 - point.y) * fpp;
        GeoPoint::new(
            self.center.lat + dy_ft / FEET_PER_DEGREE,
            self.center.lng + dx_ft / self.feet_per_degree_lng(),
        )
    }

    /// Projects a sequence of geographic points onto the canvas.
    pub fn geo_to_pixel(&self, geo_points: &[GeoPoint]) -> Vec<Point> {
        geo_points.iter().map(|g| self.project(g)).collect()
    }

    /// Converts canvas points back to geographic coordinates.
    pub fn pixel_to_geo(&self, points: &[Point]) -> Vec<GeoPoint> {
        points.iter().map(|p| self.unproject(p)).collect()
    }
}

/// Maps `(lat, lng)` points to canvas pixels around the given center.
///
/// Fails with [`ProjectionError::NoValidCoordinates`] without projecting
/// anything when the center is unset.
pub fn geo_to_pixel(
    geo_points: &[GeoPoint],
    center_lat: f64,
    center_lng: f64,
    zoom: f64,
    canvas_width: f64,
    canvas_height: f64,
) -> Result<Vec<Point>, ProjectionError> {
    let reference = GeoReference::new(
        GeoPoint::new(center_lat, center_lng),
        zoom,
        canvas_width,
        canvas_height,
    )?;
    Ok(reference.geo_to_pixel(geo_points))
}

/// Maps canvas pixels back to `(lat, lng)` around the given center.
pub fn pixel_to_geo(
    points: &[Point],
    center_lat: f64,
    center_lng: f64,
    zoom: f64,
    canvas_width: f64,
    canvas_height: f64,
) -> Result<Vec<GeoPoint>, ProjectionError> {
    let reference = GeoReference::new(
        GeoPoint::new(center_lat, center_lng),
        zoom,
        canvas_width,
        canvas_height,
    )?;
    Ok(reference.pixel_to_geo(points))
}

/// Parses `LINESTRING(lng lat, lng lat, ...)` into `(lng, lat)` pairs.
///
/// Detection output is best-effort, so malformed input yields an empty
/// sequence instead of an error.
pub fn parse_line_string(wkt: &str) -> Vec<(f64, f64)> {
    match try_parse_line_string(wkt) {
        Some(coords) => coords,
        None => {
            tracing::warn!("Ignoring malformed line string: {:.80}", wkt);
            Vec::new()
        }
    }
}

fn try_parse_line_string(wkt: &str) -> Option<Vec<(f64, f64)>> {
    let trimmed = wkt.trim();
    let keyword = "LINESTRING";
    let head = trimmed.get(..keyword.len())?;
    if !head.eq_ignore_ascii_case(keyword) {
        return None;
    }
    let body = trimmed.get(keyword.len()..)?.trim();
    let inner = body.strip_prefix('(')?.strip_suffix(')')?;

    let mut coords = Vec::new();
    for pair in inner.split(',') {
        let mut parts = pair.split_whitespace();
        let lng = parts.next()?.parse::<f64>().ok()?;
        let lat = parts.next()?.parse::<f64>().ok()?;
        if parts.next().is_some() || !lng.is_finite() || !lat.is_finite() {
            return None;
        }
        coords.push((lng, lat));
    }

    if coords.len() < 2 {
        return None;
    }
    Some(coords)
}

/// Converts parsed `(lng, lat)` pairs into geographic points.
pub fn line_string_to_geo(coords: &[(f64, f64)]) -> Vec<GeoPoint> {
    coords
        .iter()
        .map(|&(lng, lat)| GeoPoint::new(lat, lng))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> GeoReference {
        GeoReference::new(GeoPoint::new(40.0, -75.0), 20.0, 800.0, 600.0).unwrap()
    }

    #[test]
    fn test_center_maps_to_canvas_center() {
        let p = reference().project(&GeoPoint::new(40.0, -75.0));
        assert_eq!(p, Point::new(400.0, 300.0));
    }

    #[test]
    fn test_north_is_up_east_is_right() {
        let r = reference();
        let north = r.project(&GeoPoint::new(40.0001, -75.0));
        let east = r.project(&GeoPoint::new(40.0, -74.9999));
        assert!(north.y < 300.0);
        assert!((north.x - 400.0).abs() < 1e-9);
        assert!(east.x > 400.0);
    }

    #[test]
    fn test_latitude_scale() {
        // 0.0001 degrees of latitude is 36.4 ft, 121.33 px at 0.3 ft/px
        let p = reference().project(&GeoPoint::new(40.0001, -75.0));
        assert!((300.0 - p.y - 36.4 / 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_round_trip() {
        let r = reference();
        let geo = GeoPoint::new(40.00012, -75.00031);
        let back = r.unproject(&r.project(&geo));
        assert!((back.lat - geo.lat).abs() < 1e-12);
        assert!((back.lng - geo.lng).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_center_rejected() {
        assert!(is_degenerate_center(0.0001, -0.0002));
        assert!(!is_degenerate_center(0.0001, 12.0));
        let err = geo_to_pixel(&[GeoPoint::new(1.0, 1.0)], 0.0001, -0.0002, 20.0, 800.0, 600.0)
            .unwrap_err();
        assert!(matches!(err, ProjectionError::NoValidCoordinates { .. }));
    }

    #[test]
    fn test_invalid_zoom_and_canvas() {
        let center = GeoPoint::new(40.0, -75.0);
        assert!(matches!(
            GeoReference::new(center, 0.0, 800.0, 600.0),
            Err(ProjectionError::InvalidZoom { .. })
        ));
        assert!(matches!(
            GeoReference::new(center, 20.0, 0.0, 600.0),
            Err(ProjectionError::InvalidCanvasSize { .. })
        ));
    }

    #[test]
    fn test_parse_line_string() {
        let coords = parse_line_string("LINESTRING(-75.1 40.2, -75.2 40.3)");
        assert_eq!(coords, vec![(-75.1, 40.2), (-75.2, 40.3)]);

        let coords = parse_line_string("  linestring ( -75.1 40.2 ,-75.2   40.3 ) ");
        assert_eq!(coords.len(), 2);
    }

    #[test]
    fn test_parse_line_string_malformed() {
        assert!(parse_line_string("").is_empty());
        assert!(parse_line_string("POLYGON((0 0, 1 1, 1 0, 0 0))").is_empty());
        assert!(parse_line_string("LINESTRING(-75.1 40.2, -75.2)").is_empty());
        assert!(parse_line_string("LINESTRINé(-75.1 40.2, -75.2 40.3)").is_empty());
        assert!(parse_line_string("ÉÉÉÉÉ").is_empty());
        assert!(parse_line_string("LINESTRING(-75.1 40.2, abc 40.3)").is_empty());
        assert!(parse_line_string("LINESTRING(-75.1 40.2").is_empty());
        assert!(parse_line_string("LINESTRING(-75.1 40.2)").is_empty());
        assert!(parse_line_string("LINESTRING EMPTY").is_empty());
    }

    #[test]
    fn test_line_string_to_geo_swaps_axes() {
        let geo = line_string_to_geo(&[(-75.1, 40.2)]);
        assert_eq!(geo, vec![GeoPoint::new(40.2, -75.1)]);
    }
}
