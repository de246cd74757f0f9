//! Scale context for the current image.
//!
//! Derived once per image load from the requested zoom level and read-only
//! for the lifetime of that image.

use roofkit_core::constants::{BASE_FEET_PER_PIXEL, DEFAULT_SNAP_THRESHOLD_PX, REFERENCE_ZOOM};
use roofkit_core::ScaleError;
use serde::{Deserialize, Serialize};

/// Ground distance per pixel at a zoom level.
///
/// `2^(20 - zoom) * 0.3` feet; each zoom step halves the distance.
pub fn feet_per_pixel(zoom: f64) -> f64 {
    2f64.powf(REFERENCE_ZOOM - zoom) * BASE_FEET_PER_PIXEL
}

/// Pixel scale and snap radius for one image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleContext {
    pixels_per_foot: f64,
    snap_threshold_pixels: f64,
}

impl ScaleContext {
    /// Creates a scale context, validating both values.
    pub fn new(pixels_per_foot: f64, snap_threshold_pixels: f64) -> Result<Self, ScaleError> {
        if !pixels_per_foot.is_finite() || pixels_per_foot <= 0.0 {
            return Err(ScaleError::InvalidPixelsPerFoot {
                value: pixels_per_foot,
            });
        }
        if !snap_threshold_pixels.is_finite() || snap_threshold_pixels < 0.0 {
            return Err(ScaleError::InvalidSnapThreshold {
                value: snap_threshold_pixels,
            });
        }
        Ok(Self {
            pixels_per_foot,
            snap_threshold_pixels,
        })
    }

    /// Derives the scale from an imagery zoom level.
    pub fn from_zoom(zoom: f64, snap_threshold_pixels: f64) -> Result<Self, ScaleError> {
        Self::new(1.0 / feet_per_pixel(zoom), snap_threshold_pixels)
    }

    /// Pixels per real-world foot.
    pub fn pixels_per_foot(&self) -> f64 {
        self.pixels_per_foot
    }

    /// Closure snap radius in pixels.
    pub fn snap_threshold_pixels(&self) -> f64 {
        self.snap_threshold_pixels
    }

    /// Feet per pixel.
    pub fn feet_per_pixel(&self) -> f64 {
        1.0 / self.pixels_per_foot
    }
}

impl Default for ScaleContext {
    /// Reference zoom with the default snap radius.
    fn default() -> Self {
        Self {
            pixels_per_foot: 1.0 / BASE_FEET_PER_PIXEL,
            snap_threshold_pixels: DEFAULT_SNAP_THRESHOLD_PX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feet_per_pixel_by_zoom() {
        assert!((feet_per_pixel(20.0) - 0.3).abs() < 1e-12);
        assert!((feet_per_pixel(19.0) - 0.6).abs() < 1e-12);
        assert!((feet_per_pixel(21.0) - 0.15).abs() < 1e-12);
    }

    #[test]
    fn test_from_zoom() {
        let scale = ScaleContext::from_zoom(20.0, 15.0).unwrap();
        assert!((scale.pixels_per_foot() - 1.0 / 0.3).abs() < 1e-9);
        assert_eq!(scale.snap_threshold_pixels(), 15.0);
        assert!((scale.feet_per_pixel() - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_invalid() {
        assert!(matches!(
            ScaleContext::new(0.0, 15.0),
            Err(ScaleError::InvalidPixelsPerFoot { .. })
        ));
        assert!(matches!(
            ScaleContext::new(f64::NAN, 15.0),
            Err(ScaleError::InvalidPixelsPerFoot { .. })
        ));
        assert!(matches!(
            ScaleContext::new(1.0, -1.0),
            Err(ScaleError::InvalidSnapThreshold { .. })
        ));
    }

    #[test]
    fn test_default_matches_reference_zoom() {
        let default = ScaleContext::default();
        let derived = ScaleContext::from_zoom(20.0, 15.0).unwrap();
        assert!((default.pixels_per_foot() - derived.pixels_per_foot()).abs() < 1e-9);
    }
}
