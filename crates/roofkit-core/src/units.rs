//! Roof pitch and unit formatting utilities
//!
//! Pitch is expressed as rise over a fixed 12-unit run (`"6/12"`). The pitch
//! multiplier converts a flat plan area into the true sloped area.

use crate::constants::{DEFAULT_PITCH_RISE, PITCH_RUN};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roof slope as rise per 12 units of run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Pitch {
    rise: f64,
}

impl Pitch {
    /// Creates a pitch from its rise. Negative or non-finite rises are
    /// replaced by the default rise.
    pub fn new(rise: f64) -> Self {
        if rise.is_finite() && rise >= 0.0 {
            Self { rise }
        } else {
            Self::default()
        }
    }

    /// Rise per 12 units of run.
    pub fn rise(&self) -> f64 {
        self.rise
    }

    /// Slope factor `sqrt(1 + (rise/12)^2)`.
    pub fn multiplier(&self) -> f64 {
        let slope = self.rise / PITCH_RUN;
        (1.0 + slope * slope).sqrt()
    }

    /// Parses a pitch string, falling back to the default rise when the
    /// input cannot be read.
    pub fn parse_lenient(input: &str) -> Self {
        match input.parse::<Pitch>() {
            Ok(pitch) => pitch,
            Err(e) => {
                tracing::debug!("{}, using {}/12", e, DEFAULT_PITCH_RISE);
                Self::default()
            }
        }
    }
}

impl Default for Pitch {
    fn default() -> Self {
        Self {
            rise: DEFAULT_PITCH_RISE,
        }
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/12", self.rise)
    }
}

impl FromStr for Pitch {
    type Err = String;

    /// Accepts `"rise/12"` or a bare `"rise"`. Only the rise is read; the
    /// run is always 12.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rise_part = s.split('/').next().unwrap_or("").trim();
        let rise = rise_part
            .parse::<f64>()
            .map_err(|_| format!("Invalid pitch: {}", s))?;
        if !rise.is_finite() || rise < 0.0 {
            return Err(format!("Invalid pitch: {}", s));
        }
        Ok(Self { rise })
    }
}

impl TryFrom<String> for Pitch {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Pitch> for String {
    fn from(pitch: Pitch) -> Self {
        pitch.to_string()
    }
}

/// Format a length in feet for display
pub fn format_length(feet: f64) -> String {
    format!("{:.1} ft", feet)
}

/// Format an area in square feet for display
pub fn format_area(square_feet: f64) -> String {
    format!("{:.0} sq ft", square_feet)
}
