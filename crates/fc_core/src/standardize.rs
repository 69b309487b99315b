//! Play-direction standardization.
//!
//! Raw tracking uses the horizontal field (x along the 120 yd length, y
//! across the 53.3 yd width) with plays run in either direction. The
//! engine wants one canonical frame per play: the vertical field, offense
//! always advancing bottom to top (+y). This module rotates individual
//! rows into that frame and converts compass bearings into the math
//! radians the influence model consumes.
//!
//! ## Frames
//!
//! **Raw / horizontal**: x 0–120 (goal line to goal line), y 0–53.3.
//! Bearings in compass degrees: 0° points up the +y axis, increasing
//! clockwise.
//!
//! **Standardized / vertical**: x 0–53.3 (width), y 0–120 (length),
//! offense toward y = 120.

use serde::{Deserialize, Serialize};

use crate::model_constants::field;
use crate::player::FieldPos;

/// Direction the offense moves in the raw horizontal frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayDirection {
    Left,
    Right,
}

/// Rotate a raw position into the standardized vertical frame.
pub fn standardize_position(pos: FieldPos, direction: PlayDirection) -> FieldPos {
    let (x, y) = pos;
    match direction {
        PlayDirection::Left => (y, field::LENGTH_YD - x),
        PlayDirection::Right => (field::WIDTH_YD - y, x),
    }
}

/// Remap a raw compass bearing (degrees) into the standardized frame.
pub fn standardize_bearing(degrees: f64) -> f64 {
    (180.0 - degrees).rem_euclid(360.0)
}

/// Convert a standardized compass bearing (0° = +y, clockwise) to math
/// radians (counterclockwise from the +x axis).
pub fn bearing_to_radians(degrees: f64) -> f64 {
    (90.0 - degrees).to_radians()
}

/// Flip an absolute yardline for left-direction plays so field landmarks
/// (line of scrimmage, first-down line) agree with the standardized frame.
pub fn standardize_yardline(yardline: f64, direction: PlayDirection) -> f64 {
    match direction {
        PlayDirection::Left => field::LENGTH_YD - yardline,
        PlayDirection::Right => yardline,
    }
}
