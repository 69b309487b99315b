//! Per-player kinematic state consumed by the engine.

use serde::{Deserialize, Serialize};

use crate::error::{ControlError, Result};

/// Position on the field, in yards.
///
/// Prefer destructuring over `.0` / `.1` arithmetic in new code to keep
/// the axes legible.
pub type FieldPos = (f64, f64);

/// One player's kinematic state for one frame.
///
/// Rows are expected to be standardized upstream so the attacking team
/// advances in a consistent direction across plays (see
/// [`crate::standardize`]), and to exclude the tracked ball entity (see
/// [`crate::frame`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Position (x, y) in yards on the standardized field.
    pub position: FieldPos,
    /// Speed in yards per time unit. Non-negative; exact zeros are smoothed
    /// with [`crate::model_constants::influence::SPEED_SMOOTHING`] before use.
    pub speed: f64,
    /// Direction of travel in radians, counterclockwise from the +x axis.
    pub heading: f64,
    /// Whether the player belongs to the team in possession.
    pub is_attacking: bool,
    /// Euclidean distance to the reference point (the ball, or the player
    /// in possession of it), in yards.
    pub reference_distance: f64,
}

impl PlayerState {
    /// Fail fast on rows that would silently poison every grid cell.
    pub(crate) fn validate(&self, index: usize) -> Result<()> {
        check_finite(self.position.0, "position.x", index)?;
        check_finite(self.position.1, "position.y", index)?;
        check_finite(self.heading, "heading", index)?;
        check_finite(self.reference_distance, "reference_distance", index)?;
        if !self.speed.is_finite() || self.speed < 0.0 {
            return Err(ControlError::InvalidPlayerField {
                index,
                field: "speed",
                value: self.speed,
            });
        }
        Ok(())
    }
}

fn check_finite(value: f64, field: &'static str, index: usize) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ControlError::InvalidPlayerField {
            index,
            field,
            value,
        })
    }
}
