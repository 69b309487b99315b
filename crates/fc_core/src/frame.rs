//! Frame assembly: raw tracked entities into the engine's player roster.
//!
//! Tracking tables carry one row per tracked entity per frame — the
//! players plus the ball. The engine wants players only, each annotated
//! with its distance to the reference point. This module does that
//! resolution: pick the reference coordinates, drop the ball row, compute
//! the distances.

use serde::{Deserialize, Serialize};

use crate::error::{ControlError, Result};
use crate::player::{FieldPos, PlayerState};

/// What a tracking row describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    Ball,
}

/// One raw tracking row for one frame.
///
/// Kinematic fields on a `Ball` row are carried through but never used;
/// the ball contributes only its position, as the reference point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackedEntity {
    pub kind: EntityKind,
    /// Position (x, y) in yards on the standardized field.
    pub position: FieldPos,
    /// Speed in yards per time unit.
    pub speed: f64,
    /// Direction of travel in radians, counterclockwise from the +x axis.
    pub heading: f64,
    /// Whether the entity belongs to the team in possession.
    pub is_attacking: bool,
}

/// Where reference distances are measured from.
///
/// `Ball` resolves the reference from the frame's tracked ball entity;
/// `Fixed` takes caller-supplied coordinates, e.g. the passer's position
/// from the play table. Both feed the same influence model — the choice
/// only decides where the radius contraction is anchored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReferencePoint {
    Ball,
    Fixed(FieldPos),
}

/// Euclidean distance between two field positions, in yards.
#[inline]
pub fn distance(a: FieldPos, b: FieldPos) -> f64 {
    let dx = a.0 - b.0;
    let dy = a.1 - b.1;
    (dx * dx + dy * dy).sqrt()
}

/// Build the engine roster for one frame.
///
/// Ball rows never enter the roster. With [`ReferencePoint::Ball`] the
/// first ball row provides the reference coordinates, and a frame without
/// one is an error — silently defaulting the anchor would skew every
/// radius in the frame.
pub fn assemble_roster(
    entities: &[TrackedEntity],
    reference: ReferencePoint,
) -> Result<Vec<PlayerState>> {
    let reference_pos = match reference {
        ReferencePoint::Fixed(pos) => pos,
        ReferencePoint::Ball => entities
            .iter()
            .find(|entity| entity.kind == EntityKind::Ball)
            .map(|entity| entity.position)
            .ok_or(ControlError::MissingReference)?,
    };

    let mut roster = Vec::with_capacity(entities.len());
    for entity in entities {
        if entity.kind == EntityKind::Ball {
            log::debug!(
                "dropping ball row at ({:.2}, {:.2}) from roster",
                entity.position.0,
                entity.position.1
            );
            continue;
        }
        roster.push(PlayerState {
            position: entity.position,
            speed: entity.speed,
            heading: entity.heading,
            is_attacking: entity.is_attacking,
            reference_distance: distance(reference_pos, entity.position),
        });
    }
    Ok(roster)
}
