//! # fc_core - Deterministic Field Control Engine
//!
//! Estimates spatial control of the team in possession from player
//! tracking data: every player projects a rotated anisotropic Gaussian
//! influence field shaped by speed, heading, and distance to the ball, and
//! the signed, logistic-squashed aggregate gives a per-cell probability
//! that the attacking team controls that spot.
//!
//! The model follows "Wide Open Spaces: A statistical technique for
//! measuring space creation in professional soccer" (Fernandez & Bornn,
//! SSAC 2018), fitted for gridiron tracking data.
//!
//! ## Features
//! - Exact, deterministic numerics (f64 end to end; same frame = same grid)
//! - Pure functions with no shared state, safe to fan out across frames
//! - Frame assembly from raw tracking rows (ball exclusion, reference
//!   distances) and play-direction standardization

pub mod control;
pub mod error;
pub mod frame;
pub mod grid;
pub mod influence;
pub mod model_constants;
pub mod player;
pub mod standardize;

// Re-export the engine surface
pub use control::field_control;
pub use error::{ControlError, Result};
pub use frame::{assemble_roster, distance, EntityKind, ReferencePoint, TrackedEntity};
pub use grid::{ControlGrid, FieldGrid, GridShape};
pub use influence::{influence_degree, influence_radius};
pub use player::{FieldPos, PlayerState};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
