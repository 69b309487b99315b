//! Single-player influence model.
//!
//! Each player projects a rotated anisotropic Gaussian onto the field:
//! elongated along the direction of travel in proportion to speed, scaled
//! down as the player closes on the reference point, and centered half a
//! yard ahead of the player. The influence degree at a query point is the
//! density there normalized by the density at the player's own position,
//! so it peaks at 1.0 on the player and decays outward.
//!
//! Two structural quirks of the fitted model are load-bearing and must not
//! be "corrected" to textbook forms:
//! - the covariance is built from the scale matrix *squared*
//!   (`Rot · S · S · Rot⁻¹`);
//! - the density is the *sum* of the normalizing constant and the
//!   exponential kernel, not their product.
//!
//! Downstream consumers are calibrated against both.

use nalgebra::{Matrix2, Vector2};

use crate::error::{ControlError, Result};
use crate::model_constants::influence::{
    MAX_SPEED, MEAN_SHIFT, RADIUS_MAX, RADIUS_MIN, RADIUS_QUAD_COEFF, RADIUS_SATURATION_DIST,
    SPEED_SMOOTHING,
};
use crate::player::{FieldPos, PlayerState};

/// Influence area radius as a function of distance to the reference point.
///
/// Quadratic growth up to the saturation distance, flat beyond it: players
/// tight to the ball contest a small area, players far from it a fixed one.
#[inline]
pub fn influence_radius(reference_distance: f64) -> f64 {
    if reference_distance <= RADIUS_SATURATION_DIST {
        RADIUS_QUAD_COEFF * reference_distance.powi(2) + RADIUS_MIN
    } else {
        RADIUS_MAX
    }
}

#[inline]
fn speed_ratio(speed: f64) -> f64 {
    speed.powi(2) / MAX_SPEED.powi(2)
}

/// Diagonal scaling matrix: major axis along the direction of travel grows
/// with the speed ratio, minor axis shrinks by the same amount.
fn scaling_matrix(reference_distance: f64, speed: f64) -> Matrix2<f64> {
    let r = influence_radius(reference_distance);
    let ratio = speed_ratio(speed);
    let s_x = (r + r * ratio) / 2.0;
    let s_y = (r - r * ratio) / 2.0;
    Matrix2::new(s_x, 0.0, 0.0, s_y)
}

fn rotation_matrix(heading: f64) -> Matrix2<f64> {
    Matrix2::new(
        heading.cos(),
        -heading.sin(),
        heading.sin(),
        heading.cos(),
    )
}

/// Covariance of the influence Gaussian: the squared scaling matrix rotated
/// into the heading-aligned frame.
fn covariance(heading: f64, reference_distance: f64, speed: f64) -> Result<Matrix2<f64>> {
    let scale = scaling_matrix(reference_distance, speed);
    let rot = rotation_matrix(heading);
    let rot_inv = rot
        .try_inverse()
        .ok_or(ControlError::DegenerateCovariance { det: 0.0 })?;
    Ok(rot * scale * scale * rot_inv)
}

/// Distribution mean: the player's position shifted along the velocity
/// unit vector, biasing the footprint slightly ahead of the player.
fn shifted_mean(position: FieldPos, speed: f64, heading: f64) -> Vector2<f64> {
    let velocity = Vector2::new(speed * heading.cos(), speed * heading.sin());
    let unit = velocity / velocity.norm();
    Vector2::new(position.0, position.1) + MEAN_SHIFT * unit
}

/// Unnormalized influence density at `point` for a distribution centered on
/// `center`.
fn influence_density(
    point: FieldPos,
    center: FieldPos,
    speed: f64,
    heading: f64,
    reference_distance: f64,
) -> Result<f64> {
    let sigma = covariance(heading, reference_distance, speed)?;
    let det = sigma.determinant();
    if det <= 0.0 {
        return Err(ControlError::DegenerateCovariance { det });
    }
    let sigma_inv = sigma
        .try_inverse()
        .ok_or(ControlError::DegenerateCovariance { det })?;

    let mu = shifted_mean(center, speed, heading);
    let diff = Vector2::new(point.0, point.1) - mu;

    // Sum, not product. See the module docs.
    let norm_constant = 1.0 / ((speed * std::f64::consts::PI).powi(2) * det).sqrt();
    let kernel = (-0.5 * diff.dot(&(sigma_inv * diff))).exp();
    Ok(norm_constant + kernel)
}

/// Influence degree of `player` at `point`.
///
/// The density is normalized by its own value at the query point's
/// (unshifted) center, which by translation invariance equals the density
/// the distribution assigns to the player's own position: the degree is
/// exactly 1.0 on the player and decays with distance. The half-yard mean
/// shift lets values exceed 1.0 by a hair directly ahead of the player.
///
/// # Errors
///
/// [`ControlError::DegenerateCovariance`] when the covariance determinant
/// is not positive. The radius/scale construction keeps it positive for
/// every speed below [`MAX_SPEED`]; at exactly `MAX_SPEED` the minor axis
/// collapses and the failure is surfaced rather than masked.
pub fn influence_degree(point: FieldPos, player: &PlayerState) -> Result<f64> {
    let speed = player.speed + SPEED_SMOOTHING;
    let numerator = influence_density(
        point,
        player.position,
        speed,
        player.heading,
        player.reference_distance,
    )?;
    let denominator =
        influence_density(point, point, speed, player.heading, player.reference_distance)?;
    Ok(numerator / denominator)
}
