//! Roster-level field control aggregation.
//!
//! Folds every player's influence into a signed per-cell sum (attack adds,
//! defense subtracts) and squashes the sums through a logistic, so each
//! cell reads as the probability the attacking team controls that spot:
//! 0.5 is contested, above 0.5 favors the attack.

use rayon::prelude::*;

use crate::error::{ControlError, Result};
use crate::grid::{ControlGrid, FieldGrid};
use crate::influence::influence_degree;
use crate::player::PlayerState;

/// Field control of the attacking team at every grid point.
///
/// Pure function of the inputs; no state survives the call, so independent
/// frames can be evaluated concurrently. Cost is O(players × grid points).
///
/// # Errors
///
/// [`ControlError::EmptyRoster`] for an empty roster,
/// [`ControlError::InvalidPlayerField`] for non-finite kinematics or a
/// negative speed, and [`ControlError::DegenerateCovariance`] propagated
/// from the influence model.
pub fn field_control(players: &[PlayerState], grid: &FieldGrid) -> Result<ControlGrid> {
    if players.is_empty() {
        return Err(ControlError::EmptyRoster);
    }
    for (index, player) in players.iter().enumerate() {
        player.validate(index)?;
    }

    // Grid points are independent, so they fan out across threads. Each
    // point accumulates players in roster order, which keeps the result
    // bit-identical to the sequential nesting regardless of scheduling.
    let sums: Vec<f64> = grid
        .points()
        .par_iter()
        .map(|&point| {
            let mut sum = 0.0;
            for player in players {
                let influence = influence_degree(point, player)?;
                if player.is_attacking {
                    sum += influence;
                } else {
                    sum -= influence;
                }
            }
            Ok(sum)
        })
        .collect::<Result<Vec<f64>>>()?;

    let control = sums.into_iter().map(logistic).collect();
    Ok(ControlGrid::from_flat(control, grid.shape()))
}

/// Logistic squash mapping unbounded signed influence sums into `[0, 1]`.
#[inline]
fn logistic(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridShape;
    use crate::player::FieldPos;

    fn player(
        position: FieldPos,
        speed: f64,
        heading: f64,
        is_attacking: bool,
        reference_distance: f64,
    ) -> PlayerState {
        PlayerState {
            position,
            speed,
            heading,
            is_attacking,
            reference_distance,
        }
    }

    fn single_point_grid(point: FieldPos) -> FieldGrid {
        FieldGrid::new(vec![point], GridShape { width: 1, height: 1 }).unwrap()
    }

    #[test]
    fn test_lone_attacker_controls_own_position() {
        // One attacker, evaluated at their exact position: the influence
        // term is its self-normalized peak of 1.0, so control is σ(1).
        let roster = [player((0.0, 0.0), 5.0, 0.0, true, 20.0)];
        let grid = single_point_grid((0.0, 0.0));
        let control = field_control(&roster, &grid).unwrap();
        let expected = 1.0 / (1.0 + (-1.0f64).exp());
        assert!(
            (control.value(0, 0) - expected).abs() < 1e-12,
            "expected σ(1) ≈ {}, got {}",
            expected,
            control.value(0, 0)
        );
    }

    #[test]
    fn test_mirrored_rosters_split_the_midpoint() {
        // Attacker and defender mirrored about the midpoint with identical
        // kinematics: net influence there cancels exactly and the logistic
        // of zero is exactly one half.
        let roster = [
            player((0.0, -5.0), 3.0, 0.0, true, 15.0),
            player((0.0, 5.0), 3.0, 0.0, false, 15.0),
        ];
        let grid = single_point_grid((0.0, 0.0));
        let control = field_control(&roster, &grid).unwrap();
        assert_eq!(control.value(0, 0), 0.5);
    }

    #[test]
    fn test_defender_suppresses_attacking_control() {
        let attacker_only = [player((10.0, 10.0), 4.0, 0.0, true, 20.0)];
        let contested = [
            player((10.0, 10.0), 4.0, 0.0, true, 20.0),
            player((12.0, 10.0), 4.0, std::f64::consts::PI, false, 20.0),
        ];
        let grid = single_point_grid((11.0, 10.0));
        let open = field_control(&attacker_only, &grid).unwrap().value(0, 0);
        let pressed = field_control(&contested, &grid).unwrap().value(0, 0);
        assert!(
            pressed < open,
            "defensive presence should lower control: {} vs {}",
            pressed,
            open
        );
        assert!(open > 0.5, "uncontested spot should favor the attack: {}", open);
    }

    #[test]
    fn test_output_is_vertically_mirrored() {
        // Attacker parked on the maximum-y row: after the flip that row
        // must come back as row 0.
        let roster = [player((0.0, 20.0), 3.0, 0.0, true, 25.0)];
        let points = vec![
            (0.0, 0.0),
            (10.0, 0.0),
            (0.0, 10.0),
            (10.0, 10.0),
            (0.0, 20.0),
            (10.0, 20.0),
        ];
        let grid = FieldGrid::new(points, GridShape { width: 2, height: 3 }).unwrap();
        let control = field_control(&roster, &grid).unwrap();

        assert!(
            control.value(0, 0) > control.value(2, 0),
            "row 0 should be the y=20 row next to the attacker: {:?}",
            control.values()
        );
        // Row 0 must equal the per-point values of the maximum-y points.
        let top_left = field_control(&roster, &single_point_grid((0.0, 20.0)))
            .unwrap()
            .value(0, 0);
        let top_right = field_control(&roster, &single_point_grid((10.0, 20.0)))
            .unwrap()
            .value(0, 0);
        assert_eq!(control.row(0), &[top_left, top_right]);
    }

    #[test]
    fn test_empty_roster_rejected() {
        let grid = single_point_grid((0.0, 0.0));
        assert_eq!(
            field_control(&[], &grid).unwrap_err(),
            ControlError::EmptyRoster
        );
    }

    #[test]
    fn test_invalid_player_rejected() {
        let mut bad = player((0.0, 0.0), 3.0, 0.0, true, 10.0);
        bad.heading = f64::NAN;
        let grid = single_point_grid((0.0, 0.0));
        assert!(matches!(
            field_control(&[bad], &grid).unwrap_err(),
            ControlError::InvalidPlayerField {
                field: "heading",
                ..
            }
        ));
    }

    #[test]
    fn test_zero_speed_roster_stays_in_range() {
        let roster = [
            player((5.0, 5.0), 0.0, 0.0, true, 10.0),
            player((8.0, 5.0), 0.0, 1.5, false, 12.0),
        ];
        let grid = FieldGrid::regular(0.0, 10.0, 0.0, 10.0, 2.5).unwrap();
        let control = field_control(&roster, &grid).unwrap();
        for &value in control.values() {
            assert!(value.is_finite());
            assert!((0.0..=1.0).contains(&value), "out of range: {}", value);
        }
    }

    #[test]
    fn test_same_frame_is_deterministic() {
        let roster = [
            player((20.0, 20.0), 6.0, 0.4, true, 9.0),
            player((25.0, 22.0), 2.0, 2.0, false, 14.0),
            player((18.0, 26.0), 0.0, -1.0, false, 21.0),
        ];
        let grid = FieldGrid::regular(10.0, 30.0, 10.0, 30.0, 1.0).unwrap();
        let first = field_control(&roster, &grid).unwrap();
        let second = field_control(&roster, &grid).unwrap();
        assert_eq!(first, second);
    }

    #[cfg(all(test, feature = "proptest"))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn arb_player() -> impl Strategy<Value = PlayerState> {
            (
                (-5.0f64..125.0, -5.0f64..58.0),
                0.0f64..12.5,
                -std::f64::consts::PI..std::f64::consts::PI,
                any::<bool>(),
                0.0f64..60.0,
            )
                .prop_map(|(position, speed, heading, is_attacking, reference_distance)| {
                    PlayerState {
                        position,
                        speed,
                        heading,
                        is_attacking,
                        reference_distance,
                    }
                })
        }

        proptest! {
            /// Property: every control cell is a probability.
            #[test]
            fn prop_control_in_unit_interval(
                roster in prop::collection::vec(arb_player(), 1..8),
                x0 in 0.0f64..100.0,
                y0 in 0.0f64..40.0,
            ) {
                let grid = FieldGrid::regular(x0, x0 + 10.0, y0, y0 + 10.0, 2.0).unwrap();
                let control = field_control(&roster, &grid).unwrap();
                for &value in control.values() {
                    prop_assert!(value.is_finite());
                    prop_assert!((0.0..=1.0).contains(&value));
                }
            }
        }
    }
}
