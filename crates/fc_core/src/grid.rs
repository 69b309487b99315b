//! Field grid and control grid types.
//!
//! A [`FieldGrid`] is the ordered set of query points control is evaluated
//! at, plus the shape needed to fold flat per-point results back into rows.
//! Points are row-major with x varying fastest and y ascending by row (the
//! meshgrid convention); [`FieldGrid::regular`] builds exactly that layout.

use serde::{Deserialize, Serialize};

use crate::error::{ControlError, Result};
use crate::model_constants::grid::DEFAULT_GRANULARITY;
use crate::player::FieldPos;

/// Number of grid points along each axis.
///
/// `width` counts points along x (values per row), `height` counts points
/// along y (rows).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridShape {
    pub width: usize,
    pub height: usize,
}

impl GridShape {
    /// Total number of grid points.
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Ordered query points plus their 2D shape.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldGrid {
    points: Vec<FieldPos>,
    shape: GridShape,
}

impl FieldGrid {
    /// Build from explicit points.
    ///
    /// Fails fast when the shape product does not match the point count (a
    /// mismatch would silently mis-fold every row downstream) or when any
    /// coordinate is not finite.
    pub fn new(points: Vec<FieldPos>, shape: GridShape) -> Result<Self> {
        if shape.len() != points.len() {
            return Err(ControlError::ShapeMismatch {
                width: shape.width,
                height: shape.height,
                points: points.len(),
            });
        }
        for &(x, y) in &points {
            for value in [x, y] {
                if !value.is_finite() {
                    return Err(ControlError::NonFiniteCoordinate { value });
                }
            }
        }
        Ok(Self { points, shape })
    }

    /// Regular grid over `[min, max]` on both axes with the given step.
    ///
    /// Ranges are arange-style over `[min, max + step)`, so both bounds are
    /// covered and the last point may overshoot `max` by less than a step.
    pub fn regular(
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
        step: f64,
    ) -> Result<Self> {
        if !(step > 0.0) {
            return Err(ControlError::NonPositiveStep { step });
        }
        for bound in [x_min, x_max, y_min, y_max] {
            if !bound.is_finite() {
                return Err(ControlError::NonFiniteCoordinate { value: bound });
            }
        }
        let xs = arange(x_min, x_max + step, step);
        let ys = arange(y_min, y_max + step, step);

        let mut points = Vec::with_capacity(xs.len() * ys.len());
        for &y in &ys {
            for &x in &xs {
                points.push((x, y));
            }
        }
        let shape = GridShape {
            width: xs.len(),
            height: ys.len(),
        };
        Self::new(points, shape)
    }

    /// Regular grid with the default granularity.
    pub fn regular_default(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<Self> {
        Self::regular(x_min, x_max, y_min, y_max, DEFAULT_GRANULARITY)
    }

    pub fn points(&self) -> &[FieldPos] {
        &self.points
    }

    pub fn shape(&self) -> GridShape {
        self.shape
    }
}

/// Half-open range `[start, stop)` by `step`, matching numpy's `arange`
/// length rule of `ceil((stop - start) / step)`.
fn arange(start: f64, stop: f64, step: f64) -> Vec<f64> {
    let count = ((stop - start) / step).ceil().max(0.0) as usize;
    (0..count).map(|i| start + i as f64 * step).collect()
}

/// Per-cell control values in `[0, 1]` for the attacking team.
///
/// Row 0 corresponds to the grid's *maximum* y: the natural row order is
/// reversed once before the grid is returned. Downstream consumers were
/// calibrated against this mirrored orientation; it originated as a
/// workaround for an orientation bug that was never tracked down, so treat
/// it as an output-compatibility contract rather than the canonical
/// orientation when building new consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlGrid {
    shape: GridShape,
    values: Vec<f64>,
}

impl ControlGrid {
    /// Fold flat per-point values (natural grid order, y ascending) into
    /// rows and apply the single vertical flip.
    pub(crate) fn from_flat(values: Vec<f64>, shape: GridShape) -> Self {
        let width = shape.width;
        let mut flipped = Vec::with_capacity(values.len());
        for row in (0..shape.height).rev() {
            flipped.extend_from_slice(&values[row * width..(row + 1) * width]);
        }
        Self {
            shape,
            values: flipped,
        }
    }

    pub fn shape(&self) -> GridShape {
        self.shape
    }

    /// Value at (row, col), row 0 being the maximum-y row.
    pub fn value(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.shape.width + col]
    }

    /// One row of values, row 0 being the maximum-y row.
    pub fn row(&self, row: usize) -> &[f64] {
        let width = self.shape.width;
        &self.values[row * width..(row + 1) * width]
    }

    /// Rows top to bottom (maximum y first).
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.values.chunks(self.shape.width)
    }

    /// Flat values in row order (maximum-y row first).
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}
