//! Table interpolation.
//!
//! Lookups clamp at the table edges: a query outside the axis range returns
//! the value at the nearest end. No extrapolation is ever performed.

use thiserror::Error;

/// Errors raised when building or querying a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InterpError {
    /// An axis or value set has no points.
    #[error("table has no points")]
    Empty,

    /// Axis and values disagree in length.
    #[error("expected {expected} values, found {found}")]
    LengthMismatch { expected: usize, found: usize },
}

/// Linear interpolation of `(xp, fp)` at `x`, clamped at the ends.
///
/// `xp` must be non-decreasing. Where `xp` holds a repeated abscissa, the
/// right-most point at that abscissa is used.
///
/// # Errors
///
/// Returns [`InterpError::Empty`] if `xp` is empty, or
/// [`InterpError::LengthMismatch`] if `xp` and `fp` differ in length.
pub fn interp1d(x: f64, xp: &[f64], fp: &[f64]) -> Result<f64, InterpError> {
    check_axis(xp, fp.len())?;
    Ok(lerp(fp, bracket(xp, x)))
}

/// A validated one-dimensional table, interpolated linearly and clamped.
#[derive(Debug, Clone, PartialEq)]
pub struct Table1d {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl Table1d {
    /// Creates a table from a non-decreasing axis and its values.
    ///
    /// # Errors
    ///
    /// Returns [`InterpError::Empty`] if `xs` is empty, or
    /// [`InterpError::LengthMismatch`] if `xs` and `ys` differ in length.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> Result<Self, InterpError> {
        check_axis(&xs, ys.len())?;
        Ok(Self { xs, ys })
    }

    #[must_use]
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    #[must_use]
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// Interpolates the table at `x`.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        lerp(&self.ys, bracket(&self.xs, x))
    }
}

/// Returns `n` evenly spaced values from `start` to `stop`, both included.
#[must_use]
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { stop } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// A rectilinear table sampled at every `(row, col)` pair of two axes.
///
/// Queries use bilinear interpolation and clamp to the axis ranges.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid2d {
    rows: Vec<f64>,
    cols: Vec<f64>,
    values: Vec<Vec<f64>>,
}

impl Grid2d {
    /// Creates a grid where `values[i][j]` is sampled at `(rows[i], cols[j])`.
    ///
    /// Both axes must be non-decreasing.
    ///
    /// # Errors
    ///
    /// Returns [`InterpError::Empty`] if either axis is empty, or
    /// [`InterpError::LengthMismatch`] if `values` is not `rows.len()` by
    /// `cols.len()`.
    pub fn new(rows: Vec<f64>, cols: Vec<f64>, values: Vec<Vec<f64>>) -> Result<Self, InterpError> {
        check_axis(&rows, values.len())?;
        for row in &values {
            check_axis(&cols, row.len())?;
        }
        Ok(Self { rows, cols, values })
    }

    /// Row axis.
    #[must_use]
    pub fn rows(&self) -> &[f64] {
        &self.rows
    }

    /// Column axis.
    #[must_use]
    pub fn cols(&self) -> &[f64] {
        &self.cols
    }

    /// Interpolates the table at `(row, col)`.
    #[must_use]
    pub fn eval(&self, row: f64, col: f64) -> f64 {
        let (r0, r1, tr) = bracket(&self.rows, row);
        let c = bracket(&self.cols, col);

        let lower = lerp(&self.values[r0], c);
        let upper = lerp(&self.values[r1], c);
        lower + tr * (upper - lower)
    }
}

fn check_axis(axis: &[f64], len: usize) -> Result<(), InterpError> {
    if axis.is_empty() {
        return Err(InterpError::Empty);
    }
    if axis.len() != len {
        return Err(InterpError::LengthMismatch {
            expected: axis.len(),
            found: len,
        });
    }
    Ok(())
}

/// Locates `x` on a non-empty axis as `(lower index, upper index, fraction)`.
fn bracket(axis: &[f64], x: f64) -> (usize, usize, f64) {
    let last = axis.len() - 1;
    if x <= axis[0] {
        return (0, 0, 0.0);
    }
    if x >= axis[last] {
        return (last, last, 0.0);
    }

    // NaN lands here and propagates through the fraction.
    let hi = axis.partition_point(|&v| v <= x).clamp(1, last);
    let lo = hi - 1;
    (lo, hi, (x - axis[lo]) / (axis[hi] - axis[lo]))
}

fn lerp(values: &[f64], (lo, hi, t): (usize, usize, f64)) -> f64 {
    if lo == hi {
        values[lo]
    } else {
        values[lo] + t * (values[hi] - values[lo])
    }
}
