//! Mathematical utilities and type definitions.
//!
//! This module provides the scalar/vector aliases used throughout the
//! workspace, the dynamically sized matrix helpers in [`matrix`] and the
//! angle newtypes in [`angle`].

use nalgebra::{DMatrix, Point2};

pub mod angle;
pub mod matrix;

pub use angle::{Degrees, Radians};
pub use matrix::MatrixError;

/// Scalar type used throughout the library (currently `f64`).
pub type Real = f64;

/// 2D point with [`Real`] coordinates (pixel locations).
pub type Pt2 = Point2<Real>;
/// Dynamically sized matrix with [`Real`] entries.
pub type MatX = DMatrix<Real>;

/// Median of a slice of finite values, sorting the slice in place.
///
/// For an even count the mean of the two middle values is returned.
/// Returns `None` for an empty slice. Callers are expected to have removed
/// NaN entries already; `total_cmp` keeps the sort well defined regardless.
pub fn median_in_place(values: &mut [Real]) -> Option<Real> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(|a, b| a.total_cmp(b));
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        Some((values[mid - 1] + values[mid]) / 2.0)
    } else {
        Some(values[mid])
    }
}
