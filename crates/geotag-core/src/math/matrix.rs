//! Dimension-checked matrix helpers.
//!
//! All functions are pure: inputs are borrowed and a fresh matrix or vector is
//! returned, so a matrix can be shared between callers without aliasing.
//! Column vectors are represented as `n×1` [`MatX`] values.

use thiserror::Error;

use super::{MatX, Real};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    #[error("cannot multiply {left_rows}x{left_cols} by {right_rows}x{right_cols}")]
    DimensionMismatch {
        left_rows: usize,
        left_cols: usize,
        right_rows: usize,
        right_cols: usize,
    },
    #[error("expected a square matrix, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },
    #[error("expected a single-column matrix, got {rows}x{cols}")]
    NotColumn { rows: usize, cols: usize },
}

/// Standard matrix product `a · b`.
///
/// # Errors
///
/// Returns [`MatrixError::DimensionMismatch`] if `a.ncols() != b.nrows()`.
pub fn multiply(a: &MatX, b: &MatX) -> Result<MatX, MatrixError> {
    if a.ncols() != b.nrows() {
        return Err(MatrixError::DimensionMismatch {
            left_rows: a.nrows(),
            left_cols: a.ncols(),
            right_rows: b.nrows(),
            right_cols: b.ncols(),
        });
    }
    Ok(a * b)
}

/// Transpose of a square matrix, returned as a new matrix.
///
/// # Errors
///
/// Returns [`MatrixError::NotSquare`] for non-square input.
pub fn transpose(a: &MatX) -> Result<MatX, MatrixError> {
    if !a.is_square() {
        return Err(MatrixError::NotSquare {
            rows: a.nrows(),
            cols: a.ncols(),
        });
    }
    Ok(a.transpose())
}

/// Multiply every component of `v` by `scalar`.
pub fn scale_vector(v: &[Real], scalar: Real) -> Vec<Real> {
    v.iter().map(|x| x * scalar).collect()
}

/// Build an `n×1` column matrix from a flat slice.
pub fn vector_from_array(values: &[Real]) -> MatX {
    MatX::from_column_slice(values.len(), 1, values)
}

/// Flatten an `n×1` column matrix back into a vector.
///
/// # Errors
///
/// Returns [`MatrixError::NotColumn`] if the matrix has more than one column.
pub fn array_from_vector(m: &MatX) -> Result<Vec<Real>, MatrixError> {
    if m.ncols() != 1 {
        return Err(MatrixError::NotColumn {
            rows: m.nrows(),
            cols: m.ncols(),
        });
    }
    Ok(m.column(0).iter().copied().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiply_matches_hand_computed_product() {
        let a = MatX::from_row_slice(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let b = MatX::from_row_slice(3, 2, &[7.0, 8.0, 9.0, 10.0, 11.0, 12.0]);
        let p = multiply(&a, &b).unwrap();
        assert_eq!(p.shape(), (2, 2));
        assert_eq!(p[(0, 0)], 58.0);
        assert_eq!(p[(0, 1)], 64.0);
        assert_eq!(p[(1, 0)], 139.0);
        assert_eq!(p[(1, 1)], 154.0);
    }

    #[test]
    fn multiply_rejects_incompatible_shapes() {
        let a = MatX::zeros(2, 3);
        let b = MatX::zeros(2, 3);
        let err = multiply(&a, &b).unwrap_err();
        assert_eq!(
            err,
            MatrixError::DimensionMismatch {
                left_rows: 2,
                left_cols: 3,
                right_rows: 2,
                right_cols: 3,
            }
        );
    }

    #[test]
    fn transpose_leaves_input_untouched() {
        let a = MatX::from_row_slice(3, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        let t = transpose(&a).unwrap();
        assert_eq!(t[(0, 1)], 4.0);
        assert_eq!(t[(2, 0)], 3.0);
        assert_eq!(a[(0, 1)], 2.0, "input must not be mutated");
    }

    #[test]
    fn transpose_requires_square() {
        let a = MatX::zeros(2, 3);
        assert_eq!(
            transpose(&a).unwrap_err(),
            MatrixError::NotSquare { rows: 2, cols: 3 }
        );
    }

    #[test]
    fn column_conversions() {
        let col = vector_from_array(&[1.0, -2.0, 3.5]);
        assert_eq!(col.shape(), (3, 1));
        assert_eq!(array_from_vector(&col).unwrap(), vec![1.0, -2.0, 3.5]);
        assert!(array_from_vector(&MatX::zeros(3, 2)).is_err());
    }

    #[test]
    fn scale_vector_is_componentwise() {
        assert_eq!(scale_vector(&[1.0, -2.0, 0.5], 2.0), vec![2.0, -4.0, 1.0]);
    }
}
