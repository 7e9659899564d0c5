// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Determinant, adjugate and inverse of the square shapes.
//!
//! Determinants are closed-form cofactor expansions along the first row:
//! a 3x3 determinant sums three 2x2 cofactors, a 4x4 determinant sums four
//! 3x3 cofactors, the same minors `minor_of` exposes.

use super::Matrix;
use crate::error::{Axis, MathError, Result};
use crate::math::Scalar;
use std::ops::Mul;

/// Operations only defined for square matrices.
pub trait SquareMatrix<T: Scalar>: Copy + Mul<T, Output = Self> {
    /// Computes the determinant.
    ///
    /// A determinant of 0 means the matrix is not invertible.
    fn determinant(&self) -> T;

    /// Returns the transpose of the cofactor matrix.
    fn adjugate(&self) -> Self;

    /// Computes the inverse as the adjugate divided by the determinant.
    ///
    /// Fails with [`MathError::NotInvertible`] when the absolute determinant is
    /// below [`Scalar::INVERSION_EPSILON`]. The receiver is never modified.
    fn inverse(&self) -> Result<Self> {
        let det = self.determinant();
        if det.abs() < T::INVERSION_EPSILON {
            log::debug!("Matrix inversion rejected, determinant {det:?} below threshold");
            return Err(MathError::NotInvertible {
                determinant: det.to_f64(),
            });
        }
        Ok(self.adjugate() * (T::ONE / det))
    }

    /// Replaces the matrix with its inverse.
    ///
    /// On failure the matrix is left unchanged.
    fn invert(&mut self) -> Result<()> {
        *self = self.inverse()?;
        Ok(())
    }
}

#[inline]
fn sign<T: Scalar>(column: usize, row: usize) -> T {
    if (column + row) % 2 == 0 {
        T::ONE
    } else {
        -T::ONE
    }
}

#[inline]
fn check_strike(column: usize, row: usize, n: usize) -> Result<()> {
    if column >= n {
        return Err(MathError::IndexOutOfRange {
            axis: Axis::Column,
            index: column,
            bound: n,
        });
    }
    if row >= n {
        return Err(MathError::IndexOutOfRange {
            axis: Axis::Row,
            index: row,
            bound: n,
        });
    }
    Ok(())
}

/// Index of the source line kept at position `i` once `skip` is removed.
#[inline]
fn kept(i: usize, skip: usize) -> usize {
    if i < skip {
        i
    } else {
        i + 1
    }
}

// --- 2x2 ---

impl<T: Scalar> Matrix<T, 2, 2> {
    /// Builds the 2x2 minor of a 3x3 matrix by dropping `column` and `row`.
    pub fn minor_of(m: &Matrix<T, 3, 3>, column: usize, row: usize) -> Result<Self> {
        check_strike(column, row, 3)?;
        Ok(Self::from_fn(|c, r| m.cols[kept(c, column)][kept(r, row)]))
    }
}

impl<T: Scalar> SquareMatrix<T> for Matrix<T, 2, 2> {
    #[inline]
    fn determinant(&self) -> T {
        let [[a, c], [b, d]] = self.cols;
        a * d - b * c
    }

    #[inline]
    fn adjugate(&self) -> Self {
        let [[a, c], [b, d]] = self.cols;
        Self::new([[d, -c], [-b, a]])
    }
}

// --- 3x3 ---

impl<T: Scalar> Matrix<T, 3, 3> {
    /// Builds the 3x3 minor of a 4x4 matrix by dropping `column` and `row`.
    pub fn minor_of(m: &Matrix<T, 4, 4>, column: usize, row: usize) -> Result<Self> {
        check_strike(column, row, 4)?;
        Ok(Self::from_fn(|c, r| m.cols[kept(c, column)][kept(r, row)]))
    }

    /// Extracts the upper-left 3x3 corner of a 4x4 matrix (rotation and scale).
    #[inline]
    pub fn from_upper_left(m: &Matrix<T, 4, 4>) -> Self {
        Self::from_fn(|c, r| m.cols[c][r])
    }

    /// Embeds this matrix in the upper-left corner of a 4x4 identity.
    #[inline]
    pub fn to_matrix4x4(&self) -> Matrix<T, 4, 4> {
        let mut m = Matrix::<T, 4, 4>::IDENTITY;
        for (dst, src) in m.cols.iter_mut().zip(self.cols.iter()) {
            dst[..3].copy_from_slice(src);
        }
        m
    }

    #[inline]
    fn cofactor(&self, column: usize, row: usize) -> T {
        let minor = Matrix::<T, 2, 2>::from_fn(|c, r| self.cols[kept(c, column)][kept(r, row)]);
        sign::<T>(column, row) * minor.determinant()
    }
}

impl<T: Scalar> SquareMatrix<T> for Matrix<T, 3, 3> {
    fn determinant(&self) -> T {
        self.cols[0][0] * self.cofactor(0, 0)
            + self.cols[1][0] * self.cofactor(1, 0)
            + self.cols[2][0] * self.cofactor(2, 0)
    }

    fn adjugate(&self) -> Self {
        Self::from_fn(|c, r| self.cofactor(r, c))
    }
}

// --- 4x4 ---

impl<T: Scalar> Matrix<T, 4, 4> {
    #[inline]
    fn cofactor(&self, column: usize, row: usize) -> T {
        let minor =
            Matrix::<T, 3, 3>::from_fn(|c, r| self.cols[kept(c, column)][kept(r, row)]);
        sign::<T>(column, row) * minor.determinant()
    }
}

impl<T: Scalar> SquareMatrix<T> for Matrix<T, 4, 4> {
    fn determinant(&self) -> T {
        self.cols[0][0] * self.cofactor(0, 0)
            + self.cols[1][0] * self.cofactor(1, 0)
            + self.cols[2][0] * self.cofactor(2, 0)
            + self.cols[3][0] * self.cofactor(3, 0)
    }

    fn adjugate(&self) -> Self {
        Self::from_fn(|c, r| self.cofactor(r, c))
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Matrix2x2d, Matrix3x3d, Matrix3x3f, Matrix4x4d, Matrix4x4f};
    use approx::assert_relative_eq;

    fn sample4() -> Matrix4x4d {
        Matrix4x4d::new([
            [2.0, 0.0, 1.0, 3.0],
            [1.0, 3.0, 0.0, 1.0],
            [0.0, 1.0, 4.0, 2.0],
            [1.0, 2.0, 1.0, 5.0],
        ])
    }

    #[test]
    fn test_determinant_2x2() {
        let m = Matrix2x2d::new([[3.0, 1.0], [2.0, 4.0]]);
        assert_eq!(m.determinant(), 10.0);
        assert_eq!(Matrix2x2d::IDENTITY.determinant(), 1.0);
    }

    #[test]
    fn test_determinant_3x3() {
        // Rows (1 2 3) (0 1 4) (5 6 0), determinant 1.
        let m = Matrix3x3d::new([[1.0, 0.0, 5.0], [2.0, 1.0, 6.0], [3.0, 4.0, 0.0]]);
        assert_relative_eq!(m.determinant(), 1.0);
        assert_eq!(Matrix3x3d::ZERO.determinant(), 0.0);
    }

    #[test]
    fn test_determinant_of_transpose() {
        let m = sample4();
        assert_relative_eq!(m.determinant(), m.transposed().determinant(), epsilon = 1e-9);
    }

    #[test]
    fn test_inverse_2x2() {
        let m = Matrix2x2d::new([[4.0, 2.0], [7.0, 6.0]]);
        let inv = m.inverse().unwrap();
        assert_relative_eq!(inv * m, Matrix2x2d::IDENTITY, epsilon = 1e-12);
        assert_relative_eq!(m * inv, Matrix2x2d::IDENTITY, epsilon = 1e-12);
    }

    #[test]
    fn test_inverse_3x3() {
        let m = Matrix3x3d::new([[1.0, 0.0, 5.0], [2.0, 1.0, 6.0], [3.0, 4.0, 0.0]]);
        let inv = m.inverse().unwrap();
        assert_relative_eq!(inv * m, Matrix3x3d::IDENTITY, epsilon = 1e-12);
    }

    #[test]
    fn test_inverse_4x4() {
        let m = sample4();
        let inv = m.inverse().unwrap();
        assert_relative_eq!(inv * m, Matrix4x4d::IDENTITY, epsilon = 1e-12);
        assert_relative_eq!(m * inv, Matrix4x4d::IDENTITY, epsilon = 1e-12);
    }

    #[test]
    fn test_singular() {
        let singular = Matrix3x3f::new([[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [0.0, 1.0, 1.0]]);
        assert!(matches!(
            singular.inverse(),
            Err(MathError::NotInvertible { .. })
        ));
        assert!(matches!(
            Matrix4x4f::ZERO.inverse(),
            Err(MathError::NotInvertible { determinant }) if determinant == 0.0
        ));
    }

    #[test]
    fn test_invert_in_place() {
        let mut m = sample4();
        let expected = m.inverse().unwrap();
        m.invert().unwrap();
        assert_eq!(m, expected);

        let mut z = Matrix4x4d::ZERO;
        assert!(z.invert().is_err());
        assert_eq!(z, Matrix4x4d::ZERO);
    }

    #[test]
    fn test_double_threshold_is_float_literal() {
        // |det| = 5e-7: below the widened 1e-6 threshold, so rejected even in f64.
        let m = Matrix2x2d::new([[5e-7, 0.0], [0.0, 1.0]]);
        assert!(m.inverse().is_err());
    }

    #[test]
    fn test_minor_of() {
        let m = sample4();
        let minor = Matrix3x3d::minor_of(&m, 0, 0).unwrap();
        assert_eq!(minor.cols[0], [3.0, 0.0, 1.0]);
        assert_eq!(minor.cols[2], [2.0, 1.0, 5.0]);
        assert!(matches!(
            Matrix3x3d::minor_of(&m, 4, 0),
            Err(MathError::IndexOutOfRange {
                axis: Axis::Column,
                ..
            })
        ));
        let minor2 = Matrix2x2d::minor_of(&Matrix3x3d::IDENTITY, 1, 1).unwrap();
        assert_eq!(minor2, Matrix2x2d::IDENTITY);
    }

    #[test]
    fn test_upper_left_roundtrip() {
        let m = sample4();
        let m3 = Matrix3x3d::from_upper_left(&m);
        assert_eq!(m3.cols[1], [1.0, 3.0, 0.0]);
        let back = m3.to_matrix4x4();
        assert_eq!(back.cols[3], [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(back.cols[0], [2.0, 0.0, 1.0, 0.0]);
    }
}
