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

//! Defines the `Matrix` type family and its shape-independent operations.
//!
//! A single generic type covers every shape from 2x2 to 4x4 in both
//! precisions. Shape-specific operations live in submodules:
//! [`square`] for determinants and inverses, [`transform`] for the 4x4
//! geometric constructors.

mod square;
mod transform;

pub use self::square::SquareMatrix;

use super::{Scalar, Vertex};
use crate::error::{Axis, MathError, Result};
use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use std::ops::{Add, Index, IndexMut, Mul, MulAssign, Neg, Sub};

/// A column-major matrix with `C` columns and `R` rows.
///
/// The memory layout is the flat interchange format graphics APIs expect:
/// all rows of column 0, then all rows of column 1, and so on.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct Matrix<T, const C: usize, const R: usize> {
    /// The columns of the matrix. `cols[0]` is the first column, and so on.
    pub cols: [[T; R]; C],
}

// SAFETY: transparent wrapper over nested arrays of `Pod` values.
unsafe impl<T: bytemuck::Zeroable, const C: usize, const R: usize> bytemuck::Zeroable
    for Matrix<T, C, R>
{
}
// SAFETY: transparent wrapper over nested arrays of `Pod` values, no padding.
unsafe impl<T: bytemuck::Pod, const C: usize, const R: usize> bytemuck::Pod for Matrix<T, C, R> {}

/// 2 columns, 2 rows, single precision.
pub type Matrix2x2f = Matrix<f32, 2, 2>;
/// 2 columns, 3 rows, single precision.
pub type Matrix2x3f = Matrix<f32, 2, 3>;
/// 2 columns, 4 rows, single precision.
pub type Matrix2x4f = Matrix<f32, 2, 4>;
/// 3 columns, 2 rows, single precision.
pub type Matrix3x2f = Matrix<f32, 3, 2>;
/// 3 columns, 3 rows, single precision.
pub type Matrix3x3f = Matrix<f32, 3, 3>;
/// 3 columns, 4 rows, single precision.
pub type Matrix3x4f = Matrix<f32, 3, 4>;
/// 4 columns, 2 rows, single precision.
pub type Matrix4x2f = Matrix<f32, 4, 2>;
/// 4 columns, 3 rows, single precision.
pub type Matrix4x3f = Matrix<f32, 4, 3>;
/// 4 columns, 4 rows, single precision.
pub type Matrix4x4f = Matrix<f32, 4, 4>;
/// 2 columns, 2 rows, double precision.
pub type Matrix2x2d = Matrix<f64, 2, 2>;
/// 2 columns, 3 rows, double precision.
pub type Matrix2x3d = Matrix<f64, 2, 3>;
/// 2 columns, 4 rows, double precision.
pub type Matrix2x4d = Matrix<f64, 2, 4>;
/// 3 columns, 2 rows, double precision.
pub type Matrix3x2d = Matrix<f64, 3, 2>;
/// 3 columns, 3 rows, double precision.
pub type Matrix3x3d = Matrix<f64, 3, 3>;
/// 3 columns, 4 rows, double precision.
pub type Matrix3x4d = Matrix<f64, 3, 4>;
/// 4 columns, 2 rows, double precision.
pub type Matrix4x2d = Matrix<f64, 4, 2>;
/// 4 columns, 3 rows, double precision.
pub type Matrix4x3d = Matrix<f64, 4, 3>;
/// 4 columns, 4 rows, double precision.
pub type Matrix4x4d = Matrix<f64, 4, 4>;

impl<T: Scalar, const C: usize, const R: usize> Matrix<T, C, R> {
    /// The number of columns.
    pub const COLUMNS: usize = C;
    /// The number of rows.
    pub const ROWS: usize = R;

    /// A matrix with all elements set to 0.
    pub const ZERO: Self = Self {
        cols: [[T::ZERO; R]; C],
    };

    /// Creates a matrix from its columns.
    #[inline]
    pub const fn new(cols: [[T; R]; C]) -> Self {
        Self { cols }
    }

    /// Creates a matrix by evaluating `f(column, row)` for every element.
    #[inline]
    pub fn from_fn<F: FnMut(usize, usize) -> T>(mut f: F) -> Self {
        let mut cols = [[T::ZERO; R]; C];
        for (c, col) in cols.iter_mut().enumerate() {
            for (r, value) in col.iter_mut().enumerate() {
                *value = f(c, r);
            }
        }
        Self { cols }
    }

    /// Creates a matrix from a column-major component list.
    ///
    /// Fails with [`MathError::BufferTooShort`] when fewer than `C * R`
    /// components are given. Extra components are ignored.
    #[inline]
    pub fn from_columns(components: &[T]) -> Result<Self> {
        Self::from_slice(components, 0)
    }

    /// Reads `C * R` column-major components from `buffer`, starting at `offset`.
    pub fn from_slice(buffer: &[T], offset: usize) -> Result<Self> {
        let required = C * R;
        let available = buffer.len().saturating_sub(offset);
        if available < required {
            return Err(MathError::BufferTooShort {
                required,
                available,
            });
        }
        let mut m = Self::ZERO;
        m.as_mut_slice()
            .copy_from_slice(&buffer[offset..offset + required]);
        Ok(m)
    }

    /// Returns the element at `column`, `row`.
    #[inline]
    pub fn get(&self, column: usize, row: usize) -> Result<T> {
        check_index(column, row, C, R)?;
        Ok(self.cols[column][row])
    }

    /// Replaces the element at `column`, `row`.
    #[inline]
    pub fn set(&mut self, column: usize, row: usize, value: T) -> Result<()> {
        check_index(column, row, C, R)?;
        self.cols[column][row] = value;
        Ok(())
    }

    /// Returns a column as a vertex.
    ///
    /// # Panics
    ///
    /// Panics if `column >= C`.
    #[inline]
    pub fn column(&self, column: usize) -> Vertex<T, R> {
        Vertex::from_array(self.cols[column])
    }

    /// Returns a row as a vertex.
    ///
    /// # Panics
    ///
    /// Panics if `row >= R`.
    #[inline]
    pub fn row(&self, row: usize) -> Vertex<T, C> {
        Vertex::from_array(self.cols.map(|col| col[row]))
    }

    /// The elements as a flat column-major slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        bytemuck::cast_slice(&self.cols)
    }

    /// The elements as a mutable flat column-major slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        bytemuck::cast_slice_mut(&mut self.cols)
    }

    /// Copies the elements into a flat column-major vector.
    #[inline]
    pub fn to_vec(&self) -> Vec<T> {
        self.as_slice().to_vec()
    }

    /// Returns the matrix mirrored across its main diagonal.
    ///
    /// For a non-square matrix the result has the complementary shape.
    #[inline]
    pub fn transposed(&self) -> Matrix<T, R, C> {
        Matrix::from_fn(|c, r| self.cols[r][c])
    }

    /// Compares every element against `other` within `precision`.
    pub fn equals_within(&self, other: &Self, precision: T) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(a, b)| (*a - *b).abs() <= precision)
    }

    #[inline]
    fn map<F: Fn(T) -> T>(mut self, f: F) -> Self {
        for value in self.as_mut_slice() {
            *value = f(*value);
        }
        self
    }

    #[inline]
    fn zip_map<F: Fn(T, T) -> T>(mut self, other: Self, f: F) -> Self {
        for (a, b) in self.as_mut_slice().iter_mut().zip(other.as_slice()) {
            *a = f(*a, *b);
        }
        self
    }
}

#[inline]
fn check_index(column: usize, row: usize, columns: usize, rows: usize) -> Result<()> {
    if column >= columns {
        return Err(MathError::IndexOutOfRange {
            axis: Axis::Column,
            index: column,
            bound: columns,
        });
    }
    if row >= rows {
        return Err(MathError::IndexOutOfRange {
            axis: Axis::Row,
            index: row,
            bound: rows,
        });
    }
    Ok(())
}

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    /// The identity matrix.
    pub const IDENTITY: Self = Self {
        cols: identity_cols(T::ZERO, T::ONE),
    };

    /// Returns the identity matrix.
    #[inline]
    pub fn identity() -> Self {
        Self::IDENTITY
    }

    /// Mirrors the matrix across its main diagonal in place.
    pub fn transpose(&mut self) {
        for c in 0..N {
            for r in (c + 1)..N {
                let tmp = self.cols[c][r];
                self.cols[c][r] = self.cols[r][c];
                self.cols[r][c] = tmp;
            }
        }
    }
}

const fn identity_cols<T: Copy, const N: usize>(zero: T, one: T) -> [[T; N]; N] {
    let mut cols = [[zero; N]; N];
    let mut i = 0;
    while i < N {
        cols[i][i] = one;
        i += 1;
    }
    cols
}

/// Views a matrix as 4x4 when its shape is exactly 4x4.
#[inline]
fn as_4x4<T: Scalar, const C: usize, const R: usize>(cols: &[[T; R]; C]) -> Option<&[[T; 4]; 4]> {
    if C == 4 && R == 4 {
        bytemuck::try_cast_ref(cols).ok()
    } else {
        None
    }
}

// --- Operator Overloads ---

impl<T: Scalar, const C: usize, const R: usize> Default for Matrix<T, C, R> {
    /// Returns the zero matrix. Square shapes also provide [`Matrix::IDENTITY`].
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<T: Scalar, const K: usize, const R: usize, const C2: usize> Mul<Matrix<T, C2, K>>
    for Matrix<T, K, R>
{
    type Output = Matrix<T, C2, R>;

    /// Multiplies this matrix by another. Note that matrix multiplication is not commutative.
    #[inline]
    fn mul(self, rhs: Matrix<T, C2, K>) -> Self::Output {
        if let (Some(a), Some(b)) = (as_4x4(&self.cols), as_4x4(&rhs.cols)) {
            if let Ok(cols) = bytemuck::try_cast(T::mul_4x4(a, b)) {
                return Matrix { cols };
            }
        }
        Matrix::from_fn(|c, r| {
            let mut sum = T::ZERO;
            for k in 0..K {
                sum += self.cols[k][r] * rhs.cols[c][k];
            }
            sum
        })
    }
}

impl<T: Scalar, const N: usize> MulAssign<Matrix<T, N, N>> for Matrix<T, N, N> {
    #[inline]
    fn mul_assign(&mut self, rhs: Matrix<T, N, N>) {
        *self = *self * rhs;
    }
}

impl<T: Scalar, const C: usize, const R: usize> Mul<Vertex<T, C>> for Matrix<T, C, R> {
    type Output = Vertex<T, R>;

    /// Transforms a vertex by this matrix.
    #[inline]
    fn mul(self, rhs: Vertex<T, C>) -> Self::Output {
        if let Some(a) = as_4x4(&self.cols) {
            if let Ok(v) = bytemuck::try_cast_ref::<[T; C], [T; 4]>(&rhs.components) {
                if let Ok(components) = bytemuck::try_cast(T::mul_4x4_vec(a, v)) {
                    return Vertex::from_array(components);
                }
            }
        }
        let mut out = Vertex::<T, R>::ZERO;
        for (c, col) in self.cols.iter().enumerate() {
            for (dst, value) in out.components.iter_mut().zip(col.iter()) {
                *dst += *value * rhs.components[c];
            }
        }
        out
    }
}

impl<T: Scalar, const C: usize, const R: usize> Mul<T> for Matrix<T, C, R> {
    type Output = Self;

    /// Scales every element.
    #[inline]
    fn mul(self, rhs: T) -> Self::Output {
        self.map(|v| v * rhs)
    }
}

impl<T: Scalar, const C: usize, const R: usize> MulAssign<T> for Matrix<T, C, R> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T: Scalar, const C: usize, const R: usize> Add for Matrix<T, C, R> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.zip_map(rhs, |a, b| a + b)
    }
}

impl<T: Scalar, const C: usize, const R: usize> Sub for Matrix<T, C, R> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.zip_map(rhs, |a, b| a - b)
    }
}

impl<T: Scalar, const C: usize, const R: usize> Neg for Matrix<T, C, R> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        self.map(|v| -v)
    }
}

impl<T, const C: usize, const R: usize> Index<usize> for Matrix<T, C, R> {
    type Output = [T; R];
    /// Allows accessing a matrix column by index.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.cols[index]
    }
}

impl<T, const C: usize, const R: usize> IndexMut<usize> for Matrix<T, C, R> {
    /// Allows mutably accessing a matrix column by index.
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.cols[index]
    }
}

// --- Conversions ---

impl<T, const C: usize, const R: usize> From<[[T; R]; C]> for Matrix<T, C, R> {
    #[inline]
    fn from(cols: [[T; R]; C]) -> Self {
        Self { cols }
    }
}

impl<T: Scalar, const C: usize, const R: usize> From<Matrix<T, C, R>> for Vec<T> {
    /// Flattens in column-major order.
    #[inline]
    fn from(m: Matrix<T, C, R>) -> Self {
        m.to_vec()
    }
}

impl<const C: usize, const R: usize> From<Matrix<f32, C, R>> for Matrix<f64, C, R> {
    /// Widens every element.
    #[inline]
    fn from(m: Matrix<f32, C, R>) -> Self {
        Self {
            cols: m.cols.map(|col| col.map(f64::from)),
        }
    }
}

impl<const C: usize, const R: usize> From<Matrix<f64, C, R>> for Matrix<f32, C, R> {
    /// Narrows every element to single precision.
    #[inline]
    fn from(m: Matrix<f64, C, R>) -> Self {
        Self {
            cols: m.cols.map(|col| col.map(|v| v as f32)),
        }
    }
}

// --- Approximate Equality ---

impl<T: Scalar, const C: usize, const R: usize> AbsDiffEq for Matrix<T, C, R> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T: Scalar, const C: usize, const R: usize> RelativeEq for Matrix<T, C, R> {
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<T: Scalar, const C: usize, const R: usize> UlpsEq for Matrix<T, C, R> {
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: T, max_ulps: u32) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}

#[cfg(feature = "serde")]
impl<T, const C: usize, const R: usize> serde::Serialize for Matrix<T, C, R>
where
    T: Scalar + serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        super::flat::serialize(self.as_slice(), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T, const C: usize, const R: usize> serde::Deserialize<'de> for Matrix<T, C, R>
where
    T: Scalar + serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let mut m = Self::ZERO;
        super::flat::deserialize_into(deserializer, m.as_mut_slice())?;
        Ok(m)
    }
}

// --- Tests ---
