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

//! The component type abstraction shared by vertices and matrices.
//!
//! Only `f32` and `f64` implement [`Scalar`]; they are the two precisions the
//! graphics API accepts for matrix and vertex data.

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use bytemuck::Pod;
use std::fmt::Debug;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// A floating-point component type.
pub trait Scalar:
    Pod
    + Default
    + Debug
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + AbsDiffEq<Epsilon = Self>
    + RelativeEq
    + UlpsEq
{
    /// The additive identity.
    const ZERO: Self;
    /// The multiplicative identity.
    const ONE: Self;
    /// The value `2`.
    const TWO: Self;
    /// The machine epsilon of the type.
    const EPSILON: Self;
    /// Determinants with an absolute value below this are treated as singular.
    const INVERSION_EPSILON: Self;

    /// Absolute value.
    fn abs(self) -> Self;
    /// Square root.
    fn sqrt(self) -> Self;
    /// Simultaneous sine and cosine of an angle in radians.
    fn sin_cos(self) -> (Self, Self);
    /// Tangent of an angle in radians.
    fn tan(self) -> Self;
    /// Converts degrees to radians.
    fn to_radians(self) -> Self;
    /// Converts from `f64`, narrowing if needed.
    fn from_f64(value: f64) -> Self;
    /// Widens to `f64`.
    fn to_f64(self) -> f64;

    /// Multiplies two column-major 4x4 matrices.
    #[inline]
    fn mul_4x4(lhs: &[[Self; 4]; 4], rhs: &[[Self; 4]; 4]) -> [[Self; 4]; 4] {
        mul_4x4_scalar(lhs, rhs)
    }

    /// Transforms a 4-component vector by a column-major 4x4 matrix.
    #[inline]
    fn mul_4x4_vec(lhs: &[[Self; 4]; 4], rhs: &[Self; 4]) -> [Self; 4] {
        mul_4x4_vec_scalar(lhs, rhs)
    }
}

/// The portable 4x4 product used when no vector kernel is available.
#[inline]
pub fn mul_4x4_scalar<T: Scalar>(lhs: &[[T; 4]; 4], rhs: &[[T; 4]; 4]) -> [[T; 4]; 4] {
    let mut out = [[T::ZERO; 4]; 4];
    for (dst, col) in out.iter_mut().zip(rhs.iter()) {
        *dst = mul_4x4_vec_scalar(lhs, col);
    }
    out
}

/// The portable 4x4 matrix-vector product.
#[inline]
pub fn mul_4x4_vec_scalar<T: Scalar>(lhs: &[[T; 4]; 4], rhs: &[T; 4]) -> [T; 4] {
    let mut out = [T::ZERO; 4];
    for (row, dst) in out.iter_mut().enumerate() {
        *dst = lhs[0][row] * rhs[0]
            + lhs[1][row] * rhs[1]
            + lhs[2][row] * rhs[2]
            + lhs[3][row] * rhs[3];
    }
    out
}

impl Scalar for f32 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const TWO: Self = 2.0;
    const EPSILON: Self = f32::EPSILON;
    const INVERSION_EPSILON: Self = 1e-6;

    #[inline]
    fn abs(self) -> Self {
        f32::abs(self)
    }

    #[inline]
    fn sqrt(self) -> Self {
        f32::sqrt(self)
    }

    #[inline]
    fn sin_cos(self) -> (Self, Self) {
        f32::sin_cos(self)
    }

    #[inline]
    fn tan(self) -> Self {
        f32::tan(self)
    }

    #[inline]
    fn to_radians(self) -> Self {
        f32::to_radians(self)
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn mul_4x4(lhs: &[[Self; 4]; 4], rhs: &[[Self; 4]; 4]) -> [[Self; 4]; 4] {
        #[cfg(all(feature = "simd", target_arch = "x86_64"))]
        {
            crate::math::simd::mul_mat4(lhs, rhs)
        }
        #[cfg(not(all(feature = "simd", target_arch = "x86_64")))]
        {
            mul_4x4_scalar(lhs, rhs)
        }
    }

    #[inline]
    fn mul_4x4_vec(lhs: &[[Self; 4]; 4], rhs: &[Self; 4]) -> [Self; 4] {
        #[cfg(all(feature = "simd", target_arch = "x86_64"))]
        {
            crate::math::simd::mul_mat4_vec(lhs, rhs)
        }
        #[cfg(not(all(feature = "simd", target_arch = "x86_64")))]
        {
            mul_4x4_vec_scalar(lhs, rhs)
        }
    }
}

impl Scalar for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const TWO: Self = 2.0;
    const EPSILON: Self = f64::EPSILON;
    // Widened from the single-precision threshold on purpose, see DESIGN.md.
    const INVERSION_EPSILON: Self = 1e-6_f32 as f64;

    #[inline]
    fn abs(self) -> Self {
        f64::abs(self)
    }

    #[inline]
    fn sqrt(self) -> Self {
        f64::sqrt(self)
    }

    #[inline]
    fn sin_cos(self) -> (Self, Self) {
        f64::sin_cos(self)
    }

    #[inline]
    fn tan(self) -> Self {
        f64::tan(self)
    }

    #[inline]
    fn to_radians(self) -> Self {
        f64::to_radians(self)
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        value
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inversion_epsilon_is_widened_float_literal() {
        assert_eq!(<f64 as Scalar>::INVERSION_EPSILON, 1e-6_f32 as f64);
        assert_ne!(<f64 as Scalar>::INVERSION_EPSILON, 1e-6_f64);
    }

    #[test]
    fn test_scalar_kernel_identity() {
        let identity = [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ];
        let m = [
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 10.0, 11.0, 12.0],
            [13.0, 14.0, 15.0, 16.0],
        ];
        assert_eq!(mul_4x4_scalar::<f64>(&identity, &m), m);
        assert_eq!(mul_4x4_scalar::<f64>(&m, &identity), m);
        assert_eq!(
            mul_4x4_vec_scalar::<f64>(&m, &[0.0, 0.0, 0.0, 1.0]),
            [13.0, 14.0, 15.0, 16.0]
        );
    }

    #[test]
    fn test_f32_dispatch_matches_scalar_kernel() {
        let a = [
            [0.5, -1.0, 2.0, 0.0],
            [3.0, 0.25, -2.0, 1.0],
            [1.0, 1.0, 1.0, -1.0],
            [4.0, -3.0, 0.0, 1.0],
        ];
        let b = [
            [1.0, 2.0, 0.0, 0.0],
            [0.0, 1.0, 3.0, 0.0],
            [-1.0, 0.0, 1.0, 2.0],
            [0.0, 0.0, 0.0, 1.0],
        ];
        assert_eq!(f32::mul_4x4(&a, &b), mul_4x4_scalar(&a, &b));
        let v = [1.0, -2.0, 0.5, 1.0];
        assert_eq!(f32::mul_4x4_vec(&a, &v), mul_4x4_vec_scalar(&a, &v));
    }
}
