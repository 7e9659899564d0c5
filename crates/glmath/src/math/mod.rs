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

//! Provides the fixed-size linear algebra types used to prepare graphics API data.
//!
//! Every type here is a plain `Copy` value: matrices and vertices are generic
//! over their component type ([`Scalar`], implemented for `f32` and `f64`)
//! and over their dimensions through const generics.
//!
//! Unlike most of the crate, geometric constructors take angles in
//! **degrees**, matching the conventions of the fixed-function pipeline.

// --- Fundamental Constants ---

/// A small constant for floating-point comparisons in single precision.
pub const EPSILON: f32 = 1e-5;

// --- Declare Sub-Modules ---

#[cfg(feature = "serde")]
mod flat;
pub mod matrix;
pub mod scalar;
#[cfg(all(feature = "simd", target_arch = "x86_64"))]
pub mod simd;
pub mod vertex;

// --- Re-export Principal Types ---

pub use self::matrix::{
    Matrix, Matrix2x2d, Matrix2x2f, Matrix2x3d, Matrix2x3f, Matrix2x4d, Matrix2x4f, Matrix3x2d,
    Matrix3x2f, Matrix3x3d, Matrix3x3f, Matrix3x4d, Matrix3x4f, Matrix4x2d, Matrix4x2f,
    Matrix4x3d, Matrix4x3f, Matrix4x4d, Matrix4x4f, SquareMatrix,
};
pub use self::scalar::Scalar;
pub use self::vertex::{Vertex, Vertex2d, Vertex2f, Vertex3d, Vertex3f, Vertex4d, Vertex4f};

// --- Utility Functions ---

/// Converts an angle from degrees to radians.
///
/// # Examples
///
/// ```
/// use glmath::math::degrees_to_radians;
/// assert!((degrees_to_radians(180.0_f64) - std::f64::consts::PI).abs() < 1e-12);
/// ```
#[inline]
pub fn degrees_to_radians<T: Scalar>(degrees: T) -> T {
    degrees.to_radians()
}

/// Performs an approximate equality comparison using the module's default [`EPSILON`].
///
/// # Examples
///
/// ```
/// use glmath::math::{approx_eq, EPSILON};
/// assert!(approx_eq(1.0, 1.0 + EPSILON / 2.0));
/// assert!(!approx_eq(1.0, 1.0 + EPSILON * 2.0));
/// ```
#[inline]
pub fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}
