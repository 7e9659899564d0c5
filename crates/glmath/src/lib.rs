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

//! # glmath
//!
//! Fixed-size matrices, vertices and single-channel colors laid out exactly as
//! OpenGL-style graphics APIs expect them: column-major, contiguous and
//! castable to raw byte slices.
//!
//! Projection and view constructors follow the fixed-function conventions:
//! right-handed eye space, clip depth in `[-1, 1]`, angles in degrees.

#![warn(missing_docs)]

pub mod color;
pub mod error;
pub mod math;

pub use color::{Color, ColorR16, ColorR32, ColorR8, ColorRD, ColorRF, ColorRHF, PixelType};
pub use error::{MathError, Result};
pub use math::{
    Matrix, Matrix2x2d, Matrix2x2f, Matrix2x3d, Matrix2x3f, Matrix2x4d, Matrix2x4f, Matrix3x2d,
    Matrix3x2f, Matrix3x3d, Matrix3x3f, Matrix3x4d, Matrix3x4f, Matrix4x2d, Matrix4x2f,
    Matrix4x3d, Matrix4x3f, Matrix4x4d, Matrix4x4f, Scalar, SquareMatrix, Vertex, Vertex2d,
    Vertex2f, Vertex3d, Vertex3f, Vertex4d, Vertex4f,
};
