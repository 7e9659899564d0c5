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

//! Defines the error type shared by every fallible operation of the crate.

use thiserror::Error;

/// The axis an out-of-range index was checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// A matrix column index.
    Column,
    /// A matrix row index.
    Row,
    /// A vertex component index.
    Component,
    /// A color channel index.
    Channel,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Axis::Column => "column",
            Axis::Row => "row",
            Axis::Component => "component",
            Axis::Channel => "channel",
        };
        f.write_str(name)
    }
}

/// An error raised by a matrix, vertex or color operation.
///
/// Every error is produced before any partial result exists: a failed
/// operation leaves its receiver untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MathError {
    /// An index exceeded the declared size of the value along `axis`.
    #[error("{axis} index {index} is out of range (size is {bound})")]
    IndexOutOfRange {
        /// Which dimension was indexed.
        axis: Axis,
        /// The rejected index.
        index: usize,
        /// The number of valid indices along that dimension.
        bound: usize,
    },

    /// A backing buffer does not hold enough components from the requested offset.
    #[error("buffer too short: {required} components required, {available} available")]
    BufferTooShort {
        /// Components needed to build the value.
        required: usize,
        /// Components left in the buffer after the offset.
        available: usize,
    },

    /// The matrix determinant is too close to zero for an inverse to exist.
    #[error("matrix is not invertible (determinant {determinant})")]
    NotInvertible {
        /// The determinant that failed the threshold, widened to `f64`.
        determinant: f64,
    },

    /// A projection was requested with coincident or invalid clip planes.
    #[error("degenerate projection: {reason}")]
    DegenerateProjection {
        /// Which parameter pair was rejected.
        reason: &'static str,
    },

    /// A field of view angle lies outside its valid range.
    #[error("field of view of {degrees} degrees is out of range")]
    InvalidFieldOfView {
        /// The rejected angle, in degrees.
        degrees: f64,
    },

    /// A view matrix was requested with a zero-length forward direction.
    #[error("view direction has zero length")]
    DegenerateView,

    /// A normalized channel value was outside `[0, 1]`.
    #[error("normalized value {value} is outside [0, 1]")]
    NormalizedOutOfRange {
        /// The rejected value.
        value: f32,
    },
}

/// A specialized `Result` for this crate's operations.
pub type Result<T> = std::result::Result<T, MathError>;
