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

//! Defines the fixed-dimension `Vertex` type consumed and produced by matrices.

use super::Scalar;
use crate::error::{Axis, MathError, Result};
use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use std::ops::{Add, AddAssign, Div, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

/// A coordinate tuple of `N` components.
///
/// `#[repr(transparent)]` over `[T; N]` guarantees the layout matches a plain
/// array of components, so vertex slices can be uploaded as-is.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct Vertex<T, const N: usize> {
    /// The components, `x` first.
    pub components: [T; N],
}

// SAFETY: transparent wrapper over an array of `Pod` values.
unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vertex<T, N> {}
// SAFETY: transparent wrapper over an array of `Pod` values, no padding.
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vertex<T, N> {}

/// A 2-component single-precision vertex.
pub type Vertex2f = Vertex<f32, 2>;
/// A 3-component single-precision vertex.
pub type Vertex3f = Vertex<f32, 3>;
/// A 4-component single-precision vertex.
pub type Vertex4f = Vertex<f32, 4>;
/// A 2-component double-precision vertex.
pub type Vertex2d = Vertex<f64, 2>;
/// A 3-component double-precision vertex.
pub type Vertex3d = Vertex<f64, 3>;
/// A 4-component double-precision vertex.
pub type Vertex4d = Vertex<f64, 4>;

impl<T: Scalar, const N: usize> Vertex<T, N> {
    /// A vertex with every component set to 0.
    pub const ZERO: Self = Self {
        components: [T::ZERO; N],
    };

    /// Creates a vertex from its component array.
    #[inline]
    pub const fn from_array(components: [T; N]) -> Self {
        Self { components }
    }

    /// Creates a vertex with every component set to `value`.
    #[inline]
    pub fn splat(value: T) -> Self {
        Self {
            components: [value; N],
        }
    }

    /// Reads `N` components from `buffer` starting at `offset`.
    pub fn from_slice(buffer: &[T], offset: usize) -> Result<Self> {
        let available = buffer.len().saturating_sub(offset);
        if available < N {
            return Err(MathError::BufferTooShort {
                required: N,
                available,
            });
        }
        let mut components = [T::ZERO; N];
        components.copy_from_slice(&buffer[offset..offset + N]);
        Ok(Self { components })
    }

    /// Returns the components as an array.
    #[inline]
    pub fn to_array(self) -> [T; N] {
        self.components
    }

    /// Returns the component at `index`, or a range error.
    #[inline]
    pub fn get(&self, index: usize) -> Result<T> {
        self.components
            .get(index)
            .copied()
            .ok_or(MathError::IndexOutOfRange {
                axis: Axis::Component,
                index,
                bound: N,
            })
    }

    /// Computes the dot product of two vertices.
    #[inline]
    pub fn dot(&self, other: Self) -> T {
        let mut sum = T::ZERO;
        for (a, b) in self.components.iter().zip(other.components.iter()) {
            sum += *a * *b;
        }
        sum
    }

    /// Squared Euclidean length. Cheaper than [`Self::module`].
    #[inline]
    pub fn module_squared(&self) -> T {
        self.dot(*self)
    }

    /// Euclidean length.
    #[inline]
    pub fn module(&self) -> T {
        self.module_squared().sqrt()
    }

    /// Returns a unit-length copy of this vertex.
    ///
    /// A zero-length vertex is returned unchanged.
    #[inline]
    pub fn normalized(&self) -> Self {
        let len = self.module();
        if len > T::ZERO {
            *self / len
        } else {
            *self
        }
    }

    /// Normalizes this vertex in place.
    #[inline]
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Compares every component against `other` within `precision`.
    pub fn equals_within(&self, other: &Self, precision: T) -> bool {
        self.components
            .iter()
            .zip(other.components.iter())
            .all(|(a, b)| (*a - *b).abs() <= precision)
    }
}

impl<T: Scalar> Vertex<T, 2> {
    /// Creates a 2-component vertex.
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { components: [x, y] }
    }

    /// The X component.
    #[inline]
    pub fn x(&self) -> T {
        self.components[0]
    }

    /// The Y component.
    #[inline]
    pub fn y(&self) -> T {
        self.components[1]
    }
}

impl<T: Scalar> Vertex<T, 3> {
    /// The unit vector along X.
    pub const UNIT_X: Self = Self::new(T::ONE, T::ZERO, T::ZERO);
    /// The unit vector along Y.
    pub const UNIT_Y: Self = Self::new(T::ZERO, T::ONE, T::ZERO);
    /// The unit vector along Z.
    pub const UNIT_Z: Self = Self::new(T::ZERO, T::ZERO, T::ONE);

    /// Creates a 3-component vertex.
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self {
            components: [x, y, z],
        }
    }

    /// The X component.
    #[inline]
    pub fn x(&self) -> T {
        self.components[0]
    }

    /// The Y component.
    #[inline]
    pub fn y(&self) -> T {
        self.components[1]
    }

    /// The Z component.
    #[inline]
    pub fn z(&self) -> T {
        self.components[2]
    }

    /// Computes the right-handed cross product.
    #[inline]
    pub fn cross(&self, other: Self) -> Self {
        let [ax, ay, az] = self.components;
        let [bx, by, bz] = other.components;
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Appends a `w` component.
    #[inline]
    pub fn extend(&self, w: T) -> Vertex<T, 4> {
        let [x, y, z] = self.components;
        Vertex::<T, 4>::new(x, y, z, w)
    }
}

impl<T: Scalar> Vertex<T, 4> {
    /// The unit vector along X.
    pub const UNIT_X: Self = Self::new(T::ONE, T::ZERO, T::ZERO, T::ZERO);
    /// The unit vector along Y.
    pub const UNIT_Y: Self = Self::new(T::ZERO, T::ONE, T::ZERO, T::ZERO);
    /// The unit vector along Z.
    pub const UNIT_Z: Self = Self::new(T::ZERO, T::ZERO, T::ONE, T::ZERO);
    /// The unit vector along W.
    pub const UNIT_W: Self = Self::new(T::ZERO, T::ZERO, T::ZERO, T::ONE);

    /// Creates a 4-component vertex.
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self {
            components: [x, y, z, w],
        }
    }

    /// The X component.
    #[inline]
    pub fn x(&self) -> T {
        self.components[0]
    }

    /// The Y component.
    #[inline]
    pub fn y(&self) -> T {
        self.components[1]
    }

    /// The Z component.
    #[inline]
    pub fn z(&self) -> T {
        self.components[2]
    }

    /// The W component.
    #[inline]
    pub fn w(&self) -> T {
        self.components[3]
    }

    /// Drops the `w` component.
    #[inline]
    pub fn truncate(&self) -> Vertex<T, 3> {
        let [x, y, z, _] = self.components;
        Vertex::<T, 3>::new(x, y, z)
    }

    /// Projects back to 3D by dividing by `w`.
    #[inline]
    pub fn divide_w(&self) -> Vertex<T, 3> {
        self.truncate() / self.w()
    }
}

// --- Operator Overloads ---

impl<T: Scalar, const N: usize> Default for Vertex<T, N> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<T: Scalar, const N: usize> Add for Vertex<T, N> {
    type Output = Self;
    #[inline]
    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl<T: Scalar, const N: usize> AddAssign for Vertex<T, N> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        for (a, b) in self.components.iter_mut().zip(rhs.components) {
            *a += b;
        }
    }
}

impl<T: Scalar, const N: usize> Sub for Vertex<T, N> {
    type Output = Self;
    #[inline]
    fn sub(mut self, rhs: Self) -> Self::Output {
        self -= rhs;
        self
    }
}

impl<T: Scalar, const N: usize> SubAssign for Vertex<T, N> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        for (a, b) in self.components.iter_mut().zip(rhs.components) {
            *a -= b;
        }
    }
}

impl<T: Scalar, const N: usize> Neg for Vertex<T, N> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            components: self.components.map(|c| -c),
        }
    }
}

impl<T: Scalar, const N: usize> Mul<T> for Vertex<T, N> {
    type Output = Self;
    #[inline]
    fn mul(mut self, rhs: T) -> Self::Output {
        self *= rhs;
        self
    }
}

impl<T: Scalar, const N: usize> MulAssign<T> for Vertex<T, N> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        for c in self.components.iter_mut() {
            *c *= rhs;
        }
    }
}

impl<T: Scalar, const N: usize> Div<T> for Vertex<T, N> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: T) -> Self::Output {
        Self {
            components: self.components.map(|c| c / rhs),
        }
    }
}

impl<T, const N: usize> Index<usize> for Vertex<T, N> {
    type Output = T;
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.components[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vertex<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.components[index]
    }
}

// --- Conversions ---

impl<T, const N: usize> From<[T; N]> for Vertex<T, N> {
    #[inline]
    fn from(components: [T; N]) -> Self {
        Self { components }
    }
}

impl<T, const N: usize> From<Vertex<T, N>> for [T; N] {
    #[inline]
    fn from(v: Vertex<T, N>) -> Self {
        v.components
    }
}

impl<const N: usize> From<Vertex<f32, N>> for Vertex<f64, N> {
    /// Widens every component.
    #[inline]
    fn from(v: Vertex<f32, N>) -> Self {
        Self {
            components: v.components.map(f64::from),
        }
    }
}

impl<const N: usize> From<Vertex<f64, N>> for Vertex<f32, N> {
    /// Narrows every component to single precision.
    #[inline]
    fn from(v: Vertex<f64, N>) -> Self {
        Self {
            components: v.components.map(|c| c as f32),
        }
    }
}

// --- Approximate Equality ---

impl<T: Scalar, const N: usize> AbsDiffEq for Vertex<T, N> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.components
            .iter()
            .zip(other.components.iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T: Scalar, const N: usize> RelativeEq for Vertex<T, N> {
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.components
            .iter()
            .zip(other.components.iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<T: Scalar, const N: usize> UlpsEq for Vertex<T, N> {
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: T, max_ulps: u32) -> bool {
        self.components
            .iter()
            .zip(other.components.iter())
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}

#[cfg(feature = "serde")]
impl<T: Scalar + serde::Serialize, const N: usize> serde::Serialize for Vertex<T, N> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        super::flat::serialize(&self.components, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: Scalar + serde::Deserialize<'de>, const N: usize> serde::Deserialize<'de>
    for Vertex<T, N>
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let mut components = [T::ZERO; N];
        super::flat::deserialize_into(deserializer, &mut components)?;
        Ok(Self { components })
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new_and_accessors() {
        let v = Vertex4f::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.x(), 1.0);
        assert_eq!(v.y(), 2.0);
        assert_eq!(v.z(), 3.0);
        assert_eq!(v.w(), 4.0);
        assert_eq!(v[2], 3.0);
        assert_eq!(v.get(3), Ok(4.0));
    }

    #[test]
    fn test_get_out_of_range() {
        let v = Vertex2d::new(1.0, 2.0);
        assert_eq!(
            v.get(2),
            Err(MathError::IndexOutOfRange {
                axis: Axis::Component,
                index: 2,
                bound: 2
            })
        );
    }

    #[test]
    fn test_from_slice() {
        let data = [9.0f32, 1.0, 2.0, 3.0];
        let v = Vertex3f::from_slice(&data, 1).unwrap();
        assert_eq!(v, Vertex3f::new(1.0, 2.0, 3.0));
        assert_eq!(
            Vertex3f::from_slice(&data, 2),
            Err(MathError::BufferTooShort {
                required: 3,
                available: 2
            })
        );
        assert!(Vertex3f::from_slice(&data, 10).is_err());
    }

    #[test]
    fn test_ops() {
        let a = Vertex3d::new(1.0, 2.0, 3.0);
        let b = Vertex3d::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vertex3d::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vertex3d::splat(3.0));
        assert_eq!(-a, Vertex3d::new(-1.0, -2.0, -3.0));
        assert_eq!(a * 2.0, Vertex3d::new(2.0, 4.0, 6.0));
        assert_eq!(b / 2.0, Vertex3d::new(2.0, 2.5, 3.0));
        assert_eq!(a.dot(b), 32.0);
    }

    #[test]
    fn test_cross_is_right_handed() {
        assert_eq!(Vertex3f::UNIT_X.cross(Vertex3f::UNIT_Y), Vertex3f::UNIT_Z);
        assert_eq!(Vertex3f::UNIT_Y.cross(Vertex3f::UNIT_Z), Vertex3f::UNIT_X);
    }

    #[test]
    fn test_normalize() {
        let mut v = Vertex3f::new(3.0, 0.0, 4.0);
        assert_relative_eq!(v.module(), 5.0);
        v.normalize();
        assert_relative_eq!(v, Vertex3f::new(0.6, 0.0, 0.8));
        assert_eq!(Vertex3f::ZERO.normalized(), Vertex3f::ZERO);
    }

    #[test]
    fn test_extend_truncate_divide_w() {
        let v = Vertex3d::new(1.0, 2.0, 3.0);
        let h = v.extend(2.0);
        assert_eq!(h, Vertex4d::new(1.0, 2.0, 3.0, 2.0));
        assert_eq!(h.truncate(), v);
        assert_eq!(h.divide_w(), Vertex3d::new(0.5, 1.0, 1.5));
    }

    #[test]
    fn test_precision_conversion() {
        let d = Vertex3d::new(0.1, 0.2, 0.3);
        let f: Vertex3f = d.into();
        let back: Vertex3d = f.into();
        assert!(back.equals_within(&d, 1e-7));
        assert_ne!(back, d);
    }

    #[test]
    fn test_pod_cast() {
        let verts = [Vertex2f::new(1.0, 2.0), Vertex2f::new(3.0, 4.0)];
        let flat: &[f32] = bytemuck::cast_slice(&verts);
        assert_eq!(flat, &[1.0, 2.0, 3.0, 4.0]);
    }
}
