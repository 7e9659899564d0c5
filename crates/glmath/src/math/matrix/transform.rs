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

//! Geometric constructors for 4x4 matrices: model transforms, projections
//! and view matrices.
//!
//! Conventions follow the fixed-function OpenGL pipeline: right-handed eye
//! space looking down `-Z`, clip-space depth in `[-1, 1]`, and every angle
//! given in **degrees**.

use super::Matrix;
use crate::error::{MathError, Result};
use crate::math::{Scalar, Vertex};

/// Fails when two opposing clip planes coincide.
///
/// The tolerance is relative: planes closer than one machine epsilon of the
/// larger magnitude are coincident, so tiny but distinct extents pass.
#[inline]
fn check_planes<T: Scalar>(a: T, b: T, reason: &'static str) -> Result<()> {
    let (a_abs, b_abs) = (a.abs(), b.abs());
    let magnitude = if a_abs > b_abs { a_abs } else { b_abs };
    if (b - a).abs() <= T::EPSILON * magnitude {
        log::warn!("Rejected projection: {reason}");
        return Err(MathError::DegenerateProjection { reason });
    }
    Ok(())
}

#[inline]
fn check_fov<T: Scalar>(degrees: T, max: T) -> Result<()> {
    // `!(x > 0)` also rejects NaN.
    if !(degrees > T::ZERO && degrees < max) {
        log::warn!("Rejected projection: field of view {degrees:?} degrees");
        return Err(MathError::InvalidFieldOfView {
            degrees: degrees.to_f64(),
        });
    }
    Ok(())
}

/// The unit world axis with the smallest component along `v`, `X` first on ties.
#[inline]
fn least_aligned_axis<T: Scalar>(v: Vertex<T, 3>) -> Vertex<T, 3> {
    let [x, y, z] = v.components.map(|c| c.abs());
    if x <= y && x <= z {
        Vertex::<T, 3>::UNIT_X
    } else if y <= z {
        Vertex::<T, 3>::UNIT_Y
    } else {
        Vertex::<T, 3>::UNIT_Z
    }
}

impl<T: Scalar> Matrix<T, 4, 4> {
    // --- Model transforms ---

    /// Creates a translation matrix.
    #[inline]
    pub fn translated(x: T, y: T, z: T) -> Self {
        let mut m = Self::IDENTITY;
        m.cols[3] = [x, y, z, T::ONE];
        m
    }

    /// Creates a non-uniform scaling matrix.
    #[inline]
    pub fn scaled(x: T, y: T, z: T) -> Self {
        let (o, l) = (T::ZERO, T::ONE);
        Self::new([[x, o, o, o], [o, y, o, o], [o, o, z, o], [o, o, o, l]])
    }

    /// Creates a matrix for a rotation around the X-axis.
    ///
    /// # Arguments
    ///
    /// * `degrees`: The angle of rotation in degrees.
    #[inline]
    pub fn rotated_x(degrees: T) -> Self {
        let (s, c) = degrees.to_radians().sin_cos();
        let (o, l) = (T::ZERO, T::ONE);
        Self::new([[l, o, o, o], [o, c, s, o], [o, -s, c, o], [o, o, o, l]])
    }

    /// Creates a matrix for a right-handed rotation around the Y-axis.
    ///
    /// # Arguments
    ///
    /// * `degrees`: The angle of rotation in degrees.
    #[inline]
    pub fn rotated_y(degrees: T) -> Self {
        let (s, c) = degrees.to_radians().sin_cos();
        let (o, l) = (T::ZERO, T::ONE);
        Self::new([[c, o, -s, o], [o, l, o, o], [s, o, c, o], [o, o, o, l]])
    }

    /// Creates a matrix for a rotation around the Z-axis.
    ///
    /// # Arguments
    ///
    /// * `degrees`: The angle of rotation in degrees.
    #[inline]
    pub fn rotated_z(degrees: T) -> Self {
        let (s, c) = degrees.to_radians().sin_cos();
        let (o, l) = (T::ZERO, T::ONE);
        Self::new([[c, s, o, o], [-s, c, o, o], [o, o, l, o], [o, o, o, l]])
    }

    /// Creates a rotation around an arbitrary axis.
    ///
    /// The axis is normalized first, so only its direction matters. A zero
    /// axis yields the identity.
    pub fn rotated(degrees: T, axis: Vertex<T, 3>) -> Self {
        if axis.module_squared() == T::ZERO {
            return Self::IDENTITY;
        }
        let [x, y, z] = axis.normalized().components;
        let (s, c) = degrees.to_radians().sin_cos();
        let t = T::ONE - c;
        let o = T::ZERO;
        Self::new([
            [t * x * x + c, t * x * y + s * z, t * x * z - s * y, o],
            [t * y * x - s * z, t * y * y + c, t * y * z + s * x, o],
            [t * z * x + s * y, t * z * y - s * x, t * z * z + c, o],
            [o, o, o, T::ONE],
        ])
    }

    // --- Projections ---

    /// Creates an orthographic projection matrix.
    ///
    /// Fails with [`MathError::DegenerateProjection`] when any pair of
    /// opposing planes coincides, that is when their distance is within
    /// [`Scalar::EPSILON`] relative to the larger plane magnitude.
    pub fn ortho(left: T, right: T, bottom: T, top: T, near: T, far: T) -> Result<Self> {
        check_planes(left, right, "left and right planes coincide")?;
        check_planes(bottom, top, "bottom and top planes coincide")?;
        check_planes(near, far, "near and far planes coincide")?;

        let rml = right - left;
        let tmb = top - bottom;
        let fmn = far - near;
        let o = T::ZERO;
        Ok(Self::new([
            [T::TWO / rml, o, o, o],
            [o, T::TWO / tmb, o, o],
            [o, o, -T::TWO / fmn, o],
            [
                -(right + left) / rml,
                -(top + bottom) / tmb,
                -(far + near) / fmn,
                T::ONE,
            ],
        ]))
    }

    /// Creates a 2D orthographic projection, with near and far at -1 and 1.
    #[inline]
    pub fn ortho_2d(left: T, right: T, bottom: T, top: T) -> Result<Self> {
        Self::ortho(left, right, bottom, top, -T::ONE, T::ONE)
    }

    /// Creates an asymmetric perspective projection from the near-plane extents.
    ///
    /// Fails when `near` or `far` is not positive, or when any pair of
    /// opposing planes coincides (same relative tolerance as [`Self::ortho`]).
    pub fn frustrum(left: T, right: T, bottom: T, top: T, near: T, far: T) -> Result<Self> {
        if !(near > T::ZERO) {
            log::warn!("Rejected projection: near plane {near:?}");
            return Err(MathError::DegenerateProjection {
                reason: "near plane must be positive",
            });
        }
        if !(far > T::ZERO) {
            log::warn!("Rejected projection: far plane {far:?}");
            return Err(MathError::DegenerateProjection {
                reason: "far plane must be positive",
            });
        }
        check_planes(left, right, "left and right planes coincide")?;
        check_planes(bottom, top, "bottom and top planes coincide")?;
        check_planes(near, far, "near and far planes coincide")?;

        let rml = right - left;
        let tmb = top - bottom;
        let fmn = far - near;
        let n2 = T::TWO * near;
        let o = T::ZERO;
        Ok(Self::new([
            [n2 / rml, o, o, o],
            [o, n2 / tmb, o, o],
            [
                (right + left) / rml,
                (top + bottom) / tmb,
                -(far + near) / fmn,
                -T::ONE,
            ],
            [o, o, -(n2 * far) / fmn, o],
        ]))
    }

    /// Creates a symmetric perspective projection.
    ///
    /// # Arguments
    ///
    /// * `fovy`: Vertical field of view, in the open range `(0, 180)` degrees.
    /// * `aspect_ratio`: Width divided by height of the viewport.
    /// * `near`, `far`: Clip plane distances, both positive and distinct.
    pub fn perspective(fovy: T, aspect_ratio: T, near: T, far: T) -> Result<Self> {
        check_fov(fovy, T::from_f64(180.0))?;
        if !(aspect_ratio > T::ZERO) {
            log::warn!("Rejected projection: aspect ratio {aspect_ratio:?}");
            return Err(MathError::DegenerateProjection {
                reason: "aspect ratio must be positive",
            });
        }
        let top = near * (fovy / T::TWO).to_radians().tan();
        let right = top * aspect_ratio;
        Self::frustrum(-right, right, -top, top, near, far)
    }

    /// Creates a perspective projection from four edge angles.
    ///
    /// Each angle is measured from the view axis to the matching frustum
    /// edge and must lie in `[0, 90)` degrees; each opposing pair must open a
    /// non-empty field of view.
    pub fn perspective_edges(
        left: T,
        right: T,
        bottom: T,
        top: T,
        near: T,
        far: T,
    ) -> Result<Self> {
        let quarter = T::from_f64(90.0);
        for angle in [left, right, bottom, top] {
            if !(angle >= T::ZERO && angle < quarter) {
                log::warn!("Rejected projection: edge angle {angle:?} degrees");
                return Err(MathError::InvalidFieldOfView {
                    degrees: angle.to_f64(),
                });
            }
        }
        let half_turn = T::from_f64(180.0);
        check_fov(left + right, half_turn)?;
        check_fov(bottom + top, half_turn)?;

        let extent = |angle: T| near * angle.to_radians().tan();
        Self::frustrum(
            -extent(left),
            extent(right),
            -extent(bottom),
            extent(top),
            near,
            far,
        )
    }

    // --- View ---

    /// Creates a right-handed view matrix for a camera at `eye` looking at `target`.
    ///
    /// See [`Self::look_at_direction`].
    #[inline]
    pub fn look_at(eye: Vertex<T, 3>, target: Vertex<T, 3>, up: Vertex<T, 3>) -> Result<Self> {
        Self::look_at_direction(eye, target - eye, up)
    }

    /// Creates a right-handed view matrix for a camera at `eye` looking along `forward`.
    ///
    /// `up` is only a hint: the returned basis is re-orthogonalized with cross
    /// products. When `forward` and `up` are collinear the right vector falls
    /// back to the world axis least aligned with `forward`, made orthogonal to
    /// it: `+X` when looking along `Y`.
    ///
    /// Fails with [`MathError::DegenerateView`] when `forward` has zero length.
    pub fn look_at_direction(
        eye: Vertex<T, 3>,
        forward: Vertex<T, 3>,
        up: Vertex<T, 3>,
    ) -> Result<Self> {
        if forward.module_squared() == T::ZERO {
            return Err(MathError::DegenerateView);
        }
        let f = forward.normalized();
        let mut s = f.cross(up);
        if s.module() <= T::EPSILON {
            let axis = least_aligned_axis(f);
            log::debug!("View direction is collinear with up, deriving right vector from {axis:?}");
            s = (axis - f * f.dot(axis)).normalized();
        } else {
            s.normalize();
        }
        let u = s.cross(f);

        Ok(Self::new([
            [s.x(), u.x(), -f.x(), T::ZERO],
            [s.y(), u.y(), -f.y(), T::ZERO],
            [s.z(), u.z(), -f.z(), T::ZERO],
            [-eye.dot(s), -eye.dot(u), eye.dot(f), T::ONE],
        ]))
    }

    // --- Basis accessors ---

    /// The translation part (first three rows of the last column).
    #[inline]
    pub fn position(&self) -> Vertex<T, 3> {
        let [x, y, z, _] = self.cols[3];
        Vertex::<T, 3>::new(x, y, z)
    }

    /// The view-space right direction (first row).
    #[inline]
    pub fn right_vector(&self) -> Vertex<T, 3> {
        self.row(0).truncate()
    }

    /// The view-space up direction (second row).
    #[inline]
    pub fn up_vector(&self) -> Vertex<T, 3> {
        self.row(1).truncate()
    }

    /// The view-space forward direction (third row, negated).
    #[inline]
    pub fn forward_vector(&self) -> Vertex<T, 3> {
        -self.row(2).truncate()
    }

    // --- In-place transforms ---

    /// Post-multiplies by a translation.
    #[inline]
    pub fn translate(&mut self, x: T, y: T, z: T) {
        *self *= Self::translated(x, y, z);
    }

    /// Post-multiplies by a scale.
    #[inline]
    pub fn scale(&mut self, x: T, y: T, z: T) {
        *self *= Self::scaled(x, y, z);
    }

    /// Post-multiplies by a rotation around X.
    #[inline]
    pub fn rotate_x(&mut self, degrees: T) {
        *self *= Self::rotated_x(degrees);
    }

    /// Post-multiplies by a rotation around Y.
    #[inline]
    pub fn rotate_y(&mut self, degrees: T) {
        *self *= Self::rotated_y(degrees);
    }

    /// Post-multiplies by a rotation around Z.
    #[inline]
    pub fn rotate_z(&mut self, degrees: T) {
        *self *= Self::rotated_z(degrees);
    }
}

// --- Tests ---
