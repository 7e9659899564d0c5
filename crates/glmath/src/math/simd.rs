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

//! SSE kernels for single-precision 4x4 products.
//!
//! Each matrix column is one XMM register. A product column is the sum of
//! the left-hand columns scaled by the broadcast components of the
//! right-hand column, accumulated in the same order as the scalar kernel so
//! both paths return identical bits.

use std::arch::x86_64::*;

#[inline(always)]
fn load_columns(m: &[[f32; 4]; 4]) -> [__m128; 4] {
    // SAFETY: each column is four contiguous f32 values; unaligned loads are used.
    unsafe {
        [
            _mm_loadu_ps(m[0].as_ptr()),
            _mm_loadu_ps(m[1].as_ptr()),
            _mm_loadu_ps(m[2].as_ptr()),
            _mm_loadu_ps(m[3].as_ptr()),
        ]
    }
}

#[inline(always)]
fn combine(cols: &[__m128; 4], v: &[f32; 4]) -> __m128 {
    // SAFETY: SSE is part of the x86_64 baseline.
    unsafe {
        let mut acc = _mm_mul_ps(cols[0], _mm_set1_ps(v[0]));
        acc = _mm_add_ps(acc, _mm_mul_ps(cols[1], _mm_set1_ps(v[1])));
        acc = _mm_add_ps(acc, _mm_mul_ps(cols[2], _mm_set1_ps(v[2])));
        _mm_add_ps(acc, _mm_mul_ps(cols[3], _mm_set1_ps(v[3])))
    }
}

/// Multiplies two column-major 4x4 matrices.
#[inline]
pub fn mul_mat4(lhs: &[[f32; 4]; 4], rhs: &[[f32; 4]; 4]) -> [[f32; 4]; 4] {
    let cols = load_columns(lhs);
    let mut out = [[0.0f32; 4]; 4];
    for (dst, col) in out.iter_mut().zip(rhs.iter()) {
        let acc = combine(&cols, col);
        // SAFETY: `dst` holds exactly four f32 values.
        unsafe { _mm_storeu_ps(dst.as_mut_ptr(), acc) };
    }
    out
}

/// Transforms a 4-component vector by a column-major 4x4 matrix.
#[inline]
pub fn mul_mat4_vec(lhs: &[[f32; 4]; 4], rhs: &[f32; 4]) -> [f32; 4] {
    let cols = load_columns(lhs);
    let mut out = [0.0f32; 4];
    let acc = combine(&cols, rhs);
    // SAFETY: `out` holds exactly four f32 values.
    unsafe { _mm_storeu_ps(out.as_mut_ptr(), acc) };
    out
}
