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

//! Serialization format of matrices, vertices and colors.

#![cfg(feature = "serde")]

use glmath::color::ColorR8;
use glmath::math::{Matrix2x2f, Matrix2x3d, Vertex3f};

#[test]
fn test_matrix_is_flat_column_major() -> anyhow::Result<()> {
    let m = Matrix2x2f::new([[1.0, 2.0], [3.0, 4.0]]);
    let json = serde_json::to_string(&m)?;
    assert_eq!(json, "[1.0,2.0,3.0,4.0]");
    assert_eq!(serde_json::from_str::<Matrix2x2f>(&json)?, m);
    Ok(())
}

#[test]
fn test_matrix_rejects_wrong_length() {
    assert!(serde_json::from_str::<Matrix2x3d>("[1.0,2.0,3.0,4.0,5.0]").is_err());
    assert!(serde_json::from_str::<Matrix2x3d>("[1.0,2.0,3.0,4.0,5.0,6.0,7.0]").is_err());
    assert!(serde_json::from_str::<Matrix2x3d>("[1.0,2.0,3.0,4.0,5.0,6.0]").is_ok());
}

#[test]
fn test_vertex_and_color() -> anyhow::Result<()> {
    let v = Vertex3f::new(0.5, -1.0, 2.0);
    let json = serde_json::to_string(&v)?;
    assert_eq!(json, "[0.5,-1.0,2.0]");
    assert_eq!(serde_json::from_str::<Vertex3f>(&json)?, v);

    assert_eq!(serde_json::to_string(&ColorR8(7))?, "7");
    assert_eq!(serde_json::from_str::<ColorR8>("200")?, ColorR8(200));
    Ok(())
}
