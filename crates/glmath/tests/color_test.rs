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

//! Integration tests for the single-channel color types.

use glmath::color::{Color, ColorR16, ColorR32, ColorR8, ColorRD, ColorRF, ColorRHF, PixelType};
use glmath::error::MathError;

/// Writes `value` through the trait and reads it back.
fn store<C: Color + Default>(value: f32) -> glmath::Result<f32> {
    let mut color = C::default();
    color.set(0, value)?;
    color.get(0)
}

#[test]
fn test_r8_scenario() -> anyhow::Result<()> {
    let mut c = ColorR8::default();
    c.set(0, 1.0)?;
    assert_eq!(c, ColorR8(255));
    c.set(0, 0.0)?;
    assert_eq!(c, ColorR8(0));
    assert!(matches!(
        c.set(0, 1.5),
        Err(MathError::NormalizedOutOfRange { .. })
    ));
    Ok(())
}

#[test]
fn test_extremes_survive_every_format() -> anyhow::Result<()> {
    for value in [0.0, 1.0] {
        assert_eq!(store::<ColorR8>(value)?, value);
        assert_eq!(store::<ColorR16>(value)?, value);
        assert_eq!(store::<ColorR32>(value)?, value);
        assert_eq!(store::<ColorRF>(value)?, value);
        assert_eq!(store::<ColorRD>(value)?, value);
        assert_eq!(store::<ColorRHF>(value)?, value);
    }
    Ok(())
}

#[test]
fn test_quantization_error_is_bounded() -> anyhow::Result<()> {
    for step in 0..=20 {
        let value = step as f32 / 20.0;
        assert!((store::<ColorR8>(value)? - value).abs() <= 0.5 / 255.0 + 1e-6);
        assert!((store::<ColorR16>(value)? - value).abs() <= 0.5 / 65535.0 + 1e-6);
        assert!((store::<ColorRHF>(value)? - value).abs() <= 1e-3);
    }
    Ok(())
}

#[test]
fn test_every_format_rejects_bad_input() {
    fn rejects<C: Color + Default + PartialEq + std::fmt::Debug>() {
        let mut c = C::default();
        assert!(c.set(0, -0.01).is_err());
        assert!(c.set(0, 1.01).is_err());
        assert!(c.set(0, f32::INFINITY).is_err());
        assert!(matches!(
            c.set(1, 0.5),
            Err(MathError::IndexOutOfRange { index: 1, .. })
        ));
        assert_eq!(c, C::default());
    }
    rejects::<ColorR8>();
    rejects::<ColorR16>();
    rejects::<ColorR32>();
    rejects::<ColorRF>();
    rejects::<ColorRD>();
    rejects::<ColorRHF>();
}

#[test]
fn test_pixel_type_matches_storage_size() {
    fn check<C: Color>() {
        assert_eq!(C::CHANNELS, 1);
        assert_eq!(C::PIXEL_TYPE.bytes_per_pixel(), std::mem::size_of::<C>());
    }
    check::<ColorR8>();
    check::<ColorR16>();
    check::<ColorR32>();
    check::<ColorRF>();
    check::<ColorRD>();
    check::<ColorRHF>();
    assert_eq!(ColorR16::PIXEL_TYPE, PixelType::R16);
}
