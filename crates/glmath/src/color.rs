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

//! Single-channel color types and their pixel storage tags.
//!
//! Each type holds one red channel at a given storage precision and exposes
//! it as a normalized `[0, 1]` float. Integer channels are scaled to their
//! full storage range; floating-point channels store the value as-is.
//!
//! `#[repr(transparent)]` keeps every type bit-identical to its storage, so a
//! slice of colors can be uploaded directly by a pixel transfer routine that
//! selects its format from [`Color::PIXEL_TYPE`].

use crate::error::{Axis, MathError, Result};
use half::f16;

/// The storage format of a color channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PixelType {
    /// Red, 8-bit unsigned normalized.
    R8,
    /// Red, 16-bit unsigned normalized.
    R16,
    /// Red, 32-bit unsigned normalized.
    R32,
    /// Red, 32-bit float.
    RF,
    /// Red, 64-bit float.
    RD,
    /// Red, 16-bit half float.
    RHF,
}

impl PixelType {
    /// The size of one pixel in bytes.
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            PixelType::R8 => 1,
            PixelType::R16 | PixelType::RHF => 2,
            PixelType::R32 | PixelType::RF => 4,
            PixelType::RD => 8,
        }
    }

    /// Whether the channel is an integer scaled to `[0, 1]` on read.
    pub const fn is_normalized_integer(self) -> bool {
        matches!(self, PixelType::R8 | PixelType::R16 | PixelType::R32)
    }
}

/// A color value addressable by channel index.
pub trait Color: Copy {
    /// The storage format of this color type.
    const PIXEL_TYPE: PixelType;
    /// The number of channels.
    const CHANNELS: usize;

    /// Returns the channel at `index` as a normalized value.
    fn get(&self, index: usize) -> Result<f32>;

    /// Stores a normalized value in the channel at `index`.
    ///
    /// Fails with [`MathError::NormalizedOutOfRange`] when `value` is outside
    /// `[0, 1]`, and with [`MathError::IndexOutOfRange`] for a bad index. On
    /// failure the color is unchanged.
    fn set(&mut self, index: usize, value: f32) -> Result<()>;
}

#[inline]
fn check_channel(index: usize, channels: usize) -> Result<()> {
    if index >= channels {
        return Err(MathError::IndexOutOfRange {
            axis: Axis::Channel,
            index,
            bound: channels,
        });
    }
    Ok(())
}

#[inline]
fn check_normalized(value: f32) -> Result<f32> {
    if !(0.0..=1.0).contains(&value) {
        return Err(MathError::NormalizedOutOfRange { value });
    }
    Ok(value)
}

macro_rules! normalized_integer_color {
    ($(#[$meta:meta])* $name:ident, $storage:ty, $pixel:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, bytemuck::Pod, bytemuck::Zeroable)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[repr(transparent)]
        pub struct $name(pub $storage);

        impl $name {
            /// Creates the color from a normalized value.
            pub fn from_normalized(value: f32) -> Result<Self> {
                let mut color = Self::default();
                color.set(0, value)?;
                Ok(color)
            }

            /// The channel as a normalized value.
            #[inline]
            pub fn normalized(self) -> f32 {
                (self.0 as f64 / <$storage>::MAX as f64) as f32
            }
        }

        impl Color for $name {
            const PIXEL_TYPE: PixelType = PixelType::$pixel;
            const CHANNELS: usize = 1;

            fn get(&self, index: usize) -> Result<f32> {
                check_channel(index, Self::CHANNELS)?;
                Ok(self.normalized())
            }

            fn set(&mut self, index: usize, value: f32) -> Result<()> {
                check_channel(index, Self::CHANNELS)?;
                let value = check_normalized(value)?;
                self.0 = (value as f64 * <$storage>::MAX as f64).round() as $storage;
                Ok(())
            }
        }

        impl From<$name> for f32 {
            #[inline]
            fn from(color: $name) -> Self {
                color.normalized()
            }
        }
    };
}

normalized_integer_color!(
    /// A red channel stored as an 8-bit unsigned normalized integer.
    ColorR8,
    u8,
    R8
);
normalized_integer_color!(
    /// A red channel stored as a 16-bit unsigned normalized integer.
    ColorR16,
    u16,
    R16
);
normalized_integer_color!(
    /// A red channel stored as a 32-bit unsigned normalized integer.
    ColorR32,
    u32,
    R32
);

/// A red channel stored as a 32-bit float.
#[derive(Debug, Clone, Copy, PartialEq, Default, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct ColorRF(pub f32);

impl From<ColorRF> for f32 {
    #[inline]
    fn from(color: ColorRF) -> Self {
        color.0
    }
}

impl Color for ColorRF {
    const PIXEL_TYPE: PixelType = PixelType::RF;
    const CHANNELS: usize = 1;

    fn get(&self, index: usize) -> Result<f32> {
        check_channel(index, Self::CHANNELS)?;
        Ok(self.0)
    }

    fn set(&mut self, index: usize, value: f32) -> Result<()> {
        check_channel(index, Self::CHANNELS)?;
        self.0 = check_normalized(value)?;
        Ok(())
    }
}

/// A red channel stored as a 64-bit float.
#[derive(Debug, Clone, Copy, PartialEq, Default, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct ColorRD(pub f64);

impl From<ColorRD> for f32 {
    #[inline]
    fn from(color: ColorRD) -> Self {
        color.0 as f32
    }
}

impl Color for ColorRD {
    const PIXEL_TYPE: PixelType = PixelType::RD;
    const CHANNELS: usize = 1;

    fn get(&self, index: usize) -> Result<f32> {
        check_channel(index, Self::CHANNELS)?;
        Ok(self.0 as f32)
    }

    fn set(&mut self, index: usize, value: f32) -> Result<()> {
        check_channel(index, Self::CHANNELS)?;
        self.0 = f64::from(check_normalized(value)?);
        Ok(())
    }
}

/// A red channel stored as a 16-bit half float.
#[derive(Debug, Clone, Copy, PartialEq, Default, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct ColorRHF(pub f16);

impl From<ColorRHF> for f32 {
    #[inline]
    fn from(color: ColorRHF) -> Self {
        color.0.to_f32()
    }
}

impl Color for ColorRHF {
    const PIXEL_TYPE: PixelType = PixelType::RHF;
    const CHANNELS: usize = 1;

    fn get(&self, index: usize) -> Result<f32> {
        check_channel(index, Self::CHANNELS)?;
        Ok(self.0.to_f32())
    }

    fn set(&mut self, index: usize, value: f32) -> Result<()> {
        check_channel(index, Self::CHANNELS)?;
        self.0 = f16::from_f32(check_normalized(value)?);
        Ok(())
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_r8_scaling() {
        let mut c = ColorR8::default();
        c.set(0, 1.0).unwrap();
        assert_eq!(c.0, 255);
        c.set(0, 0.0).unwrap();
        assert_eq!(c.0, 0);
        c.set(0, 0.5).unwrap();
        assert_eq!(c.0, 128);
        assert_eq!(ColorR8(51).get(0), Ok(0.2));
    }

    #[test]
    fn test_r8_rejects_out_of_range() {
        let mut c = ColorR8(10);
        assert_eq!(
            c.set(0, 1.5),
            Err(MathError::NormalizedOutOfRange { value: 1.5 })
        );
        assert!(c.set(0, -0.1).is_err());
        assert!(c.set(0, f32::NAN).is_err());
        assert_eq!(c.0, 10);
    }

    #[test]
    fn test_channel_index() {
        let mut c = ColorR16::default();
        assert_eq!(
            c.get(1),
            Err(MathError::IndexOutOfRange {
                axis: Axis::Channel,
                index: 1,
                bound: 1
            })
        );
        assert!(c.set(1, 0.5).is_err());
        assert!(ColorRHF::default().get(3).is_err());
    }

    #[test]
    fn test_wide_integer_extremes() {
        assert_eq!(ColorR16::from_normalized(1.0).unwrap().0, u16::MAX);
        assert_eq!(ColorR32::from_normalized(1.0).unwrap().0, u32::MAX);
        assert_eq!(ColorR32(u32::MAX).get(0), Ok(1.0));
        assert_eq!(f32::from(ColorR16(0)), 0.0);
    }

    #[test]
    fn test_float_channels_store_directly() {
        let mut f = ColorRF::default();
        f.set(0, 0.25).unwrap();
        assert_eq!(f.0, 0.25);

        let mut d = ColorRD::default();
        d.set(0, 0.75).unwrap();
        assert_eq!(d.0, 0.75);
        assert_eq!(d.get(0), Ok(0.75));

        let mut h = ColorRHF::default();
        h.set(0, 0.5).unwrap();
        assert_eq!(h.0, f16::from_f32(0.5));
        assert_eq!(h.get(0), Ok(0.5));
        assert_eq!(f32::from(h), 0.5);
        assert!(h.set(0, 2.0).is_err());
    }

    #[test]
    fn test_pixel_types() {
        assert_eq!(ColorR8::PIXEL_TYPE, PixelType::R8);
        assert_eq!(ColorRHF::PIXEL_TYPE.bytes_per_pixel(), 2);
        assert_eq!(
            ColorRD::PIXEL_TYPE.bytes_per_pixel(),
            std::mem::size_of::<ColorRD>()
        );
        assert!(ColorR32::PIXEL_TYPE.is_normalized_integer());
        assert!(!ColorRF::PIXEL_TYPE.is_normalized_integer());
    }

    #[test]
    fn test_pod_upload() {
        let pixels = [ColorR8(1), ColorR8(2), ColorR8(255)];
        let bytes: &[u8] = bytemuck::cast_slice(&pixels);
        assert_eq!(bytes, &[1, 2, 255]);
    }
}
