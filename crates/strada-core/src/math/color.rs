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

//! Defines the `LinearRgba` color type.

use crate::math::vector::Vec4;

/// A color with `f32` RGBA components.
///
/// Every color in the ground palette, the primitives and the clear color is
/// handed to the GPU as-is, so the components are stored exactly as authored.
///
/// `#[repr(C)]` keeps the layout identical to `[f32; 4]`, which lets colors be
/// written straight into vertex and uniform buffers. It serializes as a plain
/// `[r, g, b, a]` array.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    bytemuck::Pod,
    bytemuck::Zeroable,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(from = "[f32; 4]", into = "[f32; 4]")]
#[repr(C)]
pub struct LinearRgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    /// Opacity.
    pub a: f32,
}

impl LinearRgba {
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    /// The pale sky blue used to clear the frame (`[0.6, 0.6, 1.0, 1.0]`).
    pub const SKY: Self = Self::rgb(0.6, 0.6, 1.0);

    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color.
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Creates a `LinearRgba` from an `[r, g, b, a]` array.
    #[inline]
    pub const fn from_array(c: [f32; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }

    /// Returns the color as an `[r, g, b, a]` array.
    #[inline]
    pub const fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Converts this color to a [`Vec4`].
    #[inline]
    pub fn to_vec4(&self) -> Vec4 {
        Vec4::new(self.r, self.g, self.b, self.a)
    }
}

impl Default for LinearRgba {
    /// Returns opaque black.
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<[f32; 4]> for LinearRgba {
    #[inline]
    fn from(c: [f32; 4]) -> Self {
        Self::from_array(c)
    }
}

impl From<LinearRgba> for [f32; 4] {
    #[inline]
    fn from(c: LinearRgba) -> Self {
        c.to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_is_opaque() {
        let c = LinearRgba::rgb(0.4, 0.4, 0.4);
        assert_eq!(c.a, 1.0);
        assert_eq!(c.to_array(), [0.4, 0.4, 0.4, 1.0]);
    }

    #[test]
    fn test_array_conversions() {
        let arr = [0.63671875, 0.76953125, 0.22265625, 1.0];
        let c: LinearRgba = arr.into();
        let back: [f32; 4] = c.into();
        assert_eq!(back, arr);
        assert_eq!(c.to_vec4(), Vec4::new(arr[0], arr[1], arr[2], arr[3]));
    }

    #[test]
    fn test_layout_matches_array() {
        let c = LinearRgba::SKY;
        let bytes: &[u8] = bytemuck::bytes_of(&c);
        let floats: &[f32] = bytemuck::cast_slice(bytes);
        assert_eq!(floats, &[0.6, 0.6, 1.0, 1.0]);
    }
}
