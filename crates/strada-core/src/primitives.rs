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

//! Decorative flat-colored shapes.
//!
//! A triangle and a square, both position-only and drawn with a single flat
//! color. They are not part of the scene; the host only draws them when asked
//! to, as a small overlay in the top corners of the screen.

use crate::math::{LinearRgba, Mat4, Vec4};

/// A position-only vertex.
#[derive(Debug, Default, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct FlatVertex {
    pub position: [f32; 3],
}

const fn v(x: f32, y: f32, z: f32) -> FlatVertex {
    FlatVertex {
        position: [x, y, z],
    }
}

/// An equilateral triangle centered on its centroid, drawn as a list without indices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub color: LinearRgba,
}

impl Triangle {
    /// Counter-clockwise: top, bottom left, bottom right.
    pub const VERTICES: [FlatVertex; 3] = [
        v(0.0, 0.622_008_46, 0.0),
        v(-0.5, -0.311_004_23, 0.0),
        v(0.5, -0.311_004_23, 0.0),
    ];

    /// The default yellowish green.
    pub const COLOR: LinearRgba = LinearRgba::new(0.636_718_75, 0.769_531_25, 0.222_656_25, 1.0);

    pub fn new() -> Self {
        Self { color: Self::COLOR }
    }

    pub fn vertices(&self) -> &'static [FlatVertex] {
        &Self::VERTICES
    }
}

impl Default for Triangle {
    fn default() -> Self {
        Self::new()
    }
}

/// A unit square made of two indexed triangles, in a caller-chosen color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Square {
    pub color: LinearRgba,
}

impl Square {
    /// Top left, bottom left, bottom right, top right.
    pub const VERTICES: [FlatVertex; 4] = [
        v(-0.5, 0.5, 0.0),
        v(-0.5, -0.5, 0.0),
        v(0.5, -0.5, 0.0),
        v(0.5, 0.5, 0.0),
    ];

    pub const INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

    pub fn new(color: LinearRgba) -> Self {
        Self { color }
    }

    pub fn vertices(&self) -> &'static [FlatVertex] {
        &Self::VERTICES
    }

    pub fn indices(&self) -> &'static [u16] {
        &Self::INDICES
    }
}

/// Places a unit-sized shape directly in clip space.
///
/// The shape is scaled to `size` (in NDC units of height), moved to
/// `(center_x, center_y)` and squeezed horizontally so it keeps its proportions
/// on a `width` x `height` surface. Depth is 0, in front of everything.
pub fn overlay_transform(width: u32, height: u32, center_x: f32, center_y: f32, size: f32) -> Mat4 {
    let ratio = width as f32 / height.max(1) as f32;
    Mat4::from_cols(
        Vec4::new(size / ratio, 0.0, 0.0, 0.0),
        Vec4::new(0.0, size, 0.0, 0.0),
        Vec4::new(0.0, 0.0, 1.0, 0.0),
        Vec4::new(center_x, center_y, 0.0, 1.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{approx_eq, Vec3};

    #[test]
    fn test_triangle_centroid_is_origin() {
        let sum = Triangle::VERTICES
            .iter()
            .fold(0.0, |acc, v| acc + v.position[1]);
        assert!(approx_eq(sum, 0.0));
        assert_eq!(Triangle::new().color, Triangle::COLOR);
    }

    #[test]
    fn test_square_indices_are_in_range() {
        let square = Square::new(LinearRgba::RED);
        assert_eq!(square.indices().len(), 6);
        assert!(square
            .indices()
            .iter()
            .all(|&i| (i as usize) < square.vertices().len()));
        assert_eq!(square.color, LinearRgba::RED);
    }

    #[test]
    fn test_overlay_transform_keeps_proportions() {
        let m = overlay_transform(200, 100, 0.5, -0.5, 0.5);
        let corner = m.transform_point(Vec3::new(1.0, 1.0, 0.0));
        assert!(approx_eq(corner.x, 0.5 + 0.25));
        assert!(approx_eq(corner.y, -0.5 + 0.5));
        assert!(approx_eq(corner.z, 0.0));
        assert!(approx_eq(corner.w, 1.0));
    }
}
