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

//! The fixed camera looking down the track.

use crate::math::{Mat4, Vec3};

/// The camera-related matrices of one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewInfo {
    /// The camera's view matrix (world to view space).
    pub view_matrix: Mat4,
    /// The camera's projection matrix (view to clip space).
    pub projection_matrix: Mat4,
    /// The camera's position in world space.
    pub camera_position: Vec3,
}

impl ViewInfo {
    /// Creates a new `ViewInfo` from individual components.
    pub fn new(view_matrix: Mat4, projection_matrix: Mat4, camera_position: Vec3) -> Self {
        Self {
            view_matrix,
            projection_matrix,
            camera_position,
        }
    }

    /// Projection times view: transforms world space straight to clip space.
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix * self.view_matrix
    }
}

impl Default for ViewInfo {
    fn default() -> Self {
        Self {
            view_matrix: Mat4::IDENTITY,
            projection_matrix: Mat4::IDENTITY,
            camera_position: Vec3::ZERO,
        }
    }
}

/// A camera hovering above the near end of the track, looking down its length.
///
/// It never moves. The view is still rebuilt every frame, and the projection
/// follows the surface aspect ratio.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedCamera;

impl FixedCamera {
    pub const EYE: Vec3 = Vec3::new(0.0, 128.0, 128.0);
    pub const TARGET: Vec3 = Vec3::new(0.0, 0.0, -512.0);
    pub const UP: Vec3 = Vec3::Y;
    pub const Z_NEAR: f32 = 1.5;
    pub const Z_FAR: f32 = 1024.0;

    pub fn new() -> Self {
        Self
    }

    /// The look-at view matrix.
    pub fn view(&self) -> Mat4 {
        // EYE, TARGET and UP are constants that are known to be non-degenerate.
        Mat4::look_at_rh(Self::EYE, Self::TARGET, Self::UP).unwrap_or(Mat4::IDENTITY)
    }

    /// An off-axis frustum spanning `[-ratio, ratio]` horizontally and `[-1, 1]`
    /// vertically at the near plane. A zero height is treated as 1.
    pub fn projection(&self, width: u32, height: u32) -> Mat4 {
        let ratio = width as f32 / height.max(1) as f32;
        Mat4::frustum_rh_zo(-ratio, ratio, -1.0, 1.0, Self::Z_NEAR, Self::Z_FAR)
    }

    /// Builds the matrices of a frame rendered at `width` x `height`.
    pub fn view_info(&self, width: u32, height: u32) -> ViewInfo {
        ViewInfo::new(self.view(), self.projection(width, height), Self::EYE)
    }
}
