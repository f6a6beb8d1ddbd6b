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

//! Defines the `Mat4` type and the camera-related constructors.

use super::{Vec3, Vec4, EPSILON};
use std::ops::Mul;

/// A 4x4 column-major matrix.
///
/// Used for the camera view and projection matrices. The memory layout is
/// column-major, which is what WGSL `mat4x4<f32>` uniforms expect.
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct Mat4 {
    pub cols: [Vec4; 4],
}

impl Mat4 {
    /// The 4x4 identity matrix.
    pub const IDENTITY: Self = Self {
        cols: [Vec4::X, Vec4::Y, Vec4::Z, Vec4::W],
    };

    #[inline]
    pub fn from_cols(c0: Vec4, c1: Vec4, c2: Vec4, c3: Vec4) -> Self {
        Self {
            cols: [c0, c1, c2, c3],
        }
    }

    /// Row `index`, gathered across the columns.
    #[inline]
    pub fn get_row(&self, index: usize) -> Vec4 {
        Vec4 {
            x: self.cols[0][index],
            y: self.cols[1][index],
            z: self.cols[2][index],
            w: self.cols[3][index],
        }
    }

    /// Creates a right-handed off-axis perspective projection with a [0, 1] depth range (ZO).
    ///
    /// The planes are given at the near distance, exactly like the classic
    /// `glFrustum`, but depth is remapped so the near plane lands on 0 and the far plane on 1.
    ///
    /// # Arguments
    ///
    /// * `left`, `right`, `bottom`, `top`: Extents of the view volume on the near plane.
    /// * `z_near`: Distance to the near clipping plane (must be positive).
    /// * `z_far`: Distance to the far clipping plane (must be > `z_near`).
    #[inline]
    pub fn frustum_rh_zo(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        z_near: f32,
        z_far: f32,
    ) -> Self {
        assert!(z_near > 0.0 && z_far > z_near);
        let rml = right - left;
        let tmb = top - bottom;
        let aa = 2.0 * z_near / rml;
        let bb = 2.0 * z_near / tmb;
        let cc = (right + left) / rml;
        let dd = (top + bottom) / tmb;
        let ee = z_far / (z_near - z_far);
        let ff = (z_near * z_far) / (z_near - z_far);

        Self::from_cols(
            Vec4::new(aa, 0.0, 0.0, 0.0),
            Vec4::new(0.0, bb, 0.0, 0.0),
            Vec4::new(cc, dd, ee, -1.0),
            Vec4::new(0.0, 0.0, ff, 0.0),
        )
    }

    /// Creates a right-handed view matrix for a camera looking from `eye` towards `target`.
    ///
    /// Returns `None` if `eye` and `target` coincide, or if `up` is parallel to the
    /// view direction.
    #[inline]
    pub fn look_at_rh(eye: Vec3, target: Vec3, up: Vec3) -> Option<Self> {
        let forward = target - eye;
        if forward.length_squared() < EPSILON * EPSILON {
            return None;
        }
        let f = forward.normalize();
        let s = f.cross(up);
        if s.length_squared() < EPSILON * EPSILON {
            return None;
        }
        let s = s.normalize();
        let u = s.cross(f);

        Some(Self::from_cols(
            Vec4::new(s.x, u.x, -f.x, 0.0),
            Vec4::new(s.y, u.y, -f.y, 0.0),
            Vec4::new(s.z, u.z, -f.z, 0.0),
            Vec4::new(-eye.dot(s), -eye.dot(u), eye.dot(f), 1.0),
        ))
    }

    /// Transforms a point (w = 1) and returns the homogeneous result.
    #[inline]
    pub fn transform_point(&self, point: Vec3) -> Vec4 {
        *self * Vec4::from_vec3(point, 1.0)
    }

    /// Returns the matrix as four column arrays, ready for a uniform upload.
    #[inline]
    pub fn to_cols_array(&self) -> [[f32; 4]; 4] {
        self.cols.map(|c| [c.x, c.y, c.z, c.w])
    }
}

impl Default for Mat4 {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul<Mat4> for Mat4 {
    type Output = Self;
    /// Multiplies this matrix by another `Mat4`. `a * b` applies `b` first.
    #[inline]
    fn mul(self, rhs: Mat4) -> Self::Output {
        let rows = [
            self.get_row(0),
            self.get_row(1),
            self.get_row(2),
            self.get_row(3),
        ];
        let cols = rhs.cols.map(|col| {
            Vec4::new(
                rows[0].dot(col),
                rows[1].dot(col),
                rows[2].dot(col),
                rows[3].dot(col),
            )
        });
        Mat4 { cols }
    }
}

impl Mul<Vec4> for Mat4 {
    type Output = Vec4;
    #[inline]
    fn mul(self, rhs: Vec4) -> Self::Output {
        self.cols[0] * rhs.x + self.cols[1] * rhs.y + self.cols[2] * rhs.z + self.cols[3] * rhs.w
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{approx_eq, approx_eq_eps};

    fn vec4_approx_eq(a: Vec4, b: Vec4) -> bool {
        approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z) && approx_eq(a.w, b.w)
    }

    fn mat4_approx_eq(a: Mat4, b: Mat4) -> bool {
        (0..4).all(|i| vec4_approx_eq(a.cols[i], b.cols[i]))
    }

    #[test]
    fn test_identity_default() {
        assert_eq!(Mat4::default(), Mat4::IDENTITY);
        let m = Mat4::frustum_rh_zo(-2.0, 2.0, -1.0, 1.0, 1.5, 1024.0);
        assert!(mat4_approx_eq(m * Mat4::IDENTITY, m));
        assert!(mat4_approx_eq(Mat4::IDENTITY * m, m));
    }

    #[test]
    fn test_mul_is_column_major() {
        // Translation by (1, 2, 3) stored in the last column.
        let t = Mat4::from_cols(Vec4::X, Vec4::Y, Vec4::Z, Vec4::new(1.0, 2.0, 3.0, 1.0));
        let p = t.transform_point(Vec3::ZERO);
        assert!(vec4_approx_eq(p, Vec4::new(1.0, 2.0, 3.0, 1.0)));
        let tt = t * t;
        assert!(vec4_approx_eq(tt.cols[3], Vec4::new(2.0, 4.0, 6.0, 1.0)));
    }

    #[test]
    fn test_look_at_rh_puts_target_on_negative_z() {
        let eye = Vec3::new(0.0, 128.0, 128.0);
        let target = Vec3::new(0.0, 0.0, -512.0);
        let view = Mat4::look_at_rh(eye, target, Vec3::Y).unwrap();

        let eye_view = view.transform_point(eye);
        assert!(vec4_approx_eq(eye_view, Vec4::new(0.0, 0.0, 0.0, 1.0)));

        let target_view = view.transform_point(target);
        let distance = (target - eye).length();
        assert!(approx_eq_eps(target_view.x, 0.0, 1e-3));
        assert!(approx_eq_eps(target_view.y, 0.0, 1e-3));
        assert!(approx_eq_eps(target_view.z, -distance, 1e-3));
    }

    #[test]
    fn test_look_at_rh_degenerate_inputs() {
        let eye = Vec3::new(1.0, 2.0, 3.0);
        assert!(Mat4::look_at_rh(eye, eye, Vec3::Y).is_none());
        // Looking straight down the up vector.
        assert!(Mat4::look_at_rh(Vec3::ZERO, Vec3::new(0.0, 10.0, 0.0), Vec3::Y).is_none());
    }

    #[test]
    fn test_frustum_rh_zo_depth_range() {
        let (near, far) = (1.5, 1024.0);
        let proj = Mat4::frustum_rh_zo(-1.0, 1.0, -1.0, 1.0, near, far);

        let at_near = proj.transform_point(Vec3::new(0.0, 0.0, -near));
        assert!(approx_eq(at_near.z / at_near.w, 0.0));

        let at_far = proj.transform_point(Vec3::new(0.0, 0.0, -far));
        assert!(approx_eq_eps(at_far.z / at_far.w, 1.0, 1e-4));

        // The near-plane corner maps to the NDC corner.
        let corner = proj.transform_point(Vec3::new(1.0, 1.0, -near));
        assert!(approx_eq(corner.x / corner.w, 1.0));
        assert!(approx_eq(corner.y / corner.w, 1.0));
    }

    #[test]
    fn test_to_cols_array() {
        let cols = Mat4::IDENTITY.to_cols_array();
        assert_eq!(cols[0], [1.0, 0.0, 0.0, 0.0]);
        assert_eq!(cols[3], [0.0, 0.0, 0.0, 1.0]);
    }
}
