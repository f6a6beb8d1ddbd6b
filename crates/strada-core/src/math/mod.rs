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

//! Foundational mathematics library for strada.
//!
//! Contains the small set of linear-algebra types the track and camera need:
//! vectors, a column-major `Mat4`, and a linear RGBA color, plus scalar helpers.
//! Angles are in radians.

// --- Fundamental Constants ---

/// A small constant for floating-point comparisons.
pub const EPSILON: f32 = 1e-5;

// --- Declare Sub-Modules ---

pub mod color;
pub mod matrix;
pub mod vector;

// --- Re-export Principal Types ---

pub use self::color::LinearRgba;
pub use self::matrix::Mat4;
pub use self::vector::{Vec3, Vec4};

// --- Utility Functions ---

/// Linearly interpolates between `v0` and `v1`.
///
/// Uses the `(1 - t) * v0 + t * v1` form, which is exact at both ends
/// (`t = 0` yields `v0`, `t = 1` yields `v1`). `t` is not clamped.
///
/// # Examples
///
/// ```
/// use strada_core::math::lerp;
/// assert_eq!(lerp(-512.0, 512.0, 0.0), -512.0);
/// assert_eq!(lerp(-512.0, 512.0, 1.0), 512.0);
/// assert_eq!(lerp(0.0, -1024.0, 0.5), -512.0);
/// ```
#[inline]
pub fn lerp(v0: f32, v1: f32, t: f32) -> f32 {
    (1.0 - t) * v0 + t * v1
}

/// Performs an approximate equality comparison between two floats with a custom tolerance.
#[inline]
pub fn approx_eq_eps(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() < epsilon
}

/// Performs an approximate equality comparison using the module's default [`EPSILON`].
///
/// # Examples
///
/// ```
/// use strada_core::math::{approx_eq, EPSILON};
/// assert!(approx_eq(1.0, 1.0 + EPSILON / 2.0));
/// assert!(!approx_eq(1.0, 1.0 + EPSILON * 2.0));
/// ```
#[inline]
pub fn approx_eq(a: f32, b: f32) -> bool {
    approx_eq_eps(a, b, EPSILON)
}
