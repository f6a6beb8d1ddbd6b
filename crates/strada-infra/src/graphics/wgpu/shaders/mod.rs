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

//! WGSL sources embedded at compile time.

/// Ground mesh shader.
///
/// Takes position, normal and color per vertex and an MVP matrix uniform. The
/// color is passed straight through; the normal is accepted but unused.
pub const GROUND_WGSL: &str = include_str!("ground.wgsl");

/// Flat-color shader for the decorative primitives.
///
/// Position-only vertices, with the MVP matrix and fill color in one uniform.
pub const FLAT_COLOR_WGSL: &str = include_str!("flat_color.wgsl");

/// Vertex entry point shared by both shaders.
pub const VERTEX_ENTRY: &str = "vs_main";
/// Fragment entry point shared by both shaders.
pub const FRAGMENT_ENTRY: &str = "fs_main";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ground_shader_valid() {
        assert!(GROUND_WGSL.contains("@vertex"));
        assert!(GROUND_WGSL.contains("@fragment"));
        assert!(GROUND_WGSL.contains(&format!("fn {VERTEX_ENTRY}")));
        assert!(GROUND_WGSL.contains(&format!("fn {FRAGMENT_ENTRY}")));
    }

    #[test]
    fn test_ground_shader_declares_vertex_layout() {
        assert!(GROUND_WGSL.contains("@location(0) position: vec3<f32>"));
        assert!(GROUND_WGSL.contains("@location(1) normal: vec3<f32>"));
        assert!(GROUND_WGSL.contains("@location(2) color: vec4<f32>"));
    }

    #[test]
    fn test_flat_color_shader_valid() {
        assert!(FLAT_COLOR_WGSL.contains("@vertex"));
        assert!(FLAT_COLOR_WGSL.contains("@fragment"));
        assert!(FLAT_COLOR_WGSL.contains(&format!("fn {VERTEX_ENTRY}")));
        assert!(FLAT_COLOR_WGSL.contains(&format!("fn {FRAGMENT_ENTRY}")));
    }
}
