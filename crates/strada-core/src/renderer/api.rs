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

//! Common data structures shared by the host and the rendering backends.

use crate::math::LinearRgba;

/// A backend-agnostic representation of a graphics API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GraphicsBackendType {
    /// Vulkan API.
    Vulkan,
    /// Apple's Metal API.
    Metal,
    /// Microsoft's DirectX 12 API.
    Dx12,
    /// OpenGL API.
    OpenGL,
    /// WebGPU API (for web builds).
    WebGpu,
    /// An unknown or unsupported backend.
    #[default]
    Unknown,
}

/// The physical type of a graphics device (GPU).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RendererDeviceType {
    /// A GPU integrated into the CPU.
    IntegratedGpu,
    /// A discrete, dedicated GPU.
    DiscreteGpu,
    /// A virtualized or software-based GPU.
    VirtualGpu,
    /// A software renderer running on the CPU.
    Cpu,
    /// An unknown or unsupported device type.
    #[default]
    Unknown,
}

/// Information about the adapter a render system ended up on.
#[derive(Debug, Clone, Default)]
pub struct RendererAdapterInfo {
    /// The name of the adapter (e.g., "NVIDIA GeForce RTX 4090").
    pub name: String,
    /// The graphics API backend this adapter is associated with.
    pub backend_type: GraphicsBackendType,
    /// The physical type of the adapter.
    pub device_type: RendererDeviceType,
}

/// Per-frame options handed to [`RenderSystem::render`](super::RenderSystem::render).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSettings {
    /// Color the frame is cleared to before the ground is drawn.
    pub clear_color: LinearRgba,
    /// Draws the decorative triangle and square on top of the ground.
    pub show_primitives: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            clear_color: LinearRgba::SKY,
            show_primitives: false,
        }
    }
}

/// Statistics about one rendered frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderStats {
    /// A sequential counter for rendered frames.
    pub frame_number: u64,
    /// CPU time spent regenerating and uploading the mesh and computing matrices.
    pub cpu_preparation_time_ms: f32,
    /// CPU time spent encoding, submitting and presenting the frame.
    pub cpu_render_submission_time_ms: f32,
    /// The number of draw calls encoded for the frame.
    pub draw_calls: u32,
    /// The total number of triangles submitted for the frame, degenerate ones included.
    pub triangles_rendered: u32,
}

impl RenderStats {
    /// Total CPU time of the frame.
    pub fn cpu_total_time_ms(&self) -> f32 {
        self.cpu_preparation_time_ms + self.cpu_render_submission_time_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_clear_to_sky() {
        let settings = RenderSettings::default();
        assert_eq!(settings.clear_color.to_array(), [0.6, 0.6, 1.0, 1.0]);
        assert!(!settings.show_primitives);
    }

    #[test]
    fn stats_total_time() {
        let stats = RenderStats {
            cpu_preparation_time_ms: 1.5,
            cpu_render_submission_time_ms: 0.5,
            ..Default::default()
        };
        assert_eq!(stats.cpu_total_time_ms(), 2.0);
    }
}
