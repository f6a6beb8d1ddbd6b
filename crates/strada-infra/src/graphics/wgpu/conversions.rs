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

//! Conversions between the core rendering types and their wgpu counterparts.

use strada_core::math::LinearRgba;
use strada_core::renderer::{GraphicsBackendType, RendererDeviceType};

/// A local extension trait to convert core types into wgpu types.
/// Sidesteps the orphan rule while keeping an `.into_wgpu()` call site.
pub trait IntoWgpu<T> {
    /// Consumes self and converts it into a wgpu type.
    fn into_wgpu(self) -> T;
}

/// The reverse direction, for values wgpu hands back to us.
pub trait FromWgpu<T> {
    /// Converts a wgpu value into a core type.
    fn from_wgpu(value: T) -> Self;
}

impl IntoWgpu<wgpu::Color> for LinearRgba {
    fn into_wgpu(self) -> wgpu::Color {
        wgpu::Color {
            r: self.r as f64,
            g: self.g as f64,
            b: self.b as f64,
            a: self.a as f64,
        }
    }
}

impl FromWgpu<wgpu::Backend> for GraphicsBackendType {
    fn from_wgpu(value: wgpu::Backend) -> Self {
        match value {
            wgpu::Backend::Vulkan => GraphicsBackendType::Vulkan,
            wgpu::Backend::Metal => GraphicsBackendType::Metal,
            wgpu::Backend::Dx12 => GraphicsBackendType::Dx12,
            wgpu::Backend::Gl => GraphicsBackendType::OpenGL,
            wgpu::Backend::BrowserWebGpu => GraphicsBackendType::WebGpu,
            _ => GraphicsBackendType::Unknown,
        }
    }
}

impl FromWgpu<wgpu::DeviceType> for RendererDeviceType {
    fn from_wgpu(value: wgpu::DeviceType) -> Self {
        match value {
            wgpu::DeviceType::IntegratedGpu => RendererDeviceType::IntegratedGpu,
            wgpu::DeviceType::DiscreteGpu => RendererDeviceType::DiscreteGpu,
            wgpu::DeviceType::VirtualGpu => RendererDeviceType::VirtualGpu,
            wgpu::DeviceType::Cpu => RendererDeviceType::Cpu,
            _ => RendererDeviceType::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_color_keeps_components() {
        let color: wgpu::Color = LinearRgba::SKY.into_wgpu();
        assert!((color.r - 0.6).abs() < 1e-6);
        assert!((color.g - 0.6).abs() < 1e-6);
        assert_eq!(color.b, 1.0);
        assert_eq!(color.a, 1.0);
    }

    #[test]
    fn backend_and_device_types() {
        assert_eq!(
            GraphicsBackendType::from_wgpu(wgpu::Backend::Vulkan),
            GraphicsBackendType::Vulkan
        );
        assert_eq!(
            GraphicsBackendType::from_wgpu(wgpu::Backend::Gl),
            GraphicsBackendType::OpenGL
        );
        assert_eq!(
            RendererDeviceType::from_wgpu(wgpu::DeviceType::Other),
            RendererDeviceType::Unknown
        );
    }
}
