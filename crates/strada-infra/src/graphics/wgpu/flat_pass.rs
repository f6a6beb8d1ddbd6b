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

//! Draws the decorative triangle and square with a flat color.

use strada_core::math::{LinearRgba, Mat4};
use strada_core::primitives::{overlay_transform, FlatVertex, Square, Triangle};
use strada_core::renderer::RenderError;
use wgpu::util::DeviceExt;

use super::context::{WgpuGraphicsContext, DEPTH_FORMAT};
use super::shaders::{FLAT_COLOR_WGSL, FRAGMENT_ENTRY, VERTEX_ENTRY};

/// Fill color of the square.
pub const SQUARE_COLOR: LinearRgba = LinearRgba::new(0.2, 0.709_803_9, 0.898_039_2, 1.0);

/// Size of each overlay shape, as a fraction of the screen height.
const OVERLAY_SIZE: f32 = 0.25;
const TRIANGLE_CENTER: (f32, f32) = (-0.75, 0.75);
const SQUARE_CENTER: (f32, f32) = (0.75, 0.75);

#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
struct FlatUniforms {
    mvp: [[f32; 4]; 4],
    color: [f32; 4],
}

impl FlatUniforms {
    fn new(mvp: Mat4, color: LinearRgba) -> Self {
        Self {
            mvp: mvp.to_cols_array(),
            color: color.to_array(),
        }
    }
}

const VERTEX_ATTRIBUTES: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

/// One shape's uniform buffer and bind group.
#[derive(Debug)]
struct ShapeBinding {
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl ShapeBinding {
    fn new(device: &wgpu::Device, layout: &wgpu::BindGroupLayout, label: &str) -> Self {
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: std::mem::size_of::<FlatUniforms>() as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        Self {
            uniform_buffer,
            bind_group,
        }
    }
}

#[derive(Debug)]
pub struct FlatColorPass {
    pipeline: wgpu::RenderPipeline,
    triangle: Triangle,
    square: Square,
    triangle_vertices: wgpu::Buffer,
    square_vertices: wgpu::Buffer,
    square_indices: wgpu::Buffer,
    triangle_binding: ShapeBinding,
    square_binding: ShapeBinding,
}

impl FlatColorPass {
    pub fn new(context: &WgpuGraphicsContext) -> Result<Self, RenderError> {
        let device = context.device();
        let shader = context.create_shader_module("Flat Color Shader", FLAT_COLOR_WGSL)?;

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Flat Color Bind Group Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Flat Color Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Flat Color Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some(VERTEX_ENTRY),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<FlatVertex>() as wgpu::BufferAddress,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &VERTEX_ATTRIBUTES,
                }],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some(FRAGMENT_ENTRY),
                targets: &[Some(wgpu::ColorTargetState {
                    format: context.surface_format(),
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                ..Default::default()
            },
            // Overlays sit at depth 0 and always pass.
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: false,
                depth_compare: wgpu::CompareFunction::Always,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        let triangle = Triangle::new();
        let square = Square::new(SQUARE_COLOR);

        let triangle_vertices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Triangle Vertex Buffer"),
            contents: bytemuck::cast_slice(triangle.vertices()),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let square_vertices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Square Vertex Buffer"),
            contents: bytemuck::cast_slice(square.vertices()),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let square_indices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Square Index Buffer"),
            contents: bytemuck::cast_slice(square.indices()),
            usage: wgpu::BufferUsages::INDEX,
        });

        Ok(Self {
            pipeline,
            triangle,
            square,
            triangle_vertices,
            square_vertices,
            square_indices,
            triangle_binding: ShapeBinding::new(device, &bind_group_layout, "Triangle Uniforms"),
            square_binding: ShapeBinding::new(device, &bind_group_layout, "Square Uniforms"),
        })
    }

    /// Uploads both shapes' transforms for a `width` x `height` surface.
    pub fn prepare(&self, queue: &wgpu::Queue, width: u32, height: u32) {
        let (tx, ty) = TRIANGLE_CENTER;
        let (sx, sy) = SQUARE_CENTER;
        queue.write_buffer(
            &self.triangle_binding.uniform_buffer,
            0,
            bytemuck::bytes_of(&FlatUniforms::new(
                overlay_transform(width, height, tx, ty, OVERLAY_SIZE),
                self.triangle.color,
            )),
        );
        queue.write_buffer(
            &self.square_binding.uniform_buffer,
            0,
            bytemuck::bytes_of(&FlatUniforms::new(
                overlay_transform(width, height, sx, sy, OVERLAY_SIZE),
                self.square.color,
            )),
        );
    }

    /// Records both draws. Returns `(draw_calls, triangles)`.
    pub fn draw(&self, render_pass: &mut wgpu::RenderPass<'_>) -> (u32, u32) {
        render_pass.set_pipeline(&self.pipeline);

        render_pass.set_bind_group(0, &self.triangle_binding.bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.triangle_vertices.slice(..));
        render_pass.draw(0..self.triangle.vertices().len() as u32, 0..1);

        render_pass.set_bind_group(0, &self.square_binding.bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.square_vertices.slice(..));
        render_pass.set_index_buffer(self.square_indices.slice(..), wgpu::IndexFormat::Uint16);
        render_pass.draw_indexed(0..self.square.indices().len() as u32, 0, 0..1);

        (2, 1 + self.square.indices().len() as u32 / 3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniforms_match_wgsl_layout() {
        // mat4x4<f32> followed by vec4<f32>.
        assert_eq!(std::mem::size_of::<FlatUniforms>(), 80);
        assert_eq!(std::mem::offset_of!(FlatUniforms, color), 64);
    }

    #[test]
    fn uniforms_carry_shape_color() {
        let u = FlatUniforms::new(Mat4::IDENTITY, Triangle::COLOR);
        assert_eq!(u.color, Triangle::COLOR.to_array());
        assert_eq!(u.mvp, Mat4::IDENTITY.to_cols_array());
    }
}
