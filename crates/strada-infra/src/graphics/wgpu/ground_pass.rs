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

//! Draws the ground mesh.

use strada_core::math::Mat4;
use strada_core::renderer::RenderError;
use strada_core::track::{TrackMesh, TrackVertex, INDEX_COUNT, VERTEX_COUNT};
use wgpu::util::DeviceExt;

use super::context::{WgpuGraphicsContext, DEPTH_FORMAT};
use super::shaders::{FRAGMENT_ENTRY, GROUND_WGSL, VERTEX_ENTRY};

#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
struct GroundUniforms {
    mvp: [[f32; 4]; 4],
}

const VERTEX_ATTRIBUTES: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
    0 => Float32x3,
    1 => Float32x3,
    2 => Float32x4
];

/// Buffer layout matching [`TrackVertex`]: position, normal, color.
pub fn track_vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<TrackVertex>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &VERTEX_ATTRIBUTES,
    }
}

/// Copies 16-bit strip indices into a 32-bit upload buffer.
///
/// Strip topologies need a strip index format, and with `Uint16` the value
/// `0xFFFF` restarts the strip. That value is also the index of the last grid
/// vertex, so the ground is always drawn with 32-bit indices.
pub fn widen_indices(src: &[u16], dst: &mut [u32]) {
    debug_assert_eq!(src.len(), dst.len());
    for (wide, &narrow) in dst.iter_mut().zip(src) {
        *wide = u32::from(narrow);
    }
}

/// Pipeline and GPU buffers of the ground.
///
/// The mesh is regenerated on the CPU and uploaded every frame into buffers
/// created once at their final size.
#[derive(Debug)]
pub struct GroundPass {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    mesh: TrackMesh,
    wide_indices: Box<[u32]>,
}

impl GroundPass {
    pub fn new(context: &WgpuGraphicsContext) -> Result<Self, RenderError> {
        let device = context.device();
        let shader = context.create_shader_module("Ground Shader", GROUND_WGSL)?;

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Ground Bind Group Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Ground Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Ground Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some(VERTEX_ENTRY),
                buffers: &[track_vertex_layout()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some(FRAGMENT_ENTRY),
                targets: &[Some(wgpu::ColorTargetState {
                    format: context.surface_format(),
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleStrip,
                strip_index_format: Some(wgpu::IndexFormat::Uint32),
                front_face: wgpu::FrontFace::Ccw,
                // Strip winding flips every triangle and at every join.
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        let vertex_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Ground Vertex Buffer"),
            size: (VERTEX_COUNT * std::mem::size_of::<TrackVertex>()) as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let index_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Ground Index Buffer"),
            size: (INDEX_COUNT * std::mem::size_of::<u32>()) as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Ground Uniform Buffer"),
            contents: bytemuck::bytes_of(&GroundUniforms {
                mvp: Mat4::IDENTITY.to_cols_array(),
            }),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Ground Bind Group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        log::info!(
            "GroundPass created: {} vertices, {} indices.",
            VERTEX_COUNT,
            INDEX_COUNT
        );

        Ok(Self {
            pipeline,
            vertex_buffer,
            index_buffer,
            uniform_buffer,
            bind_group,
            mesh: TrackMesh::new(),
            wide_indices: vec![0u32; INDEX_COUNT].into_boxed_slice(),
        })
    }

    /// Regenerates the mesh and uploads it along with the MVP matrix.
    pub fn prepare(&mut self, queue: &wgpu::Queue, mvp: &Mat4) {
        self.mesh.regenerate();
        widen_indices(self.mesh.indices(), &mut self.wide_indices);

        queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::bytes_of(&GroundUniforms {
                mvp: mvp.to_cols_array(),
            }),
        );
        queue.write_buffer(&self.vertex_buffer, 0, self.mesh.vertex_bytes());
        queue.write_buffer(
            &self.index_buffer,
            0,
            bytemuck::cast_slice(&self.wide_indices),
        );
    }

    /// Records the single indexed strip draw. Returns the triangle count.
    pub fn draw(&self, render_pass: &mut wgpu::RenderPass<'_>) -> u32 {
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        render_pass.draw_indexed(0..INDEX_COUNT as u32, 0, 0..1);
        self.mesh.triangle_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_matches_track_vertex() {
        let layout = track_vertex_layout();
        assert_eq!(layout.array_stride, 40);
        assert_eq!(layout.attributes[0].offset, 0);
        assert_eq!(layout.attributes[1].offset, 12);
        assert_eq!(layout.attributes[2].offset, 24);
        assert_eq!(
            layout.attributes[2].offset,
            std::mem::offset_of!(TrackVertex, color) as u64
        );
    }

    #[test]
    fn widened_indices_keep_the_last_vertex() {
        let mesh = TrackMesh::new();
        let mut wide = vec![0u32; INDEX_COUNT];
        widen_indices(mesh.indices(), &mut wide);
        assert_eq!(wide[INDEX_COUNT - 1], 0xFFFF);
        assert!(mesh
            .indices()
            .iter()
            .zip(&wide)
            .all(|(&n, &w)| n as u32 == w));
    }

    #[test]
    fn uniform_size_is_one_matrix() {
        assert_eq!(std::mem::size_of::<GroundUniforms>(), 64);
    }
}
