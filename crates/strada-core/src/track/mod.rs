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

//! The procedural ground mesh.
//!
//! The ground is a flat 256x256 height field spanning `[-512, 512]` on X and
//! `[0, -1024]` on Z, rendered as a single triangle strip. Its height is always
//! zero; lanes and the illusion of depth come from vertex colors only (see
//! [`bands`]).
//!
//! The mesh content never changes, but it is regenerated every frame into the
//! same pair of buffers. [`TrackMesh`] owns those buffers and never reallocates them.

pub mod bands;
pub mod strip;

pub use self::bands::{ground_color, BandShades, LaneBand, Shade, BAND_PERIOD};
pub use self::strip::{
    write_indices, DEGENERATE_COUNT, INDEX_COUNT, STRIP_COUNT, VERTICES_PER_STRIP,
};

use crate::math::lerp;

/// Number of grid vertices along each axis.
pub const GRID_SIZE: usize = 256;

/// Total number of vertices in the grid.
pub const VERTEX_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// World X of the first grid column.
pub const X_MIN: f32 = -512.0;
/// World X of the last grid column.
pub const X_MAX: f32 = 512.0;
/// World Z of the last grid row, closest to the camera.
pub const Z_MIN: f32 = 0.0;
/// World Z of the first grid row, farthest from the camera.
pub const Z_MAX: f32 = -1024.0;

/// The up vector shared by every ground vertex.
pub const GROUND_NORMAL: [f32; 3] = [0.0, 1.0, 0.0];

/// A single vertex of the ground mesh.
///
/// Ten floats, 40 bytes: position, normal, color, in that order.
#[derive(Debug, Default, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct TrackVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 4],
}

/// Returns the world-space position of the grid vertex at column `x` of row `z`.
///
/// X interpolates the column over `[X_MIN, X_MAX]`. Z is inverted: row 0 lands
/// on `Z_MAX` and row 255 on `Z_MIN`.
#[inline]
pub fn grid_position(x: usize, z: usize) -> [f32; 3] {
    let last = (GRID_SIZE - 1) as f32;
    let world_x = lerp(X_MIN, X_MAX, x as f32 / last);
    let world_z = lerp(Z_MIN, Z_MAX, 1.0 - z as f32 / last);
    [world_x, 0.0, world_z]
}

/// Fills `vertices` with the whole grid, row-major by depth then width.
pub fn write_vertices(vertices: &mut [TrackVertex]) {
    debug_assert_eq!(vertices.len(), VERTEX_COUNT);

    for (z, row) in vertices.chunks_exact_mut(GRID_SIZE).enumerate() {
        for (x, vertex) in row.iter_mut().enumerate() {
            let position = grid_position(x, z);
            *vertex = TrackVertex {
                position,
                normal: GROUND_NORMAL,
                color: ground_color(position[0], position[2]).to_array(),
            };
        }
    }
}

/// Owns the ground's vertex and index buffers.
///
/// Both buffers are allocated once with their final size.
/// [`TrackMesh::regenerate`] overwrites them in place.
pub struct TrackMesh {
    vertices: Box<[TrackVertex]>,
    indices: Box<[u16]>,
}

impl TrackMesh {
    /// Allocates the buffers and generates the mesh once.
    pub fn new() -> Self {
        let mut mesh = Self {
            vertices: vec![TrackVertex::default(); VERTEX_COUNT].into_boxed_slice(),
            indices: vec![0; INDEX_COUNT].into_boxed_slice(),
        };
        mesh.regenerate();
        log::debug!(
            "TrackMesh allocated: {} vertices ({} bytes), {} indices ({} bytes).",
            mesh.vertices.len(),
            mesh.vertex_bytes().len(),
            mesh.indices.len(),
            mesh.index_bytes().len()
        );
        mesh
    }

    /// Rewrites every vertex and index.
    pub fn regenerate(&mut self) {
        write_vertices(&mut self.vertices);
        write_indices(&mut self.indices);
    }

    pub fn vertices(&self) -> &[TrackVertex] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u16] {
        &self.indices
    }

    /// The vertex buffer as raw bytes, ready for upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// The index buffer as raw bytes (16-bit indices).
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Number of triangles the strip rasterizes, degenerate ones included.
    pub fn triangle_count(&self) -> u32 {
        (self.indices.len() - 2) as u32
    }
}

impl Default for TrackMesh {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TrackMesh {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrackMesh")
            .field("vertices", &self.vertices.len())
            .field("indices", &self.indices.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layout() {
        assert_eq!(std::mem::size_of::<TrackVertex>(), 40);
        assert_eq!(std::mem::offset_of!(TrackVertex, normal), 12);
        assert_eq!(std::mem::offset_of!(TrackVertex, color), 24);
    }

    #[test]
    fn test_grid_corners() {
        assert_eq!(grid_position(0, 0), [-512.0, 0.0, -1024.0]);
        assert_eq!(grid_position(255, 0), [512.0, 0.0, -1024.0]);
        assert_eq!(grid_position(0, 255), [-512.0, 0.0, 0.0]);
        assert_eq!(grid_position(255, 255), [512.0, 0.0, 0.0]);
    }

    #[test]
    fn test_rows_move_toward_camera() {
        let far = grid_position(10, 0)[2];
        let near = grid_position(10, 1)[2];
        assert!(near > far);
    }

    #[test]
    fn test_mesh_buffer_sizes() {
        let mesh = TrackMesh::new();
        assert_eq!(mesh.vertices().len(), VERTEX_COUNT);
        assert_eq!(mesh.indices().len(), INDEX_COUNT);
        assert_eq!(mesh.vertex_bytes().len(), VERTEX_COUNT * 40);
        assert_eq!(mesh.index_bytes().len(), INDEX_COUNT * 2);
        assert_eq!(mesh.triangle_count(), INDEX_COUNT as u32 - 2);
    }

    #[test]
    fn test_regenerate_reuses_buffers() {
        let mut mesh = TrackMesh::new();
        let vertex_ptr = mesh.vertices().as_ptr();
        let index_ptr = mesh.indices().as_ptr();
        mesh.regenerate();
        assert_eq!(mesh.vertices().as_ptr(), vertex_ptr);
        assert_eq!(mesh.indices().as_ptr(), index_ptr);
    }

    #[test]
    fn test_vertex_color_matches_palette() {
        let mesh = TrackMesh::new();
        // Column 128 sits just right of the center line, on the road.
        let v = mesh.vertices()[255 * GRID_SIZE + 128];
        assert_eq!(v.normal, GROUND_NORMAL);
        assert_eq!(v.color, ground_color(v.position[0], v.position[2]).to_array());
        assert_eq!(LaneBand::classify(v.position[0]), LaneBand::Road);
    }
}
