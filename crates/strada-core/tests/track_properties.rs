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

//! End-to-end checks of the generated ground mesh.

use approx::assert_relative_eq;
use strada_core::math::lerp;
use strada_core::track::{
    ground_color, TrackMesh, GRID_SIZE, INDEX_COUNT, VERTEX_COUNT, X_MAX, X_MIN, Z_MAX, Z_MIN,
};

fn vertex_at(mesh: &TrackMesh, x: usize, z: usize) -> strada_core::track::TrackVertex {
    mesh.vertices()[z * GRID_SIZE + x]
}

#[test]
fn positions_interpolate_the_world_extents() {
    let mesh = TrackMesh::new();
    let last = (GRID_SIZE - 1) as f32;

    for z in 0..GRID_SIZE {
        for x in 0..GRID_SIZE {
            let [px, py, pz] = vertex_at(&mesh, x, z).position;
            assert_relative_eq!(px, lerp(X_MIN, X_MAX, x as f32 / last), epsilon = 1e-3);
            assert_eq!(py, 0.0);
            assert_relative_eq!(
                pz,
                lerp(Z_MIN, Z_MAX, (GRID_SIZE - 1 - z) as f32 / last),
                epsilon = 1e-3
            );
        }
    }

    // Boundary-exact corners.
    assert_eq!(vertex_at(&mesh, 0, 0).position[0], -512.0);
    assert_eq!(vertex_at(&mesh, 255, 0).position[0], 512.0);
    assert_eq!(vertex_at(&mesh, 0, 0).position[2], -1024.0);
    assert_eq!(vertex_at(&mesh, 0, 255).position[2], 0.0);
}

#[test]
fn positions_are_monotonic() {
    let mesh = TrackMesh::new();
    for i in 1..GRID_SIZE {
        assert!(vertex_at(&mesh, i, 0).position[0] > vertex_at(&mesh, i - 1, 0).position[0]);
        assert!(vertex_at(&mesh, 0, i).position[2] > vertex_at(&mesh, 0, i - 1).position[2]);
    }
}

#[test]
fn every_normal_points_up() {
    let mesh = TrackMesh::new();
    assert!(mesh.vertices().iter().all(|v| v.normal == [0.0, 1.0, 0.0]));
}

#[test]
fn colors_are_symmetric_in_x() {
    let mesh = TrackMesh::new();
    for v in mesh.vertices() {
        let [px, _, pz] = v.position;
        assert_eq!(ground_color(px, pz), ground_color(-px, pz));
    }

    let mut x = 0.0;
    while x <= 512.0 {
        for z in [0.0, -17.0, -40.0, -500.0, -1024.0] {
            assert_eq!(ground_color(x, z), ground_color(-x, z));
        }
        x += 0.25;
    }
}

#[test]
fn colors_repeat_every_two_bands_in_z() {
    // Checked over the visible ground, where z and z + 64 lie on the same side of 0.
    for x in [0.0_f32, 20.0, 50.0, 70.0, 200.0, -20.0, -70.0] {
        let mut z = -1024.0_f32;
        while z <= -64.0 {
            assert_eq!(
                ground_color(x, z),
                ground_color(x, z + 64.0),
                "x = {x}, z = {z}"
            );
            z += 0.5;
        }
    }
}

#[test]
fn colors_alternate_within_a_band() {
    for x in [0.0_f32, 20.0, 70.0, 200.0] {
        assert_ne!(ground_color(x, -10.0), ground_color(x, -40.0));
    }
}

#[test]
fn index_buffer_has_expected_length_and_range() {
    let mesh = TrackMesh::new();
    let indices = mesh.indices();
    assert_eq!(indices.len(), 2 * 256 * 255 + 2 * 254);
    assert_eq!(indices.len(), INDEX_COUNT);
    assert!(indices.iter().all(|&i| (i as usize) < VERTEX_COUNT));
    assert!(indices.iter().all(|&i| (i as usize) < 256 * 256));
}

#[test]
fn regeneration_is_byte_identical() {
    let mut mesh = TrackMesh::new();
    let vertices = mesh.vertex_bytes().to_vec();
    let indices = mesh.index_bytes().to_vec();

    mesh.regenerate();
    mesh.regenerate();

    assert_eq!(mesh.vertex_bytes(), vertices.as_slice());
    assert_eq!(mesh.index_bytes(), indices.as_slice());
    assert_eq!(TrackMesh::new().vertex_bytes(), vertices.as_slice());
}
