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

//! Triangle-strip index layout for the ground grid.

use super::GRID_SIZE;

/// Number of strips, one per pair of neighbouring grid rows.
pub const STRIP_COUNT: usize = GRID_SIZE - 1;

/// Indices emitted by the body of a single strip.
pub const VERTICES_PER_STRIP: usize = 2 * GRID_SIZE;

/// Repeated indices stitching the strips together: one after every strip but
/// the last, one before every strip but the first.
pub const DEGENERATE_COUNT: usize = 2 * (STRIP_COUNT - 1);

/// Total length of the index buffer.
pub const INDEX_COUNT: usize = VERTICES_PER_STRIP * STRIP_COUNT + DEGENERATE_COUNT;

/// Index of the grid vertex at column `x` of row `z`.
#[inline]
const fn vertex_index(x: usize, z: usize) -> u16 {
    (z * GRID_SIZE + x) as u16
}

/// Fills `indices` with every row strip, joined into one continuous strip.
///
/// Strip `z` zig-zags between row `z` and row `z + 1`. Between two strips the
/// last vertex of the previous one and the first vertex of the next one are
/// repeated, which produces zero-area triangles the rasterizer discards.
pub fn write_indices(indices: &mut [u16]) {
    debug_assert_eq!(indices.len(), INDEX_COUNT);

    let mut offset = 0;
    let mut push = |index: u16| {
        indices[offset] = index;
        offset += 1;
    };

    for z in 0..STRIP_COUNT {
        if z > 0 {
            push(vertex_index(0, z));
        }

        for x in 0..GRID_SIZE {
            push(vertex_index(x, z));
            push(vertex_index(x, z + 1));
        }

        if z < STRIP_COUNT - 1 {
            push(vertex_index(GRID_SIZE - 1, z + 1));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build() -> Vec<u16> {
        let mut indices = vec![0u16; INDEX_COUNT];
        write_indices(&mut indices);
        indices
    }

    #[test]
    fn test_index_count() {
        assert_eq!(INDEX_COUNT, 2 * 256 * 255 + 2 * 254);
        assert_eq!(DEGENERATE_COUNT, 508);
    }

    #[test]
    fn test_first_strip_zig_zags_between_rows() {
        let indices = build();
        assert_eq!(&indices[..6], &[0, 256, 1, 257, 2, 258]);
        assert_eq!(indices[VERTICES_PER_STRIP - 2], 255);
        assert_eq!(indices[VERTICES_PER_STRIP - 1], 511);
    }

    #[test]
    fn test_strips_are_joined_by_degenerates() {
        let indices = build();
        // End of strip 0, then the join into strip 1.
        let join = VERTICES_PER_STRIP;
        assert_eq!(indices[join - 1], 511);
        assert_eq!(indices[join], 511);
        assert_eq!(indices[join + 1], 256);
        assert_eq!(indices[join + 2], 256);
        assert_eq!(indices[join + 3], 512);
    }

    #[test]
    fn test_last_strip_ends_on_last_vertex() {
        let indices = build();
        assert_eq!(indices[INDEX_COUNT - 1], u16::MAX);
        assert_eq!(indices[INDEX_COUNT - 2], 255 * 256 - 1);
        // The last strip has no trailing degenerate.
        assert_ne!(indices[INDEX_COUNT - 1], indices[INDEX_COUNT - 3]);
    }
}
