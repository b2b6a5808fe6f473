//! The three static tables describing the cube's surface as a 4-regular graph.
//!
//! Tiles are numbered 0..60. Each tile has four neighbours, one per [`crate::graph::Direction`]
//! slot (`UP`, `RIGHT`, `DOWN`, `LEFT`). Crossing some edges twists the walker's local frame;
//! [`ROTATION`] records the twist (in right-quarter-turns) applied at each such edge. [`AREA`]
//! gives each tile's fractional area contribution to each of the six cube faces.

use crate::constants::{FACE_COUNT, TILE_COUNT};

/// `NEIGHBOUR[tile][slot]` is the tile reached by stepping in direction `slot` from `tile`.
/// Symmetric as an undirected graph.
#[rustfmt::skip]
pub const NEIGHBOUR: [[usize; 4]; TILE_COUNT] = [
    [55, 15,  4, 59], [57,  2,  5, 56], [58,  3,  6,  1], [59,  4,  7,  2],
    [ 0, 14,  8,  3], [ 1,  6,  9, 22], [ 2,  7, 10,  5], [ 3,  8, 11,  6],
    [ 4, 13, 12,  7], [ 5, 10, 16, 23], [ 6, 11, 16,  9], [ 7, 12, 17, 10],
    [ 8, 13, 18, 11], [ 8, 14, 19, 12], [ 4, 15, 20, 13], [ 0, 51, 21, 14],
    [10, 17, 24,  9], [11, 18, 25, 16], [12, 19, 26, 17], [13, 20, 27, 18],
    [14, 21, 34, 19], [15, 47, 38, 20], [ 5, 23, 28, 56], [ 9, 24, 29, 22],
    [16, 25, 30, 23], [17, 26, 31, 24], [18, 27, 32, 25], [19, 34, 33, 26],
    [22, 29, 43, 52], [23, 30, 39, 28], [24, 31, 35, 29], [25, 32, 35, 30],
    [26, 33, 36, 31], [27, 34, 37, 32], [27, 20, 38, 33], [31, 36, 39, 30],
    [32, 37, 40, 35], [33, 38, 41, 36], [34, 21, 42, 37], [35, 40, 43, 29],
    [36, 41, 44, 39], [37, 42, 45, 40], [38, 47, 46, 41], [39, 44, 48, 28],
    [40, 45, 48, 43], [41, 46, 49, 44], [42, 47, 50, 45], [42, 21, 51, 46],
    [44, 49, 52, 43], [45, 50, 53, 48], [46, 51, 54, 49], [47, 15, 55, 50],
    [48, 53, 56, 28], [49, 54, 57, 52], [50, 55, 58, 53], [51,  0, 59, 54],
    [52, 57,  1, 22], [53, 58,  1, 56], [54, 59,  2, 57], [55,  0,  3, 58],
];

/// `ROTATION[tile][slot]` is the number of right-quarter-turns added to the walker's
/// rotation state when it crosses the edge from `tile` in direction `slot`.
#[rustfmt::skip]
pub const ROTATION: [[i32; 4]; TILE_COUNT] = [
    [3, 1, 0, 0], [0, 0, 0, 1], [0, 0, 0, 0], [0, 0, 0, 0],
    [0, 1, 0, 0], [0, 0, 0, 3], [0, 0, 0, 0], [0, 0, 0, 0],
    [0, 1, 0, 0], [0, 0, 3, 3], [0, 0, 0, 0], [0, 0, 0, 0],
    [0, 0, 0, 0], [3, 0, 0, 0], [3, 0, 0, 0], [3, 2, 0, 0],
    [0, 0, 0, 1], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0],
    [0, 0, 1, 0], [0, 2, 1, 0], [1, 0, 0, 2], [1, 0, 0, 0],
    [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 1, 0, 0],
    [0, 0, 3, 2], [0, 0, 3, 0], [0, 0, 3, 0], [0, 0, 0, 0],
    [0, 0, 0, 0], [0, 0, 0, 0], [3, 3, 0, 0], [0, 0, 0, 1],
    [0, 0, 0, 0], [0, 0, 0, 0], [0, 3, 0, 0], [0, 0, 0, 1],
    [0, 0, 0, 0], [0, 0, 0, 0], [0, 1, 0, 0], [0, 0, 3, 1],
    [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [3, 2, 0, 0],
    [0, 0, 0, 1], [0, 0, 0, 0], [0, 0, 0, 0], [0, 2, 0, 0],
    [0, 0, 0, 2], [0, 0, 0, 0], [0, 0, 0, 0], [0, 1, 0, 0],
    [0, 0, 3, 2], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0],
];

const S: f64 = 1.0 / 6.0;
const M: f64 = 1.0 / 2.0;
const B: f64 = 5.0 / 6.0;
const N: f64 = 1.0;

/// `AREA[tile][face]` is the fraction of `tile`'s area that lies on `face`. Each row sums
/// to 1 and has at most two non-zero entries.
#[rustfmt::skip]
pub const AREA: [[f64; FACE_COUNT]; TILE_COUNT] = [
    [S, 0.0, 0.0, B, 0.0, 0.0], [B, S, 0.0, 0.0, 0.0, 0.0],
    [N, 0.0, 0.0, 0.0, 0.0, 0.0], [N, 0.0, 0.0, 0.0, 0.0, 0.0],
    [M, 0.0, 0.0, M, 0.0, 0.0], [M, M, 0.0, 0.0, 0.0, 0.0],
    [N, 0.0, 0.0, 0.0, 0.0, 0.0], [N, 0.0, 0.0, 0.0, 0.0, 0.0],
    [B, 0.0, 0.0, S, 0.0, 0.0], [S, B, 0.0, 0.0, 0.0, 0.0],
    [B, 0.0, S, 0.0, 0.0, 0.0], [M, 0.0, M, 0.0, 0.0, 0.0],
    [S, 0.0, B, 0.0, 0.0, 0.0], [0.0, 0.0, S, B, 0.0, 0.0],
    [0.0, 0.0, 0.0, N, 0.0, 0.0], [0.0, 0.0, 0.0, N, 0.0, 0.0],
    [0.0, S, B, 0.0, 0.0, 0.0], [0.0, 0.0, N, 0.0, 0.0, 0.0],
    [0.0, 0.0, N, 0.0, 0.0, 0.0], [0.0, 0.0, M, M, 0.0, 0.0],
    [0.0, 0.0, 0.0, N, 0.0, 0.0], [0.0, 0.0, 0.0, N, 0.0, 0.0],
    [0.0, N, 0.0, 0.0, 0.0, 0.0], [0.0, N, 0.0, 0.0, 0.0, 0.0],
    [0.0, M, M, 0.0, 0.0, 0.0], [0.0, 0.0, N, 0.0, 0.0, 0.0],
    [0.0, 0.0, N, 0.0, 0.0, 0.0], [0.0, 0.0, B, S, 0.0, 0.0],
    [0.0, N, 0.0, 0.0, 0.0, 0.0], [0.0, N, 0.0, 0.0, 0.0, 0.0],
    [0.0, B, S, 0.0, 0.0, 0.0], [0.0, 0.0, B, 0.0, S, 0.0],
    [0.0, 0.0, M, 0.0, M, 0.0], [0.0, 0.0, S, 0.0, B, 0.0],
    [0.0, 0.0, 0.0, B, S, 0.0], [0.0, S, 0.0, 0.0, B, 0.0],
    [0.0, 0.0, 0.0, 0.0, N, 0.0], [0.0, 0.0, 0.0, 0.0, N, 0.0],
    [0.0, 0.0, 0.0, M, M, 0.0], [0.0, M, 0.0, 0.0, M, 0.0],
    [0.0, 0.0, 0.0, 0.0, N, 0.0], [0.0, 0.0, 0.0, 0.0, N, 0.0],
    [0.0, 0.0, 0.0, S, B, 0.0], [0.0, B, 0.0, 0.0, S, 0.0],
    [0.0, 0.0, 0.0, 0.0, B, S], [0.0, 0.0, 0.0, 0.0, M, M],
    [0.0, 0.0, 0.0, 0.0, S, B], [0.0, 0.0, 0.0, B, 0.0, S],
    [0.0, S, 0.0, 0.0, 0.0, B], [0.0, 0.0, 0.0, 0.0, 0.0, N],
    [0.0, 0.0, 0.0, 0.0, 0.0, N], [0.0, 0.0, 0.0, M, 0.0, M],
    [0.0, M, 0.0, 0.0, 0.0, M], [0.0, 0.0, 0.0, 0.0, 0.0, N],
    [0.0, 0.0, 0.0, 0.0, 0.0, N], [0.0, 0.0, 0.0, S, 0.0, B],
    [0.0, B, 0.0, 0.0, 0.0, S], [S, 0.0, 0.0, 0.0, 0.0, B],
    [M, 0.0, 0.0, 0.0, 0.0, M], [B, 0.0, 0.0, 0.0, 0.0, S],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbour_graph_is_symmetric() {
        for tile in 0..TILE_COUNT {
            for slot in 0..4 {
                let other = NEIGHBOUR[tile][slot];
                let back_edges: Vec<usize> = (0..4)
                    .filter(|&s| NEIGHBOUR[other][s] == tile)
                    .collect();
                assert!(
                    !back_edges.is_empty(),
                    "tile {tile} slot {slot} -> {other} has no return edge"
                );
            }
        }
    }

    #[test]
    fn area_rows_sum_to_one_with_at_most_two_faces() {
        for tile in 0..TILE_COUNT {
            let row = AREA[tile];
            let sum: f64 = row.iter().sum();
            assert!((sum - 1.0).abs() < 1e-9, "tile {tile} area sums to {sum}");
            let nonzero = row.iter().filter(|&&v| v > 0.0).count();
            assert!(nonzero <= 2, "tile {tile} touches {nonzero} faces");
        }
    }
}
