//! Builds every candidate pentomino placement on the cube graph: one walk per piece, starting
//! tile, initial rotation, and chirality, deduplicated and sorted by descending weight.

mod placement;
mod placement_list;
mod walk;

pub use placement::Placement;
pub use placement_list::PlacementList;
pub use walk::generate_walk;

use crate::constants::{PIECE_COUNT, TILE_COUNT};
use crate::graph::{Direction, PIECES};
use std::collections::HashSet;

/// Generates every valid placement across all 12 pieces, both chiralities, all 60 start
/// tiles, and all 4 initial rotations; deduplicates identical `(tiles, piece)` pairs and
/// returns them sorted by descending weight (ties broken arbitrarily, matching a non-stable
/// sort).
pub fn generate_all() -> Vec<Placement> {
    let mut seen = HashSet::new();
    let mut placements = Vec::new();

    for (piece_idx, arms) in PIECES.iter().enumerate() {
        let flipped = flip_arms(arms);

        for start in 0..TILE_COUNT {
            for rot in 1..=4 {
                for candidate in [arms, &flipped] {
                    if let Some(tiles) = walk::generate_walk(start, rot, candidate) {
                        if seen.insert((tiles, piece_idx as u8)) {
                            placements.push(Placement::new(tiles, piece_idx as u8));
                        }
                    }
                }
            }
        }
    }

    placements.sort_by(|a, b| b.weight().partial_cmp(&a.weight()).unwrap());
    placements
}

fn flip_arms(arms: &[[Direction; 4]; 4]) -> [[Direction; 4]; 4] {
    let mut out = *arms;
    for arm in out.iter_mut() {
        for dir in arm.iter_mut() {
            *dir = dir.flip();
        }
    }
    out
}
