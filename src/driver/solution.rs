//! Formats a discovered tiling to standard output.

use std::io::{self, Write};

use crate::constants::{PIECE_COUNT, TILE_COUNT};
use crate::generator::PlacementList;

/// Prints `Score: <f>` followed by one line per placement (most recent first, tile indices
/// ascending then `[piece]`), then a blank line, then flushes.
pub(crate) fn print_solution(placements: &PlacementList, score: f64, path: &[usize]) {
    println!("Score: {score}");
    for &row in path {
        let placement = placements.placement(row);
        let mut tokens: Vec<String> = placement.tile_indices().map(|t| t.to_string()).collect();
        for p in 0..PIECE_COUNT {
            if placement.column_set(TILE_COUNT + p) {
                tokens.push(format!("[{p}]"));
            }
        }
        println!("{}", tokens.join(" "));
    }
    println!();
    let _ = io::stdout().flush();
}
