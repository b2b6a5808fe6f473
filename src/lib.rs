//! Enumerates maximum-score tilings of a 60-tile cube graph by twelve pentomino pieces,
//! using an exact-cover / dancing-links search with pluggable pruning heuristics.

pub mod cli;
pub mod constants;
pub mod dlx;
pub mod driver;
pub mod errors;
pub mod generator;
pub mod graph;
pub mod logging;

use crate::constants::COLUMN_COUNT;
use crate::dlx::Dlx;
use crate::driver::SearchContext;
use crate::errors::Result;
use crate::generator::{generate_all, PlacementList};

/// Builds the exact-cover matrix over every candidate placement and returns it alongside the
/// search context the solver drives. Row `i` of the returned matrix corresponds to
/// `placements[i]`.
pub fn build_matrix() -> Result<(Dlx, SearchContext)> {
    let placements = generate_all();
    if placements.is_empty() {
        return Err(errors::AppError::EmptyPieceTable);
    }

    let mut dlx = Dlx::new(COLUMN_COUNT);
    for placement in &placements {
        let columns: Vec<usize> = (0..COLUMN_COUNT).filter(|&c| placement.column_set(c)).collect();
        dlx.add_row(&columns)?;
    }

    let context = SearchContext::new(PlacementList::new(placements));
    Ok((dlx, context))
}
