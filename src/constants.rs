//! Global constants shared across the generator, matrix, and driver.

/// Number of tiles on the cube's surface (six faces of ten tiles each).
pub const TILE_COUNT: usize = 60;

/// Number of distinct pentomino pieces, each placed exactly once.
pub const PIECE_COUNT: usize = 12;

/// Number of columns in the exact-cover matrix: one per tile, plus one per piece identity.
pub const COLUMN_COUNT: usize = TILE_COUNT + PIECE_COUNT;

/// Number of faces of the cube, used to index [`crate::graph::AREA`].
pub const FACE_COUNT: usize = 6;

/// Empirical per-piece weight ceiling used by the `check_max` heuristic.
///
/// A piece weighs at most 5 (five tiles fully inside one face); `29/6` is the tighter
/// bound the reference implementation's weight distribution actually achieves and the
/// `check_max` heuristic is calibrated against it specifically, not against the
/// theoretical maximum of 5.
pub const WEIGHT_UPPER_BOUND: f64 = 29.0 / 6.0;

/// The `|current_score - best_score| < SCORE_EPSILON` tolerance used to decide whether a
/// solution is "tied for best" and therefore worth printing.
pub const SCORE_EPSILON: f64 = 0.001;
