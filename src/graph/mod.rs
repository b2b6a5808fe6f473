//! The baked-in geometry of the 60-tile cube graph: adjacency, per-edge frame twists, and
//! each tile's fractional area on each of the six faces.

mod direction;
mod pieces;
mod tables;

pub use direction::Direction;
pub use pieces::PIECES;
pub use tables::{AREA, NEIGHBOUR, ROTATION};
