use crate::constants::PIECE_COUNT;
use crate::graph::Direction;

use Direction::{Down as D, Left as L, Nop as X, Right as R, Up as U};

/// Each piece is up to four independent "arms" from a shared root tile, each arm up to four
/// steps long. `Nop` both pads unused steps within an arm and marks unused arms entirely.
#[rustfmt::skip]
pub const PIECES: [[[Direction; 4]; 4]; PIECE_COUNT] = [
    [[U, U, U, U], [X, X, X, X], [X, X, X, X], [X, X, X, X]],
    [[U, R, X, X], [L, X, X, X], [D, X, X, X], [X, X, X, X]],
    [[D, D, D, R], [X, X, X, X], [X, X, X, X], [X, X, X, X]],
    [[U, U, R, D], [X, X, X, X], [X, X, X, X], [X, X, X, X]],
    [[U, R, U, U], [X, X, X, X], [X, X, X, X], [X, X, X, X]],
    [[L, X, X, X], [R, X, X, X], [D, D, X, X], [X, X, X, X]],
    [[D, R, R, U], [X, X, X, X], [X, X, X, X], [X, X, X, X]],
    [[R, R, U, U], [X, X, X, X], [X, X, X, X], [X, X, X, X]],
    [[R, U, R, U], [X, X, X, X], [X, X, X, X], [X, X, X, X]],
    [[U, X, X, X], [R, X, X, X], [D, X, X, X], [L, X, X, X]],
    [[U, X, X, X], [L, X, X, X], [D, D, X, X], [X, X, X, X]],
    [[R, U, U, R], [X, X, X, X], [X, X, X, X], [X, X, X, X]],
];
