use crate::graph::{Direction, NEIGHBOUR, ROTATION};

/// Traces the four arms of a piece from `start` tile with initial rotation `rot`.
///
/// Each arm restarts from `start`/`rot` independently (the piece's arms all emanate from the
/// same root tile) and walks its directions in sequence, rotating the local frame as it
/// crosses each edge. Returns the 60-bit tile mask covered, or `None` if any arm would
/// revisit a tile already covered by an earlier arm (or by itself).
pub fn generate_walk(start: usize, rot: i32, arms: &[[Direction; 4]; 4]) -> Option<u64> {
    let mut tiles: u64 = 1 << start;

    for arm in arms {
        let mut pos = start;
        let mut frame = rot;

        for &dir in arm {
            if dir == Direction::Nop {
                break;
            }
            let next = dir.rotate(frame);
            let slot = next.slot();
            frame += ROTATION[pos][slot];
            pos = NEIGHBOUR[pos][slot];

            let bit = 1u64 << pos;
            if tiles & bit != 0 {
                return None;
            }
            tiles |= bit;
        }
    }

    Some(tiles)
}
