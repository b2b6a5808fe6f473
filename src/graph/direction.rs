/// A step direction in the walker's local frame, or [`Direction::Nop`] which terminates a
/// walk-step early.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Nop,
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Index into [`crate::graph::NEIGHBOUR`]/[`crate::graph::ROTATION`]'s second dimension.
    /// Only meaningful for non-`Nop` directions.
    pub fn slot(self) -> usize {
        match self {
            Direction::Nop => unreachable!("Nop has no neighbour slot"),
            Direction::Up => 0,
            Direction::Right => 1,
            Direction::Down => 2,
            Direction::Left => 3,
        }
    }

    /// Rotates by `rot` right-quarter-turns modulo 4. Identity on `Nop`.
    pub fn rotate(self, rot: i32) -> Direction {
        if self == Direction::Nop {
            return Direction::Nop;
        }
        let slot = self.slot() as i32;
        let rotated = (slot + rot).rem_euclid(4);
        match rotated {
            0 => Direction::Up,
            1 => Direction::Right,
            2 => Direction::Down,
            _ => Direction::Left,
        }
    }

    /// Swaps `Right`/`Left`, leaves `Up`/`Down`/`Nop` untouched.
    pub fn flip(self) -> Direction {
        match self {
            Direction::Right => Direction::Left,
            Direction::Left => Direction::Right,
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotate_nop_is_identity() {
        for rot in -8..8 {
            assert_eq!(Direction::Nop.rotate(rot), Direction::Nop);
        }
    }

    #[test]
    fn rotate_cycles_through_four_quarters() {
        assert_eq!(Direction::Up.rotate(0), Direction::Up);
        assert_eq!(Direction::Up.rotate(1), Direction::Right);
        assert_eq!(Direction::Up.rotate(2), Direction::Down);
        assert_eq!(Direction::Up.rotate(3), Direction::Left);
        assert_eq!(Direction::Up.rotate(4), Direction::Up);
    }

    #[test]
    fn rotate_handles_negative_rotations() {
        assert_eq!(Direction::Up.rotate(-1), Direction::Left);
    }

    #[test]
    fn flip_is_involutive() {
        for d in [
            Direction::Nop,
            Direction::Up,
            Direction::Right,
            Direction::Down,
            Direction::Left,
        ] {
            assert_eq!(d.flip().flip(), d);
        }
    }

    #[test]
    fn flip_swaps_right_and_left_only() {
        assert_eq!(Direction::Right.flip(), Direction::Left);
        assert_eq!(Direction::Left.flip(), Direction::Right);
        assert_eq!(Direction::Up.flip(), Direction::Up);
        assert_eq!(Direction::Down.flip(), Direction::Down);
        assert_eq!(Direction::Nop.flip(), Direction::Nop);
    }
}
