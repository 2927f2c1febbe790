//! The four-way `uldr` direction set.
//!
//! Rotation and displacement used to be dictionary lookups keyed by the
//! raw symbol; a closed enum makes every dispatch an exhaustive match and
//! confines the bad-symbol case to `from_symbol`.

use crate::error::GameError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Left,
    Down,
    Right,
}

/// All four directions, in `uldr` order.
pub const DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Left,
    Direction::Down,
    Direction::Right,
];

impl Direction {
    pub fn from_symbol(symbol: char) -> Result<Self, GameError> {
        match symbol {
            'u' => Ok(Direction::Up),
            'l' => Ok(Direction::Left),
            'd' => Ok(Direction::Down),
            'r' => Ok(Direction::Right),
            other => Err(GameError::InvalidDirection(other)),
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Direction::Up => 'u',
            Direction::Left => 'l',
            Direction::Down => 'd',
            Direction::Right => 'r',
        }
    }

    /// Clockwise quarter turns that take a down-facing base image to this
    /// facing: down 0°, left -90°, up 180°, right +90°.
    pub fn quarter_turns_cw(self) -> u32 {
        match self {
            Direction::Down => 0,
            Direction::Left => 1,
            Direction::Up => 2,
            Direction::Right => 3,
        }
    }

    /// The rotation that undoes this one.
    pub fn inverse_rotation(self) -> Direction {
        match self {
            Direction::Down => Direction::Down,
            Direction::Left => Direction::Right,
            Direction::Up => Direction::Up,
            Direction::Right => Direction::Left,
        }
    }

    /// Unit displacement in grid cells, y growing downwards.
    pub fn displacement(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Down => (0, 1),
            Direction::Right => (1, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_round_trip() {
        for direction in DIRECTIONS {
            assert_eq!(
                Direction::from_symbol(direction.symbol()).unwrap(),
                direction
            );
        }
    }

    #[test]
    fn test_from_symbol_rejects_unknown() {
        assert!(matches!(
            Direction::from_symbol('z'),
            Err(GameError::InvalidDirection('z'))
        ));
        assert!(matches!(
            Direction::from_symbol('U'),
            Err(GameError::InvalidDirection('U'))
        ));
    }

    #[test]
    fn test_rotation_round_trip() {
        // Rotating by a direction and then by its inverse is the identity.
        for direction in DIRECTIONS {
            let total =
                direction.quarter_turns_cw() + direction.inverse_rotation().quarter_turns_cw();
            assert_eq!(total % 4, 0, "{:?}", direction);
        }
    }

    #[test]
    fn test_down_is_identity_rotation() {
        assert_eq!(Direction::Down.quarter_turns_cw(), 0);
    }

    #[test]
    fn test_displacements() {
        assert_eq!(Direction::Left.displacement(), (-1, 0));
        assert_eq!(Direction::Right.displacement(), (1, 0));
        assert_eq!(Direction::Up.displacement(), (0, -1));
        assert_eq!(Direction::Down.displacement(), (0, 1));
    }
}
