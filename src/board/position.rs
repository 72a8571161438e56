use std::fmt;
use std::ops::Neg;

use super::error::BoardError;

pub const BOARD_SIZE: i16 = 8;

/// A square on the board, addressed by zero-based file (a..h) and rank (1..8).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct Position {
    file: u8,
    rank: u8,
}

/// A relative step between two squares.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Delta {
    pub dfile: i8,
    pub drank: i8,
}

impl Delta {
    pub const fn new(dfile: i8, drank: i8) -> Self {
        Self { dfile, drank }
    }
}

impl Neg for Delta {
    type Output = Delta;

    fn neg(self) -> Self::Output {
        Delta::new(-self.dfile, -self.drank)
    }
}

fn in_range(file: i16, rank: i16) -> bool {
    (0..BOARD_SIZE).contains(&file) && (0..BOARD_SIZE).contains(&rank)
}

impl Position {
    pub fn new(file: i16, rank: i16) -> Result<Self, BoardError> {
        if !in_range(file, rank) {
            return Err(BoardError::OutOfBounds { file, rank });
        }
        Ok(Self {
            file: file as u8,
            rank: rank as u8,
        })
    }

    pub fn file(&self) -> u8 {
        self.file
    }

    pub fn rank(&self) -> u8 {
        self.rank
    }

    /// Index into a rank-major 64 entry table, a1 = 0 and h8 = 63.
    pub fn index(&self) -> usize {
        self.rank as usize * 8 + self.file as usize
    }

    pub fn can_add(&self, delta: Delta) -> bool {
        in_range(
            self.file as i16 + delta.dfile as i16,
            self.rank as i16 + delta.drank as i16,
        )
    }

    pub fn add(&self, delta: Delta) -> Result<Self, BoardError> {
        Self::new(
            self.file as i16 + delta.dfile as i16,
            self.rank as i16 + delta.drank as i16,
        )
    }

    pub fn sub(&self, delta: Delta) -> Result<Self, BoardError> {
        self.add(-delta)
    }

    /// Iterates every square of the board, a1 first and h8 last.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..64u8).map(|i| Position {
            file: i % 8,
            rank: i / 8,
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.file) as char, self.rank + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_out_of_range() {
        assert_eq!(
            Position::new(-1, -1),
            Err(BoardError::OutOfBounds { file: -1, rank: -1 })
        );
        assert!(Position::new(8, 0).is_err());
        assert!(Position::new(0, 8).is_err());
        assert!(Position::new(7, 7).is_ok());
    }

    #[test]
    fn test_delta_neg() {
        assert_eq!(-Delta::new(1, -1), Delta::new(-1, 1));
    }

    #[test]
    fn test_can_add() {
        let origin = Position::new(0, 0).unwrap();
        assert!(origin.can_add(Delta::new(1, 0)));
        assert!(!origin.can_add(Delta::new(-1, 0)));
    }

    #[test]
    fn test_add() {
        let position = Position::new(1, 2).unwrap();
        assert_eq!(
            position.add(Delta::new(3, 4)).unwrap(),
            Position::new(4, 6).unwrap()
        );
        assert_eq!(
            position.add(Delta::new(7, 0)),
            Err(BoardError::OutOfBounds { file: 8, rank: 2 })
        );
    }

    #[test]
    fn test_sub() {
        let position = Position::new(3, 4).unwrap();
        assert_eq!(
            position.sub(Delta::new(1, 2)).unwrap(),
            Position::new(2, 2).unwrap()
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(2, 4).unwrap().to_string(), "c5");
        assert_eq!(Position::new(7, 0).unwrap().to_string(), "h1");
    }

    #[test]
    fn test_all_covers_board() {
        let all: Vec<_> = Position::all().collect();
        assert_eq!(all.len(), 64);
        for (i, position) in all.iter().enumerate() {
            assert_eq!(position.index(), i);
        }
    }
}
