use std::fmt;

use super::color::Color;
use super::position::Position;

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

pub const ALL_PIECE_TYPES: [PieceType; 6] = [
    PieceType::Pawn,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Rook,
    PieceType::Queen,
    PieceType::King,
];

impl PieceType {
    pub fn to_code(&self) -> char {
        match self {
            PieceType::Pawn => 'p',
            PieceType::Knight => 'n',
            PieceType::Bishop => 'b',
            PieceType::Rook => 'r',
            PieceType::Queen => 'q',
            PieceType::King => 'k',
        }
    }

    pub fn from_code(code: char) -> Option<PieceType> {
        match code {
            'p' => Some(PieceType::Pawn),
            'n' => Some(PieceType::Knight),
            'b' => Some(PieceType::Bishop),
            'r' => Some(PieceType::Rook),
            'q' => Some(PieceType::Queen),
            'k' => Some(PieceType::King),
            _ => None,
        }
    }
}

/// A colored piece standing on a square. Pieces are values: moving one yields a
/// new `Piece` rather than changing this one.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct Piece {
    pub position: Position,
    pub color: Color,
    pub kind: PieceType,
    pub has_moved: bool,
}

impl Piece {
    pub fn new(color: Color, kind: PieceType, position: Position) -> Self {
        Self {
            position,
            color,
            kind,
            has_moved: false,
        }
    }

    pub fn with_has_moved(self, has_moved: bool) -> Self {
        Self { has_moved, ..self }
    }

    /// The same piece relocated to `position`, marked as moved.
    pub fn with_position(self, position: Position) -> Self {
        Self {
            position,
            has_moved: true,
            ..self
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.color.to_code(),
            self.kind.to_code(),
            self.position
        )
    }
}
