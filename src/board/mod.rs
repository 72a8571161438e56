pub mod color;
pub mod error;
pub mod piece;
pub mod position;

mod display;

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use once_cell::sync::Lazy;
use rustc_hash::FxHasher;

use color::Color;
use error::BoardError;
use piece::{Piece, PieceType};
use position::Position;

static STARTING_POSITION: Lazy<Board> = Lazy::new(|| {
    const BACK_RANK: [PieceType; 8] = [
        PieceType::Rook,
        PieceType::Knight,
        PieceType::Bishop,
        PieceType::Queen,
        PieceType::King,
        PieceType::Bishop,
        PieceType::Knight,
        PieceType::Rook,
    ];

    let pieces = Position::all().filter_map(|position| {
        let back_rank_piece = BACK_RANK[position.file() as usize];
        let (color, kind) = match position.rank() {
            0 => (Color::White, back_rank_piece),
            1 => (Color::White, PieceType::Pawn),
            6 => (Color::Black, PieceType::Pawn),
            7 => (Color::Black, back_rank_piece),
            _ => return None,
        };
        Some(Piece::new(color, kind, position))
    });
    Board::from_unique(pieces.collect())
});

/// An immutable set of pieces where no two pieces share a square.
///
/// Boards compare and hash by their piece set, so two boards built from the
/// same pieces are interchangeable. Cloning is cheap: the piece data sits behind
/// an `Arc`, and `MoveGenerator` interns equal boards so transpositions share
/// one allocation.
#[derive(Clone)]
pub struct Board(Arc<BoardData>);

struct BoardData {
    // sorted by square, which gives every piece set a single canonical order
    pieces: Vec<Piece>,
    squares: [Option<Piece>; 64],
    hash: u64,
}

impl Board {
    pub fn new<I: IntoIterator<Item = Piece>>(pieces: I) -> Result<Self, BoardError> {
        let pieces: Vec<Piece> = pieces.into_iter().collect();
        let mut squares = [None; 64];
        for piece in &pieces {
            let slot = &mut squares[piece.position.index()];
            if slot.is_some() {
                return Err(BoardError::DuplicatePosition {
                    position: piece.position,
                });
            }
            *slot = Some(*piece);
        }
        Ok(Self::with_squares(squares))
    }

    pub fn empty() -> Self {
        Self::with_squares([None; 64])
    }

    pub fn starting_position() -> Self {
        STARTING_POSITION.clone()
    }

    /// Builds a board from pieces already known to occupy distinct squares.
    fn from_unique(pieces: Vec<Piece>) -> Self {
        let mut squares = [None; 64];
        for piece in pieces {
            debug_assert!(squares[piece.position.index()].is_none());
            squares[piece.position.index()] = Some(piece);
        }
        Self::with_squares(squares)
    }

    fn with_squares(squares: [Option<Piece>; 64]) -> Self {
        let pieces: Vec<Piece> = squares.iter().flatten().copied().collect();
        let mut hasher = FxHasher::default();
        pieces.hash(&mut hasher);
        Self(Arc::new(BoardData {
            pieces,
            squares,
            hash: hasher.finish(),
        }))
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.0.pieces
    }

    pub fn len(&self) -> usize {
        self.0.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.pieces.is_empty()
    }

    pub fn get(&self, position: Position) -> Option<Piece> {
        self.0.squares[position.index()]
    }

    pub fn is_occupied(&self, position: Position) -> bool {
        self.get(position).is_some()
    }

    pub fn contains(&self, piece: &Piece) -> bool {
        self.get(piece.position).as_ref() == Some(piece)
    }

    pub fn pieces_by_color(&self, color: Color) -> impl Iterator<Item = &Piece> + '_ {
        self.0.pieces.iter().filter(move |piece| piece.color == color)
    }

    pub fn pieces_of_type(
        &self,
        kind: PieceType,
        color: Color,
    ) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces_by_color(color)
            .filter(move |piece| piece.kind == kind)
    }

    pub fn has_pieces(&self, color: Color) -> bool {
        self.pieces_by_color(color).next().is_some()
    }

    /// Adds `piece`. Fails if its square is already taken; the previous occupant
    /// has to be removed first.
    pub fn with_piece(&self, piece: Piece) -> Result<Self, BoardError> {
        if self.is_occupied(piece.position) {
            return Err(BoardError::DuplicatePosition {
                position: piece.position,
            });
        }
        let mut squares = self.0.squares;
        squares[piece.position.index()] = Some(piece);
        Ok(Self::with_squares(squares))
    }

    pub fn without_piece(&self, piece: &Piece) -> Self {
        if !self.contains(piece) {
            return self.clone();
        }
        let mut squares = self.0.squares;
        squares[piece.position.index()] = None;
        Self::with_squares(squares)
    }

    /// Moves `piece` to `to`, removing whatever stood there first.
    pub fn with_piece_moved(&self, piece: &Piece, to: Position) -> Self {
        debug_assert!(self.contains(piece), "{} is not on {:?}", piece, self);
        let mut squares = self.0.squares;
        squares[piece.position.index()] = None;
        squares[to.index()] = Some(piece.with_position(to));
        Self::with_squares(squares)
    }

    pub fn position_hash(&self) -> u64 {
        self.0.hash
    }

    pub fn ptr_eq(&self, other: &Board) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Comma separated piece tokens, e.g. `wpe4,bpd5`.
    pub fn to_notation(&self) -> String {
        self.0
            .pieces
            .iter()
            .map(|piece| piece.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting_position()
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || (self.0.hash == other.0.hash && self.0.pieces == other.0.pieces)
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.0.hash);
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.to_notation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(file: i16, rank: i16) -> Position {
        Position::new(file, rank).unwrap()
    }

    fn white_pawn(file: i16, rank: i16) -> Piece {
        Piece::new(Color::White, PieceType::Pawn, pos(file, rank))
    }

    #[test]
    fn test_duplicate_positions() {
        let bishop = Piece::new(Color::White, PieceType::Bishop, pos(2, 1));
        let king = Piece::new(Color::Black, PieceType::King, pos(2, 1));
        assert_eq!(
            Board::new(vec![bishop, king]).unwrap_err(),
            BoardError::DuplicatePosition {
                position: pos(2, 1)
            }
        );
    }

    #[test]
    fn test_distinct_positions_construct() {
        let board = Board::new(vec![white_pawn(2, 1), white_pawn(2, 2)]).unwrap();
        assert_eq!(board.len(), 2);
    }

    #[test]
    fn test_equality_ignores_insertion_order() {
        let a = Board::new(vec![white_pawn(2, 1), white_pawn(3, 1)]).unwrap();
        let b = Board::new(vec![white_pawn(3, 1), white_pawn(2, 1)]).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.position_hash(), b.position_hash());
        assert!(!a.ptr_eq(&b));
    }

    #[test]
    fn test_has_moved_distinguishes_boards() {
        let a = Board::new(vec![white_pawn(2, 1)]).unwrap();
        let b = Board::new(vec![white_pawn(2, 1).with_has_moved(true)]).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_with_piece() {
        let board = Board::new(vec![white_pawn(2, 1)]).unwrap();
        assert_eq!(
            board.with_piece(white_pawn(2, 2)).unwrap(),
            Board::new(vec![white_pawn(2, 1), white_pawn(2, 2)]).unwrap()
        );
    }

    #[test]
    fn test_with_piece_does_not_evict() {
        let board = Board::new(vec![white_pawn(2, 1)]).unwrap();
        let intruder = Piece::new(Color::Black, PieceType::Rook, pos(2, 1));
        assert!(board.with_piece(intruder).is_err());
    }

    #[test]
    fn test_without_piece() {
        let board = Board::new(vec![white_pawn(2, 1), white_pawn(2, 2)]).unwrap();
        assert_eq!(
            board.without_piece(&white_pawn(2, 2)),
            Board::new(vec![white_pawn(2, 1)]).unwrap()
        );
    }

    #[test]
    fn test_without_absent_piece_is_noop() {
        let board = Board::new(vec![white_pawn(2, 1)]).unwrap();
        let result = board.without_piece(&white_pawn(5, 5));
        assert!(result.ptr_eq(&board));
    }

    #[test]
    fn test_with_piece_moved_displaces_occupant() {
        let board = Board::new(vec![white_pawn(2, 1), white_pawn(2, 2)]).unwrap();
        assert_eq!(
            board.with_piece_moved(&white_pawn(2, 1), pos(2, 2)),
            Board::new(vec![white_pawn(2, 2).with_has_moved(true)]).unwrap()
        );
    }

    #[test]
    fn test_pieces_by_position() {
        let board = Board::new(vec![white_pawn(2, 1), white_pawn(2, 2)]).unwrap();
        assert_eq!(board.get(pos(2, 1)), Some(white_pawn(2, 1)));
        assert_eq!(board.get(pos(2, 2)), Some(white_pawn(2, 2)));
        assert_eq!(board.get(pos(2, 3)), None);
    }

    #[test]
    fn test_pieces_by_color() {
        let white = Piece::new(Color::White, PieceType::Pawn, pos(2, 2));
        let black = Piece::new(Color::Black, PieceType::Pawn, pos(2, 3));
        let board = Board::new(vec![white, black]).unwrap();
        assert_eq!(
            board.pieces_by_color(Color::White).collect::<Vec<_>>(),
            vec![&white]
        );
        assert_eq!(
            board.pieces_by_color(Color::Black).collect::<Vec<_>>(),
            vec![&black]
        );
        assert!(!Board::empty().has_pieces(Color::White));
    }

    #[test]
    fn test_starting_position() {
        let board = Board::starting_position();
        assert_eq!(board.len(), 32);
        assert_eq!(board.pieces_by_color(Color::White).count(), 16);
        assert_eq!(board.pieces_of_type(PieceType::King, Color::Black).count(), 1);
        assert_eq!(
            board.get(pos(4, 0)),
            Some(Piece::new(Color::White, PieceType::King, pos(4, 0)))
        );
        assert!(board.pieces().iter().all(|piece| !piece.has_moved));
    }

    #[test]
    fn test_to_notation_is_sorted_by_square() {
        let board = Board::new(vec![
            Piece::new(Color::Black, PieceType::Pawn, pos(3, 4)),
            white_pawn(4, 3),
        ])
        .unwrap();
        assert_eq!(board.to_notation(), "wpe4,bpd5");
    }
}
