pub mod targets;

use std::sync::Arc;

use log::trace;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::board::color::Color;
use crate::board::piece::{Piece, PieceType};
use crate::board::Board;
use targets::{generate_piece_targets, piece_reaches};

/// A shared, immutable list of boards reachable in one move.
pub type BoardList = Arc<[Board]>;

/// Generates moves as successor boards and memoizes everything it computes.
///
/// A `MoveGenerator` is the lifetime of one search session: it interns every
/// board it hands out, so positions reached through different move orders
/// share one allocation, and it caches per-piece moves, per-color legal moves
/// and check status keyed by board. Dropping the generator frees all of it.
#[derive(Default)]
pub struct MoveGenerator {
    boards: FxHashSet<Board>,
    piece_moves: FxHashMap<(Board, Piece), BoardList>,
    color_moves: FxHashMap<(Board, Color), BoardList>,
    check_status: FxHashMap<(Board, Color), bool>,
    cache_hit_count: usize,
}

impl MoveGenerator {
    pub fn new() -> Self {
        Default::default()
    }

    /// Returns the canonical instance of `board`, registering it if unseen.
    pub fn intern(&mut self, board: Board) -> Board {
        if let Some(existing) = self.boards.get(&board) {
            return existing.clone();
        }
        self.boards.insert(board.clone());
        board
    }

    pub fn interned_board_count(&self) -> usize {
        self.boards.len()
    }

    pub fn cache_hit_count(&self) -> usize {
        self.cache_hit_count
    }

    /// Boards reachable by one pseudo-legal move of `piece`, which must be on
    /// `board`. Moves that leave the mover in check are included.
    pub fn moves_for_piece(&mut self, board: &Board, piece: &Piece) -> BoardList {
        debug_assert!(board.contains(piece), "{} is not on {:?}", piece, board);

        let key = (board.clone(), *piece);
        if let Some(moves) = self.piece_moves.get(&key) {
            self.cache_hit_count += 1;
            return moves.clone();
        }

        let moves: BoardList = generate_piece_targets(board, piece)
            .into_iter()
            .map(|to| self.intern(board.with_piece_moved(piece, to)))
            .collect();
        self.piece_moves.insert(key, moves.clone());
        moves
    }

    /// Legal successor boards for `color`: every pseudo-legal move of its pieces
    /// that does not leave `color` in check.
    pub fn moves_for_color(&mut self, board: &Board, color: Color) -> BoardList {
        let key = (board.clone(), color);
        if let Some(moves) = self.color_moves.get(&key) {
            self.cache_hit_count += 1;
            return moves.clone();
        }

        let candidates = self.moves_for_color_ignoring_check(board, color);
        let moves: BoardList = candidates
            .into_iter()
            .filter(|candidate| !self.is_color_in_check(candidate, color))
            .collect();
        trace!(
            "{} legal moves for {} on {}",
            moves.len(),
            color,
            board.to_notation()
        );
        self.color_moves.insert(key, moves.clone());
        moves
    }

    fn moves_for_color_ignoring_check(&mut self, board: &Board, color: Color) -> Vec<Board> {
        let mut seen = FxHashSet::default();
        let mut boards = Vec::new();
        let pieces: Vec<Piece> = board.pieces_by_color(color).copied().collect();
        for piece in pieces {
            for candidate in self.moves_for_piece(board, &piece).iter() {
                if seen.insert(candidate.clone()) {
                    boards.push(candidate.clone());
                }
            }
        }
        boards
    }

    /// True if some pseudo-legal move of the opponent would capture `piece`.
    /// Opponent moves are not filtered for their own king's safety: a pinned
    /// piece still gives check.
    pub fn is_piece_threatened(&self, board: &Board, piece: &Piece) -> bool {
        board
            .pieces_by_color(piece.color.opposite())
            .any(|attacker| piece_reaches(board, attacker, piece.position))
    }

    /// True if any king of `color` is threatened. A color without a king is
    /// never in check.
    pub fn is_color_in_check(&mut self, board: &Board, color: Color) -> bool {
        let key = (board.clone(), color);
        if let Some(&in_check) = self.check_status.get(&key) {
            self.cache_hit_count += 1;
            return in_check;
        }

        let in_check = board
            .pieces_of_type(PieceType::King, color)
            .any(|king| self.is_piece_threatened(board, king));
        self.check_status.insert(key, in_check);
        in_check
    }

    /// True if `color` is in check and no move gets it out of check.
    pub fn is_color_in_checkmate(&mut self, board: &Board, color: Color) -> bool {
        self.is_color_in_check(board, color) && self.moves_for_color(board, color).is_empty()
    }

    /// Counts the boards in the full legal move tree below `board`, down to
    /// `depth` plies, with `color` moving first. Positions reached through
    /// different move orders are counted once per path.
    pub fn count_positions(&mut self, depth: u8, board: &Board, color: Color) -> usize {
        if depth == 0 {
            return 0;
        }
        let moves = self.moves_for_color(board, color);
        let mut count = moves.len();
        for next in moves.iter() {
            count += self.count_positions(depth - 1, next, color.opposite());
        }
        count
    }
}
