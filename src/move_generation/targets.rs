//! Destination squares a piece can reach in one pseudo-legal move.
//!
//! Targets ignore whether the move would leave the mover's own king in check;
//! that filter lives in `MoveGenerator::moves_for_color`.

use smallvec::{smallvec, SmallVec};

use crate::board::piece::{Piece, PieceType};
use crate::board::position::{Delta, Position};
use crate::board::Board;

/// A queen in the middle of an empty board has 27 targets, the most of any piece.
pub type PieceTargetList = SmallVec<[Position; 28]>;

const BISHOP_DELTAS: [Delta; 4] = [
    Delta::new(1, 1),
    Delta::new(1, -1),
    Delta::new(-1, 1),
    Delta::new(-1, -1),
];

const ROOK_DELTAS: [Delta; 4] = [
    Delta::new(1, 0),
    Delta::new(-1, 0),
    Delta::new(0, 1),
    Delta::new(0, -1),
];

const ROYAL_DELTAS: [Delta; 8] = [
    Delta::new(1, 1),
    Delta::new(1, -1),
    Delta::new(-1, 1),
    Delta::new(-1, -1),
    Delta::new(1, 0),
    Delta::new(-1, 0),
    Delta::new(0, 1),
    Delta::new(0, -1),
];

const KNIGHT_DELTAS: [Delta; 8] = [
    Delta::new(2, -1),
    Delta::new(2, 1),
    Delta::new(-2, -1),
    Delta::new(-2, 1),
    Delta::new(1, 2),
    Delta::new(-1, 2),
    Delta::new(1, -2),
    Delta::new(-1, -2),
];

pub fn generate_piece_targets(board: &Board, piece: &Piece) -> PieceTargetList {
    let mut targets: PieceTargetList = smallvec![];
    match piece.kind {
        PieceType::Pawn => generate_pawn_targets(&mut targets, board, piece),
        PieceType::Knight => generate_step_targets(&mut targets, board, piece, &KNIGHT_DELTAS),
        PieceType::King => generate_step_targets(&mut targets, board, piece, &ROYAL_DELTAS),
        PieceType::Bishop => generate_ray_targets(&mut targets, board, piece, &BISHOP_DELTAS),
        PieceType::Rook => generate_ray_targets(&mut targets, board, piece, &ROOK_DELTAS),
        PieceType::Queen => generate_ray_targets(&mut targets, board, piece, &ROYAL_DELTAS),
    }
    targets
}

/// Returns true if `piece` could move onto `square` on this board, which for an
/// occupied square means capturing whatever stands there.
pub fn piece_reaches(board: &Board, piece: &Piece, square: Position) -> bool {
    generate_piece_targets(board, piece).contains(&square)
}

fn offset(position: Position, delta: Delta) -> Option<Position> {
    position.add(delta).ok()
}

fn is_enemy(board: &Board, piece: &Piece, square: Position) -> bool {
    matches!(board.get(square), Some(other) if other.color != piece.color)
}

fn generate_ray_targets(
    targets: &mut PieceTargetList,
    board: &Board,
    piece: &Piece,
    deltas: &[Delta],
) {
    for &delta in deltas {
        let mut cursor = piece.position;
        while let Some(next) = offset(cursor, delta) {
            cursor = next;
            match board.get(next) {
                None => targets.push(next),
                Some(other) => {
                    if other.color != piece.color {
                        targets.push(next);
                    }
                    break;
                }
            }
        }
    }
}

fn generate_step_targets(
    targets: &mut PieceTargetList,
    board: &Board,
    piece: &Piece,
    deltas: &[Delta],
) {
    for &delta in deltas {
        if let Some(to) = offset(piece.position, delta) {
            if !board.is_occupied(to) || is_enemy(board, piece, to) {
                targets.push(to);
            }
        }
    }
}

fn generate_pawn_targets(targets: &mut PieceTargetList, board: &Board, piece: &Piece) {
    let forward = piece.color.forward();

    if let Some(single) = offset(piece.position, Delta::new(0, forward)) {
        if !board.is_occupied(single) {
            targets.push(single);

            if !piece.has_moved {
                if let Some(double) = offset(piece.position, Delta::new(0, forward * 2)) {
                    if !board.is_occupied(double) {
                        targets.push(double);
                    }
                }
            }
        }
    }

    for dfile in [-1, 1] {
        if let Some(capture) = offset(piece.position, Delta::new(dfile, forward)) {
            if is_enemy(board, piece, capture) {
                targets.push(capture);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board;
    use crate::input_handler::{parse_piece, parse_position};

    fn sorted(targets: PieceTargetList) -> Vec<String> {
        let mut names: Vec<String> = targets.iter().map(|t| t.to_string()).collect();
        names.sort();
        names
    }

    fn names(squares: &[&str]) -> Vec<String> {
        let mut names: Vec<String> = squares.iter().map(|s| s.to_string()).collect();
        names.sort();
        names
    }

    #[test]
    fn test_queen_targets_on_empty_board() {
        let queen = parse_piece("wqd4", true).unwrap();
        let board = board!("wqd4");
        assert_eq!(generate_piece_targets(&board, &queen).len(), 27);
    }

    #[test]
    fn test_knight_jumps_over_pieces() {
        let board = board!("wnd4,wpc3,wpc4,wpc5,wpd3,wpd5,wpe3,wpe4,wpe5");
        let knight = parse_piece("wnd4", true).unwrap();
        assert_eq!(
            sorted(generate_piece_targets(&board, &knight)),
            names(&["c2", "e2", "f3", "f5", "e6", "c6", "b5", "b3"])
        );
    }

    #[test]
    fn test_unmoved_pawn_blocked_on_intermediate_square() {
        let board = board!("wpc2,bnc3", has_moved = false);
        let pawn = parse_piece("wpc2", false).unwrap();
        assert!(generate_piece_targets(&board, &pawn).is_empty());
    }

    #[test]
    fn test_unmoved_pawn_blocked_on_destination_square() {
        let board = board!("wpc2,bnc4", has_moved = false);
        let pawn = parse_piece("wpc2", false).unwrap();
        assert_eq!(sorted(generate_piece_targets(&board, &pawn)), names(&["c3"]));
    }

    #[test]
    fn test_black_pawn_moves_down_the_board() {
        let board = board!("bpe7,wpd6,wpf6", has_moved = false);
        let pawn = parse_piece("bpe7", false).unwrap();
        assert_eq!(
            sorted(generate_piece_targets(&board, &pawn)),
            names(&["e6", "e5", "d6", "f6"])
        );
    }

    #[test]
    fn test_pawn_does_not_capture_forward() {
        let board = board!("wpe4,bpe5");
        let pawn = parse_piece("wpe4", true).unwrap();
        assert!(generate_piece_targets(&board, &pawn).is_empty());
    }

    #[test]
    fn test_piece_reaches() {
        let board = board!("wke1,bre4");
        let rook = parse_piece("bre4", true).unwrap();
        assert!(piece_reaches(&board, &rook, parse_position("e1").unwrap()));
        assert!(!piece_reaches(&board, &rook, parse_position("d1").unwrap()));
    }
}
