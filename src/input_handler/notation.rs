use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::board::color::Color;
use crate::board::error::BoardError;
use crate::board::piece::{Piece, PieceType};
use crate::board::position::Position;
use crate::board::Board;

static SQUARE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("^([a-h])([1-8])$").expect("square pattern compiles"));

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("Piece token must be 4 characters, got {token:?}")]
    InvalidTokenLength { token: String },
    #[error("Invalid color code: {code:?}")]
    InvalidColorCode { code: char },
    #[error("Invalid piece type code: {code:?}")]
    InvalidPieceTypeCode { code: char },
    #[error("Invalid square: {square:?}")]
    InvalidSquare { square: String },
    #[error("Error placing piece: {board_error}")]
    ErrorPlacingPiece { board_error: BoardError },
}

type NotationResult<T> = Result<T, NotationError>;

/// Parses a square such as `e4`.
pub fn parse_position(square: &str) -> NotationResult<Position> {
    let invalid = || NotationError::InvalidSquare {
        square: square.to_string(),
    };
    let caps = SQUARE_RE.captures(square).ok_or_else(invalid)?;
    let file = caps[1].bytes().next().ok_or_else(invalid)? - b'a';
    let rank = caps[2].bytes().next().ok_or_else(invalid)? - b'1';
    Position::new(file as i16, rank as i16).map_err(|_| invalid())
}

/// Parses a piece token: color code, type code and square, e.g. `bnf5`.
pub fn parse_piece(token: &str, has_moved: bool) -> NotationResult<Piece> {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() != 4 {
        return Err(NotationError::InvalidTokenLength {
            token: token.to_string(),
        });
    }

    let color =
        Color::from_code(chars[0]).ok_or(NotationError::InvalidColorCode { code: chars[0] })?;
    let kind = PieceType::from_code(chars[1])
        .ok_or(NotationError::InvalidPieceTypeCode { code: chars[1] })?;
    let square: String = chars[2..].iter().collect();
    let position = parse_position(&square)?;

    Ok(Piece::new(color, kind, position).with_has_moved(has_moved))
}

/// Parses a comma separated list of piece tokens, e.g. `wke1,bra8,brh8`.
/// Every piece gets the given `has_moved` flag.
pub fn parse_board(notation: &str, has_moved: bool) -> NotationResult<Board> {
    let pieces = notation
        .split(',')
        .map(|token| parse_piece(token.trim(), has_moved))
        .collect::<NotationResult<Vec<Piece>>>()?;
    Board::new(pieces).map_err(|board_error| NotationError::ErrorPlacingPiece { board_error })
}

impl FromStr for Board {
    type Err = NotationError;

    /// Hand written positions are treated as mid-game: pawns do not double step.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        parse_board(input, true)
    }
}

impl FromStr for Position {
    type Err = NotationError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        parse_position(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_position() {
        assert_eq!(parse_position("f2").unwrap(), Position::new(5, 1).unwrap());
        assert_eq!(parse_position("a1").unwrap(), Position::new(0, 0).unwrap());
        assert_eq!(parse_position("h8").unwrap(), Position::new(7, 7).unwrap());
    }

    #[test]
    fn test_parse_position_fail() {
        for square in ["abc", "z1", "a9", "", "A1"] {
            assert_eq!(
                parse_position(square),
                Err(NotationError::InvalidSquare {
                    square: square.to_string()
                }),
                "{:?} should not parse",
                square
            );
        }
    }

    #[test]
    fn test_parse_piece() {
        let piece = parse_piece("bnf5", false).unwrap();
        assert_eq!(piece.color, Color::Black);
        assert_eq!(piece.kind, PieceType::Knight);
        assert_eq!(piece.position, parse_position("f5").unwrap());
        assert!(!piece.has_moved);
        assert!(parse_piece("bnf5", true).unwrap().has_moved);
    }

    #[test]
    fn test_parse_piece_errors() {
        assert_eq!(
            parse_piece("wpe44", true),
            Err(NotationError::InvalidTokenLength {
                token: "wpe44".to_string()
            })
        );
        assert_eq!(
            parse_piece("xpe4", true),
            Err(NotationError::InvalidColorCode { code: 'x' })
        );
        assert_eq!(
            parse_piece("wxe4", true),
            Err(NotationError::InvalidPieceTypeCode { code: 'x' })
        );
        assert_eq!(
            parse_piece("wpi4", true),
            Err(NotationError::InvalidSquare {
                square: "i4".to_string()
            })
        );
    }

    #[test]
    fn test_parse_board() {
        let board = parse_board("wke1,bra8,brh8", false).unwrap();
        assert_eq!(board.len(), 3);
        assert!(board.pieces().iter().all(|piece| !piece.has_moved));
        assert_eq!(board, parse_board("brh8, wke1 ,bra8", false).unwrap());
    }

    #[test]
    fn test_parse_board_duplicate_square() {
        assert_eq!(
            parse_board("wke1,bqe1", true),
            Err(NotationError::ErrorPlacingPiece {
                board_error: BoardError::DuplicatePosition {
                    position: parse_position("e1").unwrap()
                }
            })
        );
    }

    #[test]
    fn test_board_from_str_marks_pieces_moved() {
        let board: Board = "wpc2".parse().unwrap();
        assert!(board.pieces()[0].has_moved);
    }

    #[test]
    fn test_notation_matches_rendering_of_parsed_board() {
        let board = parse_board("bpd5,wpe4", true).unwrap();
        assert_eq!(board.to_notation(), "wpe4,bpd5");
    }
}
