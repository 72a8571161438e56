//! Text notation for pieces and boards: `wpe4` style tokens joined by commas.

mod notation;

pub use notation::{parse_board, parse_piece, parse_position, NotationError};

/// Builds a board from piece notation, panicking on malformed input. Pieces
/// are marked as moved unless `has_moved = false` is given.
#[macro_export]
macro_rules! board {
    ($notation:expr) => {
        $crate::input_handler::parse_board($notation, true).unwrap()
    };
    ($notation:expr, has_moved = $has_moved:expr) => {
        $crate::input_handler::parse_board($notation, $has_moved).unwrap()
    };
}

/// Builds a single piece from a `wpe4` style token, panicking on malformed input.
#[macro_export]
macro_rules! piece {
    ($token:expr) => {
        $crate::input_handler::parse_piece($token, true).unwrap()
    };
    ($token:expr, has_moved = $has_moved:expr) => {
        $crate::input_handler::parse_piece($token, $has_moved).unwrap()
    };
}
