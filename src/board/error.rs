use thiserror::Error;

use super::position::Position;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Coordinate ({file}, {rank}) is outside the 8x8 board")]
    OutOfBounds { file: i16, rank: i16 },
    #[error("More than one piece was placed on {position}")]
    DuplicatePosition { position: Position },
}
