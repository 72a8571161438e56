//! Common types re-exported for convenience.

pub use crate::board::color::Color;
pub use crate::board::piece::{Piece, PieceType};
pub use crate::board::position::{Delta, Position};
pub use crate::board::Board;
pub use crate::evaluate::{BoardEvaluator, PieceValueEvaluator};
pub use crate::game::{Game, GameOutcome, Player, TreeSearchPlayer};
pub use crate::move_generation::MoveGenerator;
pub use crate::tree_search::{
    GameTree, Minimax, MinimaxTree, SearchConfig, SelectionPolicy, StopCondition, TreeExpander,
    TreeResult,
};
