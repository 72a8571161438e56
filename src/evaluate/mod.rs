//! Board evaluation: mapping a position to a score from one color's side.

mod piece_values;

pub use piece_values::{material_value, PieceValueEvaluator, CHECKMATE_VALUE};

use crate::board::color::Color;
use crate::board::Board;
use crate::move_generation::MoveGenerator;

/// Scores a board from the point of view of `eval_color`. Higher is better for
/// `eval_color`, lower is better for its opponent.
///
/// Evaluators must be pure: the same board always gets the same score, which is
/// what lets the game tree cache a node's value for the life of the tree. The
/// move generator is passed in so that evaluators can reuse its cached check and
/// move information.
pub trait BoardEvaluator: Send + Sync {
    fn eval_color(&self) -> Color;

    fn evaluate(&self, board: &Board, move_generator: &mut MoveGenerator) -> f64;
}
