use crate::board::color::Color;
use crate::board::piece::PieceType;
use crate::board::Board;
use crate::move_generation::MoveGenerator;

use super::BoardEvaluator;

/// Far larger than any material total, so a mate always dominates.
pub const CHECKMATE_VALUE: f64 = 10000.0;

pub fn material_value(kind: PieceType) -> f64 {
    match kind {
        PieceType::Pawn => 1.0,
        PieceType::Knight => 3.0,
        PieceType::Bishop => 3.0,
        PieceType::Rook => 5.0,
        PieceType::Queen => 15.0,
        PieceType::King => 0.0,
    }
}

/// Sums material, own pieces positive and enemy pieces negative. A checkmate on
/// the board replaces the material sum with `CHECKMATE_VALUE`, positive when the
/// opponent is mated and negative when `eval_color` is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PieceValueEvaluator {
    eval_color: Color,
}

impl PieceValueEvaluator {
    pub fn new(eval_color: Color) -> Self {
        Self { eval_color }
    }

    fn color_sign(&self, color: Color) -> f64 {
        if color == self.eval_color {
            1.0
        } else {
            -1.0
        }
    }
}

impl BoardEvaluator for PieceValueEvaluator {
    fn eval_color(&self) -> Color {
        self.eval_color
    }

    fn evaluate(&self, board: &Board, move_generator: &mut MoveGenerator) -> f64 {
        for color in Color::ALL {
            if move_generator.is_color_in_checkmate(board, color) {
                return CHECKMATE_VALUE * self.color_sign(color.opposite());
            }
        }

        board
            .pieces()
            .iter()
            .map(|piece| material_value(piece.kind) * self.color_sign(piece.color))
            .sum()
    }
}
