//! Turn-taking between two players, starting from any board.

mod player;

pub use player::{Player, PlayerError, SearchOutcome, TreeSearchPlayer};

use std::fmt;

use log::info;
use thiserror::Error;

use crate::board::color::Color;
use crate::board::Board;
use crate::move_generation::MoveGenerator;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    Checkmate { loser: Color },
    /// The side to move has no legal move and is not in check, or has no
    /// pieces at all.
    NoLegalMoves { color: Color },
    PlyLimitReached,
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Checkmate { loser } => {
                write!(f, "checkmate, {} wins", loser.opposite())
            }
            GameOutcome::NoLegalMoves { color } => write!(f, "{} has no legal moves", color),
            GameOutcome::PlyLimitReached => write!(f, "ply limit reached"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GameError {
    #[error("expected a {expected} player, got a {actual} player")]
    WrongPlayerColor { expected: Color, actual: Color },
    #[error("{color} made an illegal move to {board}")]
    IllegalMove { color: Color, board: String },
    #[error("player error: {0}")]
    Player(#[from] PlayerError),
}

pub struct Game {
    white: Box<dyn Player>,
    black: Box<dyn Player>,
    move_generator: MoveGenerator,
    history: Vec<Board>,
}

impl Game {
    pub fn new(white: Box<dyn Player>, black: Box<dyn Player>) -> Result<Self, GameError> {
        for (expected, player) in [(Color::White, &white), (Color::Black, &black)] {
            if player.color() != expected {
                return Err(GameError::WrongPlayerColor {
                    expected,
                    actual: player.color(),
                });
            }
        }

        Ok(Self {
            white,
            black,
            move_generator: MoveGenerator::new(),
            history: Vec::new(),
        })
    }

    /// Boards of the last game played, starting with its initial board.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    pub fn play(
        &mut self,
        board: Board,
        to_move: Color,
        max_plies: usize,
    ) -> Result<GameOutcome, GameError> {
        self.play_with(board, to_move, max_plies, |_, _, _| {})
    }

    /// Plays until the game ends or `max_plies` moves have been made, calling
    /// `on_move` with the ply number, the mover and the new board after every
    /// move. Every move is checked against the legal moves of the mover.
    pub fn play_with<F>(
        &mut self,
        board: Board,
        to_move: Color,
        max_plies: usize,
        mut on_move: F,
    ) -> Result<GameOutcome, GameError>
    where
        F: FnMut(usize, Color, &Board),
    {
        let mut board = self.move_generator.intern(board);
        let mut turn = to_move;
        self.history = vec![board.clone()];

        for ply in 1.. {
            if let Some(outcome) = self.outcome(&board, turn) {
                info!("game over after {} plies: {}", ply - 1, outcome);
                return Ok(outcome);
            }
            if ply > max_plies {
                break;
            }

            let next = match turn {
                Color::White => self.white.next_board(&board)?,
                Color::Black => self.black.next_board(&board)?,
            };
            if !self.move_generator.moves_for_color(&board, turn).contains(&next) {
                return Err(GameError::IllegalMove {
                    color: turn,
                    board: next.to_notation(),
                });
            }

            on_move(ply, turn, &next);
            self.history.push(next.clone());
            board = next;
            turn = turn.opposite();
        }

        info!("game stopped after {} plies", max_plies);
        Ok(GameOutcome::PlyLimitReached)
    }

    fn outcome(&mut self, board: &Board, turn: Color) -> Option<GameOutcome> {
        for color in Color::ALL {
            if self.move_generator.is_color_in_checkmate(board, color) {
                return Some(GameOutcome::Checkmate { loser: color });
            }
        }
        if self.move_generator.moves_for_color(board, turn).is_empty() {
            return Some(GameOutcome::NoLegalMoves { color: turn });
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::board;
    use crate::evaluate::PieceValueEvaluator;
    use crate::tree_search::{SearchConfig, SelectionPolicy, StopCondition};

    fn computer(color: Color) -> Box<dyn Player> {
        let config = SearchConfig {
            selection: SelectionPolicy::BreadthFirst,
            stop: StopCondition::MaxDepth(0),
            seed: Some(9),
        };
        let evaluator = Arc::new(PieceValueEvaluator::new(color));
        Box::new(TreeSearchPlayer::new(color, evaluator, &config).unwrap())
    }

    fn computer_game() -> Game {
        Game::new(computer(Color::White), computer(Color::Black)).unwrap()
    }

    /// Plays back a fixed list of boards.
    struct ScriptedPlayer {
        color: Color,
        boards: Vec<Board>,
    }

    impl Player for ScriptedPlayer {
        fn color(&self) -> Color {
            self.color
        }

        fn next_board(&mut self, _board: &Board) -> Result<Board, PlayerError> {
            if self.boards.is_empty() {
                return Err(PlayerError::NoAvailableMoves);
            }
            Ok(self.boards.remove(0))
        }
    }

    #[test]
    fn test_players_must_match_their_side() {
        assert!(matches!(
            Game::new(computer(Color::Black), computer(Color::White)),
            Err(GameError::WrongPlayerColor {
                expected: Color::White,
                actual: Color::Black
            })
        ));
    }

    #[test]
    fn test_mate_in_one_ends_the_game() {
        let mut game = computer_game();
        let outcome = game
            .play(board!("bka8,wkc7,wqb1"), Color::White, 10)
            .unwrap();
        assert_eq!(outcome, GameOutcome::Checkmate { loser: Color::Black });
        assert_eq!(game.history().len(), 2);
    }

    #[test]
    fn test_already_checkmated() {
        let mut game = computer_game();
        let outcome = game.play(board!("bke1,wra1,wrb2"), Color::Black, 10).unwrap();
        assert_eq!(outcome, GameOutcome::Checkmate { loser: Color::Black });
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_stalemate_ends_the_game() {
        let mut game = computer_game();
        let outcome = game.play(board!("bka8,wqb6,wkc1"), Color::Black, 10).unwrap();
        assert_eq!(outcome, GameOutcome::NoLegalMoves { color: Color::Black });
    }

    #[test]
    fn test_ply_limit() {
        let mut game = computer_game();
        let mut plies = Vec::new();
        let outcome = game
            .play_with(board!("wke1,bke8"), Color::White, 2, |ply, color, _| {
                plies.push((ply, color))
            })
            .unwrap();
        assert_eq!(outcome, GameOutcome::PlyLimitReached);
        assert_eq!(plies, vec![(1, Color::White), (2, Color::Black)]);
        assert_eq!(game.history().len(), 3);
    }

    #[test]
    fn test_illegal_move_is_rejected() {
        let white = ScriptedPlayer {
            color: Color::White,
            boards: vec![board!("wke3,bke8")],
        };
        let mut game = Game::new(Box::new(white), computer(Color::Black)).unwrap();
        assert_eq!(
            game.play(board!("wke1,bke8"), Color::White, 10),
            Err(GameError::IllegalMove {
                color: Color::White,
                board: "wke3,bke8".to_string()
            })
        );
    }

    #[test]
    fn test_player_errors_propagate() {
        let white = ScriptedPlayer {
            color: Color::White,
            boards: vec![],
        };
        let mut game = Game::new(Box::new(white), computer(Color::Black)).unwrap();
        assert_eq!(
            game.play(board!("wke1,bke8"), Color::White, 10),
            Err(GameError::Player(PlayerError::NoAvailableMoves))
        );
    }
}
