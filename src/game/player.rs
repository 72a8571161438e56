use std::sync::Arc;

use log::{debug, info};
use thiserror::Error;

use crate::board::color::Color;
use crate::board::Board;
use crate::evaluate::BoardEvaluator;
use crate::move_generation::MoveGenerator;
use crate::tree_search::{
    ExpansionStats, GameTree, Minimax, SearchConfig, SearchError, TreeExpander, TreeResult,
};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlayerError {
    #[error("player plays {player} but its evaluator scores for {evaluator}")]
    EvaluatorColorMismatch { player: Color, evaluator: Color },
    #[error("no available moves")]
    NoAvailableMoves,
    #[error("search error: {0}")]
    Search(#[from] SearchError),
}

/// Anything that can choose the next board for one side of a game.
pub trait Player {
    fn color(&self) -> Color;

    fn next_board(&mut self, board: &Board) -> Result<Board, PlayerError>;
}

/// What one tree search found.
#[derive(Clone, Debug)]
pub struct SearchOutcome {
    pub result: TreeResult,
    pub stats: ExpansionStats,
    pub node_count: usize,
}

/// Picks moves by growing a minimax tree with a `TreeExpander` and following
/// the principal continuation from the root.
pub struct TreeSearchPlayer<E: ?Sized> {
    color: Color,
    evaluator: Arc<E>,
    expander: TreeExpander,
    move_generator: MoveGenerator,
}

impl<E: BoardEvaluator + ?Sized> TreeSearchPlayer<E> {
    pub fn new(
        color: Color,
        evaluator: Arc<E>,
        config: &SearchConfig,
    ) -> Result<Self, PlayerError> {
        if evaluator.eval_color() != color {
            return Err(PlayerError::EvaluatorColorMismatch {
                player: color,
                evaluator: evaluator.eval_color(),
            });
        }

        Ok(Self {
            color,
            evaluator,
            expander: TreeExpander::from_config(config),
            move_generator: MoveGenerator::new(),
        })
    }

    /// Searches from `board` with this player to move. The move generator
    /// session is carried over from one search to the next.
    pub fn search(&mut self, board: &Board) -> Result<SearchOutcome, PlayerError> {
        let move_generator = std::mem::take(&mut self.move_generator);
        let mut tree = GameTree::<E, Minimax>::with_move_generator(
            board.clone(),
            self.color,
            Arc::clone(&self.evaluator),
            move_generator,
        );
        let root = tree.root();

        let stats = self.expander.expand(&mut tree, root);
        let result = tree.result(root);
        let node_count = tree.node_count();
        self.move_generator = tree.into_move_generator();
        let stats = stats?;

        debug!(
            "{} searched {} nodes from {}: {}",
            self.color,
            node_count,
            board.to_notation(),
            stats
        );
        Ok(SearchOutcome {
            result,
            stats,
            node_count,
        })
    }
}

impl<E: BoardEvaluator + ?Sized> Player for TreeSearchPlayer<E> {
    fn color(&self) -> Color {
        self.color
    }

    fn next_board(&mut self, board: &Board) -> Result<Board, PlayerError> {
        let outcome = self.search(board)?;
        let next = outcome
            .result
            .next_board()
            .cloned()
            .ok_or(PlayerError::NoAvailableMoves)?;
        info!(
            "{} plays {} (value {})",
            self.color,
            next.to_notation(),
            outcome.result.value
        );
        Ok(next)
    }
}
