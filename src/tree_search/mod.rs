//! Expandable game trees over boards.
//!
//! A `GameTree` starts as a single root node holding a board and the color to
//! move. Nodes are expanded on demand, one child per legal move, either all at
//! once with `expand_to_depth` or selectively by a `TreeExpander`. A
//! `ResultStrategy` folds the leaf evaluations back up into a `TreeResult`:
//! the principal continuation from a node and its value.

mod config;
mod error;
mod expander;
mod minimax;
mod selection;
mod stop_condition;
mod weighted_random;


use std::fmt::Write;
use std::marker::PhantomData;
use std::sync::Arc;

use log::trace;

use crate::board::color::Color;
use crate::board::Board;
use crate::evaluate::BoardEvaluator;
use crate::move_generation::MoveGenerator;

pub use config::SearchConfig;
pub use error::SearchError;
pub use expander::{ExpansionStats, TreeExpander};
pub use minimax::Minimax;
pub use selection::SelectionPolicy;
pub use stop_condition::StopCondition;
pub use weighted_random::{normalize_weights, weighted_random_choice};

pub type MinimaxTree<E> = GameTree<E, Minimax>;

/// Handle to a node of one particular `GameTree`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A principal continuation and the value it leads to.
///
/// `boards[0]` is the board of the node the result was computed for and the
/// last board is the leaf whose evaluation is `value`.
#[derive(Clone, Debug, PartialEq)]
pub struct TreeResult {
    pub boards: Vec<Board>,
    pub value: f64,
}

impl TreeResult {
    pub fn new(boards: Vec<Board>, value: f64) -> Self {
        Self { boards, value }
    }

    pub fn leaf(board: Board, value: f64) -> Self {
        Self::new(vec![board], value)
    }

    pub fn with_parent_board(self, board: Board) -> Self {
        let mut boards = Vec::with_capacity(self.boards.len() + 1);
        boards.push(board);
        boards.extend(self.boards);
        Self::new(boards, self.value)
    }

    /// The board chosen for the side to move at the first node, if any move was
    /// searched.
    pub fn next_board(&self) -> Option<&Board> {
        self.boards.get(1)
    }
}

/// Aggregates child results into a node's result.
///
/// For a node without children the result must be `TreeResult::leaf` of the
/// node's own board and value; otherwise it must start with the node's board
/// followed by the continuation of whichever child was selected.
pub trait ResultStrategy: Sized {
    fn result<E: BoardEvaluator + ?Sized>(tree: &mut GameTree<E, Self>, node: NodeId)
        -> TreeResult;
}

struct Node {
    board: Board,
    color: Color,
    depth: usize,
    parent: Option<NodeId>,
    // `None` until expanded; a terminal position is never expanded
    children: Option<Vec<NodeId>>,
    value: Option<f64>,
    result: Option<TreeResult>,
}

impl Node {
    fn new(board: Board, color: Color, depth: usize, parent: Option<NodeId>) -> Self {
        Self {
            board,
            color,
            depth,
            parent,
            children: None,
            value: None,
            result: None,
        }
    }
}

/// A search tree rooted at one board.
///
/// Nodes live in an arena owned by the tree and are addressed by `NodeId`.
/// Every node caches its evaluation, which never changes, and its aggregated
/// result, which is dropped along the ancestor chain whenever a descendant is
/// expanded. The tree owns the `MoveGenerator` session used to expand it, so
/// transposed positions share boards and cached moves.
pub struct GameTree<E: ?Sized, S = Minimax> {
    nodes: Vec<Node>,
    evaluator: Arc<E>,
    move_generator: MoveGenerator,
    strategy: PhantomData<fn() -> S>,
}

impl<E, S> GameTree<E, S>
where
    E: BoardEvaluator + ?Sized,
    S: ResultStrategy,
{
    pub fn new(board: Board, color: Color, evaluator: Arc<E>) -> Self {
        Self::with_move_generator(board, color, evaluator, MoveGenerator::new())
    }

    /// Builds a tree that continues an existing move generator session.
    pub fn with_move_generator(
        board: Board,
        color: Color,
        evaluator: Arc<E>,
        mut move_generator: MoveGenerator,
    ) -> Self {
        let board = move_generator.intern(board);
        Self {
            nodes: vec![Node::new(board, color, 0, None)],
            evaluator,
            move_generator,
            strategy: PhantomData,
        }
    }

    pub fn into_move_generator(self) -> MoveGenerator {
        self.move_generator
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId)
    }

    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    pub fn move_generator(&mut self) -> &mut MoveGenerator {
        &mut self.move_generator
    }

    pub fn board(&self, node: NodeId) -> &Board {
        &self.nodes[node.0].board
    }

    /// The color to move at `node`.
    pub fn color(&self, node: NodeId) -> Color {
        self.nodes[node.0].color
    }

    /// Plies between the root and `node`.
    pub fn depth(&self, node: NodeId) -> usize {
        self.nodes[node.0].depth
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.0].parent
    }

    /// Children of `node` in move generation order; empty until expanded.
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.nodes[node.0].children.as_deref().unwrap_or(&[])
    }

    pub fn is_expanded(&self, node: NodeId) -> bool {
        self.nodes[node.0].children.is_some()
    }

    /// The evaluator's score for the board at `node`, computed once.
    pub fn board_value(&mut self, node: NodeId) -> f64 {
        if let Some(value) = self.nodes[node.0].value {
            return value;
        }
        let value = self
            .evaluator
            .evaluate(&self.nodes[node.0].board, &mut self.move_generator);
        self.nodes[node.0].value = Some(value);
        value
    }

    /// False once the game is over at `node`: either color is checkmated or
    /// has no pieces left.
    pub fn can_expand(&mut self, node: NodeId) -> bool {
        let board = self.nodes[node.0].board.clone();
        Color::ALL.iter().all(|&color| {
            board.has_pieces(color) && !self.move_generator.is_color_in_checkmate(&board, color)
        })
    }

    /// Adds one child per legal move of the color to move and returns how many
    /// were created. Does nothing for an expanded or terminal node.
    pub fn expand(&mut self, node: NodeId) -> usize {
        if self.is_expanded(node) || !self.can_expand(node) {
            return 0;
        }

        let (board, color, depth) = {
            let parent = &self.nodes[node.0];
            (parent.board.clone(), parent.color, parent.depth)
        };
        let moves = self.move_generator.moves_for_color(&board, color);

        let mut children = Vec::with_capacity(moves.len());
        for next in moves.iter() {
            let id = NodeId(self.nodes.len());
            self.nodes.push(Node::new(
                next.clone(),
                color.opposite(),
                depth + 1,
                Some(node),
            ));
            children.push(id);
        }
        trace!(
            "expanded node {} at depth {} into {} children",
            node.0,
            depth,
            children.len()
        );

        let created = children.len();
        self.nodes[node.0].children = Some(children);
        self.invalidate_results(node);
        created
    }

    /// Expands every node below `node` breadth-first, down to `depth` plies
    /// beneath it. Terminal nodes end their branch early.
    pub fn expand_to_depth(&mut self, node: NodeId, depth: usize) {
        let mut level = vec![node];
        for _ in 0..depth {
            let mut next_level = Vec::new();
            for id in level {
                self.expand(id);
                next_level.extend_from_slice(self.children(id));
            }
            if next_level.is_empty() {
                break;
            }
            level = next_level;
        }
    }

    /// The strategy's result for `node`, cached until the subtree grows.
    pub fn result(&mut self, node: NodeId) -> TreeResult {
        if let Some(result) = &self.nodes[node.0].result {
            return result.clone();
        }
        let result = S::result(self, node);
        self.nodes[node.0].result = Some(result.clone());
        result
    }

    /// `TreeResult::leaf` for the board at `node`.
    pub fn leaf_result(&mut self, node: NodeId) -> TreeResult {
        let value = self.board_value(node);
        TreeResult::leaf(self.nodes[node.0].board.clone(), value)
    }

    /// An ancestor can only hold a cached result if all of its descendants do,
    /// so the walk stops at the first node without one.
    fn invalidate_results(&mut self, node: NodeId) {
        let mut cursor = Some(node);
        while let Some(id) = cursor {
            if self.nodes[id.0].result.take().is_none() {
                break;
            }
            cursor = self.nodes[id.0].parent;
        }
    }

    /// One line per node, depth first, indented by depth: depth, color to move,
    /// board notation and value.
    pub fn dump(&mut self) -> String {
        let mut out = String::new();
        let mut stack = vec![self.root()];
        while let Some(node) = stack.pop() {
            let value = self.board_value(node);
            let entry = &self.nodes[node.0];
            let _ = writeln!(
                out,
                "{:indent$}{} {} [{}] {}",
                "",
                entry.depth,
                entry.color,
                entry.board.to_notation(),
                value,
                indent = entry.depth * 2
            );
            stack.extend(self.children(node).iter().rev());
        }
        out
    }
}
