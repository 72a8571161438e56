use super::{GameTree, NodeId, ResultStrategy, TreeResult};
use crate::evaluate::BoardEvaluator;

/// Picks the child result with the highest value when the node's color to
/// move is the evaluator's color, and the lowest value otherwise. The winning
/// child's value is passed up unchanged, and ties go to the earliest child.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Minimax;

impl ResultStrategy for Minimax {
    fn result<E: BoardEvaluator + ?Sized>(
        tree: &mut GameTree<E, Self>,
        node: NodeId,
    ) -> TreeResult {
        let maximize = tree.color(node) == tree.evaluator().eval_color();
        let children = tree.children(node).to_vec();

        let mut best: Option<TreeResult> = None;
        for child in children {
            let candidate = tree.result(child);
            let improves = match &best {
                None => true,
                Some(current) if maximize => candidate.value > current.value,
                Some(current) => candidate.value < current.value,
            };
            if improves {
                best = Some(candidate);
            }
        }

        match best {
            Some(best) => best.with_parent_board(tree.board(node).clone()),
            None => tree.leaf_result(node),
        }
    }
}
