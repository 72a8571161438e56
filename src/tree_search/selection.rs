use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use rand::Rng;

use super::weighted_random::weighted_random_choice;
use super::{GameTree, NodeId, ResultStrategy, SearchError};
use crate::evaluate::BoardEvaluator;

/// How the expander picks the next frontier node to expand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionPolicy {
    /// Oldest frontier node first.
    BreadthFirst,
    /// Frontier node with the highest board value; the earliest one on ties.
    Greedy,
    /// Frontier node drawn with probability proportional to its shifted board value.
    WeightedRandom,
}

impl SelectionPolicy {
    /// Removes the next node to expand from `frontier`.
    pub fn take_next<E, S, R>(
        &self,
        frontier: &mut VecDeque<NodeId>,
        tree: &mut GameTree<E, S>,
        rng: &mut R,
    ) -> Result<NodeId, SearchError>
    where
        E: BoardEvaluator + ?Sized,
        S: ResultStrategy,
        R: Rng,
    {
        let index = match self {
            SelectionPolicy::BreadthFirst => 0,
            SelectionPolicy::Greedy => {
                let mut best: Option<(usize, f64)> = None;
                for (index, &node) in frontier.iter().enumerate() {
                    let value = tree.board_value(node);
                    match best {
                        Some((_, best_value)) if value <= best_value => {}
                        _ => best = Some((index, value)),
                    }
                }
                best.map(|(index, _)| index).ok_or(SearchError::NoCandidates)?
            }
            SelectionPolicy::WeightedRandom => {
                let weights: Vec<f64> = frontier
                    .iter()
                    .map(|&node| tree.board_value(node))
                    .collect();
                weighted_random_choice(&weights, rng)?
            }
        };

        frontier.remove(index).ok_or(SearchError::NoCandidates)
    }
}

impl fmt::Display for SelectionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SelectionPolicy::BreadthFirst => "bfs",
            SelectionPolicy::Greedy => "greedy",
            SelectionPolicy::WeightedRandom => "weighted-random",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for SelectionPolicy {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bfs" | "breadth-first" => Ok(SelectionPolicy::BreadthFirst),
            "greedy" => Ok(SelectionPolicy::Greedy),
            "weighted-random" | "random" => Ok(SelectionPolicy::WeightedRandom),
            _ => Err("invalid selection policy; options are: bfs, greedy, weighted-random"),
        }
    }
}
