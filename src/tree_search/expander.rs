use std::collections::VecDeque;
use std::fmt;
use std::time::{Duration, Instant};

use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::{
    GameTree, NodeId, ResultStrategy, SearchConfig, SearchError, SelectionPolicy, StopCondition,
};
use crate::evaluate::BoardEvaluator;

/// Counters for one expansion run.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ExpansionStats {
    /// Frontier nodes taken, whether or not they could be expanded.
    pub samples: usize,
    /// Child nodes created.
    pub expansions: usize,
    pub elapsed: Duration,
}

impl fmt::Display for ExpansionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "samples: {}, expansions: {}, elapsed: {:?}",
            self.samples, self.expansions, self.elapsed
        )
    }
}

/// Grows a tree one frontier node at a time until its stop condition fires or
/// nothing is left to expand.
pub struct TreeExpander {
    selection: SelectionPolicy,
    stop: StopCondition,
    rng: StdRng,
}

impl TreeExpander {
    pub fn new(selection: SelectionPolicy, stop: StopCondition) -> Self {
        Self {
            selection,
            stop,
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(selection: SelectionPolicy, stop: StopCondition, seed: u64) -> Self {
        Self {
            selection,
            stop,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_config(config: &SearchConfig) -> Self {
        match config.seed {
            Some(seed) => Self::with_seed(config.selection, config.stop.clone(), seed),
            None => Self::new(config.selection, config.stop.clone()),
        }
    }

    pub fn selection(&self) -> SelectionPolicy {
        self.selection
    }

    pub fn stop_condition(&self) -> &StopCondition {
        &self.stop
    }

    /// Expands the subtree under `root`. Nodes that were already expanded by an
    /// earlier run are walked through again, so repeated runs keep deepening
    /// the same tree.
    pub fn expand<E, S>(
        &mut self,
        tree: &mut GameTree<E, S>,
        root: NodeId,
    ) -> Result<ExpansionStats, SearchError>
    where
        E: BoardEvaluator + ?Sized,
        S: ResultStrategy,
    {
        self.stop.start();
        let started_at = Instant::now();

        let mut frontier: VecDeque<NodeId> = VecDeque::new();
        frontier.push_back(root);
        let mut stats = ExpansionStats::default();

        while !frontier.is_empty()
            && !self
                .stop
                .should_stop(stats.samples, frontier.iter().map(|&node| tree.depth(node)))
        {
            let node = self
                .selection
                .take_next(&mut frontier, tree, &mut self.rng)?;

            if tree.can_expand(node) {
                stats.expansions += tree.expand(node);
                frontier.extend(tree.children(node).iter().copied());
            }
            stats.samples += 1;
        }

        stats.elapsed = started_at.elapsed();
        debug!(
            "{} expansion with {} stop: {}, {} nodes in tree, {} left on frontier",
            self.selection,
            self.stop,
            stats,
            tree.node_count(),
            frontier.len()
        );
        Ok(stats)
    }
}
