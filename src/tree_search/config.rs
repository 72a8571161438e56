use super::{SelectionPolicy, StopCondition};

/// Everything a tree search needs besides the position and evaluator.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchConfig {
    pub selection: SelectionPolicy,
    pub stop: StopCondition,
    /// Seed for the weighted random policy. `None` draws one from entropy.
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            selection: SelectionPolicy::BreadthFirst,
            stop: StopCondition::MaxSamples(100),
            seed: None,
        }
    }
}
