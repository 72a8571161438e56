//! Shared utilities for CLI commands.

use std::time::Duration;

use minimax_chess::board::Board;
use minimax_chess::tree_search::{SearchConfig, SelectionPolicy, StopCondition};
use structopt::StructOpt;

/// Search options shared by every command that runs a tree search. At most one
/// of `--max-depth`, `--seconds` and `--samples` is used, in that order of
/// preference; with none of them the search takes 100 samples.
#[derive(StructOpt)]
pub struct SearchArgs {
    #[structopt(
        long,
        default_value = "bfs",
        help = "Frontier selection policy: bfs, greedy or weighted-random"
    )]
    pub strategy: SelectionPolicy,
    #[structopt(long, help = "Stop after this many frontier samples")]
    pub samples: Option<usize>,
    #[structopt(long, help = "Stop after this many seconds of expansion")]
    pub seconds: Option<f64>,
    #[structopt(
        long,
        help = "Stop once the frontier holds a node deeper than this many plies"
    )]
    pub max_depth: Option<usize>,
    #[structopt(long, help = "Seed for the weighted-random policy")]
    pub seed: Option<u64>,
}

impl SearchArgs {
    pub fn to_config(&self) -> SearchConfig {
        let defaults = SearchConfig::default();
        let stop = if let Some(depth) = self.max_depth {
            StopCondition::MaxDepth(depth)
        } else if let Some(seconds) = self.seconds {
            StopCondition::max_time(Duration::from_secs_f64(seconds.max(0.0)))
        } else if let Some(samples) = self.samples {
            StopCondition::MaxSamples(samples)
        } else {
            defaults.stop
        };

        SearchConfig {
            selection: self.strategy,
            stop,
            seed: self.seed,
        }
    }
}

pub(crate) fn board_or_starting_position(board: Option<Board>) -> Board {
    board.unwrap_or_else(Board::starting_position)
}
