//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{
    best_move::BestMoveArgs, count_positions::CountPositionsArgs, watch::WatchArgs,
};

#[derive(StructOpt)]
#[structopt(
    name = "minimax-chess",
    about = "A chess move search built on an expandable minimax game tree"
)]
pub enum MinimaxChess {
    #[structopt(
        name = "best-move",
        about = "Search the position given with `--board` (default: starting position) for `--color` (default: white) and print the chosen move, its value and the principal continuation. The search is bounded by `--samples`, `--seconds` or `--max-depth` and explores the frontier with `--strategy` (bfs, greedy or weighted-random)."
    )]
    BestMove(BestMoveArgs),
    #[structopt(
        name = "watch",
        about = "Watch the computer play against itself from `--board` (default: starting position) for at most `--plies` plies (default: 100), using the same search options as `best-move`."
    )]
    Watch(WatchArgs),
    #[structopt(
        name = "count-positions",
        about = "Expand the full game tree ply by ply down to `--depth` (default: 3) and report the number of positions at each ply and the time it took."
    )]
    CountPositions(CountPositionsArgs),
}

impl crate::cli::commands::Command for MinimaxChess {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            BestMove(cmd),
            Watch(cmd),
            CountPositions(cmd),
        }
    }
}
