//! Count positions command - grow the full game tree ply by ply.

use std::sync::Arc;
use std::time::{Duration, Instant};

use minimax_chess::board::color::Color;
use minimax_chess::board::Board;
use minimax_chess::evaluate::PieceValueEvaluator;
use minimax_chess::tree_search::MinimaxTree;
use structopt::StructOpt;

use super::util::board_or_starting_position;
use super::Command;

#[derive(StructOpt)]
pub struct CountPositionsArgs {
    #[structopt(short, long, default_value = "3")]
    pub depth: usize,
    #[structopt(long, help = "Position in piece notation (default: starting position)")]
    pub board: Option<Board>,
    #[structopt(short, long, default_value = "white")]
    pub color: Color,
}

impl Command for CountPositionsArgs {
    fn execute(self) {
        let board = board_or_starting_position(self.board);
        let evaluator = Arc::new(PieceValueEvaluator::new(self.color));
        let mut tree: MinimaxTree<PieceValueEvaluator> =
            MinimaxTree::new(board, self.color, evaluator);
        let root = tree.root();

        let mut total_positions = 0;
        let mut total_duration = Duration::from_secs(0);

        for depth in 1..=self.depth {
            let starting_time = Instant::now();
            tree.expand_to_depth(root, depth);
            let duration = starting_time.elapsed();

            let count = tree
                .node_ids()
                .filter(|&node| tree.depth(node) == depth)
                .count();
            let positions_per_second = count as f64 / duration.as_secs_f64();

            total_positions += count;
            total_duration += duration;

            println!(
                "depth: {}, positions: {}, positions per second: {}",
                depth, count, positions_per_second
            );
        }

        println!(
            "total positions: {}, distinct boards: {}, total duration: {:?}, positions per second: {}",
            total_positions,
            tree.move_generator().interned_board_count(),
            total_duration,
            total_positions as f64 / total_duration.as_secs_f64()
        );
    }
}
