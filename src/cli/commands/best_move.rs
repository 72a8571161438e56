//! Best move command - search a position and print the chosen continuation.

use std::sync::Arc;

use minimax_chess::board::color::Color;
use minimax_chess::board::Board;
use minimax_chess::evaluate::PieceValueEvaluator;
use minimax_chess::game::TreeSearchPlayer;
use structopt::StructOpt;

use super::util::{board_or_starting_position, SearchArgs};
use super::Command;

#[derive(StructOpt)]
pub struct BestMoveArgs {
    #[structopt(
        long,
        help = "Position in piece notation, e.g. `wpe4,bpd5` (default: starting position)"
    )]
    pub board: Option<Board>,
    #[structopt(short, long, default_value = "white")]
    pub color: Color,
    #[structopt(flatten)]
    pub search: SearchArgs,
}

impl Command for BestMoveArgs {
    fn execute(self) {
        let board = board_or_starting_position(self.board);
        let evaluator = Arc::new(PieceValueEvaluator::new(self.color));
        let config = self.search.to_config();
        let mut player = match TreeSearchPlayer::new(self.color, evaluator, &config) {
            Ok(player) => player,
            Err(err) => {
                eprintln!("Failed to create player: {}", err);
                std::process::exit(1);
            }
        };

        let outcome = match player.search(&board) {
            Ok(outcome) => outcome,
            Err(err) => {
                eprintln!("Failed to calculate best move: {}", err);
                std::process::exit(1);
            }
        };

        let next = match outcome.result.next_board() {
            Some(next) => next,
            None => {
                eprintln!("There are no valid moves in the given position.");
                return;
            }
        };

        println!("{}", next);
        println!("best move: {}", next.to_notation());
        println!("value: {}", outcome.result.value);
        println!("continuation:");
        for (ply, board) in outcome.result.boards.iter().enumerate() {
            println!("  {}: {}", ply, board.to_notation());
        }
        println!("nodes: {}, {}", outcome.node_count, outcome.stats);
    }
}
