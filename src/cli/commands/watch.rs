//! Watch command - watch the computer play against itself.

use std::sync::Arc;
use std::time::Duration;

use minimax_chess::board::color::Color;
use minimax_chess::board::Board;
use minimax_chess::evaluate::PieceValueEvaluator;
use minimax_chess::game::{Game, GameError, Player, PlayerError, TreeSearchPlayer};
use minimax_chess::tree_search::SearchConfig;
use structopt::StructOpt;

use super::util::{board_or_starting_position, SearchArgs};
use super::Command;

#[derive(StructOpt)]
pub struct WatchArgs {
    #[structopt(long, help = "Starting position in piece notation (default: starting position)")]
    pub board: Option<Board>,
    #[structopt(long, default_value = "100", help = "Stop after this many plies")]
    pub plies: usize,
    #[structopt(
        long = "delay",
        default_value = "0",
        help = "Delay between moves in milliseconds"
    )]
    pub delay_ms: u64,
    #[structopt(flatten)]
    pub search: SearchArgs,
}

fn computer(color: Color, config: &SearchConfig) -> Result<Box<dyn Player>, PlayerError> {
    let evaluator = Arc::new(PieceValueEvaluator::new(color));
    Ok(Box::new(TreeSearchPlayer::new(color, evaluator, config)?))
}

fn computer_game(white: &SearchConfig, black: &SearchConfig) -> Result<Game, GameError> {
    Game::new(computer(Color::White, white)?, computer(Color::Black, black)?)
}

impl Command for WatchArgs {
    fn execute(self) {
        let white_config = self.search.to_config();
        let black_config = SearchConfig {
            seed: white_config.seed.map(|seed| seed.wrapping_add(1)),
            ..white_config.clone()
        };

        let mut game = match computer_game(&white_config, &black_config) {
            Ok(game) => game,
            Err(err) => {
                eprintln!("Failed to set up game: {}", err);
                std::process::exit(1);
            }
        };

        let board = board_or_starting_position(self.board);
        println!("{}", board);
        let delay = Duration::from_millis(self.delay_ms);
        let result = game.play_with(board, Color::White, self.plies, |ply, color, board| {
            println!("ply {}: {} moved", ply, color);
            println!("{}", board);
            if !delay.is_zero() {
                std::thread::sleep(delay);
            }
        });

        match result {
            Ok(outcome) => println!("{}", outcome),
            Err(err) => {
                eprintln!("Game aborted: {}", err);
                std::process::exit(1);
            }
        }
    }
}
