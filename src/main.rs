mod cli;

use cli::commands::Command;
use structopt::StructOpt;

fn main() {
    env_logger::init();
    cli::MinimaxChess::from_args().execute();
}
