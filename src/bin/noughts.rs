//! noughts - Tic-Tac-Toe in the terminal
//!
//! Play against a friend on the same keyboard or against a computer opponent
//! that searches the whole game tree and never loses.

use anyhow::Result;
use clap::Parser;

use noughts::cli::commands::play::{self, PlayArgs};

#[derive(Parser)]
#[command(name = "noughts")]
#[command(version, about = "Tic-Tac-Toe against a friend or an unbeatable computer", long_about = None)]
struct Cli {
    #[command(flatten)]
    play: PlayArgs,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    play::execute(cli.play)
}
