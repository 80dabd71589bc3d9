//! Play command - run an interactive session on the terminal

use std::io;

use anyhow::{Result, anyhow};
use clap::Parser;
use log::debug;

use crate::{
    cli::{
        config::{GameConfig, GameMode},
        session::Session,
    },
    tictactoe::Player,
};

#[derive(Parser, Debug)]
pub struct PlayArgs {
    /// Skip the menu and play this mode
    #[arg(long, short = 'm', value_enum)]
    pub mode: Option<GameMode>,

    /// Which mark the computer plays (`x` or `o`); X always moves first
    #[arg(long, short = 'c', default_value = "o")]
    pub computer: String,

    /// Disable colours and screen clearing (also honours NO_COLOR)
    #[arg(long)]
    pub no_color: bool,

    /// Pause before each computer move, in milliseconds
    #[arg(long, default_value_t = 500)]
    pub think_ms: u64,

    /// Pause after each computer move is shown, in milliseconds
    #[arg(long, default_value_t = 300)]
    pub reveal_ms: u64,
}

impl PlayArgs {
    /// Resolve the arguments into a session configuration
    pub fn to_config(&self) -> Result<GameConfig> {
        let computer = parse_player_token(&self.computer, "--computer")?;
        let color = !self.no_color && std::env::var_os("NO_COLOR").is_none();

        Ok(GameConfig::default()
            .with_mode(self.mode)
            .with_computer(computer)
            .with_color(color)
            .with_delays(self.think_ms, self.reveal_ms))
    }
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let config = args.to_config()?;
    debug!("session config: {config:?}");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), config);
    session.run()
}

pub(crate) fn parse_player_token(value: &str, flag: &str) -> Result<Player> {
    match value.trim().to_ascii_lowercase().as_str() {
        "x" | "first" | "player1" | "p1" => Ok(Player::X),
        "o" | "second" | "player2" | "p2" => Ok(Player::O),
        other => Err(anyhow!(
            "Invalid value '{other}' for {flag} (expected 'x' or 'o')"
        )),
    }
}
