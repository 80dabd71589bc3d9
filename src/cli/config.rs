//! Runtime settings for a terminal session

use std::time::Duration;

use clap::ValueEnum;

use crate::tictactoe::Player;

/// Who sits on the other side of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GameMode {
    /// Two humans sharing the keyboard
    TwoPlayer,
    /// One human against the minimax engine
    Computer,
}

/// Settings shared by the menu and game loop.
///
/// # Examples
///
/// ```
/// use noughts::{Player, cli::config::{GameConfig, GameMode}};
///
/// let config = GameConfig::default()
///     .with_mode(Some(GameMode::Computer))
///     .with_computer(Player::X)
///     .with_color(false)
///     .with_delays(0, 0);
/// assert_eq!(config.computer, Player::X);
/// ```
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Mode to start in; `None` shows the menu
    pub mode: Option<GameMode>,

    /// Mark played by the computer in [`GameMode::Computer`]
    pub computer: Player,

    /// Emit ANSI colours and screen clears
    pub color: bool,

    /// Pause before the computer moves, in milliseconds
    pub think_ms: u64,

    /// Pause after the computer's move is shown, in milliseconds
    pub reveal_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: None,
            computer: Player::O,
            color: true,
            think_ms: 500,
            reveal_ms: 300,
        }
    }
}

impl GameConfig {
    /// Start directly in `mode` instead of showing the menu.
    pub fn with_mode(mut self, mode: Option<GameMode>) -> Self {
        self.mode = mode;
        self
    }

    /// Set the mark the computer plays.
    pub fn with_computer(mut self, computer: Player) -> Self {
        self.computer = computer;
        self
    }

    /// Enable or disable ANSI styling.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Set both pacing delays in milliseconds.
    pub fn with_delays(mut self, think_ms: u64, reveal_ms: u64) -> Self {
        self.think_ms = think_ms;
        self.reveal_ms = reveal_ms;
        self
    }

    pub fn think_delay(&self) -> Duration {
        Duration::from_millis(self.think_ms)
    }

    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_ms)
    }
}
