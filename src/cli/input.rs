//! Line-based input parsing.
//!
//! Players number the cells 1-9, row by row. This module is the only place
//! that numbering is turned into the 0-8 indices used by [`crate::Board`].

use crate::{Error, Result};

use super::config::GameMode;

/// A line typed at the move prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Cell index (0-8) to play
    Move(usize),
    /// Leave the current game
    Quit,
}

/// A line typed at the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Play(GameMode),
    Quit,
}

/// `q` or `quit`, in any case
pub fn is_quit(line: &str) -> bool {
    let line = line.trim();
    line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit")
}

/// `y` or `yes`, in any case
pub fn is_yes(line: &str) -> bool {
    let line = line.trim();
    line.eq_ignore_ascii_case("y") || line.eq_ignore_ascii_case("yes")
}

/// Parse a move prompt line.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] for anything that is not a number and
/// [`Error::OutOfRange`] for numbers outside 1-9.
pub fn parse_command(line: &str) -> Result<Command> {
    if is_quit(line) {
        return Ok(Command::Quit);
    }

    let trimmed = line.trim();
    let number: i64 = trimmed.parse().map_err(|_| Error::InvalidInput {
        input: trimmed.to_string(),
    })?;

    if !(1..=9).contains(&number) {
        return Err(Error::OutOfRange {
            input: trimmed.to_string(),
        });
    }

    Ok(Command::Move((number - 1) as usize))
}

/// Parse a main menu line; `None` means the menu should be shown again.
pub fn parse_menu_choice(line: &str) -> Option<MenuChoice> {
    if is_quit(line) {
        return Some(MenuChoice::Quit);
    }

    match line.trim() {
        "1" => Some(MenuChoice::Play(GameMode::TwoPlayer)),
        "2" => Some(MenuChoice::Play(GameMode::Computer)),
        _ => None,
    }
}
