//! Terminal front end for the game
//!
//! This module provides the command-line entry point, the menu and game loop,
//! and everything that reads from or writes to the terminal. The core
//! ([`crate::tictactoe`] and [`crate::search`]) never performs I/O itself.

pub mod commands;
pub mod config;
pub mod input;
pub mod output;
pub mod render;
pub mod session;
