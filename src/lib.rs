//! Tic-Tac-Toe in the terminal, against a friend or an unbeatable computer
//!
//! This crate provides:
//! - The board state machine ([`tictactoe::Board`])
//! - Optimal move selection by minimax search with alpha-beta pruning
//! - The terminal front end: menu, rendering, input parsing and game loop

pub mod cli;
pub mod error;
pub mod search;
pub mod tictactoe;

pub use error::{Error, Result};
pub use search::{Minimax, best_move};
pub use tictactoe::{Board, Cell, Player, Status};
