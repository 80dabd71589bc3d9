//! Tic-Tac-Toe game implementation

pub mod board;
pub mod lines;

pub use board::{Board, Cell, Player, Status};
pub use lines::{LineAnalyzer, WINNING_LINES};
