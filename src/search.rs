//! Optimal move selection by minimax search with alpha-beta pruning.
//!
//! The engine explores the complete game tree below the current position. A
//! single private copy of the board is taken per call; every hypothetical move
//! is placed on that copy and cleared again once its subtree has been scored,
//! so the board driving the real game is never touched.
//!
//! Scores are always from the perspective of the searching player ("self"):
//!
//! - `WIN_SCORE - depth` when self has completed a line
//! - `depth - WIN_SCORE` when the opponent has
//! - `0` for a full board without a line
//!
//! Subtracting the depth makes faster wins and slower losses score better
//! among otherwise equal outcomes.

use crate::{
    Error, Result,
    tictactoe::{Board, Cell, LineAnalyzer, Player},
};

/// Base value of a decided game. Must stay above the deepest possible ply (9)
/// so that every win outscores a draw and every loss scores below one.
pub const WIN_SCORE: i32 = 10;

/// Exhaustive searcher for one side of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Minimax {
    player: Player,
    opponent: Player,
}

impl Minimax {
    /// Create a searcher choosing moves for `player`
    pub fn new(player: Player) -> Self {
        Self {
            player,
            opponent: player.opponent(),
        }
    }

    /// The mark this searcher plays
    pub fn player(&self) -> Player {
        self.player
    }

    /// Select the optimal move for this searcher's player.
    ///
    /// Moves are scored in ascending position order and the first move with
    /// the highest score is returned, so the result is fully deterministic.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoValidMoves`] when the game is already over.
    pub fn best_move(&self, board: &Board) -> Result<usize> {
        let mut best: Option<(usize, i32)> = None;
        for (pos, score) in self.evaluate_moves(board) {
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((pos, score));
            }
        }

        best.map(|(pos, _)| pos).ok_or(Error::NoValidMoves)
    }

    /// Score every legal move in the given position, in ascending position order.
    ///
    /// Each score is the exact minimax value of the position after the move,
    /// assuming the opponent replies optimally.
    pub fn evaluate_moves(&self, board: &Board) -> Vec<(usize, i32)> {
        let mut scratch = *board;

        board
            .legal_moves()
            .into_iter()
            .map(|pos| {
                scratch.place(pos, self.player);
                let score = self.minimax(&mut scratch, 0, false, i32::MIN, i32::MAX);
                scratch.clear(pos);
                (pos, score)
            })
            .collect()
    }

    fn minimax(
        &self,
        board: &mut Board,
        depth: i32,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        if let Some(score) = self.leaf_score(board, depth) {
            return score;
        }

        if maximizing {
            let mut max_eval = i32::MIN;
            for pos in 0..9 {
                if !board.is_empty(pos) {
                    continue;
                }
                board.place(pos, self.player);
                let eval = self.minimax(board, depth + 1, false, alpha, beta);
                board.clear(pos);

                max_eval = max_eval.max(eval);
                alpha = alpha.max(eval);
                if beta <= alpha {
                    break; // Beta cutoff
                }
            }
            max_eval
        } else {
            let mut min_eval = i32::MAX;
            for pos in 0..9 {
                if !board.is_empty(pos) {
                    continue;
                }
                board.place(pos, self.opponent);
                let eval = self.minimax(board, depth + 1, true, alpha, beta);
                board.clear(pos);

                min_eval = min_eval.min(eval);
                beta = beta.min(eval);
                if beta <= alpha {
                    break; // Alpha cutoff
                }
            }
            min_eval
        }
    }

    /// Value of a finished position, `None` while play can continue
    fn leaf_score(&self, board: &Board, depth: i32) -> Option<i32> {
        let cells = board.cells();
        if LineAnalyzer::has_won(cells, self.player) {
            Some(WIN_SCORE - depth)
        } else if LineAnalyzer::has_won(cells, self.opponent) {
            Some(depth - WIN_SCORE)
        } else if !cells.contains(&Cell::Empty) {
            Some(0)
        } else {
            None
        }
    }
}

/// Optimal move for `player` on `board`.
///
/// Shorthand for `Minimax::new(player).best_move(board)`.
///
/// # Errors
///
/// Returns [`Error::NoValidMoves`] when the game is already over.
pub fn best_move(board: &Board, player: Player) -> Result<usize> {
    Minimax::new(player).best_move(board)
}
