//! Board state representation and the move state machine

use std::fmt;

use super::lines::LineAnalyzer;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game, identified by the mark they place
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// Where the game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    InProgress,
    Won(Player),
    Draw,
}

impl Status {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Status::InProgress)
    }
}

/// The 3x3 grid together with whose turn it is and whether the game has ended.
///
/// `Board` is `Copy`, so the search engine's private scratch board is a plain
/// value copy. Once the status is terminal no further move is accepted, and
/// `current_player` stays on whoever made the final move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; 9],
    to_move: Player,
    status: Status,
}

impl Board {
    /// Create a new empty board with X to move
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; 9],
            to_move: Player::X,
            status: Status::InProgress,
        }
    }

    /// Discard every mark and return to the initial state
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Create a board from a string of nine cells (`X`, `O`, `.`).
    ///
    /// Whitespace is ignored, so rows may be separated by newlines. X is
    /// assumed to have opened: the turn is inferred from the piece counts and
    /// the status from the lines on the board.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The string has fewer than 9 non-whitespace characters
    /// - Any character is not a valid cell representation
    /// - The piece counts are invalid (X must equal O or be one ahead)
    /// - Both players hold a completed line
    /// - The winner could not have made the last move (X winning with equal
    ///   counts, or O winning with X a move ahead)
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() < 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().take(9).enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        let x_count = cells.iter().filter(|&&c| c == Cell::X).count();
        let o_count = cells.iter().filter(|&&c| c == Cell::O).count();
        let to_move = if x_count == o_count {
            Player::X
        } else if x_count == o_count + 1 {
            Player::O
        } else {
            return Err(crate::Error::InvalidPieceCounts { x_count, o_count });
        };

        let x_wins = LineAnalyzer::has_won(&cells, Player::X);
        let o_wins = LineAnalyzer::has_won(&cells, Player::O);
        let status = match (x_wins, o_wins) {
            (true, true) => {
                return Err(crate::Error::InvalidConfiguration {
                    message: format!("both players cannot have winning lines in '{s}'"),
                });
            }
            (true, false) if x_count != o_count + 1 => {
                return Err(crate::Error::InvalidConfiguration {
                    message: format!(
                        "X winning requires X to have exactly one more move than O in '{s}'"
                    ),
                });
            }
            (false, true) if x_count != o_count => {
                return Err(crate::Error::InvalidConfiguration {
                    message: format!(
                        "O winning requires O to have the same number of moves as X in '{s}'"
                    ),
                });
            }
            (true, false) => Status::Won(Player::X),
            (false, true) => Status::Won(Player::O),
            (false, false) if !cells.contains(&Cell::Empty) => Status::Draw,
            (false, false) => Status::InProgress,
        };

        // A finished game leaves the turn with the player who moved last
        let to_move = if status.is_terminal() {
            to_move.opponent()
        } else {
            to_move
        };

        Ok(Board {
            cells,
            to_move,
            status,
        })
    }

    /// Get cell at position (0-8)
    pub fn cell(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Player whose mark the next move places
    pub fn current_player(&self) -> Player {
        self.to_move
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        match self.status {
            Status::Won(player) => Some(player),
            _ => None,
        }
    }

    /// Check if the game is over (win or draw)
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.cells[pos] == Cell::Empty
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Get all empty positions in ascending order
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Get legal moves in this position (empty cells when game not terminal)
    pub fn legal_moves(&self) -> Vec<usize> {
        if self.is_over() {
            return Vec::new();
        }
        self.empty_positions()
    }

    /// Place the current player's mark at `pos` and advance the state machine.
    ///
    /// # Errors
    ///
    /// Returns error if the position is outside 0-8, the game is already over,
    /// or the cell is occupied. The board is left untouched in every error case.
    pub fn apply_move(&mut self, pos: usize) -> Result<Status, crate::Error> {
        if pos >= 9 {
            return Err(crate::Error::InvalidPosition { position: pos });
        }

        if self.is_over() {
            return Err(crate::Error::GameOver);
        }

        if !self.is_empty(pos) {
            return Err(crate::Error::OccupiedCell { position: pos });
        }

        let player = self.to_move;
        self.cells[pos] = player.to_cell();

        if LineAnalyzer::has_won(&self.cells, player) {
            self.status = Status::Won(player);
        } else if !self.cells.contains(&Cell::Empty) {
            self.status = Status::Draw;
        } else {
            self.to_move = player.opponent();
        }

        Ok(self.status)
    }

    /// The completed triple once the game has been won
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        let winner = self.winner()?;
        LineAnalyzer::completed_line(&self.cells, winner)
    }

    /// Write a mark without touching turn or status (search scratch boards only)
    pub(crate) fn place(&mut self, pos: usize, player: Player) {
        self.cells[pos] = player.to_cell();
    }

    /// Undo a [`place`](Self::place)
    pub(crate) fn clear(&mut self, pos: usize) {
        self.cells[pos] = Cell::Empty;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
