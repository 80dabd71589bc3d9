//! Terminal rendering of the board, prompts and announcements

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::Stylize,
    terminal::{Clear, ClearType},
};

use crate::tictactoe::{Board, Player};

const RULE_WIDTH: usize = 30;

#[derive(Debug, Clone, Copy)]
enum Tone {
    Title,
    MarkX,
    MarkO,
    Winning,
    Hint,
    Warning,
}

/// Writes every screen of the game; styling is optional so output stays
/// readable when piped or captured.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    styled: bool,
}

impl Renderer {
    pub fn new(styled: bool) -> Self {
        Self { styled }
    }

    fn paint(&self, text: &str, tone: Tone) -> String {
        if !self.styled {
            return text.to_string();
        }

        let content = match tone {
            Tone::Title => text.bold(),
            Tone::MarkX => text.cyan(),
            Tone::MarkO => text.magenta(),
            Tone::Winning => text.green().bold(),
            Tone::Hint => text.dim(),
            Tone::Warning => text.yellow(),
        };
        content.to_string()
    }

    fn mark(&self, player: Player) -> String {
        let tone = match player {
            Player::X => Tone::MarkX,
            Player::O => Tone::MarkO,
        };
        self.paint(&player.to_string(), tone)
    }

    fn rule(&self, w: &mut impl Write) -> io::Result<()> {
        writeln!(w, "{}", "─".repeat(RULE_WIDTH))
    }

    /// Wipe the screen and home the cursor (styled output only)
    pub fn clear(&self, w: &mut impl Write) -> io::Result<()> {
        if self.styled {
            queue!(w, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }

    /// Draw the grid. Empty cells show their 1-9 position number and the
    /// cells of a completed line are highlighted.
    pub fn board(&self, w: &mut impl Write, board: &Board) -> io::Result<()> {
        let winning = board.winning_line();

        writeln!(w)?;
        writeln!(w, "   {}", self.paint("Tic-Tac-Toe", Tone::Title))?;
        writeln!(w)?;

        for row in 0..3 {
            write!(w, "   ")?;
            for col in 0..3 {
                let idx = row * 3 + col;
                write!(w, "{}", if col > 0 { " │ " } else { " " })?;

                let on_line = winning.is_some_and(|line| line.contains(&idx));
                let text = match board.cell(idx).to_player() {
                    Some(player) if on_line => self.paint(&player.to_string(), Tone::Winning),
                    Some(player) => self.mark(player),
                    None => self.paint(&(idx + 1).to_string(), Tone::Hint),
                };
                write!(w, "{text}")?;
            }
            writeln!(w)?;

            if row < 2 {
                writeln!(w, "   ───┼───┼───")?;
            }
        }
        writeln!(w)
    }

    pub fn menu(&self, w: &mut impl Write) -> io::Result<()> {
        writeln!(w)?;
        writeln!(w, "   {}", self.paint("Tic-Tac-Toe", Tone::Title))?;
        writeln!(w)?;
        writeln!(w, "   Select game mode:")?;
        writeln!(w)?;
        writeln!(w, "   {}. Two Players", self.paint("1", Tone::MarkX))?;
        writeln!(w, "   {}. vs Computer", self.paint("2", Tone::MarkO))?;
        writeln!(w)?;
        write!(w, "  Enter choice (1 or 2): ")
    }

    pub fn prompt(&self, w: &mut impl Write, player: Player) -> io::Result<()> {
        writeln!(w, "  Player {}'s turn", self.mark(player))?;
        write!(w, "  Enter position (1-9): ")
    }

    pub fn error(&self, w: &mut impl Write, message: &str) -> io::Result<()> {
        writeln!(w, "  {}", self.paint(message, Tone::Warning))?;
        writeln!(w)
    }

    pub fn computer_move(&self, w: &mut impl Write, pos: usize) -> io::Result<()> {
        writeln!(
            w,
            "  Computer plays position {}",
            self.paint(&(pos + 1).to_string(), Tone::MarkO)
        )
    }

    pub fn winner(&self, w: &mut impl Write, winner: Player) -> io::Result<()> {
        let tone = match winner {
            Player::X => Tone::MarkX,
            Player::O => Tone::MarkO,
        };
        self.rule(w)?;
        writeln!(w, "  {}", self.paint(&format!("Player {winner} wins!"), tone))?;
        self.rule(w)?;
        writeln!(w)
    }

    pub fn winner_vs_computer(&self, w: &mut impl Write, human_won: bool) -> io::Result<()> {
        self.rule(w)?;
        if human_won {
            writeln!(w, "  {}", self.paint("You win!", Tone::Winning))?;
        } else {
            writeln!(w, "  {}", self.paint("Computer wins!", Tone::MarkO))?;
        }
        self.rule(w)?;
        writeln!(w)
    }

    pub fn draw(&self, w: &mut impl Write) -> io::Result<()> {
        self.rule(w)?;
        writeln!(w, "  {}", self.paint("It's a draw!", Tone::Warning))?;
        self.rule(w)?;
        writeln!(w)
    }

    pub fn play_again(&self, w: &mut impl Write) -> io::Result<()> {
        write!(w, "  Play again? (y/n): ")
    }

    pub fn goodbye(&self, w: &mut impl Write) -> io::Result<()> {
        writeln!(w)?;
        writeln!(w, "  Thanks for playing! Goodbye!")?;
        writeln!(w)
    }
}
