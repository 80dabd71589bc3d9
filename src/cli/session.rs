//! Menu loop and game loop.
//!
//! A [`Session`] owns the one [`Board`] in play and lends it to the renderer
//! and the search engine. Input and output are generic so whole sessions can
//! be scripted in tests.

use std::{
    io::{BufRead, Write},
    thread,
};

use anyhow::{Context, Result};
use log::{Level, debug, log_enabled, trace};

use super::{
    config::{GameConfig, GameMode},
    input::{self, Command, MenuChoice},
    output,
    render::Renderer,
};
use crate::{Error, search::Minimax, tictactoe::Board};

/// What the caller should do once a game loop returns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Menu,
    Exit,
}

/// One run of the program: menu, games and prompts over a pair of streams
pub struct Session<R, W> {
    input: R,
    output: W,
    renderer: Renderer,
    config: GameConfig,
    board: Board,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, config: GameConfig) -> Self {
        Self {
            input,
            output,
            renderer: Renderer::new(config.color),
            config,
            board: Board::new(),
        }
    }

    /// The board of the current (or last) game
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Consume the session and hand back the output stream
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until the user quits or input ends.
    ///
    /// With a preset mode the menu is skipped and the session ends when that
    /// mode's games end.
    pub fn run(&mut self) -> Result<()> {
        if let Some(mode) = self.config.mode {
            if self.play(mode)? == Flow::Menu {
                self.renderer.goodbye(&mut self.output)?;
            }
            return self.flush();
        }

        loop {
            self.renderer.clear(&mut self.output)?;
            self.renderer.menu(&mut self.output)?;

            let Some(line) = self.read_line()? else {
                return self.flush();
            };

            match input::parse_menu_choice(&line) {
                Some(MenuChoice::Quit) => {
                    self.renderer.goodbye(&mut self.output)?;
                    return self.flush();
                }
                Some(MenuChoice::Play(mode)) => {
                    if self.play(mode)? == Flow::Exit {
                        return self.flush();
                    }
                }
                None => {}
            }
        }
    }

    /// Play rounds of `mode` until the player declines another one
    fn play(&mut self, mode: GameMode) -> Result<Flow> {
        debug!("starting {mode:?} game");
        let engine = Minimax::new(self.config.computer);

        loop {
            self.board.reset();
            let mut notice: Option<&'static str> = None;

            while !self.board.is_over() {
                self.redraw()?;
                if let Some(message) = notice.take() {
                    self.renderer.error(&mut self.output, message)?;
                }

                if mode == GameMode::Computer && self.board.current_player() == engine.player() {
                    self.computer_turn(&engine)?;
                    continue;
                }

                self.renderer.prompt(&mut self.output, self.board.current_player())?;
                let Some(line) = self.read_line()? else {
                    return Ok(Flow::Exit);
                };

                let result = input::parse_command(&line).and_then(|command| match command {
                    Command::Move(pos) => self.board.apply_move(pos).map(Some),
                    Command::Quit => Ok(None),
                });
                match result {
                    Ok(Some(status)) => trace!("move accepted, status {status:?}"),
                    Ok(None) => return Ok(Flow::Menu),
                    Err(err) => {
                        trace!("move rejected: {err}");
                        notice = Some(rejection_message(&err));
                    }
                }
            }

            self.announce_result(mode)?;
            match self.ask_play_again()? {
                Some(true) => continue,
                Some(false) => return Ok(Flow::Menu),
                None => return Ok(Flow::Exit),
            }
        }
    }

    fn computer_turn(&mut self, engine: &Minimax) -> Result<()> {
        self.flush()?;
        if self.config.think_ms > 0 {
            let spinner = output::create_spinner("Computer is thinking...")?;
            thread::sleep(self.config.think_delay());
            spinner.finish_and_clear();
        }

        if log_enabled!(Level::Debug) {
            debug!("root scores: {:?}", engine.evaluate_moves(&self.board));
        }
        let pos = engine
            .best_move(&self.board)
            .context("computer asked to move on a finished board")?;
        self.board
            .apply_move(pos)
            .context("computer chose an illegal move")?;
        debug!("computer ({}) took index {pos}", engine.player());

        self.redraw()?;
        self.renderer.computer_move(&mut self.output, pos)?;
        self.flush()?;
        thread::sleep(self.config.reveal_delay());
        Ok(())
    }

    fn announce_result(&mut self, mode: GameMode) -> Result<()> {
        self.redraw()?;
        match self.board.winner() {
            Some(winner) if mode == GameMode::Computer => {
                let human_won = winner != self.config.computer;
                self.renderer.winner_vs_computer(&mut self.output, human_won)?;
            }
            Some(winner) => self.renderer.winner(&mut self.output, winner)?,
            None => self.renderer.draw(&mut self.output)?,
        }
        Ok(())
    }

    /// `None` when input has ended
    fn ask_play_again(&mut self) -> Result<Option<bool>> {
        self.renderer.play_again(&mut self.output)?;
        Ok(self.read_line()?.map(|line| input::is_yes(&line)))
    }

    fn redraw(&mut self) -> Result<()> {
        self.renderer.clear(&mut self.output)?;
        self.renderer.board(&mut self.output, &self.board)?;
        Ok(())
    }

    /// Next input line, `None` at end of input
    fn read_line(&mut self) -> Result<Option<String>> {
        self.flush()?;
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read from input")?;
        if read == 0 {
            debug!("input closed");
            return Ok(None);
        }
        trace!("input line {:?}", line.trim_end());
        Ok(Some(line))
    }

    fn flush(&mut self) -> Result<()> {
        self.output.flush().context("failed to flush output")
    }
}

/// Message shown above the prompt after a rejected move
fn rejection_message(err: &Error) -> &'static str {
    match err {
        Error::InvalidInput { .. } => "Please enter a number between 1-9",
        Error::OutOfRange { .. } | Error::InvalidPosition { .. } => "Invalid position! Use 1-9",
        Error::OccupiedCell { .. } => "That cell is already taken!",
        Error::GameOver | Error::NoValidMoves => "The game is already over",
        Error::InvalidBoardLength { .. }
        | Error::InvalidCellCharacter { .. }
        | Error::InvalidPieceCounts { .. }
        | Error::InvalidConfiguration { .. } => "That move is not allowed",
    }
}
