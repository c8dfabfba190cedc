//! Interactive session: reads commands, drives the [`Game`], prints results
//!
//! # Commands
//!
//! | Input | Action |
//! |-------|--------|
//! | `e2` / `moves e2` | show the legal targets of the piece on e2 |
//! | `e2 e4` / `e2-e4` / `move e2 e4` | move the piece on e2 to e4 |
//! | `board` | redraw the board |
//! | `reset` | restart the current level |
//! | `next` | skip to the next level |
//! | `levels` | list the levels |
//! | `load <name>` | switch to a level by name |
//! | `help` | show this list |
//! | `quit` | leave |
//!
//! # Move notifications
//!
//! The game's observer forwards every [`PieceMoved`] into a channel that the
//! session drains after each command, so player moves and automatic replies
//! are reported in the order they were committed.

use std::io::{BufRead, Write};
use std::str::FromStr;

use chess_rules::{Game, LevelStatus, PieceMoved, ScenarioTable, Square};
use crossbeam_channel::{unbounded, Receiver, Sender};
use tracing::{debug, info};

use crate::error::{AppError, AppResult};
use crate::render::{render_board, status_line, RenderOptions};

const HELP: &str = "\
commands:
  e2 | moves e2           legal targets of the piece on e2
  e2 e4 | move e2 e4      move the piece on e2 to e4
  board                   redraw the board
  reset                   restart the level
  next                    skip to the next level
  levels                  list the levels
  load <name>             play the named level
  help                    this list
  quit                    leave";

/// A parsed line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Moves(String),
    Move { from: String, to: String },
    Board,
    Reset,
    Next,
    Levels,
    Load(String),
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = AppError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let unknown = || AppError::UnknownCommand {
            input: line.trim().to_string(),
        };
        let normalized = line.trim().replace('-', " ");
        let words: Vec<&str> = normalized.split_whitespace().collect();

        let command = match words.as_slice() {
            ["board" | "b"] => Command::Board,
            ["reset" | "r"] => Command::Reset,
            ["next" | "n"] => Command::Next,
            ["levels" | "list"] => Command::Levels,
            ["help" | "h" | "?"] => Command::Help,
            ["quit" | "q" | "exit"] => Command::Quit,
            ["load" | "level", _, ..] => {
                // Level names may themselves contain dashes
                let name = line.trim().splitn(2, char::is_whitespace).nth(1);
                Command::Load(name.map(str::trim).unwrap_or_default().to_string())
            }
            ["moves", square] | [square] if is_square(square) => {
                Command::Moves(square.to_string())
            }
            ["move", from, to] | [from, to] if is_square(from) && is_square(to) => Command::Move {
                from: from.to_string(),
                to: to.to_string(),
            },
            _ => return Err(unknown()),
        };
        Ok(command)
    }
}

fn is_square(word: &str) -> bool {
    Square::from_notation(word).is_some()
}

/// Whether the read loop keeps going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session {
    table: ScenarioTable,
    game: Game,
    options: RenderOptions,
    moves_tx: Sender<PieceMoved>,
    moves_rx: Receiver<PieceMoved>,
}

impl Session {
    /// Start a session on level `name`
    pub fn new(table: ScenarioTable, name: &str, options: RenderOptions) -> AppResult<Session> {
        let game = Game::load(&table, name)?;
        let (moves_tx, moves_rx) = unbounded();

        let mut session = Session {
            table,
            game,
            options,
            moves_tx,
            moves_rx,
        };
        session.attach_observer();
        Ok(session)
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn scenario_name(&self) -> &str {
        self.game.scenario_name()
    }

    fn attach_observer(&mut self) {
        let tx = self.moves_tx.clone();
        self.game.set_observer(Box::new(move |event: &PieceMoved| {
            if tx.send(event.clone()).is_err() {
                debug!("[SESSION] Move channel closed, dropping notification");
            }
        }));
    }

    /// Read commands from `input` until `quit` or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> AppResult<()> {
        self.show(out)?;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let flow = match line.parse::<Command>() {
                Ok(command) => self.execute(command, out)?,
                Err(err) => {
                    writeln!(out, "{}", err)?;
                    Flow::Continue
                }
            };
            if flow == Flow::Quit {
                break;
            }
        }

        Ok(())
    }

    /// Run one command, writing its output to `out`
    pub fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> AppResult<Flow> {
        match command {
            Command::Moves(square) => self.show_moves(&square, out)?,
            Command::Move { from, to } => self.play(&from, &to, out)?,
            Command::Board => self.show(out)?,
            Command::Reset => {
                self.game.reset();
                self.report_moves(out)?;
                self.show(out)?;
            }
            Command::Next => match self.next_level() {
                Some(next) => self.load(&next, out)?,
                None => writeln!(out, "This is the last level.")?,
            },
            Command::Levels => {
                for name in self.table.names() {
                    let marker = if name == self.game.scenario_name() { '*' } else { ' ' };
                    writeln!(out, "{} {}", marker, name)?;
                }
            }
            Command::Load(name) => self.load(&name, out)?,
            Command::Help => writeln!(out, "{}", HELP)?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn next_level(&self) -> Option<String> {
        self.table
            .next_after(self.game.scenario_name())
            .map(str::to_string)
    }

    /// Switch to level `name`; an unknown or broken level is reported and
    /// the current game is kept
    fn load<W: Write>(&mut self, name: &str, out: &mut W) -> AppResult<()> {
        match Game::load(&self.table, name) {
            Ok(game) => {
                self.game = game;
                self.attach_observer();
                info!("[SESSION] Playing '{}'", name);
                // Opening reply of a level where the automated side starts
                if let Some(opening) = self.game.history().last_move() {
                    writeln!(
                        out,
                        "  reply: {} {} {} -> {}",
                        opening.color, opening.piece_type, opening.from, opening.to
                    )?;
                }
                self.show(out)
            }
            Err(err) => {
                writeln!(out, "{}", err)?;
                Ok(())
            }
        }
    }

    fn show<W: Write>(&self, out: &mut W) -> AppResult<()> {
        writeln!(out, "{}", render_board(self.game.board(), &[], self.options))?;
        writeln!(out, "{}", status_line(&self.game))?;
        Ok(())
    }

    fn show_moves<W: Write>(&self, square: &str, out: &mut W) -> AppResult<()> {
        let targets = match self.game.valid_moves_at(square) {
            Ok(targets) => targets,
            Err(err) => {
                writeln!(out, "{}", err)?;
                return Ok(());
            }
        };

        writeln!(out, "{}", render_board(self.game.board(), &targets, self.options))?;
        if targets.is_empty() {
            writeln!(out, "No legal moves from {}", square)?;
        } else {
            let names: Vec<String> = targets.iter().map(|target| target.notation()).collect();
            writeln!(out, "{} -> {}", square, names.join(" "))?;
        }
        Ok(())
    }

    fn play<W: Write>(&mut self, from: &str, to: &str, out: &mut W) -> AppResult<()> {
        let result = self.game.play(from, to);
        self.report_moves(out)?;

        let status = match result {
            Ok(status) => status,
            Err(err) => {
                writeln!(out, "{}", err)?;
                return Ok(());
            }
        };

        self.show(out)?;
        match status {
            LevelStatus::Continue => {}
            LevelStatus::Failed => writeln!(out, "Level failed. Type 'reset' to try again.")?,
            LevelStatus::Complete => {
                writeln!(out, "Level complete!")?;
                match self.next_level() {
                    Some(next) => self.load(&next, out)?,
                    None => writeln!(out, "All levels complete.")?,
                }
            }
        }
        Ok(())
    }

    fn report_moves<W: Write>(&self, out: &mut W) -> AppResult<()> {
        for event in self.moves_rx.try_iter() {
            let capture = event
                .captured
                .as_ref()
                .map(|victim| format!(" takes {}", victim.piece_type))
                .unwrap_or_default();
            let prefix = if event.animate { "  reply: " } else { "" };
            writeln!(
                out,
                "{}{} {} {} -> {}{}",
                prefix, event.piece.color, event.piece.piece_type, event.from, event.to, capture
            )?;
        }
        Ok(())
    }
}
