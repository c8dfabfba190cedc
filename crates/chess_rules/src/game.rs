//! Level controller: turn order, history, auto-reply and level status
//!
//! [`Game`] owns one loaded scenario. Presentation layers ask it for the
//! legal targets of a selected piece, then hand back a confirmed target via
//! [`Game::move_piece`]. After each committed move the controller:
//!
//! 1. records the move in [`MoveHistory`]
//! 2. notifies the [`MoveObserver`], if any
//! 3. hands the turn on (opponent, or the scenario's `switch_turn` choice)
//! 4. plays the first legal move for the scenario's auto-reply side
//! 5. evaluates the level status
//!
//! When the auto-reply side holds the first turn, its opening move is played
//! as soon as the level is loaded or reset.
//!
//! # Concurrency
//!
//! Single-threaded and synchronous. Every call runs to completion; a caller
//! must not query moves on one thread while another applies a move.

pub mod history;
pub mod turn;

use std::fmt;

use tracing::{debug, info, warn};

use crate::board::{AppliedMove, Board};
use crate::error::{RulesError, RulesResult};
use crate::legality::{first_legal_move, has_legal_move, is_in_check, legal_moves};
use crate::notation::{square_of, Square};
use crate::scenario::{LevelStatus, Objective, Scenario, ScenarioTable, TurnContext};
use crate::types::{Color, Piece, PieceId};

use self::history::{MoveHistory, MoveRecord};
use self::turn::CurrentTurn;

/// Notification sent after a move is committed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceMoved {
    /// The moved piece in its new state
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
    pub captured: Option<Piece>,
    /// The move was not dragged by the user and should be animated
    pub animate: bool,
}

/// Receives [`PieceMoved`] notifications
///
/// Called after the engine state is already consistent; observers cannot
/// block or veto the move.
pub trait MoveObserver {
    fn on_piece_moved(&mut self, event: &PieceMoved);
}

impl<F> MoveObserver for F
where
    F: FnMut(&PieceMoved),
{
    fn on_piece_moved(&mut self, event: &PieceMoved) {
        self(event)
    }
}

pub struct Game {
    scenario: Scenario,
    initial: Board,
    board: Board,
    turn: CurrentTurn,
    history: MoveHistory,
    player_moves: u32,
    status: LevelStatus,
    observer: Option<Box<dyn MoveObserver>>,
}

impl Game {
    /// Load scenario `name` from `table`
    ///
    /// # Errors
    ///
    /// [`RulesError::UnknownScenario`] or [`RulesError::InvalidScenario`];
    /// no game is created in either case.
    pub fn load(table: &ScenarioTable, name: &str) -> RulesResult<Game> {
        let scenario = table.scenario(name)?.clone();
        let board = table.load(name)?;

        let mut game = Game {
            scenario,
            initial: board.clone(),
            board,
            turn: CurrentTurn::default(),
            history: MoveHistory::default(),
            player_moves: 0,
            status: LevelStatus::Continue,
            observer: None,
        };
        game.open();
        Ok(game)
    }

    /// Restore the scenario's starting position, keeping the observer
    pub fn reset(&mut self) {
        self.board = self.initial.clone();
        self.turn = CurrentTurn::default();
        self.history.clear();
        self.player_moves = 0;
        self.status = LevelStatus::Continue;
        info!("[SCENARIO] Reset '{}'", self.scenario.name());
        self.open();
    }

    /// Play the auto-reply side's opening move when it has the first turn
    fn open(&mut self) {
        if self.play_auto_reply() {
            self.status = self.evaluate();
        }
    }

    pub fn set_observer(&mut self, observer: Box<dyn MoveObserver>) {
        self.observer = Some(observer);
    }

    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    pub fn scenario_name(&self) -> &str {
        self.scenario.name()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> CurrentTurn {
        self.turn
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    pub fn status(&self) -> LevelStatus {
        self.status
    }

    /// Side the player controls
    pub fn player(&self) -> Color {
        self.scenario.def.player
    }

    pub fn player_moves(&self) -> u32 {
        self.player_moves
    }

    /// Moves left before the level fails, if the scenario has a budget
    pub fn moves_remaining(&self) -> Option<u32> {
        self.scenario
            .def
            .total_moves
            .map(|total| total.saturating_sub(self.player_moves))
    }

    /// Legal targets of piece `id` for the side to move
    pub fn valid_moves(&self, id: PieceId) -> Vec<Square> {
        legal_moves(&self.board, id, self.turn.color)
    }

    /// Legal targets of the piece on the square named `notation`
    pub fn valid_moves_at(&self, notation: &str) -> RulesResult<Vec<Square>> {
        let piece = self.piece_on(notation)?;
        Ok(self.valid_moves(piece.id))
    }

    /// Move piece `id` to the square named `target` and finish the turn
    ///
    /// # Errors
    ///
    /// - [`RulesError::GameFinished`] once the level is complete or failed
    /// - [`RulesError::WrongTurn`] if the piece is not the side to move's
    /// - any error of [`Board::move_piece`], including
    ///   [`RulesError::IllegalMove`]; the board is unchanged on error
    pub fn move_piece(&mut self, id: PieceId, target: &str) -> RulesResult<LevelStatus> {
        if self.status != LevelStatus::Continue {
            return Err(RulesError::GameFinished);
        }

        let piece = self
            .board
            .piece(id)
            .ok_or(RulesError::UnknownPiece { id: id.0 })?;
        if piece.color != self.turn.color {
            warn!("[MOVE] {} moved out of turn", piece);
            return Err(RulesError::WrongTurn {
                square: piece.square.notation(),
                color: self.turn.color,
            });
        }

        let applied = self.board.move_piece(id, target)?;
        self.finish_move(applied, false);
        self.play_auto_reply();

        self.status = self.evaluate();
        match self.status {
            LevelStatus::Continue => debug!("[TURN] {} to move", self.turn.color),
            status => info!("[SCENARIO] '{}' ended: {:?}", self.scenario.name(), status),
        }
        Ok(self.status)
    }

    /// Move the piece on square `from` to square `to`, both by name
    pub fn play(&mut self, from: &str, to: &str) -> RulesResult<LevelStatus> {
        let id = self.piece_on(from)?.id;
        self.move_piece(id, to)
    }

    fn piece_on(&self, notation: &str) -> RulesResult<&Piece> {
        let square = square_of(notation)?;
        self.board
            .piece_at(square)
            .ok_or_else(|| RulesError::NoPieceAtSquare {
                square: square.notation(),
            })
    }

    fn finish_move(&mut self, applied: AppliedMove, automatic: bool) {
        if applied.piece.color == self.player() && !automatic {
            self.player_moves += 1;
        }

        info!(
            "[MOVE] {} {} {} -> {}{}",
            applied.piece.color,
            applied.piece.piece_type,
            applied.from,
            applied.to,
            applied
                .captured
                .as_ref()
                .map(|victim| format!(" x {}", victim.piece_type))
                .unwrap_or_default()
        );

        self.history
            .add_move(MoveRecord::from_applied(&applied, automatic));

        let next = self.scenario.hooks.next_turn(applied.piece.color);
        self.turn.switch_to(next);

        if let Some(observer) = self.observer.as_mut() {
            observer.on_piece_moved(&PieceMoved {
                piece: applied.piece,
                from: applied.from,
                to: applied.to,
                captured: applied.captured,
                animate: automatic,
            });
        }
    }

    /// Returns whether a move was played
    fn play_auto_reply(&mut self) -> bool {
        let Some(auto) = self.scenario.def.auto_reply else {
            return false;
        };
        if self.turn.color != auto {
            return false;
        }

        match first_legal_move(&self.board, auto) {
            Some(mv) => match self.board.apply_move(mv) {
                Ok(applied) => {
                    debug!("[AUTO] {} replies {}", auto, mv);
                    self.finish_move(applied, true);
                    true
                }
                Err(err) => {
                    warn!("[AUTO] Reply {} rejected: {}", mv, err);
                    false
                }
            },
            None => {
                debug!("[AUTO] {} has no legal reply", auto);
                false
            }
        }
    }

    fn evaluate(&self) -> LevelStatus {
        let side = self.turn.color;

        if let Some(hook) = &self.scenario.hooks.on_turn_complete {
            return hook(&TurnContext {
                board: &self.board,
                side_to_move: side,
                player: self.player(),
                player_moves: self.player_moves,
                history: &self.history,
            });
        }

        if !has_legal_move(&self.board, side) {
            let opponent_stuck = side != self.player();
            return match self.scenario.def.objective {
                Objective::FreePlay => LevelStatus::Complete,
                Objective::Checkmate if opponent_stuck && is_in_check(&self.board, side) => {
                    LevelStatus::Complete
                }
                Objective::Immobilize if opponent_stuck => LevelStatus::Complete,
                Objective::Checkmate | Objective::Immobilize => LevelStatus::Failed,
            };
        }

        match self.scenario.def.total_moves {
            Some(total) if self.player_moves >= total => LevelStatus::Failed,
            _ => LevelStatus::Continue,
        }
    }
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("scenario", &self.scenario.name())
            .field("turn", &self.turn)
            .field("moves", &self.history.len())
            .field("status", &self.status)
            .finish()
    }
}
