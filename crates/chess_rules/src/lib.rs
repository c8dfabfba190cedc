//! Chess rules for tilechess - pure game logic without rendering
//!
//! Owns board state, legal move generation and move application for
//! rectangular boards of any size, including puzzle layouts with blocked
//! cells. Presentation layers (the terminal front-end, or any other) consume
//! square names and [`game::PieceMoved`] notifications and never hold the
//! authoritative state.
//!
//! # Module Structure
//!
//! - `notation` - `(rank, file)` squares and their `"e4"` names
//! - `types` - colors, piece kinds, pieces, cells, moves
//! - `board` - cell grid, piece registry and the move applicator
//! - `move_gen` - pseudo-legal moves per piece kind, attack detection
//! - `legality` - drops moves that leave the own king attacked
//! - `scenario` - scenario table, level loader and scenario hooks
//! - `game` - turn order, history, auto-reply and level status
//!
//! # Example
//!
//! ```
//! use chess_rules::{Game, LevelStatus, ScenarioTable};
//!
//! let table = ScenarioTable::builtin();
//! let mut game = Game::load(&table, "classic").unwrap();
//! assert_eq!(game.play("e2", "e4").unwrap(), LevelStatus::Continue);
//! ```

pub mod board;
pub mod error;
pub mod game;
pub mod legality;
pub mod move_gen;
pub mod notation;
pub mod scenario;
pub mod types;

pub use board::{AppliedMove, Board, Lookup, Shade, Tile};
pub use error::{RulesError, RulesResult};
pub use game::history::{MoveHistory, MoveRecord};
pub use game::turn::CurrentTurn;
pub use game::{Game, MoveObserver, PieceMoved};
pub use legality::{
    all_legal_moves, checkers, first_legal_move, has_legal_move, is_in_check, legal_moves,
};
pub use move_gen::pseudo_legal_moves;
pub use notation::{notation_of, square_of, Square};
pub use scenario::{
    LevelStatus, Objective, Scenario, ScenarioDef, ScenarioFile, ScenarioHooks, ScenarioTable,
    TurnContext,
};
pub use types::{Cell, Color, Move, Piece, PieceId, PieceType};
