//! Error types for the rules engine
//!
//! Provides custom error types for scenario loading, notation decoding and
//! move application. Off-board lookups are not errors: they surface as `None`
//! from [`crate::board::Board::cell_at`] and are filtered out by move generation.

use thiserror::Error;

use crate::types::Color;

/// Errors that can occur in the rules engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    /// Scenario name is not registered in the table
    #[error("Unknown scenario: {name}")]
    UnknownScenario { name: String },

    /// Scenario layout could not be decoded
    #[error("Invalid scenario '{scenario}': {reason}")]
    InvalidScenario { scenario: String, reason: String },

    /// Square name is not a file letter followed by a rank number
    #[error("Invalid square notation: '{notation}'")]
    InvalidNotation { notation: String },

    /// No piece at source square
    #[error("No piece at square {square}")]
    NoPieceAtSquare { square: String },

    /// Piece handle does not refer to a live piece
    #[error("Unknown piece handle {id}")]
    UnknownPiece { id: u16 },

    /// Piece does not belong to the side to move
    #[error("Piece at {square} does not belong to {color}")]
    WrongTurn { square: String, color: Color },

    /// Target is not among the piece's legal moves
    #[error("Illegal move: from {from} to {to}")]
    IllegalMove { from: String, to: String },

    /// The level already reached a final status
    #[error("Level is already finished")]
    GameFinished,
}

/// Result type alias for rules engine operations
pub type RulesResult<T> = Result<T, RulesError>;
