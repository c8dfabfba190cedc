//! Move history
//!
//! Chronological record of every move played in the current level, player
//! and auto-reply alike. Index 0 is the first move of the level.

use serde::{Deserialize, Serialize};

use crate::board::AppliedMove;
use crate::notation::Square;
use crate::types::{Color, PieceType};

/// One played move
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub piece_type: PieceType,
    pub color: Color,
    pub from: Square,
    pub to: Square,
    pub captured: Option<PieceType>,
    /// Played by the scenario's auto-reply side
    pub automatic: bool,
}

impl MoveRecord {
    pub fn from_applied(applied: &AppliedMove, automatic: bool) -> Self {
        MoveRecord {
            piece_type: applied.piece.piece_type,
            color: applied.piece.color,
            from: applied.from,
            to: applied.to,
            captured: applied.captured.as_ref().map(|piece| piece.piece_type),
            automatic,
        }
    }

    /// `(source, target)` square names, e.g. `("e2", "e4")`
    pub fn notation_pair(&self) -> (String, String) {
        (self.from.notation(), self.to.notation())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveHistory {
    moves: Vec<MoveRecord>,
}

impl MoveHistory {
    pub fn add_move(&mut self, record: MoveRecord) {
        self.moves.push(record);
    }

    /// Get the most recent move, if any
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.moves.last()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MoveRecord> + '_ {
        self.moves.iter()
    }

    pub fn clear(&mut self) {
        self.moves.clear();
    }
}
