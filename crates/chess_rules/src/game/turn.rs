//! Turn tracking
//!
//! # Turn Flow
//!
//! ```text
//! Move 1: White plays -> Black plays -> Move 2: White plays
//! ```
//!
//! Scenarios may override who moves next. When the same side keeps the
//! move, each of its moves counts as a new move number.

use serde::{Deserialize, Serialize};

use crate::types::Color;

/// Whose turn it is and the current move number (starts at 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentTurn {
    pub color: Color,
    pub move_number: u32,
}

impl Default for CurrentTurn {
    fn default() -> Self {
        Self {
            color: Color::White,
            move_number: 1,
        }
    }
}

impl CurrentTurn {
    /// Hand the move to `next`
    ///
    /// The move number increments when black hands over to white, or when a
    /// side keeps the move.
    pub fn switch_to(&mut self, next: Color) {
        if next == self.color || (self.color == Color::Black && next == Color::White) {
            self.move_number += 1;
        }
        self.color = next;
    }

    /// Hand the move to the opponent
    pub fn switch(&mut self) {
        self.switch_to(self.color.opponent());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_number_advances_after_black() {
        let mut turn = CurrentTurn::default();
        turn.switch();
        assert_eq!(turn, CurrentTurn { color: Color::Black, move_number: 1 });
        turn.switch();
        assert_eq!(turn, CurrentTurn { color: Color::White, move_number: 2 });
    }

    #[test]
    fn test_keeping_the_move_advances_move_number() {
        let mut turn = CurrentTurn::default();
        turn.switch_to(Color::White);
        assert_eq!(turn, CurrentTurn { color: Color::White, move_number: 2 });
    }
}
