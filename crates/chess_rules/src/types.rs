//! Core value types for board state
//!
//! Cells and piece kinds are closed enums so every consumer (move generation,
//! the legality filter, rendering) matches exhaustively instead of probing
//! sentinel characters.
//!
//! ## Layout identifiers
//!
//! Scenario layouts use one character per cell:
//!
//! | Char | Meaning |
//! |------|---------|
//! | `-` | empty square |
//! | `X` | blocked, off-board cell inside the grid |
//! | `k q r b n p` | white king, queen, rook, bishop, knight, pawn |
//! | `K Q R B N P` | the same pieces for black |

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::notation::Square;

/// Identifier of an empty cell in a scenario layout
pub const EMPTY_IDENTIFIER: char = '-';
/// Identifier of a blocked cell in a scenario layout
pub const BLOCKED_IDENTIFIER: char = 'X';

/// Side a piece belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    #[default]
    White,
    Black,
}

impl Color {
    /// The other side
    #[inline]
    pub const fn opponent(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank direction pawns of this color advance in
    #[inline]
    pub const fn forward(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Kind of chess piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceType {
    /// Decode a layout identifier into kind and color
    ///
    /// Lowercase letters are white, uppercase letters are black. Returns
    /// `None` for anything that is not one of `KQRBNP` in either case.
    pub fn from_identifier(identifier: char) -> Option<(PieceType, Color)> {
        let piece_type = match identifier.to_ascii_lowercase() {
            'k' => PieceType::King,
            'q' => PieceType::Queen,
            'r' => PieceType::Rook,
            'b' => PieceType::Bishop,
            'n' => PieceType::Knight,
            'p' => PieceType::Pawn,
            _ => return None,
        };
        let color = if identifier.is_ascii_lowercase() {
            Color::White
        } else {
            Color::Black
        };
        Some((piece_type, color))
    }

    /// Layout identifier for this kind in the given color
    pub fn identifier(self, color: Color) -> char {
        let letter = match self {
            PieceType::King => 'k',
            PieceType::Queen => 'q',
            PieceType::Rook => 'r',
            PieceType::Bishop => 'b',
            PieceType::Knight => 'n',
            PieceType::Pawn => 'p',
        };
        match color {
            Color::White => letter,
            Color::Black => letter.to_ascii_uppercase(),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            PieceType::Pawn => "pawn",
            PieceType::Knight => "knight",
            PieceType::Bishop => "bishop",
            PieceType::Rook => "rook",
            PieceType::Queen => "queen",
            PieceType::King => "king",
        }
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Stable handle of a piece within one loaded board
///
/// Handles index the board's piece registry. A captured piece's handle is
/// never handed out again for the lifetime of that board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceId(pub u16);

impl PieceId {
    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A piece and where it stands
///
/// Only `square` and `move_count` change after the board is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub id: PieceId,
    pub piece_type: PieceType,
    pub color: Color,
    pub square: Square,
    pub move_count: u32,
}

impl Piece {
    pub fn new(id: PieceId, piece_type: PieceType, color: Color, square: Square) -> Self {
        Piece {
            id,
            piece_type,
            color,
            square,
            move_count: 0,
        }
    }

    #[inline]
    pub fn rank(&self) -> i32 {
        self.square.rank
    }

    #[inline]
    pub fn file(&self) -> i32 {
        self.square.file
    }

    #[inline]
    pub fn has_moved(&self) -> bool {
        self.move_count > 0
    }

    /// Layout identifier of this piece
    pub fn identifier(&self) -> char {
        self.piece_type.identifier(self.color)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} on {}", self.color, self.piece_type, self.square)
    }
}

/// Content of one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    /// Off-board cell inside the grid: never a destination, stops every ray
    Blocked,
    Occupied(PieceId),
}

/// Source and target of a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_case_selects_color() {
        assert_eq!(
            PieceType::from_identifier('q'),
            Some((PieceType::Queen, Color::White))
        );
        assert_eq!(
            PieceType::from_identifier('N'),
            Some((PieceType::Knight, Color::Black))
        );
        assert_eq!(PieceType::from_identifier('x'), None);
        assert_eq!(PieceType::from_identifier('-'), None);
    }

    #[test]
    fn test_identifier_round_trip() {
        for piece_type in [
            PieceType::Pawn,
            PieceType::Knight,
            PieceType::Bishop,
            PieceType::Rook,
            PieceType::Queen,
            PieceType::King,
        ] {
            for color in [Color::White, Color::Black] {
                let identifier = piece_type.identifier(color);
                assert_eq!(
                    PieceType::from_identifier(identifier),
                    Some((piece_type, color))
                );
            }
        }
    }

    #[test]
    fn test_pawn_direction_per_color() {
        assert_eq!(Color::White.forward(), 1);
        assert_eq!(Color::Black.forward(), -1);
        assert_eq!(Color::White.opponent(), Color::Black);
    }
}
