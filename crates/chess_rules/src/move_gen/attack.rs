//! Attack detection over the current board or a single hypothetical move
//!
//! The legality filter never mutates the board. Instead it asks whether a
//! square would be attacked if exactly one move were played, through a
//! [`BoardView`] that overlays that move: the source reads as empty, the
//! destination reads as the mover, and whatever stood on the destination is
//! gone.
//!
//! ## Attack sources
//!
//! Checked independently from the target square outward:
//! - adjacent opposing king (kings may never stand next to each other)
//! - opposing pawn on one of the two squares it captures from
//! - opposing knight on one of the eight knight squares
//! - opposing rook or queen at the end of an orthogonal ray
//! - opposing bishop or queen at the end of a diagonal ray
//!
//! Rays stop at the first occupied square, at a blocked cell or at the edge
//! of the grid, so nothing attacks through a blocked cell.

use crate::board::Board;
use crate::notation::Square;
use crate::types::{Cell, Color, Piece, PieceType};

use super::tables::{BISHOP_DIRECTIONS, KING_OFFSETS, KNIGHT_OFFSETS, ROOK_DIRECTIONS};

/// What a [`BoardView`] sees on a square
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occupant {
    Empty,
    Blocked,
    Piece(PieceType, Color),
}

/// Read-only view of a board, optionally with one move overlaid
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    board: &'a Board,
    overlay: Option<Overlay>,
}

#[derive(Debug, Clone, Copy)]
struct Overlay {
    from: Square,
    to: Square,
    piece_type: PieceType,
    color: Color,
}

impl<'a> BoardView<'a> {
    /// The board exactly as it stands
    pub fn current(board: &'a Board) -> Self {
        BoardView {
            board,
            overlay: None,
        }
    }

    /// The board after `piece` moves to `to`
    pub fn after_move(board: &'a Board, piece: &Piece, to: Square) -> Self {
        BoardView {
            board,
            overlay: Some(Overlay {
                from: piece.square,
                to,
                piece_type: piece.piece_type,
                color: piece.color,
            }),
        }
    }

    /// Occupant of `square`, or `None` past the edge of the grid
    pub fn occupant(&self, square: Square) -> Option<Occupant> {
        if let Some(overlay) = &self.overlay {
            if square == overlay.to {
                return Some(Occupant::Piece(overlay.piece_type, overlay.color));
            }
            if square == overlay.from {
                return Some(Occupant::Empty);
            }
        }

        match self.board.cell_at(square)? {
            Cell::Empty => Some(Occupant::Empty),
            Cell::Blocked => Some(Occupant::Blocked),
            Cell::Occupied(id) => Some(match self.board.piece(id) {
                Some(piece) => Occupant::Piece(piece.piece_type, piece.color),
                None => Occupant::Empty,
            }),
        }
    }

    fn holds(&self, square: Square, piece_type: PieceType, color: Color) -> bool {
        self.occupant(square) == Some(Occupant::Piece(piece_type, color))
    }
}

/// Squares holding pieces of `by` that attack `target`
///
/// Sources are listed in the order: kings, pawns, knights, orthogonal rays,
/// diagonal rays.
pub fn attackers(view: &BoardView<'_>, target: Square, by: Color) -> Vec<Square> {
    let mut found = Vec::new();

    for &(rank_delta, file_delta) in &KING_OFFSETS {
        let from = target.offset(rank_delta, file_delta);
        if view.holds(from, PieceType::King, by) {
            found.push(from);
        }
    }

    // A pawn of `by` captures toward `by.forward()`, so it stands one rank
    // behind the target from its own point of view.
    for file_delta in [-1, 1] {
        let from = target.offset(-by.forward(), file_delta);
        if view.holds(from, PieceType::Pawn, by) {
            found.push(from);
        }
    }

    for &(rank_delta, file_delta) in &KNIGHT_OFFSETS {
        let from = target.offset(rank_delta, file_delta);
        if view.holds(from, PieceType::Knight, by) {
            found.push(from);
        }
    }

    for &direction in &ROOK_DIRECTIONS {
        if let Some(from) = ray_attacker(view, target, direction, by, PieceType::Rook) {
            found.push(from);
        }
    }

    for &direction in &BISHOP_DIRECTIONS {
        if let Some(from) = ray_attacker(view, target, direction, by, PieceType::Bishop) {
            found.push(from);
        }
    }

    found
}

/// Check if `target` is attacked by any piece of `by`
pub fn is_square_attacked(view: &BoardView<'_>, target: Square, by: Color) -> bool {
    !attackers(view, target, by).is_empty()
}

/// First piece met along a ray, if it is a `slider` or queen of `by`
fn ray_attacker(
    view: &BoardView<'_>,
    target: Square,
    (rank_delta, file_delta): (i32, i32),
    by: Color,
    slider: PieceType,
) -> Option<Square> {
    let mut current = target.offset(rank_delta, file_delta);

    loop {
        match view.occupant(current)? {
            Occupant::Empty => current = current.offset(rank_delta, file_delta),
            Occupant::Blocked => return None,
            Occupant::Piece(piece_type, color) => {
                let slides_here = piece_type == slider || piece_type == PieceType::Queen;
                return (color == by && slides_here).then_some(current);
            }
        }
    }
}
