//! Pseudo-legal move generation
//!
//! Produces the destinations a piece may reach under its movement rules,
//! aware of the board edge, blocked cells and same-color occupancy but not of
//! check. The legality filter in [`crate::legality`] narrows these down.
//!
//! # Module Structure
//!
//! - `tables` - fixed direction tables; their order is the output order
//! - `pawn`, `knight`, `king` - step-based pieces
//! - `sliding` - ray traversal shared by bishop, rook and queen
//! - `attack` - attack detection used by the legality filter

pub mod attack;
pub mod king;
pub mod knight;
pub mod pawn;
pub mod sliding;
pub mod tables;

use crate::board::Board;
use crate::notation::Square;
use crate::types::{Cell, Color, Piece, PieceType};

use self::king::generate_king_moves;
use self::knight::generate_knight_moves;
use self::pawn::generate_pawn_moves;
use self::sliding::generate_sliding_moves;
use self::tables::{BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS};

/// All pseudo-legal destinations of `piece`, in direction-table order
pub fn pseudo_legal_moves(board: &Board, piece: &Piece) -> Vec<Square> {
    let mut moves = Vec::new();

    match piece.piece_type {
        PieceType::Pawn => generate_pawn_moves(board, piece, &mut moves),
        PieceType::Knight => generate_knight_moves(board, piece, &mut moves),
        PieceType::King => generate_king_moves(board, piece, &mut moves),
        PieceType::Bishop => generate_sliding_moves(board, piece, &BISHOP_DIRECTIONS, &mut moves),
        PieceType::Rook => generate_sliding_moves(board, piece, &ROOK_DIRECTIONS, &mut moves),
        PieceType::Queen => generate_sliding_moves(board, piece, &QUEEN_DIRECTIONS, &mut moves),
    }

    moves
}

/// Check if a step-moving piece of `color` may land on `square`
///
/// True for empty squares and opposing pieces; false past the edge, on
/// blocked cells and on pieces of the same color.
#[inline]
pub(crate) fn can_land(board: &Board, square: Square, color: Color) -> bool {
    match board.cell_at(square) {
        None | Some(Cell::Blocked) => false,
        Some(Cell::Empty) => true,
        Some(Cell::Occupied(id)) => board.piece(id).map(|other| other.color) != Some(color),
    }
}
