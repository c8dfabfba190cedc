//! Knight move generation
//!
//! Knights jump, so only the destination square matters: it must be on the
//! board, not blocked and not held by a piece of the knight's color.

use crate::board::Board;
use crate::notation::Square;
use crate::types::Piece;

use super::{can_land, tables::KNIGHT_OFFSETS};

/// Append knight destinations in [`KNIGHT_OFFSETS`] order
pub fn generate_knight_moves(board: &Board, piece: &Piece, moves: &mut Vec<Square>) {
    for &(rank_delta, file_delta) in &KNIGHT_OFFSETS {
        let to = piece.square.offset(rank_delta, file_delta);
        if can_land(board, to, piece.color) {
            moves.push(to);
        }
    }
}
