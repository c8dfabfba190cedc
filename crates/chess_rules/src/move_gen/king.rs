//! King move generation
//!
//! Kings step one square in any of the eight directions. Whether the
//! destination is attacked is left to the legality filter; castling is not
//! part of this rule set.

use crate::board::Board;
use crate::notation::Square;
use crate::types::Piece;

use super::{can_land, tables::KING_OFFSETS};

/// Append king destinations in [`KING_OFFSETS`] order
pub fn generate_king_moves(board: &Board, piece: &Piece, moves: &mut Vec<Square>) {
    for &(rank_delta, file_delta) in &KING_OFFSETS {
        let to = piece.square.offset(rank_delta, file_delta);
        if can_land(board, to, piece.color) {
            moves.push(to);
        }
    }
}
