//! Pawn move generation
//!
//! ## Pawn Movement Rules
//!
//! - **Forward push**: one rank toward the opponent (+1 for white, -1 for
//!   black) onto an empty square
//! - **Double push**: two ranks, only while the pawn has never moved and both
//!   the intermediate and the destination squares are empty
//! - **Captures**: one square diagonally forward, only onto an opposing piece
//!
//! A diagonal step onto an empty square is never generated (no en passant),
//! and pawns reaching the far rank stay pawns.

use crate::board::Board;
use crate::notation::Square;
use crate::types::{Cell, Piece};

use super::tables::PAWN_CAPTURE_FILES;

/// Append pawn destinations: pushes first, then left and right captures
pub fn generate_pawn_moves(board: &Board, piece: &Piece, moves: &mut Vec<Square>) {
    let forward = piece.color.forward();

    let one_step = piece.square.offset(forward, 0);
    if board.cell_at(one_step) == Some(Cell::Empty) {
        moves.push(one_step);

        if !piece.has_moved() {
            let two_steps = piece.square.offset(2 * forward, 0);
            if board.cell_at(two_steps) == Some(Cell::Empty) {
                moves.push(two_steps);
            }
        }
    }

    for &file_delta in &PAWN_CAPTURE_FILES {
        let target = piece.square.offset(forward, file_delta);
        if let Some(victim) = board.piece_at(target) {
            if victim.color != piece.color {
                moves.push(target);
            }
        }
    }
}
