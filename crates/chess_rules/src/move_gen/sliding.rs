//! Sliding piece move generation
//!
//! Common functionality for sliding pieces (bishops, rooks, queens).
//!
//! ## Algorithm
//!
//! For each direction in table order, step outward one square at a time:
//! 1. Empty square: add it and keep going
//! 2. Opponent piece: add it (capture) and stop
//! 3. Own piece, blocked cell or grid edge: stop without adding

use crate::board::Board;
use crate::notation::Square;
use crate::types::{Cell, Piece};

/// Generate moves for a sliding piece along the given directions
///
/// # Arguments
///
/// * `board` - The current board
/// * `piece` - The sliding piece
/// * `directions` - Ray directions, walked in order
/// * `moves` - Output vector to append destinations to
///
/// # Examples
///
/// ```rust,ignore
/// let mut moves = Vec::new();
/// generate_sliding_moves(&board, rook, &ROOK_DIRECTIONS, &mut moves);
/// ```
pub fn generate_sliding_moves(
    board: &Board,
    piece: &Piece,
    directions: &[(i32, i32)],
    moves: &mut Vec<Square>,
) {
    for &(rank_delta, file_delta) in directions {
        let mut current = piece.square.offset(rank_delta, file_delta);

        loop {
            match board.cell_at(current) {
                None | Some(Cell::Blocked) => break,
                Some(Cell::Empty) => moves.push(current),
                Some(Cell::Occupied(id)) => {
                    if board.piece(id).map(|other| other.color) != Some(piece.color) {
                        moves.push(current);
                    }
                    break;
                }
            }
            current = current.offset(rank_delta, file_delta);
        }
    }
}
