//! Legality filter: drop moves that leave the mover's own king attacked
//!
//! Two procedures, both evaluated against the current board with only the
//! move under test overlaid (no lookahead beyond that single move):
//!
//! - **King moves**: the destination must not be attacked once the king
//!   stands there. The king's origin reads as empty, so stepping back along
//!   a checking ray is caught, and an adjacent opposing king counts as an
//!   attack.
//! - **Other moves**: the king's square must not be attacked after the move.
//!   This one test covers pins (the moving piece leaves a line it was
//!   blocking), discovered lines, the need to block or capture when already
//!   in check, and double check, where no single non-king move can help.
//!
//! A side without a king is not filtered at all; puzzle layouts without a
//! king of the moving color get every pseudo-legal move.

use tracing::debug;

use crate::board::Board;
use crate::move_gen::attack::{attackers, is_square_attacked, BoardView};
use crate::move_gen::pseudo_legal_moves;
use crate::notation::Square;
use crate::types::{Color, Move, Piece, PieceId, PieceType};

/// Legal destinations of the piece `id` when `color` is to move
///
/// Returns an empty list when the piece does not exist or does not belong
/// to `color`. Order follows the piece's direction table.
///
/// # Examples
///
/// ```
/// use chess_rules::{legal_moves, ScenarioTable, Square};
///
/// let board = ScenarioTable::builtin().load("classic").unwrap();
/// let pawn = board.piece_at(Square::new(1, 4)).unwrap();
/// let targets: Vec<String> = legal_moves(&board, pawn.id, pawn.color)
///     .iter()
///     .map(|square| square.to_string())
///     .collect();
/// assert_eq!(targets, ["e3", "e4"]);
/// ```
pub fn legal_moves(board: &Board, id: PieceId, color: Color) -> Vec<Square> {
    let Some(piece) = board.piece(id) else {
        debug!("[LEGAL] No live piece {}", id);
        return Vec::new();
    };
    if piece.color != color {
        debug!("[LEGAL] {} is not {}'s to move", piece, color);
        return Vec::new();
    }

    filter_legal(board, piece, pseudo_legal_moves(board, piece))
}

/// Keep only the candidates that do not leave `piece`'s king attacked
pub fn filter_legal(board: &Board, piece: &Piece, mut candidates: Vec<Square>) -> Vec<Square> {
    if piece.piece_type == PieceType::King {
        candidates.retain(|&to| king_move_is_safe(board, piece, to));
        return candidates;
    }

    let Some(king) = board.king(piece.color) else {
        debug!("[LEGAL] No {} king on the board, moves pass unfiltered", piece.color);
        return candidates;
    };
    let king_square = king.square;

    candidates.retain(|&to| !move_exposes_king(board, piece, king_square, to));
    candidates
}

/// Check if `king` can stand on `to` without being attacked
pub fn king_move_is_safe(board: &Board, king: &Piece, to: Square) -> bool {
    let view = BoardView::after_move(board, king, to);
    !is_square_attacked(&view, to, king.color.opponent())
}

/// Check if moving `piece` to `to` leaves the king on `king_square` attacked
pub fn move_exposes_king(board: &Board, piece: &Piece, king_square: Square, to: Square) -> bool {
    let view = BoardView::after_move(board, piece, to);
    is_square_attacked(&view, king_square, piece.color.opponent())
}

/// Squares of the opposing pieces giving check to `color`'s king
pub fn checkers(board: &Board, color: Color) -> Vec<Square> {
    match board.king(color) {
        Some(king) => attackers(&BoardView::current(board), king.square, color.opponent()),
        None => Vec::new(),
    }
}

/// Check if `color`'s king is attacked right now
pub fn is_in_check(board: &Board, color: Color) -> bool {
    !checkers(board, color).is_empty()
}

/// Every legal move of `color`, pieces in registry order
pub fn all_legal_moves(board: &Board, color: Color) -> Vec<Move> {
    board
        .pieces_of(color)
        .flat_map(|piece| {
            legal_moves(board, piece.id, color)
                .into_iter()
                .map(move |to| Move::new(piece.square, to))
        })
        .collect()
}

/// First legal move of `color`: first piece in registry order that has one,
/// first destination in its direction-table order
pub fn first_legal_move(board: &Board, color: Color) -> Option<Move> {
    board.pieces_of(color).find_map(|piece| {
        legal_moves(board, piece.id, color)
            .first()
            .map(|&to| Move::new(piece.square, to))
    })
}

/// Check if `color` has at least one legal move
pub fn has_legal_move(board: &Board, color: Color) -> bool {
    first_legal_move(board, color).is_some()
}

#[cfg(test)]
mod tests;
