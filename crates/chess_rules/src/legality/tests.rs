//! Legality filter: pins, check responses and king safety
//!
//! # Test Organization
//!
//! - `test_pin_study_*` - the built-in "test" scenario (check plus a pin)
//! - `test_king_*` - attacked squares, adjacency and retreating along a ray
//! - `test_*_check` - single and double check responses

use super::*;
use crate::scenario::ScenarioTable;

fn layout(rows: &[&str]) -> Board {
    Board::from_layout("fixture", rows).expect("fixture layout should decode")
}

fn sq(notation: &str) -> Square {
    Square::from_notation(notation).expect("fixture square")
}

fn legal_from(board: &Board, from: &str) -> Vec<String> {
    let piece = board.piece_at(sq(from)).expect("fixture piece");
    legal_moves(board, piece.id, piece.color)
        .iter()
        .map(|square| square.notation())
        .collect()
}

fn names(moves: &[Move]) -> Vec<String> {
    moves.iter().map(Move::to_string).collect()
}

// ============================================================================
// Pin Study
// ============================================================================

#[test]
fn test_pin_study_rook_can_only_block() {
    //! a5 checks d2 along the diagonal; the rook's only answer is b4.
    let board = ScenarioTable::builtin().load("test").unwrap();
    assert_eq!(legal_from(&board, "d4"), ["b4"]);
}

#[test]
fn test_pin_study_pinned_bishop_is_frozen() {
    //! f4 is pinned from h6 and the king is in check from a5, so even the
    //! moves along the pin line fail to answer the check.
    let board = ScenarioTable::builtin().load("test").unwrap();
    let bishop = board.piece_at(sq("f4")).unwrap();
    assert!(!pseudo_legal_moves(&board, bishop).is_empty());
    assert!(legal_from(&board, "f4").is_empty());
}

#[test]
fn test_pin_study_king_escapes() {
    let board = ScenarioTable::builtin().load("test").unwrap();
    let king_moves = legal_from(&board, "d2");
    assert_eq!(king_moves, ["d3", "d1", "e2", "c1"]);

    // e1 stays on the a5 diagonal once d2 is vacated, c2 is covered by the
    // b3 pawn, e3 by the g4 knight and c3 by the a5 bishop.
    for covered in ["e1", "c2", "e3", "c3"] {
        assert!(!king_moves.contains(&covered.to_string()), "{}", covered);
    }
}

#[test]
fn test_pin_study_check_state() {
    let board = ScenarioTable::builtin().load("test").unwrap();
    assert!(is_in_check(&board, Color::White));
    assert_eq!(checkers(&board, Color::White), [sq("a5")]);
    assert!(!is_in_check(&board, Color::Black));

    assert_eq!(
        names(&all_legal_moves(&board, Color::White)),
        ["d2-d3", "d2-d1", "d2-e2", "d2-c1", "d4-b4"]
    );
    assert_eq!(
        first_legal_move(&board, Color::White),
        Some(Move::new(sq("d2"), sq("d3")))
    );
}

// ============================================================================
// King Safety
// ============================================================================

#[test]
fn test_king_never_steps_next_to_the_other_king() {
    let board = layout(&["K--", "---", "k--"]);
    assert_eq!(legal_from(&board, "a1"), ["b1"]);
}

#[test]
fn test_king_cannot_retreat_along_the_checking_ray() {
    let board = layout(&["----", "----", "----", "Rk--"]);
    assert_eq!(legal_from(&board, "b1"), ["b2", "a1", "c2"]);
}

#[test]
fn test_king_cannot_capture_a_defended_piece() {
    let board = layout(&["R--", "P--", "k--"]);
    assert_eq!(legal_from(&board, "a1"), ["b2"]);
}

#[test]
fn test_king_in_corner_escapes_queen_check() {
    //! Every square still on one of the queen's lines is excluded.
    let diagonal = layout(&[
        "--------", "--------", "--------", "--------", "---Q----", "--------", "--------",
        "k-------",
    ]);
    assert!(is_in_check(&diagonal, Color::White));
    assert_eq!(legal_from(&diagonal, "a1"), ["a2", "b1"]);

    let file = layout(&[
        "--------", "--------", "--------", "Q-------", "--------", "--------", "--------",
        "k-------",
    ]);
    assert!(is_in_check(&file, Color::White));
    assert_eq!(legal_from(&file, "a1"), ["b1", "b2"]);
}

#[test]
fn test_king_boxed_in_by_queen_is_stalemated() {
    let board = layout(&["K--", "--q", "---"]);
    assert!(legal_from(&board, "a3").is_empty());
    assert!(!is_in_check(&board, Color::Black));
    assert!(!has_legal_move(&board, Color::Black));
    assert!(has_legal_move(&board, Color::White));
}

// ============================================================================
// Pins and Check Responses
// ============================================================================

#[test]
fn test_pinned_rook_slides_along_the_pin_only() {
    let board = layout(&["R-", "--", "r-", "k-"]);
    let rook = board.piece_at(sq("a2")).unwrap();

    let pseudo: Vec<String> = pseudo_legal_moves(&board, rook)
        .iter()
        .map(|square| square.notation())
        .collect();
    assert_eq!(pseudo, ["a3", "a4", "b2"]);
    assert_eq!(legal_from(&board, "a2"), ["a3", "a4"]);
}

#[test]
fn test_double_check_leaves_only_king_moves() {
    //! Rook on a4 and bishop on c3 both check a1; blocking either line is
    //! not enough.
    let board = layout(&["R---", "--B-", "---r", "k---"]);

    assert_eq!(checkers(&board, Color::White), [sq("a4"), sq("c3")]);
    assert!(legal_from(&board, "d2").is_empty());
    assert_eq!(legal_from(&board, "a1"), ["b1"]);
    assert_eq!(names(&all_legal_moves(&board, Color::White)), ["a1-b1"]);
}

#[test]
fn test_checkmate_leaves_no_legal_move() {
    let mut board = ScenarioTable::builtin().load("back-rank").unwrap();
    let rook = board.piece_at(sq("a1")).unwrap().id;
    board.move_piece(rook, "a4").unwrap();

    assert!(is_in_check(&board, Color::Black));
    assert_eq!(checkers(&board, Color::Black), [sq("a4")]);
    assert!(!has_legal_move(&board, Color::Black));
    assert_eq!(first_legal_move(&board, Color::Black), None);
}

// ============================================================================
// Edge Cases
// ============================================================================

#[test]
fn test_side_without_king_is_not_filtered() {
    let board = layout(&["R--", "---", "r--"]);
    let rook = board.piece_at(sq("a1")).unwrap();
    assert_eq!(
        legal_moves(&board, rook.id, Color::White),
        pseudo_legal_moves(&board, rook)
    );
    assert!(checkers(&board, Color::White).is_empty());
    assert!(!is_in_check(&board, Color::White));
}

#[test]
fn test_wrong_color_or_missing_piece_yields_nothing() {
    let board = ScenarioTable::builtin().load("classic").unwrap();
    let pawn = board.piece_at(sq("e2")).unwrap();
    assert!(legal_moves(&board, pawn.id, Color::Black).is_empty());
    assert!(legal_moves(&board, PieceId(999), Color::White).is_empty());
}

#[test]
fn test_classic_opening_has_twenty_moves() {
    let board = ScenarioTable::builtin().load("classic").unwrap();
    assert_eq!(all_legal_moves(&board, Color::White).len(), 20);
    assert_eq!(all_legal_moves(&board, Color::Black).len(), 20);
    assert_eq!(legal_from(&board, "b1"), ["c3", "a3"]);
    assert_eq!(legal_from(&board, "e2"), ["e3", "e4"]);
    assert!(legal_from(&board, "d1").is_empty());
}

#[test]
fn test_legal_moves_are_a_subset_of_pseudo_legal() {
    let table = ScenarioTable::builtin();
    for name in table.names() {
        let board = table.load(name).unwrap();
        for piece in board.pieces() {
            let pseudo = pseudo_legal_moves(&board, piece);
            for target in legal_moves(&board, piece.id, piece.color) {
                assert!(pseudo.contains(&target), "{}: {} -> {}", name, piece, target);
            }
        }
    }
}
