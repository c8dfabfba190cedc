//! Whole-game invariants checked along deterministic playthroughs
//!
//! Each playthrough picks the `ply`-th legal move modulo the number of
//! legal moves, which wanders through captures, checks and king walks
//! without needing a random source.

use chess_rules::{
    all_legal_moves, is_in_check, legal_moves, Board, Cell, Color, Game, LevelStatus, Move,
    ScenarioTable, Square,
};

const MAX_PLIES: usize = 120;

/// Grid and registry agree: each occupied cell holds a live piece standing
/// on it, and no live piece is missing from the grid.
fn assert_board_consistent(board: &Board) {
    let mut occupied = 0;
    for rank in 0..board.length() as i32 {
        for file in 0..board.width() as i32 {
            let square = Square::new(rank, file);
            if let Some(Cell::Occupied(id)) = board.cell_at(square) {
                let piece = board.piece(id).expect("occupied cell without a live piece");
                assert_eq!(piece.square, square);
                occupied += 1;
            }
        }
    }
    assert_eq!(occupied, board.pieces().count());
}

/// No legal move of `color` leaves its own king attacked.
fn assert_moves_keep_king_safe(board: &Board, color: Color) {
    for mv in all_legal_moves(board, color) {
        let mut after = board.clone();
        after.apply_move(mv).expect("legal move must apply");
        assert!(
            !is_in_check(&after, color),
            "{} leaves the {} king in check",
            mv,
            color
        );
    }
}

fn play_through(name: &str) {
    let table = ScenarioTable::builtin();
    let mut game = Game::load(&table, name).unwrap();

    for ply in 0..MAX_PLIES {
        let side = game.turn().color;
        let board = game.board();
        assert_board_consistent(board);
        assert_moves_keep_king_safe(board, side);

        let moves: Vec<Move> = all_legal_moves(board, side);
        if moves.is_empty() || game.status() != LevelStatus::Continue {
            break;
        }
        let mv = moves[ply % moves.len()];
        let id = board.piece_at(mv.from).unwrap().id;
        assert!(legal_moves(board, id, side).contains(&mv.to));

        let status = game.move_piece(id, &mv.to.notation()).unwrap();
        if status != LevelStatus::Continue {
            break;
        }
    }
    assert_board_consistent(game.board());
}

#[test]
fn test_classic_playthrough_keeps_invariants() {
    play_through("classic");
}

#[test]
fn test_pin_study_playthrough_keeps_invariants() {
    play_through("test");
}

#[test]
fn test_move_counts_only_grow() {
    let table = ScenarioTable::builtin();
    let mut game = Game::load(&table, "classic").unwrap();
    let mut previous: Vec<(u16, u32)> = game
        .board()
        .pieces()
        .map(|piece| (piece.id.0, piece.move_count))
        .collect();

    for ply in 0..40 {
        let side = game.turn().color;
        let moves = all_legal_moves(game.board(), side);
        if moves.is_empty() {
            break;
        }
        let mv = moves[(ply * 7) % moves.len()];
        game.play(&mv.from.notation(), &mv.to.notation()).unwrap();

        for (id, count) in &previous {
            if let Some(piece) = game.board().piece(chess_rules::PieceId(*id)) {
                assert!(piece.move_count >= *count);
            }
        }
        previous = game
            .board()
            .pieces()
            .map(|piece| (piece.id.0, piece.move_count))
            .collect();
    }
}
