//! Integration tests for scenario files and level progression
//!
//! Drives the public API the way a front-end does: build a table from the
//! stock levels plus a JSON scenario file, load levels by name, play them
//! out and move on to the next one.

use chess_rules::{
    Color, Game, LevelStatus, Objective, RulesError, ScenarioDef, ScenarioFile, ScenarioTable,
};

const PUZZLE_FILE: &str = r#"{
    "levels": [
        {
            "name": "corner",
            "board": ["K--", "---", "-q-"],
            "auto_reply": "black",
            "objective": "immobilize",
            "total_moves": 2
        },
        {
            "name": "cells",
            "board": [["-", "K"], ["X", "-"], ["k", "-"]]
        }
    ]
}"#;

fn table_with_file() -> ScenarioTable {
    let file: ScenarioFile = serde_json::from_str(PUZZLE_FILE).expect("puzzle file should parse");
    let mut table = ScenarioTable::builtin();
    table.extend_from_file(file);
    table
}

#[test]
fn test_scenario_file_fields_and_defaults() {
    //! Missing fields fall back to a free-play level for white.
    let file: ScenarioFile = serde_json::from_str(PUZZLE_FILE).unwrap();
    assert_eq!(file.levels.len(), 2);

    let corner = &file.levels[0];
    assert_eq!(corner.player, Color::White);
    assert_eq!(corner.auto_reply, Some(Color::Black));
    assert_eq!(corner.objective, Objective::Immobilize);
    assert_eq!(corner.total_moves, Some(2));

    let cells = &file.levels[1];
    assert_eq!(cells.rows(), ["-K", "X-", "k-"]);
    assert_eq!(cells.auto_reply, None);
    assert_eq!(cells.objective, Objective::FreePlay);
    assert_eq!(cells.total_moves, None);
}

#[test]
fn test_file_levels_follow_builtin_levels() {
    let table = table_with_file();
    let names: Vec<&str> = table.names().collect();
    assert_eq!(
        names,
        ["classic", "test", "back-rank", "keyhole", "corner", "cells"]
    );
    assert_eq!(table.next_after("keyhole"), Some("corner"));
    assert_eq!(table.next_after("cells"), None);
}

#[test]
fn test_list_rows_decode_like_string_rows() {
    let table = table_with_file();
    let board = table.load("cells").unwrap();
    assert_eq!((board.length(), board.width()), (3, 2));
    assert_eq!(board.pieces().count(), 2);
    assert_eq!(
        board.cell_at(chess_rules::square_of("a2").unwrap()),
        Some(chess_rules::Cell::Blocked)
    );
}

#[test]
fn test_file_puzzle_is_solvable_through_the_public_api() {
    let table = table_with_file();
    let mut game = Game::load(&table, "corner").unwrap();

    assert_eq!(game.moves_remaining(), Some(2));
    assert_eq!(game.play("b1", "c2"), Ok(LevelStatus::Complete));
    assert_eq!(game.play("c2", "c1"), Err(RulesError::GameFinished));
}

#[test]
fn test_bad_layout_in_file_fails_at_load_time() {
    let mut table = ScenarioTable::new();
    table.insert(ScenarioDef::new("broken", ["k?", "--"]));

    assert!(matches!(
        table.load("broken"),
        Err(RulesError::InvalidScenario { .. })
    ));
    assert!(Game::load(&table, "broken").is_err());
}

#[test]
fn test_playing_through_every_puzzle_in_order() {
    //! Solves the stock puzzles in table order, advancing on completion.
    let table = ScenarioTable::builtin();
    let solutions = [("back-rank", ("a1", "a4")), ("keyhole", ("c1", "b2"))];

    let mut current = Some("back-rank");
    for (name, (from, to)) in solutions {
        assert_eq!(current, Some(name));
        let mut game = Game::load(&table, name).unwrap();
        assert_eq!(game.play(from, to), Ok(LevelStatus::Complete));
        current = table.next_after(name);
    }
    assert_eq!(current, None);
}

#[test]
fn test_scenario_def_serializes_back_to_the_file_shape() {
    let def = ScenarioDef::new("pair", ["k-", "-K"]).with_total_moves(3);
    let json = serde_json::to_value(&def).unwrap();

    assert_eq!(json["name"], "pair");
    assert_eq!(json["board"][0], "k-");
    assert_eq!(json["player"], "white");
    assert_eq!(json["objective"], "free_play");
    assert_eq!(json["total_moves"], 3);
}
