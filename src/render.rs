//! Text rendering of boards and level state
//!
//! Stands in for the 3D board: every non-blocked tile is drawn with its
//! shade, pieces by symbol or layout letter, and the legal targets of the
//! selected piece in brackets. Blocked cells are left blank so irregular
//! puzzle boards keep their shape.
//!
//! ```text
//!  4     K
//!  3  :  .  :  .
//!  2  .  :  .  :
//!  1  k  .  q  .
//!     a  b  c  d
//! ```

use std::collections::HashMap;

use chess_rules::{is_in_check, Board, Color, Game, LevelStatus, Piece, PieceType, Shade, Square};

use crate::settings::Settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub unicode: bool,
    pub coordinates: bool,
}

impl From<&Settings> for RenderOptions {
    fn from(settings: &Settings) -> Self {
        RenderOptions {
            unicode: settings.unicode_pieces,
            coordinates: settings.show_coordinates,
        }
    }
}

/// Glyph for a piece: a chess symbol, or its layout letter
pub fn piece_glyph(piece: &Piece, unicode: bool) -> char {
    if !unicode {
        return piece.identifier();
    }
    match (piece.color, piece.piece_type) {
        (Color::White, PieceType::King) => '♔',
        (Color::White, PieceType::Queen) => '♕',
        (Color::White, PieceType::Rook) => '♖',
        (Color::White, PieceType::Bishop) => '♗',
        (Color::White, PieceType::Knight) => '♘',
        (Color::White, PieceType::Pawn) => '♙',
        (Color::Black, PieceType::King) => '♚',
        (Color::Black, PieceType::Queen) => '♛',
        (Color::Black, PieceType::Rook) => '♜',
        (Color::Black, PieceType::Bishop) => '♝',
        (Color::Black, PieceType::Knight) => '♞',
        (Color::Black, PieceType::Pawn) => '♟',
    }
}

fn shade_glyph(shade: Shade) -> char {
    match shade {
        Shade::Light => '.',
        Shade::Dark => ':',
    }
}

/// Draw `board` top rank first, bracketing the `highlights`
pub fn render_board(board: &Board, highlights: &[Square], options: RenderOptions) -> String {
    let shades: HashMap<Square, Shade> = board
        .tiles()
        .map(|tile| (tile.square, tile.shade))
        .collect();

    // Wide enough for the highest rank number, and never narrower than 2
    let label_width = board.length().to_string().len().max(2);

    let mut lines = Vec::with_capacity(board.length() + 1);
    for rank in (0..board.length() as i32).rev() {
        let mut line = String::new();
        if options.coordinates {
            line.push_str(&format!("{:>width$} ", rank + 1, width = label_width));
        }

        for file in 0..board.width() as i32 {
            let square = Square::new(rank, file);
            let glyph = match (board.piece_at(square), shades.get(&square)) {
                (Some(piece), _) => piece_glyph(piece, options.unicode),
                (None, Some(&shade)) => shade_glyph(shade),
                (None, None) => ' ',
            };
            let (open, close) = if highlights.contains(&square) {
                ('[', ']')
            } else {
                (' ', ' ')
            };
            line.push(open);
            line.push(glyph);
            line.push(close);
        }
        lines.push(line.trim_end().to_string());
    }

    if options.coordinates {
        let mut footer = " ".repeat(label_width + 1);
        for file in 0..board.width() as i32 {
            let letter = Square::new(0, file)
                .try_notation()
                .and_then(|name| name.chars().next())
                .unwrap_or('?');
            footer.push(' ');
            footer.push(letter);
            footer.push(' ');
        }
        lines.push(footer.trim_end().to_string());
    }

    lines.join("\n")
}

/// One-line summary: scenario, side to move, check, move budget and status
pub fn status_line(game: &Game) -> String {
    let turn = game.turn();
    let mut parts = vec![
        format!("[{}]", game.scenario_name()),
        format!("move {}, {} to play", turn.move_number, turn.color),
    ];

    if is_in_check(game.board(), turn.color) {
        parts.push("check".to_string());
    }
    if let Some(left) = game.moves_remaining() {
        parts.push(format!("{} move(s) left", left));
    }
    match game.status() {
        LevelStatus::Continue => {}
        LevelStatus::Complete => parts.push("level complete".to_string()),
        LevelStatus::Failed => parts.push("level failed".to_string()),
    }

    parts.join(" | ")
}
