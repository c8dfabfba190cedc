//! Direction tables for every piece kind
//!
//! Offsets are `(rank_delta, file_delta)` pairs. The order of each table is
//! the order moves are generated in, which the auto-reply side relies on
//! when it plays "the first legal move", so the tables must stay fixed.

/// Knight jumps
pub const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (1, 2),
    (2, 1),
    (1, -2),
    (-2, 1),
    (-1, 2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

/// King steps, orthogonal first
pub const KING_OFFSETS: [(i32, i32); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Rook rays
pub const ROOK_DIRECTIONS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Bishop rays
pub const BISHOP_DIRECTIONS: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Queen rays: rook directions, then bishop directions
pub const QUEEN_DIRECTIONS: [(i32, i32); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// File deltas of the two pawn capture squares, left then right
pub const PAWN_CAPTURE_FILES: [i32; 2] = [-1, 1];
