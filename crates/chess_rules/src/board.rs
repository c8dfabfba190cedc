//! Board state: the cell grid and the piece registry
//!
//! The grid is `length` ranks by `width` files and need not be square. Each
//! cell is [`Cell::Empty`], [`Cell::Blocked`] or [`Cell::Occupied`] with a
//! [`PieceId`] pointing into the registry, so piece identity never depends on
//! a presentation object.
//!
//! # Lookups
//!
//! Three outcomes are kept apart:
//! - out of bounds: [`Board::cell_at`] returns `None`, the board simply ends
//! - blocked: `Some(Cell::Blocked)`, an impassable cell inside the grid
//! - empty or occupied
//!
//! Both stop ray traversal; only the grid edge is "nothing there at all".
//!
//! # Mutation
//!
//! Only [`Board::apply_move`] mutates a loaded board. The grid and the
//! registry are updated together so both views agree after every move.
//! A board is not safe to query from one caller while another applies a
//! move: generation and application must be serialised by the owner.

use tracing::{debug, warn};

use crate::error::{RulesError, RulesResult};
use crate::legality::legal_moves;
use crate::notation::{square_of, Square, MAX_FILES};
use crate::types::{
    Cell, Color, Move, Piece, PieceId, PieceType, BLOCKED_IDENTIFIER, EMPTY_IDENTIFIER,
};

/// Result of looking up a square by coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    Piece(&'a Piece),
    Empty,
    /// Outside the grid or a blocked cell
    OffBoard,
}

/// Shade of a playable tile, used by presentation layers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shade {
    Light,
    Dark,
}

/// A playable (non-blocked) square of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub square: Square,
    pub shade: Shade,
}

/// What [`Board::apply_move`] changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedMove {
    /// The moved piece with its updated square and move count
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
    /// Opposing piece removed from the registry, if any
    pub captured: Option<Piece>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// `cells[rank][file]`, rank 0 first
    cells: Vec<Vec<Cell>>,
    /// Registry indexed by [`PieceId`]; captured pieces leave a `None`
    pieces: Vec<Option<Piece>>,
    length: usize,
    width: usize,
}

impl Board {
    /// Build a board from layout rows listed top rank first
    ///
    /// The rows are reversed once so that rank 0 is the last row given,
    /// matching how layouts are written (black at the top, white at the
    /// bottom). Pieces are registered rank by rank, file by file, which fixes
    /// the registry order for the life of the board.
    ///
    /// # Errors
    ///
    /// [`RulesError::InvalidScenario`] when the layout is empty, ragged,
    /// wider than [`MAX_FILES`] or contains an unknown identifier. Nothing is
    /// built in that case.
    pub fn from_layout<S: AsRef<str>>(scenario: &str, rows: &[S]) -> RulesResult<Board> {
        let invalid = |reason: String| RulesError::InvalidScenario {
            scenario: scenario.to_string(),
            reason,
        };

        let length = rows.len();
        if length == 0 {
            return Err(invalid("layout has no rows".to_string()));
        }

        let width = rows[0].as_ref().chars().count();
        if width == 0 {
            return Err(invalid("layout rows are empty".to_string()));
        }
        if width > MAX_FILES {
            return Err(invalid(format!(
                "layout is {} files wide, at most {} are supported",
                width, MAX_FILES
            )));
        }

        let mut cells = Vec::with_capacity(length);
        let mut pieces = Vec::new();

        for (rank, row) in rows.iter().rev().enumerate() {
            let row = row.as_ref();
            if row.chars().count() != width {
                return Err(invalid(format!(
                    "rank {} has {} cells, expected {}",
                    rank + 1,
                    row.chars().count(),
                    width
                )));
            }

            let mut rank_cells = Vec::with_capacity(width);
            for (file, identifier) in row.chars().enumerate() {
                let cell = match identifier {
                    EMPTY_IDENTIFIER => Cell::Empty,
                    BLOCKED_IDENTIFIER => Cell::Blocked,
                    other => {
                        let (piece_type, color) =
                            PieceType::from_identifier(other).ok_or_else(|| {
                                invalid(format!(
                                    "unknown identifier '{}' at rank {}, file {}",
                                    other,
                                    rank + 1,
                                    file + 1
                                ))
                            })?;
                        let id = u16::try_from(pieces.len()).map(PieceId).map_err(|_| {
                            invalid(format!("more than {} pieces", u32::from(u16::MAX) + 1))
                        })?;
                        let square = Square::new(rank as i32, file as i32);
                        pieces.push(Some(Piece::new(id, piece_type, color, square)));
                        Cell::Occupied(id)
                    }
                };
                rank_cells.push(cell);
            }
            cells.push(rank_cells);
        }

        debug!(
            "[BOARD] Built '{}' layout: {}x{} with {} pieces",
            scenario,
            length,
            width,
            pieces.len()
        );

        Ok(Board {
            cells,
            pieces,
            length,
            width,
        })
    }

    /// Number of ranks
    #[inline]
    pub fn length(&self) -> usize {
        self.length
    }

    /// Number of files
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Check if square coordinates fall inside the grid
    #[inline]
    pub fn contains(&self, square: Square) -> bool {
        square.rank >= 0
            && square.file >= 0
            && (square.rank as usize) < self.length
            && (square.file as usize) < self.width
    }

    /// Cell at `square`, or `None` past the edge of the grid
    #[inline]
    pub fn cell_at(&self, square: Square) -> Option<Cell> {
        if !self.contains(square) {
            return None;
        }
        Some(self.cells[square.rank as usize][square.file as usize])
    }

    /// Piece, empty square or off-board, treating blocked cells as off-board
    pub fn lookup(&self, square: Square) -> Lookup<'_> {
        match self.cell_at(square) {
            None | Some(Cell::Blocked) => Lookup::OffBoard,
            Some(Cell::Empty) => Lookup::Empty,
            Some(Cell::Occupied(id)) => match self.piece(id) {
                Some(piece) => Lookup::Piece(piece),
                None => Lookup::Empty,
            },
        }
    }

    /// Piece standing on `square`
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        match self.lookup(square) {
            Lookup::Piece(piece) => Some(piece),
            Lookup::Empty | Lookup::OffBoard => None,
        }
    }

    /// Live piece with handle `id`
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.index()).and_then(Option::as_ref)
    }

    /// Live pieces in registry order
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces.iter().flatten()
    }

    /// Live pieces of one color in registry order
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces().filter(move |piece| piece.color == color)
    }

    /// The king of `color`, if the layout has one
    pub fn king(&self, color: Color) -> Option<&Piece> {
        self.pieces_of(color)
            .find(|piece| piece.piece_type == PieceType::King)
    }

    /// Every non-blocked square with its shade, rank by rank
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.cells.iter().enumerate().flat_map(|(rank, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, cell)| **cell != Cell::Blocked)
                .map(move |(file, _)| Tile {
                    square: Square::new(rank as i32, file as i32),
                    shade: if rank % 2 == file % 2 {
                        Shade::Dark
                    } else {
                        Shade::Light
                    },
                })
        })
    }

    /// Move a piece to the square named `target` after checking legality
    ///
    /// The target must be one of [`legal_moves`] for the piece's own color.
    ///
    /// # Errors
    ///
    /// - [`RulesError::UnknownPiece`] if `id` was captured or never existed
    /// - [`RulesError::InvalidNotation`] if `target` is not a square name
    /// - [`RulesError::IllegalMove`] if the target is not a legal destination
    pub fn move_piece(&mut self, id: PieceId, target: &str) -> RulesResult<AppliedMove> {
        let piece = self
            .piece(id)
            .ok_or(RulesError::UnknownPiece { id: id.0 })?;
        let from = piece.square;
        let to = square_of(target)?;

        if !legal_moves(self, id, piece.color).contains(&to) {
            warn!("[MOVE] Rejected {} {} -> {}", piece.piece_type, from, to);
            return Err(RulesError::IllegalMove {
                from: from.notation(),
                to: to.notation(),
            });
        }

        self.apply_move(Move::new(from, to))
    }

    /// Commit a move without consulting the legality filter
    ///
    /// Callers must pass a move taken from the legal move list. Only the
    /// structural preconditions are checked: a piece on `from`, and a
    /// destination that is on the board, not blocked and not held by a piece
    /// of the mover's color.
    ///
    /// Effects, in order: an opposing piece on `to` leaves the registry, the
    /// mover's square is updated and its move count incremented, then `from`
    /// is emptied and `to` takes the mover.
    pub fn apply_move(&mut self, mv: Move) -> RulesResult<AppliedMove> {
        let id = match self.cell_at(mv.from) {
            Some(Cell::Occupied(id)) if self.piece(id).is_some() => id,
            _ => {
                return Err(RulesError::NoPieceAtSquare {
                    square: mv.from.notation(),
                })
            }
        };
        let color = self.pieces[id.index()]
            .as_ref()
            .map(|piece| piece.color)
            .ok_or(RulesError::UnknownPiece { id: id.0 })?;

        let illegal = || RulesError::IllegalMove {
            from: mv.from.notation(),
            to: mv.to.notation(),
        };

        let captured = match self.cell_at(mv.to) {
            None | Some(Cell::Blocked) => return Err(illegal()),
            Some(Cell::Empty) => None,
            Some(Cell::Occupied(other)) if other == id => return Err(illegal()),
            Some(Cell::Occupied(other)) => {
                if self.piece(other).map(|p| p.color) == Some(color) {
                    return Err(illegal());
                }
                self.pieces[other.index()].take()
            }
        };

        let piece = self.pieces[id.index()]
            .as_mut()
            .ok_or(RulesError::UnknownPiece { id: id.0 })?;
        piece.square = mv.to;
        piece.move_count += 1;
        let piece = piece.clone();

        self.cells[mv.from.rank as usize][mv.from.file as usize] = Cell::Empty;
        self.cells[mv.to.rank as usize][mv.to.file as usize] = Cell::Occupied(id);

        match &captured {
            Some(victim) => debug!(
                "[MOVE] {} {} -> {} captures {}",
                piece.piece_type, mv.from, mv.to, victim.piece_type
            ),
            None => debug!("[MOVE] {} {} -> {}", piece.piece_type, mv.from, mv.to),
        }

        Ok(AppliedMove {
            piece,
            from: mv.from,
            to: mv.to,
            captured,
        })
    }
}
