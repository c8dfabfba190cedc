//! Square coordinates and their file-letter + rank-number names
//!
//! Internal logic always works on `(rank, file)` integer pairs. Names such as
//! `"e4"` only appear at the edges: move generation output and lookups by name.
//!
//! A square's name is `chr(97 + file)` followed by `rank + 1`, so file 0 is
//! `'a'` and rank 0 is `"1"`. Ranks may run past 9 on tall puzzle boards
//! (`"a10"`), files are limited to the 26 letters `a..=z`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{RulesError, RulesResult};

/// Highest number of files a board can name with a single letter
pub const MAX_FILES: usize = 26;

/// Board square as a `(rank, file)` pair
///
/// Coordinates are signed so that direction offsets can step past the board
/// edge; such squares are simply reported as out of bounds by the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    pub rank: i32,
    pub file: i32,
}

impl Square {
    /// Create a square from rank and file indices
    pub const fn new(rank: i32, file: i32) -> Self {
        Square { rank, file }
    }

    /// Square reached by stepping `(rank_delta, file_delta)` from this one
    #[inline]
    pub const fn offset(self, rank_delta: i32, file_delta: i32) -> Self {
        Square {
            rank: self.rank + rank_delta,
            file: self.file + file_delta,
        }
    }

    /// Decode a square name such as `"e4"` or `"b10"`
    ///
    /// # Examples
    ///
    /// ```
    /// use chess_rules::Square;
    ///
    /// assert_eq!(Square::from_notation("e4"), Some(Square::new(3, 4)));
    /// assert_eq!(Square::from_notation("e0"), None);
    /// assert_eq!(Square::from_notation("e04"), None);
    /// ```
    pub fn from_notation(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        let file_char = chars.next()?;
        if !file_char.is_ascii_lowercase() {
            return None;
        }

        let digits = chars.as_str();
        if digits.is_empty()
            || digits.starts_with('0')
            || !digits.bytes().all(|b| b.is_ascii_digit())
        {
            return None;
        }
        let rank_number: i32 = digits.parse().ok()?;
        if rank_number < 1 {
            return None;
        }

        Some(Square {
            rank: rank_number - 1,
            file: (file_char as u8 - b'a') as i32,
        })
    }

    /// Square name, or `None` when the coordinates cannot be named
    pub fn try_notation(self) -> Option<String> {
        if self.rank < 0 || self.file < 0 || self.file >= MAX_FILES as i32 {
            return None;
        }
        let file = (b'a' + self.file as u8) as char;
        Some(format!("{}{}", file, self.rank + 1))
    }

    /// Square name such as `"e4"`
    ///
    /// Coordinates outside the nameable range render as `"(rank,file)"`.
    pub fn notation(self) -> String {
        self.try_notation()
            .unwrap_or_else(|| format!("({},{})", self.rank, self.file))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.notation())
    }
}

/// Name of the square at `(rank, file)`
pub fn notation_of(rank: i32, file: i32) -> String {
    Square::new(rank, file).notation()
}

/// Decode a square name, failing with [`RulesError::InvalidNotation`]
pub fn square_of(notation: &str) -> RulesResult<Square> {
    Square::from_notation(notation).ok_or_else(|| RulesError::InvalidNotation {
        notation: notation.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notation_uses_file_letter_and_one_based_rank() {
        assert_eq!(notation_of(0, 0), "a1");
        assert_eq!(notation_of(1, 4), "e2");
        assert_eq!(notation_of(7, 7), "h8");
        assert_eq!(notation_of(9, 1), "b10");
    }

    #[test]
    fn test_notation_round_trip_over_board_range() {
        for rank in 0..12 {
            for file in 0..MAX_FILES as i32 {
                let square = Square::new(rank, file);
                assert_eq!(square_of(&square.notation()), Ok(square));
            }
        }
    }

    #[test]
    fn test_malformed_notation_is_rejected() {
        for bad in ["", "e", "4e", "E4", "e0", "e-1", "e4x", "ee4", "e04", "b010", "a00"] {
            assert!(
                Square::from_notation(bad).is_none(),
                "'{}' should not decode",
                bad
            );
        }
        assert_eq!(
            square_of("z"),
            Err(RulesError::InvalidNotation {
                notation: "z".to_string()
            })
        );
    }

    #[test]
    fn test_unnameable_square_renders_as_pair() {
        assert_eq!(Square::new(-1, 2).try_notation(), None);
        assert_eq!(Square::new(-1, 2).to_string(), "(-1,2)");
    }
}
