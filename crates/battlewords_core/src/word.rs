//! Placed words and their cell geometry.

use crate::coord::{Coord, Direction};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Shortest word length hidden in a puzzle.
pub const MIN_WORD_LEN: usize = 4;

/// Longest word length hidden in a puzzle.
pub const MAX_WORD_LEN: usize = 6;

/// Word lengths a puzzle hides, two words each.
pub const WORD_LENGTHS: [usize; 3] = [4, 5, 6];

/// Number of words per puzzle.
pub const WORDS_PER_PUZZLE: usize = 6;

/// Returns true if `len` is one of the hidden word lengths.
pub fn is_valid_length(len: usize) -> bool {
    (MIN_WORD_LEN..=MAX_WORD_LEN).contains(&len)
}

/// Error building a [`PlacedWord`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum WordError {
    /// Word contains something other than ASCII letters.
    #[display("Word {:?} must contain only letters A-Z", text)]
    NotAlphabetic {
        /// Offending text.
        text: String,
    },

    /// Word length is not 4, 5, or 6.
    #[display("Word {:?} has length {}, expected 4-6", text, len)]
    InvalidLength {
        /// Offending text.
        text: String,
        /// Its length.
        len: usize,
    },
}

/// A word anchored on the grid.
///
/// `cells[i]` holds `text[i]`; cells are derived from `start` and `direction`
/// at construction and never change. Deserialization goes through
/// [`PlacedWord::new`], so serialized cells are never trusted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PlacedWordRepr", into = "PlacedWordRepr")]
pub struct PlacedWord {
    text: String,
    start: Coord,
    direction: Direction,
    cells: Vec<Coord>,
}

impl PlacedWord {
    /// Creates a placed word, uppercasing `text`.
    ///
    /// Bounds are not checked here; a [`Puzzle`](crate::Puzzle) checks them
    /// against its grid size.
    #[instrument(skip(text), fields(text = %text.as_ref()))]
    pub fn new(
        text: impl AsRef<str>,
        start: Coord,
        direction: Direction,
    ) -> Result<Self, WordError> {
        let text = text.as_ref().trim().to_ascii_uppercase();
        if text.is_empty() || !text.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(WordError::NotAlphabetic { text });
        }
        if !is_valid_length(text.len()) {
            let len = text.len();
            return Err(WordError::InvalidLength { text, len });
        }

        let cells = (0..text.len()).map(|i| start.step(direction, i)).collect();
        Ok(Self {
            text,
            start,
            direction,
            cells,
        })
    }

    /// The uppercase word text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; placed words have 4-6 letters.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// First cell.
    pub fn start(&self) -> Coord {
        self.start
    }

    /// Direction the word runs in.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Cells in letter order.
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    /// Cell of the final letter (the radar pulse).
    pub fn last_cell(&self) -> Coord {
        // cells is never empty: construction rejects empty text
        self.cells[self.cells.len() - 1]
    }

    /// Letter this word places at `coord`, if it covers it.
    pub fn letter_at(&self, coord: Coord) -> Option<char> {
        self.cells
            .iter()
            .position(|&c| c == coord)
            .map(|i| self.text.as_bytes()[i] as char)
    }

    /// Iterates `(cell, letter)` pairs.
    pub fn letters(&self) -> impl Iterator<Item = (Coord, char)> + '_ {
        self.cells
            .iter()
            .copied()
            .zip(self.text.bytes().map(char::from))
    }

    /// Returns true if every cell lies within a `size` grid.
    pub fn in_bounds(&self, size: usize) -> bool {
        self.cells.iter().all(|c| c.in_bounds(size))
    }
}

/// Wire form of a [`PlacedWord`]; cells are rebuilt on the way in.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PlacedWordRepr {
    text: String,
    start: Coord,
    direction: Direction,
}

impl From<PlacedWord> for PlacedWordRepr {
    fn from(word: PlacedWord) -> Self {
        Self {
            text: word.text,
            start: word.start,
            direction: word.direction,
        }
    }
}

impl TryFrom<PlacedWordRepr> for PlacedWord {
    type Error = WordError;

    fn try_from(repr: PlacedWordRepr) -> Result<Self, Self::Error> {
        Self::new(repr.text, repr.start, repr.direction)
    }
}

impl std::fmt::Display for PlacedWord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} @ {} {}", self.text, self.start, self.direction)
    }
}
