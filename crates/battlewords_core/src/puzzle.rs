//! The generated puzzle: six placed words and their radar pulses.

use crate::coord::Coord;
use crate::invariants::{InvariantSet, InvariantViolation, PuzzleInvariants};
use crate::word::PlacedWord;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{instrument, warn};

/// Puzzle failed validation.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Invalid puzzle: {}", violations.join("; "))]
pub struct PuzzleError {
    /// Descriptions of every violated invariant.
    pub violations: Vec<String>,
}

impl From<Vec<InvariantViolation>> for PuzzleError {
    fn from(violations: Vec<InvariantViolation>) -> Self {
        Self {
            violations: violations.into_iter().map(|v| v.description).collect(),
        }
    }
}

/// Six words hidden in a square grid.
///
/// Immutable once built. `radar[i]` is the last cell of `words[i]`.
/// Deserialization runs the same checks as [`Puzzle::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PuzzleRepr")]
pub struct Puzzle {
    words: Vec<PlacedWord>,
    grid_size: usize,
    radar: Vec<Coord>,
}

impl Puzzle {
    /// Builds and validates a puzzle from placed words.
    ///
    /// Checks word counts per length, bounds, distinct texts, and letter
    /// consistency on shared cells. Whether cells may be shared at all is a
    /// generation policy and is checked by the engine.
    #[instrument(skip(words), fields(count = words.len()))]
    pub fn new(words: Vec<PlacedWord>, grid_size: usize) -> Result<Self, PuzzleError> {
        let puzzle = Self::assemble(words, grid_size);
        if let Err(violations) = PuzzleInvariants::check_all(&puzzle) {
            warn!(?violations, "Rejected puzzle");
            return Err(violations.into());
        }
        Ok(puzzle)
    }

    /// Builds without validation.
    pub(crate) fn assemble(words: Vec<PlacedWord>, grid_size: usize) -> Self {
        let radar = words.iter().map(PlacedWord::last_cell).collect();
        Self {
            words,
            grid_size,
            radar,
        }
    }

    /// The placed words.
    pub fn words(&self) -> &[PlacedWord] {
        &self.words
    }

    /// Grid side length.
    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Radar pulses, one per word.
    pub fn radar(&self) -> &[Coord] {
        &self.radar
    }

    /// Finds a word by text (case-insensitive).
    pub fn word(&self, text: &str) -> Option<&PlacedWord> {
        self.words
            .iter()
            .find(|w| w.text().eq_ignore_ascii_case(text))
    }

    /// Letter at `coord`, if any word covers it.
    pub fn letter_at(&self, coord: Coord) -> Option<char> {
        self.words.iter().find_map(|w| w.letter_at(coord))
    }

    /// Cell-to-letter map across all words.
    pub fn letter_map(&self) -> BTreeMap<Coord, char> {
        self.words.iter().flat_map(PlacedWord::letters).collect()
    }

    /// Every cell covered by at least one word.
    pub fn word_cells(&self) -> BTreeSet<Coord> {
        self.words
            .iter()
            .flat_map(|w| w.cells().iter().copied())
            .collect()
    }

    /// Cells covered by two or more words.
    pub fn shared_cells(&self) -> BTreeSet<Coord> {
        let mut seen = BTreeSet::new();
        let mut shared = BTreeSet::new();
        for &c in self.words.iter().flat_map(|w| w.cells()) {
            if !seen.insert(c) {
                shared.insert(c);
            }
        }
        shared
    }

    /// The solution grid as text, `.` for empty cells.
    pub fn display_grid(&self) -> String {
        let letters = self.letter_map();
        let mut out = String::with_capacity(self.grid_size * (self.grid_size * 2 + 1));
        for row in 0..self.grid_size {
            for col in 0..self.grid_size {
                if col > 0 {
                    out.push(' ');
                }
                out.push(*letters.get(&Coord::new(row, col)).unwrap_or(&'.'));
            }
            out.push('\n');
        }
        out
    }
}

/// Wire form of a [`Puzzle`] before validation.
#[derive(Deserialize)]
struct PuzzleRepr {
    words: Vec<PlacedWord>,
    grid_size: usize,
    radar: Vec<Coord>,
}

impl TryFrom<PuzzleRepr> for Puzzle {
    type Error = PuzzleError;

    fn try_from(repr: PuzzleRepr) -> Result<Self, Self::Error> {
        let puzzle = Self::new(repr.words, repr.grid_size)?;
        if puzzle.radar != repr.radar {
            return Err(PuzzleError {
                violations: vec!["Radar does not match the words' last cells".to_string()],
            });
        }
        Ok(puzzle)
    }
}
