//! Structural invariants of a generated puzzle.

use super::Invariant;
use crate::coord::{Coord, is_valid_grid_size};
use crate::puzzle::Puzzle;
use crate::word::{WORD_LENGTHS, WORDS_PER_PUZZLE};
use std::collections::{BTreeMap, BTreeSet};

/// Invariant: grid side length fits the longest word and stays searchable.
pub struct GridSizeInvariant;

impl Invariant<Puzzle> for GridSizeInvariant {
    fn holds(puzzle: &Puzzle) -> bool {
        is_valid_grid_size(puzzle.grid_size())
    }

    fn description() -> &'static str {
        "Grid size is between 6 and 64"
    }
}

/// Invariant: exactly six words, two of each length 4, 5, 6.
pub struct WordCountsInvariant;

impl Invariant<Puzzle> for WordCountsInvariant {
    fn holds(puzzle: &Puzzle) -> bool {
        puzzle.words().len() == WORDS_PER_PUZZLE
            && WORD_LENGTHS
                .iter()
                .all(|&len| puzzle.words().iter().filter(|w| w.len() == len).count() == 2)
    }

    fn description() -> &'static str {
        "Puzzle has exactly two words of each length 4, 5, 6"
    }
}

/// Invariant: every word cell lies inside the grid.
pub struct InBoundsInvariant;

impl Invariant<Puzzle> for InBoundsInvariant {
    fn holds(puzzle: &Puzzle) -> bool {
        puzzle.words().iter().all(|w| w.in_bounds(puzzle.grid_size()))
    }

    fn description() -> &'static str {
        "All word cells are within grid bounds"
    }
}

/// Invariant: word texts are pairwise distinct.
pub struct DistinctTextsInvariant;

impl Invariant<Puzzle> for DistinctTextsInvariant {
    fn holds(puzzle: &Puzzle) -> bool {
        let texts: BTreeSet<&str> = puzzle.words().iter().map(|w| w.text()).collect();
        texts.len() == puzzle.words().len()
    }

    fn description() -> &'static str {
        "Word texts are pairwise distinct"
    }
}

/// Invariant: one radar pulse per word, on its last cell.
pub struct RadarInvariant;

impl Invariant<Puzzle> for RadarInvariant {
    fn holds(puzzle: &Puzzle) -> bool {
        puzzle.radar().len() == puzzle.words().len()
            && puzzle
                .words()
                .iter()
                .zip(puzzle.radar())
                .all(|(w, &pulse)| w.last_cell() == pulse)
    }

    fn description() -> &'static str {
        "Radar holds each word's last cell"
    }
}

/// Invariant: words sharing a cell agree on its letter.
pub struct ConsistentLettersInvariant;

impl Invariant<Puzzle> for ConsistentLettersInvariant {
    fn holds(puzzle: &Puzzle) -> bool {
        let mut letters: BTreeMap<Coord, char> = BTreeMap::new();
        for (cell, letter) in puzzle.words().iter().flat_map(|w| w.letters()) {
            if *letters.entry(cell).or_insert(letter) != letter {
                return false;
            }
        }
        true
    }

    fn description() -> &'static str {
        "Shared cells hold the same letter in every word"
    }
}

/// Invariant: no two words share a cell (strict policy only).
pub struct DisjointCellsInvariant;

impl Invariant<Puzzle> for DisjointCellsInvariant {
    fn holds(puzzle: &Puzzle) -> bool {
        puzzle.shared_cells().is_empty()
    }

    fn description() -> &'static str {
        "No two words share a cell"
    }
}
