//! Rejects overlap layouts that spell unintended dictionary words.
//!
//! Touching or crossing words can line up into runs of letters that read as
//! some other word. Such a run is an accidental word when a 4-6 letter span
//! of it is in the dictionary and the span does not lie inside a single
//! placed word running the same way.

use crate::coord::{Coord, Direction};
use crate::word::{MAX_WORD_LEN, MIN_WORD_LEN, PlacedWord};
use crate::word_source::WordPool;
use std::collections::BTreeMap;
use tracing::instrument;

/// First accidental dictionary word found in row or column runs, if any.
#[instrument(skip(words, dictionary), fields(words = words.len()))]
pub fn find_accidental_word(
    words: &[PlacedWord],
    size: usize,
    dictionary: &WordPool,
) -> Option<String> {
    let letters: BTreeMap<Coord, char> = words.iter().flat_map(PlacedWord::letters).collect();

    for direction in Direction::ALL {
        for line in 0..size {
            let cell = |i: usize| match direction {
                Direction::Horizontal => Coord::new(line, i),
                Direction::Vertical => Coord::new(i, line),
            };
            let mut run: Vec<(Coord, char)> = Vec::new();
            for i in 0..=size {
                let here = (i < size).then(|| cell(i));
                match here.and_then(|c| letters.get(&c).map(|&l| (c, l))) {
                    Some(entry) => run.push(entry),
                    None => {
                        if let Some(found) = scan_run(&run, direction, words, dictionary) {
                            return Some(found);
                        }
                        run.clear();
                    }
                }
            }
        }
    }
    None
}

fn scan_run(
    run: &[(Coord, char)],
    direction: Direction,
    words: &[PlacedWord],
    dictionary: &WordPool,
) -> Option<String> {
    for len in MIN_WORD_LEN..=MAX_WORD_LEN.min(run.len()) {
        for span in run.windows(len) {
            let text: String = span.iter().map(|&(_, l)| l).collect();
            if !dictionary.contains(&text) {
                continue;
            }
            let inside_placed = words.iter().any(|w| {
                w.direction() == direction && span.iter().all(|(c, _)| w.cells().contains(c))
            });
            if !inside_placed {
                return Some(text);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str, row: usize, col: usize, direction: Direction) -> PlacedWord {
        PlacedWord::new(text, Coord::new(row, col), direction).unwrap()
    }

    #[test]
    fn test_adjacent_words_spell_another() {
        let words = vec![
            word("SEAL", 0, 0, Direction::Horizontal),
            word("ONES", 0, 4, Direction::Horizontal),
        ];
        let dictionary = WordPool::from_words(["SEAL", "ONES", "ALONE"]);
        assert_eq!(
            find_accidental_word(&words, 12, &dictionary),
            Some("ALONE".to_string())
        );
    }

    #[test]
    fn test_vertical_run() {
        let words = vec![
            word("SEAL", 3, 5, Direction::Vertical),
            word("ONES", 7, 5, Direction::Vertical),
        ];
        let dictionary = WordPool::from_words(["ALONE"]);
        assert_eq!(
            find_accidental_word(&words, 12, &dictionary),
            Some("ALONE".to_string())
        );
    }

    #[test]
    fn test_placed_words_and_their_parts_are_fine() {
        // TONE lies inside STONE; neither counts as accidental.
        let words = vec![
            word("STONE", 0, 0, Direction::Horizontal),
            word("GOLD", 5, 5, Direction::Vertical),
        ];
        let dictionary = WordPool::from_words(["STONE", "TONE", "GOLD"]);
        assert_eq!(find_accidental_word(&words, 12, &dictionary), None);
    }

    #[test]
    fn test_separated_words_are_fine() {
        let words = vec![
            word("SEAL", 0, 0, Direction::Horizontal),
            word("ONES", 0, 5, Direction::Horizontal),
        ];
        let dictionary = WordPool::from_words(["ALONE", "SEALO"]);
        assert_eq!(find_accidental_word(&words, 12, &dictionary), None);
    }
}
