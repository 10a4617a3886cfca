//! Depth-first placement with backtracking.
//!
//! The search keeps an explicit stack of frames, one per word placed so far
//! plus the word being tried. Each frame owns its shuffled candidate list and
//! a cursor into it, so backtracking resumes exactly where the frame left off.

use super::OverlapPolicy;
use super::occupancy::Occupancy;
use crate::coord::{Coord, Direction};
use crate::rng::SplitMix64;
use tracing::{debug, instrument, trace};

/// A start cell and direction for one word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_new::new)]
pub(super) struct Candidate {
    pub(super) start: Coord,
    pub(super) direction: Direction,
}

/// Every in-bounds position for a word of `length`, horizontal first,
/// row-major within each direction.
pub(super) fn candidates(length: usize, size: usize) -> Vec<Candidate> {
    Direction::ALL
        .iter()
        .flat_map(|&direction| {
            direction
                .starts(length, size)
                .into_iter()
                .map(move |start| Candidate::new(start, direction))
        })
        .collect()
}

#[derive(Debug)]
struct Frame {
    word: usize,
    candidates: Vec<Candidate>,
    cursor: usize,
    placed: Option<Candidate>,
}

impl Frame {
    fn open(word: usize, length: usize, size: usize, rng: &mut SplitMix64) -> Self {
        let mut candidates = candidates(length, size);
        rng.shuffle(&mut candidates);
        Self {
            word,
            candidates,
            cursor: 0,
            placed: None,
        }
    }
}

/// One placement attempt.
///
/// Returns a position per word, in input order, or `None` when backtracking
/// empties the stack or more than `budget` candidates have been tested.
#[instrument(skip(words, rng), fields(words = words.len()))]
pub(super) fn search(
    words: &[&[u8]],
    size: usize,
    policy: OverlapPolicy,
    budget: usize,
    rng: &mut SplitMix64,
) -> Option<Vec<Candidate>> {
    let first = words.first()?;
    let mut occupancy = Occupancy::new(size);
    let mut frames = vec![Frame::open(0, first.len(), size, rng)];
    let mut steps = 0usize;

    while let Some(frame) = frames.last_mut() {
        let word = words[frame.word];
        if let Some(previous) = frame.placed.take() {
            occupancy.remove(word, previous);
        }

        let mut accepted = None;
        while let Some(&candidate) = frame.candidates.get(frame.cursor) {
            frame.cursor += 1;
            steps += 1;
            if steps > budget {
                debug!(steps, budget, "Search budget exhausted");
                return None;
            }
            if occupancy.accepts(word, candidate, policy) {
                accepted = Some(candidate);
                break;
            }
        }

        match accepted {
            Some(candidate) => {
                occupancy.place(word, candidate);
                frame.placed = Some(candidate);
                let next = frame.word + 1;
                if next == words.len() {
                    trace!(steps, "Search complete");
                    return frames.iter().map(|f| f.placed).collect();
                }
                frames.push(Frame::open(next, words[next].len(), size, rng));
            }
            None => {
                trace!(word = frame.word, "Candidates exhausted, backtracking");
                frames.pop();
            }
        }
    }

    debug!(steps, "Backtracked past the first word");
    None
}
