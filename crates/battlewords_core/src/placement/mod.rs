//! Puzzle generation.
//!
//! [`PlacementEngine`] picks two words of each length from a [`WordPool`],
//! then places them longest-first with a backtracking search. Every random
//! choice draws from one [`SplitMix64`] stream in a fixed order:
//!
//! 1. For lengths 4, 5, 6: shuffle the sorted bucket, take the first two.
//! 2. Stable-sort the six words longest-first.
//! 3. Whenever a word's search frame opens, shuffle its candidate positions
//!    (horizontal then vertical, row-major).
//!
//! Failed attempts keep drawing from the same stream, so the same seed,
//! pool, grid size and policy always give the same puzzle.

mod curation;
mod occupancy;
mod search;

pub use curation::find_accidental_word;

use crate::coord::{GRID_SIZE, MAX_GRID_SIZE, MIN_GRID_SIZE, is_valid_grid_size};
use crate::invariants::{DisjointCellsInvariant, Invariant};
use crate::puzzle::{Puzzle, PuzzleError};
use crate::rng::SplitMix64;
use crate::word::{PlacedWord, WORD_LENGTHS, WORDS_PER_PUZZLE, WordError};
use crate::word_source::WordPool;
use derive_getters::Getters;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Default number of placement attempts before giving up.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 200;

/// Whether words may share cells.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum OverlapPolicy {
    /// No two words share a cell.
    #[default]
    Strict,
    /// Words may cross where their letters agree.
    #[strum(to_string = "overlap_allowed", serialize = "overlap")]
    #[serde(alias = "overlap")]
    OverlapAllowed,
}

/// Generation parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, Setters)]
#[setters(prefix = "with_")]
pub struct PlacementConfig {
    /// Grid side length.
    grid_size: usize,
    /// Overlap policy.
    overlap_policy: OverlapPolicy,
    /// Seed for the random stream; drawn from OS entropy when absent.
    #[setters(strip_option)]
    seed: Option<u64>,
    /// Reject overlap layouts that spell unintended words.
    curation: bool,
    /// Attempts before failing.
    max_attempts: u32,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            overlap_policy: OverlapPolicy::default(),
            seed: None,
            curation: false,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Why generation failed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum PlacementFailure {
    /// The pool lacks two words of some length.
    #[display("only {} words of length {} available", found, length)]
    NotEnoughWords {
        /// Bucket length.
        length: usize,
        /// Words available.
        found: usize,
    },

    /// The grid cannot hold a 6-letter word or exceeds [`MAX_GRID_SIZE`].
    #[display(
        "grid size {} is outside {}..={}",
        grid_size,
        MIN_GRID_SIZE,
        MAX_GRID_SIZE
    )]
    InvalidGridSize {
        /// Requested side length.
        grid_size: usize,
    },

    /// An explicit word set is not two distinct words of each length 4-6.
    #[display("invalid word set: {}", _0)]
    InvalidWordSet(String),

    /// Every attempt failed.
    #[display("no layout found")]
    Exhausted,

    /// A found layout failed validation.
    #[display("{}", _0)]
    Invalid(PuzzleError),
}

/// Generation failed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Placement failed after {} attempts: {}", attempts_used, reason)]
pub struct PlacementError {
    /// What went wrong.
    pub reason: PlacementFailure,
    /// Attempts consumed before failing.
    pub attempts_used: u32,
}

impl PlacementError {
    fn before_search(reason: PlacementFailure) -> Self {
        Self {
            reason,
            attempts_used: 0,
        }
    }
}

impl From<WordError> for PlacementError {
    fn from(e: WordError) -> Self {
        Self::before_search(PlacementFailure::InvalidWordSet(e.to_string()))
    }
}

/// Places word sets into puzzles.
#[derive(Debug, Clone, Default, derive_new::new)]
pub struct PlacementEngine {
    config: PlacementConfig,
}

impl PlacementEngine {
    /// The engine's configuration.
    pub fn config(&self) -> &PlacementConfig {
        &self.config
    }

    /// Selects six words from `pool` and places them.
    ///
    /// Curation, when enabled, checks runs against the whole pool.
    #[instrument(skip(self, pool), fields(policy = %self.config.overlap_policy))]
    pub fn generate(&self, pool: &WordPool) -> Result<Puzzle, PlacementError> {
        self.check_grid_size()?;
        let seed = self.resolve_seed();
        let mut rng = SplitMix64::new(seed);
        let words = select_words(pool, &mut rng)?;
        debug!(seed, ?words, "Selected words");
        self.place(words, &mut rng, seed, pool)
    }

    /// Places an explicit set of six words, two of each length 4-6.
    ///
    /// Curation, when enabled, checks runs against the six words themselves.
    #[instrument(skip(self, words), fields(policy = %self.config.overlap_policy))]
    pub fn place_words<S: AsRef<str>>(&self, words: &[S]) -> Result<Puzzle, PlacementError> {
        self.check_grid_size()?;
        let words = normalize_word_set(words)?;
        let dictionary = WordPool::from_words(&words);
        let seed = self.resolve_seed();
        let mut rng = SplitMix64::new(seed);
        self.place(words, &mut rng, seed, &dictionary)
    }

    fn check_grid_size(&self) -> Result<(), PlacementError> {
        let grid_size = self.config.grid_size;
        if is_valid_grid_size(grid_size) {
            Ok(())
        } else {
            warn!(grid_size, "Grid size out of range");
            Err(PlacementError::before_search(
                PlacementFailure::InvalidGridSize { grid_size },
            ))
        }
    }

    fn resolve_seed(&self) -> u64 {
        match self.config.seed {
            Some(seed) => seed,
            None => {
                let seed = rand::random::<u64>();
                info!(seed, "No seed supplied, drew one from entropy");
                seed
            }
        }
    }

    fn place(
        &self,
        mut words: Vec<String>,
        rng: &mut SplitMix64,
        seed: u64,
        dictionary: &WordPool,
    ) -> Result<Puzzle, PlacementError> {
        let config = &self.config;
        let size = config.grid_size;
        words.sort_by(|a, b| b.len().cmp(&a.len()));
        let bytes: Vec<&[u8]> = words.iter().map(|w| w.as_bytes()).collect();
        let budget: usize = bytes
            .iter()
            .map(|w| search::candidates(w.len(), size).len())
            .sum();
        let curate = config.curation && config.overlap_policy == OverlapPolicy::OverlapAllowed;

        for attempt in 1..=config.max_attempts {
            let Some(layout) = search::search(&bytes, size, config.overlap_policy, budget, rng)
            else {
                debug!(attempt, "Attempt failed");
                continue;
            };

            let placed = words
                .iter()
                .zip(layout)
                .map(|(text, c)| PlacedWord::new(text, c.start, c.direction))
                .collect::<Result<Vec<_>, _>>()?;

            if curate {
                if let Some(accidental) = find_accidental_word(&placed, size, dictionary) {
                    warn!(attempt, %accidental, "Curation rejected layout");
                    continue;
                }
            }

            let puzzle = Puzzle::new(placed, size).map_err(|e| PlacementError {
                reason: PlacementFailure::Invalid(e),
                attempts_used: attempt,
            })?;
            if config.overlap_policy == OverlapPolicy::Strict
                && !DisjointCellsInvariant::holds(&puzzle)
            {
                return Err(PlacementError {
                    reason: PlacementFailure::Invalid(PuzzleError {
                        violations: vec![DisjointCellsInvariant::description().to_string()],
                    }),
                    attempts_used: attempt,
                });
            }

            info!(seed, attempt, words = ?words, "Generated puzzle");
            return Ok(puzzle);
        }

        warn!(seed, attempts = config.max_attempts, "Placement exhausted");
        Err(PlacementError {
            reason: PlacementFailure::Exhausted,
            attempts_used: config.max_attempts,
        })
    }
}

/// Two words per length, drawn in stream order.
fn select_words(pool: &WordPool, rng: &mut SplitMix64) -> Result<Vec<String>, PlacementError> {
    let mut chosen = Vec::with_capacity(WORDS_PER_PUZZLE);
    for length in WORD_LENGTHS {
        let mut bucket: Vec<&str> = pool.words(length).collect();
        if bucket.len() < 2 {
            return Err(PlacementError::before_search(
                PlacementFailure::NotEnoughWords {
                    length,
                    found: bucket.len(),
                },
            ));
        }
        rng.shuffle(&mut bucket);
        chosen.extend(bucket.iter().take(2).map(|w| w.to_string()));
    }
    Ok(chosen)
}

/// Uppercases and checks an explicit word set.
fn normalize_word_set<S: AsRef<str>>(words: &[S]) -> Result<Vec<String>, PlacementError> {
    let invalid = |msg: String| PlacementError::before_search(PlacementFailure::InvalidWordSet(msg));

    let normalized: Vec<String> = words
        .iter()
        .map(|w| w.as_ref().trim().to_ascii_uppercase())
        .collect();
    if let Some(bad) = normalized
        .iter()
        .find(|w| w.is_empty() || !w.bytes().all(|b| b.is_ascii_uppercase()))
    {
        return Err(invalid(format!("{:?} is not alphabetic", bad)));
    }
    if normalized.len() != WORDS_PER_PUZZLE {
        return Err(invalid(format!(
            "expected {} words, got {}",
            WORDS_PER_PUZZLE,
            normalized.len()
        )));
    }
    for length in WORD_LENGTHS {
        let count = normalized.iter().filter(|w| w.len() == length).count();
        if count != 2 {
            return Err(invalid(format!(
                "expected 2 words of length {}, got {}",
                length, count
            )));
        }
    }
    let mut distinct = normalized.clone();
    distinct.sort();
    distinct.dedup();
    if distinct.len() != normalized.len() {
        return Err(invalid("duplicate words".to_string()));
    }
    Ok(normalized)
}
