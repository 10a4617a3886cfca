//! Battlewords core - puzzle generation and game sessions
//!
//! A 12x12 grid hides six words, two each of length 4, 5 and 6, placed
//! horizontally or vertically. Players reveal cells one at a time and may
//! guess a word after each reveal. A correct guess scores the word's length
//! plus one point per cell still hidden.
//!
//! # Architecture
//!
//! - **Word sources**: load and normalize candidate words by length
//! - **Placement**: seeded backtracking search producing a [`Puzzle`]
//! - **Session**: the reveal/guess state machine with scoring
//! - **Tiers**: final-score labels
//!
//! # Example
//!
//! ```
//! use battlewords_core::{
//!     BundledWordSource, GameSession, OverlapPolicy, PlacementConfig, PlacementEngine,
//! };
//!
//! let config = PlacementConfig::default()
//!     .with_overlap_policy(OverlapPolicy::Strict)
//!     .with_seed(42);
//! let puzzle = PlacementEngine::new(config)
//!     .generate(BundledWordSource::pool())
//!     .unwrap();
//!
//! let mut session = GameSession::new(puzzle);
//! let first = session.puzzle().words()[0].clone();
//! session.reveal(first.start()).unwrap();
//! let outcome = session.guess(first.text()).unwrap();
//! assert!(outcome.correct);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod coord;
mod invariants;
mod placement;
mod puzzle;
mod rng;
mod seed;
mod session;
mod tier;
mod word;
mod word_source;

// Crate-level exports - Grid geometry
pub use coord::{Coord, Direction, GRID_SIZE, MAX_GRID_SIZE, MIN_GRID_SIZE, is_valid_grid_size};

// Crate-level exports - Words
pub use word::{
    MAX_WORD_LEN, MIN_WORD_LEN, PlacedWord, WORD_LENGTHS, WORDS_PER_PUZZLE, WordError,
    is_valid_length,
};
pub use word_source::{
    BundledWordSource, DEFAULT_MIN_PER_LENGTH, FileWordSource, PoolOrigin, TextWordSource,
    WordListError, WordPool, WordSource, load_with_fallback,
};

// Crate-level exports - Generation
pub use placement::{
    DEFAULT_MAX_ATTEMPTS, OverlapPolicy, PlacementConfig, PlacementEngine, PlacementError,
    PlacementFailure, find_accidental_word,
};
pub use puzzle::{Puzzle, PuzzleError};
pub use rng::SplitMix64;
pub use seed::{SeedError, daily_seed, daily_seed_from_iso, fnv1a_64};

// Crate-level exports - Invariants
pub use invariants::{
    ConsistentLettersInvariant, DisjointCellsInvariant, DistinctTextsInvariant, GridSizeInvariant,
    GuessedRevealedInvariant, InBoundsInvariant, Invariant, InvariantSet, InvariantViolation,
    PhaseInvariant, PuzzleInvariants, RadarInvariant, ScoreLedgerInvariant, SessionInvariants,
    WordCountsInvariant,
};

// Crate-level exports - Sessions
pub use session::{
    Action, CellInBounds, Contract, FinishReason, GameSession, GameSummary, GuessContract,
    GuessLength, GuessOutcome, GuessPermitted, LastAction, NotFinished, RevealContract,
    RevealOutcome, SessionError, SessionPhase, SessionSnapshot, WordScore,
};

// Crate-level exports - Tiers
pub use tier::{FANTASTIC_THRESHOLD, GOOD_THRESHOLD, GREAT_THRESHOLD, ScoreTier, tier};
