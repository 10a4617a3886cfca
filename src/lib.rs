//! Battlewords - word-finding puzzle generator and game sessions
//!
//! Re-exports the pure game logic from `battlewords_core` and adds the
//! application layer: TOML configuration, word-list loading, and a
//! line-driven play loop.
//!
//! # Example
//!
//! ```
//! use battlewords::{BattlewordsConfig, GameSession, PlacementEngine, load_pool};
//!
//! let config = BattlewordsConfig::default();
//! let (pool, _origin) = load_pool(&config);
//! let puzzle = PlacementEngine::new(config.placement(Some(7)))
//!     .generate(&pool)
//!     .unwrap();
//! let session = GameSession::new(puzzle);
//! assert_eq!(session.score(), 0);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod play;

pub use battlewords_core::*;

// Crate-level exports - Configuration
pub use config::{BattlewordsConfig, ConfigError};

// Crate-level exports - Play loop
pub use play::{CommandError, PlayCommand, play};

use tracing::instrument;

/// Loads the configured word list, falling back to the bundled list per
/// deficient length.
#[instrument(skip(config), fields(word_list = ?config.word_list()))]
pub fn load_pool(config: &BattlewordsConfig) -> (WordPool, PoolOrigin) {
    match config.word_list() {
        Some(path) => load_with_fallback(&FileWordSource::new(path), *config.min_per_length()),
        None => (BundledWordSource::pool().clone(), PoolOrigin::Bundled),
    }
}
