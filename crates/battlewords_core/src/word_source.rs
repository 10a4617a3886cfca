//! Candidate word lists grouped by length.
//!
//! Word lists are plain newline-delimited text. Parsing trims each line,
//! drops blank lines and `#` comments (whole-line or trailing), uppercases,
//! and keeps only A-Z words of length 4-6. Buckets are sets, so duplicates
//! collapse and iteration order is sorted regardless of file order.

use crate::word::{WORD_LENGTHS, is_valid_length};
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::{debug, info, instrument, warn};

/// Default minimum bucket size for a word list to be accepted.
pub const DEFAULT_MIN_PER_LENGTH: usize = 500;

const BUNDLED_4: &[&str] = &[
    "TREE", "BOAT", "WIND", "FROG", "LION", "MOON", "FORK", "GLOW", "GAME", "CODE", "DATA",
    "BLUE", "GOLD", "ROAD", "STAR",
];
const BUNDLED_5: &[&str] = &[
    "APPLE", "RIVER", "STONE", "PLANT", "MOUSE", "BOARD", "CHAIR", "SCALE", "SMILE", "CLOUD",
];
const BUNDLED_6: &[&str] = &[
    "ORANGE", "PYTHON", "STREAM", "MARKET", "FOREST", "THRIVE", "LOGGER", "BREATH", "DOMAIN",
    "GALAXY",
];

/// Word list failure.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum WordListError {
    /// A length bucket holds fewer words than required.
    #[display("Only {} words of length {} (need {})", found, length, required)]
    Insufficient {
        /// Bucket length.
        length: usize,
        /// Words found.
        found: usize,
        /// Configured minimum.
        required: usize,
    },

    /// The word list file could not be read.
    #[display("Failed to read word list {}: {}", path.display(), message)]
    Unreadable {
        /// File path.
        path: PathBuf,
        /// Underlying I/O message.
        message: String,
    },
}

/// Where a loaded pool came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum PoolOrigin {
    /// Every bucket came from the primary source.
    Primary,
    /// Some buckets were replaced by the bundled list.
    Mixed,
    /// Everything came from the bundled list.
    Bundled,
}

/// Candidate words keyed by length (4, 5, 6).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WordPool {
    buckets: BTreeMap<usize, BTreeSet<String>>,
}

impl WordPool {
    /// Creates an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses newline-delimited text.
    #[instrument(skip(text), fields(bytes = text.len()))]
    pub fn parse(text: &str) -> Self {
        let mut pool = Self::new();
        for raw in text.lines() {
            let line = raw.split('#').next().unwrap_or_default().trim();
            if !line.is_empty() {
                pool.insert(line);
            }
        }
        debug!(counts = ?pool.counts(), "Parsed word list");
        pool
    }

    /// Builds a pool from an iterator of words, normalizing and filtering each.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut pool = Self::new();
        for w in words {
            pool.insert(w.as_ref());
        }
        pool
    }

    /// Inserts one word; returns false if it was filtered out or already present.
    pub fn insert(&mut self, word: &str) -> bool {
        let word = word.trim().to_ascii_uppercase();
        if !is_valid_length(word.len()) || !word.bytes().all(|b| b.is_ascii_uppercase()) {
            return false;
        }
        self.buckets.entry(word.len()).or_default().insert(word)
    }

    /// Words of the given length, sorted.
    pub fn words(&self, length: usize) -> impl Iterator<Item = &str> + '_ {
        self.buckets
            .get(&length)
            .into_iter()
            .flat_map(|b| b.iter().map(String::as_str))
    }

    /// Number of words of the given length.
    pub fn count(&self, length: usize) -> usize {
        self.buckets.get(&length).map_or(0, BTreeSet::len)
    }

    /// Bucket sizes for lengths 4, 5, 6.
    pub fn counts(&self) -> [(usize, usize); 3] {
        WORD_LENGTHS.map(|len| (len, self.count(len)))
    }

    /// Returns true if any bucket contains `word` (case-insensitive).
    pub fn contains(&self, word: &str) -> bool {
        let word = word.to_ascii_uppercase();
        self.buckets
            .get(&word.len())
            .is_some_and(|b| b.contains(&word))
    }

    /// Checks every bucket against `min_per_length`.
    pub fn ensure_minimum(&self, min_per_length: usize) -> Result<(), WordListError> {
        for (length, found) in self.counts() {
            if found < min_per_length {
                return Err(WordListError::Insufficient {
                    length,
                    found,
                    required: min_per_length,
                });
            }
        }
        Ok(())
    }

    fn replace_bucket(&mut self, length: usize, from: &WordPool) {
        let bucket = from.buckets.get(&length).cloned().unwrap_or_default();
        self.buckets.insert(length, bucket);
    }
}

/// A supplier of candidate words.
pub trait WordSource {
    /// Loads the pool, failing if any bucket holds fewer than `min_per_length` words.
    fn load_words(&self, min_per_length: usize) -> Result<WordPool, WordListError>;
}

/// Word list held in memory.
#[derive(Debug, Clone)]
pub struct TextWordSource {
    text: String,
}

impl TextWordSource {
    /// Wraps newline-delimited text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl WordSource for TextWordSource {
    #[instrument(skip(self))]
    fn load_words(&self, min_per_length: usize) -> Result<WordPool, WordListError> {
        let pool = WordPool::parse(&self.text);
        pool.ensure_minimum(min_per_length)?;
        Ok(pool)
    }
}

/// Word list read from a file on each load.
#[derive(Debug, Clone)]
pub struct FileWordSource {
    path: PathBuf,
}

impl FileWordSource {
    /// Creates a source reading `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WordSource for FileWordSource {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load_words(&self, min_per_length: usize) -> Result<WordPool, WordListError> {
        let text = std::fs::read_to_string(&self.path).map_err(|e| WordListError::Unreadable {
            path: self.path.clone(),
            message: e.to_string(),
        })?;
        let pool = WordPool::parse(&text);
        pool.ensure_minimum(min_per_length)?;
        info!(counts = ?pool.counts(), "Loaded word list");
        Ok(pool)
    }
}

/// The built-in minimal word list.
///
/// It always satisfies placement needs (at least two words per length) but is
/// far below [`DEFAULT_MIN_PER_LENGTH`], so it ignores the minimum.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledWordSource;

impl BundledWordSource {
    /// Memoized bundled pool.
    pub fn pool() -> &'static WordPool {
        static POOL: OnceLock<WordPool> = OnceLock::new();
        POOL.get_or_init(|| {
            WordPool::from_words(BUNDLED_4.iter().chain(BUNDLED_5).chain(BUNDLED_6))
        })
    }
}

impl WordSource for BundledWordSource {
    fn load_words(&self, _min_per_length: usize) -> Result<WordPool, WordListError> {
        Ok(Self::pool().clone())
    }
}

/// Loads from `source`, replacing deficient buckets with the bundled list.
///
/// An unreadable source falls back entirely.
#[instrument(skip(source))]
pub fn load_with_fallback(
    source: &dyn WordSource,
    min_per_length: usize,
) -> (WordPool, PoolOrigin) {
    // Load with no minimum so healthy buckets survive a deficient sibling.
    let primary = match source.load_words(0) {
        Ok(pool) => pool,
        Err(e) => {
            warn!(error = %e, "Word list unavailable, using bundled list");
            return (BundledWordSource::pool().clone(), PoolOrigin::Bundled);
        }
    };

    let mut pool = primary;
    let mut replaced = 0;
    for (length, found) in pool.counts() {
        if found < min_per_length {
            warn!(length, found, min_per_length, "Bucket below minimum, using bundled words");
            pool.replace_bucket(length, BundledWordSource::pool());
            replaced += 1;
        }
    }

    let origin = match replaced {
        0 => PoolOrigin::Primary,
        n if n == WORD_LENGTHS.len() => PoolOrigin::Bundled,
        _ => PoolOrigin::Mixed,
    };
    info!(%origin, counts = ?pool.counts(), "Word pool ready");
    (pool, origin)
}
