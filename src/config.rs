//! Application configuration loaded from TOML.

use battlewords_core::{
    DEFAULT_MAX_ATTEMPTS, DEFAULT_MIN_PER_LENGTH, GRID_SIZE, MAX_GRID_SIZE, MIN_GRID_SIZE,
    OverlapPolicy, PlacementConfig, is_valid_grid_size,
};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings for word loading and puzzle generation.
///
/// Every field is optional in the file and falls back to its default.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BattlewordsConfig {
    /// Newline-delimited word list; the bundled list is used when absent.
    #[serde(default)]
    word_list: Option<PathBuf>,

    /// Minimum words per length before a bucket falls back to the bundled list.
    #[serde(default = "default_min_per_length")]
    min_per_length: usize,

    /// Grid side length, within `MIN_GRID_SIZE..=MAX_GRID_SIZE`.
    #[serde(default = "default_grid_size")]
    grid_size: usize,

    /// Whether words may share cells.
    #[serde(default)]
    overlap_policy: OverlapPolicy,

    /// Reject overlap layouts that spell unintended words.
    #[serde(default)]
    curation: bool,

    /// Placement attempts before giving up.
    #[serde(default = "default_max_attempts")]
    max_attempts: u32,
}

fn default_min_per_length() -> usize {
    DEFAULT_MIN_PER_LENGTH
}

fn default_grid_size() -> usize {
    GRID_SIZE
}

fn default_max_attempts() -> u32 {
    DEFAULT_MAX_ATTEMPTS
}

impl Default for BattlewordsConfig {
    fn default() -> Self {
        Self {
            word_list: None,
            min_per_length: default_min_per_length(),
            grid_size: default_grid_size(),
            overlap_policy: OverlapPolicy::default(),
            curation: false,
            max_attempts: default_max_attempts(),
        }
    }
}

impl BattlewordsConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` if given, otherwise returns defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !is_valid_grid_size(self.grid_size) {
            return Err(ConfigError::new(format!(
                "grid_size must be between {} and {}, got {}",
                MIN_GRID_SIZE, MAX_GRID_SIZE, self.grid_size
            )));
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::new("max_attempts must be positive".to_string()));
        }
        Ok(())
    }

    /// Replaces the word list path.
    pub fn with_word_list(mut self, path: PathBuf) -> Self {
        self.word_list = Some(path);
        self
    }

    /// Replaces the overlap policy.
    pub fn with_overlap_policy(mut self, policy: OverlapPolicy) -> Self {
        self.overlap_policy = policy;
        self
    }

    /// Replaces the curation toggle.
    pub fn with_curation(mut self, curation: bool) -> Self {
        self.curation = curation;
        self
    }

    /// Placement settings for one generation run.
    pub fn placement(&self, seed: Option<u64>) -> PlacementConfig {
        let config = PlacementConfig::default()
            .with_grid_size(self.grid_size)
            .with_overlap_policy(self.overlap_policy)
            .with_curation(self.curation)
            .with_max_attempts(self.max_attempts);
        match seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        assert_eq!(BattlewordsConfig::from_toml("").unwrap(), BattlewordsConfig::default());
    }

    #[test]
    fn test_partial_file() {
        let config = BattlewordsConfig::from_toml(
            "overlap_policy = \"overlap_allowed\"\ncuration = true\nmax_attempts = 50\n",
        )
        .unwrap();
        assert_eq!(*config.overlap_policy(), OverlapPolicy::OverlapAllowed);
        assert!(*config.curation());
        assert_eq!(*config.max_attempts(), 50);
        assert_eq!(*config.grid_size(), 12);
        assert_eq!(*config.min_per_length(), 500);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(BattlewordsConfig::from_toml("grid_size = 0").is_err());
        assert!(BattlewordsConfig::from_toml("grid_size = 5").is_err());
        assert!(BattlewordsConfig::from_toml("grid_size = 20000").is_err());
        assert!(BattlewordsConfig::from_toml("max_attempts = 0").is_err());
        assert!(BattlewordsConfig::from_toml("overlap_policy = \"diagonal\"").is_err());
        assert!(BattlewordsConfig::from_toml("colour = \"blue\"").is_err());
    }

    #[test]
    fn test_error_records_location() {
        let err = BattlewordsConfig::from_toml("grid_size = 0").unwrap_err();
        assert!(err.file.ends_with("config.rs"));
        assert!(
            err.to_string()
                .starts_with("Config error: grid_size must be between 6 and 64, got 0")
        );
    }

    #[test]
    fn test_grid_size_bounds_are_inclusive() {
        let small = BattlewordsConfig::from_toml("grid_size = 6").unwrap();
        assert_eq!(*small.grid_size(), MIN_GRID_SIZE);
        let large = BattlewordsConfig::from_toml("grid_size = 64").unwrap();
        assert_eq!(*large.grid_size(), MAX_GRID_SIZE);
    }

    #[test]
    fn test_placement_settings() {
        let config = BattlewordsConfig::default()
            .with_overlap_policy(OverlapPolicy::OverlapAllowed)
            .with_curation(true);
        let placement = config.placement(Some(9));
        assert_eq!(*placement.seed(), Some(9));
        assert_eq!(*placement.overlap_policy(), OverlapPolicy::OverlapAllowed);
        assert!(*placement.curation());
        assert_eq!(*config.placement(None).seed(), None);
    }
}
