//! Final-score tiers.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Lowest score earning [`ScoreTier::Good`].
pub const GOOD_THRESHOLD: u32 = 34;
/// Lowest score earning [`ScoreTier::Great`].
pub const GREAT_THRESHOLD: u32 = 38;
/// Lowest score earning [`ScoreTier::Fantastic`].
pub const FANTASTIC_THRESHOLD: u32 = 42;

/// Qualitative label for a final score.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum ScoreTier {
    /// Below 34.
    #[serde(rename = "None")]
    #[strum(to_string = "None")]
    Unranked,
    /// 34 to 37.
    Good,
    /// 38 to 41.
    Great,
    /// 42 and above.
    Fantastic,
}

impl ScoreTier {
    /// Tier for a score.
    #[instrument]
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= FANTASTIC_THRESHOLD => ScoreTier::Fantastic,
            s if s >= GREAT_THRESHOLD => ScoreTier::Great,
            s if s >= GOOD_THRESHOLD => ScoreTier::Good,
            _ => ScoreTier::Unranked,
        }
    }

    /// The display label.
    pub fn label(self) -> &'static str {
        match self {
            ScoreTier::Unranked => "None",
            ScoreTier::Good => "Good",
            ScoreTier::Great => "Great",
            ScoreTier::Fantastic => "Fantastic",
        }
    }
}

/// Tier for a score.
pub fn tier(score: u32) -> ScoreTier {
    ScoreTier::from_score(score)
}
