//! Serializable views of a session.

use super::{GameSession, LastAction, SessionPhase};
use super::phase::FinishReason;
use crate::coord::Coord;
use crate::tier::ScoreTier;
use serde::{Deserialize, Serialize};

/// Points earned by one word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordScore {
    /// Word text.
    pub word: String,
    /// Points awarded, 0 if never guessed.
    pub points: u32,
}

/// End-of-game summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    /// Final score.
    pub score: u32,
    /// Tier for the final score.
    pub tier: ScoreTier,
    /// How the game ended.
    pub reason: FinishReason,
    /// Per-word points in puzzle order.
    pub words: Vec<WordScore>,
}

/// Point-in-time copy of a session's observable state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Grid side length.
    pub grid_size: usize,
    /// Last cell of each word in puzzle order.
    pub radar: Vec<Coord>,
    /// Revealed cells in row-major order.
    pub revealed: Vec<Coord>,
    /// Guessed words in alphabetical order.
    pub guessed: Vec<String>,
    /// Current score.
    pub score: u32,
    /// Current phase.
    pub phase: SessionPhase,
    /// Whether a guess is permitted.
    pub can_guess: bool,
    /// Most recent event.
    pub last_action: LastAction,
    /// Most recent event as display text.
    pub last_action_text: String,
}

impl From<&GameSession> for SessionSnapshot {
    fn from(session: &GameSession) -> Self {
        Self {
            grid_size: session.puzzle().grid_size(),
            radar: session.puzzle().radar().to_vec(),
            revealed: session.revealed().iter().copied().collect(),
            guessed: session.guessed_words().iter().cloned().collect(),
            score: session.score(),
            phase: session.phase(),
            can_guess: session.can_guess(),
            last_action: session.last_action().clone(),
            last_action_text: session.last_action().to_string(),
        }
    }
}
