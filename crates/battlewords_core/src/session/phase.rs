//! Session phases.
//!
//! The guess gate and the finished flag live in one enum, so a finished
//! session that still accepts guesses cannot be represented.

use serde::{Deserialize, Serialize};

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FinishReason {
    /// Every word was guessed.
    AllGuessed,
    /// Every word cell became visible, by reveals and guesses combined.
    AllRevealed,
}

/// Where a session is in its reveal/guess cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    /// A cell must be revealed before the next guess.
    AwaitingReveal,
    /// One guess may be submitted.
    AwaitingGuess,
    /// Terminal; no further reveals or guesses.
    Finished(FinishReason),
}

impl SessionPhase {
    /// Returns true if a guess is currently permitted.
    pub fn can_guess(self) -> bool {
        matches!(self, SessionPhase::AwaitingGuess)
    }

    /// Returns true once the session is over.
    pub fn is_finished(self) -> bool {
        matches!(self, SessionPhase::Finished(_))
    }

    /// The finish reason, if finished.
    pub fn finish_reason(self) -> Option<FinishReason> {
        match self {
            SessionPhase::Finished(reason) => Some(reason),
            _ => None,
        }
    }
}

impl std::fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionPhase::AwaitingReveal => write!(f, "awaiting reveal"),
            SessionPhase::AwaitingGuess => write!(f, "awaiting guess"),
            SessionPhase::Finished(reason) => write!(f, "finished ({})", reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags() {
        assert!(!SessionPhase::AwaitingReveal.can_guess());
        assert!(SessionPhase::AwaitingGuess.can_guess());
        let done = SessionPhase::Finished(FinishReason::AllRevealed);
        assert!(!done.can_guess());
        assert!(done.is_finished());
        assert_eq!(done.finish_reason(), Some(FinishReason::AllRevealed));
        assert_eq!(done.to_string(), "finished (all_revealed)");
    }
}
