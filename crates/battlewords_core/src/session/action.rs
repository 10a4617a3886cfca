//! First-class player actions and their results.
//!
//! Actions are domain events: they can be validated before application,
//! serialized for replay, and logged.

use crate::coord::Coord;
use serde::{Deserialize, Serialize};

/// A player action.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Expose one grid cell.
    Reveal(Coord),
    /// Submit a candidate word.
    Guess(String),
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Reveal(coord) => write!(f, "reveal {}", coord),
            Action::Guess(text) => write!(f, "guess {}", text),
        }
    }
}

/// The most recent event in a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum LastAction {
    /// Session created, nothing done yet.
    Started,
    /// A cell was revealed.
    Revealed {
        /// The cell.
        coord: Coord,
        /// Its letter, or `None` for an empty cell.
        letter: Option<char>,
    },
    /// A guess matched an unguessed word.
    Correct {
        /// The matched word.
        word: String,
        /// Points for the word's length.
        base: u32,
        /// Points for cells still hidden at guess time.
        bonus: u32,
        /// `base + bonus`.
        total: u32,
    },
    /// A guess matched nothing.
    Incorrect {
        /// The normalized guess text.
        guess: String,
    },
}

impl std::fmt::Display for LastAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LastAction::Started => write!(f, "reveal a cell to begin"),
            LastAction::Revealed {
                coord,
                letter: Some(letter),
            } => write!(f, "revealed letter {} at {}", letter, coord),
            LastAction::Revealed {
                coord,
                letter: None,
            } => write!(f, "revealed empty at {}", coord),
            LastAction::Correct {
                word,
                base,
                bonus,
                total,
            } => write!(
                f,
                "correct: {} for {} points ({} base + {} bonus)",
                word, total, base, bonus
            ),
            LastAction::Incorrect { guess } => write!(f, "{} is not in the puzzle", guess),
        }
    }
}

/// Result of a reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealOutcome {
    /// The cell.
    pub coord: Coord,
    /// Letter at the cell, or `None` if empty.
    pub revealed_letter: Option<char>,
    /// False when the cell was already revealed and nothing changed.
    pub newly_revealed: bool,
    /// Whether a guess is now permitted.
    pub can_guess: bool,
    /// Whether the session has ended.
    pub finished: bool,
}

/// Result of a guess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessOutcome {
    /// Whether the guess matched an unguessed word.
    pub correct: bool,
    /// Total points added to the score.
    pub points_awarded: u32,
    /// Length points (0 when incorrect).
    pub base: u32,
    /// Hidden-cell points (0 when incorrect).
    pub bonus: u32,
    /// The matched word.
    pub word: Option<String>,
    /// Whether the session has ended.
    pub finished: bool,
}
