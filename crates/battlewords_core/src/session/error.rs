//! Session usage errors.
//!
//! None of these mutate the session.

use crate::coord::Coord;

/// Error that can occur when applying a reveal or guess.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SessionError {
    /// Reveal target lies outside the grid.
    #[display("Cell {} is outside the {}x{} grid", coord, grid_size, grid_size)]
    InvalidReveal {
        /// Requested cell.
        coord: Coord,
        /// Grid side length.
        grid_size: usize,
    },

    /// Guess length is not 4, 5, or 6.
    #[display("Guess {:?} has length {}, expected 4-6", guess, len)]
    InvalidGuessLength {
        /// The guess text.
        guess: String,
        /// Its length in characters.
        len: usize,
    },

    /// No reveal since the last guess.
    #[display("Reveal a cell before guessing")]
    GuessNotAllowed,

    /// The session has ended.
    #[display("The game is already finished")]
    SessionFinished,

    /// A postcondition failed.
    #[display("Invariant violation: {}", description)]
    InvariantViolation {
        /// What failed.
        description: String,
    },
}
