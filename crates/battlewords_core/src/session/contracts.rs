//! Contract-based validation for session operations.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}
//!
//! Preconditions run on every call and reject without mutating.
//! Postconditions compare the session before and after an operation and run
//! in debug builds only.

use super::GameSession;
use super::error::SessionError;
use crate::coord::Coord;
use crate::invariants::{InvariantSet, SessionInvariants};
use crate::word::is_valid_length;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// Preconditions and postconditions for a state transition.
///
/// - Precondition: {P(state, action)} must hold before applying the action
/// - Postcondition: {Q(before, after)} must hold after applying the action
pub trait Contract<S, A: ?Sized> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), SessionError>;

    /// Checks postconditions after applying the action.
    ///
    /// This verifies that the transition maintained the session invariants.
    fn post(before: &S, after: &S) -> Result<(), SessionError>;
}

// ─────────────────────────────────────────────────────────────
//  Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the session has not finished.
pub struct NotFinished;

impl NotFinished {
    /// Validates the precondition.
    #[instrument(skip(session))]
    pub fn check(session: &GameSession) -> Result<(), SessionError> {
        if session.phase().is_finished() {
            Err(SessionError::SessionFinished)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the cell lies inside the grid.
pub struct CellInBounds;

impl CellInBounds {
    /// Validates the precondition.
    #[instrument(skip(session))]
    pub fn check(coord: Coord, session: &GameSession) -> Result<(), SessionError> {
        let grid_size = session.puzzle().grid_size();
        if coord.in_bounds(grid_size) {
            Ok(())
        } else {
            Err(SessionError::InvalidReveal { coord, grid_size })
        }
    }
}

/// Precondition: a reveal happened since the last guess.
pub struct GuessPermitted;

impl GuessPermitted {
    /// Validates the precondition.
    #[instrument(skip(session))]
    pub fn check(session: &GameSession) -> Result<(), SessionError> {
        if session.phase().can_guess() {
            Ok(())
        } else {
            Err(SessionError::GuessNotAllowed)
        }
    }
}

/// Precondition: the guess has 4-6 characters.
pub struct GuessLength;

impl GuessLength {
    /// Validates the precondition.
    #[instrument]
    pub fn check(guess: &str) -> Result<(), SessionError> {
        let len = guess.chars().count();
        if is_valid_length(len) {
            Ok(())
        } else {
            Err(SessionError::InvalidGuessLength {
                guess: guess.to_string(),
                len,
            })
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Postconditions
// ─────────────────────────────────────────────────────────────

/// Postcondition shared by both operations.
///
/// - Session invariants hold afterwards
/// - Score never decreases
/// - Revealed cells and guessed words only grow
fn monotonic_post(before: &GameSession, after: &GameSession) -> Result<(), SessionError> {
    SessionInvariants::check_all(after).map_err(|violations| {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        warn!(%descriptions, "Session postcondition failed");
        SessionError::InvariantViolation {
            description: format!("Postcondition failed: {}", descriptions),
        }
    })?;

    if after.score() < before.score()
        || !before.revealed().is_subset(after.revealed())
        || !before.guessed_words().is_subset(after.guessed_words())
    {
        warn!(
            before = before.score(),
            after = after.score(),
            "Session monotonicity violated"
        );
        return Err(SessionError::InvariantViolation {
            description: "Session state regressed".to_string(),
        });
    }
    Ok(())
}

// ─────────────────────────────────────────────────────────────
//  Reveal Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for reveals: `{P} reveal(coord) {Q}`.
///
/// P:
/// - Session not finished
/// - Cell inside the grid
///
/// Q:
/// - Session invariants hold and state only grows
/// - Exactly one new cell revealed
///
/// Re-revealing a cell returns early and skips the postcondition.
pub struct RevealContract;

impl Contract<GameSession, Coord> for RevealContract {
    #[instrument(skip(session))]
    fn pre(session: &GameSession, coord: &Coord) -> Result<(), SessionError> {
        NotFinished::check(session)?;
        CellInBounds::check(*coord, session)?;
        Ok(())
    }

    fn post(before: &GameSession, after: &GameSession) -> Result<(), SessionError> {
        monotonic_post(before, after)?;
        if after.revealed().len() != before.revealed().len() + 1 {
            return Err(SessionError::InvariantViolation {
                description: "Reveal must expose exactly one cell".to_string(),
            });
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Guess Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for guesses: `{P} guess(text) {Q}`.
///
/// P:
/// - Session not finished
/// - A reveal happened since the last guess
/// - Guess has 4-6 characters
///
/// Q:
/// - Session invariants hold and state only grows
/// - The guess privilege is consumed
pub struct GuessContract;

impl Contract<GameSession, str> for GuessContract {
    #[instrument(skip(session))]
    fn pre(session: &GameSession, guess: &str) -> Result<(), SessionError> {
        NotFinished::check(session)?;
        GuessPermitted::check(session)?;
        GuessLength::check(guess)?;
        Ok(())
    }

    fn post(before: &GameSession, after: &GameSession) -> Result<(), SessionError> {
        monotonic_post(before, after)?;
        if after.phase().can_guess() {
            return Err(SessionError::InvariantViolation {
                description: "Guess must consume the guess privilege".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::test_support::sample_session;

    #[test]
    fn test_guess_blocked_before_reveal() {
        let session = sample_session();
        assert_eq!(
            GuessContract::pre(&session, "TREE"),
            Err(SessionError::GuessNotAllowed)
        );
    }

    #[test]
    fn test_reveal_out_of_bounds() {
        let session = sample_session();
        assert!(matches!(
            RevealContract::pre(&session, &Coord::new(12, 0)),
            Err(SessionError::InvalidReveal { .. })
        ));
        assert!(RevealContract::pre(&session, &Coord::new(11, 11)).is_ok());
    }

    #[test]
    fn test_guess_length_checked_after_gate() {
        let mut session = sample_session();
        session.reveal(Coord::new(0, 0)).unwrap();
        assert!(matches!(
            GuessContract::pre(&session, "CAT"),
            Err(SessionError::InvalidGuessLength { len: 3, .. })
        ));
        assert!(GuessContract::pre(&session, "TREE").is_ok());
    }

    #[test]
    fn test_post_holds_after_reveal() {
        let before = sample_session();
        let mut after = before.clone();
        after.reveal(Coord::new(5, 5)).unwrap();
        assert!(RevealContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_post_detects_regression() {
        let mut before = sample_session();
        before.reveal(Coord::new(0, 0)).unwrap();
        before.guess("TREE").unwrap();
        let after = sample_session();
        assert!(GuessContract::post(&before, &after).is_err());
    }

    #[test]
    fn test_reveal_post_requires_one_new_cell() {
        let mut before = sample_session();
        before.reveal(Coord::new(5, 5)).unwrap();
        let after = before.clone();
        assert!(matches!(
            RevealContract::post(&before, &after),
            Err(SessionError::InvariantViolation { .. })
        ));
    }

    #[test]
    fn test_guess_post_requires_privilege_consumed() {
        let mut before = sample_session();
        before.reveal(Coord::new(5, 5)).unwrap();
        let after = before.clone();
        assert!(matches!(
            GuessContract::post(&before, &after),
            Err(SessionError::InvariantViolation { .. })
        ));
    }
}
