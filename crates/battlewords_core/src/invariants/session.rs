//! Invariants of a game session between operations.

use super::Invariant;
use crate::session::GameSession;

/// Invariant: every cell of a guessed word is revealed.
pub struct GuessedRevealedInvariant;

impl Invariant<GameSession> for GuessedRevealedInvariant {
    fn holds(session: &GameSession) -> bool {
        session
            .puzzle()
            .words()
            .iter()
            .filter(|w| session.guessed_words().contains(w.text()))
            .all(|w| w.cells().iter().all(|c| session.revealed().contains(c)))
    }

    fn description() -> &'static str {
        "Every cell of a guessed word is revealed"
    }
}

/// Invariant: the score equals the sum of per-word points, one entry per
/// guessed word.
pub struct ScoreLedgerInvariant;

impl Invariant<GameSession> for ScoreLedgerInvariant {
    fn holds(session: &GameSession) -> bool {
        let ledger = session.points_by_word();
        ledger.values().sum::<u32>() == session.score()
            && ledger.len() == session.guessed_words().len()
            && ledger.keys().all(|w| session.guessed_words().contains(w))
    }

    fn description() -> &'static str {
        "Score equals the sum of points awarded per guessed word"
    }
}

/// Invariant: the session is finished exactly when a finish condition holds.
pub struct PhaseInvariant;

impl Invariant<GameSession> for PhaseInvariant {
    fn holds(session: &GameSession) -> bool {
        session.phase().finish_reason() == session.finish_condition()
    }

    fn description() -> &'static str {
        "Session is finished iff all words are guessed or all word cells revealed"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::Coord;
    use crate::invariants::{InvariantSet, SessionInvariants};
    use crate::session::test_support::sample_session;

    #[test]
    fn test_fresh_session_holds() {
        assert!(SessionInvariants::check_all(&sample_session()).is_ok());
    }

    #[test]
    fn test_holds_through_play() {
        let mut session = sample_session();
        session.reveal(Coord::new(4, 0)).unwrap();
        session.guess("ORANGE").unwrap();
        assert!(GuessedRevealedInvariant::holds(&session));
        assert!(ScoreLedgerInvariant::holds(&session));
        assert!(PhaseInvariant::holds(&session));

        session.reveal(Coord::new(9, 9)).unwrap();
        session.guess("BANANA").unwrap();
        assert!(SessionInvariants::check_all(&session).is_ok());
    }
}
