//! The game session state machine.
//!
//! A session wraps one immutable [`Puzzle`] and owns everything that changes
//! during play: revealed cells, guessed words, score, and the phase that
//! gates guessing.
//!
//! ```text
//! AwaitingReveal --reveal--> AwaitingGuess --guess--> AwaitingReveal
//!        \                         |                        /
//!         `------------------> Finished <------------------'
//! ```
//!
//! A session finishes once all six words are guessed or once every word
//! cell is visible, whichever comes first.

mod action;
mod contracts;
mod error;
mod phase;
mod snapshot;

pub use action::{Action, GuessOutcome, LastAction, RevealOutcome};
pub use contracts::{
    CellInBounds, Contract, GuessContract, GuessLength, GuessPermitted, NotFinished,
    RevealContract,
};
pub use error::SessionError;
pub use phase::{FinishReason, SessionPhase};
pub use snapshot::{GameSummary, SessionSnapshot, WordScore};

use crate::coord::Coord;
use crate::puzzle::Puzzle;
use crate::tier::ScoreTier;
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, info, instrument};

/// A single player's game over one puzzle.
#[derive(Debug, Clone)]
pub struct GameSession {
    puzzle: Puzzle,
    letters: BTreeMap<Coord, char>,
    word_cells: BTreeSet<Coord>,
    revealed: BTreeSet<Coord>,
    guessed: BTreeSet<String>,
    points_by_word: BTreeMap<String, u32>,
    score: u32,
    phase: SessionPhase,
    last_action: LastAction,
    history: Vec<Action>,
}

impl GameSession {
    /// Starts a session: nothing revealed, nothing guessed, score 0.
    #[instrument(skip(puzzle), fields(words = puzzle.words().len()))]
    pub fn new(puzzle: Puzzle) -> Self {
        info!(radar = ?puzzle.radar(), "Starting game session");
        let letters = puzzle.letter_map();
        let word_cells = puzzle.word_cells();
        Self {
            puzzle,
            letters,
            word_cells,
            revealed: BTreeSet::new(),
            guessed: BTreeSet::new(),
            points_by_word: BTreeMap::new(),
            score: 0,
            phase: SessionPhase::AwaitingReveal,
            last_action: LastAction::Started,
            history: Vec::new(),
        }
    }

    /// Rebuilds a session by applying `actions` in order.
    #[instrument(skip(puzzle, actions), fields(actions = actions.len()))]
    pub fn replay(puzzle: Puzzle, actions: &[Action]) -> Result<Self, SessionError> {
        let mut session = Self::new(puzzle);
        for action in actions {
            session.apply(action)?;
        }
        Ok(session)
    }

    /// Applies one action, discarding its outcome.
    pub fn apply(&mut self, action: &Action) -> Result<(), SessionError> {
        match action {
            Action::Reveal(coord) => self.reveal(*coord).map(|_| ()),
            Action::Guess(text) => self.guess(text).map(|_| ()),
        }
    }

    /// Reveals one cell.
    ///
    /// Revealing an already-revealed cell returns the current state and
    /// changes nothing, including the guess gate.
    ///
    /// # Errors
    ///
    /// [`SessionError::SessionFinished`] after the game ends,
    /// [`SessionError::InvalidReveal`] for cells outside the grid.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn reveal(&mut self, coord: Coord) -> Result<RevealOutcome, SessionError> {
        RevealContract::pre(self, &coord)?;

        let letter = self.letters.get(&coord).copied();
        if self.revealed.contains(&coord) {
            debug!(%coord, "Cell already revealed");
            return Ok(self.reveal_outcome(coord, letter, false));
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.revealed.insert(coord);
        self.phase = SessionPhase::AwaitingGuess;
        self.last_action = LastAction::Revealed { coord, letter };
        self.history.push(Action::Reveal(coord));
        self.refresh_phase();
        debug!(%coord, ?letter, "Revealed cell");

        #[cfg(debug_assertions)]
        RevealContract::post(&before, self)?;

        Ok(self.reveal_outcome(coord, letter, true))
    }

    /// Guesses a word.
    ///
    /// The text is trimmed and matched case-insensitively against words not
    /// yet guessed. A correct guess scores the word's length plus one point
    /// per word cell still hidden, then reveals the whole word. Either way
    /// the guess privilege is consumed.
    ///
    /// # Errors
    ///
    /// [`SessionError::SessionFinished`] after the game ends,
    /// [`SessionError::GuessNotAllowed`] without a reveal since the last
    /// guess, [`SessionError::InvalidGuessLength`] unless 4-6 characters.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn guess(&mut self, text: &str) -> Result<GuessOutcome, SessionError> {
        let guess = text.trim().to_ascii_uppercase();
        GuessContract::pre(self, guess.as_str())?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let target = self
            .puzzle
            .words()
            .iter()
            .find(|w| w.text() == guess && !self.guessed.contains(w.text()))
            .cloned();

        let outcome = match target {
            Some(word) => {
                let base = word.len() as u32;
                let bonus = word
                    .cells()
                    .iter()
                    .filter(|c| !self.revealed.contains(c))
                    .count() as u32;
                let total = base + bonus;

                self.revealed.extend(word.cells().iter().copied());
                self.guessed.insert(word.text().to_string());
                self.points_by_word.insert(word.text().to_string(), total);
                self.score += total;
                self.last_action = LastAction::Correct {
                    word: word.text().to_string(),
                    base,
                    bonus,
                    total,
                };
                info!(word = word.text(), base, bonus, total, score = self.score, "Correct guess");

                GuessOutcome {
                    correct: true,
                    points_awarded: total,
                    base,
                    bonus,
                    word: Some(word.text().to_string()),
                    finished: false,
                }
            }
            None => {
                debug!(%guess, "Incorrect guess");
                self.last_action = LastAction::Incorrect {
                    guess: guess.clone(),
                };
                GuessOutcome {
                    correct: false,
                    points_awarded: 0,
                    base: 0,
                    bonus: 0,
                    word: None,
                    finished: false,
                }
            }
        };

        self.phase = SessionPhase::AwaitingReveal;
        self.history.push(Action::Guess(guess));
        self.refresh_phase();

        #[cfg(debug_assertions)]
        GuessContract::post(&before, self)?;

        Ok(GuessOutcome {
            finished: self.phase.is_finished(),
            ..outcome
        })
    }

    /// Which finish condition currently holds, if any.
    pub fn finish_condition(&self) -> Option<FinishReason> {
        if self.guessed.len() == self.puzzle.words().len() {
            Some(FinishReason::AllGuessed)
        } else if self.word_cells.is_subset(&self.revealed) {
            Some(FinishReason::AllRevealed)
        } else {
            None
        }
    }

    fn refresh_phase(&mut self) {
        if self.phase.is_finished() {
            return;
        }
        if let Some(reason) = self.finish_condition() {
            info!(%reason, score = self.score, tier = %ScoreTier::from_score(self.score), "Game finished");
            self.phase = SessionPhase::Finished(reason);
        }
    }

    fn reveal_outcome(&self, coord: Coord, letter: Option<char>, newly: bool) -> RevealOutcome {
        RevealOutcome {
            coord,
            revealed_letter: letter,
            newly_revealed: newly,
            can_guess: self.phase.can_guess(),
            finished: self.phase.is_finished(),
        }
    }

    /// The wrapped puzzle.
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Cells revealed so far, by reveals and correct guesses.
    pub fn revealed(&self) -> &BTreeSet<Coord> {
        &self.revealed
    }

    /// Returns true if the cell is visible.
    pub fn is_revealed(&self, coord: Coord) -> bool {
        self.revealed.contains(&coord)
    }

    /// Texts of correctly guessed words.
    pub fn guessed_words(&self) -> &BTreeSet<String> {
        &self.guessed
    }

    /// Points awarded per guessed word.
    pub fn points_by_word(&self) -> &BTreeMap<String, u32> {
        &self.points_by_word
    }

    /// Current score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Current phase.
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Whether a guess is permitted right now.
    pub fn can_guess(&self) -> bool {
        self.phase.can_guess()
    }

    /// Whether the session has ended.
    pub fn is_finished(&self) -> bool {
        self.phase.is_finished()
    }

    /// The most recent event.
    pub fn last_action(&self) -> &LastAction {
        &self.last_action
    }

    /// Accepted actions in order (no-op reveals excluded).
    pub fn history(&self) -> &[Action] {
        &self.history
    }

    /// End-of-game summary; `None` until the session finishes.
    #[instrument(skip(self))]
    pub fn summary(&self) -> Option<GameSummary> {
        let reason = self.phase.finish_reason()?;
        let words = self
            .puzzle
            .words()
            .iter()
            .map(|w| WordScore {
                word: w.text().to_string(),
                points: self.points_by_word.get(w.text()).copied().unwrap_or(0),
            })
            .collect();
        Some(GameSummary {
            score: self.score,
            tier: ScoreTier::from_score(self.score),
            reason,
            words,
        })
    }

    /// Serializable view of the current state.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::from(self)
    }

    /// The player's view of the grid: letters where revealed, `#` for a
    /// revealed empty cell, `.` for hidden cells.
    pub fn display_board(&self) -> String {
        let size = self.puzzle.grid_size();
        let mut out = String::with_capacity(size * (size * 2 + 1));
        for row in 0..size {
            for col in 0..size {
                if col > 0 {
                    out.push(' ');
                }
                let coord = Coord::new(row, col);
                let symbol = match (self.revealed.contains(&coord), self.letters.get(&coord)) {
                    (true, Some(&letter)) => letter,
                    (true, None) => '#',
                    (false, _) => '.',
                };
                out.push(symbol);
            }
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::GameSession;
    use crate::coord::{Coord, Direction};
    use crate::puzzle::Puzzle;
    use crate::word::PlacedWord;

    /// Disjoint six-word puzzle with words in fixed rows and columns.
    pub(crate) fn sample_puzzle() -> Puzzle {
        let w = |t: &str, r, c, d| PlacedWord::new(t, Coord::new(r, c), d).unwrap();
        Puzzle::new(
            vec![
                w("TREE", 0, 0, Direction::Horizontal),
                w("APPLE", 2, 0, Direction::Horizontal),
                w("ORANGE", 4, 0, Direction::Horizontal),
                w("WIND", 0, 6, Direction::Vertical),
                w("MOUSE", 0, 8, Direction::Vertical),
                w("PYTHON", 0, 10, Direction::Vertical),
            ],
            12,
        )
        .unwrap()
    }

    pub(crate) fn sample_session() -> GameSession {
        GameSession::new(sample_puzzle())
    }
}
