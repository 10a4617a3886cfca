//! Tests for the game session state machine.

use battlewords::{
    Coord, FinishReason, GameSession, LastAction, OverlapPolicy, PlacementConfig,
    PlacementEngine, Puzzle, ScoreTier, SessionError, SessionPhase,
};

fn puzzle() -> Puzzle {
    PlacementEngine::new(
        PlacementConfig::default()
            .with_overlap_policy(OverlapPolicy::Strict)
            .with_seed(42),
    )
    .place_words(&["GOLD", "RUBY", "STONE", "LUCKY", "PLANET", "DRAGON"])
    .unwrap()
}

/// A cell no word occupies.
fn empty_cell(puzzle: &Puzzle) -> Coord {
    (0..12)
        .flat_map(|r| (0..12).map(move |c| Coord::new(r, c)))
        .find(|c| puzzle.letter_at(*c).is_none())
        .unwrap()
}

#[test]
fn test_reveal_then_guess_gold() {
    let puzzle = puzzle();
    let gold = puzzle.word("GOLD").unwrap().clone();
    let mut session = GameSession::new(puzzle);

    let reveal = session.reveal(gold.start()).unwrap();
    assert_eq!(reveal.revealed_letter, Some('G'));
    assert!(reveal.can_guess);

    let guess = session.guess("GOLD").unwrap();
    assert!(guess.correct);
    assert_eq!(guess.base, 4);
    assert_eq!(guess.bonus, 3);
    assert_eq!(guess.points_awarded, 7);
    assert_eq!(session.score(), 7);
    assert!(!session.can_guess());
    assert!(gold.cells().iter().all(|c| session.is_revealed(*c)));
}

#[test]
fn test_guess_requires_reveal() {
    let mut session = GameSession::new(puzzle());
    assert_eq!(session.guess("GOLD"), Err(SessionError::GuessNotAllowed));
    assert_eq!(session.score(), 0);
}

#[test]
fn test_incorrect_guess_consumes_privilege() {
    let puzzle = puzzle();
    let cell = empty_cell(&puzzle);
    let mut session = GameSession::new(puzzle);
    session.reveal(cell).unwrap();

    let outcome = session.guess("HORSE").unwrap();
    assert!(!outcome.correct);
    assert_eq!(
        session.last_action(),
        &LastAction::Incorrect {
            guess: "HORSE".to_string()
        }
    );
    assert_eq!(session.guess("GOLD"), Err(SessionError::GuessNotAllowed));
}

#[test]
fn test_invalid_guess_length_keeps_privilege() {
    let puzzle = puzzle();
    let cell = empty_cell(&puzzle);
    let mut session = GameSession::new(puzzle);
    session.reveal(cell).unwrap();
    assert!(matches!(
        session.guess("GEM"),
        Err(SessionError::InvalidGuessLength { len: 3, .. })
    ));
    assert!(session.guess("GOLD").unwrap().correct);
}

#[test]
fn test_full_game_reaches_fantastic() {
    let puzzle = puzzle();
    let words: Vec<_> = puzzle.words().to_vec();
    let mut session = GameSession::new(puzzle);
    for word in &words {
        session.reveal(word.start()).unwrap();
        session.guess(&word.text().to_lowercase()).unwrap();
    }
    assert_eq!(
        session.phase(),
        SessionPhase::Finished(FinishReason::AllGuessed)
    );
    // Every word: length plus all but the revealed first cell.
    assert_eq!(session.score(), 2 * (7 + 9 + 11));
    let summary = session.summary().unwrap();
    assert_eq!(summary.tier, ScoreTier::Fantastic);
    assert_eq!(summary.tier.label(), "Fantastic");
    assert_eq!(
        session.reveal(Coord::new(0, 0)),
        Err(SessionError::SessionFinished)
    );
}

#[test]
fn test_snapshot_serializes() {
    let puzzle = puzzle();
    let gold = puzzle.word("GOLD").unwrap().start();
    let mut session = GameSession::new(puzzle);
    session.reveal(gold).unwrap();

    let json = serde_json::to_value(session.snapshot()).unwrap();
    assert_eq!(json["phase"], "awaiting_guess");
    assert_eq!(json["can_guess"], true);
    assert_eq!(json["last_action"]["kind"], "revealed");
    assert_eq!(json["last_action"]["letter"], "G");
    assert_eq!(json["grid_size"], 12);
    assert_eq!(json["radar"].as_array().unwrap().len(), 6);
    assert!(json.get("puzzle").is_none());
}
