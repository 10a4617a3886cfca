//! Tests for puzzle generation.

use battlewords::{
    BundledWordSource, ConsistentLettersInvariant, Coord, Direction, DisjointCellsInvariant,
    Invariant, InvariantSet, MAX_GRID_SIZE, OverlapPolicy, PlacementConfig, PlacementEngine,
    PlacementFailure, Puzzle, PuzzleInvariants, WordPool, daily_seed_from_iso,
};

const WORDS: [&str; 6] = ["GOLD", "RUBY", "STONE", "LUCKY", "PLANET", "DRAGON"];

fn seeded(policy: OverlapPolicy, seed: u64) -> PlacementEngine {
    PlacementEngine::new(
        PlacementConfig::default()
            .with_overlap_policy(policy)
            .with_seed(seed),
    )
}

#[test]
fn test_explicit_words_are_all_placed() {
    let puzzle = seeded(OverlapPolicy::Strict, 42).place_words(&WORDS).unwrap();
    for text in WORDS {
        let word = puzzle.word(text).expect("word should be placed");
        assert_eq!(word.cells().len(), text.len());
        assert!(word.in_bounds(12));
    }
    assert!(DisjointCellsInvariant::holds(&puzzle));
}

#[test]
fn test_lowercase_words_are_normalized() {
    let lower: Vec<String> = WORDS.iter().map(|w| w.to_lowercase()).collect();
    let a = seeded(OverlapPolicy::Strict, 3).place_words(&lower).unwrap();
    let b = seeded(OverlapPolicy::Strict, 3).place_words(&WORDS).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_determinism_across_policies() {
    for policy in [OverlapPolicy::Strict, OverlapPolicy::OverlapAllowed] {
        let a = seeded(policy, 2024).generate(BundledWordSource::pool()).unwrap();
        let b = seeded(policy, 2024).generate(BundledWordSource::pool()).unwrap();
        assert_eq!(a, b, "policy {}", policy);
    }
}

#[test]
fn test_radar_is_last_cell_of_each_word() {
    let puzzle = seeded(OverlapPolicy::OverlapAllowed, 8)
        .generate(BundledWordSource::pool())
        .unwrap();
    let expected: Vec<_> = puzzle.words().iter().map(|w| w.last_cell()).collect();
    assert_eq!(puzzle.radar(), expected.as_slice());
}

#[test]
fn test_every_generated_puzzle_is_valid() {
    for seed in 0..25 {
        let strict = seeded(OverlapPolicy::Strict, seed)
            .generate(BundledWordSource::pool())
            .unwrap();
        assert!(PuzzleInvariants::check_all(&strict).is_ok());
        assert!(DisjointCellsInvariant::holds(&strict));

        let overlap = seeded(OverlapPolicy::OverlapAllowed, seed)
            .generate(BundledWordSource::pool())
            .unwrap();
        assert!(PuzzleInvariants::check_all(&overlap).is_ok());
        assert!(ConsistentLettersInvariant::holds(&overlap));
    }
}

fn layout(puzzle: &Puzzle) -> Vec<(&str, Coord, Direction)> {
    puzzle
        .words()
        .iter()
        .map(|w| (w.text(), w.start(), w.direction()))
        .collect()
}

#[test]
fn test_seed_42_strict_layout_is_pinned() {
    let puzzle = seeded(OverlapPolicy::Strict, 42).place_words(&WORDS).unwrap();
    assert_eq!(
        layout(&puzzle),
        vec![
            ("PLANET", Coord::new(5, 5), Direction::Horizontal),
            ("DRAGON", Coord::new(3, 2), Direction::Horizontal),
            ("STONE", Coord::new(10, 6), Direction::Horizontal),
            ("LUCKY", Coord::new(4, 0), Direction::Horizontal),
            ("GOLD", Coord::new(11, 6), Direction::Horizontal),
            ("RUBY", Coord::new(2, 5), Direction::Horizontal),
        ]
    );
}

#[test]
fn test_daily_puzzle_is_pinned() {
    let seed = daily_seed_from_iso("2026-10-16").unwrap();
    let puzzle = seeded(OverlapPolicy::Strict, seed)
        .generate(BundledWordSource::pool())
        .unwrap();
    assert_eq!(
        layout(&puzzle),
        vec![
            ("THRIVE", Coord::new(5, 6), Direction::Horizontal),
            ("ORANGE", Coord::new(4, 0), Direction::Horizontal),
            ("SCALE", Coord::new(11, 5), Direction::Horizontal),
            ("CHAIR", Coord::new(6, 0), Direction::Vertical),
            ("BOAT", Coord::new(2, 8), Direction::Horizontal),
            ("FROG", Coord::new(1, 4), Direction::Horizontal),
        ]
    );
    assert_eq!(
        puzzle.radar(),
        &[
            Coord::new(5, 11),
            Coord::new(4, 5),
            Coord::new(11, 9),
            Coord::new(10, 0),
            Coord::new(2, 11),
            Coord::new(1, 7),
        ]
    );
}

#[test]
fn test_curation_exhaustion_reports_attempts() {
    let words = ["AAAA", "BAAA", "AAAAA", "BAAAA", "AAAAAA", "BAAAAA"];
    let config = PlacementConfig::default()
        .with_overlap_policy(OverlapPolicy::OverlapAllowed)
        .with_curation(true)
        .with_max_attempts(3)
        .with_seed(6);
    let err = PlacementEngine::new(config).place_words(&words).unwrap_err();
    assert_eq!(err.reason, PlacementFailure::Exhausted);
    assert_eq!(err.attempts_used, 3);
    assert!(err.to_string().contains("after 3 attempts"));
}

#[test]
fn test_grid_size_outside_range_is_rejected() {
    for grid_size in [4, MAX_GRID_SIZE + 1] {
        let config = PlacementConfig::default()
            .with_grid_size(grid_size)
            .with_max_attempts(7)
            .with_seed(0);
        let err = PlacementEngine::new(config).place_words(&WORDS).unwrap_err();
        assert_eq!(err.reason, PlacementFailure::InvalidGridSize { grid_size });
        assert_eq!(err.attempts_used, 0);
    }
}

#[test]
fn test_serialized_puzzle_round_trips_and_tampering_fails() {
    let puzzle = seeded(OverlapPolicy::Strict, 42).place_words(&WORDS).unwrap();
    let json = serde_json::to_value(&puzzle).unwrap();
    let back: Puzzle = serde_json::from_value(json.clone()).unwrap();
    assert_eq!(back, puzzle);

    let mut tampered = json;
    tampered["words"][0]["start"]["col"] = serde_json::json!(9);
    assert!(serde_json::from_value::<Puzzle>(tampered).is_err());
}

#[test]
fn test_pool_missing_a_length() {
    let pool = WordPool::from_words(["GOLD", "RUBY", "STONE", "LUCKY"]);
    let err = seeded(OverlapPolicy::Strict, 1).generate(&pool).unwrap_err();
    assert!(matches!(
        err.reason,
        PlacementFailure::NotEnoughWords { length: 6, found: 0 }
    ));
}
