//! Tests for word list loading.

use battlewords::{
    BattlewordsConfig, FileWordSource, PoolOrigin, WordListError, WordSource, load_pool,
    load_with_fallback,
};
use std::io::Write;

fn word_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_file_source_normalizes() {
    let file = word_file("# animals\nlion\n  Tiger \nzebra # striped\nox\nhorses\nLION\n");
    let pool = FileWordSource::new(file.path()).load_words(0).unwrap();
    assert_eq!(pool.words(4).collect::<Vec<_>>(), vec!["LION"]);
    assert_eq!(pool.words(5).collect::<Vec<_>>(), vec!["TIGER", "ZEBRA"]);
    assert_eq!(pool.words(6).collect::<Vec<_>>(), vec!["HORSES"]);
}

#[test]
fn test_file_source_enforces_minimum() {
    let file = word_file("lion\nbear\n");
    let err = FileWordSource::new(file.path()).load_words(2).unwrap_err();
    assert_eq!(
        err,
        WordListError::Insufficient {
            length: 5,
            found: 0,
            required: 2
        }
    );
}

#[test]
fn test_missing_file_falls_back_to_bundled() {
    let dir = tempfile::tempdir().unwrap();
    let source = FileWordSource::new(dir.path().join("missing.txt"));
    assert!(matches!(
        source.load_words(0),
        Err(WordListError::Unreadable { .. })
    ));
    let (pool, origin) = load_with_fallback(&source, 2);
    assert_eq!(origin, PoolOrigin::Bundled);
    assert!(pool.count(4) >= 2);
}

#[test]
fn test_deficient_bucket_is_replaced() {
    let file = word_file("bear\nlion\nwolf\ntiger\nzebra\nhyena\nbadger\nferret\nweasel\n");
    let (pool, origin) = load_with_fallback(&FileWordSource::new(file.path()), 3);
    assert_eq!(origin, PoolOrigin::Primary);
    assert!(pool.contains("badger"));

    let (pool, origin) = load_with_fallback(&FileWordSource::new(file.path()), 4);
    assert_eq!(origin, PoolOrigin::Bundled);
    assert!(!pool.contains("BADGER"));
}

#[test]
fn test_config_word_list() {
    let file = word_file("bear\nlion\ntiger\nzebra\nbadger\nferret\n");
    let config = BattlewordsConfig::default().with_word_list(file.path().to_path_buf());
    let (pool, origin) = load_pool(&config);
    // Default minimum of 500 replaces every bucket.
    assert_eq!(origin, PoolOrigin::Bundled);
    assert!(pool.count(6) >= 2);

    let (_, origin) = load_pool(&BattlewordsConfig::default());
    assert_eq!(origin, PoolOrigin::Bundled);
}
