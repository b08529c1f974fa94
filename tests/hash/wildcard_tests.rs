// Tests for glob discovery

use hashrename::hash::wildcard::{contains_wildcard, discover, expand_pattern};
use hashrename::hash::HashRenameError;
use std::fs;
use std::path::Path;

fn touch(dir: &Path, name: &str) {
    fs::write(dir.join(name), name.as_bytes()).unwrap();
}

fn pattern(dir: &Path, glob: &str) -> String {
    dir.join(glob).to_string_lossy().to_string()
}

#[test]
fn test_overlapping_patterns_deduplicate() {
    let temp = tempfile::tempdir().unwrap();
    touch(temp.path(), "a.txt");
    touch(temp.path(), "b.txt");
    touch(temp.path(), "c.jpg");

    let patterns = vec![
        pattern(temp.path(), "*.txt"),
        pattern(temp.path(), "a.*"),
        pattern(temp.path(), "*"),
        pattern(temp.path(), "*.txt"),
    ];
    let files = discover(&patterns).unwrap();

    assert_eq!(files.len(), 3);
    assert!(files.contains(&temp.path().join("a.txt")));
    assert!(files.contains(&temp.path().join("b.txt")));
    assert!(files.contains(&temp.path().join("c.jpg")));
}

#[test]
fn test_literal_path_without_wildcard() {
    let temp = tempfile::tempdir().unwrap();
    touch(temp.path(), "plain");

    let found = expand_pattern(&pattern(temp.path(), "plain")).unwrap();
    assert_eq!(found, vec![temp.path().join("plain")]);

    let missing = expand_pattern(&pattern(temp.path(), "absent")).unwrap();
    assert!(missing.is_empty());
}

#[test]
fn test_no_matches_is_not_an_error() {
    let temp = tempfile::tempdir().unwrap();
    let files = discover(&[pattern(temp.path(), "*.nothing")]).unwrap();
    assert!(files.is_empty());
}

#[test]
fn test_star_does_not_cross_directories() {
    let temp = tempfile::tempdir().unwrap();
    fs::create_dir(temp.path().join("sub")).unwrap();
    touch(temp.path(), "top.txt");
    touch(&temp.path().join("sub"), "deep.txt");

    let files = discover(&[pattern(temp.path(), "*.txt")]).unwrap();
    assert_eq!(files.len(), 1);
    assert!(files.contains(&temp.path().join("top.txt")));
}

#[test]
fn test_dotfiles_are_matched() {
    let temp = tempfile::tempdir().unwrap();
    touch(temp.path(), ".hidden");

    let files = discover(&[pattern(temp.path(), "*")]).unwrap();
    assert!(files.contains(&temp.path().join(".hidden")));
}

#[test]
fn test_invalid_pattern_aborts_discovery() {
    let temp = tempfile::tempdir().unwrap();
    touch(temp.path(), "a.txt");

    let patterns = vec![pattern(temp.path(), "*.txt"), "[unclosed".to_string()];
    match discover(&patterns) {
        Err(HashRenameError::InvalidPattern { pattern, .. }) => assert_eq!(pattern, "[unclosed"),
        other => panic!("Expected InvalidPattern, got {:?}", other),
    }
}

#[test]
fn test_contains_wildcard() {
    assert!(contains_wildcard("*.txt"));
    assert!(contains_wildcard("file?.bin"));
    assert!(contains_wildcard("[abc].jpg"));
    assert!(!contains_wildcard("plain.txt"));
}
