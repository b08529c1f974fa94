// Tests for the per-file rename worker

use hashrename::hash::{HashAlgorithm, HashRenameError, NameFilter, RenameOutcome, RenameWorker};
use std::fs;
use std::io;

const HELLO_SHA1: &str = "aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d";
const HELLO_SHA512_256: &str = "e30d87cfa2a75db545eac4d61baf970366a8357c7f72fa95b52d0accb698f13a";

#[test]
fn test_rename_keeps_extension() {
    let temp = tempfile::tempdir().unwrap();
    let source = temp.path().join("greeting.txt");
    fs::write(&source, b"hello").unwrap();

    let filter = NameFilter::disabled();
    let mut worker = RenameWorker::new(HashAlgorithm::Sha1, &filter, false);
    let outcome = worker.process(&source).unwrap();

    let expected = temp.path().join(format!("{}.txt", HELLO_SHA1));
    assert_eq!(
        outcome,
        RenameOutcome::Renamed {
            from: source.clone(),
            to: expected.clone()
        }
    );
    assert!(!source.exists());
    assert_eq!(fs::read(&expected).unwrap(), b"hello");
}

#[test]
fn test_rename_without_extension() {
    let temp = tempfile::tempdir().unwrap();
    let source = temp.path().join("b");
    fs::write(&source, b"hello").unwrap();

    let filter = NameFilter::disabled();
    let mut worker = RenameWorker::new(HashAlgorithm::Sha512_256, &filter, false);
    let outcome = worker.process(&source).unwrap();

    assert_eq!(outcome.destination(), Some(temp.path().join(HELLO_SHA512_256).as_path()));
    assert!(temp.path().join(HELLO_SHA512_256).exists());
}

#[test]
fn test_dry_run_leaves_file_alone() {
    let temp = tempfile::tempdir().unwrap();
    let source = temp.path().join("keep.me");
    fs::write(&source, b"hello").unwrap();

    let filter = NameFilter::disabled();
    let mut worker = RenameWorker::new(HashAlgorithm::Sha1, &filter, true);
    let outcome = worker.process(&source).unwrap();

    assert_eq!(
        outcome,
        RenameOutcome::DryRun {
            from: source.clone(),
            to: temp.path().join(format!("{}.me", HELLO_SHA1))
        }
    );
    assert!(source.exists());
    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 1);
}

#[test]
fn test_hash_shaped_name_is_skipped_even_if_wrong() {
    let temp = tempfile::tempdir().unwrap();
    // Right shape for SHA-1, wrong digest for the content
    let name = format!("{}.jpg", "0".repeat(40));
    let source = temp.path().join(&name);
    fs::write(&source, b"not zeros").unwrap();

    let filter = NameFilter::for_algorithm(HashAlgorithm::Sha1, true);
    let mut worker = RenameWorker::new(HashAlgorithm::Sha1, &filter, false);
    let outcome = worker.process(&source).unwrap();

    assert_eq!(outcome, RenameOutcome::Skipped { path: source.clone() });
    assert!(source.exists());
}

#[test]
fn test_filter_length_follows_algorithm() {
    let temp = tempfile::tempdir().unwrap();
    // A SHA-1 shaped name is not skipped when hashing with a 256-bit algorithm
    let source = temp.path().join(HELLO_SHA1);
    fs::write(&source, b"hello").unwrap();

    let filter = NameFilter::for_algorithm(HashAlgorithm::Sha512_256, true);
    let mut worker = RenameWorker::new(HashAlgorithm::Sha512_256, &filter, false);
    let outcome = worker.process(&source).unwrap();

    assert!(matches!(outcome, RenameOutcome::Renamed { .. }));
    assert!(temp.path().join(HELLO_SHA512_256).exists());
}

#[test]
fn test_missing_file_is_open_error() {
    let temp = tempfile::tempdir().unwrap();
    let source = temp.path().join("vanished.txt");

    let filter = NameFilter::disabled();
    let mut worker = RenameWorker::new(HashAlgorithm::Sha1, &filter, false);
    let err = worker.process(&source).unwrap_err();

    assert!(matches!(err, HashRenameError::Open { .. }));
    assert_eq!(err.io_kind(), Some(io::ErrorKind::NotFound));
    assert!(err.is_per_file());
}

#[cfg(unix)]
#[test]
fn test_directory_is_read_error() {
    let temp = tempfile::tempdir().unwrap();
    let dir = temp.path().join("folder.d");
    fs::create_dir(&dir).unwrap();

    let filter = NameFilter::disabled();
    let mut worker = RenameWorker::new(HashAlgorithm::Sha1, &filter, false);
    let err = worker.process(&dir).unwrap_err();

    assert!(matches!(err, HashRenameError::Read { .. }));
    assert!(dir.is_dir());
}

#[test]
fn test_existing_destination_is_not_overwritten() {
    let temp = tempfile::tempdir().unwrap();
    let first = temp.path().join("one.txt");
    let second = temp.path().join("two.txt");
    fs::write(&first, b"hello").unwrap();
    fs::write(&second, b"hello").unwrap();

    let filter = NameFilter::disabled();
    let mut worker = RenameWorker::new(HashAlgorithm::Sha1, &filter, false);
    worker.process(&first).unwrap();
    let err = worker.process(&second).unwrap_err();

    assert!(matches!(err, HashRenameError::Rename { .. }));
    assert_eq!(err.io_kind(), Some(io::ErrorKind::AlreadyExists));
    assert!(second.exists());
}

#[test]
fn test_already_correct_name_is_left_in_place() {
    let temp = tempfile::tempdir().unwrap();
    let source = temp.path().join(format!("{}.txt", HELLO_SHA1));
    fs::write(&source, b"hello").unwrap();

    let filter = NameFilter::disabled();
    let mut worker = RenameWorker::new(HashAlgorithm::Sha1, &filter, false);
    let outcome = worker.process(&source).unwrap();

    assert_eq!(outcome.destination(), Some(source.as_path()));
    assert!(source.exists());
}

#[test]
fn test_worker_reuses_state_across_files() {
    let temp = tempfile::tempdir().unwrap();
    let big = temp.path().join("big.bin");
    let small = temp.path().join("small.bin");
    fs::write(&big, vec![7u8; 100_000]).unwrap();
    fs::write(&small, b"hello").unwrap();

    let filter = NameFilter::disabled();
    // Tiny buffer forces many reads per file
    let mut worker = RenameWorker::with_buffer_size(HashAlgorithm::Sha1, &filter, true, 7);
    worker.hash_file(&big).unwrap();
    assert_eq!(worker.hash_file(&small).unwrap(), HELLO_SHA1);
    assert_eq!(worker.hash_file(&small).unwrap(), HELLO_SHA1);
}

#[test]
fn test_failed_file_does_not_poison_next() {
    let temp = tempfile::tempdir().unwrap();
    let good = temp.path().join("good");
    fs::write(&good, b"hello").unwrap();

    let filter = NameFilter::disabled();
    let mut worker = RenameWorker::new(HashAlgorithm::Sha1, &filter, true);
    assert!(worker.process(&temp.path().join("missing")).is_err());
    assert_eq!(worker.hash_file(&good).unwrap(), HELLO_SHA1);
}
