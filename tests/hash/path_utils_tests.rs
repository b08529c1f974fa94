// Tests for content-addressed path helpers

use hashrename::hash::path_utils::{extension, hashed_path};
use std::path::{Path, PathBuf};

#[test]
fn test_extension_variants() {
    assert_eq!(extension(Path::new("a.txt")), Some(".txt".into()));
    assert_eq!(extension(Path::new("dir.d/a.tar.gz")), Some(".gz".into()));
    assert_eq!(extension(Path::new(".bashrc")), Some(".bashrc".into()));
    assert_eq!(extension(Path::new("notes.")), Some(".".into()));
    assert_eq!(extension(Path::new("dir.d/plain")), None);
}

#[test]
fn test_hashed_path_keeps_directory() {
    assert_eq!(hashed_path(Path::new("a.txt"), "abcd"), PathBuf::from("abcd.txt"));
    assert_eq!(hashed_path(Path::new("x/y/b"), "abcd"), PathBuf::from("x/y/abcd"));
    assert_eq!(
        hashed_path(Path::new("/tmp/photo.JPG"), "00ff"),
        PathBuf::from("/tmp/00ff.JPG")
    );
}
