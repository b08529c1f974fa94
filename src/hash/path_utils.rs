// Path utilities for computing content-addressed file names

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Extension of a path's final component, leading dot included
///
/// Everything from the last `.` of the file name counts, so `.bashrc` keeps
/// `.bashrc`, `a.tar.gz` keeps `.gz` and `notes.` keeps `.`. Names without a
/// dot have no extension.
pub fn extension(path: &Path) -> Option<OsString> {
    let name = path.file_name()?;
    match name.to_str() {
        Some(name) => name.rfind('.').map(|idx| OsString::from(&name[idx..])),
        None => path.extension().map(|ext| {
            let mut dotted = OsString::from(".");
            dotted.push(ext);
            dotted
        }),
    }
}

/// Destination for a file whose content hashes to `hex_digest`
///
/// The new name is the digest plus the original extension, in the source's
/// own directory.
pub fn hashed_path(source: &Path, hex_digest: &str) -> PathBuf {
    let mut name = OsString::from(hex_digest);
    if let Some(ext) = extension(source) {
        name.push(ext);
    }
    match source.parent() {
        Some(dir) => dir.join(name),
        None => PathBuf::from(name),
    }
}

// Tests moved to tests/hash/path_utils_tests.rs
