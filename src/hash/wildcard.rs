// Wildcard pattern expansion module
// Builds the set of files to rename before any worker touches the filesystem

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use glob::MatchOptions;
use tracing::{debug, warn};

use super::error::HashRenameError;

/// Deduplicated set of paths matched by one or more patterns
///
/// Paths are compared as given, without canonicalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSet {
    paths: BTreeSet<PathBuf>,
}

impl FileSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a path, returning false if it was already present
    pub fn insert(&mut self, path: PathBuf) -> bool {
        self.paths.insert(path)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.paths.contains(path)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter().map(PathBuf::as_path)
    }
}

impl FromIterator<PathBuf> for FileSet {
    fn from_iter<I: IntoIterator<Item = PathBuf>>(iter: I) -> Self {
        Self {
            paths: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for FileSet {
    type Item = PathBuf;
    type IntoIter = std::collections::btree_set::IntoIter<PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.into_iter()
    }
}

/// Shell-style matching: `*` stays within one path component and
/// dotfiles are matched like any other name
fn match_options() -> MatchOptions {
    MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: false,
    }
}

/// Expand a wildcard pattern into the paths it matches
///
/// Supports patterns like:
/// - `*.txt` - matches all .txt files in current directory
/// - `file?.bin` - matches file1.bin, fileA.bin, etc.
/// - `[abc]*.jpg` - matches files starting with a, b, or c
/// - `data/*/photos/*` - matches files one directory level down
///
/// A pattern without wildcards yields the path itself if it exists. A
/// pattern matching nothing yields an empty list. Entries that can't be
/// read while expanding are skipped with a warning.
///
/// # Errors
/// Returns `InvalidPattern` if the pattern is syntactically invalid
pub fn expand_pattern(pattern: &str) -> Result<Vec<PathBuf>, HashRenameError> {
    let paths = glob::glob_with(pattern, match_options()).map_err(|e| {
        HashRenameError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        }
    })?;

    let mut matches = Vec::new();
    for entry in paths {
        match entry {
            Ok(path) => matches.push(path),
            Err(e) => warn!(pattern, path = %e.path().display(), error = %e.error(), "skipping unreadable glob entry"),
        }
    }

    Ok(matches)
}

/// Expand every pattern and union the matches
///
/// All patterns are validated before the result is returned, so an invalid
/// pattern anywhere in the list means no file set at all.
pub fn discover(patterns: &[String]) -> Result<FileSet, HashRenameError> {
    let mut files = FileSet::new();

    for pattern in patterns {
        let matches = expand_pattern(pattern)?;
        if matches.is_empty() {
            if contains_wildcard(pattern) {
                warn!(pattern = pattern.as_str(), "pattern matched no files");
            } else {
                warn!(path = pattern.as_str(), "no such file");
            }
        }
        let before = files.len();
        for path in matches {
            files.insert(path);
        }
        debug!(pattern = pattern.as_str(), new = files.len() - before, "expanded pattern");
    }

    Ok(files)
}

/// Check if a string contains wildcard characters
pub fn contains_wildcard(s: &str) -> bool {
    s.contains('*') || s.contains('?') || s.contains('[')
}
