// Hashed filename filter
// Recognizes files whose names already have the shape of a digest

use regex::Regex;
use std::path::Path;

use super::hash::HashAlgorithm;

/// Predicate over a file's base name
///
/// Matches names made of exactly `2 * digest_len` lowercase hex characters,
/// optionally followed by a dot and any extension. Only the shape is checked,
/// never whether the digest is right for the file's content.
#[derive(Debug, Clone)]
pub struct NameFilter {
    pattern: Option<Regex>,
}

impl NameFilter {
    /// Build a filter for digests of `digest_len` bytes
    pub fn new(digest_len: usize, enabled: bool) -> Self {
        let pattern = enabled.then(|| {
            Regex::new(&format!(r"^[0-9a-f]{{{}}}(\..*)?$", 2 * digest_len))
                .expect("hex filename pattern is always valid")
        });
        Self { pattern }
    }

    /// Build a filter sized for the given algorithm
    pub fn for_algorithm(algorithm: HashAlgorithm, enabled: bool) -> Self {
        Self::new(algorithm.digest_len(), enabled)
    }

    /// A filter that never matches
    pub fn disabled() -> Self {
        Self { pattern: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.pattern.is_some()
    }

    /// True if the file at `path` should be left alone
    pub fn is_hashed(&self, path: &Path) -> bool {
        let Some(pattern) = &self.pattern else {
            return false;
        };
        match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => pattern.is_match(name),
            // Non UTF-8 names can't be hex
            None => false,
        }
    }
}

// Tests moved to tests/hash/filter_tests.rs
