// Centralized error handling module
// Configuration errors abort the run; per-file errors are counted and the batch continues

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Main error type for hashrename
/// Every per-file variant carries the path it failed on and the underlying I/O error
#[derive(Debug)]
pub enum HashRenameError {
    /// Configuration and validation errors
    Usage { message: String },
    InvalidPattern { pattern: String, reason: String },
    UnsupportedAlgorithm { algorithm: String },
    InvalidConcurrency { value: i64 },
    ConfigFile { path: PathBuf, reason: String },

    /// Per-file errors
    Open { path: PathBuf, source: io::Error },
    Read { path: PathBuf, source: io::Error },
    Close { path: PathBuf, source: io::Error },
    Rename { from: PathBuf, to: PathBuf, source: io::Error },
    Panicked { path: PathBuf, message: String },
    Abandoned { path: PathBuf },

    /// Worker pool errors
    WorkerSpawn { worker: usize, source: io::Error },
}

impl fmt::Display for HashRenameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            HashRenameError::Usage { message } => {
                write!(f, "{}\n", message)?;
                write!(f, "Suggestion: Run with --help to see usage information")
            }
            HashRenameError::InvalidPattern { pattern, reason } => {
                write!(f, "Bad glob {:?}: {}\n", pattern, reason)?;
                write!(f, "Suggestion: Quote the pattern and check its brackets")
            }
            HashRenameError::UnsupportedAlgorithm { algorithm } => {
                write!(f, "Unknown --hash value {:?}\n", algorithm)?;
                write!(f, "Suggestion: Use --list-hashes to see available algorithms")
            }
            HashRenameError::InvalidConcurrency { value } => {
                write!(f, "The --concurrency flag must be non-negative (got {})\n", value)?;
                write!(f, "Suggestion: Use 0 to pick a worker count automatically")
            }
            HashRenameError::ConfigFile { path, reason } => {
                write!(f, "Couldn't load config {}: {}\n", path.display(), reason)?;
                write!(f, "Suggestion: Check the TOML syntax or pass --config with another file")
            }

            HashRenameError::Open { source, .. } => write!(f, "couldn't open: {}", source),
            HashRenameError::Read { source, .. } => write!(f, "couldn't read: {}", source),
            HashRenameError::Close { source, .. } => write!(f, "couldn't close: {}", source),
            HashRenameError::Rename { to, source, .. } => {
                write!(f, "couldn't rename to {}: {}", to.display(), source)
            }
            HashRenameError::Panicked { message, .. } => write!(f, "worker panicked: {}", message),
            HashRenameError::Abandoned { .. } => write!(f, "no worker left to handle it"),

            HashRenameError::WorkerSpawn { worker, source } => {
                write!(f, "Couldn't start worker {}: {}", worker, source)
            }
        }
    }
}

impl std::error::Error for HashRenameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HashRenameError::Open { source, .. }
            | HashRenameError::Read { source, .. }
            | HashRenameError::Close { source, .. }
            | HashRenameError::Rename { source, .. }
            | HashRenameError::WorkerSpawn { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl HashRenameError {
    /// True for errors that fail a single file without stopping the batch
    pub fn is_per_file(&self) -> bool {
        matches!(
            self,
            HashRenameError::Open { .. }
                | HashRenameError::Read { .. }
                | HashRenameError::Close { .. }
                | HashRenameError::Rename { .. }
                | HashRenameError::Panicked { .. }
                | HashRenameError::Abandoned { .. }
        )
    }

    /// Path the error refers to: the failing file, or the settings file for `ConfigFile`
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            HashRenameError::Open { path, .. }
            | HashRenameError::Read { path, .. }
            | HashRenameError::Close { path, .. }
            | HashRenameError::Panicked { path, .. }
            | HashRenameError::Abandoned { path }
            | HashRenameError::ConfigFile { path, .. } => Some(path),
            HashRenameError::Rename { from, .. } => Some(from),
            _ => None,
        }
    }

    /// The underlying I/O error kind, if any
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        std::error::Error::source(self)
            .and_then(|e| e.downcast_ref::<io::Error>())
            .map(|e| e.kind())
    }
}
