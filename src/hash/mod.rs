// Content-addressed renaming core
// Discovery, hashing, per-file renaming and the worker pool that ties them together

pub mod error;
pub mod filter;
pub mod hash;
pub mod path_utils;
pub mod pool;
pub mod sink;
pub mod stats;
pub mod wildcard;
pub mod worker;

// Re-export commonly used types for convenience
pub use error::HashRenameError;
pub use filter::NameFilter;
pub use hash::{AlgorithmInfo, HashAlgorithm, HashRegistry, Hasher};
pub use pool::{RenameOptions, WorkerPool};
pub use sink::{ConsoleReporter, RecordingReporter, Reporter};
pub use stats::{RunStats, RunSummary};
pub use wildcard::{discover, FileSet};
pub use worker::{RenameOutcome, RenameWorker};

/// Discover the files matching `patterns` and rename them all
///
/// Discovery finishes before the first file is dispatched, so a file renamed
/// during the run is never picked up a second time under its new name. An
/// invalid pattern aborts before any file is touched.
pub fn rename_all(
    patterns: &[String],
    options: RenameOptions,
    reporter: &dyn Reporter,
) -> Result<RunSummary, HashRenameError> {
    if patterns.is_empty() {
        return Err(HashRenameError::Usage {
            message: "At least one glob pattern is required".to_string(),
        });
    }
    let files = discover(patterns)?;
    WorkerPool::new(options).run(files, reporter)
}
