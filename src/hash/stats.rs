// Run statistics shared by all rename workers

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Counters updated concurrently by workers
///
/// Workers only ever increment. The values are read after every worker has
/// been joined, and the join orders those reads after all increments.
#[derive(Debug, Default)]
pub struct RunStats {
    renamed: AtomicUsize,
    dry_run: AtomicUsize,
    skipped: AtomicUsize,
    failed: AtomicUsize,
}

impl RunStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_renamed(&self) {
        self.renamed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_dry_run(&self) {
        self.dry_run.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_skipped(&self) {
        self.skipped.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_failure(&self) {
        self.failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn failures(&self) -> usize {
        self.failed.load(Ordering::Relaxed)
    }

    /// Freeze the counters into a summary
    pub fn summary(&self, discovered: usize, elapsed: Duration) -> RunSummary {
        RunSummary {
            discovered,
            renamed: self.renamed.load(Ordering::Relaxed),
            dry_run: self.dry_run.load(Ordering::Relaxed),
            skipped: self.skipped.load(Ordering::Relaxed),
            failed: self.failed.load(Ordering::Relaxed),
            elapsed,
        }
    }
}

/// Totals for a finished run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub discovered: usize,
    pub renamed: usize,
    pub dry_run: usize,
    pub skipped: usize,
    pub failed: usize,
    pub elapsed: Duration,
}

impl RunSummary {
    /// A run succeeds only if no file failed
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// Files that reached a final outcome
    pub fn handled(&self) -> usize {
        self.renamed + self.dry_run + self.skipped + self.failed
    }
}

// Tests moved to tests/hash/stats_tests.rs
