// Output sink for rename progress
// Workers report through a shared `Reporter`; each call produces one whole line

use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

use super::error::HashRenameError;
use super::stats::RunSummary;
use super::worker::RenameOutcome;

/// Receives every per-file outcome and the final summary
///
/// Implementations are shared by all workers, so calls may arrive
/// concurrently and in any order.
pub trait Reporter: Sync {
    /// Called once with the size of the file set, before any worker starts
    fn discovered(&self, count: usize);

    /// Called for every file that was renamed, dry-run reported or skipped
    fn outcome(&self, outcome: &RenameOutcome);

    /// Called for every file that failed
    fn failure(&self, path: &Path, error: &HashRenameError);

    /// Called once after every worker has finished
    fn summary(&self, summary: &RunSummary);
}

pub fn render_discovered(count: usize) -> String {
    format!("Processing {} file(s)", count)
}

/// Renamed and dry-run files render identically
pub fn render_outcome(outcome: &RenameOutcome) -> String {
    match outcome {
        RenameOutcome::Renamed { from, to } | RenameOutcome::DryRun { from, to } => {
            format!("{} -> {}", from.display(), to.display())
        }
        RenameOutcome::Skipped { path } => {
            format!("Skipping {}: name already looks like a hash", path.display())
        }
    }
}

pub fn render_failure(path: &Path, error: &HashRenameError) -> String {
    format!("Couldn't handle {:?}: {}", path.display().to_string(), error)
}

pub fn render_summary(summary: &RunSummary) -> String {
    let renamed = if summary.dry_run > 0 {
        format!("{} would be renamed", summary.dry_run)
    } else {
        format!("{} renamed", summary.renamed)
    };
    format!(
        "{} of {} file(s) handled: {}, {} skipped, {} failed ({:.2}s)",
        summary.handled(),
        summary.discovered,
        renamed,
        summary.skipped,
        summary.failed,
        summary.elapsed.as_secs_f64(),
    )
}

/// Writes progress to stdout and failures to stderr
#[derive(Debug, Default)]
pub struct ConsoleReporter {
    quiet: bool,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suppress per-file success and skip lines; failures and the summary still print
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }
}

impl Reporter for ConsoleReporter {
    fn discovered(&self, count: usize) {
        let _ = writeln!(io::stdout().lock(), "{}", render_discovered(count));
    }

    fn outcome(&self, outcome: &RenameOutcome) {
        if !self.quiet {
            let _ = writeln!(io::stdout().lock(), "{}", render_outcome(outcome));
        }
    }

    fn failure(&self, path: &Path, error: &HashRenameError) {
        let _ = writeln!(io::stderr().lock(), "{}", render_failure(path, error));
    }

    fn summary(&self, summary: &RunSummary) {
        let _ = writeln!(io::stdout().lock(), "{}", render_summary(summary));
    }
}

/// Keeps every reported line in memory
#[derive(Debug, Default)]
pub struct RecordingReporter {
    lines: Mutex<Vec<String>>,
    outcomes: Mutex<Vec<RenameOutcome>>,
    failures: Mutex<Vec<String>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// All lines in the order they were reported
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn outcomes(&self) -> Vec<RenameOutcome> {
        self.outcomes.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Rendered failure lines
    pub fn failures(&self) -> Vec<String> {
        self.failures.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn push(&self, line: String) {
        self.lines.lock().unwrap_or_else(|e| e.into_inner()).push(line);
    }
}

impl Reporter for RecordingReporter {
    fn discovered(&self, count: usize) {
        self.push(render_discovered(count));
    }

    fn outcome(&self, outcome: &RenameOutcome) {
        self.push(render_outcome(outcome));
        self.outcomes
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(outcome.clone());
    }

    fn failure(&self, path: &Path, error: &HashRenameError) {
        let line = render_failure(path, error);
        self.push(line.clone());
        self.failures
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(line);
    }

    fn summary(&self, summary: &RunSummary) {
        self.push(render_summary(summary));
    }
}
