// Worker pool module
// Fans a discovered file set out to a fixed number of rename workers over one shared channel

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;
use std::thread;
use std::time::Instant;

use crossbeam_channel::{unbounded, Receiver};
use tracing::{debug, error, info};

use super::error::HashRenameError;
use super::filter::NameFilter;
use super::hash::HashAlgorithm;
use super::sink::Reporter;
use super::stats::{RunStats, RunSummary};
use super::wildcard::FileSet;
use super::worker::{RenameOutcome, RenameWorker, DEFAULT_BUFFER_SIZE};

/// Settings shared read-only by every worker in a run
#[derive(Debug, Clone)]
pub struct RenameOptions {
    /// Number of workers, at least 1
    pub concurrency: usize,
    pub algorithm: HashAlgorithm,
    pub dry_run: bool,
    pub skip_hashed_filenames: bool,
    pub buffer_size: usize,
}

impl Default for RenameOptions {
    fn default() -> Self {
        Self {
            concurrency: num_cpus::get(),
            algorithm: HashAlgorithm::default(),
            dry_run: false,
            skip_hashed_filenames: true,
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

/// Fixed-size pool of rename workers
pub struct WorkerPool {
    options: RenameOptions,
    filter: NameFilter,
}

impl WorkerPool {
    pub fn new(mut options: RenameOptions) -> Self {
        options.concurrency = options.concurrency.max(1);
        let filter = NameFilter::for_algorithm(options.algorithm, options.skip_hashed_filenames);
        Self { options, filter }
    }

    pub fn concurrency(&self) -> usize {
        self.options.concurrency
    }

    /// Process every file in the set and wait for all workers to finish
    ///
    /// Per-file failures go to the reporter and the failure count; they never
    /// stop the run. A worker thread that dies counts as one failure, and any
    /// file left in the queue once every worker is gone is counted as
    /// abandoned. The only error returned is a worker thread that could not
    /// be started, in which case no file is dispatched.
    pub fn run(&self, files: FileSet, reporter: &dyn Reporter) -> Result<RunSummary, HashRenameError> {
        let start_time = Instant::now();
        let discovered = files.len();
        let stats = RunStats::new();
        reporter.discovered(discovered);

        let (sender, receiver) = unbounded::<PathBuf>();

        let spawn_result = thread::scope(|scope| {
            let mut handles = Vec::new();
            let mut spawn_error = None;

            for worker in 0..self.options.concurrency {
                let receiver = receiver.clone();
                let stats = &stats;
                let spawned = thread::Builder::new()
                    .name(format!("hashrename-worker-{}", worker))
                    .spawn_scoped(scope, move || self.work(worker, receiver, stats, reporter));
                match spawned {
                    Ok(handle) => handles.push((worker, handle)),
                    Err(source) => {
                        spawn_error = Some(HashRenameError::WorkerSpawn { worker, source });
                        break;
                    }
                }
            }

            // The dispatcher keeps its receiver, so sending never fails
            if spawn_error.is_none() {
                debug!(files = discovered, workers = handles.len(), "dispatching");
                for path in files {
                    let _ = sender.send(path);
                }
            }
            drop(sender);

            for (worker, handle) in handles {
                if handle.join().is_err() {
                    error!(worker, "rename worker exited abnormally");
                    stats.record_failure();
                }
            }

            for path in receiver.try_iter() {
                self.abandon(path, &stats, reporter);
            }

            spawn_error
        });

        if let Some(err) = spawn_result {
            return Err(err);
        }

        let summary = stats.summary(discovered, start_time.elapsed());
        info!(
            renamed = summary.renamed,
            dry_run = summary.dry_run,
            skipped = summary.skipped,
            failed = summary.failed,
            "run complete"
        );
        reporter.summary(&summary);
        Ok(summary)
    }

    /// Drain the channel until the dispatcher closes it
    ///
    /// Each file is counted exactly once: as its outcome when both the rename
    /// and the report succeed, otherwise as a failure.
    fn work(&self, worker: usize, receiver: Receiver<PathBuf>, stats: &RunStats, reporter: &dyn Reporter) {
        let mut renamer = RenameWorker::with_buffer_size(
            self.options.algorithm,
            &self.filter,
            self.options.dry_run,
            self.options.buffer_size,
        );

        for path in receiver {
            let handled = panic::catch_unwind(AssertUnwindSafe(|| -> Result<RenameOutcome, HashRenameError> {
                let outcome = renamer.process(&path)?;
                reporter.outcome(&outcome);
                Ok(outcome)
            }))
            .unwrap_or_else(|payload| {
                error!(worker, path = %path.display(), "panic while handling file");
                Err(HashRenameError::Panicked {
                    path: path.clone(),
                    message: panic_message(payload.as_ref()),
                })
            });

            match handled {
                Ok(RenameOutcome::Renamed { .. }) => stats.record_renamed(),
                Ok(RenameOutcome::DryRun { .. }) => stats.record_dry_run(),
                Ok(RenameOutcome::Skipped { .. }) => stats.record_skipped(),
                Err(err) => {
                    debug!(worker, path = %path.display(), error = %err, "file failed");
                    stats.record_failure();
                    let reported = panic::catch_unwind(AssertUnwindSafe(|| reporter.failure(&path, &err)));
                    if reported.is_err() {
                        error!(worker, path = %path.display(), "panic while reporting failure");
                    }
                }
            }
        }
    }

    fn abandon(&self, path: PathBuf, stats: &RunStats, reporter: &dyn Reporter) {
        stats.record_failure();
        reporter.failure(&path, &HashRenameError::Abandoned { path: path.clone() });
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
