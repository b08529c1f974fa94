// Per-file rename unit
// Hashes one file with the worker's own hash state and moves it to its content-addressed name

use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use tracing::debug;

use super::error::HashRenameError;
use super::filter::NameFilter;
use super::hash::{bytes_to_hex, HashAlgorithm, Hasher};
use super::path_utils;

/// Read buffer size per worker (1MB)
pub const DEFAULT_BUFFER_SIZE: usize = 1024 * 1024;

/// What happened to a file that did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    Renamed { from: PathBuf, to: PathBuf },
    DryRun { from: PathBuf, to: PathBuf },
    Skipped { path: PathBuf },
}

impl RenameOutcome {
    /// Where the file ends up (or would end up)
    pub fn destination(&self) -> Option<&Path> {
        match self {
            RenameOutcome::Renamed { to, .. } | RenameOutcome::DryRun { to, .. } => Some(to),
            RenameOutcome::Skipped { .. } => None,
        }
    }
}

/// Hashes and renames files one at a time
///
/// A worker owns its hash state and read buffer for its whole life; both are
/// reused for every file it processes.
pub struct RenameWorker<'a> {
    hasher: Box<dyn Hasher>,
    filter: &'a NameFilter,
    dry_run: bool,
    buffer: Vec<u8>,
}

impl<'a> RenameWorker<'a> {
    pub fn new(algorithm: HashAlgorithm, filter: &'a NameFilter, dry_run: bool) -> Self {
        Self::with_buffer_size(algorithm, filter, dry_run, DEFAULT_BUFFER_SIZE)
    }

    pub fn with_buffer_size(
        algorithm: HashAlgorithm,
        filter: &'a NameFilter,
        dry_run: bool,
        buffer_size: usize,
    ) -> Self {
        Self {
            hasher: algorithm.new_hasher(),
            filter,
            dry_run,
            buffer: vec![0u8; buffer_size.max(1)],
        }
    }

    /// Skip, hash and rename a single file
    ///
    /// The destination is the lowercase hex digest plus the original
    /// extension, in the same directory. An existing destination is never
    /// overwritten; that case fails with a `Rename` error of kind
    /// `AlreadyExists`. In dry-run mode the filesystem is left untouched.
    pub fn process(&mut self, path: &Path) -> Result<RenameOutcome, HashRenameError> {
        if self.filter.is_hashed(path) {
            debug!(path = %path.display(), "name already looks like a hash");
            return Ok(RenameOutcome::Skipped {
                path: path.to_path_buf(),
            });
        }

        let digest = self.hash_file(path)?;
        let to = path_utils::hashed_path(path, &digest);

        if to != path && fs::symlink_metadata(&to).is_ok() {
            return Err(HashRenameError::Rename {
                from: path.to_path_buf(),
                to,
                source: io::Error::new(io::ErrorKind::AlreadyExists, "destination already exists"),
            });
        }

        if self.dry_run {
            return Ok(RenameOutcome::DryRun {
                from: path.to_path_buf(),
                to,
            });
        }

        if to != path {
            fs::rename(path, &to).map_err(|source| HashRenameError::Rename {
                from: path.to_path_buf(),
                to: to.clone(),
                source,
            })?;
            debug!(from = %path.display(), to = %to.display(), "renamed");
        }

        Ok(RenameOutcome::Renamed {
            from: path.to_path_buf(),
            to,
        })
    }

    /// Hex digest of a file's full content
    pub fn hash_file(&mut self, path: &Path) -> Result<String, HashRenameError> {
        let mut file = File::open(path).map_err(|source| HashRenameError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        self.hasher.reset();
        if let Err(source) = self.stream(&mut file) {
            self.hasher.reset();
            return Err(HashRenameError::Read {
                path: path.to_path_buf(),
                source,
            });
        }

        if let Err(source) = close_file(file) {
            self.hasher.reset();
            return Err(HashRenameError::Close {
                path: path.to_path_buf(),
                source,
            });
        }

        Ok(bytes_to_hex(&self.hasher.finalize_reset()))
    }

    fn stream(&mut self, file: &mut File) -> io::Result<()> {
        loop {
            let bytes_read = match file.read(&mut self.buffer) {
                Ok(0) => return Ok(()),
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            self.hasher.update(&self.buffer[..bytes_read]);
        }
    }
}

/// Close a file and report the OS's verdict
#[cfg(unix)]
fn close_file(file: File) -> io::Result<()> {
    use std::os::unix::io::IntoRawFd;

    let fd = file.into_raw_fd();
    // SAFETY: `into_raw_fd` transferred ownership of `fd`; it is closed exactly once here.
    if unsafe { libc::close(fd) } == 0 {
        Ok(())
    } else {
        Err(io::Error::last_os_error())
    }
}

/// Dropping is the only way to close a file here, and it can't report errors
#[cfg(not(unix))]
fn close_file(file: File) -> io::Result<()> {
    drop(file);
    Ok(())
}
