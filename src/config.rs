// Run configuration
// Layers command-line flags over an optional TOML settings file over built-in defaults

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::Args;
use crate::hash::{HashAlgorithm, HashRegistry, HashRenameError, RenameOptions};

pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Values read from the settings file; every key is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub hash: Option<String>,
    pub concurrency: Option<i64>,
    pub skip_hashed_filenames: Option<bool>,
    pub dry_run: Option<bool>,
}

impl Settings {
    /// `<config dir>/hashrename/config.toml`, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("hashrename").join(CONFIG_FILE_NAME))
    }

    pub fn from_toml_str(text: &str, path: &Path) -> Result<Self, HashRenameError> {
        toml::from_str(text).map_err(|e| HashRenameError::ConfigFile {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    pub fn load(path: &Path) -> Result<Self, HashRenameError> {
        let text = fs::read_to_string(path).map_err(|e| HashRenameError::ConfigFile {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::from_toml_str(&text, path)
    }

    /// Load an explicitly requested file, or the default one if it exists
    pub fn discover(explicit: Option<&Path>) -> Result<Self, HashRenameError> {
        match explicit {
            Some(path) => Self::load(path),
            None => match Self::default_path() {
                Some(path) if path.is_file() => Self::load(&path),
                _ => Ok(Self::default()),
            },
        }
    }
}

/// Turn a requested worker count into an actual one
///
/// 0 means one worker per available CPU; negative counts, and counts the
/// platform can't address, are rejected.
pub fn resolve_concurrency(requested: i64) -> Result<usize, HashRenameError> {
    match requested {
        n if n < 0 => Err(HashRenameError::InvalidConcurrency { value: n }),
        0 => Ok(num_cpus::get().max(1)),
        n => usize::try_from(n).map_err(|_| HashRenameError::InvalidConcurrency { value: n }),
    }
}

/// Merge flags and settings into the options for a run
pub fn resolve_options(args: &Args, settings: &Settings) -> Result<RenameOptions, HashRenameError> {
    let algorithm = match args.hash.as_deref().or(settings.hash.as_deref()) {
        Some(name) => HashRegistry::get(name)?,
        None => HashAlgorithm::default(),
    };
    let concurrency = resolve_concurrency(args.concurrency.or(settings.concurrency).unwrap_or(0))?;
    let skip_hashed_filenames = args
        .skip_hashed_filenames
        .or(settings.skip_hashed_filenames)
        .unwrap_or(true);
    let dry_run = args.dry_run.or(settings.dry_run).unwrap_or(false);

    Ok(RenameOptions {
        concurrency,
        algorithm,
        dry_run,
        skip_hashed_filenames,
        ..RenameOptions::default()
    })
}

// Tests moved to tests/hash/config_tests.rs
