// Command-line arguments

use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "hashrename",
    version,
    about = "Rename files to the hash of their contents, keeping extensions"
)]
pub struct Args {
    /// Glob patterns selecting the files to rename
    #[arg(value_name = "GLOB", required_unless_present = "list_hashes")]
    pub globs: Vec<String>,

    /// Do not rename files, just print what renames would occur
    #[arg(
        long,
        alias = "dry_run",
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub dry_run: Option<bool>,

    /// Number of files to process at once (0 picks a value automatically)
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub concurrency: Option<i64>,

    /// Hash to use, e.g. sha1 or sha512_256 (see --list-hashes)
    #[arg(long, value_name = "NAME")]
    pub hash: Option<String>,

    /// Skip files whose names already look like a hash (the hash itself is not checked)
    #[arg(
        long,
        alias = "skip_hashed_filenames",
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub skip_hashed_filenames: Option<bool>,

    /// Print the supported hashes and exit
    #[arg(long)]
    pub list_hashes: bool,

    /// Settings file (defaults to hashrename/config.toml in the user config directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Only print failures and the summary
    #[arg(short, long)]
    pub quiet: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    pub log_level: String,
}
