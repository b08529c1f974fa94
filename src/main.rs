use anyhow::{bail, Result};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use hashrename::cli::Args;
use hashrename::config::{resolve_options, Settings};
use hashrename::hash::{rename_all, ConsoleReporter, HashRegistry};

fn main() -> Result<()> {
    let args = Args::parse();

    // RUST_LOG wins over --log-level
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)))
        .init();

    if args.list_hashes {
        for info in HashRegistry::list_algorithms() {
            let note = if info.cryptographic { "" } else { " (not collision resistant)" };
            println!("{:<12} {:>4} bits{}", info.name, info.output_bits, note);
        }
        return Ok(());
    }

    let settings = Settings::discover(args.config.as_deref())?;
    let options = resolve_options(&args, &settings)?;
    tracing::debug!(
        hash = %options.algorithm,
        concurrency = options.concurrency,
        dry_run = options.dry_run,
        skip_hashed_filenames = options.skip_hashed_filenames,
        "resolved options"
    );

    let reporter = ConsoleReporter::new().quiet(args.quiet);
    let summary = rename_all(&args.globs, options, &reporter)?;
    if !summary.is_success() {
        bail!("Encountered {} errors", summary.failed);
    }

    Ok(())
}
