// crates/truncate_at_marker/src/main.rs

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use truncate_at_marker::{TruncateConfig, SUBSCRIPTIONS_MARKER, SUBSCRIPTIONS_PAGE_PATH};

/// Truncates a file right after the first occurrence of a marker line.
#[derive(Parser, Debug)]
#[command(name = "truncate_at_marker", version)]
struct Cli {
    /// File to truncate in place
    #[arg(short, long, value_name = "PATH", default_value = SUBSCRIPTIONS_PAGE_PATH)]
    file: PathBuf,

    /// Text whose first occurrence ends the kept content
    #[arg(short, long, value_name = "TEXT", default_value = SUBSCRIPTIONS_MARKER)]
    marker: String,

    /// Print the truncated content instead of writing it
    #[arg(long)]
    dry_run: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("truncate_at_marker=debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .with(filter)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = TruncateConfig::new(Some(cli.file), Some(cli.marker));
    log::debug!("Using {:?}", config);

    if cli.dry_run {
        let preview = config.preview().context("Failed to preview truncation")?;
        print!("{}", preview);
        return Ok(());
    }

    let outcome = config.truncate().context("Failed to truncate file")?;
    log::debug!(
        "{}: {} -> {} bytes (changed: {})",
        config.file_path.display(),
        outcome.original_len,
        outcome.truncated_len,
        outcome.changed
    );
    Ok(())
}
