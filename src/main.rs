use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use calfields::collector::config::DEFAULT_CALENDAR_DIR;
use calfields::{scan_directory, ReportFormatter, ScanConfig};

/// Inventory every field and value used across a care-calendar dataset
#[derive(Parser, Debug)]
#[command(name = "calfields")]
#[command(about = "List every field path, its distinct values and all monthly tasks")]
#[command(version)]
struct CliArgs {
    /// Calendar directory to scan recursively
    #[arg(default_value = DEFAULT_CALENDAR_DIR)]
    root: PathBuf,

    /// Enable debug logging
    #[arg(long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(long)]
    quiet: bool,
}

fn main() {
    let args = CliArgs::parse();
    init_tracing(&args);

    if let Err(err) = run(&args) {
        error!("{err}");
        for cause in err.chain().skip(1) {
            error!(cause = %cause, "caused by");
        }
        std::process::exit(1);
    }
}

fn run(args: &CliArgs) -> Result<()> {
    let config = create_scan_config(args);
    let summary = scan_directory(&config)?;

    let report = ReportFormatter::new(&summary.inventory, summary.files_processed, &config);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write!(out, "{report}").context("failed to write report")?;
    out.flush().context("failed to flush report")?;

    Ok(())
}

fn create_scan_config(args: &CliArgs) -> ScanConfig {
    ScanConfig::with_root(args.root.clone())
}

fn init_tracing(args: &CliArgs) {
    let default_level = if args.verbose {
        "debug"
    } else if args.quiet {
        "warn"
    } else {
        "info"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
