//! reachmix command line tool
//!
//! # Usage
//!
//! ```bash
//! reachmix --config reachmix.toml --output results.csv
//! ```

use clap::Parser;
use reachmix::{run, PathOverrides, RunConfig, RunResult, RunSummary};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Route daily runoff and tracer through two connected river reaches
#[derive(Parser, Debug)]
#[command(name = "reachmix")]
#[command(about = "Route daily runoff and tracer through two connected river reaches")]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Daily forcing table (overrides the config file)
    #[arg(long, env = "REACHMIX_FORCING")]
    forcing: Option<PathBuf>,

    /// Reach table (overrides the config file)
    #[arg(long, env = "REACHMIX_REACHES")]
    reaches: Option<PathBuf>,

    /// Result table to write (overrides the config file)
    #[arg(short, long, env = "REACHMIX_OUTPUT")]
    output: Option<PathBuf>,

    /// Log debug details
    #[arg(short, long)]
    verbose: bool,
}

fn execute(cli: Cli) -> RunResult<RunSummary> {
    let mut config = match &cli.config {
        Some(path) => RunConfig::from_file(path)?,
        None => RunConfig::default(),
    };
    config.apply_overrides(PathOverrides {
        forcing: cli.forcing,
        reaches: cli.reaches,
        output: cli.output,
    });
    run(&config)
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "reachmix=debug,reachmix_core=debug,reachmix_io=debug"
    } else {
        "reachmix=info,reachmix_core=info,reachmix_io=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match execute(cli) {
        Ok(summary) => {
            println!(
                "Wrote {} rows to {}",
                summary.rows_written,
                summary.output.display()
            );
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
