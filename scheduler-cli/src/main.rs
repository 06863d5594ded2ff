//! Thin command line front-end over `scheduler-core`.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "scheduler-cli", about = "Multi-stage interview scheduling engine")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Reads a schedule request from `--input`, solves it, and writes the
    /// response to `--output` (or stdout when omitted).
    Solve {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        output: Option<PathBuf>,
        #[arg(long)]
        pretty: bool,
        /// Prints the solver's progress lines (permutation counts, captured
        /// solutions per ordering, final status) to stderr as they happen.
        #[arg(long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Solve { input, output, pretty, verbose } => run_solve(&input, output.as_deref(), pretty, verbose),
    }
}

fn run_solve(input: &std::path::Path, output: Option<&std::path::Path>, pretty: bool, verbose: bool) -> Result<()> {
    let raw = std::fs::read_to_string(input).with_context(|| format!("reading {}", input.display()))?;
    let request: scheduler_core::ScheduleRequest =
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", input.display()))?;

    let response = if verbose {
        let logger: scheduler_core::InfoLogger = std::sync::Arc::new(|msg: &str| eprintln!("{msg}"));
        scheduler_core::solve_with_logger(&request, &logger)?
    } else {
        scheduler_core::solve(&request)?
    };

    let rendered = if pretty { serde_json::to_string_pretty(&response)? } else { serde_json::to_string(&response)? };

    match output {
        Some(path) => std::fs::write(path, rendered).with_context(|| format!("writing {}", path.display()))?,
        None => println!("{rendered}"),
    }

    Ok(())
}
