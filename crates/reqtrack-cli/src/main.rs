//! # reqtrack CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Uses clap derive macros for argument parsing.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use reqtrack_cli::export::{run_export, ExportArgs};
use reqtrack_cli::jira::{run_jira, JiraArgs};
use reqtrack_cli::list::{run_list, ListArgs};
use reqtrack_cli::projects::run_projects;
use reqtrack_cli::stats::{run_stats, StatsArgs};

/// Requirements dashboard CLI.
///
/// Browse, filter, and export a project's requirements, and push approved
/// ones to Jira. The dashboard API base URL comes from `REQTRACK_API_URL`.
#[derive(Parser, Debug)]
#[command(name = "reqtrack", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List selectable projects with their hourly rates.
    Projects,

    /// Browse one filtered page of requirements with statistics.
    List(ListArgs),

    /// Project-wide count-by-status summary.
    Stats(StatsArgs),

    /// Export the filtered requirement set as a CSV document.
    Export(ExportArgs),

    /// Jira integration: connect and push requirements as issues.
    Jira(JiraArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Projects => run_projects().await,
        Commands::List(args) => run_list(&args).await,
        Commands::Stats(args) => run_stats(&args).await,
        Commands::Export(args) => run_export(&args).await,
        Commands::Jira(args) => run_jira(&args).await,
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::from(1)
        }
    }
}
