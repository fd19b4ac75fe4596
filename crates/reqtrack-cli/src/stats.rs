//! # Stats Subcommand
//!
//! Prints the server-reported project-wide count-by-status summary.

use anyhow::{bail, Result};
use clap::Args;

use reqtrack_core::ProjectId;

use crate::{api_client, format_stats};

/// Arguments for the `reqtrack stats` subcommand.
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Project to summarize (positive integer id).
    #[arg(long)]
    pub project: i64,
}

/// Run `reqtrack stats`.
pub async fn run_stats(args: &StatsArgs) -> Result<u8> {
    let Some(project) = ProjectId::new(args.project) else {
        bail!("--project must be a positive integer");
    };

    let client = api_client()?;
    let stats = client.requirements().stats(project).await?;
    println!("{}", format_stats(&stats));

    let draft = stats
        .total
        .saturating_sub(stats.approved + stats.in_review + stats.disapproved);
    println!("draft (residual): {draft}");
    Ok(0)
}
