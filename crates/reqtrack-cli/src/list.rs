//! # List Subcommand
//!
//! Fetches one filtered page of requirements through the dashboard engine
//! and prints it with pagination and both statistic sets (project-wide and
//! page-level filtered).

use std::time::Duration;

use anyhow::{bail, Result};
use clap::Args;

use reqtrack_client::DashboardEngine;

use crate::filters::QueryArgs;
use crate::{api_client, format_stats};

/// Arguments for the `reqtrack list` subcommand.
#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub query: QueryArgs,
}

/// Run `reqtrack list`.
pub async fn run_list(args: &ListArgs) -> Result<u8> {
    let Some(project) = args.query.project_id() else {
        bail!("--project must be a positive integer");
    };
    let Some(descriptor) = args.query.to_query_state().descriptor() else {
        bail!("--project must be a positive integer");
    };

    // One-shot invocation: there is no typing to coalesce, so the debounce
    // quiet period is zero.
    let client = api_client()?;
    let engine = DashboardEngine::with_debounce(client, Duration::ZERO);
    let stats_task = engine.on_project_change(Some(project));
    let list_task = engine.on_query_change(descriptor);
    stats_task.await?;
    list_task.await?;

    let snap = engine.snapshot();
    if let Some(error) = snap.list_error {
        bail!(error);
    }
    // A stats failure still leaves a printable page; surface it without
    // discarding the list output.
    if let Some(error) = &snap.stats_error {
        eprintln!("warning: project statistics unavailable: {error}");
    }

    if snap.requirements.is_empty() {
        println!("No requirements match the current query.");
    } else {
        println!(
            "{:<10} {:<12} {:<8} {:<10} {:<14} {:<12} {:>6}  TEXT",
            "ID", "STATUS", "PRIORITY", "COMPLEXITY", "TYPE", "AUTHOR", "HOURS"
        );
        for req in &snap.requirements {
            println!(
                "{:<10} {:<12} {:<8} {:<10} {:<14} {:<12} {:>6}  {}",
                req.id,
                req.status,
                req.priority,
                req.complexity,
                req.req_type,
                req.author,
                req.estimated_hours,
                req.text
            );
        }
    }

    println!(
        "\npage {}/{} ({} matching)",
        snap.pagination.page, snap.pagination.pages, snap.pagination.total
    );
    println!("this page:  {}", format_stats(&snap.filtered_stats));
    println!("project:    {}", format_stats(&snap.overall_stats));
    Ok(0)
}
