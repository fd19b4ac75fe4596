//! # reqtrack-cli — Terminal Front End for the Requirements Dashboard
//!
//! Provides the `reqtrack` command-line interface over the dashboard API.
//!
//! ## Subcommands
//!
//! - `reqtrack projects` — List selectable projects.
//! - `reqtrack list` — Browse one filtered page of requirements with stats.
//! - `reqtrack stats` — Project-wide count-by-status summary.
//! - `reqtrack export` — Write the filtered set as a CSV document.
//! - `reqtrack jira` — Connect to Jira and push approved requirements.
//!
//! The API base URL comes from `REQTRACK_API_URL` (default
//! `http://127.0.0.1:8080`).

pub mod export;
pub mod filters;
pub mod jira;
pub mod list;
pub mod projects;
pub mod stats;

use anyhow::{Context, Result};
use reqtrack_client::{ApiConfig, DashboardClient};
use reqtrack_core::StatsSummary;

/// Build the dashboard API client from the environment.
pub fn api_client() -> Result<DashboardClient> {
    let config = ApiConfig::from_env().context("invalid dashboard API configuration")?;
    DashboardClient::new(config).context("failed to build dashboard API client")
}

/// One-line rendering of a count-by-status summary.
pub fn format_stats(stats: &StatsSummary) -> String {
    format!(
        "total {}  approved {}  in review {}  disapproved {}",
        stats.total, stats.approved, stats.in_review, stats.disapproved
    )
}
