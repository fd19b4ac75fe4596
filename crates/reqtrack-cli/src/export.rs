//! # Export Subcommand
//!
//! Fetches the filtered requirement set and writes the CSV export document.
//! The filename is derived from the project name; an empty result set is a
//! no-op, not an error.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;

use reqtrack_core::{export_filename, render_csv};

use crate::api_client;
use crate::filters::QueryArgs;

/// Arguments for the `reqtrack export` subcommand.
#[derive(Args, Debug)]
pub struct ExportArgs {
    #[command(flatten)]
    pub query: QueryArgs,

    /// Directory to write the CSV document into.
    #[arg(long, short, default_value = ".")]
    pub out: PathBuf,
}

/// Run `reqtrack export`.
pub async fn run_export(args: &ExportArgs) -> Result<u8> {
    let Some(project_id) = args.query.project_id() else {
        bail!("--project must be a positive integer");
    };
    let Some(descriptor) = args.query.to_query_state().descriptor() else {
        bail!("--project must be a positive integer");
    };

    let client = api_client()?;

    // The export header needs the project name and hourly rate; the list
    // endpoint only returns requirement records.
    let projects = client.projects().list().await?;
    let Some(project) = projects.into_iter().find(|p| p.id == project_id) else {
        bail!("project {project_id} not found");
    };

    let page = client.requirements().list(&descriptor).await?;
    let Some(document) = render_csv(&project, &page.requirements) else {
        println!("No requirements to export.");
        return Ok(0);
    };

    let path = args.out.join(export_filename(&project.name));
    std::fs::write(&path, &document)
        .with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(rows = page.requirements.len(), "wrote export document");
    println!("{}", path.display());
    Ok(0)
}
