//! # Projects Subcommand
//!
//! Lists the selectable projects with their hourly billing rates.

use anyhow::Result;

use crate::api_client;

/// Run `reqtrack projects`.
pub async fn run_projects() -> Result<u8> {
    let client = api_client()?;
    let projects = client.projects().list().await?;

    if projects.is_empty() {
        println!("No projects available.");
        return Ok(0);
    }

    println!("{:>6}  {:<32} {:>12}", "ID", "NAME", "RATE/HOUR");
    for project in &projects {
        println!(
            "{:>6}  {:<32} {:>12}",
            project.id,
            project.name,
            format!("${:.2}", project.hourly_rate)
        );
    }
    Ok(0)
}
