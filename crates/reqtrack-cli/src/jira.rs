//! # Jira Subcommand
//!
//! Connects to the Jira integration and pushes approved requirements as
//! issues. The tracker session lives for one invocation; `push` therefore
//! takes the connection flags as well and connects first.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use reqtrack_client::{ConnectRequest, TrackerSession};

use crate::api_client;

/// Arguments for the `reqtrack jira` subcommand.
#[derive(Args, Debug)]
pub struct JiraArgs {
    #[command(subcommand)]
    pub command: JiraCommand,
}

/// Jira subcommands.
#[derive(Subcommand, Debug)]
pub enum JiraCommand {
    /// Validate settings and verify the connection to Jira.
    Connect(ConnectArgs),

    /// Push one requirement to Jira as an issue.
    Push {
        /// Requirement id to push.
        #[arg(long)]
        requirement: String,

        #[command(flatten)]
        connection: ConnectArgs,
    },
}

/// Jira connection settings.
#[derive(Args, Debug)]
pub struct ConnectArgs {
    /// Jira site URL (must start with http:// or https://).
    #[arg(long)]
    pub site_url: String,

    /// Account email.
    #[arg(long)]
    pub email: String,

    /// API token for the account.
    #[arg(long)]
    pub api_token: String,

    /// Jira project key to create issues in.
    #[arg(long)]
    pub project_key: String,
}

impl ConnectArgs {
    fn request(&self) -> ConnectRequest {
        ConnectRequest {
            site_url: self.site_url.clone(),
            email: self.email.clone(),
            api_token: self.api_token.clone(),
            project_key: self.project_key.clone(),
        }
    }
}

/// Run `reqtrack jira`.
pub async fn run_jira(args: &JiraArgs) -> Result<u8> {
    let client = api_client()?;
    let mut session = TrackerSession::new();

    match &args.command {
        JiraCommand::Connect(connection) => {
            client
                .tracker()
                .connect(&mut session, &connection.request())
                .await
                .context("failed to connect to Jira")?;
            println!("Connected to Jira project {}.", session.project_key());
            Ok(0)
        }
        JiraCommand::Push {
            requirement,
            connection,
        } => {
            client
                .tracker()
                .connect(&mut session, &connection.request())
                .await
                .context("failed to connect to Jira")?;
            let issue = client.tracker().push(&session, requirement).await?;
            println!("Created {}: {}", issue.key, issue.url);
            Ok(0)
        }
    }
}
