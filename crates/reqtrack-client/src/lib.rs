//! # reqtrack-client — Typed client and fetch engine for the dashboard API
//!
//! Provides ergonomic, typed access to the remote dashboard endpoints:
//!
//! - **Projects** via `GET /projects`
//! - **Requirements** via `GET /requirements` (paginated, filtered list)
//!   and `GET /requirements/stats` (project-wide counts)
//! - **Tracker** via `POST /jira/connect` and `POST /jira/push`
//!
//! On top of the endpoint clients sits the [`DashboardEngine`]: the
//! debounced, stale-discarding orchestrator that keeps the displayed
//! requirement set, pagination, and both statistic sets consistent with the
//! remote source across re-entrant query changes.
//!
//! ## Architecture
//!
//! This crate is the only path between the dashboard and the network.
//! All request/response shapes live here; pure derivations (stats, cost,
//! export) live in `reqtrack-core`.

pub mod config;
pub mod engine;
pub mod error;
pub mod projects;
pub mod requirements;
pub(crate) mod retry;
pub mod tracker;

pub use config::ApiConfig;
pub use engine::{DashboardEngine, DashboardState};
pub use error::ApiError;
pub use requirements::RequirementPage;
pub use tracker::{ConnectRequest, PushedIssue, TrackerError, TrackerSession};

use std::time::Duration;

/// Top-level dashboard API client. Holds sub-clients for each endpoint
/// family behind one shared HTTP connection pool.
#[derive(Debug, Clone)]
pub struct DashboardClient {
    projects: projects::ProjectClient,
    requirements: requirements::RequirementClient,
    tracker: tracker::TrackerClient,
}

impl DashboardClient {
    /// Create a new dashboard API client from configuration.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ApiError::Http {
                endpoint: "client_init".into(),
                source: e,
            })?;
        let retry = retry::RetryPolicy::new(
            config.max_retries,
            Duration::from_millis(config.retry_base_delay_ms),
        );

        Ok(Self {
            projects: projects::ProjectClient::new(http.clone(), config.base_url.clone(), retry),
            requirements: requirements::RequirementClient::new(
                http.clone(),
                config.base_url.clone(),
                retry,
            ),
            tracker: tracker::TrackerClient::new(http, config.base_url),
        })
    }

    /// Access the project list client.
    pub fn projects(&self) -> &projects::ProjectClient {
        &self.projects
    }

    /// Access the requirements (list + stats) client.
    pub fn requirements(&self) -> &requirements::RequirementClient {
        &self.requirements
    }

    /// Access the tracker (Jira) client.
    pub fn tracker(&self) -> &tracker::TrackerClient {
        &self.tracker
    }
}
