//! Typed client for the project list endpoint.
//!
//! | Method | Path        | Operation              |
//! |--------|-------------|------------------------|
//! | GET    | `/projects` | List selectable projects |
//!
//! The project list is fetched once at session start; projects are
//! immutable once fetched.

use reqtrack_core::Project;

use crate::error::ApiError;
use crate::retry::RetryPolicy;

/// Client for the `/projects` endpoint.
#[derive(Debug, Clone)]
pub struct ProjectClient {
    http: reqwest::Client,
    base_url: url::Url,
    retry: RetryPolicy,
}

impl ProjectClient {
    pub(crate) fn new(http: reqwest::Client, base_url: url::Url, retry: RetryPolicy) -> Self {
        Self {
            http,
            base_url,
            retry,
        }
    }

    /// List all projects.
    ///
    /// Calls `GET {base_url}/projects`.
    pub async fn list(&self) -> Result<Vec<Project>, ApiError> {
        let endpoint = "GET /projects";
        let url = format!("{}projects", self.base_url);

        let resp = self
            .retry
            .send(|| self.http.get(&url).send())
            .await
            .map_err(|e| ApiError::Http {
                endpoint: endpoint.into(),
                source: e,
            })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::Api {
                endpoint: endpoint.into(),
                status,
                body,
            });
        }

        resp.json().await.map_err(|e| ApiError::Deserialization {
            endpoint: endpoint.into(),
            source: e,
        })
    }
}
