//! Typed client for the requirement list and statistics endpoints.
//!
//! | Method | Path                  | Operation                         |
//! |--------|-----------------------|-----------------------------------|
//! | GET    | `/requirements`       | Paginated, filtered list          |
//! | GET    | `/requirements/stats` | Project-wide count-by-status      |
//!
//! Array-valued filters are encoded as repeated query keys
//! (`type=UI&type=Security`), never comma-joined — see
//! [`QueryDescriptor::query_pairs`].

use serde::Deserialize;

use reqtrack_core::{ProjectId, QueryDescriptor, Requirement, StatsSummary};

use crate::error::ApiError;
use crate::retry::RetryPolicy;

/// One page of the filtered requirement list, as returned by the server.
///
/// Pagination fields default to the empty dashboard (`1/1/0`) when absent
/// from the response.
#[derive(Debug, Clone, Deserialize)]
pub struct RequirementPage {
    #[serde(default)]
    pub requirements: Vec<Requirement>,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_page")]
    pub pages: u32,
    #[serde(default)]
    pub total: u64,
}

fn default_page() -> u32 {
    1
}

/// Client for the `/requirements` endpoints.
#[derive(Debug, Clone)]
pub struct RequirementClient {
    http: reqwest::Client,
    base_url: url::Url,
    retry: RetryPolicy,
}

impl RequirementClient {
    pub(crate) fn new(http: reqwest::Client, base_url: url::Url, retry: RetryPolicy) -> Self {
        Self {
            http,
            base_url,
            retry,
        }
    }

    /// Fetch one page of the filtered requirement list.
    ///
    /// Calls `GET {base_url}/requirements?project=…&search=…&type=…&page=…&stats=true`.
    pub async fn list(&self, query: &QueryDescriptor) -> Result<RequirementPage, ApiError> {
        let endpoint = "GET /requirements";
        let url = format!("{}requirements", self.base_url);
        let pairs = query.query_pairs();

        let resp = self
            .retry
            .send(|| self.http.get(&url).query(&pairs).send())
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

    /// Fetch project-wide statistics (the "overall" statistic set,
    /// independent of search and filters).
    ///
    /// Calls `GET {base_url}/requirements/stats?project=<id>`.
    pub async fn stats(&self, project: ProjectId) -> Result<StatsSummary, ApiError> {
        let endpoint = "GET /requirements/stats";
        let url = format!("{}requirements/stats", self.base_url);
        let pairs = [("project", project.to_string())];

        let resp = self
            .retry
            .send(|| self.http.get(&url).query(&pairs).send())
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
