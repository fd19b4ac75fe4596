//! Jira push pipeline: connect, push, and failure classification.
//!
//! | Method | Path            | Operation                          |
//! |--------|-----------------|------------------------------------|
//! | POST   | `/jira/connect` | Validate and store tracker settings |
//! | POST   | `/jira/push`    | Create an issue for one requirement |
//!
//! ## Session model
//!
//! Connection state lives in an explicit [`TrackerSession`] created at
//! session start, mutated only by a successful connect, and read by push —
//! never a hidden module-level singleton.
//!
//! ## Failure classification
//!
//! Push failures are classified by independent substring checks over the
//! raw error text. The tracker's error vocabulary is not a stable contract,
//! so this is a heuristic: every matching check appends its guidance line,
//! and a message matching none (e.g. a timeout) passes through unmodified.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::PUSH_TIMEOUT_SECS;

/// Per-session tracker connection state.
///
/// Created disconnected at session start; a successful [`TrackerClient::connect`]
/// is the only mutation path. No persistence across sessions.
#[derive(Debug, Clone, Default)]
pub struct TrackerSession {
    connected: bool,
    project_key: String,
}

impl TrackerSession {
    /// Create a disconnected session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a connect call has succeeded this session.
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// The Jira project key stored by the last successful connect.
    pub fn project_key(&self) -> &str {
        &self.project_key
    }
}

/// Tracker connection settings, sent verbatim to `POST /jira/connect`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectRequest {
    pub site_url: String,
    pub email: String,
    pub api_token: String,
    pub project_key: String,
}

impl ConnectRequest {
    /// Local validation, run before any network call: all four fields must
    /// be non-empty and the site URL must carry an `http`/`https` scheme.
    fn validate(&self) -> Result<(), TrackerError> {
        if self.site_url.is_empty()
            || self.email.is_empty()
            || self.api_token.is_empty()
            || self.project_key.is_empty()
        {
            return Err(TrackerError::Invalid(
                "all connection fields are required".into(),
            ));
        }
        match url::Url::parse(&self.site_url) {
            Ok(u) if matches!(u.scheme(), "http" | "https") => Ok(()),
            _ => Err(TrackerError::Invalid(
                "site URL must start with http:// or https://".into(),
            )),
        }
    }
}

/// The issue created by a successful push.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushedIssue {
    pub key: String,
    pub url: String,
}

#[derive(Debug, Deserialize)]
struct ConnectResponse {
    success: bool,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PushResponse {
    success: bool,
    #[serde(default)]
    issue: Option<PushedIssue>,
    #[serde(default)]
    error: Option<String>,
}

/// Errors from the tracker pipeline.
#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    /// Local validation failure — never reaches the network.
    #[error("invalid tracker settings: {0}")]
    Invalid(String),
    /// Push attempted without a successful connect this session.
    #[error("not connected to Jira; connect before pushing")]
    NotConnected,
    /// Connect or push rejected; the message is user-facing remediation
    /// text (classified for pushes, verbatim for connects).
    #[error("{message}")]
    Rejected { message: String },
}

/// Guidance appended when the tracker reports an authorization failure.
const GUIDANCE_UNAUTHORIZED: &str =
    "Your Jira credentials were rejected. Reconnect with a fresh API token.";

/// Guidance appended when the tracker cannot resolve the project key.
const GUIDANCE_PROJECT_KEY: &str =
    "Verify the Jira project key exists and your account can create issues in it.";

/// Guidance appended when the tracker rejects the issue type.
const GUIDANCE_ISSUE_TYPE: &str =
    "Check that the Jira project has issue types configured (e.g. Task).";

/// Classify a raw push failure message into remediation text.
///
/// The three substring checks are independent and all executed — a message
/// matching several appends every applicable guidance line. A message
/// matching none passes through unmodified.
pub fn classify_push_error(raw: &str) -> String {
    let mut lines = vec![raw.to_string()];
    if raw.contains("Unauthorized") {
        lines.push(GUIDANCE_UNAUTHORIZED.to_string());
    }
    if raw.contains("projectKey") {
        lines.push(GUIDANCE_PROJECT_KEY.to_string());
    }
    if raw.contains("issuetype") {
        lines.push(GUIDANCE_ISSUE_TYPE.to_string());
    }
    lines.join("\n")
}

/// Client for the `/jira` endpoints.
#[derive(Debug, Clone)]
pub struct TrackerClient {
    http: reqwest::Client,
    base_url: url::Url,
}

impl TrackerClient {
    pub(crate) fn new(http: reqwest::Client, base_url: url::Url) -> Self {
        Self { http, base_url }
    }

    /// Validate settings and establish the tracker connection.
    ///
    /// Invalid input fails fast without a network round-trip. On server
    /// success the session becomes connected and stores the project key; on
    /// server failure the error message is surfaced verbatim and the
    /// session is left untouched.
    pub async fn connect(
        &self,
        session: &mut TrackerSession,
        request: &ConnectRequest,
    ) -> Result<(), TrackerError> {
        request.validate()?;

        let url = format!("{}jira/connect", self.base_url);
        let resp = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| TrackerError::Rejected {
                message: e.to_string(),
            })?;

        let body: ConnectResponse = resp.json().await.map_err(|e| TrackerError::Rejected {
            message: e.to_string(),
        })?;

        if body.success {
            session.connected = true;
            session.project_key = request.project_key.clone();
            tracing::info!(project_key = %session.project_key, "connected to Jira");
            Ok(())
        } else {
            Err(TrackerError::Rejected {
                message: body
                    .error
                    .unwrap_or_else(|| "failed to connect to Jira".into()),
            })
        }
    }

    /// Push one approved requirement to the tracker as an issue.
    ///
    /// At most one attempt per call — no retry loop. The call is bounded by
    /// a 30-second timeout; an exceeded timeout surfaces as a generic
    /// failure through the classification pass (matching none of the
    /// substrings, it passes through unmodified). Failures never mutate the
    /// session.
    pub async fn push(
        &self,
        session: &TrackerSession,
        requirement_id: &str,
    ) -> Result<PushedIssue, TrackerError> {
        if !session.connected {
            return Err(TrackerError::NotConnected);
        }

        let url = format!("{}jira/push", self.base_url);
        let body = serde_json::json!({ "requirementId": requirement_id });

        let resp = self
            .http
            .post(&url)
            .timeout(Duration::from_secs(PUSH_TIMEOUT_SECS))
            .json(&body)
            .send()
            .await
            .map_err(|e| TrackerError::Rejected {
                message: classify_push_error(&e.to_string()),
            })?;

        let body: PushResponse = resp.json().await.map_err(|e| TrackerError::Rejected {
            message: classify_push_error(&e.to_string()),
        })?;

        match (body.success, body.issue) {
            (true, Some(issue)) => {
                tracing::info!(key = %issue.key, "pushed requirement {requirement_id} to Jira");
                Ok(issue)
            }
            _ => {
                let raw = body
                    .error
                    .unwrap_or_else(|| "failed to push requirement to Jira".into());
                Err(TrackerError::Rejected {
                    message: classify_push_error(&raw),
                })
            }
        }
    }
}
