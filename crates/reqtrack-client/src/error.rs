//! Dashboard API client error types.

/// Generic banner text used when the server does not supply a message.
const GENERIC_MESSAGE: &str = "Something went wrong while loading data";

/// Errors from dashboard API calls.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// HTTP transport error.
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        endpoint: String,
        source: reqwest::Error,
    },
    /// The API returned a non-2xx status.
    #[error("dashboard API {endpoint} returned {status}: {body}")]
    Api {
        endpoint: String,
        status: u16,
        body: String,
    },
    /// Response deserialization failed.
    #[error("failed to deserialize response from {endpoint}: {source}")]
    Deserialization {
        endpoint: String,
        source: reqwest::Error,
    },
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] super::config::ConfigError),
}

impl ApiError {
    /// User-facing banner text for this failure: the server-supplied
    /// message where one exists, a generic fallback otherwise.
    pub fn message(&self) -> String {
        match self {
            Self::Api { body, .. } => {
                server_message(body).unwrap_or_else(|| GENERIC_MESSAGE.to_string())
            }
            _ => GENERIC_MESSAGE.to_string(),
        }
    }
}

/// Extract an application error message from a response body, accepting
/// either an `error` or `message` field.
fn server_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("error")
        .or_else(|| value.get("message"))
        .and_then(|m| m.as_str())
        .map(str::to_string)
}
