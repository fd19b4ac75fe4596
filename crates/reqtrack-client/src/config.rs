//! Dashboard API client configuration.
//!
//! Configures the base URL, timeouts, and retry policy for the remote
//! dashboard API. Override via environment variables or explicit
//! construction for staging/testing.

use url::Url;

/// Connection-level timeout applied to the underlying HTTP client, in
/// seconds. A transport safety net, not a per-read bound.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Seconds the tracker push call may take before it is abandoned. Ordinary
/// reads (projects, stats, list) carry no explicit bound.
pub const PUSH_TIMEOUT_SECS: u64 = 30;

/// Quiet period between the last query mutation and the list fetch it
/// triggers, in milliseconds.
pub const DEBOUNCE_MS: u64 = 500;

/// Default number of retry attempts after the initial read request.
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Default base delay between read retries, in milliseconds (doubles each
/// attempt).
pub const DEFAULT_RETRY_BASE_DELAY_MS: u64 = 200;

/// Configuration for connecting to the dashboard API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the dashboard API.
    pub base_url: Url,
    /// Connection-level timeout applied to the underlying HTTP client, in
    /// seconds.
    pub timeout_secs: u64,
    /// Retry attempts after the initial request, for read endpoints only.
    pub max_retries: u32,
    /// Base delay between read retries, in milliseconds.
    pub retry_base_delay_ms: u64,
}

impl ApiConfig {
    /// Create a configuration for an explicit base URL with the default
    /// timeout and retry policy.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_retries: DEFAULT_MAX_RETRIES,
            retry_base_delay_ms: DEFAULT_RETRY_BASE_DELAY_MS,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `REQTRACK_API_URL` (default: `http://127.0.0.1:8080`)
    /// - `REQTRACK_TIMEOUT_SECS` (default: 30)
    /// - `REQTRACK_MAX_RETRIES` (default: 3)
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw =
            std::env::var("REQTRACK_API_URL").unwrap_or_else(|_| "http://127.0.0.1:8080".into());
        let base_url = Url::parse(&raw)
            .map_err(|e| ConfigError::InvalidUrl("REQTRACK_API_URL".into(), e.to_string()))?;
        let timeout_secs = std::env::var("REQTRACK_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        let max_retries = std::env::var("REQTRACK_MAX_RETRIES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_MAX_RETRIES);
        Ok(Self {
            base_url,
            timeout_secs,
            max_retries,
            retry_base_delay_ms: DEFAULT_RETRY_BASE_DELAY_MS,
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_config_uses_defaults() {
        let cfg = ApiConfig::new(Url::parse("http://127.0.0.1:9000").unwrap());
        assert_eq!(cfg.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(cfg.max_retries, DEFAULT_MAX_RETRIES);
        assert_eq!(cfg.retry_base_delay_ms, DEFAULT_RETRY_BASE_DELAY_MS);
        assert_eq!(cfg.base_url.as_str(), "http://127.0.0.1:9000/");
    }
}
