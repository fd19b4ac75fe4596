//! Backoff retry for dashboard API reads.
//!
//! Only transient transport failures (timeouts, refused or dropped
//! connections) are retried; any other transport error and every received
//! response, success or not, is handed back to the caller on the first
//! attempt. The tracker push call never goes through this path: pushes are
//! at-most-one attempt per user action.

use std::time::Duration;

/// Retry parameters for read endpoints, taken from
/// [`ApiConfig`](crate::config::ApiConfig).
#[derive(Debug, Clone, Copy)]
pub(crate) struct RetryPolicy {
    max_retries: u32,
    base_delay: Duration,
}

/// Transient transport failures worth a second attempt. Everything else
/// (builder errors, redirect loops, body errors) fails the same way every
/// time, so retrying would only add latency.
fn is_transient(error: &reqwest::Error) -> bool {
    error.is_timeout() || error.is_connect()
}

impl RetryPolicy {
    pub(crate) fn new(max_retries: u32, base_delay: Duration) -> Self {
        Self {
            max_retries,
            base_delay,
        }
    }

    /// Send a request, retrying transient transport failures with a
    /// doubling delay between attempts.
    ///
    /// The closure `f` is called up to `max_retries + 1` times. Response
    /// status codes are not inspected here; the endpoint clients own that.
    pub(crate) async fn send<F, Fut>(&self, f: F) -> Result<reqwest::Response, reqwest::Error>
    where
        F: Fn() -> Fut,
        Fut: std::future::Future<Output = Result<reqwest::Response, reqwest::Error>>,
    {
        let mut attempt = 0;
        loop {
            match f().await {
                Ok(resp) => return Ok(resp),
                Err(e) if attempt < self.max_retries && is_transient(&e) => {
                    let delay = self.base_delay * 2u32.pow(attempt);
                    tracing::warn!(
                        attempt = attempt + 1,
                        max_retries = self.max_retries,
                        "dashboard API read failed, retrying in {delay:?}: {e}"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn timed_out_read_is_retried_until_the_budget_runs_out() {
        let server = MockServer::start().await;
        // Every attempt reaches the server but times out client-side.
        Mock::given(method("GET"))
            .and(path("/requirements"))
            .respond_with(
                ResponseTemplate::new(200).set_delay(Duration::from_millis(200)),
            )
            .expect(3)
            .mount(&server)
            .await;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(30))
            .build()
            .unwrap();
        let url = format!("{}/requirements", server.uri());

        let policy = RetryPolicy::new(2, Duration::from_millis(5));
        let result = policy.send(|| http.get(&url).send()).await;

        let err = result.expect_err("every attempt must time out");
        assert!(err.is_timeout());
        assert_eq!(server.received_requests().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn non_transient_transport_error_is_not_retried() {
        use std::sync::atomic::{AtomicU32, Ordering};

        let call_count = AtomicU32::new(0);
        let http = reqwest::Client::new();

        let policy = RetryPolicy::new(3, Duration::from_millis(5));
        // Unsupported scheme fails in the request builder, identically on
        // every attempt.
        let result = policy
            .send(|| {
                call_count.fetch_add(1, Ordering::SeqCst);
                http.get("ftp://127.0.0.1/requirements").send()
            })
            .await;

        assert!(result.is_err());
        assert_eq!(call_count.load(Ordering::SeqCst), 1, "no retry budget spent");
    }

    #[tokio::test]
    async fn first_successful_response_ends_the_loop() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/projects"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let http = reqwest::Client::new();
        let url = format!("{}/projects", server.uri());

        let policy = RetryPolicy::new(3, Duration::from_millis(5));
        let resp = policy.send(|| http.get(&url).send()).await.unwrap();
        assert!(resp.status().is_success());
    }
}
