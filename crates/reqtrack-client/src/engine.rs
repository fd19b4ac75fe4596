//! # Fetch Orchestrator
//!
//! Coordinates the debounced, cancel-safe list fetch and the independent
//! project-wide statistics fetch, keeping one shared [`DashboardState`]
//! consistent with the remote source.
//!
//! ## Ordering model
//!
//! The correctness hazard here is ordering, not parallelism: a slow older
//! response must never overwrite a faster newer one. True transport-level
//! cancellation is not relied upon; instead each fetch axis carries a
//! monotonically increasing sequence counter, and a task applies its result
//! only when its sequence number is still the latest — both after the
//! debounce sleep and again when the response arrives. Superseded work
//! returns silently.
//!
//! The list axis is single-flight by supersession; the stats axis is
//! independent and may be in flight concurrently.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;

use reqtrack_core::{
    summarize, PaginationState, ProjectId, QueryDescriptor, Requirement, StatsSummary,
};

use crate::config::DEBOUNCE_MS;
use crate::DashboardClient;

/// Everything the presentation layer needs to render one frame of the
/// dashboard. Cloned out via [`DashboardEngine::snapshot`].
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    /// The currently displayed page of requirements.
    pub requirements: Vec<Requirement>,
    /// Pagination metadata from the last successful list response.
    pub pagination: PaginationState,
    /// Status counts over the returned page (not the full filtered total
    /// across all pages — preserved page-level approximation).
    pub filtered_stats: StatsSummary,
    /// Server-reported project-wide status counts.
    pub overall_stats: StatsSummary,
    /// True while a list fetch is on the wire (not during the debounce wait).
    pub loading: bool,
    /// Banner text from the last list fetch, if it failed. Cleared only by
    /// a later list success.
    pub list_error: Option<String>,
    /// Banner text from the last stats fetch, if it failed. Cleared only by
    /// a later stats success. Kept separate so a list success cannot mask a
    /// stats failure that landed first.
    pub stats_error: Option<String>,
}

impl DashboardState {
    /// The user-facing error banner: the list axis takes precedence, then
    /// the stats axis. `None` when both axes last succeeded.
    pub fn error(&self) -> Option<&str> {
        self.list_error.as_deref().or(self.stats_error.as_deref())
    }
}

/// Debounced, stale-discarding coordinator between query state and the
/// remote dashboard API.
#[derive(Debug, Clone)]
pub struct DashboardEngine {
    client: Arc<DashboardClient>,
    state: Arc<Mutex<DashboardState>>,
    list_seq: Arc<AtomicU64>,
    stats_seq: Arc<AtomicU64>,
    debounce: Duration,
}

impl DashboardEngine {
    /// Create an engine with the standard 500ms debounce quiet period.
    pub fn new(client: DashboardClient) -> Self {
        Self::with_debounce(client, Duration::from_millis(DEBOUNCE_MS))
    }

    /// Create an engine with an explicit debounce period (tests use a short
    /// one).
    pub fn with_debounce(client: DashboardClient, debounce: Duration) -> Self {
        Self {
            client: Arc::new(client),
            state: Arc::new(Mutex::new(DashboardState::default())),
            list_seq: Arc::new(AtomicU64::new(0)),
            stats_seq: Arc::new(AtomicU64::new(0)),
            debounce,
        }
    }

    /// Clone the current dashboard state for rendering or export.
    pub fn snapshot(&self) -> DashboardState {
        self.state.lock().clone()
    }

    /// Schedule a debounced list fetch for a new query descriptor.
    ///
    /// Each call supersedes any pending or in-flight fetch on the list
    /// axis: only the last call within the quiet window reaches the
    /// network, and only the latest request's response is applied. On
    /// success the requirement page, pagination, and page-level filtered
    /// stats are replaced and the list-axis banner cleared; on failure the
    /// requirement list is cleared (fail-closed) and the banner set.
    pub fn on_query_change(&self, query: QueryDescriptor) -> JoinHandle<()> {
        let seq = self.list_seq.fetch_add(1, Ordering::SeqCst) + 1;
        let latest = Arc::clone(&self.list_seq);
        let client = Arc::clone(&self.client);
        let state = Arc::clone(&self.state);
        let debounce = self.debounce;

        tokio::spawn(async move {
            tokio::time::sleep(debounce).await;
            if latest.load(Ordering::SeqCst) != seq {
                tracing::debug!(seq, "list fetch superseded during debounce");
                return;
            }

            state.lock().loading = true;
            let result = client.requirements().list(&query).await;

            if latest.load(Ordering::SeqCst) != seq {
                tracing::debug!(seq, "discarding stale list response");
                return;
            }

            let mut s = state.lock();
            match result {
                Ok(page) => {
                    s.filtered_stats = summarize(&page.requirements);
                    s.requirements = page.requirements;
                    s.pagination = PaginationState {
                        page: page.page,
                        pages: page.pages,
                        total: page.total,
                    };
                    s.list_error = None;
                }
                Err(e) => {
                    tracing::warn!(seq, "list fetch failed: {e}");
                    s.requirements = Vec::new();
                    s.list_error = Some(e.message());
                }
            }
            s.loading = false;
        })
    }

    /// Fetch project-wide statistics for a newly selected project.
    ///
    /// Independent of the list axis and not debounced — project switches
    /// are discrete events. An invalid (absent) selection is a silent
    /// no-op. Failure sets the stats-axis banner but leaves the
    /// requirement list untouched.
    pub fn on_project_change(&self, project: Option<ProjectId>) -> JoinHandle<()> {
        let Some(project) = project else {
            return tokio::spawn(async {});
        };
        let seq = self.stats_seq.fetch_add(1, Ordering::SeqCst) + 1;
        let latest = Arc::clone(&self.stats_seq);
        let client = Arc::clone(&self.client);
        let state = Arc::clone(&self.state);

        tokio::spawn(async move {
            let result = client.requirements().stats(project).await;

            if latest.load(Ordering::SeqCst) != seq {
                tracing::debug!(seq, "discarding stale stats response");
                return;
            }

            let mut s = state.lock();
            match result {
                Ok(stats) => {
                    s.overall_stats = stats;
                    s.stats_error = None;
                }
                Err(e) => {
                    tracing::warn!(seq, "stats fetch failed: {e}");
                    s.stats_error = Some(e.message());
                }
            }
        })
    }
}
