//! # Query State
//!
//! Holds the user's current search text, multi-select filters, and
//! pagination cursor, and produces the canonical [`QueryDescriptor`] that
//! fully determines a list request.
//!
//! ## Invariants
//!
//! - Mutating search text, any filter, or the selected project atomically
//!   resets `page` to 1. Mutating `page` alone touches nothing else.
//! - Filter toggling is symmetric difference: toggling a selected value
//!   removes it, toggling a new value appends it. Insertion order is
//!   preserved so request encoding is deterministic.
//! - No descriptor is produced while no valid project is selected; callers
//!   must treat that as a silent no-op, not an error.

use serde::{Deserialize, Serialize};

use crate::model::{Complexity, Priority, ProjectId, ReqType, Status};

/// The four multi-select filter categories, insertion-ordered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSet {
    pub types: Vec<ReqType>,
    pub statuses: Vec<Status>,
    pub complexities: Vec<Complexity>,
    pub priorities: Vec<Priority>,
}

impl FilterSet {
    /// True when no filter value is selected in any category.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
            && self.statuses.is_empty()
            && self.complexities.is_empty()
            && self.priorities.is_empty()
    }
}

/// Symmetric-difference toggle: remove the value if present, append if not.
fn toggle<T: PartialEq>(selected: &mut Vec<T>, value: T) {
    if let Some(pos) = selected.iter().position(|v| *v == value) {
        selected.remove(pos);
    } else {
        selected.push(value);
    }
}

/// Mutable query state for the dashboard session.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryState {
    project: Option<ProjectId>,
    search: String,
    filters: FilterSet,
    page: u32,
}

impl Default for QueryState {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryState {
    pub fn new() -> Self {
        Self {
            project: None,
            search: String::new(),
            filters: FilterSet::default(),
            page: 1,
        }
    }

    pub fn project(&self) -> Option<ProjectId> {
        self.project
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    /// Select a project (or clear the selection). Resets `page` to 1.
    pub fn set_project(&mut self, project: Option<ProjectId>) {
        self.project = project;
        self.page = 1;
    }

    /// Replace the search text. Resets `page` to 1.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    /// Toggle a type filter value. Resets `page` to 1.
    pub fn toggle_type(&mut self, value: ReqType) {
        toggle(&mut self.filters.types, value);
        self.page = 1;
    }

    /// Toggle a status filter value. Resets `page` to 1.
    pub fn toggle_status(&mut self, value: Status) {
        toggle(&mut self.filters.statuses, value);
        self.page = 1;
    }

    /// Toggle a complexity filter value. Resets `page` to 1.
    pub fn toggle_complexity(&mut self, value: Complexity) {
        toggle(&mut self.filters.complexities, value);
        self.page = 1;
    }

    /// Toggle a priority filter value. Resets `page` to 1.
    pub fn toggle_priority(&mut self, value: Priority) {
        toggle(&mut self.filters.priorities, value);
        self.page = 1;
    }

    /// Move the pagination cursor. Leaves every other field untouched.
    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    /// Produce the canonical descriptor for the current state, or `None`
    /// while no valid project is selected (project-scoped fetches must
    /// silently no-op in that state).
    pub fn descriptor(&self) -> Option<QueryDescriptor> {
        Some(QueryDescriptor {
            project: self.project?,
            search: self.search.clone(),
            filters: self.filters.clone(),
            page: self.page,
        })
    }
}

/// Immutable snapshot of a query; fully determines one list request.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryDescriptor {
    pub project: ProjectId,
    pub search: String,
    pub filters: FilterSet,
    pub page: u32,
}

impl QueryDescriptor {
    /// Encode the descriptor as URL query pairs.
    ///
    /// Array-valued filters become repeated keys (`type=UI&type=Security`),
    /// in insertion order. The empty search text is omitted. `stats=true`
    /// asks the server to include pagination totals.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("project", self.project.to_string())];
        if !self.search.is_empty() {
            pairs.push(("search", self.search.clone()));
        }
        for t in &self.filters.types {
            pairs.push(("type", t.to_string()));
        }
        for s in &self.filters.statuses {
            pairs.push(("status", s.to_string()));
        }
        for c in &self.filters.complexities {
            pairs.push(("complexity", c.to_string()));
        }
        for p in &self.filters.priorities {
            pairs.push(("priority", p.to_string()));
        }
        pairs.push(("page", self.page.to_string()));
        pairs.push(("stats", "true".to_string()));
        pairs
    }
}
