//! Shared query arguments for the `list` and `export` subcommands.
//!
//! Filter values arrive as repeatable flags (`--status approved --status
//! review`) and map onto the core enums; the mapping enums exist so clap can
//! render kebab-case value lists in `--help`.

use clap::{Args, ValueEnum};

use reqtrack_core::{Complexity, Priority, ProjectId, QueryState, ReqType, Status};

/// Search, filter, and pagination flags shared by list-shaped subcommands.
#[derive(Args, Debug)]
pub struct QueryArgs {
    /// Project to query (positive integer id).
    #[arg(long)]
    pub project: i64,

    /// Free-text search over requirement text.
    #[arg(long, default_value = "")]
    pub search: String,

    /// Filter by requirement type. Repeatable.
    #[arg(long = "type", value_enum)]
    pub types: Vec<TypeArg>,

    /// Filter by status. Repeatable.
    #[arg(long = "status", value_enum)]
    pub statuses: Vec<StatusArg>,

    /// Filter by complexity. Repeatable.
    #[arg(long = "complexity", value_enum)]
    pub complexities: Vec<ComplexityArg>,

    /// Filter by priority. Repeatable.
    #[arg(long = "priority", value_enum)]
    pub priorities: Vec<PriorityArg>,

    /// Page of results to fetch.
    #[arg(long, default_value_t = 1)]
    pub page: u32,
}

impl QueryArgs {
    /// Validated project id, or `None` for a non-positive value.
    pub fn project_id(&self) -> Option<ProjectId> {
        ProjectId::new(self.project)
    }

    /// Assemble the query state these flags describe.
    ///
    /// Mutation order matters: the page flag is applied last because every
    /// filter or search mutation resets the cursor to page 1.
    pub fn to_query_state(&self) -> QueryState {
        let mut query = QueryState::new();
        query.set_project(self.project_id());
        query.set_search(self.search.clone());
        for t in &self.types {
            query.toggle_type((*t).into());
        }
        for s in &self.statuses {
            query.toggle_status((*s).into());
        }
        for c in &self.complexities {
            query.toggle_complexity((*c).into());
        }
        for p in &self.priorities {
            query.toggle_priority((*p).into());
        }
        query.set_page(self.page);
        query
    }
}

/// Requirement type filter values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TypeArg {
    Functional,
    NonFunctional,
    Ui,
    Security,
    Performance,
}

impl From<TypeArg> for ReqType {
    fn from(arg: TypeArg) -> Self {
        match arg {
            TypeArg::Functional => Self::Functional,
            TypeArg::NonFunctional => Self::NonFunctional,
            TypeArg::Ui => Self::Ui,
            TypeArg::Security => Self::Security,
            TypeArg::Performance => Self::Performance,
        }
    }
}

/// Status filter values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    Draft,
    Review,
    Approved,
    Disapproved,
}

impl From<StatusArg> for Status {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Draft => Self::Draft,
            StatusArg::Review => Self::Review,
            StatusArg::Approved => Self::Approved,
            StatusArg::Disapproved => Self::Disapproved,
        }
    }
}

/// Complexity filter values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ComplexityArg {
    Low,
    Moderate,
    High,
}

impl From<ComplexityArg> for Complexity {
    fn from(arg: ComplexityArg) -> Self {
        match arg {
            ComplexityArg::Low => Self::Low,
            ComplexityArg::Moderate => Self::Moderate,
            ComplexityArg::High => Self::High,
        }
    }
}

/// Priority filter values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PriorityArg {
    Low,
    Medium,
    High,
}

impl From<PriorityArg> for Priority {
    fn from(arg: PriorityArg) -> Self {
        match arg {
            PriorityArg::Low => Self::Low,
            PriorityArg::Medium => Self::Medium,
            PriorityArg::High => Self::High,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> QueryArgs {
        QueryArgs {
            project: 1,
            search: "auth".into(),
            types: vec![TypeArg::Ui, TypeArg::Security],
            statuses: vec![StatusArg::Approved],
            complexities: vec![],
            priorities: vec![PriorityArg::High],
            page: 3,
        }
    }

    #[test]
    fn query_state_keeps_requested_page() {
        let query = args().to_query_state();
        assert_eq!(query.page(), 3);
        assert_eq!(query.search(), "auth");
        assert_eq!(query.filters().types, vec![ReqType::Ui, ReqType::Security]);
        assert_eq!(query.filters().statuses, vec![Status::Approved]);
        assert_eq!(query.filters().priorities, vec![Priority::High]);
    }

    #[test]
    fn non_positive_project_yields_no_descriptor() {
        let mut a = args();
        a.project = 0;
        assert!(a.project_id().is_none());
        assert!(a.to_query_state().descriptor().is_none());
    }
}
