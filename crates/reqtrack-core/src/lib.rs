//! # reqtrack-core — Foundational Types for the Requirements Dashboard
//!
//! This crate is the leaf of the reqtrack workspace DAG. It defines the
//! domain model (projects, requirements, statistics), the canonical query
//! state, and the pure derivation engines (stats aggregation, cost model,
//! CSV export). Every other crate depends on `reqtrack-core`; it depends on
//! nothing internal and performs no I/O.
//!
//! ## Key Design Principles
//!
//! 1. **Validated identifiers.** A [`ProjectId`] is only constructible from
//!    a positive integer. Project-scoped operations take `Option<ProjectId>`
//!    so "no project selected" is unrepresentable as a bad id.
//!
//! 2. **Canonical query descriptors.** All list requests are described by a
//!    [`QueryDescriptor`] produced from [`QueryState`]; the descriptor fully
//!    determines the request, including deterministic filter ordering.
//!
//! 3. **Pure derivations.** Stats summaries and cost figures are recomputed
//!    from requirement sets, never stored or incrementally patched.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `reqtrack-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize` where they cross the wire.

pub mod cost;
pub mod export;
pub mod model;
pub mod query;
pub mod stats;

// Re-export primary types for ergonomic imports.
pub use cost::{aggregate_cost, cost_of};
pub use export::{export_filename, render_csv};
pub use model::{
    Complexity, CostSummary, PaginationState, Priority, Project, ProjectId, ReqType, Requirement,
    StatsSummary, Status,
};
pub use query::{FilterSet, QueryDescriptor, QueryState};
pub use stats::summarize;
