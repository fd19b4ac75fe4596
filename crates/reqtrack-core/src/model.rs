//! # Domain Model
//!
//! Core records exchanged with the remote dashboard API. Field names follow
//! the wire format (camelCase) via serde attributes; enum variants carry the
//! exact wire spellings.
//!
//! The enum vocabularies (status, priority, complexity, type) are closed:
//! the remote source is our own API, so an unknown value is a
//! deserialization error rather than a forward-compatible catch-all.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A validated project identifier. Only positive integers are representable.
///
/// The dashboard treats 0, negative, and non-integer ids as "no project
/// selected"; every project-scoped network call must silently no-op in that
/// state. Modeling selection as `Option<ProjectId>` pushes that rule to the
/// type level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(i64);

impl ProjectId {
    /// Create a project id from a raw integer. Returns `None` unless the
    /// value is positive.
    pub fn new(raw: i64) -> Option<Self> {
        (raw > 0).then_some(Self(raw))
    }

    /// Access the underlying integer.
    pub fn get(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A project: a container of requirements with an hourly billing rate.
///
/// Immutable once fetched; the project list is loaded once at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    /// Cost multiplier for all derived figures. Non-negative.
    pub hourly_rate: f64,
}

/// Requirement lifecycle status. `Draft` is the residual category: counted
/// in totals but not in any of the three named buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Draft,
    Review,
    Approved,
    Disapproved,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Review => "Review",
            Self::Approved => "Approved",
            Self::Disapproved => "Disapproved",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Requirement priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Requirement implementation complexity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Complexity {
    Low,
    Moderate,
    High,
}

impl Complexity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }
}

impl std::fmt::Display for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Requirement category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReqType {
    Functional,
    #[serde(rename = "Non-Functional")]
    NonFunctional,
    #[serde(rename = "UI")]
    Ui,
    Security,
    Performance,
}

impl ReqType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Functional => "Functional",
            Self::NonFunctional => "Non-Functional",
            Self::Ui => "UI",
            Self::Security => "Security",
            Self::Performance => "Performance",
        }
    }
}

impl std::fmt::Display for ReqType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single tracked requirement, as returned by the list endpoint.
///
/// Never mutated locally; a new page fetch replaces the whole set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Requirement {
    /// Opaque identifier assigned by the remote source.
    pub id: String,
    pub text: String,
    pub status: Status,
    pub priority: Priority,
    pub complexity: Complexity,
    #[serde(rename = "type")]
    pub req_type: ReqType,
    pub author: String,
    pub date: DateTime<Utc>,
    /// Non-negative time estimate in hours.
    pub estimated_hours: f64,
}

/// Count-by-status summary for a requirement set.
///
/// Invariant: `approved + in_review + disapproved <= total` (Draft is the
/// residual category, counted only in `total`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSummary {
    pub total: u64,
    pub approved: u64,
    pub in_review: u64,
    pub disapproved: u64,
}

/// Derived cost figures for a requirement set. Recomputed whenever the set
/// or the hourly rate changes, never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostSummary {
    pub total_hours: f64,
    pub total_cost: f64,
}

/// Pagination metadata. Authoritative values come from the last successful
/// list response, not from local computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationState {
    pub page: u32,
    pub pages: u32,
    pub total: u64,
}

impl Default for PaginationState {
    fn default() -> Self {
        // The empty dashboard: one (empty) page of zero records.
        Self {
            page: 1,
            pages: 1,
            total: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_id_rejects_non_positive() {
        assert!(ProjectId::new(0).is_none());
        assert!(ProjectId::new(-7).is_none());
        assert_eq!(ProjectId::new(3).map(|p| p.get()), Some(3));
    }

    #[test]
    fn req_type_wire_spellings() {
        assert_eq!(
            serde_json::to_string(&ReqType::NonFunctional).unwrap(),
            "\"Non-Functional\""
        );
        assert_eq!(serde_json::to_string(&ReqType::Ui).unwrap(), "\"UI\"");
        let back: ReqType = serde_json::from_str("\"Non-Functional\"").unwrap();
        assert_eq!(back, ReqType::NonFunctional);
    }

    #[test]
    fn unknown_status_is_an_error() {
        let result: Result<Status, _> = serde_json::from_str("\"Shipped\"");
        assert!(result.is_err());
    }

    #[test]
    fn requirement_deserializes_from_wire_shape() {
        let json = serde_json::json!({
            "id": "abc123",
            "text": "The system shall log in users",
            "status": "Approved",
            "priority": "High",
            "complexity": "Low",
            "type": "Functional",
            "author": "Jo",
            "date": "2024-01-05T00:00:00Z",
            "estimatedHours": 2.0
        });
        let req: Requirement = serde_json::from_value(json).unwrap();
        assert_eq!(req.id, "abc123");
        assert_eq!(req.status, Status::Approved);
        assert_eq!(req.req_type, ReqType::Functional);
        assert_eq!(req.estimated_hours, 2.0);
    }

    #[test]
    fn pagination_default_is_single_empty_page() {
        let p = PaginationState::default();
        assert_eq!((p.page, p.pages, p.total), (1, 1, 0));
    }

    #[test]
    fn stats_summary_wire_names_are_camel_case() {
        let s = StatsSummary {
            total: 4,
            approved: 1,
            in_review: 2,
            disapproved: 1,
        };
        let json = serde_json::to_value(s).unwrap();
        assert_eq!(json["inReview"], 2);
    }
}
