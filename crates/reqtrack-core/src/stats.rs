//! Count-by-status aggregation over requirement sets.
//!
//! Pure derivation: no network access, O(n), idempotent. The same function
//! serves both statistic sets the dashboard displays — the server-reported
//! project-wide counts arrive precomputed, while the filtered counts are
//! derived client-side from the page actually returned.

use crate::model::{Requirement, StatsSummary};

/// Summarize a requirement set by status membership.
///
/// `total` is the set length; `Draft` records are counted only there, so
/// `approved + in_review + disapproved <= total` always holds.
pub fn summarize(requirements: &[Requirement]) -> StatsSummary {
    let mut summary = StatsSummary {
        total: requirements.len() as u64,
        ..StatsSummary::default()
    };
    for req in requirements {
        match req.status {
            crate::model::Status::Approved => summary.approved += 1,
            crate::model::Status::Review => summary.in_review += 1,
            crate::model::Status::Disapproved => summary.disapproved += 1,
            crate::model::Status::Draft => {}
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Complexity, Priority, ReqType, Status};
    use chrono::TimeZone;

    fn req(status: Status) -> Requirement {
        Requirement {
            id: "r1".into(),
            text: "text".into(),
            status,
            priority: Priority::Medium,
            complexity: Complexity::Low,
            req_type: ReqType::Functional,
            author: "Jo".into(),
            date: chrono::Utc.with_ymd_and_hms(2024, 1, 5, 0, 0, 0).unwrap(),
            estimated_hours: 1.0,
        }
    }

    #[test]
    fn empty_set_yields_zero_summary() {
        assert_eq!(summarize(&[]), StatsSummary::default());
    }

    #[test]
    fn counts_each_status_bucket() {
        let set = vec![
            req(Status::Approved),
            req(Status::Approved),
            req(Status::Review),
            req(Status::Disapproved),
            req(Status::Draft),
        ];
        let s = summarize(&set);
        assert_eq!(s.total, 5);
        assert_eq!(s.approved, 2);
        assert_eq!(s.in_review, 1);
        assert_eq!(s.disapproved, 1);
    }

    #[test]
    fn draft_is_the_residual_category() {
        let set = vec![req(Status::Draft), req(Status::Draft)];
        let s = summarize(&set);
        assert_eq!(s.total, 2);
        assert_eq!(s.approved + s.in_review + s.disapproved, 0);
    }

    #[test]
    fn summarize_is_idempotent() {
        let set = vec![req(Status::Approved), req(Status::Review)];
        assert_eq!(summarize(&set), summarize(&set));
    }

    #[test]
    fn named_buckets_never_exceed_total() {
        let set = vec![
            req(Status::Approved),
            req(Status::Review),
            req(Status::Disapproved),
            req(Status::Draft),
        ];
        let s = summarize(&set);
        assert!(s.approved + s.in_review + s.disapproved <= s.total);
    }
}
