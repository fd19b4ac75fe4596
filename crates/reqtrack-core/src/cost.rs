//! Cost model: time estimates × hourly rate.
//!
//! ## Normalization policy
//!
//! Hours and rates are non-negative by contract; a negative or non-finite
//! input is a caller bug. Rather than propagate NaN or negative costs into
//! displayed figures, inputs are clamped to zero.

use crate::model::{CostSummary, Requirement};

/// Clamp a caller-supplied figure to the non-negative finite range.
fn normalize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Cost of a single line item: `hours × rate`, clamped per the
/// normalization policy.
pub fn cost_of(hours: f64, rate: f64) -> f64 {
    normalize(hours) * normalize(rate)
}

/// Aggregate hours and cost over a requirement set.
///
/// `total_hours = Σ estimated_hours`, `total_cost = total_hours × rate`.
/// Linear in `rate` for a fixed set; the empty set yields `{0, 0}`.
pub fn aggregate_cost(requirements: &[Requirement], rate: f64) -> CostSummary {
    let total_hours: f64 = requirements
        .iter()
        .map(|r| normalize(r.estimated_hours))
        .sum();
    CostSummary {
        total_hours,
        total_cost: total_hours * normalize(rate),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Complexity, Priority, ReqType, Status};
    use chrono::TimeZone;

    pub(super) fn req(hours: f64) -> Requirement {
        Requirement {
            id: "r".into(),
            text: "t".into(),
            status: Status::Draft,
            priority: Priority::Low,
            complexity: Complexity::Low,
            req_type: ReqType::Functional,
            author: "a".into(),
            date: chrono::Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            estimated_hours: hours,
        }
    }

    #[test]
    fn empty_set_costs_nothing() {
        let c = aggregate_cost(&[], 50.0);
        assert_eq!(c.total_hours, 0.0);
        assert_eq!(c.total_cost, 0.0);
    }

    #[test]
    fn sums_hours_and_multiplies_rate() {
        let c = aggregate_cost(&[req(2.0), req(3.5)], 40.0);
        assert_eq!(c.total_hours, 5.5);
        assert_eq!(c.total_cost, 220.0);
    }

    #[test]
    fn negative_and_non_finite_inputs_clamp_to_zero() {
        assert_eq!(cost_of(-3.0, 50.0), 0.0);
        assert_eq!(cost_of(2.0, f64::NAN), 0.0);
        assert_eq!(cost_of(f64::INFINITY, 50.0), 0.0);
        let c = aggregate_cost(&[req(-4.0), req(2.0)], 10.0);
        assert_eq!(c.total_hours, 2.0);
        assert_eq!(c.total_cost, 20.0);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// For fixed hours, aggregate cost is linear in the rate.
        #[test]
        fn aggregate_cost_is_linear_in_rate(
            hours in proptest::collection::vec(0.0f64..1_000.0, 0..10),
            rate in 0.0f64..10_000.0,
            k in 0.0f64..100.0,
        ) {
            let set: Vec<_> = hours.iter().map(|&h| tests::req(h)).collect();
            let base = aggregate_cost(&set, rate);
            let scaled = aggregate_cost(&set, rate * k);
            let tolerance = base.total_cost.abs() * k * 1e-12 + 1e-9;
            prop_assert!((scaled.total_cost - base.total_cost * k).abs() <= tolerance);
            prop_assert_eq!(scaled.total_hours, base.total_hours);
        }

        /// Single-item cost never goes negative or non-finite.
        #[test]
        fn cost_of_is_always_a_finite_non_negative(hours in any::<f64>(), rate in any::<f64>()) {
            let c = cost_of(hours, rate);
            prop_assert!(c.is_finite());
            prop_assert!(c >= 0.0);
        }
    }
}
