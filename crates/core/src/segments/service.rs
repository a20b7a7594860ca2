//! Weighted unit-cost calculations over job segments.

use eduplan_shared::types::pct;
use rust_decimal::Decimal;

use super::types::{CategoryUnitCosts, JobSegment, SegmentCategory};

/// Segment blending logic.
pub struct SegmentService;

impl SegmentService {
    /// Computes the ratio-weighted average unit cost per category.
    ///
    /// Within each category: `Σ(ratio × unit_cost) / Σ(ratio)`. A category
    /// whose ratio sum is zero yields zero, not a division error.
    #[must_use]
    pub fn weighted_unit_cost_by_category(segments: &[JobSegment]) -> CategoryUnitCosts {
        let mut customer = (Decimal::ZERO, Decimal::ZERO);
        let mut non_customer = (Decimal::ZERO, Decimal::ZERO);

        for segment in segments {
            let acc = match segment.category {
                SegmentCategory::Customer => &mut customer,
                SegmentCategory::NonCustomer => &mut non_customer,
            };
            acc.0 += segment.ratio * segment.unit_cost;
            acc.1 += segment.ratio;
        }

        CategoryUnitCosts {
            customer: Self::safe_ratio(customer.0, customer.1),
            non_customer: Self::safe_ratio(non_customer.0, non_customer.1),
        }
    }

    /// Computes the single blended unit cost across all segments,
    /// `Σ((ratio / 100) × unit_cost)`, ignoring category.
    ///
    /// Used as the fallback unit cost for job-track plan rows that do not
    /// carry an explicit unit cost. Assumes ratios are percentages of the
    /// whole program (validated upstream to sum to 100).
    #[must_use]
    pub fn blended_unit_cost(segments: &[JobSegment]) -> Decimal {
        segments
            .iter()
            .map(|s| pct(s.ratio) * s.unit_cost)
            .sum()
    }

    fn safe_ratio(numerator: Decimal, denominator: Decimal) -> Decimal {
        if denominator.is_zero() {
            Decimal::ZERO
        } else {
            numerator / denominator
        }
    }
}
