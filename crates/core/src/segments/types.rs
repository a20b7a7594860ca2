//! Job-training segment data types.

use eduplan_shared::types::SegmentId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Education category of a training segment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentCategory {
    /// Customer-facing training. Tuition for this category is assumed
    /// covered by the customer side; only travel is charged to teams.
    Customer,
    /// Internal (non-customer) training.
    #[default]
    NonCustomer,
}

/// One job-training program type.
///
/// Segments exist only to derive blended unit costs; they are never billed
/// individually.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobSegment {
    /// Stable identifier.
    pub id: SegmentId,
    /// Display name.
    pub name: String,
    /// Relative weight as a percentage (0-100). Ratios are not required to
    /// sum to 100 within a category; they act as relative weights.
    pub ratio: Decimal,
    /// Unit cost per head per session, in won.
    pub unit_cost: Decimal,
    /// Education category; untagged segments count as non-customer.
    #[serde(default)]
    pub category: SegmentCategory,
}

impl JobSegment {
    /// Creates a segment with a fresh ID.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        ratio: Decimal,
        unit_cost: Decimal,
        category: SegmentCategory,
    ) -> Self {
        Self {
            id: SegmentId::new(),
            name: name.into(),
            ratio,
            unit_cost,
            category,
        }
    }
}

/// Ratio-weighted average unit cost per category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryUnitCosts {
    /// Weighted average unit cost of customer-tagged segments.
    pub customer: Decimal,
    /// Weighted average unit cost of non-customer segments.
    pub non_customer: Decimal,
}
