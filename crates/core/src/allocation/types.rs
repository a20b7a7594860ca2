//! Team allocation data types.

use eduplan_shared::types::TeamId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::travel::RankLevel;

/// Travel rounds per head for each education category, applied uniformly
/// across all teams.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SessionsPerHead {
    /// Rounds per head for customer-facing education.
    pub customer: Decimal,
    /// Rounds per head for non-customer education.
    pub non_customer: Decimal,
}

impl Default for SessionsPerHead {
    fn default() -> Self {
        Self {
            customer: Decimal::ONE,
            non_customer: Decimal::ONE,
        }
    }
}

/// A team participating in the training plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    /// Stable identifier.
    pub id: TeamId,
    /// Display name.
    pub name: String,
    /// Planned headcount.
    pub headcount: Decimal,
    /// Travel origin display name, resolved against the travel policy.
    pub origin: String,
    /// Rank level driving far-band per-diem overrides.
    pub rank_level: RankLevel,
    /// Share of customer-facing work, 0-100. Informational only; the
    /// allocation formula does not read it.
    // TODO: confirm with product whether this should scale the travel legs.
    pub customer_share_pct: Decimal,
    /// Destination for customer-facing education travel.
    pub customer_destination: String,
    /// Destination for non-customer education travel.
    pub non_customer_destination: String,
    /// Manually entered job-budget figure, used only for comparison
    /// against the computed job track.
    pub job_budget_manual: Decimal,
}

/// Computed cost allocation for one team.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamAllocation {
    /// Team this row was computed for.
    pub id: TeamId,
    /// Team display name.
    pub team: String,
    /// Headcount used.
    pub headcount: Decimal,
    /// Origin used.
    pub origin: String,
    /// Rank level used.
    pub rank_level: RankLevel,
    /// Customer-leg destination.
    pub customer_destination: String,
    /// Non-customer-leg destination.
    pub non_customer_destination: String,
    /// Customer travel rounds per head applied.
    pub sessions_customer: Decimal,
    /// Non-customer travel rounds per head applied.
    pub sessions_non_customer: Decimal,
    /// Weighted non-customer unit cost used for tuition.
    pub unit_non_customer: Decimal,
    /// Tuition component in whole won. Customer-category education is not
    /// billed a tuition component.
    pub tuition: Decimal,
    /// Travel component in whole won (both legs).
    pub travel: Decimal,
    /// Tuition + travel in whole won.
    pub total: Decimal,
}

/// Grand totals across all teams.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationTotals {
    /// Sum of all tuition components.
    pub tuition: Decimal,
    /// Sum of all travel components.
    pub travel: Decimal,
    /// Sum of all team totals.
    pub total: Decimal,
}

/// Full team allocation result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationReport {
    /// One allocation row per team, in input order.
    pub rows: Vec<TeamAllocation>,
    /// Grand totals.
    pub totals: AllocationTotals,
    /// Sessions-per-head multipliers the rows were computed with.
    pub sessions: SessionsPerHead,
}
