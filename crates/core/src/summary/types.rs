//! Plan summary data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::allocation::AllocationReport;
use crate::plan::{JobTrackTotal, Track, TrackTotal};

/// Computed totals for every track plus the team allocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanSummaries {
    /// Leadership track total.
    pub leadership: TrackTotal,
    /// Job track total (segment-blended).
    pub job: JobTrackTotal,
    /// Hierarchy-common track total.
    pub hierarchy: TrackTotal,
    /// Legal-mandatory track total.
    pub legal: TrackTotal,
    /// Miscellaneous track total.
    pub misc: TrackTotal,
    /// Per-team allocation.
    pub team_allocation: AllocationReport,
}

/// Total cost per track.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackTotals {
    /// Leadership track.
    pub leadership: Decimal,
    /// Job track.
    pub job: Decimal,
    /// Hierarchy-common track.
    pub hierarchy: Decimal,
    /// Legal-mandatory track.
    pub legal: Decimal,
    /// Miscellaneous track.
    pub misc: Decimal,
}

impl TrackTotals {
    /// Returns the total for a track.
    #[must_use]
    pub const fn get(&self, track: Track) -> Decimal {
        match track {
            Track::Leadership => self.leadership,
            Track::Job => self.job,
            Track::Hierarchy => self.hierarchy,
            Track::Legal => self.legal,
            Track::Misc => self.misc,
        }
    }
}

/// Overall budget view across all tracks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BudgetOverview {
    /// Total per track.
    pub by_track: TrackTotals,
    /// Sum across all tracks.
    pub overall_budget: Decimal,
}

/// Computed job track vs manually entered team job budgets.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct JobBudgetComparison {
    /// Computed job track total.
    pub planned: Decimal,
    /// Sum of the teams' manually entered job budgets.
    pub allocated_manual: Decimal,
    /// `allocated_manual - planned`.
    pub difference: Decimal,
}
