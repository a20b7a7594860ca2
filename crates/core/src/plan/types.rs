//! Plan row and track total data types.

use eduplan_shared::types::PlanRowId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The five training tracks, each with independent plan rows and totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Track {
    /// Leadership development.
    Leadership,
    /// Job-specific training (segment-blended unit costs, other costs).
    Job,
    /// Hierarchy-common training.
    Hierarchy,
    /// Legally mandated training.
    Legal,
    /// Miscellaneous.
    Misc,
}

impl Track {
    /// All tracks in display order.
    pub const ALL: [Self; 5] = [
        Self::Leadership,
        Self::Job,
        Self::Hierarchy,
        Self::Legal,
        Self::Misc,
    ];
}

/// One planned line within a track.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanRow {
    /// Stable identifier.
    pub id: PlanRowId,
    /// Display name.
    pub name: String,
    /// Planned headcount.
    pub headcount: Decimal,
    /// Number of sessions per head.
    pub rounds: Decimal,
    /// Unit cost per head per session, in won. Zero on a job-track row
    /// means "use the blended segment unit cost".
    pub unit_cost: Decimal,
    /// Additive other cost (job track only). `None` falls back to the
    /// configured default.
    #[serde(default)]
    pub other_cost: Option<Decimal>,
}

impl PlanRow {
    /// Creates a plan row with a fresh ID and no other-cost override.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        headcount: Decimal,
        rounds: Decimal,
        unit_cost: Decimal,
    ) -> Self {
        Self {
            id: PlanRowId::new(),
            name: name.into(),
            headcount,
            rounds,
            unit_cost,
            other_cost: None,
        }
    }
}

/// One computed line of a track total.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackLine {
    /// Plan row this line was computed from.
    pub id: PlanRowId,
    /// Headcount used.
    pub headcount: Decimal,
    /// Sessions per head used.
    pub rounds: Decimal,
    /// Unit cost used (after any blended-cost fallback).
    pub unit_cost: Decimal,
    /// Additive other cost applied (zero outside the job track).
    pub other_cost: Decimal,
    /// Rounded line cost in whole won.
    pub cost: Decimal,
}

/// Computed total for a generic track.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackTotal {
    /// Per-row cost lines.
    pub items: Vec<TrackLine>,
    /// Sum of the rounded line costs. Never re-rounded.
    pub total: Decimal,
}

/// Computed total for the job track.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobTrackTotal {
    /// Per-row cost lines.
    pub items: Vec<TrackLine>,
    /// Sum of the rounded line costs. Never re-rounded.
    pub total: Decimal,
    /// Blended segment unit cost used for rows without an explicit one.
    pub blended_unit_cost: Decimal,
}

/// Plan rows for every track.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanBook {
    /// Leadership track rows.
    #[serde(default)]
    pub leadership: Vec<PlanRow>,
    /// Job track rows.
    #[serde(default)]
    pub job: Vec<PlanRow>,
    /// Hierarchy-common track rows.
    #[serde(default)]
    pub hierarchy: Vec<PlanRow>,
    /// Legal-mandatory track rows.
    #[serde(default)]
    pub legal: Vec<PlanRow>,
    /// Miscellaneous track rows.
    #[serde(default)]
    pub misc: Vec<PlanRow>,
}

impl PlanBook {
    /// Returns the rows for a track.
    #[must_use]
    pub fn rows(&self, track: Track) -> &[PlanRow] {
        match track {
            Track::Leadership => &self.leadership,
            Track::Job => &self.job,
            Track::Hierarchy => &self.hierarchy,
            Track::Legal => &self.legal,
            Track::Misc => &self.misc,
        }
    }
}
