//! Settings snapshot, JSON interchange, and load-time normalization.
//!
//! The engine consumes a fully resolved snapshot. All defaulting and
//! clamping happens here, once, when the snapshot is built or loaded; the
//! calculation paths never fall back or re-validate at individual read
//! sites.

use eduplan_shared::types::clamp_non_negative;
use eduplan_shared::{AppError, AppResult, PlannerConfig};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::allocation::{SessionsPerHead, Team};
use crate::plan::{PlanBook, PlanRow};
use crate::segments::JobSegment;
use crate::travel::{BandAmounts, BandToggles, PerDiemRules, TravelPolicy};

/// The full configuration snapshot a calculation runs against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerSettings {
    /// Plan year.
    pub year: i32,
    /// Travel fare, band, and per-diem policy.
    pub travel_policy: TravelPolicy,
    /// Job-training segments.
    #[serde(default)]
    pub job_segments: Vec<JobSegment>,
    /// Teams participating in the plan.
    #[serde(default)]
    pub teams: Vec<Team>,
    /// Travel rounds per head per education category.
    #[serde(default)]
    pub sessions_per_head: SessionsPerHead,
    /// Default additive other-cost for job-track rows.
    pub job_default_other_cost: Decimal,
}

impl PlannerSettings {
    /// Builds an empty settings snapshot seeded from configuration
    /// defaults.
    #[must_use]
    pub fn with_defaults(config: &PlannerConfig) -> Self {
        Self {
            year: config.defaults.year,
            travel_policy: TravelPolicy {
                per_diem_rules: PerDiemRules {
                    apply_per_diem: BandToggles::all_on(),
                    apply_lodging: BandToggles::all_on(),
                    per_diem_by_band: BandAmounts {
                        near: config.per_diem.near_amount,
                        far: config.per_diem.far_amount,
                    },
                    far_rank_overrides: std::collections::HashMap::new(),
                    lodging_per_night: config.per_diem.lodging_per_night,
                    default_nights: config.per_diem.default_nights,
                },
                ..TravelPolicy::default()
            },
            job_segments: Vec::new(),
            teams: Vec::new(),
            sessions_per_head: SessionsPerHead {
                customer: config.defaults.sessions_customer,
                non_customer: config.defaults.sessions_non_customer,
            },
            job_default_other_cost: config.defaults.job_default_other_cost,
        }
    }
}

/// Settings plus plan rows, the unit of persistence and bulk interchange.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerSnapshot {
    /// Configuration snapshot.
    pub settings: PlannerSettings,
    /// Plan rows per track.
    #[serde(default)]
    pub plans: PlanBook,
}

impl PlannerSnapshot {
    /// Parses a snapshot from its JSON interchange form.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Import` when the blob is not a valid snapshot.
    pub fn from_json(json: &str) -> AppResult<Self> {
        serde_json::from_str(json).map_err(|e| AppError::Import(e.to_string()))
    }

    /// Serializes the snapshot to its JSON interchange form.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Internal` when serialization fails.
    pub fn to_json(&self) -> AppResult<String> {
        serde_json::to_string(self).map_err(|e| AppError::Internal(e.to_string()))
    }

    /// Clamps every negative numeric field to zero.
    ///
    /// Run once after loading an externally produced snapshot; the engine
    /// assumes non-negative inputs afterwards.
    pub fn normalize(&mut self) {
        let settings = &mut self.settings;

        settings.job_default_other_cost = clamp_non_negative(settings.job_default_other_cost);
        settings.sessions_per_head.customer =
            clamp_non_negative(settings.sessions_per_head.customer);
        settings.sessions_per_head.non_customer =
            clamp_non_negative(settings.sessions_per_head.non_customer);

        let rules = &mut settings.travel_policy.per_diem_rules;
        rules.per_diem_by_band.near = clamp_non_negative(rules.per_diem_by_band.near);
        rules.per_diem_by_band.far = clamp_non_negative(rules.per_diem_by_band.far);
        rules.lodging_per_night = clamp_non_negative(rules.lodging_per_night);
        for amount in rules.far_rank_overrides.values_mut() {
            *amount = clamp_non_negative(*amount);
        }

        for row in settings.travel_policy.fares.values_mut() {
            for fare in row.values_mut() {
                *fare = clamp_non_negative(*fare);
            }
        }

        for segment in &mut settings.job_segments {
            segment.ratio = clamp_non_negative(segment.ratio);
            segment.unit_cost = clamp_non_negative(segment.unit_cost);
        }

        for team in &mut settings.teams {
            team.headcount = clamp_non_negative(team.headcount);
            team.customer_share_pct = clamp_non_negative(team.customer_share_pct);
            team.job_budget_manual = clamp_non_negative(team.job_budget_manual);
        }

        for rows in [
            &mut self.plans.leadership,
            &mut self.plans.job,
            &mut self.plans.hierarchy,
            &mut self.plans.legal,
            &mut self.plans.misc,
        ] {
            for row in rows.iter_mut() {
                normalize_row(row);
            }
        }
    }
}

fn normalize_row(row: &mut PlanRow) {
    row.headcount = clamp_non_negative(row.headcount);
    row.rounds = clamp_non_negative(row.rounds);
    row.unit_cost = clamp_non_negative(row.unit_cost);
    row.other_cost = row.other_cost.map(clamp_non_negative);
}
