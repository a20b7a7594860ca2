//! Whole-plan summary calculations.

use rust_decimal::Decimal;

use super::types::{BudgetOverview, JobBudgetComparison, PlanSummaries, TrackTotals};
use crate::allocation::{AllocationService, Team};
use crate::plan::{JobTrackTotal, PlanBook, TrackService};
use crate::settings::PlannerSettings;

/// Summary composition over a full settings/plan snapshot.
pub struct SummaryService;

impl SummaryService {
    /// Computes every track total and the team allocation in one pass.
    #[must_use]
    pub fn compute_all(settings: &PlannerSettings, plans: &PlanBook) -> PlanSummaries {
        tracing::debug!(
            year = settings.year,
            teams = settings.teams.len(),
            "computing plan summaries"
        );

        PlanSummaries {
            leadership: TrackService::simple_total(&plans.leadership),
            job: TrackService::job_total(
                &plans.job,
                &settings.job_segments,
                settings.job_default_other_cost,
            ),
            hierarchy: TrackService::simple_total(&plans.hierarchy),
            legal: TrackService::simple_total(&plans.legal),
            misc: TrackService::simple_total(&plans.misc),
            team_allocation: AllocationService::allocate(
                &settings.teams,
                &settings.job_segments,
                &settings.travel_policy,
                settings.sessions_per_head,
            ),
        }
    }

    /// Aggregates the per-track totals into an overall budget figure.
    #[must_use]
    pub fn aggregate_totals(summaries: &PlanSummaries) -> BudgetOverview {
        let by_track = TrackTotals {
            leadership: summaries.leadership.total,
            job: summaries.job.total,
            hierarchy: summaries.hierarchy.total,
            legal: summaries.legal.total,
            misc: summaries.misc.total,
        };
        let overall_budget = by_track.leadership
            + by_track.job
            + by_track.hierarchy
            + by_track.legal
            + by_track.misc;

        BudgetOverview {
            by_track,
            overall_budget,
        }
    }

    /// Compares the computed job track against the sum of the teams'
    /// manually entered job budgets.
    #[must_use]
    pub fn job_budget_comparison(teams: &[Team], job: &JobTrackTotal) -> JobBudgetComparison {
        let allocated_manual: Decimal = teams.iter().map(|t| t.job_budget_manual).sum();

        JobBudgetComparison {
            planned: job.total,
            allocated_manual,
            difference: allocated_manual - job.total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocation::SessionsPerHead;
    use crate::plan::PlanRow;
    use crate::segments::{JobSegment, SegmentCategory};
    use crate::travel::TravelPolicy;
    use eduplan_shared::types::TeamId;
    use rust_decimal_macros::dec;

    fn settings() -> PlannerSettings {
        PlannerSettings {
            year: 2026,
            travel_policy: TravelPolicy::default(),
            job_segments: vec![JobSegment::new(
                "academy",
                dec!(100),
                dec!(200000),
                SegmentCategory::NonCustomer,
            )],
            teams: Vec::new(),
            sessions_per_head: SessionsPerHead::default(),
            job_default_other_cost: dec!(0),
        }
    }

    fn plans() -> PlanBook {
        PlanBook {
            leadership: vec![PlanRow::new("leaders", dec!(3), dec!(2), dec!(680000))],
            job: vec![PlanRow::new("job", dec!(10), dec!(1), dec!(0))],
            hierarchy: vec![PlanRow::new("hier", dec!(5), dec!(1), dec!(210000))],
            legal: vec![PlanRow::new("legal", dec!(100), dec!(1), dec!(15000))],
            misc: Vec::new(),
        }
    }

    #[test]
    fn test_compute_all_covers_every_track() {
        let summaries = SummaryService::compute_all(&settings(), &plans());

        assert_eq!(summaries.leadership.total, dec!(4080000));
        // Blended unit cost 200000 for the job row without an explicit one.
        assert_eq!(summaries.job.total, dec!(2000000));
        assert_eq!(summaries.hierarchy.total, dec!(1050000));
        assert_eq!(summaries.legal.total, dec!(1500000));
        assert_eq!(summaries.misc.total, dec!(0));
        assert!(summaries.team_allocation.rows.is_empty());
    }

    #[test]
    fn test_aggregate_totals_sums_all_tracks() {
        let summaries = SummaryService::compute_all(&settings(), &plans());
        let overview = SummaryService::aggregate_totals(&summaries);

        assert_eq!(overview.by_track.leadership, dec!(4080000));
        assert_eq!(
            overview.overall_budget,
            dec!(4080000) + dec!(2000000) + dec!(1050000) + dec!(1500000)
        );
    }

    #[test]
    fn test_job_budget_comparison() {
        let mut config = settings();
        config.teams = vec![
            team_with_manual_budget(dec!(1200000)),
            team_with_manual_budget(dec!(900000)),
        ];
        let summaries = SummaryService::compute_all(&config, &plans());

        let comparison =
            SummaryService::job_budget_comparison(&config.teams, &summaries.job);
        assert_eq!(comparison.planned, dec!(2000000));
        assert_eq!(comparison.allocated_manual, dec!(2100000));
        assert_eq!(comparison.difference, dec!(100000));
    }

    fn team_with_manual_budget(amount: Decimal) -> Team {
        Team {
            id: TeamId::new(),
            name: "team".to_string(),
            headcount: dec!(0),
            origin: "HQ".to_string(),
            rank_level: crate::travel::RankLevel::Entry,
            customer_share_pct: dec!(50),
            customer_destination: "Seoul".to_string(),
            non_customer_destination: "Seoul".to_string(),
            job_budget_manual: amount,
        }
    }
}
