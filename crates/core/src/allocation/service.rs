//! Team allocation calculations.

use eduplan_shared::types::round_won;
use rust_decimal::Decimal;

use super::types::{AllocationReport, AllocationTotals, SessionsPerHead, Team, TeamAllocation};
use crate::segments::{JobSegment, SegmentService};
use crate::travel::{TravelPolicy, resolve_travel_cost};

/// Team allocation logic.
pub struct AllocationService;

impl AllocationService {
    /// Allocates tuition and travel costs to each team and sums grand
    /// totals.
    ///
    /// Per team:
    /// - tuition: headcount × non-customer sessions × weighted non-customer
    ///   unit cost. The customer category carries no tuition; its training
    ///   fee is covered on the customer side and only travel is charged.
    /// - travel: one leg to the customer destination and one to the
    ///   non-customer destination, each scaled by headcount and the
    ///   category's sessions per head.
    ///
    /// Every component is rounded to whole won before aggregation; totals
    /// are column sums of the rounded rows.
    #[must_use]
    pub fn allocate(
        teams: &[Team],
        segments: &[JobSegment],
        policy: &TravelPolicy,
        sessions: SessionsPerHead,
    ) -> AllocationReport {
        let unit_non_customer =
            SegmentService::weighted_unit_cost_by_category(segments).non_customer;

        let rows: Vec<TeamAllocation> = teams
            .iter()
            .map(|team| {
                let tuition =
                    round_won(team.headcount * sessions.non_customer * unit_non_customer);

                let customer_leg = round_won(
                    resolve_travel_cost(
                        policy,
                        &team.origin,
                        &team.customer_destination,
                        team.rank_level,
                    ) * team.headcount
                        * sessions.customer,
                );
                let non_customer_leg = round_won(
                    resolve_travel_cost(
                        policy,
                        &team.origin,
                        &team.non_customer_destination,
                        team.rank_level,
                    ) * team.headcount
                        * sessions.non_customer,
                );
                let travel = round_won(customer_leg + non_customer_leg);

                TeamAllocation {
                    id: team.id,
                    team: team.name.clone(),
                    headcount: team.headcount,
                    origin: team.origin.clone(),
                    rank_level: team.rank_level,
                    customer_destination: team.customer_destination.clone(),
                    non_customer_destination: team.non_customer_destination.clone(),
                    sessions_customer: sessions.customer,
                    sessions_non_customer: sessions.non_customer,
                    unit_non_customer,
                    tuition,
                    travel,
                    total: round_won(tuition + travel),
                }
            })
            .collect();

        let totals = AllocationTotals {
            tuition: round_won(rows.iter().map(|r| r.tuition).sum::<Decimal>()),
            travel: round_won(rows.iter().map(|r| r.travel).sum::<Decimal>()),
            total: round_won(rows.iter().map(|r| r.total).sum::<Decimal>()),
        };

        AllocationReport {
            rows,
            totals,
            sessions,
        }
    }
}
