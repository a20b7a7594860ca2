//! Track total calculations.
//!
//! Rounding discipline: each line cost is rounded to whole won, then the
//! total is the exact sum of the rounded lines. The aggregate is never
//! rounded a second time, so `total == Σ item.cost` holds exactly.

use eduplan_shared::types::round_won;
use rust_decimal::Decimal;

use super::types::{JobTrackTotal, PlanRow, TrackLine, TrackTotal};
use crate::segments::{JobSegment, SegmentService};

/// Track total calculations.
pub struct TrackService;

impl TrackService {
    /// Computes the total for a generic track:
    /// `cost = round(headcount × rounds × unit_cost)` per row.
    #[must_use]
    pub fn simple_total(rows: &[PlanRow]) -> TrackTotal {
        let items: Vec<TrackLine> = rows
            .iter()
            .map(|row| TrackLine {
                id: row.id,
                headcount: row.headcount,
                rounds: row.rounds,
                unit_cost: row.unit_cost,
                other_cost: Decimal::ZERO,
                cost: round_won(row.headcount * row.rounds * row.unit_cost),
            })
            .collect();

        let total = items.iter().map(|i| i.cost).sum();
        TrackTotal { items, total }
    }

    /// Computes the job track total.
    ///
    /// A row without an explicit unit cost uses the blended segment unit
    /// cost; each row adds its other cost (the configured default when the
    /// row does not override it).
    #[must_use]
    pub fn job_total(
        rows: &[PlanRow],
        segments: &[JobSegment],
        default_other_cost: Decimal,
    ) -> JobTrackTotal {
        let blended_unit_cost = SegmentService::blended_unit_cost(segments);

        let items: Vec<TrackLine> = rows
            .iter()
            .map(|row| {
                let unit_cost = if row.unit_cost.is_zero() {
                    blended_unit_cost
                } else {
                    row.unit_cost
                };
                let other_cost = row.other_cost.unwrap_or(default_other_cost);
                TrackLine {
                    id: row.id,
                    headcount: row.headcount,
                    rounds: row.rounds,
                    unit_cost,
                    other_cost,
                    cost: round_won(row.headcount * row.rounds * unit_cost + other_cost),
                }
            })
            .collect();

        let total = items.iter().map(|i| i.cost).sum();
        JobTrackTotal {
            items,
            total,
            blended_unit_cost,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segments::SegmentCategory;
    use rust_decimal_macros::dec;

    #[test]
    fn test_simple_total_rounds_per_row() {
        let rows = vec![
            PlanRow::new("core leaders", dec!(3), dec!(2), dec!(680000.25)),
            PlanRow::new("middle managers", dec!(5), dec!(1), dec!(620000.25)),
        ];

        let result = TrackService::simple_total(&rows);
        // 3 * 2 * 680000.25 = 4080001.5 -> 4080002 (half away from zero)
        assert_eq!(result.items[0].cost, dec!(4080002));
        // 5 * 1 * 620000.25 = 3100001.25 -> 3100001
        assert_eq!(result.items[1].cost, dec!(3100001));
        assert_eq!(result.total, dec!(7180003));
    }

    #[test]
    fn test_total_equals_sum_of_rounded_items() {
        let rows = vec![
            PlanRow::new("a", dec!(7), dec!(3), dec!(33333.33)),
            PlanRow::new("b", dec!(11), dec!(2), dec!(12500.05)),
            PlanRow::new("c", dec!(2), dec!(4), dec!(99999.99)),
        ];

        let result = TrackService::simple_total(&rows);
        let summed: Decimal = result.items.iter().map(|i| i.cost).sum();
        assert_eq!(result.total, summed);
    }

    #[test]
    fn test_empty_track_is_zero() {
        let result = TrackService::simple_total(&[]);
        assert!(result.items.is_empty());
        assert_eq!(result.total, Decimal::ZERO);
    }

    #[test]
    fn test_job_row_falls_back_to_blended_unit_cost() {
        let segments = vec![
            JobSegment::new("oem", dec!(60), dec!(400000), SegmentCategory::Customer),
            JobSegment::new("academy", dec!(40), dec!(250000), SegmentCategory::NonCustomer),
        ];
        // Blended: 0.6*400000 + 0.4*250000 = 340000
        let rows = vec![PlanRow::new("job plan", dec!(10), dec!(1), dec!(0))];

        let result = TrackService::job_total(&rows, &segments, dec!(0));
        assert_eq!(result.blended_unit_cost, dec!(340000));
        assert_eq!(result.items[0].unit_cost, dec!(340000));
        assert_eq!(result.items[0].cost, dec!(3400000));
    }

    #[test]
    fn test_job_row_explicit_unit_cost_wins() {
        let segments = vec![JobSegment::new(
            "academy",
            dec!(100),
            dec!(250000),
            SegmentCategory::NonCustomer,
        )];
        let rows = vec![PlanRow::new("job plan", dec!(4), dec!(2), dec!(100000))];

        let result = TrackService::job_total(&rows, &segments, dec!(0));
        assert_eq!(result.items[0].unit_cost, dec!(100000));
        assert_eq!(result.items[0].cost, dec!(800000));
    }

    #[test]
    fn test_job_other_cost_defaults_and_overrides() {
        let mut with_override = PlanRow::new("override", dec!(1), dec!(1), dec!(100000));
        with_override.other_cost = Some(dec!(750000));
        let without = PlanRow::new("default", dec!(1), dec!(1), dec!(100000));

        let result = TrackService::job_total(&[with_override, without], &[], dec!(5000000));
        assert_eq!(result.items[0].cost, dec!(850000));
        assert_eq!(result.items[1].cost, dec!(5100000));
    }
}
