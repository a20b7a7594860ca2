//! Property-based tests for travel cost resolution.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::resolver::{band_for_pair, resolve_travel_cost};
use super::types::{Band, BandAmounts, BandToggles, PerDiemRules, RankLevel, TravelPolicy};

/// Strategy to generate non-negative won amounts (0 to 1,000,000).
fn won_amount() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000i64).prop_map(Decimal::from)
}

/// Strategy to generate a rank level.
fn rank_level() -> impl Strategy<Value = RankLevel> {
    prop_oneof![
        Just(RankLevel::Entry),
        Just(RankLevel::Associate),
        Just(RankLevel::SeniorOrAbove),
    ]
}

/// Strategy to generate a band.
fn band() -> impl Strategy<Value = Band> {
    prop_oneof![Just(Band::Near), Just(Band::Far)]
}

fn policy_with(
    fare: Decimal,
    dest_band: Band,
    per_diem_near: Decimal,
    per_diem_far: Decimal,
    lodging_per_night: Decimal,
    nights: u32,
) -> TravelPolicy {
    let mut policy = TravelPolicy {
        per_diem_rules: PerDiemRules {
            apply_per_diem: BandToggles::all_on(),
            apply_lodging: BandToggles::all_on(),
            per_diem_by_band: BandAmounts {
                near: per_diem_near,
                far: per_diem_far,
            },
            far_rank_overrides: std::collections::HashMap::new(),
            lodging_per_night,
            default_nights: nights,
        },
        ..TravelPolicy::default()
    };
    let origin = policy.add_origin("HQ");
    let dest = policy.add_destination("Seoul", dest_band);
    policy.set_fare(origin, dest, fare);
    policy
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// The resolver is total: any pair of names and any rank produce a
    /// non-negative amount, never a panic.
    #[test]
    fn prop_resolver_is_total(
        origin_name in ".{0,16}",
        dest_name in ".{0,16}",
        rank in rank_level(),
        fare in won_amount(),
        dest_band in band(),
    ) {
        let policy = policy_with(
            fare,
            dest_band,
            Decimal::from(30_000),
            Decimal::ZERO,
            Decimal::from(60_000),
            1,
        );
        let cost = resolve_travel_cost(&policy, &origin_name, &dest_name, rank);
        prop_assert!(cost >= Decimal::ZERO);
    }

    /// Resolution is deterministic for identical inputs.
    #[test]
    fn prop_resolver_is_deterministic(
        fare in won_amount(),
        rank in rank_level(),
        dest_band in band(),
    ) {
        let policy = policy_with(
            fare,
            dest_band,
            Decimal::from(30_000),
            Decimal::from(10_000),
            Decimal::from(60_000),
            2,
        );
        let first = resolve_travel_cost(&policy, "HQ", "Seoul", rank);
        let second = resolve_travel_cost(&policy, "HQ", "Seoul", rank);
        prop_assert_eq!(first, second);
    }

    /// With per-diem and lodging disabled the result is exactly the base
    /// fare for a known pair.
    #[test]
    fn prop_disabled_rules_leave_base_fare(
        fare in won_amount(),
        rank in rank_level(),
        dest_band in band(),
    ) {
        let mut policy = policy_with(
            fare,
            dest_band,
            Decimal::from(30_000),
            Decimal::from(10_000),
            Decimal::from(60_000),
            1,
        );
        policy.per_diem_rules.apply_per_diem = BandToggles::default();
        policy.per_diem_rules.apply_lodging = BandToggles::default();

        let cost = resolve_travel_cost(&policy, "HQ", "Seoul", rank);
        prop_assert_eq!(cost, fare);
    }

    /// An unknown destination always resolves to the near band.
    #[test]
    fn prop_unknown_destination_is_near(
        dest_name in "[a-z]{1,12}",
        fare in won_amount(),
    ) {
        let policy = policy_with(
            fare,
            Band::Far,
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::ZERO,
            0,
        );
        prop_assume!(policy.destination_by_name(&dest_name).is_none());
        prop_assert_eq!(band_for_pair(&policy, "HQ", &dest_name), Band::Near);
    }
}
