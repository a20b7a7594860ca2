//! Round-trip travel cost resolution.
//!
//! The resolver is total over its input domain: unknown names, missing fare
//! entries, and missing band overrides all degrade to zero contributions or
//! the near-band default, never an error.

use rust_decimal::Decimal;

use super::types::{Band, RankLevel, TravelPolicy};

/// Resolves the band for an origin/destination pair.
///
/// Precedence: per-pair override, then the destination's declared default
/// band, then [`Band::Near`] for unknown destinations.
#[must_use]
pub fn band_for_pair(policy: &TravelPolicy, origin_name: &str, destination_name: &str) -> Band {
    let dest = policy.destination_by_name(destination_name);

    if let (Some(origin), Some(dest)) = (policy.origin_by_name(origin_name), dest) {
        if let Some(band) = policy
            .band_overrides
            .get(&origin.id)
            .and_then(|row| row.get(&dest.id))
        {
            return *band;
        }
    }

    dest.map_or(Band::default(), |d| d.band)
}

/// Resolves one round-trip travel cost: base fare + per-diem + lodging.
///
/// For far-band trips a rank-indexed per-diem override takes precedence
/// over the flat far amount whenever an entry exists for the rank, even
/// when that entry is zero.
#[must_use]
pub fn resolve_travel_cost(
    policy: &TravelPolicy,
    origin_name: &str,
    destination_name: &str,
    rank: RankLevel,
) -> Decimal {
    let base = policy.fare_by_names(origin_name, destination_name);
    let band = band_for_pair(policy, origin_name, destination_name);
    let rules = &policy.per_diem_rules;

    let per_diem = if rules.apply_per_diem.get(band) {
        match band {
            Band::Far => rules
                .far_rank_overrides
                .get(&rank)
                .copied()
                .unwrap_or(rules.per_diem_by_band.far),
            Band::Near => rules.per_diem_by_band.near,
        }
    } else {
        Decimal::ZERO
    };

    let lodging = if rules.apply_lodging.get(band) {
        rules.lodging_per_night * Decimal::from(rules.default_nights)
    } else {
        Decimal::ZERO
    };

    base + per_diem + lodging
}
