//! Fare, band, and per-diem resolution for origin/destination pairs.

pub mod resolver;
pub mod types;

#[cfg(test)]
mod props;

pub use resolver::{band_for_pair, resolve_travel_cost};
pub use types::{
    Band, BandAmounts, BandToggles, Destination, Origin, PerDiemRules, RankLevel, TravelPolicy,
};
