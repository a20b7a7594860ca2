//! Travel policy data types.
//!
//! Fare and band maps are keyed by stable IDs, never by display name.
//! Renaming an origin or destination touches only its `name` attribute;
//! every map keyed by the old entry keeps working unchanged.

use std::collections::HashMap;

use eduplan_shared::types::{DestinationId, OriginId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Coarse distance classification for an origin/destination pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Band {
    /// Short-haul trip; flat per-diem applies.
    #[default]
    Near,
    /// Long-haul trip; rank-indexed per-diem overrides may apply.
    Far,
}

impl std::fmt::Display for Band {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Near => write!(f, "near"),
            Self::Far => write!(f, "far"),
        }
    }
}

/// Rank level of a team's representative member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankLevel {
    /// Entry-level staff.
    Entry,
    /// Associate.
    Associate,
    /// Manager grade or above.
    SeniorOrAbove,
}

impl std::fmt::Display for RankLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Entry => write!(f, "entry"),
            Self::Associate => write!(f, "associate"),
            Self::SeniorOrAbove => write!(f, "senior_or_above"),
        }
    }
}

/// A travel origin (plant, office).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Origin {
    /// Stable identifier.
    pub id: OriginId,
    /// Display name.
    pub name: String,
}

/// A travel destination with its declared default band.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Destination {
    /// Stable identifier.
    pub id: DestinationId,
    /// Display name.
    pub name: String,
    /// Default band, used when no per-pair override exists.
    pub band: Band,
}

/// A boolean switch per band.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct BandToggles {
    /// Switch for the near band.
    pub near: bool,
    /// Switch for the far band.
    pub far: bool,
}

impl BandToggles {
    /// Both bands enabled.
    #[must_use]
    pub const fn all_on() -> Self {
        Self {
            near: true,
            far: true,
        }
    }

    /// Returns the switch for the given band.
    #[must_use]
    pub const fn get(&self, band: Band) -> bool {
        match band {
            Band::Near => self.near,
            Band::Far => self.far,
        }
    }
}

/// An amount per band, in won.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct BandAmounts {
    /// Amount for the near band.
    pub near: Decimal,
    /// Amount for the far band.
    pub far: Decimal,
}

impl BandAmounts {
    /// Returns the amount for the given band.
    #[must_use]
    pub const fn get(&self, band: Band) -> Decimal {
        match band {
            Band::Near => self.near,
            Band::Far => self.far,
        }
    }
}

/// Per-diem and lodging rules, resolved per band.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PerDiemRules {
    /// Whether a per-diem is paid for each band.
    pub apply_per_diem: BandToggles,
    /// Whether lodging is paid for each band.
    pub apply_lodging: BandToggles,
    /// Flat per-diem amount per band.
    pub per_diem_by_band: BandAmounts,
    /// Rank-indexed per-diem for far-band trips. Presence wins over the
    /// flat far amount, even when the override value is zero.
    #[serde(default)]
    pub far_rank_overrides: HashMap<RankLevel, Decimal>,
    /// Lodging cost per night.
    pub lodging_per_night: Decimal,
    /// Number of lodging nights assumed per trip.
    pub default_nights: u32,
}

/// Round-trip fare and band policy for all origin/destination pairs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TravelPolicy {
    /// Declared origins.
    pub origins: Vec<Origin>,
    /// Declared destinations with their default bands.
    pub destinations: Vec<Destination>,
    /// Round-trip fare per origin/destination pair. Missing entries mean a
    /// zero base fare, never an error.
    #[serde(default)]
    pub fares: HashMap<OriginId, HashMap<DestinationId, Decimal>>,
    /// Per-pair band overrides taking precedence over the destination's
    /// default band.
    #[serde(default)]
    pub band_overrides: HashMap<OriginId, HashMap<DestinationId, Band>>,
    /// Per-diem and lodging rules.
    pub per_diem_rules: PerDiemRules,
}

impl TravelPolicy {
    /// Looks up an origin by display name.
    #[must_use]
    pub fn origin_by_name(&self, name: &str) -> Option<&Origin> {
        self.origins.iter().find(|o| o.name == name)
    }

    /// Looks up a destination by display name.
    #[must_use]
    pub fn destination_by_name(&self, name: &str) -> Option<&Destination> {
        self.destinations.iter().find(|d| d.name == name)
    }

    /// Declares a new origin and returns its ID.
    pub fn add_origin(&mut self, name: impl Into<String>) -> OriginId {
        let id = OriginId::new();
        self.origins.push(Origin {
            id,
            name: name.into(),
        });
        id
    }

    /// Declares a new destination and returns its ID.
    pub fn add_destination(&mut self, name: impl Into<String>, band: Band) -> DestinationId {
        let id = DestinationId::new();
        self.destinations.push(Destination {
            id,
            name: name.into(),
            band,
        });
        id
    }

    /// Sets the round-trip fare for a pair.
    pub fn set_fare(&mut self, origin: OriginId, destination: DestinationId, amount: Decimal) {
        self.fares.entry(origin).or_default().insert(destination, amount);
    }

    /// Overrides the band for a specific pair.
    pub fn set_band_override(&mut self, origin: OriginId, destination: DestinationId, band: Band) {
        self.band_overrides
            .entry(origin)
            .or_default()
            .insert(destination, band);
    }

    /// Renames an origin. Fare and band maps are ID-keyed, so nothing else
    /// needs rewriting.
    pub fn rename_origin(&mut self, id: OriginId, name: impl Into<String>) {
        if let Some(origin) = self.origins.iter_mut().find(|o| o.id == id) {
            origin.name = name.into();
        }
    }

    /// Renames a destination.
    pub fn rename_destination(&mut self, id: DestinationId, name: impl Into<String>) {
        if let Some(dest) = self.destinations.iter_mut().find(|d| d.id == id) {
            dest.name = name.into();
        }
    }

    /// Returns the fare for a pair identified by display names, zero when
    /// either name or the pair itself is unknown.
    #[must_use]
    pub fn fare_by_names(&self, origin_name: &str, destination_name: &str) -> Decimal {
        let Some(origin) = self.origin_by_name(origin_name) else {
            return Decimal::ZERO;
        };
        let Some(dest) = self.destination_by_name(destination_name) else {
            return Decimal::ZERO;
        };
        self.fares
            .get(&origin.id)
            .and_then(|row| row.get(&dest.id))
            .copied()
            .unwrap_or(Decimal::ZERO)
    }
}
