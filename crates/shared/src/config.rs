//! Application configuration management.
//!
//! Planner defaults live here and are resolved once at load time. The
//! engine never falls back at individual read sites; a settings snapshot
//! built from this configuration is already fully defaulted.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlannerConfig {
    /// Planner defaults for a fresh settings snapshot.
    #[serde(default)]
    pub defaults: DefaultsConfig,
    /// Per-diem and lodging defaults.
    #[serde(default)]
    pub per_diem: PerDiemConfig,
}

/// Planner defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct DefaultsConfig {
    /// Plan year.
    #[serde(default = "default_year")]
    pub year: i32,
    /// Default additive other-cost for job-track rows, in won.
    #[serde(default = "default_job_other_cost")]
    pub job_default_other_cost: Decimal,
    /// Travel rounds per head for the customer education category.
    #[serde(default = "default_sessions")]
    pub sessions_customer: Decimal,
    /// Travel rounds per head for the non-customer education category.
    #[serde(default = "default_sessions")]
    pub sessions_non_customer: Decimal,
}

/// Per-diem and lodging defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct PerDiemConfig {
    /// Flat per-diem for near-band trips, in won.
    #[serde(default = "default_per_diem_near")]
    pub near_amount: Decimal,
    /// Flat per-diem for far-band trips, in won (0: rank overrides apply).
    #[serde(default)]
    pub far_amount: Decimal,
    /// Lodging cost per night, in won.
    #[serde(default = "default_lodging_per_night")]
    pub lodging_per_night: Decimal,
    /// Number of lodging nights assumed per trip.
    #[serde(default = "default_nights")]
    pub default_nights: u32,
}

fn default_year() -> i32 {
    2026
}

fn default_job_other_cost() -> Decimal {
    Decimal::from(5_000_000_u32)
}

fn default_sessions() -> Decimal {
    Decimal::ONE
}

fn default_per_diem_near() -> Decimal {
    Decimal::from(30_000_u32)
}

fn default_lodging_per_night() -> Decimal {
    Decimal::from(60_000_u32)
}

fn default_nights() -> u32 {
    1
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            year: default_year(),
            job_default_other_cost: default_job_other_cost(),
            sessions_customer: default_sessions(),
            sessions_non_customer: default_sessions(),
        }
    }
}

impl Default for PerDiemConfig {
    fn default() -> Self {
        Self {
            near_amount: default_per_diem_near(),
            far_amount: Decimal::ZERO,
            lodging_per_night: default_lodging_per_night(),
            default_nights: default_nights(),
        }
    }
}

impl PlannerConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("EDUPLAN").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
