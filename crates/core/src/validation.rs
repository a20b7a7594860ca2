//! Upstream validation for imported settings.
//!
//! The calculation engine itself never fails; these checks run at import
//! time so bad bulk-upload data surfaces as a diagnostic instead of a
//! silently zeroed figure. An unresolved origin or destination is still a
//! legal engine input (it resolves to a zero fare) — flagging it here is a
//! courtesy to the administrator, not a precondition.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::segments::JobSegment;
use crate::settings::PlannerSettings;

/// Tolerance for the segment ratio sum, in percentage points.
const RATIO_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 1); // 0.1

/// Validation diagnostics for imported settings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Segment ratios must sum to 100 (within tolerance).
    #[error("Job segment ratios must sum to 100, got {total}")]
    RatioSum {
        /// The actual ratio sum.
        total: Decimal,
    },

    /// A team references an origin the travel policy does not declare.
    #[error("Team '{team}' references unknown origin '{origin}'")]
    UnknownOrigin {
        /// Team display name.
        team: String,
        /// The unresolved origin name.
        origin: String,
    },

    /// A team references a destination the travel policy does not declare.
    #[error("Team '{team}' references unknown destination '{destination}'")]
    UnknownDestination {
        /// Team display name.
        team: String,
        /// The unresolved destination name.
        destination: String,
    },
}

/// Checks that segment ratios sum to 100 within ±0.1.
///
/// # Errors
///
/// Returns `ValidationError::RatioSum` when they do not.
pub fn validate_segment_ratios(segments: &[JobSegment]) -> Result<(), ValidationError> {
    let total: Decimal = segments.iter().map(|s| s.ratio).sum();
    if (total - Decimal::ONE_HUNDRED).abs() < RATIO_TOLERANCE {
        Ok(())
    } else {
        Err(ValidationError::RatioSum { total })
    }
}

/// Validates a full settings snapshot: segment ratios plus team
/// origin/destination resolution.
///
/// # Errors
///
/// Returns the first diagnostic found.
pub fn validate_settings(settings: &PlannerSettings) -> Result<(), ValidationError> {
    validate_segment_ratios(&settings.job_segments)?;

    let policy = &settings.travel_policy;
    for team in &settings.teams {
        if policy.origin_by_name(&team.origin).is_none() {
            return Err(ValidationError::UnknownOrigin {
                team: team.name.clone(),
                origin: team.origin.clone(),
            });
        }
        for destination in [&team.customer_destination, &team.non_customer_destination] {
            if policy.destination_by_name(destination).is_none() {
                return Err(ValidationError::UnknownDestination {
                    team: team.name.clone(),
                    destination: destination.clone(),
                });
            }
        }
    }

    Ok(())
}
