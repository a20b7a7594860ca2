//! Currency-amount helpers with decimal precision.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! All amounts are `rust_decimal::Decimal` in whole won.
//!
//! Every place a cost is finalized rounds through [`round_won`] so the whole
//! engine shares one tie-break rule (half away from zero). Totals are sums
//! of already-rounded line amounts and are never re-rounded differently.

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;

/// Rounds an amount to whole won, half away from zero.
#[must_use]
pub fn round_won(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Converts a percentage (0-100) to its fractional weight.
#[must_use]
pub fn pct(percent: Decimal) -> Decimal {
    percent / Decimal::ONE_HUNDRED
}

/// Clamps a negative amount to zero.
///
/// Applied once when a snapshot is loaded; the engine itself assumes
/// non-negative inputs after that.
#[must_use]
pub fn clamp_non_negative(amount: Decimal) -> Decimal {
    if amount.is_sign_negative() {
        Decimal::ZERO
    } else {
        amount
    }
}
