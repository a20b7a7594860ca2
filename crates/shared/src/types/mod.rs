//! Common types used across the application.

pub mod amount;
pub mod id;

pub use amount::{clamp_non_negative, pct, round_won};
pub use id::*;
