//! Cost-allocation engine for Eduplan.
//!
//! This crate contains pure business logic with ZERO web or database
//! dependencies. Every calculation is a deterministic function of the
//! settings/plan snapshot it receives; nothing here mutates its inputs or
//! holds state between calls.
//!
//! # Modules
//!
//! - `travel` - Fare, band, and per-diem resolution for origin/destination pairs
//! - `segments` - Ratio-weighted unit-cost blending by education category
//! - `plan` - Per-track plan rows and track totals
//! - `allocation` - Per-team tuition/travel allocation and grand totals
//! - `summary` - Whole-plan summaries and cross-track aggregates
//! - `settings` - Settings snapshot, JSON interchange, load-time normalization
//! - `validation` - Upstream validation for imported settings

pub mod allocation;
pub mod plan;
pub mod segments;
pub mod settings;
pub mod summary;
pub mod travel;
pub mod validation;
