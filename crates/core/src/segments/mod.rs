//! Ratio-weighted unit-cost blending by education category.

pub mod service;
pub mod types;

pub use service::SegmentService;
pub use types::{CategoryUnitCosts, JobSegment, SegmentCategory};
