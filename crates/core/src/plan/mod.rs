//! Per-track plan rows and track totals.

pub mod service;
pub mod types;

pub use service::TrackService;
pub use types::{JobTrackTotal, PlanBook, PlanRow, Track, TrackLine, TrackTotal};
