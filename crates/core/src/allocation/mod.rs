//! Per-team tuition/travel allocation and grand totals.

pub mod service;
pub mod types;


pub use service::AllocationService;
pub use types::{AllocationReport, AllocationTotals, SessionsPerHead, Team, TeamAllocation};
