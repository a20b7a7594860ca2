//! Whole-plan summaries and cross-track aggregates.

pub mod service;
pub mod types;

pub use service::SummaryService;
pub use types::{BudgetOverview, JobBudgetComparison, PlanSummaries, TrackTotals};
