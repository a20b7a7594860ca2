//! Shared types, errors, and configuration for Eduplan.
//!
//! This crate provides common types used across all other crates:
//! - Currency-amount helpers with decimal precision
//! - Typed IDs for type-safe entity references
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::PlannerConfig;
pub use error::{AppError, AppResult};
