//! Hiring decision support: deterministic candidate scoring plus the
//! directory, source, and HTTP surfaces the review UI consumes.

pub mod candidates;
pub mod config;
pub mod error;
pub mod telemetry;
