//! Scoring and insight generation for 16PF-style personality assessments.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
