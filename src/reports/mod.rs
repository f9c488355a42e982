//! Report generation modules for different output formats
//!
//! This module contains report generators for various output formats:
//! - human: Human-readable console output
//! - json: JSON format for programmatic use
//! - junit: JUnit XML format for CI/CD integration
//! - github: GitHub Actions workflow commands

pub mod github;
pub mod human;
pub mod json;
pub mod junit;

use crate::analyzer::InspectedGraph;
use crate::error::LoopError;

/// Common trait for all report generators
pub trait ReportGenerator {
    /// Generate a report from the detection results of a batch of graphs
    fn generate_report(&self, graphs: &[InspectedGraph]) -> Result<String, LoopError>;
}

// Re-export for convenience
pub use github::GitHubReportGenerator;
pub use human::HumanReportGenerator;
pub use json::JsonReportGenerator;
pub use junit::JunitReportGenerator;
