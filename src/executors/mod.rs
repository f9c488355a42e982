//! Command executors that handle the actual logic for each command

pub mod inspect;
pub mod rehearse;
pub mod spectacle;

use miette::Result;

use crate::cli::OutputFormat;
use crate::reports::{
    GitHubReportGenerator, HumanReportGenerator, JsonReportGenerator, JunitReportGenerator,
    ReportGenerator,
};

/// Trait for command executors
pub trait CommandExecutor {
    type Config;

    /// Execute the command with the given configuration
    fn execute(config: Self::Config) -> Result<()>;
}

/// Pick the report generator for an output format
fn report_generator(
    format: OutputFormat,
    max_cycles: Option<usize>,
    show_matrix: bool,
) -> Box<dyn ReportGenerator> {
    match format {
        OutputFormat::Human => Box::new(HumanReportGenerator::new(max_cycles, show_matrix)),
        OutputFormat::Json => Box::new(JsonReportGenerator::new()),
        OutputFormat::Junit => Box::new(JunitReportGenerator::new()),
        OutputFormat::GitHub => Box::new(GitHubReportGenerator::new()),
    }
}
