//! Inspect command executor

use console::style;
use miette::{Result, WrapErr};

use super::report_generator;
use crate::analyzer::{GraphAnalyzer, inspect_all};
use crate::config::InspectConfig;
use crate::executors::CommandExecutor;
use crate::progress::ProgressReporter;

pub struct InspectExecutor;

impl CommandExecutor for InspectExecutor {
    type Config = InspectConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Inspecting graph files for cycles...\n",
            style("🎢").cyan()
        );

        // Create progress reporter if we're in an interactive terminal
        let mut progress = ProgressReporter::for_terminal();

        let mut analyzer = GraphAnalyzer::new();
        analyzer
            .load_graphs(&config.paths, config.pattern.as_ref(), progress.as_mut())
            .wrap_err("Failed to load graph files")?;

        if analyzer.graphs().is_empty() {
            eprintln!("{} No graph files found to inspect", style("ℹ").blue());
            return Ok(());
        }

        let inspected = inspect_all(analyzer.into_graphs(), progress.as_mut())
            .wrap_err("Failed to detect cycles")?;

        let generator = report_generator(config.format, config.max_cycles, config.show_matrix);
        let report = generator
            .generate_report(&inspected)
            .wrap_err("Failed to generate report")?;
        print!("{report}");

        // Exit with error code if cycles found and requested
        if config.error_on_cycles && inspected.iter().any(|g| g.is_cyclic()) {
            std::process::exit(1);
        }

        Ok(())
    }
}
