//! Rehearse command executor

use miette::{Result, WrapErr};

use super::report_generator;
use crate::analyzer::{InspectedGraph, inspect_all};
use crate::cli::OutputFormat;
use crate::config::RehearseConfig;
use crate::executors::CommandExecutor;
use crate::graph::samples::{self, Sample};
use crate::reports::HumanReportGenerator;

pub struct RehearseExecutor;

impl CommandExecutor for RehearseExecutor {
    type Config = RehearseConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let selected = match config.sample.as_deref() {
            Some(name) => vec![samples::by_name(name)?],
            None => samples::all().wrap_err("Failed to build sample graphs")?,
        };

        let (titles, graphs): (Vec<&str>, Vec<_>) = selected
            .into_iter()
            .map(|Sample { title, graph }| (title, graph))
            .unzip();

        let inspected = inspect_all(graphs, None).wrap_err("Failed to detect cycles")?;

        if config.format == OutputFormat::Human {
            print_rehearsal(&titles, &inspected, config.show_matrix)
        } else {
            let generator = report_generator(config.format, None, config.show_matrix);
            let report = generator
                .generate_report(&inspected)
                .wrap_err("Failed to generate report")?;
            print!("{report}");
            Ok(())
        }
    }
}

fn print_rehearsal(
    titles: &[&str],
    inspected: &[InspectedGraph],
    show_matrix: bool,
) -> Result<()> {
    let generator = HumanReportGenerator::new(None, show_matrix);

    println!("--- Cycle Detection (Kahn's Algorithm) ---");
    for (i, (title, graph)) in titles.iter().zip(inspected).enumerate() {
        println!("\n--- Test Case {}: {title} ---", i + 1);
        let description = generator
            .describe_graph(graph)
            .wrap_err_with(|| format!("Failed to describe sample '{}'", graph.name()))?;
        print!("{description}");
    }

    Ok(())
}
