//! Human-readable console report generation

use std::fmt::Write;

use console::style;

use super::ReportGenerator;
use crate::analyzer::InspectedGraph;
use crate::constants::output::MATRIX_RULE;
use crate::error::LoopError;
use crate::utils::string::pluralize;

pub struct HumanReportGenerator {
    max_cycles: Option<usize>,
    show_matrix: bool,
}

impl HumanReportGenerator {
    pub fn new(max_cycles: Option<usize>, show_matrix: bool) -> Self {
        Self {
            max_cycles,
            show_matrix,
        }
    }

    /// Describe one graph: its matrix, its classification and its witness
    pub fn describe_graph(&self, inspected: &InspectedGraph) -> Result<String, LoopError> {
        let mut output = String::new();
        self.write_graph(&mut output, inspected, true)?;
        Ok(output)
    }

    fn write_graph(
        &self,
        output: &mut String,
        inspected: &InspectedGraph,
        show_witness: bool,
    ) -> Result<(), LoopError> {
        let matrix = inspected.graph.matrix();

        if self.show_matrix {
            writeln!(output, "Graph Adjacency Matrix:")?;
            write!(output, "{matrix}")?;
            writeln!(output, "{MATRIX_RULE}")?;
        }

        if matrix.is_empty() {
            writeln!(output, "Graph is empty.")?;
            return Ok(());
        }

        writeln!(
            output,
            "Result: Graph is {}.",
            inspected.detection.classification()
        )?;

        if let Some(witness) = inspected.detection.witness().filter(|_| show_witness) {
            writeln!(output, "Vertices in a cycle: {witness}")?;
        }

        Ok(())
    }
}

impl ReportGenerator for HumanReportGenerator {
    fn generate_report(&self, graphs: &[InspectedGraph]) -> Result<String, LoopError> {
        let mut output = String::new();

        if graphs.is_empty() {
            writeln!(output, "\n{} No graphs to inspect.", style("ℹ").blue())?;
            return Ok(output);
        }

        let cyclic_count = graphs.iter().filter(|g| g.is_cyclic()).count();
        let mut witnesses_shown = 0;

        for inspected in graphs {
            write!(
                output,
                "\n{} {}",
                style("🎢").cyan(),
                style(inspected.name()).bold()
            )?;
            if let Some(source) = inspected.graph.source() {
                write!(output, " {}", style(format!("({})", source.display())).dim())?;
            }
            writeln!(output)?;

            let show_witness = inspected.is_cyclic()
                && self.max_cycles.is_none_or(|limit| witnesses_shown < limit);
            if show_witness {
                witnesses_shown += 1;
            }

            self.write_graph(&mut output, inspected, show_witness)?;
        }

        if witnesses_shown < cyclic_count {
            writeln!(
                output,
                "\n{} Showing {} of {} witness cycles. Use --max-cycles to see more.",
                style("ℹ️").blue(),
                style(witnesses_shown).yellow(),
                style(cyclic_count).yellow()
            )?;
        }

        if cyclic_count == 0 {
            writeln!(
                output,
                "\n{} No cycles detected in {} {}! Every ride has a way off.",
                style("✅").green().bold(),
                graphs.len(),
                pluralize("graph", graphs.len())
            )?;
        } else {
            writeln!(
                output,
                "\n{} Found {} cyclic {} out of {}.",
                style("❌").red().bold(),
                style(cyclic_count).red().bold(),
                pluralize("graph", cyclic_count),
                graphs.len()
            )?;
            writeln!(
                output,
                "{} Removing any one edge of a witness cycle breaks that cycle; the graph may \
                 still contain others.",
                style("💡").yellow()
            )?;
        }

        Ok(output)
    }
}
