//! GitHub Actions format report generation

use std::fmt::Write;

use super::ReportGenerator;
use crate::analyzer::InspectedGraph;
use crate::error::LoopError;
use crate::utils::string::pluralize;

pub struct GitHubReportGenerator;

impl Default for GitHubReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl GitHubReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for GitHubReportGenerator {
    fn generate_report(&self, graphs: &[InspectedGraph]) -> Result<String, LoopError> {
        let mut output = String::new();
        let cyclic: Vec<_> = graphs.iter().filter(|g| g.is_cyclic()).collect();

        if cyclic.is_empty() {
            writeln!(
                output,
                "::notice title=Cycle Check::No cycles detected in {} {} ✅",
                graphs.len(),
                pluralize("graph", graphs.len())
            )?;
            return Ok(output);
        }

        writeln!(
            output,
            "::error title=Cycles Detected::Found {} cyclic {}",
            cyclic.len(),
            pluralize("graph", cyclic.len())
        )?;

        for inspected in cyclic {
            let witness = inspected
                .detection
                .witness()
                .map(|w| w.to_string())
                .unwrap_or_default();

            match inspected.graph.source() {
                Some(source) => writeln!(
                    output,
                    "::error file={},title=Cycle in {}::Vertices in a cycle: {witness}",
                    source.display(),
                    inspected.name()
                )?,
                None => writeln!(
                    output,
                    "::error title=Cycle in {}::Vertices in a cycle: {witness}",
                    inspected.name()
                )?,
            }
        }

        writeln!(
            output,
            "::notice title=Recommendation::Remove one edge of each witness cycle and run the \
             check again; a graph can hold more than one cycle."
        )?;

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::common::ConfigBuilder;
    use crate::graph::{AdjacencyMatrix, NamedGraph};
    use crate::reports::test_support::{chain, two_cycle};

    #[test]
    fn test_github_no_cycles() {
        let report = GitHubReportGenerator::new()
            .generate_report(&[chain()])
            .unwrap();

        assert!(report.starts_with("::notice title=Cycle Check::No cycles detected in 1 graph"));
        assert!(!report.contains("::error"));
    }

    #[test]
    fn test_github_error_per_cyclic_graph() {
        let report = GitHubReportGenerator::new()
            .generate_report(&[two_cycle(), chain()])
            .unwrap();

        assert!(report.contains("::error title=Cycles Detected::Found 1 cyclic graph\n"));
        assert!(report.contains("::error title=Cycle in two-cycle::Vertices in a cycle: "));
    }

    #[test]
    fn test_github_annotates_source_file() {
        let graph = NamedGraph::builder()
            .with_name("loop")
            .with_source(Some(PathBuf::from("graphs/loop.toml")))
            .with_matrix(AdjacencyMatrix::from_edges(1, [(0, 0)]).unwrap())
            .build()
            .unwrap();
        let inspected = InspectedGraph::inspect(graph).unwrap();

        let report = GitHubReportGenerator::new()
            .generate_report(&[inspected])
            .unwrap();

        assert!(report.contains(
            "::error file=graphs/loop.toml,title=Cycle in loop::Vertices in a cycle: 0 -> 0"
        ));
    }
}
