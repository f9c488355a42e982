//! JSON format report generation

use serde_json::json;

use super::ReportGenerator;
use crate::analyzer::InspectedGraph;
use crate::error::LoopError;

pub struct JsonReportGenerator;

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn generate_report(&self, graphs: &[InspectedGraph]) -> Result<String, LoopError> {
        let entries: Vec<_> = graphs
            .iter()
            .map(|inspected| {
                let matrix = inspected.graph.matrix();
                json!({
                    "name": inspected.name(),
                    "source": inspected.graph.source().map(|p| p.display().to_string()),
                    "vertex_count": matrix.vertex_count(),
                    "edge_count": matrix.edge_count(),
                    "classification": inspected.detection.classification(),
                    "witness": inspected.detection.witness(),
                    "topological_order": inspected.detection.topological_order(),
                })
            })
            .collect();

        let report = json!({
            "graph_count": graphs.len(),
            "cyclic_count": graphs.iter().filter(|g| g.is_cyclic()).count(),
            "graphs": entries,
        });

        serde_json::to_string_pretty(&report).map_err(LoopError::Json)
    }
}
