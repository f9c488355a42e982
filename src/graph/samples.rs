//! Built-in sample graphs
//!
//! These are the demonstration graphs run by the `rehearse` command.

use crate::error::LoopError;
use crate::graph::{AdjacencyMatrix, NamedGraph};

/// A sample graph with the title shown when rehearsing it
#[derive(Debug, Clone)]
pub struct Sample {
    pub title: &'static str,
    pub graph: NamedGraph,
}

const SAMPLES: &[(&str, &str, usize, &[(usize, usize)])] = &[
    // Edge 3 -> 1 closes the cycle 1 -> 3 -> 1
    ("cyclic", "Cyclic Graph", 4, &[(0, 1), (1, 2), (1, 3), (3, 1)]),
    ("acyclic", "Acyclic Graph", 4, &[(0, 1), (0, 2), (1, 3), (2, 3)]),
    // Edge 2 -> 0 closes the cycle 0 -> 1 -> 2 -> 0; 3 -> 4 hangs off it
    (
        "cyclic-with-tail",
        "A different Cyclic Graph",
        5,
        &[(0, 1), (1, 2), (2, 0), (2, 3), (3, 4)],
    ),
];

/// Names of all built-in samples, in rehearsal order
pub fn names() -> Vec<&'static str> {
    SAMPLES.iter().map(|(name, ..)| *name).collect()
}

/// All built-in samples, in rehearsal order
pub fn all() -> Result<Vec<Sample>, LoopError> {
    SAMPLES
        .iter()
        .map(|&(name, title, vertex_count, edges)| {
            let matrix = AdjacencyMatrix::from_edges(vertex_count, edges.iter().copied())?;
            Ok(Sample {
                title,
                graph: NamedGraph::new(name, matrix),
            })
        })
        .collect()
}

/// Look up one sample by name
pub fn by_name(name: &str) -> Result<Sample, LoopError> {
    all()?
        .into_iter()
        .find(|sample| sample.graph.name() == name)
        .ok_or_else(|| LoopError::UnknownSample {
            name: name.to_string(),
            available: names().join(", "),
        })
}
