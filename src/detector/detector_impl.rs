use std::collections::VecDeque;
use std::fmt;

use serde::Serialize;

use crate::constants::output::PATH_SEPARATOR;
use crate::error::LoopError;
use crate::graph::AdjacencyMatrix;

/// Whether a graph admits a topological order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Acyclic,
    Cyclic,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Acyclic => write!(f, "ACYCLIC"),
            Classification::Cyclic => write!(f, "CYCLIC"),
        }
    }
}

/// One directed cycle found in a graph, in edge direction
///
/// Consecutive vertices are joined by an edge and the last vertex has an
/// edge back to the first. A single vertex means a self-loop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WitnessCycle {
    vertices: Vec<usize>,
}

impl WitnessCycle {
    pub fn vertices(&self) -> &[usize] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always false: a witness holds at least one vertex
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn start(&self) -> usize {
        self.vertices[0]
    }

    pub fn is_self_loop(&self) -> bool {
        self.vertices.len() == 1
    }

    pub fn contains(&self, vertex: usize) -> bool {
        self.vertices.contains(&vertex)
    }

    /// The edges walked by this cycle, including the closing edge
    pub fn edges(&self) -> Vec<(usize, usize)> {
        self.vertices
            .iter()
            .zip(self.vertices.iter().cycle().skip(1))
            .map(|(&from, &to)| (from, to))
            .collect()
    }

    /// The vertices with the first one repeated at the end
    pub fn closed_path(&self) -> Vec<usize> {
        let mut path = self.vertices.clone();
        path.push(self.start());
        path
    }
}

impl fmt::Display for WitnessCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path: Vec<String> = self
            .closed_path()
            .iter()
            .map(|vertex| vertex.to_string())
            .collect();
        write!(f, "{}", path.join(PATH_SEPARATOR))
    }
}

/// Outcome of running the detector over one graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    classification: Classification,
    witness: Option<WitnessCycle>,
    processed_order: Vec<usize>,
    unresolved: Vec<usize>,
}

impl Detection {
    fn acyclic(processed_order: Vec<usize>) -> Self {
        Self {
            classification: Classification::Acyclic,
            witness: None,
            processed_order,
            unresolved: Vec::new(),
        }
    }

    pub fn classification(&self) -> Classification {
        self.classification
    }

    pub fn is_cyclic(&self) -> bool {
        self.classification == Classification::Cyclic
    }

    /// The witness cycle, present exactly when the graph is cyclic
    pub fn witness(&self) -> Option<&WitnessCycle> {
        self.witness.as_ref()
    }

    /// Number of vertices whose in-degree reached zero
    pub fn processed_count(&self) -> usize {
        self.processed_order.len()
    }

    /// Vertices in the order they left the worklist
    pub fn processed_order(&self) -> &[usize] {
        &self.processed_order
    }

    /// A topological order of the whole graph, if one exists
    pub fn topological_order(&self) -> Option<&[usize]> {
        match self.classification {
            Classification::Acyclic => Some(&self.processed_order),
            Classification::Cyclic => None,
        }
    }

    /// Vertices whose in-degree never reached zero, ascending. They lie on a
    /// cycle or downstream of one.
    pub fn unresolved_vertices(&self) -> &[usize] {
        &self.unresolved
    }
}

/// Detector for directed cycles based on Kahn's topological sort
///
/// The detector holds no state between calls: every run allocates its own
/// in-degree table, predecessor table and worklist, so independent graphs
/// can be checked from several threads at once.
#[derive(Debug, Clone, Copy, Default)]
pub struct CycleDetector;

impl CycleDetector {
    pub fn new() -> Self {
        Self
    }

    /// Classify `graph` and, when it is cyclic, reconstruct one witness cycle
    pub fn detect(&self, graph: &AdjacencyMatrix) -> Result<Detection, LoopError> {
        let vertex_count = graph.vertex_count();
        if vertex_count == 0 {
            return Ok(Detection::acyclic(Vec::new()));
        }

        let mut in_degree = graph.in_degrees();
        // Last writer wins: a vertex with several in-edges keeps the
        // predecessor processed most recently.
        let mut predecessor: Vec<Option<usize>> = vec![None; vertex_count];
        let mut worklist: VecDeque<usize> =
            (0..vertex_count).filter(|&v| in_degree[v] == 0).collect();
        let mut processed_order = Vec::with_capacity(vertex_count);

        while let Some(u) = worklist.pop_front() {
            processed_order.push(u);
            for v in graph.successors(u) {
                in_degree[v] -= 1;
                predecessor[v] = Some(u);
                if in_degree[v] == 0 {
                    worklist.push_back(v);
                }
            }
        }

        if processed_order.len() == vertex_count {
            return Ok(Detection::acyclic(processed_order));
        }

        let unresolved: Vec<usize> = (0..vertex_count).filter(|&v| in_degree[v] > 0).collect();
        relink_unresolved(graph, &in_degree, &unresolved, &mut predecessor);
        let witness = trace_witness(unresolved[0], &predecessor)?;

        Ok(Detection {
            classification: Classification::Cyclic,
            witness: Some(witness),
            processed_order,
            unresolved,
        })
    }

    /// Validate raw `0`/`1` rows and run [`CycleDetector::detect`] on them
    ///
    /// Validation completes before any detection state is created.
    pub fn detect_rows<T>(&self, rows: &[Vec<T>]) -> Result<Detection, LoopError>
    where
        T: Copy + TryInto<i64> + fmt::Display,
    {
        let graph = AdjacencyMatrix::from_rows(rows)?;
        self.detect(&graph)
    }
}

/// Convenience wrapper around [`CycleDetector::detect`]
pub fn detect(graph: &AdjacencyMatrix) -> Result<Detection, LoopError> {
    CycleDetector::new().detect(graph)
}

/// Re-relax the edges between unresolved vertices.
///
/// Relaxation only ever records processed vertices as predecessors, and a
/// processed vertex is never on a cycle. Every unresolved vertex still has an
/// unconsumed in-edge from another unresolved vertex, so after this pass the
/// predecessor of each unresolved vertex is itself unresolved.
fn relink_unresolved(
    graph: &AdjacencyMatrix,
    in_degree: &[usize],
    unresolved: &[usize],
    predecessor: &mut [Option<usize>],
) {
    for &u in unresolved {
        for v in graph.successors(u) {
            if in_degree[v] > 0 {
                predecessor[v] = Some(u);
            }
        }
    }
}

/// Walk predecessors from `start` until a vertex repeats, then collect the
/// loop through that vertex and reverse it into edge order.
fn trace_witness(start: usize, predecessor: &[Option<usize>]) -> Result<WitnessCycle, LoopError> {
    let step = |vertex: usize| {
        predecessor[vertex].ok_or_else(|| LoopError::GraphError {
            message: format!("unresolved vertex {vertex} has no recorded predecessor"),
        })
    };

    let mut seen = vec![false; predecessor.len()];
    let mut current = start;
    while !seen[current] {
        seen[current] = true;
        current = step(current)?;
    }

    let cycle_start = current;
    let mut vertices = Vec::new();
    loop {
        vertices.push(current);
        current = step(current)?;
        if current == cycle_start {
            break;
        }
    }
    vertices.reverse();

    Ok(WitnessCycle { vertices })
}
