//! Adjacency matrix representation of a directed graph

use std::fmt;

use petgraph::graph::{DiGraph, NodeIndex};

use crate::constants::graph::{EDGE_MARKER, MAX_VERTICES, NO_EDGE_MARKER};
use crate::error::LoopError;

/// A directed graph over vertices `0..n` stored as a dense boolean matrix
///
/// `has_edge(i, j)` is true iff there is an edge from `i` to `j`. Self-loops
/// are allowed. Parallel edges cannot be represented: adding the same edge
/// twice leaves a single entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AdjacencyMatrix {
    vertex_count: usize,
    cells: Vec<bool>,
}

impl AdjacencyMatrix {
    /// Create a graph with `vertex_count` vertices and no edges
    ///
    /// The matrix is dense, so graphs are capped at 4096 vertices. Larger
    /// counts fail with [`LoopError::InvalidGraph`] before anything is
    /// allocated.
    pub fn new(vertex_count: usize) -> Result<Self, LoopError> {
        let cell_count = vertex_count
            .checked_mul(vertex_count)
            .filter(|_| vertex_count <= MAX_VERTICES)
            .ok_or_else(|| {
                LoopError::invalid_graph(format!(
                    "{vertex_count} vertices exceeds the limit of {MAX_VERTICES}"
                ))
            })?;

        Ok(Self {
            vertex_count,
            cells: vec![false; cell_count],
        })
    }

    /// Build a graph from rows of `0`/`1` edge markers
    ///
    /// Accepts any integer element type, signed or unsigned. Fails with
    /// [`LoopError::InvalidGraph`] if the rows do not form a square matrix or
    /// contain any other value.
    pub fn from_rows<T>(rows: &[Vec<T>]) -> Result<Self, LoopError>
    where
        T: Copy + TryInto<i64> + fmt::Display,
    {
        let vertex_count = rows.len();
        let mut matrix = Self::new(vertex_count)?;

        for (i, row) in rows.iter().enumerate() {
            ensure_row_width(i, row.len(), vertex_count)?;
            for (j, &value) in row.iter().enumerate() {
                match TryInto::<i64>::try_into(value).ok() {
                    Some(EDGE_MARKER) => matrix.set(i, j),
                    Some(NO_EDGE_MARKER) => {}
                    _ => {
                        return Err(LoopError::invalid_graph(format!(
                            "value {value} at row {i}, column {j} is not an edge marker \
                             ({NO_EDGE_MARKER} or {EDGE_MARKER})"
                        )));
                    }
                }
            }
        }

        Ok(matrix)
    }

    /// Build a graph from rows of booleans
    pub fn from_bool_rows(rows: &[Vec<bool>]) -> Result<Self, LoopError> {
        let vertex_count = rows.len();
        let mut matrix = Self::new(vertex_count)?;

        for (i, row) in rows.iter().enumerate() {
            ensure_row_width(i, row.len(), vertex_count)?;
            for (j, &edge) in row.iter().enumerate() {
                if edge {
                    matrix.set(i, j);
                }
            }
        }

        Ok(matrix)
    }

    /// Build a graph from an edge list over `vertex_count` vertices
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Result<Self, LoopError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut matrix = Self::new(vertex_count)?;
        for (from, to) in edges {
            matrix.add_edge(from, to)?;
        }
        Ok(matrix)
    }

    /// Build a graph from an adjacency list: `successors[u]` lists the
    /// targets of the edges leaving `u`
    pub fn from_successors(successors: &[Vec<usize>]) -> Result<Self, LoopError> {
        Self::from_edges(
            successors.len(),
            successors
                .iter()
                .enumerate()
                .flat_map(|(from, targets)| targets.iter().map(move |&to| (from, to))),
        )
    }

    /// Add the edge `from -> to`, validating both endpoints
    pub fn add_edge(&mut self, from: usize, to: usize) -> Result<(), LoopError> {
        for vertex in [from, to] {
            if vertex >= self.vertex_count {
                return Err(LoopError::invalid_graph(format!(
                    "edge {from} -> {to} references vertex {vertex}, but the graph only has {} \
                     vertices",
                    self.vertex_count
                )));
            }
        }
        self.set(from, to);
        Ok(())
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }

    pub fn edge_count(&self) -> usize {
        self.cells.iter().filter(|&&edge| edge).count()
    }

    /// Whether the edge `from -> to` exists. Out-of-range vertices have no
    /// edges.
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        from < self.vertex_count && to < self.vertex_count && self.cells[self.index(from, to)]
    }

    /// Targets of the edges leaving `vertex`, in ascending order
    pub fn successors(&self, vertex: usize) -> impl Iterator<Item = usize> + '_ {
        self.row(vertex)
            .iter()
            .enumerate()
            .filter_map(|(target, &edge)| edge.then_some(target))
    }

    /// Number of incoming edges for every vertex, from one scan of the matrix
    pub fn in_degrees(&self) -> Vec<usize> {
        let mut in_degree = vec![0; self.vertex_count];
        for from in 0..self.vertex_count {
            for to in self.successors(from) {
                in_degree[to] += 1;
            }
        }
        in_degree
    }

    /// The matrix rows, one slice per source vertex
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        (0..self.vertex_count).map(move |vertex| self.row(vertex))
    }

    /// A petgraph view of this graph; node weights are the vertex indices
    pub fn to_digraph(&self) -> DiGraph<usize, ()> {
        let mut graph = DiGraph::with_capacity(self.vertex_count, self.edge_count());
        let nodes: Vec<NodeIndex> = (0..self.vertex_count)
            .map(|vertex| graph.add_node(vertex))
            .collect();
        for from in 0..self.vertex_count {
            for to in self.successors(from) {
                graph.add_edge(nodes[from], nodes[to], ());
            }
        }
        graph
    }

    fn row(&self, vertex: usize) -> &[bool] {
        if vertex >= self.vertex_count {
            return &[];
        }
        let start = vertex * self.vertex_count;
        &self.cells[start..start + self.vertex_count]
    }

    fn set(&mut self, from: usize, to: usize) {
        let index = self.index(from, to);
        self.cells[index] = true;
    }

    fn index(&self, from: usize, to: usize) -> usize {
        from * self.vertex_count + to
    }
}

fn ensure_row_width(row: usize, width: usize, expected: usize) -> Result<(), LoopError> {
    if width != expected {
        return Err(LoopError::invalid_graph(format!(
            "row {row} has {width} columns, expected {expected} for a square matrix"
        )));
    }
    Ok(())
}

impl<N, E> TryFrom<&DiGraph<N, E>> for AdjacencyMatrix {
    type Error = LoopError;

    fn try_from(graph: &DiGraph<N, E>) -> Result<Self, Self::Error> {
        let mut matrix = Self::new(graph.node_count())?;
        for edge in graph.raw_edges() {
            matrix.set(edge.source().index(), edge.target().index());
        }
        Ok(matrix)
    }
}

impl fmt::Display for AdjacencyMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let cells: Vec<&str> = row
                .iter()
                .map(|&edge| if edge { "1" } else { "0" })
                .collect();
            writeln!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}
