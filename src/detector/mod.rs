//! # Cycle Detection Module
//!
//! This module decides whether a directed graph contains a cycle and, if it
//! does, produces one concrete witness cycle.
//!
//! ## Algorithm
//!
//! We run Kahn's topological sort: vertices with in-degree zero are fed
//! through a FIFO worklist and "removed", decrementing the in-degree of their
//! successors. If every vertex is removed the graph is acyclic. Otherwise the
//! leftover vertices sit on, or downstream of, at least one cycle.
//!
//! While relaxing edges the detector records, for every vertex, the last
//! vertex seen with an edge into it. This predecessor table is not a spanning
//! tree: only the most recent writer is kept. To recover a witness we walk
//! predecessors back from the lowest-index leftover vertex until a vertex
//! repeats, then collect the loop through it and reverse it into edge order.
//!
//! Which cycle is reported depends on the matrix scan order. Callers and
//! tests should only rely on the witness being *a* valid cycle.
//!
//! Cost is O(N²) for an N-vertex adjacency matrix.
//!
//! ## Example
//!
//! ```
//! use loop_the_loop::detector::{Classification, CycleDetector};
//! use loop_the_loop::graph::AdjacencyMatrix;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // 0 -> 1 -> 3 -> 1, plus 1 -> 2
//! let graph = AdjacencyMatrix::from_rows(&[
//!     vec![0, 1, 0, 0],
//!     vec![0, 0, 1, 1],
//!     vec![0, 0, 0, 0],
//!     vec![0, 1, 0, 0],
//! ])?;
//!
//! let detection = CycleDetector::new().detect(&graph)?;
//!
//! assert_eq!(detection.classification(), Classification::Cyclic);
//! let witness = detection.witness().unwrap();
//! assert_eq!(witness.len(), 2);
//! assert!(witness.contains(1) && witness.contains(3));
//! # Ok(())
//! # }
//! ```

mod detector_impl;

pub use detector_impl::*;
