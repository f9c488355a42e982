//! # Graph Analysis Module
//!
//! This module loads graph files found on disk and runs the cycle detector
//! over batches of graphs.
//!
//! ## Key Components
//!
//! - **GraphAnalyzer**: Discovers graph files and loads them in parallel
//! - **InspectedGraph**: A graph paired with its detection outcome
//! - **inspect_all**: Runs detection over many graphs in parallel
//!
//! ## Example
//!
//! ```
//! use loop_the_loop::analyzer::inspect_all;
//! use loop_the_loop::graph::{AdjacencyMatrix, NamedGraph};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let graphs = vec![
//!     NamedGraph::new("loop", AdjacencyMatrix::from_edges(2, [(0, 1), (1, 0)])?),
//!     NamedGraph::new("line", AdjacencyMatrix::from_edges(2, [(0, 1)])?),
//! ];
//!
//! let inspected = inspect_all(graphs, None)?;
//!
//! assert!(inspected[0].is_cyclic());
//! assert!(!inspected[1].is_cyclic());
//! # Ok(())
//! # }
//! ```

mod analyzer_impl;
pub use analyzer_impl::*;
