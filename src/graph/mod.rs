//! # Graph Representation, Loading and Rendering Module
//!
//! This module provides the directed graph type handed to the detector, the
//! file loader, the built-in sample graphs, and renderers that can highlight
//! a witness cycle.
//!
//! ## Components
//!
//! ### Representation
//! - **AdjacencyMatrix**: Validated square 0/1 matrix over vertices `0..n`
//! - **NamedGraph**: A matrix plus the name used in reports
//!
//! ### Input
//! - **GraphFile**: TOML/JSON graph files (`matrix`, `edges` or
//!   `successors`)
//! - **samples**: The demonstration graphs used by `rehearse`
//!
//! ### Rendering
//! - **GraphRenderer**: Renders graphs as ASCII, Mermaid or DOT
//!
//! ## Example
//!
//! ```
//! use loop_the_loop::detector::detect;
//! use loop_the_loop::graph::{AdjacencyMatrix, GraphRenderer};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let graph = AdjacencyMatrix::from_edges(3, [(0, 1), (1, 2), (2, 0)])?;
//! let detection = detect(&graph)?;
//!
//! let renderer = GraphRenderer::new(true, false);
//! let mut output = Vec::new();
//! renderer.render_dot(&graph, detection.witness(), &mut output)?;
//!
//! let dot_output = String::from_utf8(output)?;
//! assert!(dot_output.contains("digraph"));
//! assert!(dot_output.contains(r#""2" -> "0""#));
//! # Ok(())
//! # }
//! ```

mod loader;
mod matrix;
mod renderer;
pub mod samples;
mod types;

pub use loader::{GraphFile, load_graph_file};
pub use matrix::AdjacencyMatrix;
pub use renderer::GraphRenderer;
pub use types::{NamedGraph, NamedGraphBuilder};
