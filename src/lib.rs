//! # Loop the Loop - Find Cycles in Directed Graphs
//!
//! Loop the Loop decides whether a directed graph contains a cycle and, when
//! it does, hands back one concrete cycle as evidence. Detection uses Kahn's
//! algorithm: vertices whose in-degree never drops to zero are exactly the
//! ones that cannot be placed in a topological order, and a predecessor trace
//! through them yields a witness cycle.
//!
//! ## Main Components
//!
//! - **Detector**: Kahn's algorithm plus witness cycle reconstruction
//! - **Graph**: Adjacency matrices, graph files, sample graphs and renderers
//! - **Analyzer**: Discovers graph files and inspects them in parallel
//! - **Reports**: Generates human-readable and machine-readable reports
//!
//! ## Usage
//!
//! ### Example: Classifying a Graph
//!
//! ```
//! use loop_the_loop::detector::{Classification, CycleDetector};
//! use loop_the_loop::graph::AdjacencyMatrix;
//!
//! # fn main() -> miette::Result<()> {
//! // 0 -> 1 -> 2 -> 0 is a loop; 2 -> 3 -> 4 hangs off it
//! let graph = AdjacencyMatrix::from_edges(5, [(0, 1), (1, 2), (2, 0), (2, 3), (3, 4)])?;
//!
//! let detection = CycleDetector::new().detect(&graph)?;
//! assert_eq!(detection.classification(), Classification::Cyclic);
//!
//! let witness = detection.witness().expect("cyclic graphs carry a witness");
//! for (from, to) in witness.edges() {
//!     assert!(graph.has_edge(from, to));
//! }
//! println!("Vertices in a cycle: {witness}");
//! # Ok(())
//! # }
//! ```
//!
//! ### Example: Reading a Topological Order
//!
//! ```
//! use loop_the_loop::detector::detect;
//! use loop_the_loop::graph::AdjacencyMatrix;
//!
//! # fn main() -> miette::Result<()> {
//! let graph = AdjacencyMatrix::from_rows(&[
//!     vec![0, 1, 1, 0],
//!     vec![0, 0, 0, 1],
//!     vec![0, 0, 0, 1],
//!     vec![0, 0, 0, 0],
//! ])?;
//!
//! let detection = detect(&graph)?;
//! assert_eq!(detection.topological_order(), Some(&[0, 1, 2, 3][..]));
//! assert!(detection.witness().is_none());
//! # Ok(())
//! # }
//! ```
//!
//! ### Example: Inspecting a Directory of Graph Files
//!
//! ```no_run
//! use std::path::PathBuf;
//!
//! use loop_the_loop::analyzer::{GraphAnalyzer, inspect_all};
//! use loop_the_loop::reports::{HumanReportGenerator, JsonReportGenerator, ReportGenerator};
//! use miette::IntoDiagnostic;
//!
//! # fn main() -> miette::Result<()> {
//! // Step 1: Load every .toml and .json graph below a directory
//! let mut analyzer = GraphAnalyzer::new();
//! analyzer.load_graphs(&[PathBuf::from("graphs")], None, None)?;
//!
//! // Step 2: Run detection over all of them in parallel
//! let inspected = inspect_all(analyzer.into_graphs(), None)?;
//!
//! // Step 3: Generate reports
//! let human_report = HumanReportGenerator::new(Some(5), true);
//! println!("{}", human_report.generate_report(&inspected)?);
//!
//! let json_output = JsonReportGenerator::new().generate_report(&inspected)?;
//! std::fs::write("cycles.json", json_output).into_diagnostic()?;
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod discovery;
mod progress;
mod utils;

// Public modules
pub mod analyzer;
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod detector;
pub mod error;
pub mod executors;
pub mod graph;
pub mod reports;

pub use common::ConfigBuilder;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();

    execute_command(cli.command)
}
