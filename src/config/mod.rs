//! # Configuration Module
//!
//! This module provides configuration structures for all loop-the-loop
//! commands. Each command has its own config module with a builder for easy
//! construction.
//!
//! ## Command Configurations
//!
//! - **InspectConfig**: Configuration for the `inspect` command to detect
//!   cycles in graph files
//! - **RehearseConfig**: Configuration for the `rehearse` command that runs
//!   the built-in sample graphs
//! - **SpectacleConfig**: Configuration for the `spectacle` command to
//!   visualize a graph
//!
//! ## Example
//!
//! ```
//! use loop_the_loop::cli::{GraphFormat, OutputFormat};
//! use loop_the_loop::common::ConfigBuilder;
//! use loop_the_loop::config::{InspectConfig, SpectacleConfig};
//!
//! # fn main() -> Result<(), loop_the_loop::error::LoopError> {
//! let inspect = InspectConfig::builder()
//!     .with_paths(vec!["graphs".into()])
//!     .with_format(OutputFormat::Human)
//!     .with_error_on_cycles(true)
//!     .build()?;
//! assert!(inspect.error_on_cycles);
//!
//! let spectacle = SpectacleConfig::builder()
//!     .with_path("graphs/ride.toml".into())
//!     .with_format(GraphFormat::Dot)
//!     .build()?;
//! assert!(spectacle.highlight_cycles);
//! # Ok(())
//! # }
//! ```

pub mod inspect;
pub mod rehearse;
pub mod spectacle;

pub use inspect::InspectConfig;
pub use rehearse::RehearseConfig;
pub use spectacle::SpectacleConfig;
