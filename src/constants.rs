//! Configuration constants for loop-the-loop
//!
//! This module contains the constants used throughout the application:
//! progress animation, output defaults, and graph file conventions.

use std::time::Duration;

/// Progress bar configuration
pub mod progress {
    use super::*;

    /// Duration between progress bar updates
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

    /// Spinner frames for the coaster animation
    pub const SPINNER_FRAMES: &[&str] = &[
        "🎢 ", // Standing at the station
        "🎢◜", // Climbing the lift hill
        "🎢◝", // Cresting the top
        "🎢◞", // Diving down
        "🎢◟", // Entering the loop
        "🎢○", // Upside down
        "🎢●", // Back on the track
    ];
}

/// Output formatting configuration
pub mod output {
    /// Default output format when not specified
    pub const DEFAULT_FORMAT: &str = "human";

    /// Default graph rendering format when not specified
    pub const DEFAULT_GRAPH_FORMAT: &str = "ascii";

    /// Separator between vertices in a printed cycle
    pub const PATH_SEPARATOR: &str = " -> ";

    /// Line printed under an adjacency matrix
    pub const MATRIX_RULE: &str = "-------------------------";
}

/// Graph input conventions
pub mod graph {
    /// Matrix value marking an edge
    pub const EDGE_MARKER: i64 = 1;

    /// Matrix value marking the absence of an edge
    pub const NO_EDGE_MARKER: i64 = 0;

    /// Largest vertex count a dense adjacency matrix may have
    pub const MAX_VERTICES: usize = 4096;

    /// File extensions recognised as graph files
    pub const GRAPH_FILE_EXTENSIONS: &[&str] = &["toml", "json"];

    /// Directories never descended into while discovering graph files
    pub const SKIPPED_DIRECTORIES: &[&str] = &["target", ".git", "node_modules"];

    /// Well-known manifests that share an extension with graph files but are
    /// never graphs themselves; only skipped while walking directories
    pub const SKIPPED_FILE_NAMES: &[&str] = &[
        "Cargo.toml",
        "Cargo.lock",
        "rust-toolchain.toml",
        "rustfmt.toml",
        "clippy.toml",
        "pyproject.toml",
        "package.json",
        "package-lock.json",
        "tsconfig.json",
        "composer.json",
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_constants() {
        assert_eq!(progress::TICK_INTERVAL, Duration::from_millis(100));
        assert_eq!(progress::SPINNER_FRAMES.len(), 7);
    }

    #[test]
    fn test_output_constants() {
        assert_eq!(output::DEFAULT_FORMAT, "human");
        assert_eq!(output::DEFAULT_GRAPH_FORMAT, "ascii");
    }

    #[test]
    fn test_edge_markers_differ() {
        assert_ne!(graph::EDGE_MARKER, graph::NO_EDGE_MARKER);
    }

    #[test]
    fn test_vertex_limit_cannot_overflow() {
        assert!(graph::MAX_VERTICES.checked_mul(graph::MAX_VERTICES).is_some());
    }
}
