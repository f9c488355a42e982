use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Underlying parser failure for a graph file
#[derive(Error, Debug)]
pub enum GraphSyntaxError {
    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid {format} syntax in '{file}'")]
#[diagnostic(
    code(loop_the_loop::graph_parse_error),
    help("Check the syntax near the highlighted position")
)]
pub struct GraphParseError {
    pub file: String,
    pub format: &'static str,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("syntax error here")]
    pub span: Option<SourceSpan>,
    #[source]
    pub source: GraphSyntaxError,
}

#[derive(Error, Debug, Diagnostic)]
pub enum LoopError {
    #[error("Invalid graph: {reason}")]
    #[diagnostic(
        code(loop_the_loop::invalid_graph),
        help("An adjacency matrix must be square and contain only 0 or 1")
    )]
    InvalidGraph { reason: String },

    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(loop_the_loop::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    GraphParseError(Box<GraphParseError>),

    #[error("Unknown sample graph '{name}'")]
    #[diagnostic(
        code(loop_the_loop::unknown_sample),
        help("Available samples: {available}")
    )]
    UnknownSample { name: String, available: String },

    #[error("JSON serialization error")]
    #[diagnostic(
        code(loop_the_loop::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(loop_the_loop::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(
        code(loop_the_loop::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(loop_the_loop::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },

    #[error("None of the {failed} graph files found could be loaded")]
    #[diagnostic(
        code(loop_the_loop::no_graphs_loaded),
        help("See the warnings above for why each file failed")
    )]
    NoGraphsLoaded { failed: usize },

    #[error("Graph error: {message}")]
    #[diagnostic(
        code(loop_the_loop::graph_error),
        help("This may be an internal error with cycle reconstruction")
    )]
    GraphError { message: String },
}

impl LoopError {
    pub(crate) fn invalid_graph(reason: impl Into<String>) -> Self {
        LoopError::InvalidGraph {
            reason: reason.into(),
        }
    }
}
