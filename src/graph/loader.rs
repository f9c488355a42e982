//! Graph file parsing
//!
//! Graph files are TOML or JSON documents holding exactly one of three
//! shapes: a `matrix` of 0/1 rows, an `edges` list over `vertices`
//! vertices, or a `successors` adjacency list.

use std::path::Path;

use miette::{NamedSource, SourceSpan};
use serde::Deserialize;

use crate::common::ConfigBuilder;
use crate::error::{GraphParseError, GraphSyntaxError, LoopError};
use crate::graph::{AdjacencyMatrix, NamedGraph};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphFile {
    pub name: Option<String>,
    pub matrix: Option<Vec<Vec<i64>>>,
    pub vertices: Option<usize>,
    pub edges: Option<Vec<(usize, usize)>>,
    pub successors: Option<Vec<Vec<usize>>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileFormat {
    Toml,
    Json,
}

impl FileFormat {
    fn from_path(path: &Path) -> Result<Self, LoopError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(FileFormat::Toml),
            Some("json") => Ok(FileFormat::Json),
            _ => Err(LoopError::ConfigurationError {
                message: format!(
                    "Cannot tell the graph format of '{}': expected a .toml or .json file",
                    path.display()
                ),
            }),
        }
    }

    fn label(self) -> &'static str {
        match self {
            FileFormat::Toml => "TOML",
            FileFormat::Json => "JSON",
        }
    }
}

impl GraphFile {
    /// Read and validate a graph file, naming it after the file stem unless
    /// it carries a `name`
    pub fn parse_file(path: &Path) -> Result<NamedGraph, LoopError> {
        let format = FileFormat::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| LoopError::FileReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let file = Self::parse_str(&content, format).map_err(|(source, span)| {
            LoopError::GraphParseError(Box::new(GraphParseError {
                file: path.display().to_string(),
                format: format.label(),
                source_code: NamedSource::new(path.display().to_string(), content.clone()),
                span,
                source,
            }))
        })?;

        let default_name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let matrix = file.to_matrix().map_err(|e| match e {
            LoopError::InvalidGraph { reason } => LoopError::InvalidGraph {
                reason: format!("{reason} (in '{}')", path.display()),
            },
            other => other,
        })?;

        NamedGraph::builder()
            .with_name(file.name.unwrap_or(default_name))
            .with_source(Some(path.to_path_buf()))
            .with_matrix(matrix)
            .build()
    }

    fn parse_str(
        content: &str,
        format: FileFormat,
    ) -> Result<Self, (GraphSyntaxError, Option<SourceSpan>)> {
        match format {
            FileFormat::Toml => toml::from_str(content).map_err(|e| {
                let span = e
                    .span()
                    .map(|span| SourceSpan::new(span.start.into(), span.end - span.start));
                (e.into(), span)
            }),
            FileFormat::Json => serde_json::from_str(content).map_err(|e| {
                let span = json_offset(content, e.line(), e.column())
                    .map(|offset| SourceSpan::new(offset.into(), 1));
                (e.into(), span)
            }),
        }
    }

    /// Turn whichever shape the file uses into a validated matrix
    pub fn to_matrix(&self) -> Result<AdjacencyMatrix, LoopError> {
        match (&self.matrix, &self.edges, &self.successors) {
            (Some(rows), None, None) => {
                if self.vertices.is_some_and(|n| n != rows.len()) {
                    return Err(LoopError::invalid_graph(format!(
                        "'vertices' is {} but 'matrix' has {} rows",
                        self.vertices.unwrap_or_default(),
                        rows.len()
                    )));
                }
                AdjacencyMatrix::from_rows(rows)
            }
            (None, Some(edges), None) => {
                let vertices = self.vertices.ok_or_else(|| {
                    LoopError::invalid_graph("an 'edges' list needs a 'vertices' count")
                })?;
                AdjacencyMatrix::from_edges(vertices, edges.iter().copied())
            }
            (None, None, Some(successors)) => {
                if self.vertices.is_some_and(|n| n != successors.len()) {
                    return Err(LoopError::invalid_graph(format!(
                        "'vertices' is {} but 'successors' has {} entries",
                        self.vertices.unwrap_or_default(),
                        successors.len()
                    )));
                }
                AdjacencyMatrix::from_successors(successors)
            }
            (None, None, None) => Err(LoopError::invalid_graph(
                "expected one of 'matrix', 'edges' or 'successors'",
            )),
            _ => Err(LoopError::invalid_graph(
                "only one of 'matrix', 'edges' or 'successors' may be given",
            )),
        }
    }
}

/// Byte offset of a 1-based line/column position reported by serde_json
fn json_offset(content: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let line_start: usize = content
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    let offset = line_start + column.saturating_sub(1);
    (offset < content.len()).then_some(offset)
}

/// Load a graph file from disk
pub fn load_graph_file(path: &Path) -> Result<NamedGraph, LoopError> {
    GraphFile::parse_file(path)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;
    use tempfile::NamedTempFile;

    use super::*;

    fn temp_graph(suffix: &str, content: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        write!(file, "{content}").unwrap();
        file
    }

    #[test]
    fn test_parse_toml_matrix() {
        let file = temp_graph(
            ".toml",
            r#"
name = "two-cycle"
matrix = [[0, 1], [1, 0]]
"#,
        );

        let graph = GraphFile::parse_file(file.path()).unwrap();

        assert_eq!(graph.name(), "two-cycle");
        assert_eq!(graph.matrix().edge_count(), 2);
        assert_eq!(graph.source(), Some(file.path()));
    }

    #[test]
    fn test_parse_json_edges_defaults_name_to_stem() {
        let file = temp_graph(".json", r#"{"vertices": 3, "edges": [[0, 1], [1, 2]]}"#);

        let graph = GraphFile::parse_file(file.path()).unwrap();
        let stem = file.path().file_stem().unwrap().to_string_lossy();

        assert_eq!(graph.name(), stem);
        assert!(graph.matrix().has_edge(1, 2));
    }

    #[test]
    fn test_parse_successors() {
        let file = temp_graph(".toml", "successors = [[1], [2], [0]]\n");

        let graph = GraphFile::parse_file(file.path()).unwrap();

        assert_eq!(graph.matrix().vertex_count(), 3);
        assert!(graph.matrix().has_edge(2, 0));
    }

    #[test]
    fn test_invalid_marker_is_invalid_graph() {
        let file = temp_graph(".toml", "matrix = [[0, 2], [0, 0]]\n");

        let err = GraphFile::parse_file(file.path()).unwrap_err();

        assert!(matches!(err, LoopError::InvalidGraph { .. }));
        assert!(err.to_string().contains("value 2"));
    }

    #[test]
    fn test_edges_need_vertex_count() {
        let file = temp_graph(".toml", "edges = [[0, 1]]\n");

        let err = GraphFile::parse_file(file.path()).unwrap_err();

        assert!(err.to_string().contains("'vertices'"));
    }

    #[test]
    fn test_oversized_vertex_count_is_invalid_graph() {
        for vertices in ["4294967296", "100000"] {
            let file = temp_graph(".toml", &format!("vertices = {vertices}\nedges = []\n"));

            let err = GraphFile::parse_file(file.path()).unwrap_err();

            assert!(matches!(err, LoopError::InvalidGraph { .. }));
            assert!(err.to_string().contains("exceeds the limit"));
        }
    }

    #[test]
    fn test_multiple_shapes_rejected() {
        let graph_file = GraphFile {
            matrix: Some(vec![vec![0]]),
            successors: Some(vec![vec![]]),
            ..Default::default()
        };

        let err = graph_file.to_matrix().unwrap_err();
        assert!(err.to_string().contains("only one of"));
    }

    #[test]
    fn test_missing_shape_rejected() {
        let err = GraphFile::default().to_matrix().unwrap_err();

        assert!(matches!(err, LoopError::InvalidGraph { .. }));
    }

    #[test]
    fn test_vertex_count_mismatch_rejected() {
        let graph_file = GraphFile {
            vertices: Some(3),
            matrix: Some(vec![vec![0, 1], vec![0, 0]]),
            ..Default::default()
        };

        assert!(graph_file.to_matrix().is_err());
    }

    #[test]
    fn test_toml_syntax_error_has_span() {
        let file = temp_graph(".toml", "matrix = [[0, 1]\n");

        let err = GraphFile::parse_file(file.path()).unwrap_err();

        match err {
            LoopError::GraphParseError(parse_err) => {
                assert_eq!(parse_err.format, "TOML");
                assert!(parse_err.span.is_some());
            }
            other => panic!("Expected GraphParseError, got {other:?}"),
        }
    }

    #[test]
    fn test_json_syntax_error() {
        let file = temp_graph(".json", "{\"matrix\": [[0, 1]\n");

        let err = GraphFile::parse_file(file.path()).unwrap_err();

        assert!(matches!(err, LoopError::GraphParseError(_)));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let file = temp_graph(".toml", "matrix = [[0]]\nweights = [1]\n");

        let err = GraphFile::parse_file(file.path()).unwrap_err();

        assert!(matches!(err, LoopError::GraphParseError(_)));
    }

    #[test]
    fn test_unsupported_extension() {
        let file = temp_graph(".yaml", "matrix: []\n");

        let err = GraphFile::parse_file(file.path()).unwrap_err();

        assert!(matches!(err, LoopError::ConfigurationError { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = load_graph_file(Path::new("/definitely/not/here.toml")).unwrap_err();

        assert!(matches!(err, LoopError::FileReadError { .. }));
    }

    #[test]
    fn test_json_offset() {
        let content = "{\n  \"a\": 1\n}";

        assert_eq!(json_offset(content, 1, 1), Some(0));
        assert_eq!(json_offset(content, 2, 3), Some(4));
        assert_eq!(json_offset(content, 0, 0), None);
        assert_eq!(json_offset(content, 9, 9), None);
    }
}
