//! Core graph types
//!
//! This module contains the labelled graph passed between the loader, the
//! detector and the report generators.

use std::path::{Path, PathBuf};

use crate::graph::AdjacencyMatrix;

/// A graph together with the name it is reported under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedGraph {
    name: String,
    source: Option<PathBuf>,
    matrix: AdjacencyMatrix,
}

impl NamedGraph {
    pub fn new(name: impl Into<String>, matrix: AdjacencyMatrix) -> Self {
        Self {
            name: name.into(),
            source: None,
            matrix,
        }
    }

    pub fn builder() -> NamedGraphBuilder {
        NamedGraphBuilder::new()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// File the graph was loaded from, if any
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn matrix(&self) -> &AdjacencyMatrix {
        &self.matrix
    }
}

pub struct NamedGraphBuilder {
    name: Option<String>,
    source: Option<PathBuf>,
    matrix: Option<AdjacencyMatrix>,
}

impl Default for NamedGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl NamedGraphBuilder {
    pub fn new() -> Self {
        Self {
            name: None,
            source: None,
            matrix: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_source(mut self, source: Option<PathBuf>) -> Self {
        self.source = source;
        self
    }

    pub fn with_matrix(mut self, matrix: AdjacencyMatrix) -> Self {
        self.matrix = Some(matrix);
        self
    }
}

impl crate::common::ConfigBuilder for NamedGraphBuilder {
    type Config = NamedGraph;

    fn build(self) -> Result<Self::Config, crate::error::LoopError> {
        Ok(NamedGraph {
            name: self
                .name
                .ok_or_else(|| crate::error::LoopError::ConfigurationError {
                    message: "Missing required field: name".to_string(),
                })?,
            source: self.source,
            matrix: self
                .matrix
                .ok_or_else(|| crate::error::LoopError::ConfigurationError {
                    message: "Missing required field: matrix".to_string(),
                })?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ConfigBuilder;
    use crate::error::LoopError;

    #[test]
    fn test_builder_requires_name() {
        let result = NamedGraph::builder()
            .with_matrix(AdjacencyMatrix::new(2).unwrap())
            .build();

        assert!(matches!(
            result,
            Err(LoopError::ConfigurationError { message }) if message.contains("name")
        ));
    }

    #[test]
    fn test_builder_keeps_source() {
        let graph = NamedGraph::builder()
            .with_name("pipeline")
            .with_source(Some(PathBuf::from("graphs/pipeline.toml")))
            .with_matrix(AdjacencyMatrix::new(1).unwrap())
            .build()
            .unwrap();

        assert_eq!(graph.name(), "pipeline");
        assert_eq!(graph.source(), Some(Path::new("graphs/pipeline.toml")));
        assert_eq!(graph.matrix().vertex_count(), 1);
    }

    #[test]
    fn test_new_has_no_source() {
        let graph = NamedGraph::new("inline", AdjacencyMatrix::new(0).unwrap());

        assert!(graph.source().is_none());
    }
}
