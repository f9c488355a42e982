//! Inspect command configuration

use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::error::LoopError;

/// Configuration for the inspect command
///
/// This struct contains all options for loading graph files and reporting
/// the cycles found in them.
#[derive(Debug, Clone)]
pub struct InspectConfig {
    /// Graph files or directories to search for graph files
    pub paths: Vec<PathBuf>,
    /// Only load files whose name matches this glob
    pub pattern: Option<glob::Pattern>,
    /// Output format for the report
    pub format: OutputFormat,
    /// Maximum number of witness cycles to report (None = all)
    pub max_cycles: Option<usize>,
    /// Print each adjacency matrix in the human report
    pub show_matrix: bool,
    /// Whether to exit with error code if cycles are found
    pub error_on_cycles: bool,
}

impl InspectConfig {
    pub fn builder() -> InspectConfigBuilder {
        InspectConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct InspectConfigBuilder {
    paths: Option<Vec<PathBuf>>,
    pattern: Option<glob::Pattern>,
    format: Option<OutputFormat>,
    max_cycles: Option<usize>,
    show_matrix: bool,
    error_on_cycles: bool,
}

impl InspectConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.paths = Some(paths);
        self
    }

    pub fn with_pattern(mut self, pattern: Option<glob::Pattern>) -> Self {
        self.pattern = pattern;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_max_cycles(mut self, max_cycles: Option<usize>) -> Self {
        self.max_cycles = max_cycles;
        self
    }

    pub fn with_show_matrix(mut self, show_matrix: bool) -> Self {
        self.show_matrix = show_matrix;
        self
    }

    pub fn with_error_on_cycles(mut self, error_on_cycles: bool) -> Self {
        self.error_on_cycles = error_on_cycles;
        self
    }
}

impl crate::common::ConfigBuilder for InspectConfigBuilder {
    type Config = InspectConfig;

    fn build(self) -> Result<Self::Config, LoopError> {
        let paths = self
            .paths
            .ok_or_else(|| LoopError::ConfigurationError {
                message: "Missing required field: paths".to_string(),
            })?;
        if paths.is_empty() {
            return Err(LoopError::ConfigurationError {
                message: "At least one path is required".to_string(),
            });
        }

        Ok(InspectConfig {
            paths,
            pattern: self.pattern,
            format: self.format.ok_or_else(|| LoopError::ConfigurationError {
                message: "Missing required field: format".to_string(),
            })?,
            max_cycles: self.max_cycles,
            show_matrix: self.show_matrix,
            error_on_cycles: self.error_on_cycles,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ConfigBuilder;

    #[test]
    fn test_builder_defaults() {
        let config = InspectConfig::builder()
            .with_paths(vec![PathBuf::from(".")])
            .with_format(OutputFormat::Json)
            .build()
            .unwrap();

        assert!(config.pattern.is_none());
        assert_eq!(config.max_cycles, None);
        assert!(!config.show_matrix);
        assert!(!config.error_on_cycles);
    }

    #[test]
    fn test_builder_requires_format() {
        let result = InspectConfig::builder()
            .with_paths(vec![PathBuf::from(".")])
            .build();

        assert!(matches!(
            result,
            Err(LoopError::ConfigurationError { message }) if message.contains("format")
        ));
    }

    #[test]
    fn test_builder_rejects_empty_paths() {
        let result = InspectConfig::builder()
            .with_paths(vec![])
            .with_format(OutputFormat::Human)
            .build();

        assert!(result.is_err());
    }
}
