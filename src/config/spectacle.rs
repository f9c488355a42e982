//! Spectacle command configuration

use std::path::PathBuf;

use crate::cli::GraphFormat;
use crate::error::LoopError;

#[derive(Debug, Clone)]
pub struct SpectacleConfig {
    pub path: PathBuf,
    pub format: GraphFormat,
    pub output: Option<PathBuf>,
    pub highlight_cycles: bool,
    pub show_degrees: bool,
}

impl SpectacleConfig {
    pub fn builder() -> SpectacleConfigBuilder {
        SpectacleConfigBuilder::new()
    }
}

pub struct SpectacleConfigBuilder {
    path: Option<PathBuf>,
    format: Option<GraphFormat>,
    output: Option<PathBuf>,
    highlight_cycles: bool,
    show_degrees: bool,
}

impl Default for SpectacleConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SpectacleConfigBuilder {
    pub fn new() -> Self {
        Self {
            path: None,
            format: None,
            output: None,
            highlight_cycles: true,
            show_degrees: false,
        }
    }

    pub fn with_path(mut self, path: PathBuf) -> Self {
        self.path = Some(path);
        self
    }

    pub fn with_format(mut self, format: GraphFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = output;
        self
    }

    pub fn with_highlight_cycles(mut self, highlight_cycles: bool) -> Self {
        self.highlight_cycles = highlight_cycles;
        self
    }

    pub fn with_show_degrees(mut self, show_degrees: bool) -> Self {
        self.show_degrees = show_degrees;
        self
    }
}

impl crate::common::ConfigBuilder for SpectacleConfigBuilder {
    type Config = SpectacleConfig;

    fn build(self) -> Result<Self::Config, LoopError> {
        Ok(SpectacleConfig {
            path: self.path.ok_or_else(|| LoopError::ConfigurationError {
                message: "Missing required field: path".to_string(),
            })?,
            format: self.format.ok_or_else(|| LoopError::ConfigurationError {
                message: "Missing required field: format".to_string(),
            })?,
            output: self.output,
            highlight_cycles: self.highlight_cycles,
            show_degrees: self.show_degrees,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ConfigBuilder;

    #[test]
    fn test_builder_requires_path() {
        let result = SpectacleConfig::builder()
            .with_format(GraphFormat::Mermaid)
            .build();

        assert!(matches!(
            result,
            Err(LoopError::ConfigurationError { message }) if message.contains("path")
        ));
    }

    #[test]
    fn test_builder_sets_fields() {
        let config = SpectacleConfig::builder()
            .with_path(PathBuf::from("ride.json"))
            .with_format(GraphFormat::Dot)
            .with_output(Some(PathBuf::from("ride.dot")))
            .with_highlight_cycles(false)
            .with_show_degrees(true)
            .build()
            .unwrap();

        assert_eq!(config.format, GraphFormat::Dot);
        assert_eq!(config.output, Some(PathBuf::from("ride.dot")));
        assert!(!config.highlight_cycles);
        assert!(config.show_degrees);
    }
}
