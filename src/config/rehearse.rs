//! Rehearse command configuration

use crate::cli::OutputFormat;
use crate::error::LoopError;

#[derive(Debug, Clone)]
pub struct RehearseConfig {
    /// Only run the sample with this name (all samples when None)
    pub sample: Option<String>,
    pub format: OutputFormat,
    pub show_matrix: bool,
}

impl RehearseConfig {
    pub fn builder() -> RehearseConfigBuilder {
        RehearseConfigBuilder::new()
    }
}

pub struct RehearseConfigBuilder {
    sample: Option<String>,
    format: Option<OutputFormat>,
    show_matrix: bool,
}

impl Default for RehearseConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RehearseConfigBuilder {
    pub fn new() -> Self {
        Self {
            sample: None,
            format: None,
            show_matrix: true,
        }
    }

    pub fn with_sample(mut self, sample: Option<String>) -> Self {
        self.sample = sample;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_show_matrix(mut self, show_matrix: bool) -> Self {
        self.show_matrix = show_matrix;
        self
    }
}

impl crate::common::ConfigBuilder for RehearseConfigBuilder {
    type Config = RehearseConfig;

    fn build(self) -> Result<Self::Config, LoopError> {
        Ok(RehearseConfig {
            sample: self.sample,
            format: self.format.ok_or_else(|| LoopError::ConfigurationError {
                message: "Missing required field: format".to_string(),
            })?,
            show_matrix: self.show_matrix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ConfigBuilder;

    #[test]
    fn test_matrix_shown_by_default() {
        let config = RehearseConfig::builder()
            .with_format(OutputFormat::Human)
            .build()
            .unwrap();

        assert!(config.show_matrix);
        assert!(config.sample.is_none());
    }
}
