//! Rehearse command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::RehearseConfig;
use crate::error::LoopError;

impl FromCommand for RehearseConfig {
    fn from_command(command: Commands) -> Result<Self, LoopError> {
        match command {
            Commands::Rehearse {
                sample,
                format,
                no_matrix,
            } => RehearseConfig::builder()
                .with_sample(sample)
                .with_format(format.format)
                .with_show_matrix(!no_matrix)
                .build(),
            _ => Err(LoopError::ConfigurationError {
                message: "Invalid command type for RehearseConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(RehearseConfig);

/// Execute the rehearse command over the built-in sample graphs
pub fn execute_rehearse_command(command: Commands) -> Result<()> {
    let config = RehearseConfig::from_command(command)
        .wrap_err("Failed to parse rehearse command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::rehearse::RehearseExecutor;
    RehearseExecutor::execute(config)
}
