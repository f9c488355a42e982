//! Command implementations for the loop-the-loop CLI
//!
//! This module contains the implementations for each CLI command:
//! - inspect: Inspect graph files for directed cycles
//! - rehearse: Run the built-in sample graphs
//! - spectacle: Create a spectacular visualization of one graph

pub mod inspect;
pub mod rehearse;
pub mod spectacle;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Inspect { .. } => inspect::execute_inspect_command(command),
        Commands::Rehearse { .. } => rehearse::execute_rehearse_command(command),
        Commands::Spectacle { .. } => spectacle::execute_spectacle_command(command),
    }
}
