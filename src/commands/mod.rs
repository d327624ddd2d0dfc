//! Command implementations for the anticycle CLI
//!
//! - inspect: find the packages that take part in import cycles
//! - excluded: print the effective directory exclusion list

pub mod excluded;
pub mod inspect;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Inspect { .. } => inspect::execute_inspect_command(command),
        Commands::Excluded { .. } => excluded::execute_excluded_command(command),
    }
}
