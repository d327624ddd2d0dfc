//! Command executors that handle the actual logic for each command

pub mod excluded;
pub mod inspect;

use miette::Result;

/// Trait for command executors
pub trait CommandExecutor {
    type Config;

    /// Execute the command with the given configuration
    fn execute(config: Self::Config) -> Result<()>;
}
