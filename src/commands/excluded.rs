//! Excluded command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::ExcludedConfig;
use crate::error::AnticycleError;

impl FromCommand for ExcludedConfig {
    fn from_command(command: Commands) -> Result<Self, AnticycleError> {
        match command {
            Commands::Excluded { common, format } => ExcludedConfig::builder()
                .with_path(common.get_path())
                .with_format(format.format)
                .with_exclusions(common.exclusion_overrides())
                .build(),
            _ => Err(AnticycleError::ConfigurationError {
                message: "Invalid command type for ExcludedConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(ExcludedConfig);

/// Execute the excluded command, printing the effective exclusion list
pub fn execute_excluded_command(command: Commands) -> Result<()> {
    let config = ExcludedConfig::from_command(command)
        .wrap_err("Failed to parse excluded command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::excluded::ExcludedExecutor;
    ExcludedExecutor::execute(config)
}
