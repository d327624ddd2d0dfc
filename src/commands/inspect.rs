//! Inspect command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::InspectConfig;
use crate::error::AnticycleError;

impl FromCommand for InspectConfig {
    fn from_command(command: Commands) -> Result<Self, AnticycleError> {
        match command {
            Commands::Inspect {
                common,
                format,
                view,
                no_metadata,
                error_on_cycles,
            } => InspectConfig::builder()
                .with_path(common.get_path())
                .with_view(view)
                .with_format(format.format)
                .with_exclusions(common.exclusion_overrides())
                .with_include_metadata(!no_metadata)
                .with_error_on_cycles(error_on_cycles)
                .build(),
            _ => Err(AnticycleError::ConfigurationError {
                message: "Invalid command type for InspectConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(InspectConfig);

/// Execute the inspect command for detecting package import cycles
pub fn execute_inspect_command(command: Commands) -> Result<()> {
    let config = InspectConfig::from_command(command)
        .wrap_err("Failed to parse inspect command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::inspect::InspectExecutor;
    InspectExecutor::execute(config)
}
