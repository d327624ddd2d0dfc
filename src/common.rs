//! Common functionality shared across commands

use std::path::PathBuf;

use clap::Args;

use crate::config::ExclusionOverrides;
use crate::error::AnticycleError;
use crate::utils::string::split_names;

/// Common arguments shared by multiple commands
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Directory to analyze (defaults to current directory)
    #[arg(value_name = "DIR")]
    pub path: Option<PathBuf>,

    /// Space-separated directory names to skip, added to the defaults
    #[arg(long, value_name = "NAMES", env = "ANTICYCLE_EXCLUDE")]
    pub exclude: Option<String>,

    /// Space-separated directory names replacing the default exclusions; an
    /// empty string clears them
    #[arg(long, value_name = "NAMES", env = "ANTICYCLE_EXCLUDE_DEFAULT")]
    pub exclude_default: Option<String>,
}

/// Common output format arguments
#[derive(Args, Debug, Clone)]
pub struct FormatArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = crate::constants::output::DEFAULT_FORMAT, env = "ANTICYCLE_FORMAT")]
    pub format: crate::cli::OutputFormat,
}

impl CommonArgs {
    /// Get the path, using current directory if none provided
    pub fn get_path(&self) -> PathBuf {
        self.path
            .clone()
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }

    pub fn exclusion_overrides(&self) -> ExclusionOverrides {
        ExclusionOverrides::new(
            self.exclude.as_deref().map(split_names),
            self.exclude_default.as_deref().map(split_names),
        )
    }
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, AnticycleError>;
}

/// Trait for configurations that can be created from CLI commands
pub trait FromCommand: Sized {
    /// The command variant that this config can be created from
    fn from_command(command: crate::cli::Commands) -> Result<Self, AnticycleError>;
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = $crate::error::AnticycleError;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn args(exclude: Option<&str>, exclude_default: Option<&str>) -> CommonArgs {
        CommonArgs {
            path: None,
            exclude: exclude.map(str::to_string),
            exclude_default: exclude_default.map(str::to_string),
        }
    }

    #[test]
    fn test_get_path_defaults_to_current_dir() {
        let path = args(None, None).get_path();
        assert!(path.is_absolute() || path == std::path::Path::new("."));
    }

    #[test]
    fn test_get_path_with_value() {
        let mut common = args(None, None);
        common.path = Some(PathBuf::from("/tmp/project"));
        assert_eq!(common.get_path(), PathBuf::from("/tmp/project"));
    }

    #[test]
    fn test_exclusion_overrides() {
        let overrides = args(Some("'mocks gen'"), Some("")).exclusion_overrides();
        assert_eq!(
            overrides.exclude,
            Some(vec!["mocks".to_string(), "gen".to_string()])
        );
        assert_eq!(overrides.exclude_default, Some(Vec::new()));

        assert_eq!(
            args(None, None).exclusion_overrides(),
            ExclusionOverrides::default()
        );
    }
}
