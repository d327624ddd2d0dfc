//! Excluded command configuration

use std::path::PathBuf;

use super::exclusions::ExclusionOverrides;
use crate::cli::OutputFormat;
use crate::common::ConfigBuilder;
use crate::error::AnticycleError;

/// Configuration for the excluded command, which prints the effective
/// exclusion list for a source tree
#[derive(Debug, Clone)]
pub struct ExcludedConfig {
    pub path: PathBuf,
    pub format: OutputFormat,
    pub exclusions: ExclusionOverrides,
}

impl ExcludedConfig {
    pub fn builder() -> ExcludedConfigBuilder {
        ExcludedConfigBuilder::default()
    }
}

#[derive(Default)]
pub struct ExcludedConfigBuilder {
    path: Option<PathBuf>,
    format: Option<OutputFormat>,
    exclusions: Option<ExclusionOverrides>,
}

impl ExcludedConfigBuilder {
    pub fn with_path(mut self, path: PathBuf) -> Self {
        self.path = Some(path);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_exclusions(mut self, exclusions: ExclusionOverrides) -> Self {
        self.exclusions = Some(exclusions);
        self
    }
}

impl ConfigBuilder for ExcludedConfigBuilder {
    type Config = ExcludedConfig;

    fn build(self) -> Result<Self::Config, AnticycleError> {
        let format = self
            .format
            .ok_or_else(|| AnticycleError::ConfigurationError {
                message: "Missing required field: format".to_string(),
            })?;

        if format == OutputFormat::Dot {
            return Err(AnticycleError::ConfigurationError {
                message: "The exclusion list cannot be rendered as a graph; use text or json"
                    .to_string(),
            });
        }

        Ok(ExcludedConfig {
            path: self
                .path
                .ok_or_else(|| AnticycleError::ConfigurationError {
                    message: "Missing required field: path".to_string(),
                })?,
            format,
            exclusions: self.exclusions.unwrap_or_default(),
        })
    }
}
