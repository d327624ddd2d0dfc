//! Inspect command configuration

use std::path::PathBuf;

use super::exclusions::ExclusionOverrides;
use crate::cli::OutputFormat;
use crate::common::ConfigBuilder;
use crate::error::AnticycleError;
use crate::view_filter::View;

/// Configuration for the inspect command
///
/// This struct contains all options for scanning a Go source tree and
/// reporting the packages that take part in import cycles.
#[derive(Debug, Clone)]
pub struct InspectConfig {
    /// Root of the source tree to scan
    pub path: PathBuf,
    /// Which packages end up in the result
    pub view: View,
    /// Output format for the report
    pub format: OutputFormat,
    /// Exclusions given on the command line or through the environment
    pub exclusions: ExclusionOverrides,
    /// Whether cycle chains are attached to the result
    pub include_metadata: bool,
    /// Whether to exit with error code if cycles are found
    pub error_on_cycles: bool,
}

impl InspectConfig {
    pub fn builder() -> InspectConfigBuilder {
        InspectConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct InspectConfigBuilder {
    path: Option<PathBuf>,
    view: Option<View>,
    format: Option<OutputFormat>,
    exclusions: Option<ExclusionOverrides>,
    include_metadata: Option<bool>,
    error_on_cycles: Option<bool>,
}

impl InspectConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_path(mut self, path: PathBuf) -> Self {
        self.path = Some(path);
        self
    }

    pub fn with_view(mut self, view: View) -> Self {
        self.view = Some(view);
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

    pub fn with_include_metadata(mut self, include_metadata: bool) -> Self {
        self.include_metadata = Some(include_metadata);
        self
    }

    pub fn with_error_on_cycles(mut self, error_on_cycles: bool) -> Self {
        self.error_on_cycles = Some(error_on_cycles);
        self
    }
}

fn missing(field: &str) -> AnticycleError {
    AnticycleError::ConfigurationError {
        message: format!("Missing required field: {field}"),
    }
}

impl ConfigBuilder for InspectConfigBuilder {
    type Config = InspectConfig;

    fn build(self) -> Result<Self::Config, AnticycleError> {
        Ok(InspectConfig {
            path: self.path.ok_or_else(|| missing("path"))?,
            view: self.view.unwrap_or_default(),
            format: self.format.ok_or_else(|| missing("format"))?,
            exclusions: self.exclusions.unwrap_or_default(),
            include_metadata: self.include_metadata.unwrap_or(true),
            error_on_cycles: self.error_on_cycles.unwrap_or(false),
        })
    }
}
