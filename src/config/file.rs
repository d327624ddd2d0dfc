//! Project configuration file

use std::path::Path;

use miette::{NamedSource, SourceSpan};
use serde::Deserialize;

use crate::constants::scan::PROJECT_CONFIG_FILE;
use crate::error::{AnticycleError, ConfigParseError};

/// Optional `anticycle.toml` at the root of the scanned project
///
/// ```toml
/// exclude = ["generated", "mocks"]
/// exclude-default = ["vendor"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ProjectConfig {
    /// Added to the default exclusion list
    pub exclude: Option<Vec<String>>,
    /// Replaces the built-in default exclusion list
    pub exclude_default: Option<Vec<String>>,
}

impl ProjectConfig {
    /// Load the configuration file from `root`, if there is one
    pub fn discover(root: &Path) -> Result<Option<Self>, AnticycleError> {
        let path = root.join(PROJECT_CONFIG_FILE);
        if !path.is_file() {
            return Ok(None);
        }
        Self::parse_file(&path).map(Some)
    }

    pub fn parse_file(path: &Path) -> Result<Self, AnticycleError> {
        let content = std::fs::read_to_string(path).map_err(|e| AnticycleError::FileReadError {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&path.display().to_string(), &content)
    }

    pub fn parse(file: &str, content: &str) -> Result<Self, AnticycleError> {
        toml::from_str(content).map_err(|e| {
            let span = e
                .span()
                .map(|span| SourceSpan::new(span.start.into(), span.end - span.start));

            AnticycleError::ConfigParse(Box::new(ConfigParseError {
                file: file.to_string(),
                source_code: NamedSource::new(file, content.to_string()),
                span,
                reason: e.message().to_string(),
                source: e,
            }))
        })
    }
}
