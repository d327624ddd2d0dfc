//! Excluded command executor

use miette::{Result, WrapErr};
use serde_json::json;

use crate::cli::OutputFormat;
use crate::config::{ExcludedConfig, ProjectConfig};
use crate::error::AnticycleError;
use crate::executors::CommandExecutor;
use crate::scan::ExclusionList;

pub struct ExcludedExecutor;

impl ExcludedExecutor {
    pub fn resolve(config: &ExcludedConfig) -> Result<ExclusionList, AnticycleError> {
        let project = ProjectConfig::discover(&config.path)?;
        Ok(config.exclusions.resolve(project.as_ref()))
    }

    pub fn render(list: &ExclusionList, format: OutputFormat) -> Result<String, AnticycleError> {
        match format {
            OutputFormat::Json => {
                let mut output = serde_json::to_string_pretty(&json!({ "excluded": list.names() }))?;
                output.push('\n');
                Ok(output)
            }
            _ => Ok(list.names().iter().map(|name| format!("{name}\n")).collect()),
        }
    }
}

impl CommandExecutor for ExcludedExecutor {
    type Config = ExcludedConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let list = Self::resolve(&config).wrap_err("Failed to resolve the exclusion list")?;
        let output = Self::render(&list, config.format)
            .wrap_err("Failed to render the exclusion list")?;
        print!("{output}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    use super::*;

    #[test]
    fn test_render_text() {
        let list = ExclusionList::new(["vendor", "bin"], ["mocks"]);
        let output = ExcludedExecutor::render(&list, OutputFormat::Text).unwrap();
        assert_eq!(output, "bin\nmocks\nvendor\n");
    }

    #[test]
    fn test_render_json() {
        let list = ExclusionList::new(["vendor"], std::iter::empty::<String>());
        let output = ExcludedExecutor::render(&list, OutputFormat::Json).unwrap();
        let json: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["excluded"], serde_json::json!(["vendor"]));
    }

    #[test]
    fn test_empty_list_renders_nothing_as_text() {
        let output =
            ExcludedExecutor::render(&ExclusionList::default(), OutputFormat::Text).unwrap();
        assert_eq!(output, "");
    }
}
