//! Resolution of the effective directory exclusion list

use super::file::ProjectConfig;
use crate::constants::scan::DEFAULT_EXCLUDED;
use crate::scan::ExclusionList;

/// Exclusions given on the command line or through the environment
///
/// `None` means the source was not given at all. `Some(vec![])` is an
/// explicit empty list, which clears whatever a lower-precedence source
/// would have contributed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionOverrides {
    pub exclude: Option<Vec<String>>,
    pub exclude_default: Option<Vec<String>>,
}

impl ExclusionOverrides {
    pub fn new(exclude: Option<Vec<String>>, exclude_default: Option<Vec<String>>) -> Self {
        Self {
            exclude,
            exclude_default,
        }
    }

    /// Merge with the project file and the built-in defaults. Each of the
    /// two lists is taken from the highest-precedence source that sets it.
    pub fn resolve(&self, project: Option<&ProjectConfig>) -> ExclusionList {
        let defaults: Vec<String> = self
            .exclude_default
            .clone()
            .or_else(|| project.and_then(|p| p.exclude_default.clone()))
            .unwrap_or_else(|| DEFAULT_EXCLUDED.iter().map(|s| s.to_string()).collect());

        let custom: Vec<String> = self
            .exclude
            .clone()
            .or_else(|| project.and_then(|p| p.exclude.clone()))
            .unwrap_or_default();

        ExclusionList::new(defaults, custom)
    }
}
