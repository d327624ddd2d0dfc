//! Directory exclusion

use std::ffi::OsStr;

use serde::Serialize;

use crate::constants::scan::DEFAULT_EXCLUDED;

/// Sorted, deduplicated set of directory base names the scanner skips
///
/// Matching is by exact name, never by pattern or path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExclusionList {
    excluded: Vec<String>,
}

impl ExclusionList {
    /// Merge a default list with user additions
    pub fn new<D, C>(defaults: D, custom: C) -> Self
    where
        D: IntoIterator,
        D::Item: Into<String>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        let mut excluded: Vec<String> = defaults
            .into_iter()
            .map(Into::into)
            .chain(custom.into_iter().map(Into::into))
            .filter(|name| !name.is_empty())
            .collect();
        excluded.sort();
        excluded.dedup();
        Self { excluded }
    }

    /// The built-in defaults with nothing added
    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_EXCLUDED.iter().copied(), std::iter::empty::<String>())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.excluded
            .binary_search_by(|probe| probe.as_str().cmp(name))
            .is_ok()
    }

    /// Whether a walked entry's base name is excluded; names that are not
    /// valid UTF-8 never match.
    pub fn excludes(&self, file_name: &OsStr) -> bool {
        file_name.to_str().is_some_and(|name| self.contains(name))
    }

    pub fn names(&self) -> &[String] {
        &self.excluded
    }

    pub fn is_empty(&self) -> bool {
        self.excluded.is_empty()
    }
}
