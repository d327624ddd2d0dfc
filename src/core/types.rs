//! Core type definitions
//!
//! This module contains the fact model shared by every stage of the
//! analysis: packages, their files, the imports those files reference and the
//! cycle evidence attached by the detector.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single import statement, as written in the source
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportInfo {
    name: String,
    name_short: String,
    alias: Option<String>,
}

impl ImportInfo {
    /// Create an import from its full path; the short name is the last
    /// `/`-separated segment.
    pub fn new(name: impl Into<String>, alias: Option<String>) -> Self {
        let name = name.into();
        let name_short = short_name(&name).to_string();
        Self {
            name,
            name_short,
            alias,
        }
    }

    pub fn from_parts(
        name: impl Into<String>,
        name_short: impl Into<String>,
        alias: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            name_short: name_short.into(),
            alias,
        }
    }

    /// Full, unique import path
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn name_short(&self) -> &str {
        &self.name_short
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }
}

/// Last path segment of an import path
pub fn short_name(name: &str) -> &str {
    name.trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or(name)
}

/// A source file with the imports it declares, in declaration order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct File {
    path: PathBuf,
    imports: Vec<ImportInfo>,
}

impl File {
    pub fn new(path: impl Into<PathBuf>, imports: Vec<ImportInfo>) -> Self {
        Self {
            path: path.into(),
            imports,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn imports(&self) -> &[ImportInfo] {
        &self.imports
    }
}

/// Evidence that a file's import closes a dependency cycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cycle {
    affected_file: PathBuf,
    affected_import: ImportInfo,
}

impl Cycle {
    pub fn new(affected_file: impl Into<PathBuf>, affected_import: ImportInfo) -> Self {
        Self {
            affected_file: affected_file.into(),
            affected_import,
        }
    }

    pub fn affected_file(&self) -> &Path {
        &self.affected_file
    }

    pub fn affected_import(&self) -> &ImportInfo {
        &self.affected_import
    }
}

/// A package: every file found under one directory with the same package
/// clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    name: String,
    path: String,
    imports: BTreeMap<String, ImportInfo>,
    files: Vec<File>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    cycles: Vec<Cycle>,
    have_cycle: bool,
}

impl Package {
    pub fn builder() -> PackageBuilder {
        PackageBuilder::default()
    }

    /// Short name, as declared by the package clause
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Globally unique qualifier of the package
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Every import of the package, keyed by full import name
    pub fn imports(&self) -> &BTreeMap<String, ImportInfo> {
        &self.imports
    }

    pub fn files(&self) -> &[File] {
        &self.files
    }

    pub fn cycles(&self) -> &[Cycle] {
        &self.cycles
    }

    pub fn have_cycle(&self) -> bool {
        self.have_cycle
    }

    pub(crate) fn mark_cycle(&mut self) {
        self.have_cycle = true;
    }

    pub(crate) fn add_evidence(&mut self, cycle: Cycle) {
        self.cycles.push(cycle);
    }

    /// Same identity and evidence, narrowed imports and files
    pub(crate) fn narrowed(&self, imports: BTreeMap<String, ImportInfo>, files: Vec<File>) -> Self {
        Self {
            name: self.name.clone(),
            path: self.path.clone(),
            imports,
            files,
            cycles: self.cycles.clone(),
            have_cycle: self.have_cycle,
        }
    }
}

#[derive(Error, Debug, Diagnostic)]
pub enum PackageBuilderError {
    #[error("Package name is required")]
    #[diagnostic(
        code(anticycle::model::missing_package_name),
        help("Provide a name for the package using with_name()")
    )]
    MissingName,

    #[error("Package path is required")]
    #[diagnostic(
        code(anticycle::model::missing_package_path),
        help("Provide a path for the package using with_path()")
    )]
    MissingPath,
}

#[derive(Default)]
pub struct PackageBuilder {
    name: Option<String>,
    path: Option<String>,
    files: Vec<File>,
}

impl PackageBuilder {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_file(mut self, file: File) -> Self {
        self.files.push(file);
        self
    }

    pub fn with_files(mut self, files: Vec<File>) -> Self {
        self.files.extend(files);
        self
    }

    pub fn build(self) -> Result<Package, PackageBuilderError> {
        let mut imports = BTreeMap::new();
        for file in &self.files {
            for import in file.imports() {
                imports
                    .entry(import.name().to_string())
                    .or_insert_with(|| import.clone());
            }
        }

        Ok(Package {
            name: self.name.ok_or(PackageBuilderError::MissingName)?,
            path: self.path.ok_or(PackageBuilderError::MissingPath)?,
            imports,
            files: self.files,
            cycles: Vec::new(),
            have_cycle: false,
        })
    }
}

/// Summary data derived from a result set
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub cycles: Vec<Vec<String>>,
}

/// Result of one analysis run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    pub packages: Vec<Package>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl Analysis {
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Number of packages in the result that sit on a cycle
    pub fn cyclic_count(&self) -> usize {
        self.packages.iter().filter(|p| p.have_cycle()).count()
    }

    pub fn cycle_chains(&self) -> &[Vec<String>] {
        self.metadata
            .as_ref()
            .map(|m| m.cycles.as_slice())
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_import_info_short_name() {
        let import = ImportInfo::new("github.com/acme/app/pkg/bar", None);
        assert_eq!(import.name_short(), "bar");
        assert_eq!(import.alias(), None);

        let std = ImportInfo::new("fmt", Some("f".to_string()));
        assert_eq!(std.name_short(), "fmt");
        assert_eq!(std.alias(), Some("f"));
    }

    #[test]
    fn test_import_info_from_parts() {
        let versioned = ImportInfo::from_parts("github.com/acme/yaml/v3", "yaml", None);
        assert_eq!(versioned.name(), "github.com/acme/yaml/v3");
        assert_eq!(versioned.name_short(), "yaml");

        assert_eq!(
            ImportInfo::from_parts("github.com/acme/app/bar", "bar", Some("b".to_string())),
            ImportInfo::new("github.com/acme/app/bar", Some("b".to_string()))
        );
    }

    #[test]
    fn test_builder_merges_file_imports() {
        let shared = ImportInfo::new("example.com/m/foo", None);
        let package = Package::builder()
            .with_name("bar")
            .with_path("m/bar")
            .with_file(File::new(
                "m/bar/a.go",
                vec![shared.clone(), ImportInfo::new("fmt", None)],
            ))
            .with_file(File::new("m/bar/b.go", vec![shared]))
            .build()
            .unwrap();

        assert_eq!(package.imports().len(), 2);
        assert_eq!(package.files().len(), 2);
        assert!(!package.have_cycle());
        assert!(package.cycles().is_empty());
    }

    #[test]
    fn test_builder_requires_name_and_path() {
        assert!(matches!(
            Package::builder().with_path("x").build(),
            Err(PackageBuilderError::MissingName)
        ));
        assert!(matches!(
            Package::builder().with_name("x").build(),
            Err(PackageBuilderError::MissingPath)
        ));
    }

    #[test]
    fn test_package_serialization_shape() {
        let package = Package::builder()
            .with_name("foo")
            .with_path("m/foo")
            .with_file(File::new("m/foo/foo.go", vec![ImportInfo::new("fmt", None)]))
            .build()
            .unwrap();

        let value = serde_json::to_value(&package).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "foo",
                "path": "m/foo",
                "imports": {
                    "fmt": { "name": "fmt", "nameShort": "fmt", "alias": null }
                },
                "files": [
                    {
                        "path": "m/foo/foo.go",
                        "imports": [{ "name": "fmt", "nameShort": "fmt", "alias": null }]
                    }
                ],
                "haveCycle": false
            })
        );
    }
}
