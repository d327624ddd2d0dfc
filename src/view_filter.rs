//! Result views
//!
//! Narrows a detected package set to what an analyst asked to see.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::chains::References;
use crate::core::{File, ImportInfo, Package};

/// Which packages a result keeps
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    /// Every package, untouched
    All,
    /// Cyclic packages, narrowed to the files and imports behind the cycle
    #[default]
    Affected,
    /// Like `affected`, minus packages that only lead into a cycle
    ExcludeRelated,
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            View::All => write!(f, "all"),
            View::Affected => write!(f, "affected"),
            View::ExcludeRelated => write!(f, "exclude-related"),
        }
    }
}

/// Applies a [`View`] to a detected package set
#[derive(Debug, Clone, Copy)]
pub struct ViewFilter {
    view: View,
}

impl ViewFilter {
    pub fn new(view: View) -> Self {
        Self { view }
    }

    pub fn view(&self) -> View {
        self.view
    }

    /// Packages keep their input order in every view
    pub fn apply(&self, packages: Vec<Package>) -> Vec<Package> {
        match self.view {
            View::All => packages,
            View::Affected => affected(&packages),
            View::ExcludeRelated => exclude_related(affected(&packages)),
        }
    }
}

fn affected(packages: &[Package]) -> Vec<Package> {
    packages
        .iter()
        .filter(|p| p.have_cycle())
        .map(narrow)
        .collect()
}

/// Keep only the imports named by the package's cycle evidence and the
/// files those imports come from.
fn narrow(package: &Package) -> Package {
    let mut imports: BTreeMap<String, ImportInfo> = BTreeMap::new();
    for cycle in package.cycles() {
        let import = cycle.affected_import();
        imports
            .entry(import.name().to_string())
            .or_insert_with(|| import.clone());
    }

    let affected_files: HashSet<&std::path::Path> =
        package.cycles().iter().map(|c| c.affected_file()).collect();

    let files = package
        .files()
        .iter()
        .filter(|file| affected_files.contains(file.path()))
        .filter_map(|file| {
            let kept: Vec<ImportInfo> = file
                .imports()
                .iter()
                .filter(|import| imports.contains_key(import.name()))
                .cloned()
                .collect();
            (!kept.is_empty()).then(|| File::new(file.path(), kept))
        })
        .collect();

    package.narrowed(imports, files)
}

/// Drop packages whose references never loop back to the chain walked from
/// them: `P` stays when some reference `r` of `P` itself refers to a name
/// on `P`'s walk.
fn exclude_related(packages: Vec<Package>) -> Vec<Package> {
    let references = References::from_packages(&packages);

    packages
        .into_iter()
        .filter(|package| {
            let walk = references.walk(package.name());
            let visited: HashSet<&str> = walk.names.iter().map(String::as_str).collect();

            references.get(package.name()).iter().any(|reference| {
                references
                    .get(reference)
                    .iter()
                    .any(|next| visited.contains(next.as_str()))
            })
        })
        .collect()
}
