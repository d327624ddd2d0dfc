use std::collections::HashMap;

use super::types::DependencyGraph;
use crate::core::Package;

/// Builder for the package dependency relation
///
/// An edge `i -> j` is recorded when package `i` imports something whose
/// short name is package `j`'s name and whose full import name contains
/// package `j`'s path. Matching on the short name alone would also link
/// external imports that happen to share a local package's name.
#[derive(Debug, Default)]
pub struct DependencyGraphBuilder;

impl DependencyGraphBuilder {
    pub fn new() -> Self {
        Self
    }

    pub fn build(&self, packages: &[Package]) -> DependencyGraph {
        let mut index: HashMap<String, usize> = HashMap::with_capacity(packages.len());
        for (idx, package) in packages.iter().enumerate() {
            index.insert(package.name().to_string(), idx);
        }

        let mut graph = DependencyGraph::new(packages.len(), index);

        for (from, package) in packages.iter().enumerate() {
            for import in package.imports().values() {
                let Some(to) = graph.index_of(import.name_short()) else {
                    continue;
                };

                if import.name().contains(packages[to].path()) {
                    graph.set_edge(from, to);
                }
            }
        }

        graph
    }
}
