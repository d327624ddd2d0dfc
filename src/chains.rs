//! Cycle chain extraction
//!
//! Turns the per-package cycle evidence into readable chains such as
//! `foo -> baz -> bar -> foo`.

use std::collections::{HashMap, HashSet};

use crate::core::Package;

/// Package names each cyclic package refers to through its cycle evidence
///
/// Both the packages and their references keep first-seen order, so walks
/// over them are reproducible for a given input order. References only
/// point at names of cyclic packages in the same set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct References {
    order: Vec<String>,
    refs: HashMap<String, Vec<String>>,
}

/// Names visited by following first references from a starting package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Walk {
    pub names: Vec<String>,
    /// Whether the walk came back to a name it had already visited
    pub closed: bool,
}

impl References {
    pub fn from_packages(packages: &[Package]) -> Self {
        let cyclic: HashSet<&str> = packages
            .iter()
            .filter(|p| p.have_cycle())
            .map(|p| p.name())
            .collect();

        let mut references = Self::default();
        for package in packages.iter().filter(|p| p.have_cycle()) {
            let name = package.name().to_string();
            if !references.refs.contains_key(&name) {
                references.order.push(name.clone());
            }
            let targets = references.refs.entry(name).or_default();

            for cycle in package.cycles() {
                let target = cycle.affected_import().name_short();
                if cyclic.contains(target) && !targets.iter().any(|t| t == target) {
                    targets.push(target.to_string());
                }
            }
        }

        references
    }

    /// Cyclic package names, in first-seen order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn get(&self, name: &str) -> &[String] {
        self.refs.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Follow the first reference of each node from `start` until a name
    /// repeats (appended once more to close the chain) or a node has no
    /// reference left to follow.
    pub fn walk(&self, start: &str) -> Walk {
        let mut names = vec![start.to_string()];
        let mut visited: HashSet<&str> = HashSet::from([start]);
        let mut current = start;

        loop {
            let Some(next) = self.get(current).first().map(String::as_str) else {
                return Walk {
                    names,
                    closed: false,
                };
            };

            names.push(next.to_string());
            if !visited.insert(next) {
                return Walk {
                    names,
                    closed: true,
                };
            }
            current = next;
        }
    }
}

/// Derives deduplicated, deterministically ordered cycle chains
#[derive(Debug, Default)]
pub struct CyclePathExtractor;

impl CyclePathExtractor {
    pub fn new() -> Self {
        Self
    }

    /// One chain per distinct cyclic package name, ordered by the
    /// concatenation of their names.
    ///
    /// Only identical chains are merged. Rotations of the same loop start at
    /// different packages and are kept, so a three-package loop yields three
    /// chains.
    pub fn extract(&self, packages: &[Package]) -> Vec<Vec<String>> {
        let references = References::from_packages(packages);

        let mut chains: Vec<(String, Vec<String>)> = references
            .names()
            .map(|name| references.walk(name))
            .filter(|walk| walk.closed)
            .map(|walk| (walk.names.concat(), walk.names))
            .collect();

        chains.sort();
        chains.dedup();

        chains.into_iter().map(|(_, chain)| chain).collect()
    }
}
