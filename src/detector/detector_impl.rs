use rayon::prelude::*;

use crate::constants::detection::PARALLEL_THRESHOLD;
use crate::core::{Cycle, Package};
use crate::graph::DependencyGraph;

/// Detector for packages that take part in dependency cycles
///
/// Computes the reflexive transitive closure of the dependency relation and
/// marks every package that can reach itself. Each marked package is then
/// given concrete evidence: the files and imports through which it reaches
/// the other packages in its closure.
#[derive(Debug, Default)]
pub struct CycleDetector {
    cyclic: Vec<usize>,
    anomalies: Vec<String>,
}

/// Reachability closure of a dependency relation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Closure {
    size: usize,
    cells: Vec<bool>,
}

impl Closure {
    /// Close `graph` under transitivity, one intermediate package at a time.
    pub fn compute(graph: &DependencyGraph) -> Self {
        let (size, mut cells) = graph.clone().into_cells();

        for k in 0..size {
            // Row k cannot change while k is the intermediate
            let via: Vec<bool> = cells[k * size..(k + 1) * size].to_vec();
            let relax = |row: &mut [bool]| {
                if row[k] {
                    for (cell, &reachable) in row.iter_mut().zip(&via) {
                        if !*cell && reachable {
                            *cell = true;
                        }
                    }
                }
            };

            if size >= PARALLEL_THRESHOLD {
                cells.par_chunks_mut(size).for_each(relax);
            } else {
                cells.chunks_mut(size).for_each(relax);
            }
        }

        Self { size, cells }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn reaches(&self, from: usize, to: usize) -> bool {
        from < self.size && to < self.size && self.cells[from * self.size + to]
    }

    /// Whether the package at `idx` can reach itself
    pub fn is_cyclic(&self, idx: usize) -> bool {
        self.reaches(idx, idx)
    }
}

impl CycleDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark cyclic packages and attach their cycle evidence
    ///
    /// `graph` must have been built from `packages`, in the same order.
    pub fn detect_cycles(&mut self, graph: &DependencyGraph, packages: &mut [Package]) {
        debug_assert_eq!(graph.size(), packages.len());

        self.cyclic.clear();
        self.anomalies.clear();

        let closure = Closure::compute(graph);
        let names: Vec<String> = packages.iter().map(|p| p.name().to_string()).collect();

        for (i, package) in packages.iter_mut().enumerate() {
            if !closure.is_cyclic(i) {
                continue;
            }

            package.mark_cycle();
            self.cyclic.push(i);

            for (j, target) in names.iter().enumerate() {
                if j == i || !closure.reaches(i, j) {
                    continue;
                }

                let evidence: Vec<Cycle> = package
                    .files()
                    .iter()
                    .flat_map(|file| {
                        file.imports()
                            .iter()
                            .filter(|import| import.name_short() == target)
                            .map(|import| Cycle::new(file.path(), import.clone()))
                    })
                    .collect();

                for cycle in evidence {
                    package.add_evidence(cycle);
                }
            }

            if package.cycles().is_empty() {
                self.anomalies.push(package.path().to_string());
            }
        }
    }

    /// Positions of the packages found on a cycle
    pub fn cyclic(&self) -> &[usize] {
        &self.cyclic
    }

    pub fn has_cycles(&self) -> bool {
        !self.cyclic.is_empty()
    }

    /// Number of packages found on a cycle
    pub fn cyclic_count(&self) -> usize {
        self.cyclic.len()
    }

    /// Paths of cyclic packages that received no evidence
    pub fn anomalies(&self) -> &[String] {
        &self.anomalies
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::{File, ImportInfo};
    use crate::graph::DependencyGraphBuilder;

    fn package(name: &str, imports: &[&str]) -> Package {
        Package::builder()
            .with_name(name)
            .with_path(format!("app/{name}"))
            .with_file(File::new(
                format!("app/{name}/{name}.go"),
                imports
                    .iter()
                    .map(|i| ImportInfo::new(format!("github.com/acme/{i}"), None))
                    .collect(),
            ))
            .build()
            .unwrap()
    }

    fn detect(packages: &mut [Package]) -> CycleDetector {
        let graph = DependencyGraphBuilder::new().build(packages);
        let mut detector = CycleDetector::new();
        detector.detect_cycles(&graph, packages);
        detector
    }

    #[test]
    fn test_no_cycles_in_linear_graph() {
        let mut packages = vec![
            package("foo", &[]),
            package("bar", &["app/foo"]),
            package("baz", &["app/bar"]),
        ];

        let detector = detect(&mut packages);

        assert!(!detector.has_cycles());
        assert_eq!(detector.cyclic_count(), 0);
        assert!(packages.iter().all(|p| !p.have_cycle()));
        assert!(packages.iter().all(|p| p.cycles().is_empty()));
    }

    #[test]
    fn test_one_to_one_cycle() {
        let mut packages = vec![package("bar", &["app/foo"]), package("foo", &["app/bar"])];

        let detector = detect(&mut packages);

        assert_eq!(detector.cyclic(), &[0, 1]);
        for package in &packages {
            assert!(package.have_cycle());
            assert_eq!(package.cycles().len(), 1);
        }
        assert_eq!(
            packages[0].cycles()[0].affected_import().name(),
            "github.com/acme/app/foo"
        );
        assert_eq!(
            packages[0].cycles()[0].affected_file(),
            std::path::Path::new("app/bar/bar.go")
        );
        assert!(detector.anomalies().is_empty());
    }

    #[test]
    fn test_triangle_cycle_has_one_evidence_each() {
        let mut packages = vec![
            package("foo", &["app/baz"]),
            package("bar", &["app/foo"]),
            package("baz", &["app/bar"]),
        ];

        let detector = detect(&mut packages);

        assert_eq!(detector.cyclic_count(), 3);
        for package in &packages {
            assert!(package.have_cycle());
            assert_eq!(package.cycles().len(), 1);
        }
    }

    #[test]
    fn test_package_leading_into_cycle_is_not_cyclic() {
        let mut packages = vec![
            package("foo", &["app/bar"]),
            package("bar", &["app/foo"]),
            package("entry", &["app/foo"]),
        ];

        detect(&mut packages);

        assert!(packages[0].have_cycle());
        assert!(packages[1].have_cycle());
        assert!(!packages[2].have_cycle());
        assert!(packages[2].cycles().is_empty());
    }

    #[test]
    fn test_evidence_reaches_beyond_the_cycle() {
        // foo <-> bar, and bar also depends on a leaf
        let mut packages = vec![
            package("foo", &["app/bar"]),
            package("bar", &["app/foo", "app/leaf"]),
            package("leaf", &[]),
        ];

        detect(&mut packages);

        let evidence: Vec<&str> = packages[1]
            .cycles()
            .iter()
            .map(|c| c.affected_import().name_short())
            .collect();
        assert_eq!(evidence, vec!["foo", "leaf"]);
        // foo reaches leaf through bar but never imports it
        assert_eq!(packages[0].cycles().len(), 1);
    }

    #[test]
    fn test_external_short_name_collision_is_ignored() {
        let mut packages = vec![
            package("foo", &[]),
            Package::builder()
                .with_name("bar")
                .with_path("app/bar")
                .with_file(File::new(
                    "app/bar/bar.go",
                    vec![ImportInfo::new("github.com/vendor/foo", None)],
                ))
                .build()
                .unwrap(),
        ];

        let detector = detect(&mut packages);

        assert!(!detector.has_cycles());
    }

    #[test]
    fn test_cyclic_package_without_files_is_an_anomaly() {
        let mut packages = vec![
            Package::builder()
                .with_name("ghost")
                .with_path("app/ghost")
                .build()
                .unwrap(),
        ];
        let mut graph = DependencyGraphBuilder::new().build(&packages);
        graph.set_edge(0, 0);

        let mut detector = CycleDetector::new();
        detector.detect_cycles(&graph, &mut packages);

        assert!(packages[0].have_cycle());
        assert!(packages[0].cycles().is_empty());
        assert_eq!(detector.anomalies(), &["app/ghost".to_string()]);
    }

    #[test]
    fn test_parallel_closure_matches_sequential() {
        // A ring large enough to take the parallel path
        let size = PARALLEL_THRESHOLD + 6;
        let mut packages: Vec<Package> = (0..size)
            .map(|i| {
                let next = (i + 1) % size;
                package(&format!("p{i}"), &[&format!("app/p{next}")])
            })
            .collect();

        let detector = detect(&mut packages);

        assert_eq!(detector.cyclic_count(), size);

        let graph = DependencyGraphBuilder::new().build(&packages);
        let closure = Closure::compute(&graph);
        for i in 0..size {
            for j in 0..size {
                assert!(closure.reaches(i, j));
            }
        }
    }
}
