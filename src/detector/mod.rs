//! # Cycle Detection Module
//!
//! This module finds the packages that take part in dependency cycles.
//!
//! ## Algorithm
//!
//! The dependency relation is closed under transitivity with the classic
//! Boolean reachability relaxation: for every intermediate package `k`
//! (outermost), `i` reaches `j` when `i` reaches `k` and `k` reaches `j`.
//! This costs O(N³) for N packages. For a fixed `k` every row is independent,
//! so large graphs relax their rows in parallel.
//!
//! A package is cyclic when the closure says it reaches itself. Every cyclic
//! package then receives cycle evidence: for each other package `j` it
//! reaches, the files whose imports name `j`.
//!
//! ## Example
//!
//! ```
//! use anticycle::core::{File, ImportInfo, Package};
//! use anticycle::detector::CycleDetector;
//! use anticycle::graph::DependencyGraphBuilder;
//!
//! let package = |name: &str, import: &str| {
//!     Package::builder()
//!         .with_name(name)
//!         .with_path(format!("app/{name}"))
//!         .with_file(File::new(
//!             format!("app/{name}/{name}.go"),
//!             vec![ImportInfo::new(import, None)],
//!         ))
//!         .build()
//!         .unwrap()
//! };
//!
//! let mut packages = vec![
//!     package("foo", "example.com/app/bar"),
//!     package("bar", "example.com/app/foo"),
//! ];
//!
//! let graph = DependencyGraphBuilder::new().build(&packages);
//! let mut detector = CycleDetector::new();
//! detector.detect_cycles(&graph, &mut packages);
//!
//! assert!(detector.has_cycles());
//! assert!(packages.iter().all(|p| p.have_cycle()));
//! ```

mod detector_impl;

pub use detector_impl::*;
