//! # Cycle Analysis Module
//!
//! This module ties the analysis stages together for one batch of packages:
//! the dependency relation is built, cyclic packages receive their evidence,
//! the requested view narrows the result and cycle chains are derived from
//! what remains.
//!
//! ## Example
//!
//! ```
//! use anticycle::analyzer::CycleAnalyzer;
//! use anticycle::core::{File, ImportInfo, Package};
//! use anticycle::view_filter::View;
//!
//! let package = |name: &str, import: &str| {
//!     Package::builder()
//!         .with_name(name)
//!         .with_path(format!("app/{name}"))
//!         .with_file(File::new(
//!             format!("app/{name}/{name}.go"),
//!             vec![ImportInfo::new(format!("example.com/app/{import}"), None)],
//!         ))
//!         .build()
//!         .unwrap()
//! };
//!
//! let packages = vec![package("foo", "bar"), package("bar", "foo"), package("main", "foo")];
//!
//! let mut analyzer = CycleAnalyzer::new(View::Affected);
//! let analysis = analyzer.analyze(packages, None);
//!
//! assert_eq!(analysis.packages.len(), 2);
//! assert_eq!(analysis.cycle_chains()[0], vec!["bar", "foo", "bar"]);
//! ```

mod analyzer_impl;

pub use analyzer_impl::*;
