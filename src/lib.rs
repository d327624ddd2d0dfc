//! # anticycle - Detect Import Cycles Between Go Packages
//!
//! anticycle statically analyzes a Go source tree and finds the packages
//! that take part in import cycles. Nothing is compiled: every directory of
//! `.go` files is read as a package, its import declarations are matched
//! against the other scanned packages and a transitive closure over the
//! resulting graph marks each package that can reach itself.
//!
//! ## Main Components
//!
//! - **Scan**: Walks the source tree and extracts package clauses and
//!   imports
//! - **Graph**: Builds the package dependency relation from import facts
//! - **Detector**: Computes the closure and attributes cycles to concrete
//!   files and imports
//! - **View Filter**: Narrows the result to what the analyst asked for
//! - **Chains**: Derives readable cycle chains from the narrowed result
//! - **Reports**: Text and JSON renderings, plus Graphviz via the graph
//!   module
//!
//! ## Usage
//!
//! ```no_run
//! use std::path::Path;
//!
//! use anticycle::analyzer::CycleAnalyzer;
//! use anticycle::reports::{ReportGenerator, TextReportGenerator};
//! use anticycle::scan::{ExclusionList, PackageScanner};
//! use anticycle::view_filter::View;
//!
//! # fn main() -> miette::Result<()> {
//! // Step 1: Collect package facts, skipping vendor, testdata and friends
//! let scanner = PackageScanner::new(ExclusionList::with_defaults());
//! let packages = scanner.scan(Path::new("/path/to/go/project"), None)?;
//!
//! // Step 2: Detect cycles and keep only the imports that cause them
//! let mut analyzer = CycleAnalyzer::new(View::Affected);
//! let analysis = analyzer.analyze(packages, None);
//!
//! // Step 3: Report
//! if analysis.is_empty() {
//!     println!("No import cycles found");
//! } else {
//!     print!("{}", TextReportGenerator::new().generate_report(&analysis)?);
//! }
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod progress;
mod utils;

// Public modules
pub mod analyzer;
pub mod chains;
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod core;
pub mod detector;
pub mod error;
pub mod executors;
pub mod graph;
pub mod reports;
pub mod scan;
pub mod view_filter;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();
    execute_command(cli.command)
}
