//! # Source Scanning Module
//!
//! This module turns a Go source tree into the package facts the analysis
//! works on.
//!
//! ## Components
//!
//! - **PackageScanner**: Walks the tree in a deterministic order and groups
//!   the `.go` files of each directory into one package
//! - **GoParser**: Reads the package clause and imports of a file with
//!   tree-sitter
//! - **ExclusionList**: Directory names that are never descended into
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use anticycle::scan::{ExclusionList, PackageScanner};
//!
//! # fn main() -> miette::Result<()> {
//! let scanner = PackageScanner::new(ExclusionList::with_defaults());
//! let packages = scanner.scan(Path::new("."), None)?;
//!
//! for package in &packages {
//!     println!("{} ({} files)", package.path(), package.files().len());
//! }
//! # Ok(())
//! # }
//! ```

mod exclusion;
mod go_source;
mod scanner;

pub use exclusion::ExclusionList;
pub use go_source::{GoHeader, GoParser};
pub use scanner::PackageScanner;
