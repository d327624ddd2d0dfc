//! # Graph Construction and Rendering Module
//!
//! This module builds the dependency relation between packages and renders
//! it for visualization.
//!
//! ## Components
//!
//! - **DependencyGraphBuilder**: Derives the package-to-package relation from
//!   import facts, confirming every short-name match against the imported
//!   package's path
//! - **DependencyGraph**: Square boolean adjacency relation plus a name index
//! - **GraphRenderer**: Renders packages and their edges as Graphviz DOT
//!
//! ## Example
//!
//! ```
//! use anticycle::core::{File, ImportInfo, Package};
//! use anticycle::graph::DependencyGraphBuilder;
//!
//! let foo = Package::builder()
//!     .with_name("foo")
//!     .with_path("app/foo")
//!     .with_file(File::new("app/foo/foo.go", vec![ImportInfo::new("fmt", None)]))
//!     .build()
//!     .unwrap();
//! let bar = Package::builder()
//!     .with_name("bar")
//!     .with_path("app/bar")
//!     .with_file(File::new(
//!         "app/bar/bar.go",
//!         vec![ImportInfo::new("github.com/acme/app/foo", None)],
//!     ))
//!     .build()
//!     .unwrap();
//!
//! let graph = DependencyGraphBuilder::new().build(&[foo, bar]);
//! assert!(graph.has_edge(1, 0));
//! assert!(!graph.has_edge(0, 1));
//! ```

mod builder;
mod renderer;
mod types;

pub use builder::DependencyGraphBuilder;
pub use renderer::GraphRenderer;
pub use types::DependencyGraph;
