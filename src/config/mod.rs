//! # Configuration Module
//!
//! Configuration structures for the anticycle commands, plus the optional
//! per-project `anticycle.toml`.
//!
//! Each command has its own config struct built through a builder that
//! implements [`ConfigBuilder`](crate::common::ConfigBuilder).
//!
//! ## Example
//!
//! ```
//! use anticycle::cli::OutputFormat;
//! use anticycle::common::ConfigBuilder;
//! use anticycle::config::{ExclusionOverrides, InspectConfig};
//! use anticycle::view_filter::View;
//!
//! let config = InspectConfig::builder()
//!     .with_path(".".into())
//!     .with_view(View::ExcludeRelated)
//!     .with_format(OutputFormat::Json)
//!     .with_exclusions(ExclusionOverrides::new(Some(vec!["mocks".into()]), None))
//!     .build()
//!     .unwrap();
//!
//! assert!(config.include_metadata);
//! ```

pub mod excluded;
pub mod exclusions;
pub mod file;
pub mod inspect;

pub use excluded::ExcludedConfig;
pub use exclusions::ExclusionOverrides;
pub use file::ProjectConfig;
pub use inspect::InspectConfig;
