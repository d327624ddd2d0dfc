//! Report generation modules for different output formats
//!
//! - text: grouped, human-readable listing of the cycle evidence
//! - json: the full result for programmatic use
//!
//! Graphviz output is produced by [`crate::graph::GraphRenderer`].

pub mod json;
pub mod text;

use crate::core::Analysis;
use crate::error::AnticycleError;

/// Common trait for all report generators
pub trait ReportGenerator {
    /// Render an analysis result; an empty result renders as the empty
    /// string
    fn generate_report(&self, analysis: &Analysis) -> Result<String, AnticycleError>;
}

pub use json::JsonReportGenerator;
pub use text::TextReportGenerator;
