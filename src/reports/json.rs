//! JSON format report generation

use super::ReportGenerator;
use crate::core::Analysis;
use crate::error::AnticycleError;

#[derive(Debug, Default)]
pub struct JsonReportGenerator;

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn generate_report(&self, analysis: &Analysis) -> Result<String, AnticycleError> {
        if analysis.is_empty() {
            return Ok(String::new());
        }

        let mut report = serde_json::to_string_pretty(analysis)?;
        report.push('\n');
        Ok(report)
    }
}
