//! Plain text report generation

use std::collections::BTreeSet;
use std::fmt::Write;

use super::ReportGenerator;
use crate::constants::output::CHAIN_SEPARATOR;
use crate::core::{Analysis, Package};
use crate::error::AnticycleError;

/// Groups each package's imports with the files that declare them
///
/// ```text
/// foo (app/foo)
///   C "example.com/app/bar"
///       app/foo/foo.go
///     "fmt"
///       app/foo/foo.go
///       app/foo/util.go
///
/// Cycles:
///   bar -> foo -> bar
/// ```
///
/// Imports marked `C` close a cycle.
#[derive(Debug, Default)]
pub struct TextReportGenerator;

impl TextReportGenerator {
    pub fn new() -> Self {
        Self
    }

    fn write_package(&self, output: &mut String, package: &Package) -> Result<(), AnticycleError> {
        writeln!(output, "{} ({})", package.name(), package.path())?;

        let implicated: BTreeSet<&str> = package
            .cycles()
            .iter()
            .map(|c| c.affected_import().name())
            .collect();

        for name in package.imports().keys() {
            let marker = if implicated.contains(name.as_str()) { 'C' } else { ' ' };
            writeln!(output, "  {marker} \"{name}\"")?;

            let declaring = package
                .files()
                .iter()
                .filter(|f| f.imports().iter().any(|i| i.name() == name));
            for file in declaring {
                writeln!(output, "      {}", file.path().display())?;
            }
        }

        Ok(())
    }
}

impl ReportGenerator for TextReportGenerator {
    fn generate_report(&self, analysis: &Analysis) -> Result<String, AnticycleError> {
        let mut output = String::new();

        for (i, package) in analysis.packages.iter().enumerate() {
            if i > 0 {
                writeln!(output)?;
            }
            self.write_package(&mut output, package)?;
        }

        let chains = analysis.cycle_chains();
        if !chains.is_empty() {
            writeln!(output, "\nCycles:")?;
            for chain in chains {
                writeln!(output, "  {}", chain.join(CHAIN_SEPARATOR))?;
            }
        }

        Ok(output)
    }
}
