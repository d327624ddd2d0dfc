//! Inspect command executor

use console::style;
use miette::{Result, WrapErr};

use crate::analyzer::CycleAnalyzer;
use crate::cli::OutputFormat;
use crate::config::{InspectConfig, ProjectConfig};
use crate::core::Analysis;
use crate::error::AnticycleError;
use crate::executors::CommandExecutor;
use crate::graph::GraphRenderer;
use crate::progress::ProgressReporter;
use crate::reports::{JsonReportGenerator, ReportGenerator, TextReportGenerator};
use crate::scan::PackageScanner;
use crate::view_filter::View;

pub struct InspectExecutor;

/// What one inspect run found
#[derive(Debug, Clone)]
pub struct Inspection {
    pub analysis: Analysis,
    /// Paths of cyclic packages no import could be blamed for
    pub anomalies: Vec<String>,
}

impl InspectExecutor {
    /// Scan the configured tree and analyze it, without printing anything
    pub fn inspect(
        config: &InspectConfig,
        mut progress: Option<&mut ProgressReporter>,
    ) -> Result<Inspection, AnticycleError> {
        let project = ProjectConfig::discover(&config.path)?;
        let exclusions = config.exclusions.resolve(project.as_ref());

        let packages =
            PackageScanner::new(exclusions).scan(&config.path, progress.as_deref_mut())?;

        let mut analyzer = CycleAnalyzer::new(config.view).with_metadata(config.include_metadata);
        let analysis = analyzer.analyze(packages, progress);

        Ok(Inspection {
            analysis,
            anomalies: analyzer.anomalies().to_vec(),
        })
    }

    /// Render a result in the requested format
    pub fn render(analysis: &Analysis, format: OutputFormat) -> Result<String, AnticycleError> {
        match format {
            OutputFormat::Text => TextReportGenerator::new().generate_report(analysis),
            OutputFormat::Json => JsonReportGenerator::new().generate_report(analysis),
            OutputFormat::Dot => {
                if analysis.is_empty() {
                    return Ok(String::new());
                }
                let mut buffer = Vec::new();
                GraphRenderer::new(true).render_dot(&analysis.packages, &mut buffer)?;
                Ok(String::from_utf8_lossy(&buffer).into_owned())
            }
        }
    }
}

/// Status line for a run that rendered nothing
fn empty_result_message(view: View) -> &'static str {
    match view {
        View::All => "No Go packages found",
        View::Affected | View::ExcludeRelated => "No import cycles found",
    }
}

impl CommandExecutor for InspectExecutor {
    type Config = InspectConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Inspecting Go packages in {} ({} view)...\n",
            style("🔍").cyan(),
            style(config.path.display()).bold(),
            config.view
        );

        // Create progress reporter if we're in an interactive terminal
        let mut progress = ProgressReporter::for_stderr();

        let inspection = Self::inspect(&config, progress.as_mut())
            .wrap_err("Failed to inspect Go packages")?;

        for path in &inspection.anomalies {
            eprintln!(
                "{} Package {} sits on a cycle but none of its imports could be blamed",
                style("⚠").yellow(),
                style(path).bold()
            );
        }

        let report = Self::render(&inspection.analysis, config.format)
            .wrap_err("Failed to generate report")?;

        if report.is_empty() {
            eprintln!(
                "{} {}",
                style("✅").green().bold(),
                empty_result_message(config.view)
            );
        } else {
            print!("{report}");
        }

        // Exit with error code if cycles found and requested
        if config.error_on_cycles && inspection.analysis.cyclic_count() > 0 {
            std::process::exit(1);
        }

        Ok(())
    }
}
