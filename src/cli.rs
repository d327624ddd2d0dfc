use clap::{Parser, Subcommand};

use crate::common::{CommonArgs, FormatArgs};
use crate::view_filter::View;

#[derive(Parser)]
#[command(
    name = "anticycle",
    about = "Detect import cycles between Go packages",
    long_about = "anticycle statically analyzes a Go source tree and reports the packages that \
                  take part in import cycles, without compiling anything. It points at the \
                  files and imports that close each cycle and lists the cycles themselves as \
                  chains of package names.",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find the packages that take part in import cycles
    ///
    /// Scans every Go package below the given directory, resolves the imports
    /// between them and reports which packages can reach themselves.
    #[command(
        long_about = "Scan a Go source tree for import cycles. Every directory holding .go files \
                      is read as one package, its imports are matched against the other scanned \
                      packages and a transitive closure over the resulting graph marks each \
                      package that can reach itself. The report names the files and imports \
                      responsible, grouped by package, followed by the cycle chains."
    )]
    Inspect {
        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        format: FormatArgs,

        /// Which packages to report
        #[arg(
            long,
            value_enum,
            default_value = crate::constants::output::DEFAULT_VIEW,
            env = "ANTICYCLE_VIEW"
        )]
        view: View,

        /// Leave the cycle chains out of the report
        #[arg(long, env = "ANTICYCLE_NO_METADATA")]
        no_metadata: bool,

        /// Exit with error code if cycles found
        #[arg(long, env = "ANTICYCLE_ERROR_ON_CYCLES")]
        error_on_cycles: bool,
    },

    /// Print the directory names that will be skipped
    ///
    /// Shows the exclusion list that results from the built-in defaults, the
    /// project's anticycle.toml and the command-line overrides.
    Excluded {
        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        format: FormatArgs,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Dot,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_inspect_defaults() {
        let cli = Cli::try_parse_from(["anticycle", "inspect"]).unwrap();
        match cli.command {
            Commands::Inspect {
                common,
                format,
                view,
                no_metadata,
                error_on_cycles,
            } => {
                assert_eq!(common.path, None);
                assert_eq!(format.format, OutputFormat::Text);
                assert_eq!(view, View::Affected);
                assert!(!no_metadata);
                assert!(!error_on_cycles);
            }
            Commands::Excluded { .. } => panic!("Expected inspect command"),
        }
    }

    #[test]
    fn test_inspect_flags() {
        let cli = Cli::try_parse_from([
            "anticycle",
            "inspect",
            "src",
            "--view",
            "exclude-related",
            "--format",
            "json",
            "--exclude",
            "mocks gen",
            "--error-on-cycles",
        ])
        .unwrap();

        match cli.command {
            Commands::Inspect {
                common,
                format,
                view,
                error_on_cycles,
                ..
            } => {
                assert_eq!(common.path, Some("src".into()));
                assert_eq!(common.exclude.as_deref(), Some("mocks gen"));
                assert_eq!(format.format, OutputFormat::Json);
                assert_eq!(view, View::ExcludeRelated);
                assert!(error_on_cycles);
            }
            Commands::Excluded { .. } => panic!("Expected inspect command"),
        }
    }

    #[test]
    fn test_unknown_view_is_rejected() {
        assert!(Cli::try_parse_from(["anticycle", "inspect", "--view", "strict"]).is_err());
    }
}
