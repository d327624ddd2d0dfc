use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid Go syntax in '{file}': {message}")]
#[diagnostic(
    code(anticycle::go_syntax_error),
    help("Only the package clause and import declarations are read; fix the highlighted code")
)]
pub struct GoSyntaxError {
    pub file: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("syntax error here")]
    pub span: SourceSpan,
    pub message: String,
}

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid configuration in '{file}': {reason}")]
#[diagnostic(
    code(anticycle::config_parse_error),
    help("Supported keys are `exclude` and `exclude-default`, both lists of directory names")
)]
pub struct ConfigParseError {
    pub file: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("invalid here")]
    pub span: Option<SourceSpan>,
    pub reason: String,
    #[source]
    pub source: toml::de::Error,
}

#[derive(Error, Debug, Diagnostic)]
pub enum AnticycleError {
    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(anticycle::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{path}' is not a directory")]
    #[diagnostic(
        code(anticycle::not_a_directory),
        help("Pass the root directory of the Go project to analyze")
    )]
    NotADirectory { path: PathBuf },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Syntax(Box<GoSyntaxError>),

    #[error("Directory '{dir}' declares more than one package: '{first}' and '{second}'")]
    #[diagnostic(
        code(anticycle::mixed_packages),
        help("Every non-test file in a directory must use the same package clause")
    )]
    MixedPackages {
        dir: PathBuf,
        first: String,
        second: String,
    },

    #[error("Failed to walk the source tree")]
    #[diagnostic(
        code(anticycle::walk_error),
        help("Check that every directory under the root is readable")
    )]
    Walk(#[from] walkdir::Error),

    #[error("Failed to initialize the Go parser: {message}")]
    #[diagnostic(
        code(anticycle::parser_error),
        help("This is likely an internal error - please report it")
    )]
    ParserInit { message: String },

    #[error(transparent)]
    #[diagnostic(transparent)]
    ConfigParse(Box<ConfigParseError>),

    #[error("JSON serialization error")]
    #[diagnostic(
        code(anticycle::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(anticycle::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(
        code(anticycle::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(anticycle::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },
}
