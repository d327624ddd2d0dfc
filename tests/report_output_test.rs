//! Rendered output of a scanned project in every format

use std::fs;
use std::path::{Path, PathBuf};

use anticycle::cli::OutputFormat;
use anticycle::common::ConfigBuilder;
use anticycle::config::{ExcludedConfig, ExclusionOverrides, InspectConfig};
use anticycle::executors::excluded::ExcludedExecutor;
use anticycle::executors::inspect::InspectExecutor;
use anticycle::view_filter::View;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn write_file(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// `api` and `store` import each other, `server` only leads into the cycle
fn create_service() -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("service");

    write_file(
        &root,
        "api/api.go",
        "package api\n\nimport (\n\t\"fmt\"\n\n\t\"example.com/service/store\"\n)\n",
    );
    write_file(
        &root,
        "api/handlers.go",
        "package api\n\nimport \"net/http\"\n",
    );
    write_file(
        &root,
        "store/store.go",
        "package store\n\nimport api \"example.com/service/api\"\n",
    );
    write_file(
        &root,
        "server/main.go",
        "package main\n\nimport \"example.com/service/api\"\n",
    );

    (temp, root)
}

fn render(root: &Path, view: View, format: OutputFormat) -> String {
    let config = InspectConfig::builder()
        .with_path(root.to_path_buf())
        .with_view(view)
        .with_format(format)
        .build()
        .unwrap();

    let inspection = InspectExecutor::inspect(&config, None).unwrap();
    InspectExecutor::render(&inspection.analysis, config.format).unwrap()
}

#[test]
fn test_text_report() {
    let (_temp, root) = create_service();
    let report = render(&root, View::Affected, OutputFormat::Text);

    assert!(predicate::str::starts_with("api (service/api)\n").eval(report.as_str()));
    assert!(predicate::str::contains("  C \"example.com/service/store\"").eval(report.as_str()));
    assert!(predicate::str::contains("store (service/store)\n").eval(report.as_str()));
    assert!(predicate::str::contains("\"net/http\"").not().eval(report.as_str()));
    assert!(predicate::str::contains("main (service/server)").not().eval(report.as_str()));
    assert!(
        predicate::str::ends_with("Cycles:\n  api -> store -> api\n  store -> api -> store\n")
            .eval(report.as_str())
    );
}

#[test]
fn test_text_report_of_all_packages() {
    let (_temp, root) = create_service();
    let report = render(&root, View::All, OutputFormat::Text);

    assert!(predicate::str::contains("main (service/server)").eval(report.as_str()));
    assert!(predicate::str::contains("    \"net/http\"").eval(report.as_str()));
    assert!(predicate::str::is_match(r#"(?m)^ {6}.*handlers\.go$"#)
        .unwrap()
        .eval(report.as_str()));
}

#[test]
fn test_json_report() {
    let (_temp, root) = create_service();
    let report = render(&root, View::Affected, OutputFormat::Json);

    let json: serde_json::Value = serde_json::from_str(&report).unwrap();
    let packages = json["packages"].as_array().unwrap();
    assert_eq!(packages.len(), 2);

    let store = &packages[1];
    assert_eq!(store["path"], "service/store");
    assert_eq!(store["cycles"][0]["affectedImport"]["alias"], "api");
    assert_eq!(store["cycles"][0]["affectedImport"]["nameShort"], "api");
    assert_eq!(json["metadata"]["cycles"].as_array().unwrap().len(), 2);
}

#[test]
fn test_dot_report() {
    let (_temp, root) = create_service();
    let report = render(&root, View::All, OutputFormat::Dot);

    assert!(predicate::str::starts_with("digraph").eval(report.as_str()));
    assert!(predicate::str::contains(r#""service/api" -> "service/store""#).eval(report.as_str()));
    assert!(predicate::str::contains(r#""service/store" -> "service/api""#).eval(report.as_str()));
    assert!(predicate::str::contains(r#""service/server" -> "service/api""#).eval(report.as_str()));
}

#[test]
fn test_clean_project_renders_nothing() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("service");
    write_file(&root, "api/api.go", "package api\n\nimport \"fmt\"\n");

    for format in [OutputFormat::Text, OutputFormat::Json, OutputFormat::Dot] {
        assert_eq!(render(&root, View::Affected, format), "");
    }
}

#[test]
fn test_excluded_listing() {
    let (_temp, root) = create_service();
    write_file(&root, "anticycle.toml", "exclude-default = [\"vendor\"]\n");

    let config = ExcludedConfig::builder()
        .with_path(root.clone())
        .with_format(OutputFormat::Text)
        .with_exclusions(ExclusionOverrides::new(Some(vec!["mocks".to_string()]), None))
        .build()
        .unwrap();

    let list = ExcludedExecutor::resolve(&config).unwrap();
    let output = ExcludedExecutor::render(&list, config.format).unwrap();
    assert_eq!(output, "mocks\nvendor\n");
}
