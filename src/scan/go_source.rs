//! Go source header extraction
//!
//! Reads the package clause and import declarations of a Go file with
//! tree-sitter. The rest of the file is never inspected: a syntax error in a
//! function body does not matter, one in the header aborts the run.

use std::path::Path;

use miette::{NamedSource, SourceSpan};
use tree_sitter::{Node, Parser};

use crate::core::ImportInfo;
use crate::error::{AnticycleError, GoSyntaxError};

/// Package clause and imports of one Go file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoHeader {
    pub package: String,
    pub imports: Vec<ImportInfo>,
    /// Set by a `//go:build ignore` constraint; such files never belong to
    /// the package built from their directory
    pub ignored: bool,
}

pub struct GoParser {
    parser: Parser,
}

impl GoParser {
    pub fn new() -> Result<Self, tree_sitter::LanguageError> {
        let mut parser = Parser::new();
        parser.set_language(&tree_sitter_go::LANGUAGE.into())?;
        Ok(Self { parser })
    }

    pub fn parse_file(&mut self, path: &Path) -> Result<GoHeader, AnticycleError> {
        let source = std::fs::read_to_string(path).map_err(|e| AnticycleError::FileReadError {
            path: path.to_path_buf(),
            source: e,
        })?;
        self.parse_header(path, &source)
    }

    pub fn parse_header(&mut self, path: &Path, source: &str) -> Result<GoHeader, AnticycleError> {
        let Some(tree) = self.parser.parse(source, None) else {
            return Err(syntax_error(path, source, (0, 0).into(), "file could not be parsed"));
        };
        let root = tree.root_node();

        let mut package = None;
        let mut imports = Vec::new();
        let mut ignored = false;

        let mut cursor = root.walk();
        for child in root.named_children(&mut cursor) {
            match child.kind() {
                "comment" => {
                    // Build constraints only count above the package clause
                    if package.is_none() && excluded_by_constraint(node_text(child, source)) {
                        ignored = true;
                    }
                }
                "ERROR" if package.is_some() && !node_text(child, source).starts_with("import") => {
                    break;
                }
                "ERROR" => {
                    let (span, message) = locate_error(child);
                    return Err(syntax_error(path, source, span, message));
                }
                "package_clause" | "import_declaration" if child.has_error() => {
                    let (span, message) = locate_error(child);
                    return Err(syntax_error(path, source, span, message));
                }
                "package_clause" => {
                    if package.is_some() {
                        return Err(syntax_error(
                            path,
                            source,
                            span_of(child),
                            "duplicate package clause",
                        ));
                    }
                    package = package_name(child, source);
                }
                "import_declaration" => {
                    if package.is_none() {
                        return Err(syntax_error(
                            path,
                            source,
                            span_of(child),
                            "import before package clause",
                        ));
                    }
                    collect_imports(child, source, &mut imports);
                }
                // First declaration ends the header
                _ => break,
            }
        }

        match package {
            Some(package) => Ok(GoHeader {
                package,
                imports,
                ignored,
            }),
            None => Err(syntax_error(
                path,
                source,
                (0, 0).into(),
                "expected package clause",
            )),
        }
    }
}

/// Whether a build constraint comment keeps the file out of every build
fn excluded_by_constraint(comment: &str) -> bool {
    comment
        .strip_prefix("//go:build")
        .or_else(|| comment.strip_prefix("// +build"))
        .is_some_and(|expr| expr.trim() == "ignore")
}

fn package_name(node: Node<'_>, source: &str) -> Option<String> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .find(|child| child.kind() == "package_identifier")
        .map(|child| node_text(child, source).to_string())
}

fn collect_imports(node: Node<'_>, source: &str, imports: &mut Vec<ImportInfo>) {
    if node.kind() == "import_spec" {
        let Some(path) = node
            .child_by_field_name("path")
            .and_then(|path| unquote_go_string(node_text(path, source)))
        else {
            return;
        };
        let alias = node
            .child_by_field_name("name")
            .map(|name| node_text(name, source).to_string());
        imports.push(ImportInfo::new(path, alias));
        return;
    }

    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        if matches!(child.kind(), "import_spec" | "import_spec_list") {
            collect_imports(child, source, imports);
        }
    }
}

/// Span and description of the first error or missing node under `node`
fn locate_error(node: Node<'_>) -> (SourceSpan, &'static str) {
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.is_missing() {
            return (span_of(child), "missing token");
        }
        if child.is_error() || child.has_error() {
            return locate_error(child);
        }
    }

    if node.is_missing() {
        (span_of(node), "missing token")
    } else {
        (span_of(node), "unexpected token")
    }
}

fn span_of(node: Node<'_>) -> SourceSpan {
    SourceSpan::new(
        node.start_byte().into(),
        node.end_byte() - node.start_byte(),
    )
}

fn node_text<'a>(node: Node<'_>, source: &'a str) -> &'a str {
    source
        .get(node.start_byte()..node.end_byte())
        .unwrap_or("")
        .trim()
}

fn unquote_go_string(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.len() < 2 {
        return None;
    }
    let quoted = (trimmed.starts_with('"') && trimmed.ends_with('"'))
        || (trimmed.starts_with('`') && trimmed.ends_with('`'));
    quoted.then(|| trimmed[1..trimmed.len() - 1].to_string())
}

fn syntax_error(path: &Path, source: &str, span: SourceSpan, message: &str) -> AnticycleError {
    let file = path.display().to_string();
    AnticycleError::Syntax(Box::new(GoSyntaxError {
        source_code: NamedSource::new(file.clone(), source.to_string()),
        file,
        span,
        message: message.to_string(),
    }))
}
