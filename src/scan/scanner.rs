use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};

use indicatif::{ParallelProgressIterator, ProgressBar};
use rayon::prelude::*;
use walkdir::WalkDir;

use super::exclusion::ExclusionList;
use super::go_source::{GoHeader, GoParser};
use crate::constants::scan::{EXTERNAL_TEST_SUFFIX, GO_MOD_FILE, SOURCE_EXTENSION};
use crate::core::{File, Package};
use crate::error::AnticycleError;
use crate::progress::ProgressReporter;

/// Go files found directly inside one walked directory
#[derive(Debug)]
struct SourceDir {
    dir: PathBuf,
    files: Vec<PathBuf>,
}

/// Turns a Go source tree into package facts
///
/// Directories are visited in a stable, name-sorted, depth-first order and
/// the packages come out in that order. Any directory whose base name is
/// excluded is skipped along with everything under it; the scan root itself
/// is never skipped.
///
/// Package paths are prefixed with the module path from the root's `go.mod`,
/// or with the root's directory name when there is none.
#[derive(Debug, Clone)]
pub struct PackageScanner {
    exclusions: ExclusionList,
}

impl PackageScanner {
    pub fn new(exclusions: ExclusionList) -> Self {
        Self { exclusions }
    }

    pub fn exclusions(&self) -> &ExclusionList {
        &self.exclusions
    }

    pub fn scan(
        &self,
        root: &Path,
        mut progress: Option<&mut ProgressReporter>,
    ) -> Result<Vec<Package>, AnticycleError> {
        if !root.is_dir() {
            return Err(AnticycleError::NotADirectory {
                path: root.to_path_buf(),
            });
        }

        if let Some(p) = progress.as_mut() {
            p.start_scan(root);
        }

        let dirs = self.walk(root, progress.as_deref())?;
        let file_count: usize = dirs.iter().map(|d| d.files.len()).sum();

        let bar = progress
            .as_mut()
            .map(|p| p.start_parsing(file_count))
            .unwrap_or_else(ProgressBar::hidden);
        let headers = parse_all(&dirs, bar)?;

        let prefix = match module_path(root)? {
            Some(module) => module,
            None => root_name(root),
        };
        let mut packages = Vec::new();
        let mut headers = headers.into_iter();
        for source_dir in &dirs {
            let dir_headers: Vec<GoHeader> = headers.by_ref().take(source_dir.files.len()).collect();
            let path = package_path(&prefix, root, &source_dir.dir);
            if let Some(package) = assemble(source_dir, dir_headers, path)? {
                packages.push(package);
            }
        }

        if let Some(p) = progress.as_mut() {
            let files = packages.iter().map(|p| p.files().len()).sum();
            p.finish_scan(packages.len(), files);
        }

        Ok(packages)
    }

    fn walk(
        &self,
        root: &Path,
        progress: Option<&ProgressReporter>,
    ) -> Result<Vec<SourceDir>, AnticycleError> {
        let mut dirs: Vec<SourceDir> = Vec::new();
        let mut positions: HashMap<PathBuf, usize> = HashMap::new();

        let walker = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !self.exclusions.excludes(e.file_name()));

        for entry in walker {
            let entry = entry?;

            if entry.file_type().is_dir() {
                if let Some(p) = progress {
                    p.visiting_directory(entry.path());
                }
                positions.insert(entry.path().to_path_buf(), dirs.len());
                dirs.push(SourceDir {
                    dir: entry.into_path(),
                    files: Vec::new(),
                });
                continue;
            }

            let is_source = entry.file_type().is_file()
                && entry.path().extension().is_some_and(|ext| ext == SOURCE_EXTENSION);
            if !is_source {
                continue;
            }

            let position = entry
                .path()
                .parent()
                .and_then(|parent| positions.get(parent).copied());
            if let Some(position) = position {
                dirs[position].files.push(entry.into_path());
            }
        }

        dirs.retain(|d| !d.files.is_empty());
        Ok(dirs)
    }
}

/// Parse every file in walk order, one parser per worker thread. The first
/// failure in walk order is reported.
fn parse_all(dirs: &[SourceDir], bar: ProgressBar) -> Result<Vec<GoHeader>, AnticycleError> {
    let files: Vec<&Path> = dirs
        .iter()
        .flat_map(|d| d.files.iter().map(PathBuf::as_path))
        .collect();

    let results: Vec<Result<GoHeader, AnticycleError>> = files
        .par_iter()
        .progress_with(bar.clone())
        .map_init(
            || GoParser::new().map_err(|e| e.to_string()),
            |parser, path| match parser {
                Ok(parser) => parser.parse_file(path),
                Err(message) => Err(AnticycleError::ParserInit {
                    message: message.clone(),
                }),
            },
        )
        .collect();

    bar.finish_and_clear();
    results.into_iter().collect()
}

/// Build the package of one directory, or nothing when it holds only
/// external test files.
fn assemble(
    source_dir: &SourceDir,
    headers: Vec<GoHeader>,
    path: String,
) -> Result<Option<Package>, AnticycleError> {
    let mut name: Option<String> = None;
    let mut files = Vec::new();

    for (file_path, header) in source_dir.files.iter().zip(headers) {
        if header.ignored || header.package.ends_with(EXTERNAL_TEST_SUFFIX) {
            continue;
        }

        let first = name.get_or_insert_with(|| header.package.clone());
        if *first != header.package {
            return Err(AnticycleError::MixedPackages {
                dir: source_dir.dir.clone(),
                first: first.clone(),
                second: header.package,
            });
        }

        files.push(File::new(file_path, header.imports));
    }

    let Some(name) = name else {
        return Ok(None);
    };

    Package::builder()
        .with_name(name)
        .with_path(path)
        .with_files(files)
        .build()
        .map(Some)
        .map_err(|e| AnticycleError::ConfigurationError {
            message: e.to_string(),
        })
}

/// Module path declared by `go.mod` at the scan root, if there is one
fn module_path(root: &Path) -> Result<Option<String>, AnticycleError> {
    let path = root.join(GO_MOD_FILE);
    if !path.is_file() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(&path).map_err(|e| AnticycleError::FileReadError {
        path: path.clone(),
        source: e,
    })?;
    Ok(parse_module_directive(&content))
}

fn parse_module_directive(content: &str) -> Option<String> {
    content.lines().find_map(|line| {
        let line = line.split("//").next().unwrap_or("").trim();
        let rest = line.strip_prefix("module")?;
        if !rest.starts_with(char::is_whitespace) {
            return None;
        }
        let module = rest.trim().trim_matches(|c| c == '"' || c == '`');
        (!module.is_empty()).then(|| module.trim_end_matches('/').to_string())
    })
}

/// Base name of the scan root, resolving `.` and friends
fn root_name(root: &Path) -> String {
    root.canonicalize()
        .ok()
        .as_deref()
        .unwrap_or(root)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// `/`-joined package path: the root's name followed by the directory's
/// path below the root, so it lines up with the tail of Go import paths.
fn package_path(root_name: &str, root: &Path, dir: &Path) -> String {
    let relative = dir.strip_prefix(root).unwrap_or(dir);
    std::iter::once(root_name.to_string())
        .chain(relative.components().filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        }))
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}
